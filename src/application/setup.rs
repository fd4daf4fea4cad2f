//! Setup Use Case
//!
//! Orchestrates a single run:
//! 1. Detect the project's convention
//! 2. Resolve the undetected case (flag or prompt)
//! 3. Run the plan's steps in order, stopping at the first failure
//!
//! This use case is pure orchestration - detection lives in the domain
//! `Detector`, all I/O goes through ports.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::domain::ports::{
    CommandRunner, NextStep, ProjectFs, Prompter, SetupEvent, SetupEventSink, NEXT_STEP_OPTIONS,
};
use crate::domain::services::{Detector, Plan};
use crate::domain::value_objects::project_files::DOT_VENV_DIR;
use crate::domain::value_objects::Action;
use crate::error::{StepFailure, VenvError, VenvResult};

/// How a run ended, when it did not fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupOutcome {
    /// An environment directory was already there; nothing ran
    AlreadyPresent { dir: PathBuf },
    /// Every step of the plan succeeded
    Completed { plan: Plan },
    /// The user chose to abort
    Aborted,
    /// A manifest was found but its backend is not supported; nothing ran
    Unrecognized { plan: Plan },
}

/// Setup use case, parameterized by its ports
pub struct SetupUseCase<FS, CR, P>
where
    FS: ProjectFs,
    CR: CommandRunner,
    P: Prompter,
{
    root: PathBuf,
    detector: Detector<FS>,
    runner: CR,
    prompter: P,
}

impl<FS, CR, P> SetupUseCase<FS, CR, P>
where
    FS: ProjectFs,
    CR: CommandRunner,
    P: Prompter,
{
    pub fn new(root: impl Into<PathBuf>, fs: FS, runner: CR, prompter: P) -> Self {
        Self {
            root: root.into(),
            detector: Detector::new(fs),
            runner,
            prompter,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Execute the use case.
    ///
    /// `preset` answers the "nothing detected" question up front so the
    /// prompt is never shown (the `--create` / `--abort` flags).
    pub fn execute(
        &self,
        preset: Option<NextStep>,
        sink: &dyn SetupEventSink,
    ) -> VenvResult<SetupOutcome> {
        let plan = self.detector.detect()?;
        debug!(plan = ?plan, "detected plan");

        match plan {
            Plan::ExistingEnvironment { dir } => {
                sink.on_event(SetupEvent::EnvironmentPresent { dir: dir.clone() });
                Ok(SetupOutcome::AlreadyPresent { dir })
            }
            Plan::UnrecognizedManifest { .. } => {
                sink.on_event(SetupEvent::Warning {
                    message: plan.summary(),
                });
                Ok(SetupOutcome::Unrecognized { plan })
            }
            Plan::Undetected => {
                sink.on_event(SetupEvent::Warning {
                    message: plan.summary(),
                });
                self.resolve_undetected(preset, sink)
            }
            _ => {
                sink.on_event(SetupEvent::Detected {
                    summary: plan.summary(),
                });
                self.run_actions(&plan.actions(), sink)?;
                sink.on_event(SetupEvent::Done);
                Ok(SetupOutcome::Completed { plan })
            }
        }
    }

    fn resolve_undetected(
        &self,
        preset: Option<NextStep>,
        sink: &dyn SetupEventSink,
    ) -> VenvResult<SetupOutcome> {
        let choice = match preset {
            Some(choice) => choice,
            None => {
                let index = self.prompter.select("What's next?", &NEXT_STEP_OPTIONS)?;
                NextStep::from_index(index).ok_or_else(|| {
                    VenvError::Internal(format!(
                        "somehow entered an unrecognised option in prompt: {}",
                        index
                    ))
                })?
            }
        };
        debug!(choice = ?choice, "next step");

        match choice {
            NextStep::Abort => {
                sink.on_event(SetupEvent::Aborted);
                Ok(SetupOutcome::Aborted)
            }
            NextStep::Create => {
                sink.on_event(SetupEvent::Detected {
                    summary: "Creating a new python virtual environment".to_string(),
                });
                self.run_actions(&[Action::CreateVenv, Action::UpgradeSeeds], sink)?;
                sink.on_event(SetupEvent::Done);
                Ok(SetupOutcome::Completed {
                    plan: Plan::Undetected,
                })
            }
        }
    }

    fn run_actions(&self, actions: &[Action], sink: &dyn SetupEventSink) -> VenvResult<()> {
        let mut venv_created = false;

        for action in actions {
            let invocation = action.invocation(&self.root);
            sink.on_event(SetupEvent::step(&invocation));
            info!(command = %invocation, cwd = %invocation.cwd.display(), "running");

            let failure = match self.runner.run(&invocation) {
                Ok(status) if status.is_success() => None,
                Ok(status) => Some(StepFailure::Exited(status)),
                Err(source) => Some(StepFailure::Spawn {
                    program: invocation.program.clone(),
                    source,
                }),
            };

            if let Some(source) = failure {
                let leftover = if venv_created || self.left_partial_venv(action) {
                    Some(PathBuf::from(DOT_VENV_DIR))
                } else {
                    None
                };
                return Err(VenvError::CommandFailed {
                    action: action.description(),
                    source,
                    leftover,
                });
            }

            venv_created |= action.creates_venv();
        }

        Ok(())
    }

    /// A failed `python -m venv` may still have created the directory
    fn left_partial_venv(&self, action: &Action) -> bool {
        if !action.creates_venv() {
            return false;
        }
        match self.detector.environment_exists(DOT_VENV_DIR) {
            Ok(exists) => exists,
            Err(err) => {
                debug!(error = %err, "could not check for a partial environment");
                false
            }
        }
    }
}
