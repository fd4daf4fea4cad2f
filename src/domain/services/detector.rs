//! Project Detector
//!
//! Walks the fixed priority list of project conventions and returns the first
//! one that matches. Pure decision logic: the only I/O goes through the
//! `ProjectFs` port.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::ports::{FsError, ProjectFs};
use crate::domain::value_objects::project_files::{
    ENV_DIRS, PYPROJECT_TOML, REQUIREMENTS_FILES, SETUP_CFG, SETUP_PY,
};
use crate::domain::value_objects::{Action, BuildBackend};
use crate::error::{ManifestError, VenvError, VenvResult};

/// What the detector decided to do with the project
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Plan {
    /// `.venv` or `venv` already exists
    ExistingEnvironment { dir: PathBuf },
    /// A requirements file drives the install
    Requirements { file: String },
    /// `pyproject.toml` alongside a setuptools config
    Setuptools { config_file: String, dev_extras: bool },
    /// `pyproject.toml` declaring the Poetry backend
    Poetry,
    /// `pyproject.toml` declaring the Flit backend
    Flit,
    /// `pyproject.toml` with a backend we cannot install
    UnrecognizedManifest { backend: BuildBackend },
    /// No convention found
    Undetected,
}

impl Plan {
    /// Steps to run, in order. Empty for plans that take no action.
    pub fn actions(&self) -> Vec<Action> {
        match self {
            Plan::Requirements { file } => vec![
                Action::CreateVenv,
                Action::UpgradeSeeds,
                Action::InstallRequirements { file: file.clone() },
            ],
            Plan::Setuptools { dev_extras, .. } => vec![
                Action::CreateVenv,
                Action::UpgradeSeeds,
                Action::InstallEditable {
                    dev_extras: *dev_extras,
                },
            ],
            Plan::Poetry => vec![Action::PoetryInstall],
            Plan::Flit => vec![Action::FlitInstall],
            Plan::ExistingEnvironment { .. }
            | Plan::UnrecognizedManifest { .. }
            | Plan::Undetected => Vec::new(),
        }
    }

    /// One-line explanation shown before the steps run
    pub fn summary(&self) -> String {
        match self {
            Plan::ExistingEnvironment { dir } => format!(
                "There is already a virtual environment in this directory: {:?}",
                dir.display().to_string()
            ),
            Plan::Requirements { file } => format!(
                "Found {:?}. Creating virtual environment and installing requirements",
                file
            ),
            Plan::Setuptools { config_file, .. } => format!(
                "Found {:?} with {:?}. Creating virtual environment and installing dependencies (setuptools)",
                PYPROJECT_TOML, config_file
            ),
            Plan::Poetry => format!("Found {:?} specifying poetry. Installing...", PYPROJECT_TOML),
            Plan::Flit => format!("Found {:?} specifying flit. Installing...", PYPROJECT_TOML),
            Plan::UnrecognizedManifest { backend } => format!(
                "Found {:?} but its build backend ({}) is not setuptools, poetry or flit. Nothing to do",
                PYPROJECT_TOML, backend
            ),
            Plan::Undetected => "Cannot auto-detect project environment".to_string(),
        }
    }
}

/// Decides which plan applies to a project
pub struct Detector<FS: ProjectFs> {
    fs: FS,
}

impl<FS: ProjectFs> Detector<FS> {
    pub fn new(fs: FS) -> Self {
        Self { fs }
    }

    /// Evaluate the conventions in priority order; first match wins.
    pub fn detect(&self) -> VenvResult<Plan> {
        for dir in ENV_DIRS {
            if self.has_dir(dir)? {
                debug!(venv_directory = dir, "virtual environment directory found");
                return Ok(Plan::ExistingEnvironment {
                    dir: PathBuf::from(dir),
                });
            }
        }

        for file in REQUIREMENTS_FILES {
            if self.has_file(file)? {
                debug!(requirements_file = file, "requirements file found");
                return Ok(Plan::Requirements {
                    file: file.to_string(),
                });
            }
        }

        if self.has_file(PYPROJECT_TOML)? {
            debug!("{} found", PYPROJECT_TOML);
            return self.detect_pyproject();
        }

        debug!("cannot detect environment for project");
        Ok(Plan::Undetected)
    }

    fn detect_pyproject(&self) -> VenvResult<Plan> {
        // pip falls back to a plain editable install when `[dev]` is not defined
        for (config_file, dev_extras) in [(SETUP_CFG, true), (SETUP_PY, false)] {
            if self.has_file(config_file)? {
                debug!(setuptools_file = config_file, "found setuptools file");
                return Ok(Plan::Setuptools {
                    config_file: config_file.to_string(),
                    dev_extras,
                });
            }
        }

        debug!("project not setuptools based, checking for poetry or flit");
        let backend = self.read_backend(Path::new(PYPROJECT_TOML))?;
        debug!(file = PYPROJECT_TOML, backend = %backend, "build backend");

        Ok(match backend {
            BuildBackend::Poetry => Plan::Poetry,
            BuildBackend::Flit => Plan::Flit,
            other => Plan::UnrecognizedManifest { backend: other },
        })
    }

    /// Whether the environment directory `name` exists right now
    pub fn environment_exists(&self, name: &str) -> VenvResult<bool> {
        self.has_dir(name)
    }

    fn read_backend(&self, path: &Path) -> VenvResult<BuildBackend> {
        let content = self.fs.read_to_string(path).map_err(|source| match source {
            FsError::Io(err) if err.kind() == ErrorKind::InvalidData => VenvError::Manifest {
                path: path.to_path_buf(),
                source: ManifestError::Encoding(err),
            },
            source => VenvError::Probe {
                path: path.to_path_buf(),
                source,
            },
        })?;

        BuildBackend::from_manifest(&content).map_err(|e| VenvError::Manifest {
            path: path.to_path_buf(),
            source: ManifestError::syntax(&content, e),
        })
    }

    fn has_file(&self, name: &str) -> VenvResult<bool> {
        debug!(file = name, "looking for file");
        let path = Path::new(name);
        self.fs.is_file(path).map_err(|source| VenvError::Probe {
            path: path.to_path_buf(),
            source,
        })
    }

    fn has_dir(&self, name: &str) -> VenvResult<bool> {
        debug!(directory = name, "looking for directory");
        let path = Path::new(name);
        self.fs.is_dir(path).map_err(|source| VenvError::Probe {
            path: path.to_path_buf(),
            source,
        })
    }
}
