//! Command Runner Port
//!
//! Abstraction over spawning an external program and waiting for it.
//! The real implementation inherits the terminal's standard streams; tests
//! substitute a recorder that returns canned statuses.

use std::fmt;
use std::path::PathBuf;

/// A fully resolved external command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Program name (looked up on `PATH`) or absolute path
    pub program: PathBuf,
    /// Arguments passed verbatim
    pub args: Vec<String>,
    /// Working directory for the child process
    pub cwd: PathBuf,
}

impl Invocation {
    pub fn new(program: impl Into<PathBuf>, args: &[&str], cwd: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: args.iter().map(|a| a.to_string()).collect(),
            cwd: cwd.into(),
        }
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// How a finished child process exited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandStatus {
    /// Exit code, `None` when terminated by a signal
    pub code: Option<i32>,
}

impl CommandStatus {
    pub fn success() -> Self {
        Self { code: Some(0) }
    }

    pub fn failure(code: i32) -> Self {
        Self { code: Some(code) }
    }

    pub fn is_success(&self) -> bool {
        self.code == Some(0)
    }
}

impl fmt::Display for CommandStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "exit status: {}", code),
            None => write!(f, "terminated by signal"),
        }
    }
}

/// Runs external commands to completion
///
/// Implementations:
/// - `ProcessRunner`: spawns real processes with inherited stdio
/// - `RecordingRunner`: records invocations, for tests
pub trait CommandRunner {
    /// Run `invocation` and block until it exits.
    ///
    /// `Err` means the process could not be spawned at all.
    fn run(&self, invocation: &Invocation) -> std::io::Result<CommandStatus>;
}

/// Test runner that records every invocation and replays scripted results
///
/// Invocations whose program file name matches a registered failure return
/// that exit code; everything else succeeds.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingRunner {
    calls: std::sync::Mutex<Vec<Invocation>>,
    failures: std::collections::HashMap<String, Option<i32>>,
}

#[cfg(test)]
impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make invocations matching `args_prefix` exit with `code`
    pub fn fail_on(mut self, args_prefix: &str, code: i32) -> Self {
        self.failures.insert(args_prefix.to_string(), Some(code));
        self
    }

    /// Make invocations matching `args_prefix` fail to spawn
    pub fn missing(mut self, args_prefix: &str) -> Self {
        self.failures.insert(args_prefix.to_string(), None);
        self
    }

    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.lock().unwrap().clone()
    }

    pub fn command_lines(&self) -> Vec<String> {
        self.calls().iter().map(|c| c.args.join(" ")).collect()
    }
}

#[cfg(test)]
impl CommandRunner for RecordingRunner {
    fn run(&self, invocation: &Invocation) -> std::io::Result<CommandStatus> {
        self.calls.lock().unwrap().push(invocation.clone());

        let line = invocation.args.join(" ");
        for (prefix, outcome) in &self.failures {
            if line.starts_with(prefix.as_str()) {
                return match outcome {
                    Some(code) => Ok(CommandStatus::failure(*code)),
                    None => Err(std::io::Error::new(
                        std::io::ErrorKind::NotFound,
                        "program not found",
                    )),
                };
            }
        }
        Ok(CommandStatus::success())
    }
}
