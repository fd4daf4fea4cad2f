//! Process Runner
//!
//! Spawns external commands with the terminal's standard streams attached,
//! so pip/poetry/flit output reaches the user unmodified.

use std::process::{Command, Stdio};

use tracing::debug;

use crate::domain::ports::{CommandRunner, CommandStatus, Invocation};

/// Command runner that spawns real processes and waits for them
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl ProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for ProcessRunner {
    fn run(&self, invocation: &Invocation) -> std::io::Result<CommandStatus> {
        debug!(
            program = %invocation.program.display(),
            args = ?invocation.args,
            cwd = %invocation.cwd.display(),
            "spawning"
        );

        let status = Command::new(&invocation.program)
            .args(&invocation.args)
            .current_dir(&invocation.cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()?;

        debug!(status = ?status, "process exited");
        Ok(CommandStatus {
            code: status.code(),
        })
    }
}
