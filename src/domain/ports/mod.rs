//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod command_runner;
pub mod file_system;
pub mod prompt;
pub mod setup_events;

pub use command_runner::{CommandRunner, CommandStatus, Invocation};
pub use file_system::{FsError, FsResult, ProjectFs};
pub use prompt::{NextStep, Prompter, NEXT_STEP_OPTIONS};
pub use setup_events::{NoopEventSink, SetupEvent, SetupEventSink};

#[cfg(test)]
pub use command_runner::RecordingRunner;
#[cfg(test)]
pub use file_system::MemoryFs;
#[cfg(test)]
pub use prompt::ScriptedPrompter;
#[cfg(test)]
pub use setup_events::RecordingSink;
