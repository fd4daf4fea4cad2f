//! Setup Event Port
//!
//! User-facing progress reporting for the setup use case. The use case never
//! prints directly; the binary renders these events to the terminal.

use std::path::PathBuf;

use crate::domain::ports::Invocation;

/// Event emitted while setting up an environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupEvent {
    /// An environment directory already exists
    EnvironmentPresent { dir: PathBuf },

    /// A convention was detected and is about to be installed
    Detected { summary: String },

    /// A detected or chosen step is starting
    StepStarted { command: String },

    /// Something the user should know about, not fatal
    Warning { message: String },

    /// User asked to abort
    Aborted,

    /// All steps finished successfully
    Done,
}

impl SetupEvent {
    pub fn step(invocation: &Invocation) -> Self {
        SetupEvent::StepStarted {
            command: invocation.to_string(),
        }
    }
}

/// Trait for receiving setup events
///
/// Implementations can be:
/// - ConsoleEventSink: printed messages in the terminal
/// - NoopEventSink: silent operation
pub trait SetupEventSink {
    fn on_event(&self, event: SetupEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl SetupEventSink for NoopEventSink {
    fn on_event(&self, _event: SetupEvent) {}
}

/// Event sink that keeps every event, for tests
#[cfg(test)]
#[derive(Default)]
pub struct RecordingSink {
    events: std::cell::RefCell<Vec<SetupEvent>>,
}

#[cfg(test)]
impl RecordingSink {
    pub fn events(&self) -> Vec<SetupEvent> {
        self.events.borrow().clone()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                SetupEvent::Warning { message } => Some(message),
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
impl SetupEventSink for RecordingSink {
    fn on_event(&self, event: SetupEvent) {
        self.events.borrow_mut().push(event);
    }
}
