//! Prompt Port
//!
//! Asks the user what to do when no project convention was detected.

use crate::error::VenvResult;

/// Menu entries shown when nothing could be detected, in display order
pub const NEXT_STEP_OPTIONS: [&str; 2] = ["Create a new Environment", "Abort"];

/// The user's answer to "What's next?"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextStep {
    /// Create a bare virtual environment
    Create,
    /// Do nothing and exit successfully
    Abort,
}

impl NextStep {
    /// Map a menu index back to a choice
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(NextStep::Create),
            1 => Some(NextStep::Abort),
            _ => None,
        }
    }
}

/// Trait for asking the user to pick from a fixed menu.
///
/// Returns the selected index into `options`. Implementations:
/// - `SelectPrompter`: terminal menu
/// - `ScriptedPrompter`: canned answers, for tests
pub trait Prompter {
    fn select(&self, message: &str, options: &[&str]) -> VenvResult<usize>;
}

/// Prompter that always answers with a fixed index
#[cfg(test)]
pub struct ScriptedPrompter {
    pub answer: Result<usize, String>,
    pub asked: std::cell::Cell<usize>,
}

#[cfg(test)]
impl ScriptedPrompter {
    pub fn answering(index: usize) -> Self {
        Self {
            answer: Ok(index),
            asked: std::cell::Cell::new(0),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            answer: Err(message.to_string()),
            asked: std::cell::Cell::new(0),
        }
    }
}

#[cfg(test)]
impl Prompter for ScriptedPrompter {
    fn select(&self, _message: &str, _options: &[&str]) -> VenvResult<usize> {
        self.asked.set(self.asked.get() + 1);
        match &self.answer {
            Ok(index) => Ok(*index),
            Err(message) => Err(crate::error::VenvError::Prompt(message.clone())),
        }
    }
}
