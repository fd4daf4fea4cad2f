//! Terminal Prompter
//!
//! Renders the "nothing detected" menu with `dialoguer`.

use dialoguer::Select;
use is_terminal::IsTerminal;

use crate::domain::ports::Prompter;
use crate::error::{VenvError, VenvResult};

/// Arrow-key menu on stderr
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectPrompter;

impl SelectPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for SelectPrompter {
    fn select(&self, message: &str, options: &[&str]) -> VenvResult<usize> {
        if !std::io::stdin().is_terminal() {
            return Err(VenvError::Prompt(
                "stdin is not a terminal; pass --create or --abort to choose non-interactively"
                    .to_string(),
            ));
        }

        Select::new()
            .with_prompt(message)
            .items(options)
            .default(0)
            .interact()
            .map_err(|e| VenvError::Prompt(e.to_string()))
    }
}
