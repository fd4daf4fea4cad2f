//! Terminal presentation for the venv binary

pub mod error;
pub mod output;
pub mod terminal;
pub mod theme;
