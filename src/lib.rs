//! venv - take the pain out of Python virtual environments
//!
//! Looks at the current directory for signs of how a Python project manages
//! its dependencies (requirements files, `pyproject.toml` build backends,
//! existing environments) and runs the matching `python -m venv`, `pip`,
//! `poetry` or `flit` commands. When nothing is recognised the user is asked
//! what to do.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

// Re-exports for convenience
pub use application::{SetupOutcome, SetupUseCase};
pub use config::Config;
pub use domain::ports::NextStep;
pub use domain::services::Plan;
pub use error::{ManifestError, StepFailure, VenvError, VenvResult};
pub use infrastructure::{LocalFs, ProcessRunner, SelectPrompter};
