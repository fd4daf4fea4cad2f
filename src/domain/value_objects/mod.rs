//! Value Objects
//!
//! Immutable types describing what was detected and what to run.

pub mod action;
pub mod build_backend;
pub mod project_files;

pub use action::{venv_python, venv_python_relative, Action};
pub use build_backend::{BuildBackend, FLIT_MARKER, POETRY_MARKER};
