//! Common test utilities for venv CLI tests.
//!
//! - `TestEnv`: temp project directory with fake external tools on `PATH`

pub mod env;

pub use env::*;
