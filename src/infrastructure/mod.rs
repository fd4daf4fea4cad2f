//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Project file system on disk
//! - `process` - External command runner
//! - `prompt` - Terminal menu

pub mod fs;
pub mod process;
pub mod prompt;

// Re-export for convenience
pub use fs::LocalFs;
pub use process::ProcessRunner;
pub use prompt::SelectPrompter;
