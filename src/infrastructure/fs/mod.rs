//! File System Implementations
//!
//! Concrete implementations of the ProjectFs port.

mod local;

pub use local::LocalFs;
