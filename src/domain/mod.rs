//! Domain Layer
//!
//! Decision logic for setting up a Python project, without direct I/O.
//!
//! ## Structure
//!
//! - `value_objects/` - Immutable value types (Action, BuildBackend, file names)
//! - `services/` - The detector that turns probe results into a `Plan`
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or spawns processes directly
//! 2. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod ports;
pub mod services;
pub mod value_objects;
