//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `SetupUseCase` - Detect the project convention and run its install steps

pub mod setup;

pub use setup::{SetupOutcome, SetupUseCase};
