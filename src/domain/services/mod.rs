//! Domain Services
//!
//! Stateless decision logic over the domain ports.

pub mod detector;

pub use detector::{Detector, Plan};
