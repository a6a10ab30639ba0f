//! Reframe Common Utilities
//!
//! Shared infrastructure for all Reframe crates:
//! - Error types and result aliases
//! - Recording clock for session timing
//! - Cancellable periodic loop scheduling
//! - Tracing/logging initialization
//! - Configuration loading

pub mod clock;
pub mod config;
pub mod error;
pub mod logging;
pub mod sched;

pub use clock::*;
pub use config::*;
pub use error::*;
pub use sched::*;
