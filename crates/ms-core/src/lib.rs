//! ms-core: shared foundation for motionsolver.
//!
//! Contains:
//! - numeric (Real + zero tolerance + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;

// Re-exports: nice ergonomics for downstream crates
pub use error::{MotionError, MotionResult};
pub use numeric::*;
