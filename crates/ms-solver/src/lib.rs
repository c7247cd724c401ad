//! Constant-acceleration kinematics for motionsolver.
//!
//! Pure evaluators for the uniformly-accelerated-motion equations plus a
//! dispatcher that derives elapsed time from whichever inputs carry
//! information. [`MotionState`] is a plain parameter holder for callers that
//! want to keep one motion's values together.

pub mod calculator;
pub mod state;

pub use calculator::{
    TimeRelation, TimeSolution, acceleration, coordinate_from_time, derive_time, displacement,
    displacement_without_time, resolve_time, validate_time, velocity_from_time,
};
pub use ms_core::{MotionError, MotionResult, Real};
pub use state::MotionState;
