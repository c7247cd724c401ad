//! Evaluators for one-dimensional motion under constant acceleration.
//!
//! Every function is pure. Operations taking a `time` reject negative (or NaN)
//! values with [`MotionError::InvalidArgument`] before doing any arithmetic.
//! Divisions whose denominator is effectively zero fail with
//! [`MotionError::DivisionByZero`] instead of producing infinities.

use std::fmt;

use ms_core::{MotionError, MotionResult, Real, Tolerances, is_effectively_zero, nearly_equal};
use tracing::{debug, warn};

/// Which kinematic relation [`resolve_time`] used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeRelation {
    /// `t = (v - v0) / a`
    VelocityChange,
    /// `t = (x - x0) / v_avg`, acceleration assumed zero
    CoordinateChange,
    /// `t = s / v_avg`, acceleration assumed zero
    Displacement,
}

impl TimeRelation {
    pub fn label(self) -> &'static str {
        match self {
            Self::VelocityChange => "velocity change over acceleration",
            Self::CoordinateChange => "coordinate change over average velocity",
            Self::Displacement => "displacement over average velocity",
        }
    }
}

impl fmt::Display for TimeRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Elapsed time together with the relation that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeSolution {
    pub time: Real,
    pub relation: TimeRelation,
}

/// Reject negative time. NaN is rejected as well since it is not `>= 0`.
pub fn validate_time(time: Real) -> MotionResult<Real> {
    if time >= 0.0 {
        Ok(time)
    } else {
        Err(MotionError::InvalidArgument {
            what: "time can't be negative",
            value: time,
        })
    }
}

#[inline]
fn divide(numerator: Real, denominator: Real, what: &'static str) -> MotionResult<Real> {
    if is_effectively_zero(denominator) {
        return Err(MotionError::DivisionByZero { what });
    }
    Ok(numerator / denominator)
}

/// Coordinate reached after `time`: `x = x0 + v0*t + a*t^2/2`.
pub fn coordinate_from_time(
    time: Real,
    initial_coordinate: Real,
    initial_velocity: Real,
    acceleration: Real,
) -> MotionResult<Real> {
    let t = validate_time(time)?;
    Ok(initial_coordinate + initial_velocity * t + acceleration * t * t * 0.5)
}

/// Displacement over `time`: `s = v0*t + a*t^2/2`.
pub fn displacement(time: Real, initial_velocity: Real, acceleration: Real) -> MotionResult<Real> {
    let t = validate_time(time)?;
    Ok(initial_velocity * t + acceleration * t * t * 0.5)
}

/// Displacement from the velocity change alone: `s = (v^2 - v0^2) / (2a)`.
pub fn displacement_without_time(
    velocity: Real,
    initial_velocity: Real,
    acceleration: Real,
) -> MotionResult<Real> {
    divide(
        velocity * velocity - initial_velocity * initial_velocity,
        2.0 * acceleration,
        "acceleration",
    )
}

/// Velocity after `time`: `v = v0 + a*t`.
pub fn velocity_from_time(
    time: Real,
    initial_velocity: Real,
    acceleration: Real,
) -> MotionResult<Real> {
    let t = validate_time(time)?;
    Ok(initial_velocity + acceleration * t)
}

/// Constant acceleration that takes `initial_velocity` to `velocity` in `time`.
pub fn acceleration(time: Real, velocity: Real, initial_velocity: Real) -> MotionResult<Real> {
    let t = validate_time(time)?;
    divide(velocity - initial_velocity, t, "time")
}

/// Elapsed time from whichever inputs are informative.
///
/// See [`resolve_time`] for the selection order.
pub fn derive_time(
    initial_coordinate: Real,
    final_coordinate: Real,
    initial_velocity: Real,
    final_velocity: Real,
    acceleration: Real,
    displacement: Real,
) -> MotionResult<Real> {
    resolve_time(
        initial_coordinate,
        final_coordinate,
        initial_velocity,
        final_velocity,
        acceleration,
        displacement,
    )
    .map(|solution| solution.time)
}

/// Elapsed time plus the relation used to obtain it.
///
/// Relations are tried in order, first match wins:
/// 1. non-zero acceleration: `(v - v0) / a`
/// 2. non-zero coordinate change: `(x - x0) / ((v0 + v) / 2)`
/// 3. non-zero displacement: `s / ((v0 + v) / 2)`
///
/// Branches 2 and 3 only run when acceleration is zero, so the velocity is
/// constant and the average velocity equals it. If none of acceleration,
/// coordinate change or displacement is distinguishable from zero the
/// result is [`MotionError::InsufficientData`].
///
/// Inputs are not checked for consistency; differing velocities under zero
/// acceleration are logged and the average is used.
pub fn resolve_time(
    initial_coordinate: Real,
    final_coordinate: Real,
    initial_velocity: Real,
    final_velocity: Real,
    acceleration: Real,
    displacement: Real,
) -> MotionResult<TimeSolution> {
    let average_velocity = (initial_velocity + final_velocity) * 0.5;
    let coordinate_change = final_coordinate - initial_coordinate;

    let (time, relation) = if !is_effectively_zero(acceleration) {
        (
            (final_velocity - initial_velocity) / acceleration,
            TimeRelation::VelocityChange,
        )
    } else if !is_effectively_zero(coordinate_change) {
        warn_if_velocity_changes(initial_velocity, final_velocity);
        (
            divide(coordinate_change, average_velocity, "average velocity")?,
            TimeRelation::CoordinateChange,
        )
    } else if !is_effectively_zero(displacement) {
        warn_if_velocity_changes(initial_velocity, final_velocity);
        (
            divide(displacement, average_velocity, "average velocity")?,
            TimeRelation::Displacement,
        )
    } else {
        return Err(MotionError::InsufficientData);
    };

    debug!(time, %relation, "derived elapsed time");
    Ok(TimeSolution { time, relation })
}

fn warn_if_velocity_changes(initial_velocity: Real, final_velocity: Real) {
    if !nearly_equal(initial_velocity, final_velocity, Tolerances::default()) {
        warn!(
            initial_velocity,
            final_velocity, "velocity changes without acceleration; using average velocity"
        );
    }
}
