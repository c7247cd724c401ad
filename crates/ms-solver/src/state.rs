//! Parameter holder for a single motion.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use ms_core::{MotionResult, Real};

use crate::calculator;

/// Values describing one constant-acceleration motion.
///
/// Fields are not validated on assignment; [`MotionState::displacement`]
/// checks them when it runs. Missing fields default to zero when
/// deserialized.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MotionState {
    pub time: Real,
    pub initial_coordinate: Real,
    pub initial_velocity: Real,
    /// Current velocity.
    pub velocity: Real,
    pub acceleration: Real,
}

impl MotionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_time(mut self, time: Real) -> Self {
        self.time = time;
        self
    }

    pub fn with_initial_coordinate(mut self, initial_coordinate: Real) -> Self {
        self.initial_coordinate = initial_coordinate;
        self
    }

    pub fn with_initial_velocity(mut self, initial_velocity: Real) -> Self {
        self.initial_velocity = initial_velocity;
        self
    }

    pub fn with_velocity(mut self, velocity: Real) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_acceleration(mut self, acceleration: Real) -> Self {
        self.acceleration = acceleration;
        self
    }

    /// Displacement over `time` using the stored initial velocity and acceleration.
    pub fn displacement(&self) -> MotionResult<Real> {
        calculator::displacement(self.time, self.initial_velocity, self.acceleration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ms_core::MotionError;

    #[test]
    fn displacement_uses_current_fields() {
        let mut state = MotionState::new()
            .with_time(10.0)
            .with_initial_velocity(5.0)
            .with_acceleration(2.0);
        assert_eq!(state.displacement().unwrap(), 150.0);

        // No caching: mutation is picked up by the next call.
        state.acceleration = 0.0;
        assert_eq!(state.displacement().unwrap(), 50.0);
    }

    #[test]
    fn coordinate_and_velocity_do_not_affect_displacement() {
        let state = MotionState::new()
            .with_time(2.0)
            .with_initial_coordinate(1_000.0)
            .with_velocity(-42.0)
            .with_initial_velocity(1.0)
            .with_acceleration(1.0);
        assert_eq!(state.displacement().unwrap(), 4.0);
    }

    #[test]
    fn negative_time_accepted_until_used() {
        let state = MotionState {
            time: -1.0,
            ..MotionState::default()
        };
        assert!(matches!(
            state.displacement(),
            Err(MotionError::InvalidArgument { .. })
        ));
    }
}
