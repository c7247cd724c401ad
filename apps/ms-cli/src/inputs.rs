//! Argument checks shared by every subcommand.

use crate::error::CliResult;

/// Reject NaN and infinities before they reach the calculator.
pub fn check_finite(inputs: &[(&'static str, f64)]) -> CliResult<()> {
    for &(what, value) in inputs {
        ms_core::ensure_finite(value, what)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use ms_core::MotionError;

    #[test]
    fn finite_inputs_pass() {
        check_finite(&[("time", 10.0), ("v0", -5.0), ("accel", 0.0)]).unwrap();
    }

    #[test]
    fn first_non_finite_input_is_named() {
        let err = check_finite(&[("time", 1.0), ("v0", f64::NAN), ("accel", f64::INFINITY)])
            .unwrap_err();
        assert!(matches!(
            err,
            CliError::Motion(MotionError::NonFinite { what: "v0", .. })
        ));
    }
}
