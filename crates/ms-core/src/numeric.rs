use crate::MotionError;

/// Floating point type used throughout system
pub type Real = f64;

/// Smallest positive representable `Real` (subnormal).
///
/// A value whose magnitude does not exceed this is indistinguishable from zero.
pub const ZERO_TOL: Real = Real::from_bits(1);

/// True when `v` cannot be told apart from zero. NaN is never effectively zero.
#[inline]
pub fn is_effectively_zero(v: Real) -> bool {
    v.abs() <= ZERO_TOL
}

/// Absolute/relative tolerance pair for comparing computed results
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, MotionError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(MotionError::NonFinite { what, value: v })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_tol_is_smallest_subnormal() {
        assert!(ZERO_TOL > 0.0);
        assert_eq!(ZERO_TOL / 2.0, 0.0);
        assert!(ZERO_TOL < Real::MIN_POSITIVE);
    }

    #[test]
    fn effectively_zero_only_for_zero() {
        assert!(is_effectively_zero(0.0));
        assert!(is_effectively_zero(-0.0));
        assert!(is_effectively_zero(ZERO_TOL));
        assert!(!is_effectively_zero(1e-300));
        assert!(!is_effectively_zero(-2.0 * ZERO_TOL));
        assert!(!is_effectively_zero(Real::NAN));
    }

    #[test]
    fn nearly_equal_basic() {
        let tol = Tolerances {
            abs: 1e-12,
            rel: 1e-9,
        };
        assert!(nearly_equal(1.0, 1.0 + 1e-12, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(1.0, 1.0 + 1e-6, tol));
    }

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
        assert_eq!(ensure_finite(2.5, "test").unwrap(), 2.5);
    }
}
