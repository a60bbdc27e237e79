use crate::PhError;

/// Floating point type used throughout system
pub type Real = f64;

/// One tolerance for everything
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

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, PhError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(PhError::NonFinite { what, value: v })
    }
}

/// Reject anything that cannot go into a logarithm, square root or divisor.
pub fn ensure_positive(v: Real, what: &'static str) -> Result<Real, PhError> {
    if v.is_finite() && v > 0.0 {
        Ok(v)
    } else {
        Err(PhError::Domain { what, value: v })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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
    }

    #[test]
    fn ensure_positive_rejects_zero_negative_and_nan() {
        assert_eq!(ensure_positive(0.01, "c"), Ok(0.01));
        assert!(matches!(
            ensure_positive(0.0, "c"),
            Err(PhError::Domain { what: "c", .. })
        ));
        assert!(ensure_positive(-1e-3, "c").is_err());
        assert!(ensure_positive(Real::NAN, "c").is_err());
        assert!(ensure_positive(Real::INFINITY, "c").is_err());
    }
}
