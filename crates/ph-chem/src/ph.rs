//! Conversion between hydrogen-ion concentration and pH.

use ph_core::constants::NEUTRAL_PH;
use ph_core::{PhResult, ensure_finite, ensure_positive};

/// pH = -log10([H+]).
///
/// Fails with a domain error for zero, negative or non-finite `[H+]`.
pub fn ph_from_h_concentration(h: f64) -> PhResult<f64> {
    let h = ensure_positive(h, "hydrogen-ion concentration")?;
    Ok(-h.log10())
}

/// [H+] = 10^(-pH).
pub fn h_concentration_from_ph(ph: f64) -> PhResult<f64> {
    let ph = ensure_finite(ph, "pH")?;
    Ok(10f64.powf(-ph))
}

/// Sodium chloride does not hydrolyze: its pH is fixed rather than derived.
pub fn ph_nacl() -> f64 {
    NEUTRAL_PH
}

#[cfg(test)]
mod tests {
    use super::*;
    use ph_core::PhError;

    #[test]
    fn known_points() {
        assert!((ph_from_h_concentration(1e-2).unwrap() - 2.0).abs() < 1e-12);
        assert!((ph_from_h_concentration(1e-7).unwrap() - 7.0).abs() < 1e-12);
        assert!((ph_from_h_concentration(5.0e-13).unwrap() - 12.301).abs() < 1e-3);
        assert!((ph_from_h_concentration(4.24e-4).unwrap() - 3.372).abs() < 1e-3);
    }

    #[test]
    fn rejects_non_positive() {
        assert!(matches!(
            ph_from_h_concentration(0.0),
            Err(PhError::Domain { .. })
        ));
        assert!(ph_from_h_concentration(-1e-7).is_err());
        assert!(ph_from_h_concentration(f64::NAN).is_err());
    }

    #[test]
    fn nacl_is_neutral() {
        assert_eq!(ph_nacl(), 7.00);
    }

    #[test]
    fn inverse_of_known_ph() {
        let h = h_concentration_from_ph(12.301).unwrap();
        assert!((h - 5.00e-13).abs() < 1e-15);
        assert!(h_concentration_from_ph(f64::INFINITY).is_err());
    }
}
