//! Closed-form [H+] for single dissolved species.
//!
//! Each function is the introductory-chemistry approximation for one regime:
//! the species dominates over water autoionization except where Kw enters
//! explicitly (strong bases and hydrolyzing salts). Inputs are molar
//! concentrations; results are [H+] in mol/L.

use crate::species::SpeciesKind;
use ph_core::{PhError, PhResult, ensure_positive};

const CONC: &str = "concentration";

/// [H+] = C
pub fn h_strong_acid(conc: f64) -> PhResult<f64> {
    ensure_positive(conc, CONC)
}

/// [H+] = Kw / (n·C), n hydroxides per formula unit.
pub fn h_strong_base(kw: f64, conc: f64, hydroxides: u8) -> PhResult<f64> {
    let conc = ensure_positive(conc, CONC)?;
    if hydroxides == 0 {
        return Err(PhError::InvalidArg {
            what: "strong base needs at least one hydroxide",
        });
    }
    let oh = f64::from(hydroxides) * conc;
    Ok(kw / oh)
}

/// [H+] = √(Ka·C)
pub fn h_weak_acid(ka: f64, conc: f64) -> PhResult<f64> {
    let conc = ensure_positive(conc, CONC)?;
    let ka = ensure_positive(ka, "Ka")?;
    Ok((ka * conc).sqrt())
}

/// [H+] = Kw / √(Kb·C)
pub fn h_weak_base(kw: f64, kb: f64, conc: f64) -> PhResult<f64> {
    let conc = ensure_positive(conc, CONC)?;
    let kb = ensure_positive(kb, "Kb")?;
    Ok(kw / (kb * conc).sqrt())
}

/// [H+] = √((Kw/Kb)·C)
pub fn h_acidic_salt(kw: f64, kb: f64, conc: f64) -> PhResult<f64> {
    let conc = ensure_positive(conc, CONC)?;
    let kb = ensure_positive(kb, "Kb")?;
    Ok(((kw / kb) * conc).sqrt())
}

/// [H+] = Kw / √((Kw/Ka)·C)
pub fn h_basic_salt(kw: f64, ka: f64, conc: f64) -> PhResult<f64> {
    let conc = ensure_positive(conc, CONC)?;
    let ka = ensure_positive(ka, "Ka")?;
    Ok(kw / ((kw / ka) * conc).sqrt())
}

impl SpeciesKind {
    /// [H+] for this regime at `conc`.
    ///
    /// Returns `Ok(None)` for a neutral salt, whose pH is a fixed constant
    /// rather than derived from [H+].
    pub fn h_concentration(&self, kw: f64, conc: f64) -> PhResult<Option<f64>> {
        let h = match *self {
            SpeciesKind::StrongAcid => h_strong_acid(conc)?,
            SpeciesKind::StrongBase { hydroxides } => h_strong_base(kw, conc, hydroxides)?,
            SpeciesKind::WeakAcid { ka } | SpeciesKind::AcidSaltSurrogate { ka } => {
                h_weak_acid(ka, conc)?
            }
            SpeciesKind::WeakBase { kb } => h_weak_base(kw, kb, conc)?,
            SpeciesKind::AcidicSalt { kb } => h_acidic_salt(kw, kb, conc)?,
            SpeciesKind::BasicSalt { ka } => h_basic_salt(kw, ka, conc)?,
            SpeciesKind::NeutralSalt => {
                ensure_positive(conc, CONC)?;
                return Ok(None);
            }
        };
        Ok(Some(h))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KW: f64 = 1e-14;

    fn close(a: f64, b: f64, rel: f64) -> bool {
        (a - b).abs() <= rel * b.abs()
    }

    #[test]
    fn strong_acid_is_identity() {
        assert_eq!(h_strong_acid(0.01).unwrap(), 0.01);
        assert!(matches!(h_strong_acid(0.0), Err(PhError::Domain { .. })));
    }

    #[test]
    fn strong_bases_count_hydroxides() {
        assert!(close(h_strong_base(KW, 0.01, 1).unwrap(), 1e-12, 1e-12));
        assert!(close(h_strong_base(KW, 0.01, 2).unwrap(), 5e-13, 1e-12));
        assert!(matches!(
            h_strong_base(KW, 0.01, 0),
            Err(PhError::InvalidArg { .. })
        ));
    }

    #[test]
    fn weak_acid_and_base() {
        assert!(close(h_weak_acid(1.8e-5, 0.01).unwrap(), 4.2426e-4, 1e-4));
        // pOH of 0.1 M ammonia is about 2.87
        let h = h_weak_base(KW, 1.8e-5, 0.1).unwrap();
        assert!(close(h, KW / (1.8e-6f64).sqrt(), 1e-12));
    }

    #[test]
    fn hydrolyzing_salts() {
        // ammonium chloride is acidic, sodium acetate basic
        let h = h_acidic_salt(KW, 1.8e-5, 0.1).unwrap();
        assert!(close(h, 7.4536e-6, 1e-4));
        let h = h_basic_salt(KW, 1.8e-5, 0.1).unwrap();
        assert!(close(h, 1.3416e-9, 1e-4));
        assert!(close(h_basic_salt(KW, 5.6e-11, 0.1).unwrap(), 2.3664e-12, 1e-4));
        assert!(h_basic_salt(KW, 0.0, 0.1).is_err());
    }

    #[test]
    fn neutral_salt_has_no_h_formula() {
        assert_eq!(SpeciesKind::NeutralSalt.h_concentration(KW, 0.05), Ok(None));
        assert!(SpeciesKind::NeutralSalt.h_concentration(KW, -0.05).is_err());
    }

    #[test]
    fn surrogate_matches_weak_acid() {
        let kind = SpeciesKind::AcidSaltSurrogate { ka: 1.2e-2 };
        assert_eq!(
            kind.h_concentration(KW, 0.01).unwrap(),
            Some(h_weak_acid(1.2e-2, 0.01).unwrap())
        );
    }
}
