//! Conjugate acid/base buffers under dropwise titration.
//!
//! Two regimes:
//! - **In capacity**: both conjugate components remain, pH follows
//!   Henderson–Hasselbalch.
//! - **Capacity exceeded**: the titrant has consumed one component entirely;
//!   the remaining weak species and the excess strong titrant set the pH.
//!
//! Moles are counted at the initial (reference) volume; concentrations are
//! normalized by the current total volume.

use crate::ph::ph_from_h_concentration;
use crate::titration::{Polarity, Titrant, TitrationSetup};
use ph_core::units::{Amount, Molarity, Volume, molar, to_molar, to_ratio};
use ph_core::{
    ChemConstants, PhError, PhResult, Tolerances, ensure_finite, ensure_positive, nearly_equal,
};
use serde::{Deserialize, Serialize};

/// Conjugate pairs offered as ready-made buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BufferPair {
    /// HC₂H₃O₂ / NaC₂H₃O₂
    #[serde(rename = "acetate")]
    AceticAcetate,
    /// NH₄Cl / NH₃
    #[serde(rename = "ammonia")]
    AmmoniumAmmonia,
    /// NaH₂PO₄ / Na₂HPO₄
    #[serde(rename = "phosphate")]
    Phosphate,
    /// NaHCO₃ / Na₂CO₃
    #[serde(rename = "carbonate")]
    BicarbonateCarbonate,
    /// H₂CO₃ / NaHCO₃
    #[serde(rename = "bicarbonate")]
    CarbonicBicarbonate,
}

impl BufferPair {
    pub const ALL: [BufferPair; 5] = [
        BufferPair::AceticAcetate,
        BufferPair::AmmoniumAmmonia,
        BufferPair::Phosphate,
        BufferPair::BicarbonateCarbonate,
        BufferPair::CarbonicBicarbonate,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::AceticAcetate => "acetate",
            Self::AmmoniumAmmonia => "ammonia",
            Self::Phosphate => "phosphate",
            Self::BicarbonateCarbonate => "carbonate",
            Self::CarbonicBicarbonate => "bicarbonate",
        }
    }

    pub fn acid_formula(self) -> &'static str {
        match self {
            Self::AceticAcetate => "HC\u{2082}H\u{2083}O\u{2082}",
            Self::AmmoniumAmmonia => "NH\u{2084}Cl",
            Self::Phosphate => "NaH\u{2082}PO\u{2084}",
            Self::BicarbonateCarbonate => "NaHCO\u{2083}",
            Self::CarbonicBicarbonate => "H\u{2082}CO\u{2083}",
        }
    }

    pub fn base_formula(self) -> &'static str {
        match self {
            Self::AceticAcetate => "NaC\u{2082}H\u{2083}O\u{2082}",
            Self::AmmoniumAmmonia => "NH\u{2083}",
            Self::Phosphate => "Na\u{2082}HPO\u{2084}",
            Self::BicarbonateCarbonate => "Na\u{2082}CO\u{2083}",
            Self::CarbonicBicarbonate => "NaHCO\u{2083}",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::AceticAcetate => "Acetic Acid / Sodium Acetate",
            Self::AmmoniumAmmonia => "Ammonium Chloride / Ammonia",
            Self::Phosphate => "Sodium Dihydrogen Phosphate / Disodium Hydrogen Phosphate",
            Self::BicarbonateCarbonate => "Sodium Bicarbonate / Sodium Carbonate",
            Self::CarbonicBicarbonate => "Carbonic Acid / Sodium Bicarbonate",
        }
    }

    pub fn pka(self, constants: &ChemConstants) -> f64 {
        let pka = &constants.pka;
        match self {
            Self::AceticAcetate => pka.acetic_acetate,
            Self::AmmoniumAmmonia => pka.ammonium_ammonia,
            Self::Phosphate => pka.phosphate,
            Self::BicarbonateCarbonate => pka.bicarbonate_carbonate,
            Self::CarbonicBicarbonate => pka.carbonic_bicarbonate,
        }
    }
}

impl std::fmt::Display for BufferPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} / {}: {}",
            self.acid_formula(),
            self.base_formula(),
            self.display_name()
        )
    }
}

impl std::str::FromStr for BufferPair {
    type Err = PhError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "acetate" | "acetic" | "hc2h3o2/nac2h3o2" => Ok(Self::AceticAcetate),
            "ammonia" | "ammonium" | "nh4cl/nh3" => Ok(Self::AmmoniumAmmonia),
            "phosphate" | "nah2po4/na2hpo4" => Ok(Self::Phosphate),
            "carbonate" | "nahco3/na2co3" => Ok(Self::BicarbonateCarbonate),
            "bicarbonate" | "carbonic" | "h2co3/nahco3" => Ok(Self::CarbonicBicarbonate),
            _ => Err(PhError::InvalidArg {
                what: "unknown buffer pair",
            }),
        }
    }
}

/// Initial composition of a buffer solution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BufferSystem {
    /// Weak acid (HA) concentration [mol/L].
    pub acid_concentration: f64,
    /// Conjugate base (A⁻) concentration [mol/L].
    pub base_concentration: f64,
    pub pka: f64,
}

impl BufferSystem {
    pub fn new(acid_concentration: f64, base_concentration: f64, pka: f64) -> PhResult<Self> {
        ensure_positive(acid_concentration, "buffer acid concentration")?;
        ensure_positive(base_concentration, "buffer base concentration")?;
        ensure_finite(pka, "pKa")?;
        Ok(Self {
            acid_concentration,
            base_concentration,
            pka,
        })
    }

    pub fn for_pair(
        pair: BufferPair,
        acid_concentration: f64,
        base_concentration: f64,
        constants: &ChemConstants,
    ) -> PhResult<Self> {
        Self::new(acid_concentration, base_concentration, pair.pka(constants))
    }
}

/// Result of the in-capacity calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BufferOutcome {
    InCapacity(f64),
    /// Titrant has used up the component it reacts with; use
    /// [`buffer_overflow_ph`] instead.
    CapacityExceeded,
}

impl BufferOutcome {
    pub fn ph(self) -> Option<f64> {
        match self {
            Self::InCapacity(ph) => Some(ph),
            Self::CapacityExceeded => None,
        }
    }

    pub fn is_exceeded(self) -> bool {
        matches!(self, Self::CapacityExceeded)
    }
}

/// pH of a buffer with the overflow branch already taken where needed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BufferReading {
    pub ph: f64,
    pub capacity_exceeded: bool,
}

struct MoleBalance {
    acid: Amount,
    base: Amount,
    titrant: Amount,
    /// Current volume, used to turn amounts back into concentrations.
    total: Volume,
}

impl MoleBalance {
    fn new(
        system: &BufferSystem,
        setup: &TitrationSetup,
        titrant: Titrant,
        drops: u32,
    ) -> PhResult<Self> {
        setup.validate()?;
        let molarity = titrant.validated_molarity()?;
        let reference = setup.initial_volume;
        Ok(Self {
            acid: molar(system.acid_concentration) * reference,
            base: molar(system.base_concentration) * reference,
            titrant: molar(molarity) * setup.volume_added(drops),
            total: setup.total_volume(drops),
        })
    }

    /// Whether the titrant has used up `component`.
    ///
    /// Exactly at the boundary the log ratio diverges; drop volumes rarely
    /// land there bit for bit, so equality is judged relatively.
    fn consumes(&self, component: Amount) -> bool {
        let tol = Tolerances {
            abs: 0.0,
            ..Tolerances::default()
        };
        self.titrant >= component || nearly_equal(self.titrant.value, component.value, tol)
    }

    fn concentration(&self, amount: Amount) -> f64 {
        let c: Molarity = (amount / self.total).into();
        to_molar(c)
    }
}

/// Henderson–Hasselbalch pH while the buffer still has capacity.
///
/// Returns [`BufferOutcome::CapacityExceeded`] once the titrant has consumed
/// the component it reacts with (the conjugate base for acid titrant, the
/// weak acid for base titrant).
pub fn buffer_ph(
    system: &BufferSystem,
    setup: &TitrationSetup,
    titrant: Titrant,
    drops: u32,
) -> PhResult<BufferOutcome> {
    let balance = MoleBalance::new(system, setup, titrant, drops)?;
    let consumed = match titrant.polarity {
        Polarity::Acid => balance.base,
        Polarity::Base => balance.acid,
    };
    if balance.consumes(consumed) {
        return Ok(BufferOutcome::CapacityExceeded);
    }
    let (ha, a) = match titrant.polarity {
        Polarity::Acid => (balance.acid + balance.titrant, balance.base - balance.titrant),
        Polarity::Base => (balance.acid - balance.titrant, balance.base + balance.titrant),
    };
    let ratio = to_ratio((a / balance.total) / (ha / balance.total));
    Ok(BufferOutcome::InCapacity(system.pka + ratio.log10()))
}

/// pH after buffer capacity is exceeded.
///
/// The limiting conjugate is assumed fully converted. The weak species it
/// formed contributes √(K·C) and the unreacted titrant adds its excess
/// directly.
pub fn buffer_overflow_ph(
    constants: &ChemConstants,
    system: &BufferSystem,
    setup: &TitrationSetup,
    titrant: Titrant,
    drops: u32,
) -> PhResult<f64> {
    let balance = MoleBalance::new(system, setup, titrant, drops)?;
    let ka = 10f64.powf(-system.pka);
    let converted = balance.concentration(balance.acid + balance.base);
    match titrant.polarity {
        Polarity::Acid => {
            let h_from_acid = (ka * converted).sqrt();
            let h_excess = balance.concentration(balance.titrant - balance.base);
            ph_from_h_concentration(h_from_acid + h_excess)
        }
        Polarity::Base => {
            let oh_from_base = (constants.kw * converted / ka).sqrt();
            let oh_excess = balance.concentration(balance.titrant - balance.acid);
            let oh = ensure_positive(oh_from_base + oh_excess, "hydroxide concentration")?;
            ph_from_h_concentration(constants.kw / oh)
        }
    }
}

/// Buffer pH, switching to the overflow model when capacity is exceeded.
pub fn buffer_reading(
    constants: &ChemConstants,
    system: &BufferSystem,
    setup: &TitrationSetup,
    titrant: Titrant,
    drops: u32,
) -> PhResult<BufferReading> {
    match buffer_ph(system, setup, titrant, drops)? {
        BufferOutcome::InCapacity(ph) => Ok(BufferReading {
            ph,
            capacity_exceeded: false,
        }),
        BufferOutcome::CapacityExceeded => Ok(BufferReading {
            ph: buffer_overflow_ph(constants, system, setup, titrant, drops)?,
            capacity_exceeded: true,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn acetate(acid: f64, base: f64) -> BufferSystem {
        BufferSystem::new(acid, base, 4.745).unwrap()
    }

    fn setup() -> TitrationSetup {
        TitrationSetup::from_constants(&ChemConstants::standard())
    }

    #[test]
    fn equal_components_without_titrant_sit_at_pka() {
        let system = acetate(0.1, 0.1);
        let outcome = buffer_ph(&system, &setup(), Titrant::acid(0.1), 0).unwrap();
        assert_eq!(outcome, BufferOutcome::InCapacity(4.745));
    }

    #[test]
    fn acid_lowers_and_base_raises_ph() {
        let system = acetate(0.1, 0.1);
        let down = buffer_ph(&system, &setup(), Titrant::acid(0.1), 10)
            .unwrap()
            .ph()
            .unwrap();
        let up = buffer_ph(&system, &setup(), Titrant::base(0.1), 10)
            .unwrap()
            .ph()
            .unwrap();
        assert!(down < 4.745);
        assert!(up > 4.745);
        // 0.036 mmol of titrant against 1 mmol of each component
        let expected = 4.745 + ((1.0 - 0.036) / (1.0 + 0.036f64)).log10();
        assert!((down - expected).abs() < 1e-9);
    }

    #[test]
    fn capacity_boundary() {
        // 0.001 M base in 10 mL = 0.01 mmol; each 0.1 M drop brings 0.0036 mmol
        let system = acetate(0.1, 0.001);
        let s = setup();
        assert!(!buffer_ph(&system, &s, Titrant::acid(0.1), 2).unwrap().is_exceeded());
        assert!(buffer_ph(&system, &s, Titrant::acid(0.1), 3).unwrap().is_exceeded());
        // base titrant still has the 1 mmol of acid to work through
        assert!(!buffer_ph(&system, &s, Titrant::base(0.1), 3).unwrap().is_exceeded());
    }

    #[test]
    fn overflow_is_acidic_or_basic() {
        let s = setup();
        let c = ChemConstants::standard();
        let system = acetate(0.001, 0.001);
        let acid = buffer_overflow_ph(&c, &system, &s, Titrant::acid(0.1), 100).unwrap();
        assert!(acid < 7.0);
        let base = buffer_overflow_ph(&c, &system, &s, Titrant::base(0.1), 100).unwrap();
        assert!(base > 7.0);
    }

    #[test]
    fn reading_routes_to_overflow() {
        let c = ChemConstants::standard();
        let system = acetate(0.1, 0.001);
        let reading = buffer_reading(&c, &system, &setup(), Titrant::acid(0.1), 50).unwrap();
        assert!(reading.capacity_exceeded);
        assert!(reading.ph < 4.745);

        let reading = buffer_reading(&c, &system, &setup(), Titrant::acid(0.1), 1).unwrap();
        assert!(!reading.capacity_exceeded);
    }

    #[test]
    fn pairs_parse_and_carry_pka() {
        let c = ChemConstants::standard();
        for pair in BufferPair::ALL {
            assert_eq!(pair.key().parse::<BufferPair>().unwrap(), pair);
        }
        assert_eq!(BufferPair::Phosphate.pka(&c), 7.208);
        assert!("citrate".parse::<BufferPair>().is_err());
    }

    #[test]
    fn rejects_non_positive_components() {
        assert!(BufferSystem::new(0.0, 0.1, 4.745).is_err());
        assert!(BufferSystem::new(0.1, -0.1, 4.745).is_err());
        assert!(BufferSystem::new(0.1, 0.1, f64::NAN).is_err());
    }
}
