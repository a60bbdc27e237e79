//! Dropwise titration of water with a strong acid or base.
//!
//! The caller owns the drop count. Each drop adds a fixed volume of titrant to
//! a fixed initial volume; water's own [H+] (or [OH-]) is added in
//! superposition rather than solved exactly.

use ph_core::units::{Volume, to_ratio};
use ph_core::{ChemConstants, PhError, PhResult, ensure_finite, ensure_positive};
use serde::{Deserialize, Serialize};

/// Whether the titrant is a strong acid or a strong base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Acid,
    Base,
}

impl std::str::FromStr for Polarity {
    type Err = PhError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "acid" => Ok(Self::Acid),
            "base" => Ok(Self::Base),
            _ => Err(PhError::InvalidArg {
                what: "polarity must be 'acid' or 'base'",
            }),
        }
    }
}

/// Strong titrant added drop by drop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Titrant {
    /// Molar concentration of the titrant [mol/L].
    pub molarity: f64,
    pub polarity: Polarity,
}

impl Titrant {
    pub fn acid(molarity: f64) -> Self {
        Self {
            molarity,
            polarity: Polarity::Acid,
        }
    }

    pub fn base(molarity: f64) -> Self {
        Self {
            molarity,
            polarity: Polarity::Base,
        }
    }

    /// No reagent selected: drops carry nothing.
    pub fn none() -> Self {
        Self::acid(0.0)
    }

    pub(crate) fn validated_molarity(&self) -> PhResult<f64> {
        let m = ensure_finite(self.molarity, "titrant molarity")?;
        if m < 0.0 {
            return Err(PhError::Domain {
                what: "titrant molarity",
                value: m,
            });
        }
        Ok(m)
    }
}

/// Dropper bottles available next to the beaker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DropReagent {
    #[serde(rename = "hcl-0.1")]
    HclDecimolar,
    #[serde(rename = "hcl-0.01")]
    HclCentimolar,
    #[serde(rename = "naoh-0.1")]
    NaohDecimolar,
    #[serde(rename = "naoh-0.01")]
    NaohCentimolar,
}

impl DropReagent {
    pub const ALL: [DropReagent; 4] = [
        DropReagent::HclDecimolar,
        DropReagent::HclCentimolar,
        DropReagent::NaohDecimolar,
        DropReagent::NaohCentimolar,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::HclDecimolar => "hcl-0.1",
            Self::HclCentimolar => "hcl-0.01",
            Self::NaohDecimolar => "naoh-0.1",
            Self::NaohCentimolar => "naoh-0.01",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::HclDecimolar => "0.1 M HCl",
            Self::HclCentimolar => "0.01 M HCl",
            Self::NaohDecimolar => "0.1 M NaOH",
            Self::NaohCentimolar => "0.01 M NaOH",
        }
    }

    pub fn titrant(self) -> Titrant {
        match self {
            Self::HclDecimolar => Titrant::acid(0.1),
            Self::HclCentimolar => Titrant::acid(0.01),
            Self::NaohDecimolar => Titrant::base(0.1),
            Self::NaohCentimolar => Titrant::base(0.01),
        }
    }
}

impl std::str::FromStr for DropReagent {
    type Err = PhError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .to_ascii_lowercase()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        match normalized.as_str() {
            "hcl-0.1" | "0.1mhcl" => Ok(Self::HclDecimolar),
            "hcl-0.01" | "0.01mhcl" => Ok(Self::HclCentimolar),
            "naoh-0.1" | "0.1mnaoh" => Ok(Self::NaohDecimolar),
            "naoh-0.01" | "0.01mnaoh" => Ok(Self::NaohCentimolar),
            _ => Err(PhError::InvalidArg {
                what: "unknown drop reagent",
            }),
        }
    }
}

/// Volume bookkeeping for a dropwise addition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TitrationSetup {
    pub initial_volume: Volume,
    pub drop_volume: Volume,
}

impl TitrationSetup {
    pub fn from_constants(constants: &ChemConstants) -> Self {
        Self {
            initial_volume: constants.reference_volume(),
            drop_volume: constants.drop_volume(),
        }
    }

    pub fn with_initial_volume(mut self, initial_volume: Volume) -> Self {
        self.initial_volume = initial_volume;
        self
    }

    pub(crate) fn validate(&self) -> PhResult<()> {
        ensure_positive(self.initial_volume.value, "initial volume")?;
        ensure_positive(self.drop_volume.value, "drop volume")?;
        Ok(())
    }

    pub fn volume_added(&self, drops: u32) -> Volume {
        self.drop_volume * f64::from(drops)
    }

    pub fn total_volume(&self, drops: u32) -> Volume {
        self.initial_volume + self.volume_added(drops)
    }

    /// Share of the current volume that came from the dropper.
    pub fn titrant_fraction(&self, drops: u32) -> f64 {
        to_ratio(self.volume_added(drops) / self.total_volume(drops))
    }
}

/// Total volume after `drops` drops have been added to `initial_volume`.
pub fn total_volume(constants: &ChemConstants, initial_volume: Volume, drops: u32) -> Volume {
    TitrationSetup::from_constants(constants)
        .with_initial_volume(initial_volume)
        .total_volume(drops)
}

/// [H+] of water after `drops` drops of `titrant`.
pub fn h_conc_titration(
    constants: &ChemConstants,
    setup: &TitrationSetup,
    titrant: Titrant,
    drops: u32,
) -> PhResult<f64> {
    setup.validate()?;
    let molarity = titrant.validated_molarity()?;
    let delivered = molarity * setup.titrant_fraction(drops) + constants.water_h;
    match titrant.polarity {
        Polarity::Acid => Ok(delivered),
        Polarity::Base => Ok(constants.kw / delivered),
    }
}

/// [H+] of water titrated with `polarity` titrant of `drop_molarity`.
pub fn h_conc_titration_general(
    constants: &ChemConstants,
    drop_molarity: f64,
    drops: u32,
    initial_volume: Volume,
    polarity: Polarity,
) -> PhResult<f64> {
    let setup = TitrationSetup::from_constants(constants).with_initial_volume(initial_volume);
    let titrant = Titrant {
        molarity: drop_molarity,
        polarity,
    };
    h_conc_titration(constants, &setup, titrant, drops)
}

/// Water titrated with HCl.
pub fn h_conc_titration_hcl(
    constants: &ChemConstants,
    drop_molarity: f64,
    drops: u32,
    initial_volume: Volume,
) -> PhResult<f64> {
    h_conc_titration_general(constants, drop_molarity, drops, initial_volume, Polarity::Acid)
}

/// Water titrated with NaOH.
pub fn h_conc_titration_naoh(
    constants: &ChemConstants,
    drop_molarity: f64,
    drops: u32,
    initial_volume: Volume,
) -> PhResult<f64> {
    h_conc_titration_general(constants, drop_molarity, drops, initial_volume, Polarity::Base)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ph::ph_from_h_concentration;
    use ph_core::units::{ml, to_ml};

    #[test]
    fn zero_drops_is_pure_water() {
        let c = ChemConstants::standard();
        let h = h_conc_titration_hcl(&c, 0.1, 0, ml(10.0)).unwrap();
        assert_eq!(h, 1e-7);
        let h = h_conc_titration_naoh(&c, 0.1, 0, ml(10.0)).unwrap();
        assert!((h - 1e-7).abs() < 1e-20);
    }

    #[test]
    fn volumes_accumulate_per_drop() {
        let c = ChemConstants::standard();
        let v = total_volume(&c, ml(10.0), 10);
        assert!((to_ml(v) - 10.36).abs() < 1e-9);

        let setup = TitrationSetup::from_constants(&c);
        assert!(setup.total_volume(5) < setup.total_volume(6));
    }

    #[test]
    fn ten_drops_of_acid_and_base() {
        let c = ChemConstants::standard();
        let ph = ph_from_h_concentration(h_conc_titration_hcl(&c, 0.1, 10, ml(10.0)).unwrap())
            .unwrap();
        assert!(ph > 0.0 && ph < 7.0);
        // 0.36 mL of 0.1 M into 10.36 mL
        let expected = -(0.1 * 0.36 / 10.36 + 1e-7f64).log10();
        assert!((ph - expected).abs() < 1e-9);

        let ph = ph_from_h_concentration(h_conc_titration_naoh(&c, 0.1, 10, ml(10.0)).unwrap())
            .unwrap();
        assert!(ph > 7.0 && ph < 14.0);
    }

    #[test]
    fn rejects_bad_inputs() {
        let c = ChemConstants::standard();
        assert!(h_conc_titration_hcl(&c, -0.1, 3, ml(10.0)).is_err());
        assert!(h_conc_titration_hcl(&c, 0.1, 3, ml(0.0)).is_err());
        assert!(matches!(
            "neutral".parse::<Polarity>(),
            Err(PhError::InvalidArg { .. })
        ));
    }

    #[test]
    fn reagents_parse_from_labels_and_keys() {
        for reagent in DropReagent::ALL {
            assert_eq!(reagent.label().parse::<DropReagent>().unwrap(), reagent);
            assert_eq!(reagent.key().parse::<DropReagent>().unwrap(), reagent);
        }
        assert_eq!(DropReagent::NaohCentimolar.titrant(), Titrant::base(0.01));
        assert_eq!(Titrant::none().molarity, 0.0);
    }
}
