//! Chemical species definitions.

use ph_core::{ChemConstants, PhError};
use serde::{Deserialize, Serialize};

/// Acids, bases and salts that can be dissolved on their own.
///
/// Deserializes from any label [`FromStr`](std::str::FromStr) accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Species {
    /// Hydrochloric acid (HCl)
    HCl,
    /// Nitric acid (HNO₃)
    HNO3,
    /// Acetic acid (HC₂H₃O₂)
    HC2H3O2,
    /// Carbonic acid (H₂CO₃)
    H2CO3,
    /// Sodium hydroxide (NaOH)
    NaOH,
    /// Calcium hydroxide (Ca(OH)₂)
    CaOH2,
    /// Barium hydroxide (Ba(OH)₂)
    BaOH2,
    /// Ammonium hydroxide (NH₄OH, aqueous NH₃)
    NH4OH,
    /// Sodium chloride (NaCl)
    NaCl,
    /// Ammonium chloride (NH₄Cl)
    NH4Cl,
    /// Sodium acetate (NaC₂H₃O₂)
    NaC2H3O2,
    /// Sodium bicarbonate (NaHCO₃)
    NaHCO3,
    /// Sodium carbonate (Na₂CO₃)
    Na2CO3,
    /// Sodium bisulfate (NaHSO₄)
    NaHSO4,
}

/// Selection group a species is offered under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    AcidsBases,
    Salts,
}

/// Equilibrium regime of a species, carrying the constant its formula needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpeciesKind {
    StrongAcid,
    /// Fully dissociated base releasing `hydroxides` OH⁻ per formula unit.
    StrongBase { hydroxides: u8 },
    WeakAcid { ka: f64 },
    WeakBase { kb: f64 },
    /// Neither ion hydrolyzes; pH is fixed.
    NeutralSalt,
    /// Cation of a weak base hydrolyzes; `kb` is the parent base constant.
    AcidicSalt { kb: f64 },
    /// Anion of a weak acid hydrolyzes; `ka` is the conjugate acid constant.
    BasicSalt { ka: f64 },
    /// Salt of a strong polyprotic acid treated as a weak acid.
    AcidSaltSurrogate { ka: f64 },
}

impl Species {
    pub const ALL: [Species; 14] = [
        Species::BaOH2,
        Species::CaOH2,
        Species::NaOH,
        Species::NH4OH,
        Species::HCl,
        Species::HNO3,
        Species::HC2H3O2,
        Species::H2CO3,
        Species::NaCl,
        Species::NH4Cl,
        Species::NaC2H3O2,
        Species::NaHCO3,
        Species::Na2CO3,
        Species::NaHSO4,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Species::HCl => "HCl",
            Species::HNO3 => "HNO3",
            Species::HC2H3O2 => "HC2H3O2",
            Species::H2CO3 => "H2CO3",
            Species::NaOH => "NaOH",
            Species::CaOH2 => "Ca(OH)2",
            Species::BaOH2 => "Ba(OH)2",
            Species::NH4OH => "NH4OH",
            Species::NaCl => "NaCl",
            Species::NH4Cl => "NH4Cl",
            Species::NaC2H3O2 => "NaC2H3O2",
            Species::NaHCO3 => "NaHCO3",
            Species::Na2CO3 => "Na2CO3",
            Species::NaHSO4 => "NaHSO4",
        }
    }

    /// Formula with Unicode subscripts, as shown on selection buttons.
    pub fn formula(&self) -> &'static str {
        match self {
            Species::HCl => "HCl",
            Species::HNO3 => "HNO\u{2083}",
            Species::HC2H3O2 => "HC\u{2082}H\u{2083}O\u{2082}",
            Species::H2CO3 => "H\u{2082}CO\u{2083}",
            Species::NaOH => "NaOH",
            Species::CaOH2 => "Ca(OH)\u{2082}",
            Species::BaOH2 => "Ba(OH)\u{2082}",
            Species::NH4OH => "NH\u{2084}OH",
            Species::NaCl => "NaCl",
            Species::NH4Cl => "NH\u{2084}Cl",
            Species::NaC2H3O2 => "NaC\u{2082}H\u{2083}O\u{2082}",
            Species::NaHCO3 => "NaHCO\u{2083}",
            Species::Na2CO3 => "Na\u{2082}CO\u{2083}",
            Species::NaHSO4 => "NaHSO\u{2084}",
        }
    }

    /// Get human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Species::HCl => "Hydrochloric Acid",
            Species::HNO3 => "Nitric Acid",
            Species::HC2H3O2 => "Acetic Acid",
            Species::H2CO3 => "Carbonic Acid",
            Species::NaOH => "Sodium Hydroxide",
            Species::CaOH2 => "Calcium Hydroxide",
            Species::BaOH2 => "Barium Hydroxide",
            Species::NH4OH => "Ammonium Hydroxide",
            Species::NaCl => "Sodium Chloride",
            Species::NH4Cl => "Ammonium Chloride",
            Species::NaC2H3O2 => "Sodium Acetate",
            Species::NaHCO3 => "Sodium Bicarbonate",
            Species::Na2CO3 => "Sodium Carbonate",
            Species::NaHSO4 => "Sodium Bisulfate",
        }
    }

    pub fn category(&self) -> Category {
        match self {
            Species::HCl
            | Species::HNO3
            | Species::HC2H3O2
            | Species::H2CO3
            | Species::NaOH
            | Species::CaOH2
            | Species::BaOH2
            | Species::NH4OH => Category::AcidsBases,
            Species::NaCl
            | Species::NH4Cl
            | Species::NaC2H3O2
            | Species::NaHCO3
            | Species::Na2CO3
            | Species::NaHSO4 => Category::Salts,
        }
    }

    /// Resolve the equilibrium regime, reading constants from `constants`.
    pub fn kind(&self, constants: &ChemConstants) -> SpeciesKind {
        let ka = &constants.ka;
        let kb = &constants.kb;
        match self {
            Species::HCl | Species::HNO3 => SpeciesKind::StrongAcid,
            Species::NaOH => SpeciesKind::StrongBase { hydroxides: 1 },
            Species::CaOH2 | Species::BaOH2 => SpeciesKind::StrongBase { hydroxides: 2 },
            Species::NH4OH => SpeciesKind::WeakBase { kb: kb.ammonia },
            Species::HC2H3O2 => SpeciesKind::WeakAcid { ka: ka.acetic },
            Species::H2CO3 => SpeciesKind::WeakAcid { ka: ka.carbonic },
            Species::NaCl => SpeciesKind::NeutralSalt,
            Species::NH4Cl => SpeciesKind::AcidicSalt { kb: kb.ammonia },
            Species::NaC2H3O2 => SpeciesKind::BasicSalt { ka: ka.acetic },
            Species::NaHCO3 => SpeciesKind::BasicSalt { ka: ka.carbonic },
            Species::Na2CO3 => SpeciesKind::BasicSalt { ka: ka.bicarbonate },
            Species::NaHSO4 => SpeciesKind::AcidSaltSurrogate { ka: ka.bisulfate },
        }
    }
}

impl std::fmt::Display for Species {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.formula(), self.display_name())
    }
}

impl TryFrom<String> for Species {
    type Error = PhError;

    fn try_from(label: String) -> Result<Self, Self::Error> {
        label.parse()
    }
}

impl std::str::FromStr for Species {
    type Err = PhError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "HCL" | "HYDROCHLORIC ACID" => Ok(Species::HCl),
            "HNO3" | "NITRIC ACID" => Ok(Species::HNO3),
            "HC2H3O2" | "CH3COOH" | "ACETIC ACID" => Ok(Species::HC2H3O2),
            "H2CO3" | "CARBONIC ACID" => Ok(Species::H2CO3),
            "NAOH" | "SODIUM HYDROXIDE" => Ok(Species::NaOH),
            "CA(OH)2" | "CAOH2" | "CALCIUM HYDROXIDE" => Ok(Species::CaOH2),
            "BA(OH)2" | "BAOH2" | "BARIUM HYDROXIDE" => Ok(Species::BaOH2),
            "NH4OH" | "AMMONIUM HYDROXIDE" => Ok(Species::NH4OH),
            "NACL" | "SODIUM CHLORIDE" => Ok(Species::NaCl),
            "NH4CL" | "AMMONIUM CHLORIDE" => Ok(Species::NH4Cl),
            "NAC2H3O2" | "SODIUM ACETATE" => Ok(Species::NaC2H3O2),
            "NAHCO3" | "SODIUM BICARBONATE" => Ok(Species::NaHCO3),
            "NA2CO3" | "SODIUM CARBONATE" => Ok(Species::Na2CO3),
            "NAHSO4" | "SODIUM BISULFATE" => Ok(Species::NaHSO4),
            _ => Err(PhError::InvalidArg {
                what: "unknown species",
            }),
        }
    }
}
