//! Chemical constants table.
//!
//! Every formula in the engine reads its physical constants from a
//! [`ChemConstants`] value handed to it by the caller. The standard table is
//! the [`Default`]; alternate tables can be deserialized (fields omitted from a
//! file fall back to the standard values) and must pass [`ChemConstants::validate`].

use crate::error::{PhError, PhResult};
use crate::units::{Volume, ml};
use serde::{Deserialize, Serialize};

pub const KW: f64 = 1e-14;
pub const WATER_H: f64 = 1e-7;
pub const NEUTRAL_PH: f64 = 7.00;
pub const DROP_VOLUME_ML: f64 = 0.036;
pub const REFERENCE_VOLUME_ML: f64 = 10.000;

/// Acid dissociation constants (Ka).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AcidConstants {
    /// HC₂H₃O₂
    pub acetic: f64,
    /// H₂CO₃
    pub carbonic: f64,
    /// HCO₃⁻, conjugate acid of carbonate
    pub bicarbonate: f64,
    /// H₂PO₄⁻
    pub dihydrogen_phosphate: f64,
    /// HSO₄⁻
    pub bisulfate: f64,
}

impl Default for AcidConstants {
    fn default() -> Self {
        Self {
            acetic: 1.8e-5,
            carbonic: 4.3e-7,
            bicarbonate: 5.6e-11,
            dihydrogen_phosphate: 6.2e-8,
            bisulfate: 1.2e-2,
        }
    }
}

/// Base dissociation constants (Kb).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseConstants {
    /// NH₃ (as ammonium hydroxide)
    pub ammonia: f64,
}

impl Default for BaseConstants {
    fn default() -> Self {
        Self { ammonia: 1.8e-5 }
    }
}

/// pKa of each conjugate buffer pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BufferPkas {
    pub acetic_acetate: f64,
    pub ammonium_ammonia: f64,
    pub phosphate: f64,
    pub bicarbonate_carbonate: f64,
    pub carbonic_bicarbonate: f64,
}

impl Default for BufferPkas {
    fn default() -> Self {
        Self {
            acetic_acetate: 4.745,
            ammonium_ammonia: 9.255,
            phosphate: 7.208,
            bicarbonate_carbonate: 10.252,
            carbonic_bicarbonate: 6.367,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChemConstants {
    /// Water ion product.
    pub kw: f64,
    /// [H+] of pure water, added in superposition during titration.
    pub water_h: f64,
    /// pH reported for neutral salts.
    pub neutral_ph: f64,
    pub drop_volume_ml: f64,
    pub reference_volume_ml: f64,
    pub ka: AcidConstants,
    pub kb: BaseConstants,
    pub pka: BufferPkas,
}

impl Default for ChemConstants {
    fn default() -> Self {
        Self {
            kw: KW,
            water_h: WATER_H,
            neutral_ph: NEUTRAL_PH,
            drop_volume_ml: DROP_VOLUME_ML,
            reference_volume_ml: REFERENCE_VOLUME_ML,
            ka: AcidConstants::default(),
            kb: BaseConstants::default(),
            pka: BufferPkas::default(),
        }
    }
}

impl ChemConstants {
    pub fn standard() -> Self {
        Self::default()
    }

    /// Volume delivered by a single drop of titrant.
    pub fn drop_volume(&self) -> Volume {
        ml(self.drop_volume_ml)
    }

    /// Volume of the solution before any titrant is added.
    pub fn reference_volume(&self) -> Volume {
        ml(self.reference_volume_ml)
    }

    fn entries(&self) -> [(&'static str, f64); 15] {
        [
            ("kw must be positive and finite", self.kw),
            ("water_h must be positive and finite", self.water_h),
            ("drop_volume_ml must be positive and finite", self.drop_volume_ml),
            ("reference_volume_ml must be positive and finite", self.reference_volume_ml),
            ("ka.acetic must be positive and finite", self.ka.acetic),
            ("ka.carbonic must be positive and finite", self.ka.carbonic),
            ("ka.bicarbonate must be positive and finite", self.ka.bicarbonate),
            (
                "ka.dihydrogen_phosphate must be positive and finite",
                self.ka.dihydrogen_phosphate,
            ),
            ("ka.bisulfate must be positive and finite", self.ka.bisulfate),
            ("kb.ammonia must be positive and finite", self.kb.ammonia),
            ("pka.acetic_acetate must be positive and finite", self.pka.acetic_acetate),
            ("pka.ammonium_ammonia must be positive and finite", self.pka.ammonium_ammonia),
            ("pka.phosphate must be positive and finite", self.pka.phosphate),
            (
                "pka.bicarbonate_carbonate must be positive and finite",
                self.pka.bicarbonate_carbonate,
            ),
            (
                "pka.carbonic_bicarbonate must be positive and finite",
                self.pka.carbonic_bicarbonate,
            ),
        ]
    }

    /// Every constant must be positive and finite; the neutral pH only finite.
    pub fn validate(&self) -> PhResult<()> {
        for (what, value) in self.entries() {
            if !value.is_finite() || value <= 0.0 {
                return Err(PhError::InvalidArg { what });
            }
        }
        if !self.neutral_ph.is_finite() {
            return Err(PhError::InvalidArg {
                what: "neutral_ph must be finite",
            });
        }
        Ok(())
    }
}
