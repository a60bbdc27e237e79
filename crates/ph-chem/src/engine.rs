//! Calculation facade bound to one constants table.

use crate::buffer::{self, BufferOutcome, BufferReading, BufferSystem};
use crate::ph::ph_from_h_concentration;
use crate::species::Species;
use crate::titration::{self, Polarity, Titrant, TitrationSetup};
use ph_core::{ChemConstants, PhResult, Volume};

/// Acid–base calculator.
///
/// Holds the constants every formula reads, so callers never reach for
/// ambient globals. `PhEngine` is a plain value: cheap to copy and safe to
/// share between threads.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PhEngine {
    constants: ChemConstants,
}

impl PhEngine {
    pub fn new(constants: ChemConstants) -> PhResult<Self> {
        constants.validate()?;
        Ok(Self { constants })
    }

    /// Engine over the standard constants table.
    pub fn standard() -> Self {
        Self::default()
    }

    pub fn constants(&self) -> &ChemConstants {
        &self.constants
    }

    pub fn titration_setup(&self) -> TitrationSetup {
        TitrationSetup::from_constants(&self.constants)
    }

    /// [H+] of `species` at `conc`, or `None` for a neutral salt.
    pub fn species_h_concentration(&self, species: Species, conc: f64) -> PhResult<Option<f64>> {
        species
            .kind(&self.constants)
            .h_concentration(self.constants.kw, conc)
    }

    pub fn species_ph(&self, species: Species, conc: f64) -> PhResult<f64> {
        match self.species_h_concentration(species, conc)? {
            Some(h) => ph_from_h_concentration(h),
            None => Ok(self.ph_nacl()),
        }
    }

    fn h_of(&self, species: Species, conc: f64) -> PhResult<f64> {
        let h = self.species_h_concentration(species, conc)?;
        // only NaCl lacks a formula, and it has no h_conc_* accessor
        Ok(h.unwrap_or(self.constants.water_h))
    }

    pub fn h_conc_hcl(&self, conc: f64) -> PhResult<f64> {
        self.h_of(Species::HCl, conc)
    }

    pub fn h_conc_hno3(&self, conc: f64) -> PhResult<f64> {
        self.h_of(Species::HNO3, conc)
    }

    pub fn h_conc_hc2h3o2(&self, conc: f64) -> PhResult<f64> {
        self.h_of(Species::HC2H3O2, conc)
    }

    pub fn h_conc_h2co3(&self, conc: f64) -> PhResult<f64> {
        self.h_of(Species::H2CO3, conc)
    }

    pub fn h_conc_naoh(&self, conc: f64) -> PhResult<f64> {
        self.h_of(Species::NaOH, conc)
    }

    pub fn h_conc_caoh2(&self, conc: f64) -> PhResult<f64> {
        self.h_of(Species::CaOH2, conc)
    }

    pub fn h_conc_baoh2(&self, conc: f64) -> PhResult<f64> {
        self.h_of(Species::BaOH2, conc)
    }

    pub fn h_conc_nh4oh(&self, conc: f64) -> PhResult<f64> {
        self.h_of(Species::NH4OH, conc)
    }

    pub fn h_conc_nh4cl(&self, conc: f64) -> PhResult<f64> {
        self.h_of(Species::NH4Cl, conc)
    }

    pub fn h_conc_nac2h3o2(&self, conc: f64) -> PhResult<f64> {
        self.h_of(Species::NaC2H3O2, conc)
    }

    pub fn h_conc_nahco3(&self, conc: f64) -> PhResult<f64> {
        self.h_of(Species::NaHCO3, conc)
    }

    pub fn h_conc_na2co3(&self, conc: f64) -> PhResult<f64> {
        self.h_of(Species::Na2CO3, conc)
    }

    pub fn h_conc_nahso4(&self, conc: f64) -> PhResult<f64> {
        self.h_of(Species::NaHSO4, conc)
    }

    pub fn ph_nacl(&self) -> f64 {
        self.constants.neutral_ph
    }

    pub fn h_conc_titration_general(
        &self,
        drop_molarity: f64,
        drops: u32,
        initial_volume: Volume,
        polarity: Polarity,
    ) -> PhResult<f64> {
        titration::h_conc_titration_general(
            &self.constants,
            drop_molarity,
            drops,
            initial_volume,
            polarity,
        )
    }

    /// Water at the reference volume titrated with HCl.
    pub fn h_conc_titration_hcl(&self, drop_molarity: f64, drops: u32) -> PhResult<f64> {
        self.h_conc_titration_general(
            drop_molarity,
            drops,
            self.constants.reference_volume(),
            Polarity::Acid,
        )
    }

    /// Water at the reference volume titrated with NaOH.
    pub fn h_conc_titration_naoh(&self, drop_molarity: f64, drops: u32) -> PhResult<f64> {
        self.h_conc_titration_general(
            drop_molarity,
            drops,
            self.constants.reference_volume(),
            Polarity::Base,
        )
    }

    #[allow(clippy::too_many_arguments)]
    pub fn buffer_ph(
        &self,
        acid_conc: f64,
        base_conc: f64,
        pka: f64,
        titrant_molarity: f64,
        drops: u32,
        initial_volume: Volume,
        polarity: Polarity,
    ) -> PhResult<BufferOutcome> {
        let system = BufferSystem::new(acid_conc, base_conc, pka)?;
        let setup = self.titration_setup().with_initial_volume(initial_volume);
        let titrant = Titrant {
            molarity: titrant_molarity,
            polarity,
        };
        buffer::buffer_ph(&system, &setup, titrant, drops)
    }

    #[allow(clippy::too_many_arguments)]
    pub fn buffer_overflow_ph(
        &self,
        acid_conc: f64,
        base_conc: f64,
        pka: f64,
        titrant_molarity: f64,
        drops: u32,
        initial_volume: Volume,
        polarity: Polarity,
    ) -> PhResult<f64> {
        let system = BufferSystem::new(acid_conc, base_conc, pka)?;
        let setup = self.titration_setup().with_initial_volume(initial_volume);
        let titrant = Titrant {
            molarity: titrant_molarity,
            polarity,
        };
        buffer::buffer_overflow_ph(&self.constants, &system, &setup, titrant, drops)
    }

    /// Buffer pH at the reference volume, taking the overflow branch when needed.
    pub fn buffer_reading(
        &self,
        system: &BufferSystem,
        titrant: Titrant,
        drops: u32,
    ) -> PhResult<BufferReading> {
        buffer::buffer_reading(
            &self.constants,
            system,
            &self.titration_setup(),
            titrant,
            drops,
        )
    }
}
