//! ph-chem: acid–base calculation engine for phlab.
//!
//! Provides:
//! - Species definitions and their equilibrium regimes
//! - Closed-form [H+] formulas for acids, bases and salts
//! - pH conversion
//! - Dropwise titration of water with a strong acid or base
//! - Two-regime buffer model (Henderson–Hasselbalch, then overflow)
//! - Household reference values and indicator strip colours
//!
//! Every calculation is a pure function of its inputs and a
//! [`ChemConstants`](ph_core::ChemConstants) table.
//!
//! # Example
//!
//! ```
//! use ph_chem::{PhEngine, Species, Titrant, BufferSystem};
//!
//! let engine = PhEngine::standard();
//! let ph = engine.species_ph(Species::HCl, 0.01).unwrap();
//! assert!((ph - 2.0).abs() < 1e-12);
//!
//! let buffer = BufferSystem::new(0.1, 0.1, 4.745).unwrap();
//! let reading = engine.buffer_reading(&buffer, Titrant::acid(0.1), 10).unwrap();
//! assert!(reading.ph < 4.745 && !reading.capacity_exceeded);
//! ```

pub mod buffer;
pub mod catalog;
pub mod engine;
pub mod equilibrium;
pub mod household;
pub mod indicator;
pub mod ph;
pub mod species;
pub mod titration;

// Re-exports for ergonomics
pub use buffer::{
    BufferOutcome, BufferPair, BufferReading, BufferSystem, buffer_overflow_ph, buffer_ph,
    buffer_reading,
};
pub use catalog::{
    CONCENTRATION_STEPS, SpeciesCatalogEntry, concentration_step, filter_species_catalog,
    species_catalog,
};
pub use engine::PhEngine;
pub use household::HouseholdItem;
pub use indicator::{indicator_color, indicator_label};
pub use ph::{h_concentration_from_ph, ph_from_h_concentration, ph_nacl};
pub use species::{Category, Species, SpeciesKind};
pub use titration::{DropReagent, Polarity, Titrant, TitrationSetup, total_volume};
