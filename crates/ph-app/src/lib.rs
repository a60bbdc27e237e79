//! Shared application service layer for phlab.
//!
//! This crate sits between frontends and the calculation engine: it loads
//! constants and scenario files, dispatches a selected scenario to the
//! engine, and builds titration curves.

pub mod config;
pub mod curve;
pub mod error;
pub mod scenario;

// Re-export key types for convenience
pub use config::{DocumentFormat, constants_to_yaml, load_constants, load_scenarios};
pub use curve::{CurvePoint, MAX_CURVE_DROPS, capacity_breakpoint, titration_curve};
pub use error::{AppError, AppResult};
pub use scenario::{
    BUFFER_CONCENTRATION_FLOOR, NamedScenario, Reading, Scenario, ScenarioFile, evaluate,
    evaluate_all, floor_buffer_concentration, parse_species,
};
