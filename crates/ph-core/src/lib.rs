//! ph-core: stable foundation for phlab.
//!
//! Contains:
//! - units (uom SI types + constructors for volumes, molarity, amounts)
//! - numeric (Real + tolerances + float helpers)
//! - constants (the injected chemical constants table)
//! - error (shared error types)

pub mod constants;
pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use constants::{AcidConstants, BaseConstants, BufferPkas, ChemConstants};
pub use error::{PhError, PhResult};
pub use numeric::*;
pub use units::*;
