//! Titration curves: the reading after each drop.

use crate::error::{AppError, AppResult};
use crate::scenario::{Scenario, evaluate};
use ph_chem::PhEngine;
use serde::Serialize;

/// Longest curve a single request may ask for.
pub const MAX_CURVE_DROPS: u32 = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurvePoint {
    pub drops: u32,
    pub ph: f64,
    pub capacity_exceeded: bool,
}

/// Readings for 0..=`max_drops` drops added to a water or buffer scenario.
pub fn titration_curve(
    engine: &PhEngine,
    scenario: &Scenario,
    max_drops: u32,
) -> AppResult<Vec<CurvePoint>> {
    if max_drops > MAX_CURVE_DROPS {
        return Err(AppError::InvalidInput(format!(
            "titration curves stop at {MAX_CURVE_DROPS} drops, got {max_drops}"
        )));
    }
    let mut points = Vec::new();
    for drops in 0..=max_drops {
        let step = scenario.with_drops(drops).ok_or_else(|| {
            AppError::InvalidInput("titration curves need a water or buffer scenario".into())
        })?;
        let reading = evaluate(engine, &step)?;
        points.push(CurvePoint {
            drops,
            ph: reading.ph,
            capacity_exceeded: reading.capacity_exceeded,
        });
    }
    tracing::debug!(points = points.len(), "titration curve computed");
    Ok(points)
}

/// First drop count at which the buffer ran out of capacity.
pub fn capacity_breakpoint(points: &[CurvePoint]) -> Option<u32> {
    points
        .iter()
        .find(|point| point.capacity_exceeded)
        .map(|point| point.drops)
}
