//! Scenario definitions and evaluation.
//!
//! A scenario is what a frontend has selected: a dissolved species, a beaker
//! of water under the dropper, a buffer under the dropper, or a household
//! item. [`evaluate`] dispatches it to the engine and always returns a pH,
//! taking the buffer overflow branch itself.

use crate::error::{AppError, AppResult};
use ph_chem::titration::h_conc_titration;
use ph_chem::{
    BufferPair, BufferSystem, DropReagent, HouseholdItem, PhEngine, Species, Titrant,
    h_concentration_from_ph, indicator_color, ph_from_h_concentration,
};
use ph_core::{PhError, PhResult, ensure_finite, ml};
use serde::{Deserialize, Serialize};

/// Buffer components are never calculated below this concentration [mol/L].
pub const BUFFER_CONCENTRATION_FLOOR: f64 = 0.0001;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Scenario {
    Solution {
        species: Species,
        concentration: f64,
    },
    Water {
        #[serde(default)]
        reagent: Option<DropReagent>,
        #[serde(default)]
        drops: u32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        initial_volume_ml: Option<f64>,
    },
    Buffer {
        pair: BufferPair,
        acid_concentration: f64,
        base_concentration: f64,
        #[serde(default)]
        reagent: Option<DropReagent>,
        #[serde(default)]
        drops: u32,
    },
    Household {
        item: HouseholdItem,
    },
}

impl Scenario {
    /// Same scenario with a different number of drops added.
    ///
    /// Returns `None` for scenarios that have no dropper.
    pub fn with_drops(&self, count: u32) -> Option<Scenario> {
        let mut next = self.clone();
        match &mut next {
            Scenario::Water { drops, .. } | Scenario::Buffer { drops, .. } => {
                *drops = count;
                Some(next)
            }
            Scenario::Solution { .. } | Scenario::Household { .. } => None,
        }
    }

    pub fn label(&self) -> String {
        match self {
            Scenario::Solution {
                species,
                concentration,
            } => format!("{species} at {concentration:.4} M"),
            Scenario::Water { reagent, drops, .. } => {
                format!("Water + {drops} drops of {}", reagent_label(*reagent))
            }
            Scenario::Buffer { pair, reagent, drops, .. } => format!(
                "{} buffer + {drops} drops of {}",
                pair.display_name(),
                reagent_label(*reagent)
            ),
            Scenario::Household { item } => item.display_name().to_string(),
        }
    }
}

fn reagent_label(reagent: Option<DropReagent>) -> &'static str {
    reagent.map_or("nothing", DropReagent::label)
}

fn titrant_for(reagent: Option<DropReagent>) -> Titrant {
    reagent.map_or_else(Titrant::none, DropReagent::titrant)
}

/// Scenario with a name, as stored in scenario files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedScenario {
    pub name: String,
    #[serde(flatten)]
    pub scenario: Scenario,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScenarioFile {
    #[serde(default)]
    pub scenarios: Vec<NamedScenario>,
}

/// What the pH meter shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reading {
    pub ph: f64,
    /// Absent where the pH is tabulated rather than derived.
    pub h_concentration: Option<f64>,
    pub capacity_exceeded: bool,
    pub indicator: &'static str,
    /// Decimal places the pH is quoted to.
    pub decimals: usize,
}

impl Reading {
    fn derived(h: f64) -> PhResult<Self> {
        let ph = ph_from_h_concentration(h)?;
        Ok(Self {
            ph,
            h_concentration: Some(h),
            capacity_exceeded: false,
            indicator: indicator_color(ph),
            decimals: 3,
        })
    }

    fn fixed(ph: f64, decimals: usize) -> Self {
        Self {
            ph,
            h_concentration: None,
            capacity_exceeded: false,
            indicator: indicator_color(ph),
            decimals,
        }
    }

    pub fn format_ph(&self) -> String {
        format!("{:.*}", self.decimals, self.ph)
    }
}

/// Floor a buffer component concentration so the log ratio stays finite.
pub fn floor_buffer_concentration(conc: f64) -> PhResult<f64> {
    let conc = ensure_finite(conc, "buffer concentration")?;
    if conc < 0.0 {
        return Err(PhError::Domain {
            what: "buffer concentration",
            value: conc,
        });
    }
    Ok(conc.max(BUFFER_CONCENTRATION_FLOOR))
}

pub fn evaluate(engine: &PhEngine, scenario: &Scenario) -> AppResult<Reading> {
    tracing::debug!(scenario = %scenario.label(), "evaluating scenario");
    let reading = match scenario {
        Scenario::Solution {
            species,
            concentration,
        } => match engine.species_h_concentration(*species, *concentration)? {
            Some(h) => Reading::derived(h)?,
            None => Reading::fixed(engine.ph_nacl(), 3),
        },
        Scenario::Water {
            reagent,
            drops,
            initial_volume_ml,
        } => {
            let mut setup = engine.titration_setup();
            if let Some(v) = initial_volume_ml {
                setup = setup.with_initial_volume(ml(*v));
            }
            let h = h_conc_titration(engine.constants(), &setup, titrant_for(*reagent), *drops)?;
            Reading::derived(h)?
        }
        Scenario::Buffer {
            pair,
            acid_concentration,
            base_concentration,
            reagent,
            drops,
        } => {
            let system = BufferSystem::for_pair(
                *pair,
                floor_buffer_concentration(*acid_concentration)?,
                floor_buffer_concentration(*base_concentration)?,
                engine.constants(),
            )?;
            let buffer = engine.buffer_reading(&system, titrant_for(*reagent), *drops)?;
            if buffer.capacity_exceeded {
                tracing::warn!(pair = pair.key(), drops, "buffer capacity exceeded");
            }
            Reading {
                ph: buffer.ph,
                h_concentration: Some(h_concentration_from_ph(buffer.ph)?),
                capacity_exceeded: buffer.capacity_exceeded,
                indicator: indicator_color(buffer.ph),
                decimals: 3,
            }
        }
        Scenario::Household { item } => Reading::fixed(item.reference_ph(), item.display_decimals()),
    };
    tracing::debug!(ph = reading.ph, "scenario evaluated");
    Ok(reading)
}

/// Evaluate every scenario in a file, keeping per-scenario failures.
pub fn evaluate_all(
    engine: &PhEngine,
    file: &ScenarioFile,
) -> Vec<(String, AppResult<Reading>)> {
    file.scenarios
        .iter()
        .map(|named| (named.name.clone(), evaluate(engine, &named.scenario)))
        .collect()
}

/// Parse a species label, reporting the offending text on failure.
pub fn parse_species(label: &str) -> AppResult<Species> {
    label
        .parse()
        .map_err(|_| AppError::InvalidInput(format!("unknown species '{label}'")))
}
