use crate::species::{Category, Species};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeciesCatalogEntry {
    pub species: Species,
    pub canonical_id: &'static str,
    pub display_name: &'static str,
    pub aliases: &'static [&'static str],
}

impl SpeciesCatalogEntry {
    pub fn category(&self) -> Category {
        self.species.category()
    }

    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_ascii_lowercase();
        if query.is_empty() {
            return true;
        }

        self.canonical_id.to_ascii_lowercase().contains(&query)
            || self.display_name.to_ascii_lowercase().contains(&query)
            || self
                .aliases
                .iter()
                .any(|alias| alias.to_ascii_lowercase().contains(&query))
    }
}

const fn entry(
    species: Species,
    canonical_id: &'static str,
    display_name: &'static str,
    aliases: &'static [&'static str],
) -> SpeciesCatalogEntry {
    SpeciesCatalogEntry {
        species,
        canonical_id,
        display_name,
        aliases,
    }
}

const SPECIES_CATALOG: [SpeciesCatalogEntry; 14] = [
    entry(Species::BaOH2, "Ba(OH)2", "Barium Hydroxide", &["strong base"]),
    entry(Species::CaOH2, "Ca(OH)2", "Calcium Hydroxide", &["slaked lime", "strong base"]),
    entry(Species::NaOH, "NaOH", "Sodium Hydroxide", &["lye", "strong base"]),
    entry(Species::NH4OH, "NH4OH", "Ammonium Hydroxide", &["NH3/H2O", "weak base"]),
    entry(Species::HCl, "HCl", "Hydrochloric Acid", &["muriatic acid", "strong acid"]),
    entry(Species::HNO3, "HNO3", "Nitric Acid", &["strong acid"]),
    entry(Species::HC2H3O2, "HC2H3O2", "Acetic Acid", &["CH3COOH", "weak acid"]),
    entry(Species::H2CO3, "H2CO3", "Carbonic Acid", &["weak acid"]),
    entry(Species::NaCl, "NaCl", "Sodium Chloride", &["table salt", "neutral salt"]),
    entry(Species::NH4Cl, "NH4Cl", "Ammonium Chloride", &["acidic salt"]),
    entry(Species::NaC2H3O2, "NaC2H3O2", "Sodium Acetate", &["basic salt"]),
    entry(Species::NaHCO3, "NaHCO3", "Sodium Bicarbonate", &["baking soda", "basic salt"]),
    entry(Species::Na2CO3, "Na2CO3", "Sodium Carbonate", &["washing soda", "basic salt"]),
    entry(Species::NaHSO4, "NaHSO4", "Sodium Bisulfate", &["acidic salt"]),
];

pub fn species_catalog() -> &'static [SpeciesCatalogEntry] {
    &SPECIES_CATALOG
}

pub fn filter_species_catalog(query: &str) -> Vec<SpeciesCatalogEntry> {
    species_catalog()
        .iter()
        .copied()
        .filter(|entry| entry.matches_query(query))
        .collect()
}

/// Concentration slider stops [mol/L], low to high.
pub const CONCENTRATION_STEPS: [f64; 28] = [
    0.0001, 0.0002, 0.0003, 0.0004, 0.0005, 0.0006, 0.0007, 0.0008, 0.0009, //
    0.001, 0.002, 0.003, 0.004, 0.005, 0.006, 0.007, 0.008, 0.009, //
    0.01, 0.02, 0.03, 0.04, 0.05, 0.06, 0.07, 0.08, 0.09, //
    0.1,
];

pub fn concentration_step(index: usize) -> Option<f64> {
    CONCENTRATION_STEPS.get(index).copied()
}
