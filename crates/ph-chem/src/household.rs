//! Everyday solutions with tabulated reference pH.

use ph_core::PhError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HouseholdItem {
    TableSalt,
    BakingSoda,
    HydrogenPeroxide,
    Drano,
    LiquidPlumber,
    SoftDrink,
    OrangeJuice,
    Milk,
    DishSoap,
    Blood,
    BatteryAcid,
    Ammonia,
    Vinegar,
}

impl HouseholdItem {
    pub const ALL: [HouseholdItem; 13] = [
        HouseholdItem::TableSalt,
        HouseholdItem::BakingSoda,
        HouseholdItem::HydrogenPeroxide,
        HouseholdItem::Drano,
        HouseholdItem::LiquidPlumber,
        HouseholdItem::SoftDrink,
        HouseholdItem::OrangeJuice,
        HouseholdItem::Milk,
        HouseholdItem::DishSoap,
        HouseholdItem::Blood,
        HouseholdItem::BatteryAcid,
        HouseholdItem::Ammonia,
        HouseholdItem::Vinegar,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::TableSalt => "table-salt",
            Self::BakingSoda => "baking-soda",
            Self::HydrogenPeroxide => "hydrogen-peroxide",
            Self::Drano => "drano",
            Self::LiquidPlumber => "liquid-plumber",
            Self::SoftDrink => "soft-drink",
            Self::OrangeJuice => "orange-juice",
            Self::Milk => "milk",
            Self::DishSoap => "dish-soap",
            Self::Blood => "blood",
            Self::BatteryAcid => "battery-acid",
            Self::Ammonia => "ammonia",
            Self::Vinegar => "vinegar",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::TableSalt => "Table salt (sodium chloride)",
            Self::BakingSoda => "Baking Soda (sodium bicarbonate)",
            Self::HydrogenPeroxide => "Hydrogen Peroxide (3% H\u{2082}O\u{2082})",
            Self::Drano => "Drano (contains sodium hydroxide)",
            Self::LiquidPlumber => "Liquid Plumber (contains sulfuric acid)",
            Self::SoftDrink => "Soft Drink (contains citric and carbonic acids)",
            Self::OrangeJuice => "Orange Juice (contains citric and ascorbic acid)",
            Self::Milk => "Milk",
            Self::DishSoap => "Dish Soap",
            Self::Blood => "Blood",
            Self::BatteryAcid => "Battery Acid (contains sulfuric acid)",
            Self::Ammonia => "Ammonia (2% ammonium hydroxide)",
            Self::Vinegar => "Vinegar (5% acetic acid)",
        }
    }

    /// Tabulated pH; these are not derived from any equilibrium.
    pub fn reference_ph(self) -> f64 {
        match self {
            Self::TableSalt => 7.0,
            Self::BakingSoda => 8.3,
            Self::HydrogenPeroxide => 6.2,
            Self::Drano => 12.0,
            Self::LiquidPlumber => 1.0,
            Self::SoftDrink => 3.2,
            Self::OrangeJuice => 3.9,
            Self::Milk => 6.8,
            Self::DishSoap => 8.7,
            Self::Blood => 7.4,
            Self::BatteryAcid => 1.0,
            Self::Ammonia => 11.6,
            Self::Vinegar => 2.4,
        }
    }

    /// Decimal places the reference value is quoted to.
    pub fn display_decimals(self) -> usize {
        match self {
            Self::Blood => 2,
            _ => 1,
        }
    }

    pub fn format_ph(self) -> String {
        format!("{:.*}", self.display_decimals(), self.reference_ph())
    }
}

impl std::str::FromStr for HouseholdItem {
    type Err = PhError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace([' ', '_'], "-");
        HouseholdItem::ALL
            .into_iter()
            .find(|item| item.key() == key)
            .ok_or(PhError::InvalidArg {
                what: "unknown household item",
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_values() {
        assert_eq!(HouseholdItem::Vinegar.reference_ph(), 2.4);
        assert_eq!(HouseholdItem::Drano.reference_ph(), 12.0);
        assert_eq!(HouseholdItem::Blood.format_ph(), "7.40");
        assert_eq!(HouseholdItem::Milk.format_ph(), "6.8");
    }

    #[test]
    fn parse_keys() {
        assert_eq!(
            "Orange Juice".parse::<HouseholdItem>().unwrap(),
            HouseholdItem::OrangeJuice
        );
        assert_eq!(
            "battery_acid".parse::<HouseholdItem>().unwrap(),
            HouseholdItem::BatteryAcid
        );
        assert!("coffee".parse::<HouseholdItem>().is_err());
    }
}
