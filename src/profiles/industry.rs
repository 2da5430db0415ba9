//! Industry Profiles
//!
//! Industry-specific base weightings for the four Sinner's Circle factors.
//! Weightings encode how much each factor typically carries the cleaning
//! effort in that sector (0-100 scale).

use crate::factors::FactorSet;
use serde::{Deserialize, Serialize};

/// Supported industry sectors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Industry {
    Agriculture,
    Automotive,
    Construction,
    ContractCleaning,
    FoodBeverage,
    Marine,
    Government,
    Education,
}

impl Industry {
    /// Resolve free-text industry input
    ///
    /// Trim + case-insensitive exact match on the display names. Unrecognized
    /// input falls back to `ContractCleaning`, the general-purpose profile.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "agriculture" => Industry::Agriculture,
            "automotive" => Industry::Automotive,
            "construction" => Industry::Construction,
            "contract cleaning" => Industry::ContractCleaning,
            "food & beverage" => Industry::FoodBeverage,
            "marine" => Industry::Marine,
            "government" => Industry::Government,
            "education" => Industry::Education,
            _ => Industry::ContractCleaning,
        }
    }

    /// Baseline factor weightings for this sector (0-100 per factor)
    pub fn baseline(&self) -> FactorSet {
        match self {
            Industry::Agriculture => FactorSet::new(60.0, 70.0, 80.0, 40.0),
            Industry::Automotive => FactorSet::new(50.0, 75.0, 85.0, 40.0),
            Industry::Construction => FactorSet::new(45.0, 65.0, 90.0, 50.0),
            Industry::ContractCleaning => FactorSet::new(40.0, 60.0, 70.0, 80.0),
            Industry::FoodBeverage => FactorSet::new(75.0, 80.0, 60.0, 35.0),
            Industry::Marine => FactorSet::new(45.0, 85.0, 75.0, 45.0),
            Industry::Government => FactorSet::new(50.0, 60.0, 65.0, 75.0),
            Industry::Education => FactorSet::new(45.0, 55.0, 60.0, 90.0),
        }
    }

    /// Short soiling-context description for the results display
    pub fn description(&self) -> &'static str {
        match self {
            Industry::Agriculture => "Heavy organic matter, outdoor conditions",
            Industry::Automotive => "Oil, grease, road grime removal",
            Industry::Construction => "Concrete, dust, heavy materials",
            Industry::ContractCleaning => "Variable surfaces, general maintenance",
            Industry::FoodBeverage => "Sanitation critical, organic residues",
            Industry::Marine => "Salt exposure, marine growth",
            Industry::Government => "Public spaces, varied surfaces",
            Industry::Education => "High traffic areas, safety focus",
        }
    }

    /// Friendly name for display
    pub fn display_name(&self) -> &'static str {
        match self {
            Industry::Agriculture => "Agriculture",
            Industry::Automotive => "Automotive",
            Industry::Construction => "Construction",
            Industry::ContractCleaning => "Contract Cleaning",
            Industry::FoodBeverage => "Food & Beverage",
            Industry::Marine => "Marine",
            Industry::Government => "Government",
            Industry::Education => "Education",
        }
    }

    /// All sectors in display order
    pub fn all() -> &'static [Industry] {
        &[
            Industry::Agriculture,
            Industry::Automotive,
            Industry::Construction,
            Industry::ContractCleaning,
            Industry::FoodBeverage,
            Industry::Marine,
            Industry::Government,
            Industry::Education,
        ]
    }
}
