//! Environmental Impact Estimates
//!
//! Normalized 0-1 estimates of energy, water, and chemical consumption for a
//! factor set. Energy tracks heating with a mechanical share (pumps, motors);
//! water tracks mechanical action with a chemical-dilution share; chemical
//! consumption follows the chemical factor directly.

use crate::factors::FactorSet;
use serde::{Deserialize, Serialize};

/// Normalized resource-consumption estimates (0-1 nominal range)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EcoImpact {
    pub energy: f64,
    pub water: f64,
    pub chemical: f64,
}

/// Calculate the environmental impact of running at the given factors
pub fn calculate_eco_impact(factors: &FactorSet) -> EcoImpact {
    EcoImpact {
        energy: (factors.temperature * 0.7 + factors.mechanical * 0.3) / 100.0,
        water: (factors.mechanical * 0.6 + factors.chemical * 0.4) / 100.0,
        chemical: factors.chemical / 100.0,
    }
}
