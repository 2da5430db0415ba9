//! Cleaning Efficiency Score
//!
//! Multiplicative scoring of a factor set. The four weighted terms are
//! multiplied, not summed, so a weak factor collapses the whole score toward
//! zero: heat cannot compensate for a missing chemical, and vice versa.

use crate::factors::FactorSet;

/// Factor weights (temperature, chemical, mechanical, time)
const WEIGHTS: (f64, f64, f64, f64) = (0.25, 0.3, 0.25, 0.2);

/// Divisor bringing the raw product onto the 0-100 display scale
const NORMALIZER: f64 = 1000.0;

/// Maximum displayable score
const MAX_SCORE: f64 = 100.0;

/// Calculate the efficiency score for one factor set
///
/// `((t*0.25) * (c*0.3) * (m*0.25) * (time*0.2)) / 1000`, capped at 100.
/// Any factor at zero yields a score of exactly zero.
pub fn calculate_efficiency_score(factors: &FactorSet) -> f64 {
    let base_score = (factors.temperature * WEIGHTS.0)
        * (factors.chemical * WEIGHTS.1)
        * (factors.mechanical * WEIGHTS.2)
        * (factors.time * WEIGHTS.3)
        / NORMALIZER;

    MAX_SCORE.min(base_score)
}
