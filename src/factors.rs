//! Sinner's Circle Factor Set
//!
//! The four cleaning-process variables balanced against each other:
//! temperature, chemical concentration, mechanical action, and time.
//! Each is nominally on a 0-100 scale; the range is not enforced.

use serde::{Deserialize, Serialize};

/// The four Sinner's Circle variables for one process configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FactorSet {
    pub temperature: f64,
    pub chemical: f64,
    pub mechanical: f64,
    pub time: f64,
}

impl FactorSet {
    pub fn new(temperature: f64, chemical: f64, mechanical: f64, time: f64) -> Self {
        Self {
            temperature,
            chemical,
            mechanical,
            time,
        }
    }

    /// True when every factor is a finite, strictly positive number
    ///
    /// Used for boundary validation only; the engine itself accepts any
    /// values and lets degenerate arithmetic propagate.
    pub fn is_positive(&self) -> bool {
        [self.temperature, self.chemical, self.mechanical, self.time]
            .iter()
            .all(|v| v.is_finite() && *v > 0.0)
    }
}

impl Default for FactorSet {
    /// Mid-scale starting point (matches the slider defaults of the
    /// advisory front-end this engine was built for)
    fn default() -> Self {
        Self::new(50.0, 50.0, 50.0, 50.0)
    }
}
