//! Scenario Validation
//!
//! The engine itself is infallible and lets degenerate arithmetic propagate
//! as non-finite values. Callers that want strict input checking (the CLI
//! does) validate the scenario here before invoking the engine.

use crate::optimizer::OptimizationInput;
use thiserror::Error;

/// Rejection reasons for a degenerate scenario
#[derive(Debug, Error, PartialEq)]
pub enum ScenarioError {
    #[error("current cleaning time must be a positive number of minutes, got {0}")]
    NonPositiveTime(f64),

    #[error("labor cost per hour must be a non-negative finite number, got {0}")]
    InvalidLaborCost(f64),

    #[error("every current factor must be finite and positive: {0:?}")]
    NonPositiveFactors(crate::factors::FactorSet),
}

/// Check a scenario for inputs that would produce non-finite output
///
/// Rejects `current_time <= 0` (division by zero in the savings projection),
/// non-positive current factors (zero efficiency score, division by zero in
/// the improvement ratio), and negative or non-finite labor cost.
pub fn validate_scenario(input: &OptimizationInput) -> Result<(), ScenarioError> {
    if !input.current_time.is_finite() || input.current_time <= 0.0 {
        return Err(ScenarioError::NonPositiveTime(input.current_time));
    }
    if !input.labor_cost_per_hour.is_finite() || input.labor_cost_per_hour < 0.0 {
        return Err(ScenarioError::InvalidLaborCost(input.labor_cost_per_hour));
    }
    if !input.current_factors.is_positive() {
        return Err(ScenarioError::NonPositiveFactors(input.current_factors));
    }
    Ok(())
}
