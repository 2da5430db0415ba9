//! Time and Labor-Cost Savings
//!
//! Projects how long the job should take at the optimized settings and what
//! that does to per-cleaning labor cost. The projection scales the current
//! duration by the current/optimized efficiency ratio.
//!
//! Degenerate inputs (zero current time, zero current efficiency) are NOT
//! rejected here: the resulting non-finite values propagate to the caller.
//! Boundary validation is the CLI's job (see `ScenarioError`).

use crate::factors::FactorSet;
use crate::metrics::efficiency::calculate_efficiency_score;
use serde::{Deserialize, Serialize};

/// Projected time and labor-cost outcomes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeSavings {
    /// Minutes saved per cleaning (rounded)
    pub time_saved: f64,
    /// Percent reduction of the current duration (rounded)
    pub percentage_improvement: f64,
    /// Labor cost of the current process, rounded to cents
    pub current_labor_cost: f64,
    /// Labor cost at the optimized settings, rounded to cents
    pub optimized_labor_cost: f64,
    /// Cost difference per cleaning, rounded to cents
    pub cost_savings_per_cleaning: f64,
    /// Projected duration at the optimized settings, in minutes (rounded)
    pub estimated_new_time: f64,
}

/// Round a currency amount to cents
fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Calculate time and cost savings from the efficiency ratio
///
/// `estimated_new_time = current_time / (optimized_eff / current_eff)`.
/// A zero current efficiency drives the ratio to infinity or NaN and the
/// non-finite values flow through unchanged.
pub fn calculate_time_savings(
    current_time: f64,
    current_factors: &FactorSet,
    optimized_factors: &FactorSet,
    labor_cost_per_hour: f64,
) -> TimeSavings {
    let current_efficiency = calculate_efficiency_score(current_factors);
    let optimized_efficiency = calculate_efficiency_score(optimized_factors);

    let improvement_ratio = optimized_efficiency / current_efficiency;
    let estimated_new_time = current_time / improvement_ratio;
    let time_saved = current_time - estimated_new_time;

    let current_labor_cost = (current_time / 60.0) * labor_cost_per_hour;
    let optimized_labor_cost = (estimated_new_time / 60.0) * labor_cost_per_hour;
    let cost_savings = current_labor_cost - optimized_labor_cost;

    TimeSavings {
        time_saved: time_saved.round(),
        percentage_improvement: ((1.0 - estimated_new_time / current_time) * 100.0).round(),
        current_labor_cost: round_cents(current_labor_cost),
        optimized_labor_cost: round_cents(optimized_labor_cost),
        cost_savings_per_cleaning: round_cents(cost_savings),
        estimated_new_time: estimated_new_time.round(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_doubled_efficiency_halves_time() {
        // Optimized scores exactly 2x the current efficiency:
        // doubling one factor doubles the multiplicative score.
        let current = FactorSet::new(40.0, 40.0, 40.0, 40.0);
        let optimized = FactorSet::new(80.0, 40.0, 40.0, 40.0);

        let savings = calculate_time_savings(60.0, &current, &optimized, 30.0);

        assert_relative_eq!(savings.estimated_new_time, 30.0, epsilon = 1e-9);
        assert_relative_eq!(savings.time_saved, 30.0, epsilon = 1e-9);
        assert_relative_eq!(savings.percentage_improvement, 50.0, epsilon = 1e-9);
        assert_relative_eq!(savings.current_labor_cost, 30.0, epsilon = 1e-9);
        assert_relative_eq!(savings.optimized_labor_cost, 15.0, epsilon = 1e-9);
        assert_relative_eq!(savings.cost_savings_per_cleaning, 15.0, epsilon = 1e-9);
    }

    #[test]
    fn test_costs_rounded_to_cents() {
        let current = FactorSet::new(40.0, 40.0, 40.0, 40.0);
        let optimized = FactorSet::new(60.0, 40.0, 40.0, 40.0);

        // 45 min at $27.50/h: current cost 20.625 -> 20.63
        let savings = calculate_time_savings(45.0, &current, &optimized, 27.5);
        assert_eq!(savings.current_labor_cost, 20.63);
    }

    #[test]
    fn test_identical_factors_save_nothing() {
        let factors = FactorSet::new(55.0, 65.0, 45.0, 70.0);
        let savings = calculate_time_savings(90.0, &factors, &factors, 25.0);

        assert_eq!(savings.time_saved, 0.0);
        assert_eq!(savings.percentage_improvement, 0.0);
        assert_eq!(savings.cost_savings_per_cleaning, 0.0);
        assert_eq!(savings.estimated_new_time, 90.0);
    }

    #[test]
    fn test_zero_current_time_yields_nan_percentage() {
        // Documents the legacy degenerate behavior: 0/0 in the percentage
        // term. Boundary validation is expected to reject this upstream.
        let current = FactorSet::new(40.0, 40.0, 40.0, 40.0);
        let optimized = FactorSet::new(80.0, 40.0, 40.0, 40.0);

        let savings = calculate_time_savings(0.0, &current, &optimized, 30.0);
        assert!(savings.percentage_improvement.is_nan());
        assert_eq!(savings.current_labor_cost, 0.0);
        assert_eq!(savings.estimated_new_time, 0.0);
    }

    #[test]
    fn test_zero_current_efficiency_yields_nonfinite_time() {
        // Current efficiency 0 -> improvement ratio is infinite -> new time 0,
        // full time saved. Both scores 0 would instead yield NaN throughout.
        let current = FactorSet::new(0.0, 40.0, 40.0, 40.0);
        let optimized = FactorSet::new(80.0, 40.0, 40.0, 40.0);

        let savings = calculate_time_savings(60.0, &current, &optimized, 30.0);
        assert_eq!(savings.estimated_new_time, 0.0);
        assert_eq!(savings.time_saved, 60.0);
        assert_eq!(savings.percentage_improvement, 100.0);

        let both_zero = calculate_time_savings(60.0, &current, &current, 30.0);
        assert!(both_zero.estimated_new_time.is_nan());
    }
}
