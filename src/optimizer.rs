//! Optimizer - Main coordinator for cleaning-process recommendations
//!
//! Resolves the scenario's categorical inputs against the reference profiles,
//! derives the recommended factor settings, and runs every metric over the
//! current and recommended configurations. One pure, stateless pass per call;
//! nothing is cached between invocations.

use crate::factors::FactorSet;
use crate::metrics::{calculate_eco_impact, calculate_efficiency_score, calculate_time_savings};
use crate::metrics::{EcoImpact, TimeSavings};
use crate::profiles::{Industry, Method, Surface};
use serde::{Deserialize, Serialize};

/// One cleaning scenario as described by the user
///
/// The three categorical fields are free text; resolution is lenient and
/// falls back to documented defaults (`Industry::ContractCleaning`,
/// `Method::HandBucket`, `Surface::Metal`) rather than failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationInput {
    pub industry: String,
    pub surface: String,
    pub method: String,
    /// Current duration of one cleaning, in minutes
    pub current_time: f64,
    pub labor_cost_per_hour: f64,
    pub current_factors: FactorSet,
}

/// Current vs. optimized efficiency scores
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EfficiencyComparison {
    pub current: f64,
    pub optimized: f64,
}

/// Current vs. optimized environmental impact
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EcoComparison {
    pub current: EcoImpact,
    pub optimized: EcoImpact,
}

/// Resolved scenario categories and their display descriptions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioContext {
    pub industry: Industry,
    pub method: Method,
    pub surface: Surface,
    pub industry_profile: String,
    pub method_profile: String,
    pub surface_type: String,
}

/// Complete recommendation for one scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationResult {
    pub current_factors: FactorSet,
    pub optimized_factors: FactorSet,
    pub time_savings: TimeSavings,
    pub eco_impact: EcoComparison,
    pub efficiency: EfficiencyComparison,
    pub context: ScenarioContext,
}

/// Derive the recommended factor settings for a resolved scenario
///
/// Industry baseline x method modifier per factor; chemical and mechanical
/// additionally pick up the surface modifier. Each result is rounded to the
/// nearest integer and deliberately NOT clamped: steam cleaning on a hot
/// industry baseline can push temperature past 100.
fn optimized_factors(industry: Industry, method: Method, surface: Surface) -> FactorSet {
    let baseline = industry.baseline();
    let method_mods = method.modifiers();
    let surface_mods = surface.modifiers();

    FactorSet {
        temperature: (baseline.temperature * method_mods.temperature).round(),
        chemical: (baseline.chemical * method_mods.chemical * surface_mods.chemical).round(),
        mechanical: (baseline.mechanical * method_mods.mechanical * surface_mods.mechanical)
            .round(),
        time: (baseline.time * method_mods.time).round(),
    }
}

/// Run the full recommendation pass for one scenario
///
/// Always succeeds: unrecognized categorical text falls back to defaults and
/// degenerate numeric inputs (zero current time, zero factors) produce
/// non-finite values in the output instead of errors. Callers wanting strict
/// input checking should validate first (see `validate_scenario`).
pub fn optimize(input: &OptimizationInput) -> OptimizationResult {
    let industry = Industry::from_name(&input.industry);
    let method = Method::from_name(&input.method);
    let surface = Surface::detect(&input.surface);

    let optimized = optimized_factors(industry, method, surface);

    let time_savings = calculate_time_savings(
        input.current_time,
        &input.current_factors,
        &optimized,
        input.labor_cost_per_hour,
    );

    OptimizationResult {
        current_factors: input.current_factors,
        optimized_factors: optimized,
        time_savings,
        eco_impact: EcoComparison {
            current: calculate_eco_impact(&input.current_factors),
            optimized: calculate_eco_impact(&optimized),
        },
        efficiency: EfficiencyComparison {
            current: calculate_efficiency_score(&input.current_factors),
            optimized: calculate_efficiency_score(&optimized),
        },
        context: ScenarioContext {
            industry,
            method,
            surface,
            industry_profile: industry.description().to_string(),
            method_profile: method.description().to_string(),
            surface_type: surface.keyword().to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn food_beverage_input() -> OptimizationInput {
        OptimizationInput {
            industry: "Food & Beverage".to_string(),
            surface: "metal tanks".to_string(),
            method: "Steam Cleaning".to_string(),
            current_time: 60.0,
            labor_cost_per_hour: 30.0,
            current_factors: FactorSet::default(),
        }
    }

    #[test]
    fn test_food_beverage_steam_on_metal() {
        let result = optimize(&food_beverage_input());

        // baseline 75/80/60/35, steam 1.8/0.6/0.9/0.8, metal 1.2 chem / 0.9 mech
        assert_eq!(result.optimized_factors.temperature, 135.0); // uncapped
        assert_eq!(result.optimized_factors.chemical, 58.0); // round(80*0.6*1.2)
        assert_eq!(result.optimized_factors.mechanical, 49.0); // round(60*0.9*0.9)
        assert_eq!(result.optimized_factors.time, 28.0); // round(35*0.8)

        assert_eq!(result.context.industry, Industry::FoodBeverage);
        assert_eq!(result.context.method, Method::SteamCleaning);
        assert_eq!(result.context.surface, Surface::Metal);
        assert_eq!(result.context.surface_type, "metal");
        assert_eq!(
            result.context.industry_profile,
            "Sanitation critical, organic residues"
        );
    }

    #[test]
    fn test_unknown_categories_fall_back() {
        let input = OptimizationInput {
            industry: "Foo".to_string(),
            surface: "upholstered seats".to_string(),
            method: "dry ice blasting".to_string(),
            current_time: 45.0,
            labor_cost_per_hour: 25.0,
            current_factors: FactorSet::default(),
        };
        let result = optimize(&input);

        assert_eq!(result.context.industry, Industry::ContractCleaning);
        assert_eq!(result.context.method, Method::HandBucket);
        assert_eq!(result.context.surface, Surface::Metal);

        // Contract Cleaning 40/60/70/80 under Hand & Bucket on Metal
        assert_eq!(result.optimized_factors.temperature, 32.0); // round(40*0.8)
        assert_eq!(result.optimized_factors.chemical, 72.0); // round(60*1.0*1.2)
        assert_eq!(result.optimized_factors.mechanical, 44.0); // round(70*0.7*0.9)
        assert_eq!(result.optimized_factors.time, 104.0); // round(80*1.3)
    }

    #[test]
    fn test_current_factors_pass_through() {
        let mut input = food_beverage_input();
        input.current_factors = FactorSet::new(30.0, 70.0, 55.0, 80.0);
        let result = optimize(&input);

        assert_eq!(result.current_factors, input.current_factors);
        // Efficiency of the current configuration is computed from the
        // user's factors, untouched by profile resolution.
        assert_eq!(
            result.efficiency.current,
            crate::metrics::calculate_efficiency_score(&input.current_factors)
        );
    }

    #[test]
    fn test_deterministic() {
        let input = food_beverage_input();
        assert_eq!(optimize(&input), optimize(&input));
    }

    #[test]
    fn test_result_serde_round_trip() {
        let result = optimize(&food_beverage_input());
        let json = serde_json::to_string(&result).unwrap();
        let back: OptimizationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, back);
    }
}
