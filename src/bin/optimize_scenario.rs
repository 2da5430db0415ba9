//! Run the optimizer on a scenario file
//!
//! Usage: cargo run --bin optimize_scenario -- <scenario.json> [report.json]
//!
//! The scenario file is an `OptimizationInput` as JSON:
//! ```json
//! {
//!   "industry": "Food & Beverage",
//!   "surface": "metal tanks",
//!   "method": "Steam Cleaning",
//!   "current_time": 60,
//!   "labor_cost_per_hour": 30.0,
//!   "current_factors": { "temperature": 50, "chemical": 50, "mechanical": 50, "time": 50 }
//! }
//! ```
//! Prints a summary; with a second argument, also writes the full report JSON.

use anyhow::{bail, Context, Result};
use cleaning_optimizer_rust::{optimize, validate_scenario, OptimizationInput, Report};
use std::fs;
use std::path::Path;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        bail!("Usage: optimize_scenario <scenario.json> [report.json]");
    }

    let scenario_path = Path::new(&args[1]);
    let contents = fs::read_to_string(scenario_path)
        .with_context(|| format!("Failed to read scenario file: {:?}", scenario_path))?;
    let input: OptimizationInput =
        serde_json::from_str(&contents).context("Failed to parse scenario JSON")?;

    // Reject degenerate scenarios before they turn into NaN output
    validate_scenario(&input).context("Invalid scenario")?;

    let results = optimize(&input);

    println!("\nCleaning Process Optimization");
    println!("=============================");
    println!("Industry: {} ({})", results.context.industry.display_name(), results.context.industry_profile);
    println!("Method:   {} ({})", results.context.method.display_name(), results.context.method_profile);
    println!("Surface:  {}", results.context.surface_type);
    println!();
    println!("Factors (current -> optimized):");
    println!("  Temperature: {:>5.0} -> {:>5.0}", input.current_factors.temperature, results.optimized_factors.temperature);
    println!("  Chemical:    {:>5.0} -> {:>5.0}", input.current_factors.chemical, results.optimized_factors.chemical);
    println!("  Mechanical:  {:>5.0} -> {:>5.0}", input.current_factors.mechanical, results.optimized_factors.mechanical);
    println!("  Time:        {:>5.0} -> {:>5.0}", input.current_factors.time, results.optimized_factors.time);
    println!();
    println!("Efficiency:  {:.1} -> {:.1}", results.efficiency.current, results.efficiency.optimized);
    println!(
        "Time:        {:.0} min -> {:.0} min ({:.0}% improvement, {:.0} min saved)",
        input.current_time,
        results.time_savings.estimated_new_time,
        results.time_savings.percentage_improvement,
        results.time_savings.time_saved
    );
    println!(
        "Labor cost:  ${:.2} -> ${:.2} (${:.2} saved per cleaning)",
        results.time_savings.current_labor_cost,
        results.time_savings.optimized_labor_cost,
        results.time_savings.cost_savings_per_cleaning
    );
    println!();
    println!("Eco impact (current -> optimized):");
    println!("  Energy:   {:.2} -> {:.2}", results.eco_impact.current.energy, results.eco_impact.optimized.energy);
    println!("  Water:    {:.2} -> {:.2}", results.eco_impact.current.water, results.eco_impact.optimized.water);
    println!("  Chemical: {:.2} -> {:.2}", results.eco_impact.current.chemical, results.eco_impact.optimized.chemical);

    if let Some(report_path) = args.get(2) {
        let report = Report::new(input, results);
        report.write_to_file(Path::new(report_path))?;
        println!("\nReport written to {}", report_path);
    }

    Ok(())
}
