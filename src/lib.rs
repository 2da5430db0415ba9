//! Cleaning Process Optimizer
//!
//! Sinner's Circle advisory engine: recommends cleaning-process parameters
//! (temperature, chemical concentration, mechanical action, time) for an
//! industry / surface / method scenario and estimates the resulting time,
//! cost, and environmental savings.
//!
//! Structure:
//! - `profiles/`: Categorical reference data (industry, method, surface)
//! - `metrics/`: Derived computations (efficiency, savings, eco impact)
//! - `optimizer`: Top-level single-pass recommendation
//! - `report`: JSON snapshot export
//!
//! The engine is one deterministic, stateless transformation: table lookups
//! plus closed-form arithmetic, re-run in full on every invocation.

pub mod error;
pub mod factors;
pub mod metrics;
pub mod optimizer;
pub mod profiles;
pub mod report;

// Re-export commonly used types
pub use error::{validate_scenario, ScenarioError};
pub use factors::FactorSet;
pub use metrics::{calculate_eco_impact, calculate_efficiency_score, EcoImpact, TimeSavings};
pub use optimizer::{optimize, OptimizationInput, OptimizationResult};
pub use profiles::{Industry, Method, Surface};
pub use report::Report;
