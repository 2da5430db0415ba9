//! Derived metric computations
//!
//! Each metric is a pure function over one or two `FactorSet`s: efficiency
//! score, time/cost savings, and environmental impact.

pub mod eco;
pub mod efficiency;
pub mod savings;

pub use eco::{calculate_eco_impact, EcoImpact};
pub use efficiency::calculate_efficiency_score;
pub use savings::{calculate_time_savings, TimeSavings};
