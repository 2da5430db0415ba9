//! Categorical reference profiles
//!
//! Fixed lookup data for the three scenario axes: industry, cleaning method,
//! and surface type. Each axis is a closed enum resolved from free text with
//! a documented default, so downstream code never handles raw strings.

pub mod industry;
pub mod method;
pub mod surface;

pub use industry::Industry;
pub use method::Method;
pub use surface::Surface;
