//! Cleaning Method Profiles
//!
//! Method-specific multiplicative modifiers applied to the industry baseline.
//! A modifier above 1.0 means the method leans on that factor (steam cleaning
//! nearly doubles the temperature share); below 1.0 means it relieves it.

use serde::{Deserialize, Serialize};

/// Supported cleaning methods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Method {
    HandBucket,
    PressureWasher,
    SteamCleaning,
    FoamLance,
    Cip,
    AutomaticWasher,
}

/// Unitless per-factor modifiers for one method
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MethodModifiers {
    pub temperature: f64,
    pub chemical: f64,
    pub mechanical: f64,
    pub time: f64,
}

impl Method {
    /// Resolve free-text method input
    ///
    /// Trim + case-insensitive exact match on the display names. Unrecognized
    /// input falls back to `HandBucket`, the least-equipped method.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "hand & bucket" => Method::HandBucket,
            "pressure washer" => Method::PressureWasher,
            "steam cleaning" => Method::SteamCleaning,
            "foam lance" => Method::FoamLance,
            "cip (clean in place)" => Method::Cip,
            "automatic washer" => Method::AutomaticWasher,
            _ => Method::HandBucket,
        }
    }

    /// Factor modifiers for this method
    pub fn modifiers(&self) -> MethodModifiers {
        match self {
            Method::HandBucket => MethodModifiers {
                temperature: 0.8,
                chemical: 1.0,
                mechanical: 0.7,
                time: 1.3,
            },
            Method::PressureWasher => MethodModifiers {
                temperature: 0.9,
                chemical: 0.8,
                mechanical: 1.5,
                time: 0.7,
            },
            Method::SteamCleaning => MethodModifiers {
                temperature: 1.8,
                chemical: 0.6,
                mechanical: 0.9,
                time: 0.8,
            },
            Method::FoamLance => MethodModifiers {
                temperature: 0.9,
                chemical: 1.4,
                mechanical: 0.8,
                time: 0.9,
            },
            Method::Cip => MethodModifiers {
                temperature: 1.2,
                chemical: 1.3,
                mechanical: 1.1,
                time: 0.6,
            },
            Method::AutomaticWasher => MethodModifiers {
                temperature: 1.1,
                chemical: 1.2,
                mechanical: 1.3,
                time: 0.7,
            },
        }
    }

    /// Short description for the results display
    pub fn description(&self) -> &'static str {
        match self {
            Method::HandBucket => "Manual cleaning with basic tools",
            Method::PressureWasher => "High pressure water cleaning",
            Method::SteamCleaning => "High temperature vapor cleaning",
            Method::FoamLance => "Chemical foam application",
            Method::Cip => "Automated cleaning system",
            Method::AutomaticWasher => "Machine-based cleaning",
        }
    }

    /// Friendly name for display
    pub fn display_name(&self) -> &'static str {
        match self {
            Method::HandBucket => "Hand & Bucket",
            Method::PressureWasher => "Pressure Washer",
            Method::SteamCleaning => "Steam Cleaning",
            Method::FoamLance => "Foam Lance",
            Method::Cip => "CIP (Clean in Place)",
            Method::AutomaticWasher => "Automatic Washer",
        }
    }

    /// All methods in display order
    pub fn all() -> &'static [Method] {
        &[
            Method::HandBucket,
            Method::PressureWasher,
            Method::SteamCleaning,
            Method::FoamLance,
            Method::Cip,
            Method::AutomaticWasher,
        ]
    }
}
