//! Surface Type Profiles
//!
//! Surface detection and chemical/mechanical modifiers. Unlike industry and
//! method, the surface is not a structured input: it is detected by keyword
//! containment in the free-text surface description ("metal tanks",
//! "concrete floor"). The keyword list is checked in a fixed declared order
//! and the first match wins; text matching nothing defaults to `Metal`.

use serde::{Deserialize, Serialize};

/// Detectable surface types, in match-priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Surface {
    Metal,
    Plastic,
    Glass,
    Concrete,
    Wood,
    Fabric,
    Ceramic,
    Rubber,
}

/// Chemical and mechanical modifiers for one surface
///
/// Temperature and time are surface-independent, so only two factors carry
/// surface modifiers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceModifiers {
    pub chemical: f64,
    pub mechanical: f64,
}

impl Surface {
    /// Detect the surface type from a free-text description
    ///
    /// Lowercases the text, then checks each keyword for substring
    /// containment in declaration order. First match wins; no match
    /// defaults to `Metal`.
    pub fn detect(description: &str) -> Self {
        let text = description.to_lowercase();
        Surface::all()
            .iter()
            .copied()
            .find(|surface| text.contains(surface.keyword()))
            .unwrap_or(Surface::Metal)
    }

    /// Detection keyword (also the lowercase display form)
    pub fn keyword(&self) -> &'static str {
        match self {
            Surface::Metal => "metal",
            Surface::Plastic => "plastic",
            Surface::Glass => "glass",
            Surface::Concrete => "concrete",
            Surface::Wood => "wood",
            Surface::Fabric => "fabric",
            Surface::Ceramic => "ceramic",
            Surface::Rubber => "rubber",
        }
    }

    /// Factor modifiers for this surface
    pub fn modifiers(&self) -> SurfaceModifiers {
        match self {
            Surface::Metal => SurfaceModifiers { chemical: 1.2, mechanical: 0.9 },
            Surface::Plastic => SurfaceModifiers { chemical: 0.8, mechanical: 0.7 },
            Surface::Glass => SurfaceModifiers { chemical: 0.9, mechanical: 0.6 },
            Surface::Concrete => SurfaceModifiers { chemical: 1.1, mechanical: 1.3 },
            Surface::Wood => SurfaceModifiers { chemical: 0.7, mechanical: 0.6 },
            Surface::Fabric => SurfaceModifiers { chemical: 1.0, mechanical: 0.5 },
            Surface::Ceramic => SurfaceModifiers { chemical: 0.9, mechanical: 0.8 },
            Surface::Rubber => SurfaceModifiers { chemical: 0.8, mechanical: 0.9 },
        }
    }

    /// All surface types in match-priority order
    ///
    /// Detection iterates this slice, so its order IS the tie-break for
    /// descriptions mentioning several surfaces.
    pub fn all() -> &'static [Surface] {
        &[
            Surface::Metal,
            Surface::Plastic,
            Surface::Glass,
            Surface::Concrete,
            Surface::Wood,
            Surface::Fabric,
            Surface::Ceramic,
            Surface::Rubber,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_simple() {
        assert_eq!(Surface::detect("metal tanks"), Surface::Metal);
        assert_eq!(Surface::detect("Concrete floor"), Surface::Concrete);
        assert_eq!(Surface::detect("glass windows"), Surface::Glass);
        assert_eq!(Surface::detect("RUBBER mats"), Surface::Rubber);
    }

    #[test]
    fn test_detect_substring() {
        // Keyword anywhere in a longer word or phrase counts
        assert_eq!(Surface::detect("sheet-metal ducting"), Surface::Metal);
        assert_eq!(Surface::detect("plywood shelving"), Surface::Wood);
    }

    #[test]
    fn test_detect_default() {
        // No keyword present defaults to Metal. "stainless steel tank"
        // contains no keyword, so it lands on Metal via the default.
        assert_eq!(Surface::detect("stainless steel tank"), Surface::Metal);
        assert_eq!(Surface::detect(""), Surface::Metal);
    }

    #[test]
    fn test_detect_first_match_wins() {
        // Metal precedes concrete in the priority order
        assert_eq!(Surface::detect("concrete and metal floor"), Surface::Metal);
        // Plastic precedes wood
        assert_eq!(Surface::detect("wood with plastic trim"), Surface::Plastic);
    }

    #[test]
    fn test_all_order_matches_priority() {
        assert_eq!(Surface::all().len(), 8);
        assert_eq!(Surface::all()[0], Surface::Metal);
        assert_eq!(Surface::all()[3], Surface::Concrete);
    }
}
