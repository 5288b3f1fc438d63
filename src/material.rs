//! Material properties consumed by section strength lookups.

use serde::{Deserialize, Serialize};

/// A structural material, reduced to the strengths the capacity checks need.
///
/// Deliberately small: design-code-specific values (capacity factors,
/// thickness-dependent strength tables and so on) belong to the checking
/// layer, not here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Display name, e.g. a standard grade designation.
    pub name: String,
    /// Yield strength in consistent stress units.
    pub strength_yield: f64,
    /// Ultimate (tensile) strength in the same units.
    pub strength_ultimate: f64,
}

impl Material {
    /// Create a material with explicit strengths.
    #[must_use]
    pub fn new(name: impl Into<String>, strength_yield: f64, strength_ultimate: f64) -> Self {
        Self {
            name: name.into(),
            strength_yield,
            strength_ultimate,
        }
    }

    /// Grade 250 structural steel (strengths in pascals).
    #[must_use]
    pub fn steel_250() -> Self {
        Self::new("250", 250.0e6, 410.0e6)
    }

    /// Grade 300 structural steel (strengths in pascals).
    #[must_use]
    pub fn steel_300() -> Self {
        Self::new("300", 300.0e6, 430.0e6)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogue_grades_are_ordered() {
        let g250 = Material::steel_250();
        let g300 = Material::steel_300();
        assert!(g250.strength_yield < g300.strength_yield);
        assert!(g250.strength_ultimate < g300.strength_ultimate);
    }

    #[test]
    fn serialises_round_trip() {
        let material = Material::new("X", 350.0e6, 450.0e6);
        let json = serde_json::to_string(&material).expect("material serialises");
        let back: Material = serde_json::from_str(&json).expect("material deserialises");
        assert_eq!(material, back);
    }
}
