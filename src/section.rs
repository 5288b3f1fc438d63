//! Cross-section properties consumed by the capacity-check layer.

use std::f64::consts::PI;
use std::fmt::Debug;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::errors::SectionError;
use crate::material::Material;

/// Read-only cross-section properties.
///
/// The interpolation core never inspects these values itself; it only hands
/// section references back from position queries. Capacity checks consume
/// them.
pub trait Section: Debug + Send + Sync {
    /// Gross cross-sectional area.
    fn area(&self) -> f64;

    /// Net area after deductions (bolt holes etc.). Defaults to the gross
    /// area, which is exact for simple solid shapes.
    fn area_net(&self) -> f64 {
        self.area()
    }

    /// Minimum yield strength of the section's material.
    fn min_strength_yield(&self) -> f64;

    /// Minimum ultimate strength of the section's material.
    fn min_strength_ultimate(&self) -> f64;

    /// Whether the section is circular.
    fn is_circle(&self) -> bool {
        false
    }

    /// Whether the section is hollow.
    fn is_hollow(&self) -> bool {
        false
    }
}

/// Shared, thread-safe handle to a section.
///
/// Sections are referenced, not owned, by elements; many elements commonly
/// share one section.
pub type SectionRef = Arc<dyn Section>;

/// A solid circular section.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    /// Radius of the section.
    pub radius: f64,
    /// The section's material.
    pub material: Material,
}

impl Circle {
    /// Create a solid circular section.
    #[must_use]
    pub fn new(radius: f64, material: Material) -> Self {
        Self { radius, material }
    }
}

impl Section for Circle {
    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    fn min_strength_yield(&self) -> f64 {
        self.material.strength_yield
    }

    fn min_strength_ultimate(&self) -> f64 {
        self.material.strength_ultimate
    }

    fn is_circle(&self) -> bool {
        true
    }
}

/// A hollow circular section.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HollowCircle {
    radius_outer: f64,
    radius_inner: f64,
    /// The section's material.
    pub material: Material,
}

impl HollowCircle {
    /// Create a hollow circular section.
    ///
    /// # Errors
    ///
    /// Returns [`SectionError::InvalidRadii`] when the inner radius is not
    /// smaller than the outer radius.
    pub fn new(
        radius_outer: f64,
        radius_inner: f64,
        material: Material,
    ) -> Result<Self, SectionError> {
        if radius_inner >= radius_outer {
            return Err(SectionError::InvalidRadii {
                outer: radius_outer,
                inner: radius_inner,
            });
        }
        Ok(Self {
            radius_outer,
            radius_inner,
            material,
        })
    }

    /// The outer radius.
    #[must_use]
    pub fn radius_outer(&self) -> f64 {
        self.radius_outer
    }

    /// The inner radius.
    #[must_use]
    pub fn radius_inner(&self) -> f64 {
        self.radius_inner
    }
}

impl Section for HollowCircle {
    fn area(&self) -> f64 {
        PI * (self.radius_outer * self.radius_outer - self.radius_inner * self.radius_inner)
    }

    fn min_strength_yield(&self) -> f64 {
        self.material.strength_yield
    }

    fn min_strength_ultimate(&self) -> f64 {
        self.material.strength_ultimate
    }

    fn is_circle(&self) -> bool {
        true
    }

    fn is_hollow(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circle_area_matches_closed_form() {
        let section = Circle::new(0.02, Material::steel_300());
        assert!((section.area() - PI * 0.0004).abs() < 1.0e-15);
        assert!((section.area_net() - section.area()).abs() < f64::EPSILON);
        assert!(section.is_circle());
        assert!(!section.is_hollow());
    }

    #[test]
    fn hollow_circle_area_subtracts_the_void() {
        let section =
            HollowCircle::new(0.05, 0.04, Material::steel_250()).expect("valid radii accepted");
        let expected = PI * (0.05_f64.powi(2) - 0.04_f64.powi(2));
        assert!((section.area() - expected).abs() < 1.0e-15);
        assert!(section.is_hollow());
    }

    #[test]
    fn hollow_circle_rejects_inner_radius_at_or_above_outer() {
        let error =
            HollowCircle::new(0.04, 0.05, Material::steel_250()).expect_err("radii rejected");
        assert_eq!(
            error,
            SectionError::InvalidRadii {
                outer: 0.04,
                inner: 0.05
            }
        );
    }

    #[test]
    fn strengths_come_from_the_material() {
        let section = Circle::new(0.02, Material::steel_300());
        assert!((section.min_strength_yield() - 300.0e6).abs() < f64::EPSILON);
        assert!((section.min_strength_ultimate() - 430.0e6).abs() < f64::EPSILON);
    }
}
