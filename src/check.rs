//! Capacity checks layered on top of the beam query interface.
//!
//! This layer is a consumer of the core: it touches beams only through
//! [`Beam::get_section`] and [`Beam::get_loads`], never the element or load
//! tables directly, so any model the core can answer queries for can be
//! checked.

use crate::beam::Beam;
use crate::element::CaseId;
use crate::errors::CheckError;
use crate::loads::{LoadComponent, PositionSpec};
use crate::section::{Section, SectionRef};

/// Reduction applied to the gross ultimate capacity on the fracture path.
const FRACTURE_FACTOR: f64 = 0.85;

/// Sampling density used when scanning a whole beam for its governing
/// utilisation.
const DEFAULT_ASSESSMENT_POINTS: usize = 25;

/// A design check over a whole beam.
///
/// Implementations own the beam under assessment and expose the minimal
/// query surface design codes have in common.
pub trait CodeCheck {
    /// The beam under assessment.
    fn beam(&self) -> &Beam;

    /// Every element's section, in element order.
    fn sections(&self) -> Vec<Option<SectionRef>> {
        self.beam().sections()
    }

    /// Section references resolved at the requested positions, as
    /// [`Beam::get_section`] reports them.
    ///
    /// # Errors
    ///
    /// Fails as [`Beam::get_section`] does.
    fn get_section(
        &self,
        positions: &PositionSpec,
        load_case: Option<CaseId>,
    ) -> Result<(Vec<f64>, Vec<Option<SectionRef>>), CheckError> {
        Ok(self.beam().get_section(positions, load_case)?)
    }

    /// The governing (lowest) factored tension capacity at the requested
    /// positions.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::MissingSection`] when a resolved position has
    /// no section and propagates beam query failures.
    fn tension_capacity(&self, positions: &PositionSpec) -> Result<f64, CheckError>;

    /// The governing tension utilisation for one load case over the whole
    /// beam: the largest ratio of axial tension to factored capacity across
    /// the sampled positions. 0.0 when the case never goes into tension.
    ///
    /// # Errors
    ///
    /// Fails as [`tension_capacity`](Self::tension_capacity) does, plus for
    /// an unknown load case.
    fn tension_utilisation(&self, load_case: CaseId) -> Result<f64, CheckError>;
}

/// Member tension check using the classic yield / net-fracture capacity
/// pair.
///
/// The unfactored capacity of a section is the lesser of gross yield
/// (`A * fy`) and net fracture (`0.85 * kt * An * fu`); the reported
/// capacity applies the capacity (strength reduction) factor on top.
#[derive(Clone, Debug)]
pub struct TensionCheck {
    beam: Beam,
    capacity_factor: f64,
    connection_factor: f64,
    assessment_points: usize,
}

impl TensionCheck {
    /// Create a tension check.
    ///
    /// `capacity_factor` is the code's strength reduction factor (phi) and
    /// `connection_factor` the end-connection efficiency (kt) applied on
    /// the fracture path.
    #[must_use]
    pub fn new(beam: Beam, capacity_factor: f64, connection_factor: f64) -> Self {
        Self {
            beam,
            capacity_factor,
            connection_factor,
            assessment_points: DEFAULT_ASSESSMENT_POINTS,
        }
    }

    /// Override the sampling density used by
    /// [`tension_utilisation`](CodeCheck::tension_utilisation).
    #[must_use]
    pub fn with_assessment_points(mut self, assessment_points: usize) -> Self {
        self.assessment_points = assessment_points;
        self
    }

    /// Unfactored tension capacity of one section.
    fn section_capacity(&self, section: &dyn Section) -> f64 {
        let yield_capacity = section.area() * section.min_strength_yield();
        let fracture_capacity = FRACTURE_FACTOR
            * self.connection_factor
            * section.area_net()
            * section.min_strength_ultimate();
        yield_capacity.min(fracture_capacity)
    }
}

impl CodeCheck for TensionCheck {
    fn beam(&self) -> &Beam {
        &self.beam
    }

    fn tension_capacity(&self, positions: &PositionSpec) -> Result<f64, CheckError> {
        let (globals, sections) = self.beam.get_section(positions, None)?;

        let mut governing = f64::INFINITY;
        for (position, section) in globals.iter().zip(&sections) {
            let section = section
                .as_ref()
                .ok_or(CheckError::MissingSection {
                    position: *position,
                })?;
            let capacity = self.capacity_factor * self.section_capacity(section.as_ref());
            governing = governing.min(capacity);
        }
        Ok(governing)
    }

    fn tension_utilisation(&self, load_case: CaseId) -> Result<f64, CheckError> {
        let resolved = self
            .beam
            .list_positions(&PositionSpec::MinCount(self.assessment_points), Some(load_case))?;

        let mut governing: f64 = 0.0;
        for location in resolved {
            let position = PositionSpec::at(location.position);
            let capacity = self.tension_capacity(&position)?;
            for row in self.beam.get_loads(load_case, &position)? {
                if let Some(axial) = row.component(LoadComponent::N) {
                    if axial > 0.0 {
                        governing = governing.max(axial / capacity);
                    }
                }
            }
        }
        Ok(governing)
    }
}
