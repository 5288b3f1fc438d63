//! A single physical segment of a beam.

use std::collections::BTreeMap;

use crate::errors::ElementError;
use crate::loadcase::LoadCase;
use crate::loads::{Components, PositionSpec, SampledLoad};
use crate::section::SectionRef;

/// Key identifying a load case on an element or beam.
pub type CaseId = u32;

/// One physical segment of a [`Beam`](crate::Beam): a length, an optional
/// cross-section reference and a table of load cases.
///
/// Elements typically correspond to single FEA beam elements, several of
/// which make up one design beam. Positions on an element are normalised to
/// [0.0, 1.0]; an element may have zero length (a support insertion point,
/// for example), in which case local positions are ambiguous and queries
/// fall back to enumerating stored sample positions.
///
/// Immutable once constructed and owned by exactly one beam.
#[derive(Clone, Debug)]
pub struct Element {
    length: f64,
    section: Option<SectionRef>,
    loads: BTreeMap<CaseId, LoadCase>,
}

impl Element {
    /// Create an element.
    ///
    /// # Errors
    ///
    /// Returns [`ElementError::NegativeLength`] when `length` is negative.
    pub fn new(
        loads: BTreeMap<CaseId, LoadCase>,
        length: f64,
        section: Option<SectionRef>,
    ) -> Result<Self, ElementError> {
        if length < 0.0 || length.is_nan() {
            return Err(ElementError::NegativeLength { length });
        }
        Ok(Self {
            length,
            section,
            loads,
        })
    }

    /// Create an element with a single empty load case keyed 0.
    ///
    /// Useful as scaffolding when the load tables are not yet known.
    ///
    /// # Errors
    ///
    /// Returns [`ElementError::NegativeLength`] when `length` is negative.
    pub fn empty_element(length: f64, section: Option<SectionRef>) -> Result<Self, ElementError> {
        let mut loads = BTreeMap::new();
        loads.insert(0, LoadCase::empty());
        Self::new(loads, length, section)
    }

    /// Create an element with a single constant-load case.
    ///
    /// # Errors
    ///
    /// Returns [`ElementError::NegativeLength`] when `length` is negative.
    pub fn constant_load_element(
        case: CaseId,
        components: Components,
        length: f64,
        section: Option<SectionRef>,
    ) -> Result<Self, ElementError> {
        let mut loads = BTreeMap::new();
        loads.insert(case, LoadCase::constant_load(components));
        Self::new(loads, length, section)
    }

    /// The element's physical length.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// The element's cross-section, when one is assigned.
    #[must_use]
    pub fn section(&self) -> Option<SectionRef> {
        self.section.clone()
    }

    /// The number of load cases stored on the element.
    #[must_use]
    pub fn no_load_cases(&self) -> usize {
        self.loads.len()
    }

    /// The load case keys, ascending.
    #[must_use]
    pub fn load_cases(&self) -> Vec<CaseId> {
        self.loads.keys().copied().collect()
    }

    /// Look up a stored load case.
    ///
    /// # Errors
    ///
    /// Returns [`ElementError::LoadCaseNotFound`] when `case` is not stored
    /// on this element.
    pub fn case(&self, case: CaseId) -> Result<&LoadCase, ElementError> {
        self.loads
            .get(&case)
            .ok_or(ElementError::LoadCaseNotFound { case })
    }

    /// Resolve the loads for one case at the requested local positions.
    ///
    /// Returned row positions are element-local; multiply by
    /// [`length`](Self::length) for physical distances, or query through
    /// [`Beam::get_loads`](crate::Beam::get_loads) for beam-global
    /// positions.
    ///
    /// # Errors
    ///
    /// Returns [`ElementError::LoadCaseNotFound`] for an unknown case and
    /// propagates [`LoadCaseError`](crate::errors::LoadCaseError) from the
    /// delegate query.
    pub fn get_loads(
        &self,
        case: CaseId,
        positions: &PositionSpec,
    ) -> Result<Vec<SampledLoad>, ElementError> {
        Ok(self.case(case)?.get_load(positions)?)
    }

    /// The stored sample positions for one case, in table order.
    ///
    /// Used to discover load discontinuities along the element.
    ///
    /// # Errors
    ///
    /// Returns [`ElementError::LoadCaseNotFound`] for an unknown case.
    pub fn load_positions(&self, case: CaseId) -> Result<Vec<f64>, ElementError> {
        Ok(self.case(case)?.load_positions())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::LoadCaseError;
    use crate::loads::{components, LoadComponent, LoadSample};

    fn two_case_element() -> Element {
        let mut loads = BTreeMap::new();
        loads.insert(
            1,
            LoadCase::new(vec![
                LoadSample::new(0.0, components(0.0, 0.0, 1.0, 0.0, 0.0, 0.0)),
                LoadSample::new(1.0, components(0.0, 0.0, 3.0, 0.0, 0.0, 0.0)),
            ])
            .expect("valid sample table"),
        );
        loads.insert(4, LoadCase::empty());
        Element::new(loads, 2.5, None).expect("valid element")
    }

    #[test]
    fn reports_its_cases_in_ascending_key_order() {
        let element = two_case_element();
        assert_eq!(element.no_load_cases(), 2);
        assert_eq!(element.load_cases(), vec![1, 4]);
    }

    #[test]
    fn delegates_load_queries_to_the_keyed_case() {
        let element = two_case_element();
        let rows = element
            .get_loads(1, &PositionSpec::at(0.5))
            .expect("query succeeds");
        assert_eq!(rows.len(), 1);
        assert!((rows[0].component(LoadComponent::N).expect("value") - 2.0).abs() < 1.0e-12);
    }

    #[test]
    fn unknown_case_is_rejected() {
        let element = two_case_element();
        let error = element
            .get_loads(2, &PositionSpec::at(0.5))
            .expect_err("unknown case rejected");
        assert_eq!(error, ElementError::LoadCaseNotFound { case: 2 });
    }

    #[test]
    fn case_query_errors_are_propagated() {
        let element = two_case_element();
        let error = element
            .get_loads(1, &PositionSpec::At(Vec::new()))
            .expect_err("empty query rejected");
        assert_eq!(error, ElementError::Case(LoadCaseError::EmptyQuery));
    }

    #[test]
    fn negative_length_is_rejected() {
        let error = Element::empty_element(-1.0, None).expect_err("negative length rejected");
        assert_eq!(error, ElementError::NegativeLength { length: -1.0 });
    }

    #[test]
    fn empty_element_scaffolds_case_zero() {
        let element = Element::empty_element(1.0, None).expect("valid element");
        assert_eq!(element.load_cases(), vec![0]);
        let rows = element
            .get_loads(0, &PositionSpec::at(0.5))
            .expect("query succeeds");
        assert!(rows[0].components.is_none());
    }

    #[test]
    fn constant_load_element_is_uniform() {
        let element =
            Element::constant_load_element(3, components(0.0, 0.0, 5.0, 0.0, 0.0, 0.0), 2.0, None)
                .expect("valid element");
        for position in [0.0, 0.3, 1.0] {
            let rows = element
                .get_loads(3, &PositionSpec::at(position))
                .expect("query succeeds");
            assert!((rows[0].component(LoadComponent::N).expect("value") - 5.0).abs() < 1.0e-12);
        }
    }
}
