//! A design beam composed of contiguous elements, and the position
//! resolution that maps beam-global queries onto them.

use crate::element::{CaseId, Element};
use crate::errors::BeamError;
use crate::loads::{linspace, sort_dedup, PositionSpec, SampledLoad};
use crate::section::SectionRef;

/// One resolved query position: where it sits on the beam and on which
/// element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedPosition {
    /// Beam-global position in [0.0, beam length].
    pub position: f64,
    /// Index of the element containing the position.
    pub element: usize,
    /// Normalised local position on that element, in [0.0, 1.0].
    pub local_position: f64,
}

/// A full structural member: an ordered sequence of contiguous
/// [`Element`]s.
///
/// Element `i` ends exactly where element `i + 1` starts, so a beam-global
/// position in [0.0, [`length`](Self::length)] identifies a point on the
/// member; a position exactly on an element join belongs to both adjacent
/// elements, which is how discontinuities across joins are preserved.
///
/// Construction validates that every element carries the same set of load
/// case keys. A validated beam is immutable and can be shared freely across
/// threads.
#[derive(Clone, Debug)]
pub struct Beam {
    elements: Vec<Element>,
}

impl Beam {
    /// Create a beam from an ordered element sequence.
    ///
    /// # Errors
    ///
    /// Returns [`BeamError::NoElements`] for an empty sequence, and
    /// [`BeamError::InconsistentLoadCaseCount`] or
    /// [`BeamError::InconsistentLoadCaseKeys`] when the elements disagree on
    /// their load case keys. On failure no beam is constructed.
    pub fn new(elements: Vec<Element>) -> Result<Self, BeamError> {
        Self::check_elements(&elements)?;
        Ok(Self { elements })
    }

    /// Create a single-element beam with an empty load case keyed 0.
    ///
    /// Primarily scaffolding for tests and incremental model building.
    ///
    /// # Errors
    ///
    /// Returns [`BeamError::Element`] when `length` is negative.
    pub fn empty_beam(length: f64, section: Option<SectionRef>) -> Result<Self, BeamError> {
        let element = Element::empty_element(length, section)?;
        Self::new(vec![element])
    }

    /// Consistency checks shared by all constructors.
    fn check_elements(elements: &[Element]) -> Result<(), BeamError> {
        let first = match elements.first() {
            Some(element) => element,
            None => return Err(BeamError::NoElements),
        };

        let expected_count = first.no_load_cases();
        let expected_cases = first.load_cases();

        for (index, element) in elements.iter().enumerate().skip(1) {
            let found = element.no_load_cases();
            if found != expected_count {
                return Err(BeamError::InconsistentLoadCaseCount {
                    expected: expected_count,
                    element: index,
                    found,
                });
            }
            if element.load_cases() != expected_cases {
                return Err(BeamError::InconsistentLoadCaseKeys { element: index });
            }
        }
        Ok(())
    }

    /// The elements that make up the beam.
    #[must_use]
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// The number of elements in the beam.
    #[must_use]
    pub fn no_elements(&self) -> usize {
        self.elements.len()
    }

    /// Total physical length: the sum of the element lengths.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.elements.iter().map(Element::length).sum()
    }

    /// The number of load cases on every element.
    #[must_use]
    pub fn no_load_cases(&self) -> usize {
        self.elements[0].no_load_cases()
    }

    /// The load case keys shared by every element, ascending.
    #[must_use]
    pub fn load_cases(&self) -> Vec<CaseId> {
        self.elements[0].load_cases()
    }

    /// Each element's `(start, end)` interval in beam-global coordinates.
    ///
    /// The first interval starts at 0.0 and the last ends at
    /// [`length`](Self::length).
    #[must_use]
    pub fn element_ends(&self) -> Vec<(f64, f64)> {
        let mut ends = Vec::with_capacity(self.elements.len());
        let mut start = 0.0;
        for element in &self.elements {
            let end = start + element.length();
            ends.push((start, end));
            start = end;
        }
        ends
    }

    /// The `(start, end)` interval of one element in beam-global
    /// coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`BeamError::UnknownElement`] when `element` is out of range.
    pub fn element_start_end(&self, element: usize) -> Result<(f64, f64), BeamError> {
        self.element_ends()
            .get(element)
            .copied()
            .ok_or(BeamError::UnknownElement(element))
    }

    /// Each element's section reference, in element order.
    #[must_use]
    pub fn sections(&self) -> Vec<Option<SectionRef>> {
        self.elements.iter().map(Element::section).collect()
    }

    /// Indices of every element whose span contains `position`, ascending.
    ///
    /// A position exactly on an element join is in both adjacent elements;
    /// a position outside [0.0, beam length] is in none.
    #[must_use]
    pub fn in_elements(&self, position: f64) -> Vec<usize> {
        self.element_ends()
            .iter()
            .enumerate()
            .filter(|(_, (start, end))| position >= *start && position <= *end)
            .map(|(index, _)| index)
            .collect()
    }

    /// Convert a beam-global position to a local position on one element.
    ///
    /// # Errors
    ///
    /// Returns [`BeamError::UnknownElement`] for an invalid element index,
    /// [`BeamError::PositionNotInElement`] when `position` is outside the
    /// element's span, and [`BeamError::ZeroLengthElement`] when the element
    /// has zero length and the local coordinate is therefore ambiguous.
    pub fn beam_to_local_position(&self, position: f64, element: usize) -> Result<f64, BeamError> {
        let (start, _) = self.element_start_end(element)?;
        let length = self.elements[element].length();

        let overlap = position - start;
        if overlap.is_nan() || overlap < 0.0 || overlap > length {
            return Err(BeamError::PositionNotInElement { position, element });
        }
        if length == 0.0 {
            return Err(BeamError::ZeroLengthElement { element });
        }
        Ok(overlap / length)
    }

    /// Convert a local position on one element to a beam-global position.
    ///
    /// # Errors
    ///
    /// Returns [`BeamError::UnknownElement`] for an invalid element index
    /// and [`BeamError::PositionNotInElement`] when `position` is outside
    /// [0.0, 1.0].
    pub fn local_to_beam_position(&self, position: f64, element: usize) -> Result<f64, BeamError> {
        if !(0.0..=1.0).contains(&position) {
            return Err(BeamError::PositionNotInElement { position, element });
        }
        let (start, _) = self.element_start_end(element)?;
        Ok(start + position * self.elements[element].length())
    }

    /// Resolve a position specification into `(global, element, local)`
    /// rows.
    ///
    /// For explicit positions the rows cover exactly those positions. For
    /// [`PositionSpec::MinCount`] the evenly spaced grid is merged with
    /// every element boundary and, when `load_case` is given, with every
    /// stored sample position of that case converted to beam-global
    /// coordinates, so no discontinuity is skipped.
    ///
    /// Every element containing a position contributes a row (two rows at an
    /// element join). A zero-length element contributes one row per relevant
    /// local sample position instead: `{0.0, 1.0}` without a load case, or
    /// the case's stored positions padded to include both ends.
    ///
    /// Rows are ordered by global position ascending, ties by element index
    /// ascending.
    ///
    /// # Errors
    ///
    /// Returns [`BeamError::InvalidPosition`] for an empty explicit list,
    /// [`BeamError::PositionNotInBeam`] for explicit positions outside the
    /// beam and [`BeamError::Element`] for an unknown load case.
    pub fn list_positions(
        &self,
        positions: &PositionSpec,
        load_case: Option<CaseId>,
    ) -> Result<Vec<ResolvedPosition>, BeamError> {
        let length = self.length();

        let query = match positions {
            PositionSpec::At(list) => {
                if list.is_empty() {
                    return Err(BeamError::InvalidPosition);
                }
                for &position in list {
                    if position.is_nan() || position < 0.0 || position > length {
                        return Err(BeamError::PositionNotInBeam { position, length });
                    }
                }
                let mut query = list.clone();
                sort_dedup(&mut query);
                query
            }
            PositionSpec::MinCount(count) => {
                let mut query = linspace(0.0, length, *count);
                for (start, end) in self.element_ends() {
                    query.push(start);
                    query.push(end);
                }
                for (index, element) in self.elements.iter().enumerate() {
                    let local_positions = match load_case {
                        None => vec![0.0, 1.0],
                        Some(case) => element.load_positions(case)?,
                    };
                    for local in local_positions {
                        query.push(self.local_to_beam_position(local, index)?);
                    }
                }
                sort_dedup(&mut query);
                query
            }
        };

        let mut resolved = Vec::with_capacity(query.len());
        for position in query {
            for element in self.in_elements(position) {
                if self.elements[element].length() == 0.0 {
                    for local in self.zero_length_locals(element, load_case)? {
                        resolved.push(ResolvedPosition {
                            position,
                            element,
                            local_position: local,
                        });
                    }
                } else {
                    resolved.push(ResolvedPosition {
                        position,
                        element,
                        local_position: self.beam_to_local_position(position, element)?,
                    });
                }
            }
        }
        Ok(resolved)
    }

    /// The local positions to report for a zero-length element, where a
    /// division-based local coordinate does not exist.
    fn zero_length_locals(
        &self,
        element: usize,
        load_case: Option<CaseId>,
    ) -> Result<Vec<f64>, BeamError> {
        match load_case {
            None => Ok(vec![0.0, 1.0]),
            Some(case) => {
                let mut locals = self.elements[element].load_positions(case)?;
                // pad so the element ends are always present
                if locals.first() != Some(&0.0) {
                    locals.insert(0, 0.0);
                }
                if locals.last() != Some(&1.0) {
                    locals.push(1.0);
                }
                Ok(locals)
            }
        }
    }

    /// Resolve the loads for one case at beam-global positions.
    ///
    /// Position resolution follows [`list_positions`](Self::list_positions);
    /// each resolved row is queried on its element and reported back with
    /// the beam-global position. A position at an element join or at a
    /// stored discontinuity therefore yields multiple rows.
    ///
    /// # Errors
    ///
    /// Fails as [`list_positions`](Self::list_positions) does, plus
    /// [`ElementError::LoadCaseNotFound`](crate::errors::ElementError) for
    /// an unknown case.
    pub fn get_loads(
        &self,
        load_case: CaseId,
        positions: &PositionSpec,
    ) -> Result<Vec<SampledLoad>, BeamError> {
        let resolved = self.list_positions(positions, Some(load_case))?;

        let mut rows = Vec::with_capacity(resolved.len());
        for location in resolved {
            let local = PositionSpec::at(location.local_position);
            for mut row in self.elements[location.element].get_loads(load_case, &local)? {
                // the element reports local positions; callers get global ones
                row.position = location.position;
                rows.push(row);
            }
        }
        Ok(rows)
    }

    /// Resolve section references at beam-global positions.
    ///
    /// Returns parallel `(positions, sections)` vectors with one entry per
    /// resolved row; section references repeat when several rows fall on one
    /// element and are `None` for elements without a section.
    ///
    /// # Errors
    ///
    /// Fails as [`list_positions`](Self::list_positions) does.
    pub fn get_section(
        &self,
        positions: &PositionSpec,
        load_case: Option<CaseId>,
    ) -> Result<(Vec<f64>, Vec<Option<SectionRef>>), BeamError> {
        let resolved = self.list_positions(positions, load_case)?;

        let mut globals = Vec::with_capacity(resolved.len());
        let mut sections = Vec::with_capacity(resolved.len());
        for location in resolved {
            globals.push(location.position);
            sections.push(self.elements[location.element].section());
        }
        Ok((globals, sections))
    }
}
