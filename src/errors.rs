//! Error types produced while building or querying beams.

use thiserror::Error;

use crate::element::CaseId;

/// Error returned when constructing or querying a [`LoadCase`](crate::LoadCase).
#[derive(Clone, Debug, Error, PartialEq)]
pub enum LoadCaseError {
    /// Returned when a query supplies an empty position list, leaving the
    /// requested positions unspecified.
    #[error("load query supplied no positions")]
    EmptyQuery,
    /// Returned when a sample or query position lies outside [0.0, 1.0].
    #[error("position {position} is outside the normalised range [0.0, 1.0]")]
    PositionOutOfRange {
        /// The rejected position.
        position: f64,
    },
    /// Returned when the sample table positions are not in non-decreasing
    /// order. Duplicate positions are allowed; they represent a
    /// discontinuity.
    #[error("sample positions must be non-decreasing ({previous} followed by {position})")]
    UnsortedPositions {
        /// The position preceding the offending sample.
        previous: f64,
        /// The out-of-order position.
        position: f64,
    },
}

/// Error returned when constructing or querying an [`Element`](crate::Element).
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ElementError {
    /// Returned when the element length is negative.
    #[error("element length must be >= 0.0 (received {length})")]
    NegativeLength {
        /// The rejected length.
        length: f64,
    },
    /// Returned when the requested load case is not stored on the element.
    #[error("load case {case} does not exist on this element")]
    LoadCaseNotFound {
        /// The missing case key.
        case: CaseId,
    },
    /// Returned when the underlying load case rejects the query.
    #[error("load case query failed: {0}")]
    Case(#[from] LoadCaseError),
}

/// Error returned when constructing or querying a [`Beam`](crate::Beam).
#[derive(Clone, Debug, Error, PartialEq)]
pub enum BeamError {
    /// Returned when a beam is constructed from an empty element list.
    #[error("a beam requires at least one element")]
    NoElements,
    /// Returned when the elements disagree on the number of load cases.
    #[error("expected {expected} load cases on every element, element {element} has {found}")]
    InconsistentLoadCaseCount {
        /// Case count on the first element.
        expected: usize,
        /// Index of the disagreeing element.
        element: usize,
        /// Case count on the disagreeing element.
        found: usize,
    },
    /// Returned when the elements disagree on the identity of the load case
    /// keys.
    #[error("element {element} stores different load case keys to element 0")]
    InconsistentLoadCaseKeys {
        /// Index of the disagreeing element.
        element: usize,
    },
    /// Returned when a requested global position is outside [0.0, beam length].
    #[error("position {position} is outside the beam (length {length})")]
    PositionNotInBeam {
        /// The rejected global position.
        position: f64,
        /// Total beam length.
        length: f64,
    },
    /// Returned by the coordinate transforms when a position is outside the
    /// target element's span, or a local position is outside [0.0, 1.0].
    #[error("position {position} is not within element {element}")]
    PositionNotInElement {
        /// The rejected position.
        position: f64,
        /// Index of the target element.
        element: usize,
    },
    /// Returned when a division-based transform is attempted on a
    /// zero-length element, where the local coordinate is ambiguous.
    #[error("local position on zero-length element {element} is ambiguous")]
    ZeroLengthElement {
        /// Index of the zero-length element.
        element: usize,
    },
    /// Returned when a query supplies an empty position list, leaving the
    /// requested positions unspecified.
    #[error("beam query supplied no positions")]
    InvalidPosition,
    /// Returned when an element index is not part of this beam.
    #[error("element {0} does not exist in this beam")]
    UnknownElement(usize),
    /// Returned when an element-level query fails.
    #[error("element query failed: {0}")]
    Element(#[from] ElementError),
}

/// Error returned when constructing a section with invalid geometry.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum SectionError {
    /// Returned when a hollow circle's inner radius is not smaller than its
    /// outer radius.
    #[error("inner radius {inner} must be smaller than outer radius {outer}")]
    InvalidRadii {
        /// The outer radius.
        outer: f64,
        /// The rejected inner radius.
        inner: f64,
    },
}

/// Error returned by the capacity-check layer.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum CheckError {
    /// Returned when a checked position has no section assigned.
    #[error("no section assigned at position {position}")]
    MissingSection {
        /// The global position without a section.
        position: f64,
    },
    /// Returned when the underlying beam query fails.
    #[error("beam query failed: {0}")]
    Beam(#[from] BeamError),
}
