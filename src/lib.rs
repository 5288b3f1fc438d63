#![warn(clippy::all)]
#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

pub mod beam;
pub mod check;
pub mod element;
pub mod errors;
pub mod loadcase;
pub mod loads;
pub mod material;
pub mod section;

pub use beam::{Beam, ResolvedPosition};
pub use check::{CodeCheck, TensionCheck};
pub use element::{CaseId, Element};
pub use errors::{BeamError, CheckError, ElementError, LoadCaseError, SectionError};
pub use loadcase::LoadCase;
pub use loads::{components, Components, LoadComponent, LoadSample, PositionSpec, SampledLoad};
pub use material::Material;
pub use section::{Circle, HollowCircle, Section, SectionRef};
