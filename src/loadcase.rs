//! Storage and interpolation of one load case's internal-force samples.

use serde::{Deserialize, Serialize};

use crate::errors::LoadCaseError;
use crate::loads::{linspace, sort_dedup, Components, LoadSample, PositionSpec, SampledLoad};

/// One load case's table of internal-force samples along an element.
///
/// Samples are stored at normalised positions in [0.0, 1.0] and treated as a
/// piecewise-linear function per channel. Two or more samples may share a
/// position; that represents a discontinuity (a point load or a section
/// change) and queries at exactly that position return every stored sample
/// rather than a single interpolated value.
///
/// A `LoadCase` is immutable once constructed and owned by exactly one
/// [`Element`](crate::Element).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadCase {
    samples: Vec<LoadSample>,
}

impl LoadCase {
    /// Create a load case from a sample table.
    ///
    /// # Errors
    ///
    /// Returns [`LoadCaseError::PositionOutOfRange`] when a sample position
    /// is outside [0.0, 1.0] and [`LoadCaseError::UnsortedPositions`] when
    /// positions are not in non-decreasing order. Duplicate positions are
    /// accepted; they encode a discontinuity and keep their stored order.
    pub fn new(samples: Vec<LoadSample>) -> Result<Self, LoadCaseError> {
        for pair in samples.windows(2) {
            if pair[1].position < pair[0].position {
                return Err(LoadCaseError::UnsortedPositions {
                    previous: pair[0].position,
                    position: pair[1].position,
                });
            }
        }
        for sample in &samples {
            if !(0.0..=1.0).contains(&sample.position) {
                return Err(LoadCaseError::PositionOutOfRange {
                    position: sample.position,
                });
            }
        }
        Ok(Self { samples })
    }

    /// Create a load case with no samples.
    ///
    /// Queries against an empty case return the missing-value marker, not
    /// zeroes.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a load case with the same channel values along the whole
    /// element, sampled at both ends.
    #[must_use]
    pub fn constant_load(components: Components) -> Self {
        Self {
            samples: vec![
                LoadSample::new(0.0, components),
                LoadSample::new(1.0, components),
            ],
        }
    }

    /// The stored sample table.
    #[must_use]
    pub fn samples(&self) -> &[LoadSample] {
        &self.samples
    }

    /// The stored sample positions, in table order including duplicates.
    #[must_use]
    pub fn load_positions(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.position).collect()
    }

    /// The number of stored samples.
    #[must_use]
    pub fn num_positions(&self) -> usize {
        self.samples.len()
    }

    /// Resolve the loads at the requested positions.
    ///
    /// Positions that exactly match stored samples return every stored
    /// sample at that position; positions between samples are linearly
    /// interpolated per channel. Positions beyond the first or last stored
    /// sample clamp to the nearest boundary sample. Rows are returned in
    /// ascending position order; an empty case yields one missing-value row
    /// per requested position.
    ///
    /// # Errors
    ///
    /// Returns [`LoadCaseError::EmptyQuery`] for an empty
    /// [`PositionSpec::At`] list and [`LoadCaseError::PositionOutOfRange`]
    /// for positions outside [0.0, 1.0].
    pub fn get_load(&self, positions: &PositionSpec) -> Result<Vec<SampledLoad>, LoadCaseError> {
        let query = self.query_positions(positions)?;
        Ok(query.into_iter().flat_map(|p| self.rows_at(p)).collect())
    }

    /// Expand a [`PositionSpec`] into a sorted, deduplicated position list.
    fn query_positions(&self, positions: &PositionSpec) -> Result<Vec<f64>, LoadCaseError> {
        match positions {
            PositionSpec::At(list) => {
                if list.is_empty() {
                    return Err(LoadCaseError::EmptyQuery);
                }
                for &position in list {
                    if !(0.0..=1.0).contains(&position) {
                        return Err(LoadCaseError::PositionOutOfRange { position });
                    }
                }
                let mut query = list.clone();
                sort_dedup(&mut query);
                Ok(query)
            }
            PositionSpec::MinCount(count) => {
                // start from the stored positions so discontinuities are
                // never skipped, then fill with an even grid
                let mut query = self.load_positions();
                query.extend(linspace(0.0, 1.0, *count));
                sort_dedup(&mut query);
                Ok(query)
            }
        }
    }

    /// All result rows at a single, validated position.
    fn rows_at(&self, position: f64) -> Vec<SampledLoad> {
        if self.samples.is_empty() {
            return vec![SampledLoad::missing(position)];
        }

        let exact: Vec<SampledLoad> = self
            .samples
            .iter()
            .filter(|s| s.position == position)
            .map(|s| SampledLoad::known(position, s.components))
            .collect();
        if !exact.is_empty() {
            return exact;
        }

        // index of the first sample strictly above the query position
        let upper = self.samples.partition_point(|s| s.position < position);
        if upper == 0 {
            return vec![SampledLoad::known(position, self.samples[0].components)];
        }
        if upper == self.samples.len() {
            let last = &self.samples[self.samples.len() - 1];
            return vec![SampledLoad::known(position, last.components)];
        }

        // interpolate from the last sample of the lower group to the first
        // sample of the upper group
        let low = &self.samples[upper - 1];
        let high = &self.samples[upper];
        let ratio = (position - low.position) / (high.position - low.position);
        vec![SampledLoad::known(
            position,
            low.components.lerp(&high.components, ratio),
        )]
    }
}
