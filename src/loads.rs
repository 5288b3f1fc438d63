//! Fundamental load-modelling types shared across the crate.

use serde::{Deserialize, Serialize};

/// Tag identifying one of the six internal force/moment channels.
///
/// The channels follow the usual beam-local convention: two shears, an axial
/// force, two bending moments and a torsion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoadComponent {
    /// Shear force about the local x axis.
    Vx,
    /// Shear force about the local y axis.
    Vy,
    /// Axial force.
    N,
    /// Bending moment about the local x axis.
    Mx,
    /// Bending moment about the local y axis.
    My,
    /// Torsion.
    T,
}

impl LoadComponent {
    /// All six channels in storage order.
    pub const ALL: [LoadComponent; 6] = [
        LoadComponent::Vx,
        LoadComponent::Vy,
        LoadComponent::N,
        LoadComponent::Mx,
        LoadComponent::My,
        LoadComponent::T,
    ];
}

/// One value for each of the six load channels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Components {
    /// Shear force about the local x axis.
    pub vx: f64,
    /// Shear force about the local y axis.
    pub vy: f64,
    /// Axial force.
    pub n: f64,
    /// Bending moment about the local x axis.
    pub mx: f64,
    /// Bending moment about the local y axis.
    pub my: f64,
    /// Torsion.
    pub t: f64,
}

impl Components {
    /// Create a record with explicit values for all six channels.
    #[must_use]
    pub const fn new(vx: f64, vy: f64, n: f64, mx: f64, my: f64, t: f64) -> Self {
        Self {
            vx,
            vy,
            n,
            mx,
            my,
            t,
        }
    }

    /// Return the value of a single channel.
    #[must_use]
    pub fn get(&self, component: LoadComponent) -> f64 {
        match component {
            LoadComponent::Vx => self.vx,
            LoadComponent::Vy => self.vy,
            LoadComponent::N => self.n,
            LoadComponent::Mx => self.mx,
            LoadComponent::My => self.my,
            LoadComponent::T => self.t,
        }
    }

    /// Linearly interpolate every channel between `self` and `other`.
    ///
    /// `ratio` is 0.0 at `self` and 1.0 at `other`.
    #[must_use]
    pub fn lerp(&self, other: &Components, ratio: f64) -> Self {
        let one = |a: f64, b: f64| a + (b - a) * ratio;
        Self {
            vx: one(self.vx, other.vx),
            vy: one(self.vy, other.vy),
            n: one(self.n, other.n),
            mx: one(self.mx, other.mx),
            my: one(self.my, other.my),
            t: one(self.t, other.t),
        }
    }
}

/// Shorthand for building a [`Components`] record.
#[must_use]
pub const fn components(vx: f64, vy: f64, n: f64, mx: f64, my: f64, t: f64) -> Components {
    Components::new(vx, vy, n, mx, my, t)
}

/// One stored row of a load-case table: a local position and the six load
/// channel values at that position.
///
/// Positions are normalised to [0.0, 1.0] along the owning element; multiply
/// by the element length for a physical distance.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoadSample {
    /// Normalised local position in [0.0, 1.0].
    pub position: f64,
    /// Load channel values at the position.
    pub components: Components,
}

impl LoadSample {
    /// Create a sample at a normalised position.
    #[must_use]
    pub const fn new(position: f64, components: Components) -> Self {
        Self {
            position,
            components,
        }
    }
}

/// One row of a load query result.
///
/// `components` is `None` when the queried load case stores no samples at
/// all: the load is unknown, which is distinct from a zero load.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SampledLoad {
    /// Query position. Local on an [`Element`](crate::Element), beam-global
    /// when returned from [`Beam::get_loads`](crate::Beam::get_loads).
    pub position: f64,
    /// The six channel values, or `None` for an empty load case.
    pub components: Option<Components>,
}

impl SampledLoad {
    /// A row with known channel values.
    #[must_use]
    pub const fn known(position: f64, components: Components) -> Self {
        Self {
            position,
            components: Some(components),
        }
    }

    /// A row marking that no load information exists at `position`.
    #[must_use]
    pub const fn missing(position: f64) -> Self {
        Self {
            position,
            components: None,
        }
    }

    /// Return the value of a single channel, or `None` for a missing row.
    #[must_use]
    pub fn component(&self, component: LoadComponent) -> Option<f64> {
        self.components.map(|c| c.get(component))
    }
}

/// Specification of the positions a load or section query should resolve.
///
/// Queries either name their positions outright or ask for an adaptive grid
/// of at least `n` evenly spaced positions; the two modes are separate
/// variants so a caller can never supply both or neither. An empty `At` list
/// is rejected by the query it is passed to.
#[derive(Clone, Debug, PartialEq)]
pub enum PositionSpec {
    /// Query at exactly these positions (deduplicated and sorted before
    /// resolution).
    At(Vec<f64>),
    /// Query at `n` or more evenly spaced positions, merged with every
    /// stored sample position and element boundary so that discontinuities
    /// are never skipped.
    MinCount(usize),
}

impl PositionSpec {
    /// Convenience constructor for a single-position query.
    #[must_use]
    pub fn at(position: f64) -> Self {
        PositionSpec::At(vec![position])
    }
}

/// `count` evenly spaced values spanning `[start, end]`, endpoints exact.
pub(crate) fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            let mut values: Vec<f64> = (0..count).map(|i| start + step * i as f64).collect();
            // pin the last value so it merges exactly with stored boundaries
            values[count - 1] = end;
            values
        }
    }
}

/// Sort ascending and drop exact duplicates in place.
pub(crate) fn sort_dedup(positions: &mut Vec<f64>) {
    positions.sort_by(f64::total_cmp);
    positions.dedup();
}
