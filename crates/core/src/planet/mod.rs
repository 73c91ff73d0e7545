//! Interfaces to the planet that a selection is made on. The grid layout and
//! the reform state of each tile are owned by the host, so they're modelled as
//! traits here. [reference] has a standalone implementation of each one.

pub mod reference;

use derive_more::{Display, From, Into};
use serde::{Deserialize, Serialize};

/// The planet's latitude/longitude grid. This defines how many longitude
/// segments exist at each latitude, which is policy owned by the host.
pub trait PlanetGrid {
    /// Total number of segments in a full circle of latitude. Always at
    /// least 1.
    fn resolution(&self) -> i32;

    /// Number of longitude segments in the band at `latitude_index` (the
    /// floored absolute latitude segment). Largest at the equator (index 0)
    /// and never increasing towards the poles.
    fn longitude_segments_at(&self, latitude_index: i32, resolution: i32)
        -> i32;
}

/// Tracks which tiles have already been reformed. Every tile maps to a flat
/// "reform index", which the host uses to store the tile's state.
pub trait PlatformSystem {
    /// Total number of latitude bands in the reform index space. One tenth of
    /// this is the largest latitude segment that's considered valid.
    fn latitude_band_count(&self) -> i32;

    /// Get the reform index of the tile at the given segment coordinates.
    /// Returns `-1` if the tile isn't covered by the index space.
    fn reform_index_for(&self, latitude_segment: f32, longitude_segment: f32)
        -> i32;

    /// Get the current reform type of the tile at an index
    fn reform_type_of(&self, index: i32) -> ReformType;

    /// Has a tile with this type already been reformed?
    fn is_reformed(&self, reform_type: ReformType) -> bool;
}

/// A planet that selections can be made on. Bundles together the planet's
/// grid, its reform state, and its size.
pub trait Planet {
    type Grid: PlanetGrid;
    type Platform: PlatformSystem;

    fn grid(&self) -> &Self::Grid;

    fn platform(&self) -> &Self::Platform;

    /// Radius of the planet's surface, in world units
    fn radius(&self) -> f32;
}

impl<T: Planet + ?Sized> Planet for &T {
    type Grid = T::Grid;
    type Platform = T::Platform;

    fn grid(&self) -> &Self::Grid {
        (**self).grid()
    }

    fn platform(&self) -> &Self::Platform {
        (**self).platform()
    }

    fn radius(&self) -> f32 {
        (**self).radius()
    }
}

/// The kind of reform applied to a tile. The meaning of each value is up to
/// the [PlatformSystem], which decides whether a type counts as reformed.
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    PartialEq,
    Eq,
    Hash,
    From,
    Into,
    Serialize,
    Deserialize,
)]
#[display(fmt = "{}", "self.0")]
pub struct ReformType(pub i32);

impl ReformType {
    /// Returned for indices that don't exist
    pub const INVALID: Self = Self(-1);
    /// A tile that's never been touched
    pub const NONE: Self = Self(0);
}
