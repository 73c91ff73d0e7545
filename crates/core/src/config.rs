use serde::{Deserialize, Serialize};
use validator::Validate;

/// Configuration that defines a standalone planet, for use with
/// [PlanetModel](crate::PlanetModel). Inside a host, the grid and reform state
/// come from the host instead, and this config isn't needed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct PlanetConfig {
    /// Number of latitude segments in a full circle around the planet. The
    /// equator row has this many longitude segments, and rows get fewer as
    /// they approach the poles. Should be a multiple of 4, so that each pole
    /// lands on a segment boundary.
    #[validate(range(min = 4, max = 2000))]
    pub resolution: u32,

    /// Number of latitude bands (pole to pole) in the reform index space.
    /// This also limits which rows are selectable: any row with a latitude
    /// segment at or beyond one tenth of this value is off the grid. For a
    /// grid that covers the whole planet, this should be `resolution * 2.5`.
    #[validate(range(min = 10, max = 20000))]
    pub latitude_band_count: u32,

    /// Radius of the planet's surface, in world units
    #[validate(range(min = 1.0))]
    pub radius: f32,

    /// Tiles that have already been reformed when the planet is created
    pub reformed_tiles: Vec<ReformedTile>,
}

/// A tile that has already been reformed, addressed by its grid elements
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReformedTile {
    pub latitude: i32,
    pub longitude: i32,
    /// Reform type to apply. Anything above zero counts as reformed.
    pub reform_type: i32,
}

impl Default for PlanetConfig {
    fn default() -> Self {
        // This matches the grid of a standard-sized planet
        Self {
            resolution: 200,
            latitude_band_count: 500,
            radius: 200.0,
            reformed_tiles: Vec::new(),
        }
    }
}
