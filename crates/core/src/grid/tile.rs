use crate::{
    grid::{GridRow, PolarCoordinate},
    planet::PlanetGrid,
};
use derive_more::Display;
use nalgebra::Vector3;

/// A single tile on the grid, addressed by its row and its longitude within
/// that row. Tiles are cheap value types that get recomputed from scratch
/// whenever a selection changes.
///
/// ## Orientation
/// +Y points to the north pole, and the prime meridian runs through -Z.
/// Longitude increases towards +X.
#[derive(Copy, Clone, Debug, Display, PartialEq)]
#[display(
    fmt = "({}, {})",
    "self.latitude().element()",
    "self.longitude.element()"
)]
pub struct GridTile {
    row: GridRow,
    longitude: PolarCoordinate,
}

impl GridTile {
    /// Snap a longitude angle to a tile within an existing row. This is how a
    /// point from one row gets re-projected into another row's longitude
    /// scale.
    pub fn from_longitude_angle(row: GridRow, longitude_angle: f32) -> Self {
        Self {
            row,
            longitude: PolarCoordinate::from_angle(
                longitude_angle,
                row.longitude_segments(),
            ),
        }
    }

    pub fn from_longitude_element(row: GridRow, longitude_element: i32) -> Self {
        Self {
            row,
            longitude: PolarCoordinate::from_element(
                longitude_element,
                row.longitude_segments(),
            ),
        }
    }

    /// Get the tile under a position relative to the planet's center. The
    /// position doesn't need to be normalized.
    pub fn from_position<G: PlanetGrid + ?Sized>(
        grid: &G,
        position: &Vector3<f32>,
    ) -> Self {
        let normalized = position.normalize();
        let latitude_angle = normalized.y.asin();
        let longitude_angle = normalized.x.atan2(-normalized.z);

        let row = GridRow::from_latitude_angle(grid, latitude_angle);
        Self::from_longitude_angle(row, longitude_angle)
    }

    pub fn row(&self) -> GridRow {
        self.row
    }

    pub fn latitude(&self) -> PolarCoordinate {
        self.row.latitude()
    }

    pub fn longitude(&self) -> PolarCoordinate {
        self.longitude
    }

    /// Get the position of this tile on the unit sphere. Scale it by the
    /// planet radius to get a surface position.
    pub fn position(&self) -> Vector3<f32> {
        let (latitude_sin, latitude_cos) = self.latitude().angle().sin_cos();
        let (longitude_sin, longitude_cos) = self.longitude.angle().sin_cos();
        Vector3::new(
            latitude_cos * longitude_sin,
            latitude_sin,
            -latitude_cos * longitude_cos,
        )
    }

    /// Does this tile exist on the grid? See [GridRow::is_valid].
    pub fn is_valid(&self, latitude_segment_max: f32) -> bool {
        self.longitude.is_valid() && self.row.is_valid(latitude_segment_max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planet::reference::TaperedGrid;
    use assert_approx_eq::assert_approx_eq;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64;

    #[test]
    fn test_orientation() {
        let grid = TaperedGrid::new(10);
        let row = GridRow::from_latitude_element(&grid, 5);

        let east = GridTile::from_longitude_element(row, 3).position();
        assert!(east.x > 0.0 && east.y > 0.0 && east.z < 0.0, "{}", east);

        let west = GridTile::from_longitude_element(row, -3).position();
        assert!(west.x < 0.0 && west.y > 0.0 && west.z < 0.0, "{}", west);

        let south = GridRow::from_latitude_element(&grid, -5);
        let position = GridTile::from_longitude_element(south, 3).position();
        assert!(position.y < 0.0);
    }

    #[test]
    fn test_from_position() {
        let grid = TaperedGrid::new(10);
        let row = GridRow::from_latitude_element(&grid, 5);
        for element in [-24, -3, -1, 1, 3, 24] {
            let tile = GridTile::from_longitude_element(row, element);
            // Scale shouldn't matter
            let found = GridTile::from_position(&grid, &(tile.position() * 42.0));
            assert_eq!(found.latitude().element(), 5);
            assert_eq!(found.longitude().element(), element);
        }
    }

    #[test]
    fn test_prime_meridian_is_invalid() {
        let grid = TaperedGrid::new(10);
        let tile = GridTile::from_position(&grid, &Vector3::new(0.0, 0.3, -1.0));
        assert!(tile.latitude().is_valid());
        assert!(!tile.longitude().is_valid());
        assert!(!tile.is_valid(10.0));

        let equator = GridTile::from_position(&grid, &Vector3::new(0.3, 0.0, -1.0));
        assert!(!equator.is_valid(10.0));
    }

    #[test]
    fn test_position_is_unit_length() {
        let grid = TaperedGrid::new(200);
        let mut rng = Pcg64::seed_from_u64(0x5eed);
        for _ in 0..1000 {
            let position: Vector3<f32> = Vector3::new(
                rng.gen_range(-1.0f32..1.0),
                rng.gen_range(-1.0f32..1.0),
                rng.gen_range(-1.0f32..1.0),
            ) * rng.gen_range(1.0f32..500.0);
            let tile = GridTile::from_position(&grid, &position);
            if !tile.is_valid(50.0) {
                continue;
            }
            assert_approx_eq!(tile.position().norm(), 1.0, 1e-5);
        }
    }

    #[test]
    fn test_display() {
        let grid = TaperedGrid::new(10);
        let row = GridRow::from_latitude_element(&grid, -4);
        assert_eq!(GridTile::from_longitude_element(row, 7).to_string(), "(-4, 7)");
    }
}
