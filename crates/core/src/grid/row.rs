use crate::{grid::PolarCoordinate, planet::PlanetGrid};

/// One latitude band of the grid. The number of longitude segments changes
/// with latitude (fewer near the poles), so two tiles in different rows can't
/// have their longitude elements compared directly.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GridRow {
    latitude: PolarCoordinate,
    /// Number of longitude segments at this latitude. Largest at the equator,
    /// decreasing towards each pole.
    longitude_segments: i32,
}

impl GridRow {
    /// Build a row from its latitude coordinate. The grid decides how many
    /// longitude segments the row gets.
    pub fn new<G: PlanetGrid + ?Sized>(
        grid: &G,
        latitude: PolarCoordinate,
    ) -> Self {
        let latitude_index = latitude.segment().abs().floor() as i32;
        let longitude_segments =
            grid.longitude_segments_at(latitude_index, grid.resolution());
        Self {
            latitude,
            longitude_segments,
        }
    }

    pub fn from_latitude_angle<G: PlanetGrid + ?Sized>(
        grid: &G,
        latitude_angle: f32,
    ) -> Self {
        Self::new(
            grid,
            PolarCoordinate::from_angle(latitude_angle, grid.resolution()),
        )
    }

    pub fn from_latitude_element<G: PlanetGrid + ?Sized>(
        grid: &G,
        latitude_element: i32,
    ) -> Self {
        Self::new(
            grid,
            PolarCoordinate::from_element(latitude_element, grid.resolution()),
        )
    }

    pub fn latitude(&self) -> PolarCoordinate {
        self.latitude
    }

    pub fn longitude_segments(&self) -> i32 {
        self.longitude_segments
    }

    /// Is this row usable? The equator line isn't a row, and rows at or past
    /// `latitude_segment_max` (in either direction) are off the grid.
    pub fn is_valid(&self, latitude_segment_max: f32) -> bool {
        let segment = self.latitude.segment();
        self.latitude.is_valid()
            && segment < latitude_segment_max
            && segment > -latitude_segment_max
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planet::reference::TaperedGrid;
    use std::f32::consts::TAU;

    #[test]
    fn test_longitude_segments() {
        let grid = TaperedGrid::new(10);
        assert_eq!(GridRow::from_latitude_element(&grid, 5).longitude_segments(), 10);
        assert_eq!(GridRow::from_latitude_element(&grid, -5).longitude_segments(), 10);
        // Latitude segment 2.1 => band 2, near the pole
        assert_eq!(GridRow::from_latitude_element(&grid, 11).longitude_segments(), 4);

        let grid = TaperedGrid::new(200);
        let mut previous = i32::MAX;
        for element in 1..=250 {
            let segments =
                GridRow::from_latitude_element(&grid, element).longitude_segments();
            assert!(
                segments <= previous,
                "row {} has more segments than the row before it",
                element
            );
            previous = segments;
        }
        assert!(previous < 200);
    }

    #[test]
    fn test_from_latitude_angle() {
        let grid = TaperedGrid::new(200);
        // Latitude segment 6.07 => element 31
        let row = GridRow::from_latitude_angle(&grid, 6.07 / 200.0 * TAU);
        assert_eq!(row.latitude().element(), 31);
        assert_eq!(
            row.longitude_segments(),
            GridRow::from_latitude_element(&grid, 31).longitude_segments(),
            "angle and element constructors disagree"
        );
    }

    #[test]
    fn test_is_valid() {
        let grid = TaperedGrid::new(200);
        assert!(!GridRow::from_latitude_element(&grid, 0).is_valid(50.0));
        assert!(GridRow::from_latitude_element(&grid, 1).is_valid(50.0));
        assert!(GridRow::from_latitude_element(&grid, -1).is_valid(50.0));
        // Element 250 is segment 49.9
        assert!(GridRow::from_latitude_element(&grid, 250).is_valid(50.0));
        assert!(GridRow::from_latitude_element(&grid, -250).is_valid(50.0));
        assert!(!GridRow::from_latitude_element(&grid, 251).is_valid(50.0));
        assert!(!GridRow::from_latitude_element(&grid, -251).is_valid(50.0));
    }
}
