use crate::{
    grid::{GridRow, GridTile, PolarCoordinate},
    planet::{Planet, PlatformSystem},
    util::{
        self,
        range::{Range, SimpleRange},
    },
};
use anyhow::bail;
use log::{debug, trace};
use nalgebra::Vector3;

/// A rectangular selection of tiles, spanning between two corners on the
/// planet's surface.
///
/// The rectangle follows the grid, so each row of the selection covers the
/// longitudes between the two corners *as projected into that row*. Along
/// the longitude axis there are always two ways to connect the corners (east
/// or west around the planet), and the caller picks whether to take the
/// shorter or the longer one. When the chosen path crosses the ±180° seam,
/// the row is split into two pieces.
///
/// A rectangle is meant to be reused: every call to [Self::calculate] throws
/// away the previous selection.
///
/// ```
/// use nalgebra::Vector3;
/// use painter::{GridRectangle, PlanetConfig, PlanetModel};
///
/// let planet = PlanetModel::new(PlanetConfig::default()).unwrap();
/// let mut rect = GridRectangle::new();
/// rect.calculate(
///     &planet,
///     &Vector3::new(0.1, 0.2, -1.0),
///     &Vector3::new(0.3, 0.25, -1.0),
///     true,
/// );
/// let selection = rect.export().unwrap();
/// assert_eq!(selection.indices.len(), rect.tiles().len());
/// ```
#[derive(Clone, Debug)]
pub struct GridRectangle<P: Planet> {
    tiles: Vec<GridTile>,
    /// Planet used in the latest calculation. `None` until the first one.
    planet: Option<P>,
}

/// An exported selection, in the format the host consumes
#[derive(Clone, Debug, PartialEq)]
pub struct Selection {
    /// Reform index of every selected tile, including tiles that have already
    /// been reformed. Tiles that aren't in the reform index space are `-1`.
    pub indices: Vec<i32>,
    /// Surface positions of every selected tile that **hasn't** been reformed
    /// yet, relative to the planet's center
    pub points: Vec<Vector3<f32>>,
    /// A surface position roughly in the middle of the selection
    pub center: Vector3<f32>,
}

impl Selection {
    /// Number of tiles that still need to be reformed
    pub fn point_count(&self) -> usize {
        self.points.len()
    }
}

impl<P: Planet> GridRectangle<P> {
    /// Exported points sit slightly above the surface
    pub const SURFACE_OFFSET: f32 = 0.2;

    pub fn new() -> Self {
        Self {
            tiles: Vec::new(),
            planet: None,
        }
    }

    /// All tiles in the latest calculation, row by row
    pub fn tiles(&self) -> &[GridTile] {
        &self.tiles
    }

    /// Has [Self::calculate] been called yet?
    pub fn is_calculated(&self) -> bool {
        self.planet.is_some()
    }

    /// Calculate all the tiles within the rectangle between two corners.
    ///
    /// ## Arguments
    ///
    /// - `planet`: The planet to select on. Held until the next calculation,
    ///   so that the selection can be exported.
    /// - `start`/`end`: Corner positions relative to the planet's center. If
    ///   `end` doesn't land on a valid tile, the selection collapses to just
    ///   the `start` tile.
    /// - `use_shortest_path`: Whether to take the shorter or the longer way
    ///   around the planet between the two corners
    pub fn calculate(
        &mut self,
        planet: P,
        start: &Vector3<f32>,
        end: &Vector3<f32>,
        use_shortest_path: bool,
    ) {
        self.tiles.clear();

        let grid = planet.grid();
        // Integer division, to match the host
        let latitude_segment_max =
            (planet.platform().latitude_band_count() / 10) as f32;

        let start = GridTile::from_position(grid, start);
        let mut end = GridTile::from_position(grid, end);
        if !end.is_valid(latitude_segment_max) {
            trace!("End tile {} is off the grid, using start tile {}", end, start);
            end = start;
        }

        let latitude_range = SimpleRange::new_ordered(
            start.latitude().element(),
            end.latitude().element(),
        );
        for latitude_element in latitude_range {
            let row = GridRow::from_latitude_element(grid, latitude_element);
            if !row.is_valid(latitude_segment_max) {
                trace!("Skipping invalid row {}", latitude_element);
                continue;
            }
            self.add_row(row, &start, &end, use_shortest_path);
        }

        debug!(
            "Selected {} tiles between {} and {} (rows {}, shortest path: {})",
            self.tiles.len(),
            start,
            end,
            latitude_range,
            use_shortest_path
        );
        self.planet = Some(planet);
    }

    /// Add every tile in a row that falls between the two corners' longitudes
    fn add_row(
        &mut self,
        row: GridRow,
        start: &GridTile,
        end: &GridTile,
        use_shortest_path: bool,
    ) {
        // The corners might be in other rows, which have a different number
        // of longitude segments. Re-project them into this row.
        let row_start =
            GridTile::from_longitude_angle(row, start.longitude().angle());
        let row_end = GridTile::from_longitude_angle(row, end.longitude().angle());

        let selection = SimpleRange::new_ordered(
            row_start.longitude().element(),
            row_end.longitude().element(),
        );
        let full_range = PolarCoordinate::element_range(row.longitude_segments());
        let longitude_range =
            longitude_path(selection, full_range, use_shortest_path);
        trace!(
            "Row {} covers longitudes {}",
            row.latitude().element(),
            longitude_range
        );

        self.tiles.extend(
            longitude_range
                .iter()
                .map(|element| GridTile::from_longitude_element(row, element))
                .filter(|tile| tile.longitude().is_valid()),
        );
    }

    /// Export the latest calculation into caller-owned buffers. This keeps the
    /// host's buffer contract: both buffers are grown (never shrunk) to fit
    /// every selected tile, indices are written for every tile, and points are
    /// only written for unreformed tiles. Anything past the written section is
    /// stale data from earlier exports.
    ///
    /// Returns the number of points written, and the center point. Fails if
    /// nothing has been calculated yet.
    pub fn export_into(
        &self,
        indices: &mut Vec<i32>,
        points: &mut Vec<Vector3<f32>>,
    ) -> anyhow::Result<(usize, Vector3<f32>)> {
        let planet = match &self.planet {
            Some(planet) => planet,
            None => bail!("selection must be calculated before it's exported"),
        };

        util::ensure_len(indices, self.tiles.len(), -1);
        util::ensure_len(points, self.tiles.len(), Vector3::zeros());

        if self.tiles.is_empty() {
            return Ok((0, Vector3::zeros()));
        }

        let platform = planet.platform();
        let radius = planet.radius() + Self::SURFACE_OFFSET;
        // Not a real centroid, just close enough
        let center = self.tiles[self.tiles.len() / 2].position() * radius;

        let mut point_count = 0;
        for (i, tile) in self.tiles.iter().enumerate() {
            let reform_index = platform.reform_index_for(
                tile.latitude().segment(),
                tile.longitude().segment(),
            );
            indices[i] = reform_index;

            let reform_type = platform.reform_type_of(reform_index);
            if !platform.is_reformed(reform_type) {
                points[point_count] = tile.position() * radius;
                point_count += 1;
            }
        }

        Ok((point_count, center))
    }

    /// Export the latest calculation into a new [Selection]. Fails if nothing
    /// has been calculated yet.
    pub fn export(&self) -> anyhow::Result<Selection> {
        let mut indices = Vec::with_capacity(self.tiles.len());
        let mut points = Vec::with_capacity(self.tiles.len());
        let (point_count, center) = self.export_into(&mut indices, &mut points)?;
        points.truncate(point_count);
        Ok(Selection {
            indices,
            points,
            center,
        })
    }
}

impl<P: Planet> Default for GridRectangle<P> {
    fn default() -> Self {
        Self::new()
    }
}

/// Pick which way around the row to go between two longitudes. `selection`
/// is the direct span between them, and `full_range` is every longitude
/// element in the row.
///
/// If the direct span covers more than half the row, it's the long way
/// around, so the shortest path is its inverse (which wraps across the seam).
/// Otherwise the direct span is already the shortest path, and the longest
/// path is the inverse. Either way the two paths share their end tiles.
pub fn longitude_path(
    selection: SimpleRange,
    full_range: SimpleRange,
    use_shortest_path: bool,
) -> Range {
    let is_wide = selection.count() > full_range.count() / 2;
    if is_wide == use_shortest_path {
        selection.invert(full_range)
    } else {
        selection.into()
    }
}
