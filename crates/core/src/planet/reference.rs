//! A standalone planet, for driving selections without a host. The grid
//! schedule and reform index layout here follow the same rules as the host,
//! but they're a reimplementation and aren't guaranteed to produce identical
//! indices.

use crate::{
    grid::{GridRow, PolarCoordinate, Selection},
    planet::{Planet, PlanetGrid, PlatformSystem, ReformType},
    PlanetConfig,
};
use anyhow::{anyhow, Context};
use log::{debug, info};
use std::f32::consts::FRAC_PI_2;
use validator::Validate;

/// A grid where the number of longitude segments follows the circumference
/// of each latitude band, so tiles stay roughly square all the way up to the
/// poles.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TaperedGrid {
    resolution: i32,
}

impl TaperedGrid {
    pub fn new(resolution: i32) -> Self {
        Self { resolution }
    }
}

impl PlanetGrid for TaperedGrid {
    fn resolution(&self) -> i32 {
        self.resolution
    }

    fn longitude_segments_at(
        &self,
        latitude_index: i32,
        resolution: i32,
    ) -> i32 {
        // A quarter turn of latitude goes from the equator to the pole
        let quarter = resolution as f32 / 4.0;
        let pole_fraction = (latitude_index as f32 / quarter).min(1.0);
        let circumference = (pole_fraction * FRAC_PI_2).cos().abs();
        let segments = (circumference * resolution as f32).ceil() as i32;
        // Always even, so the row splits evenly at the prime meridian
        ((segments + 1) / 2 * 2).max(2)
    }
}

/// Reform state for every tile on a grid. Every valid tile gets a flat index:
/// rows are ordered from south to north, and tiles within each row from west
/// to east. Element zero is skipped on both axes.
#[derive(Clone, Debug)]
pub struct ReformMap {
    latitude_band_count: i32,
    /// Largest latitude element in the index space (in either direction)
    latitude_element_max: i32,
    /// Flat index of the first tile in each row
    row_offsets: Vec<usize>,
    /// Largest longitude element in each row (in either direction)
    row_longitude_maxes: Vec<i32>,
    reform_types: Vec<ReformType>,
}

impl ReformMap {
    /// Lay out the index space for a grid. Every tile starts unreformed.
    pub fn new<G: PlanetGrid + ?Sized>(
        grid: &G,
        latitude_band_count: i32,
    ) -> Self {
        let latitude_element_max = latitude_band_count / 2;
        let mut row_offsets = Vec::new();
        let mut row_longitude_maxes = Vec::new();
        let mut len = 0;

        for latitude_element in (-latitude_element_max..=latitude_element_max)
            .filter(|element| *element != 0)
        {
            let row = GridRow::from_latitude_element(grid, latitude_element);
            let longitude_max =
                PolarCoordinate::element_range(row.longitude_segments()).max();
            row_offsets.push(len);
            row_longitude_maxes.push(longitude_max);
            len += (longitude_max * 2) as usize;
        }
        debug!(
            "Laid out {} reform indices across {} rows",
            len,
            row_offsets.len()
        );

        Self {
            latitude_band_count,
            latitude_element_max,
            row_offsets,
            row_longitude_maxes,
            reform_types: vec![ReformType::NONE; len],
        }
    }

    /// Total number of indices
    pub fn len(&self) -> usize {
        self.reform_types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reform_types.is_empty()
    }

    /// Get the flat index of a tile, by its elements. Returns `None` if the
    /// tile is outside the index space.
    pub fn index_of(
        &self,
        latitude_element: i32,
        longitude_element: i32,
    ) -> Option<usize> {
        let row = Self::offset_index(latitude_element, self.latitude_element_max)?;
        let longitude_max = self.row_longitude_maxes[row];
        let column = Self::offset_index(longitude_element, longitude_max)?;
        Some(self.row_offsets[row] + column)
    }

    /// Position of a nonzero element within `[-max, max]`, with zero removed
    fn offset_index(element: i32, max: i32) -> Option<usize> {
        if element == 0 || element.abs() > max {
            None
        } else if element < 0 {
            Some((element + max) as usize)
        } else {
            Some((element + max - 1) as usize)
        }
    }

    /// Set the reform type of the tile at an index
    pub fn set_reform_type(
        &mut self,
        index: i32,
        reform_type: ReformType,
    ) -> anyhow::Result<()> {
        let slot = usize::try_from(index)
            .ok()
            .and_then(|index| self.reform_types.get_mut(index))
            .ok_or_else(|| anyhow!("reform index {} is out of range", index))?;
        *slot = reform_type;
        Ok(())
    }

    /// Apply a reform to every tile in a selection. Invalid (negative) indices
    /// are skipped. Returns the number of tiles that actually changed.
    pub fn apply_selection(
        &mut self,
        selection: &Selection,
        reform_type: ReformType,
    ) -> usize {
        let mut changed = 0;
        for index in &selection.indices {
            let slot = usize::try_from(*index)
                .ok()
                .and_then(|index| self.reform_types.get_mut(index));
            if let Some(slot) = slot {
                if *slot != reform_type {
                    *slot = reform_type;
                    changed += 1;
                }
            }
        }
        info!("Reformed {} tiles to type {}", changed, reform_type);
        changed
    }
}

impl PlatformSystem for ReformMap {
    fn latitude_band_count(&self) -> i32 {
        self.latitude_band_count
    }

    fn reform_index_for(
        &self,
        latitude_segment: f32,
        longitude_segment: f32,
    ) -> i32 {
        let latitude_element =
            PolarCoordinate::segment_to_element(latitude_segment);
        let longitude_element =
            PolarCoordinate::segment_to_element(longitude_segment);
        self.index_of(latitude_element, longitude_element)
            .map_or(-1, |index| index as i32)
    }

    fn reform_type_of(&self, index: i32) -> ReformType {
        usize::try_from(index)
            .ok()
            .and_then(|index| self.reform_types.get(index))
            .copied()
            .unwrap_or(ReformType::INVALID)
    }

    fn is_reformed(&self, reform_type: ReformType) -> bool {
        reform_type.0 > 0
    }
}

/// A complete standalone planet, built from a [PlanetConfig]
#[derive(Clone, Debug)]
pub struct PlanetModel {
    config: PlanetConfig,
    grid: TaperedGrid,
    platform: ReformMap,
}

impl PlanetModel {
    /// Build a new planet. Returns an error if the config is invalid, or if
    /// any of its pre-reformed tiles aren't on the grid.
    pub fn new(config: PlanetConfig) -> anyhow::Result<Self> {
        info!("Building planet with config {:?}", config);
        config.validate().context("invalid planet config")?;

        let grid = TaperedGrid::new(config.resolution as i32);
        let mut platform =
            ReformMap::new(&grid, config.latitude_band_count as i32);
        for tile in &config.reformed_tiles {
            let index = platform
                .index_of(tile.latitude, tile.longitude)
                .ok_or_else(|| {
                    anyhow!(
                        "reformed tile ({}, {}) is not on the grid",
                        tile.latitude,
                        tile.longitude
                    )
                })?;
            platform.set_reform_type(index as i32, ReformType(tile.reform_type))?;
        }

        Ok(Self {
            config,
            grid,
            platform,
        })
    }

    /// Get a reference to the config that defines this planet
    pub fn config(&self) -> &PlanetConfig {
        &self.config
    }

    /// Get mutable access to the planet's reform state, e.g. to apply a
    /// selection
    pub fn platform_mut(&mut self) -> &mut ReformMap {
        &mut self.platform
    }
}

impl Planet for PlanetModel {
    type Grid = TaperedGrid;
    type Platform = ReformMap;

    fn grid(&self) -> &Self::Grid {
        &self.grid
    }

    fn platform(&self) -> &Self::Platform {
        &self.platform
    }

    fn radius(&self) -> f32 {
        self.config.radius
    }
}
