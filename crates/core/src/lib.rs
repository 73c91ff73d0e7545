//! Painter selects rectangles of tiles on a planet's latitude/longitude grid,
//! so that they can be reformed (e.g. paved over with foundation) in one go.
//! This crate contains all the selection logic. Input handling and rendering
//! are up to the host.
//!
//! ```
//! use nalgebra::Vector3;
//! use painter::{GridRectangle, PlanetConfig, PlanetModel};
//!
//! let planet = PlanetModel::new(PlanetConfig::default()).unwrap();
//! let mut rect = GridRectangle::new();
//! rect.calculate(
//!     &planet,
//!     &Vector3::new(0.1, 0.2, -1.0),
//!     &Vector3::new(0.3, 0.25, -1.0),
//!     true,
//! );
//! let selection = rect.export().unwrap();
//! println!("{} tiles to reform", selection.point_count());
//! ```
//!
//! Inside a host, implement [Planet] on top of the host's grid and reform
//! state instead of using [PlanetModel]. See [PlanetConfig] for details on
//! how the standalone planet can be customized.

mod config;
pub mod grid;
pub mod planet;
pub mod tool;
mod util;

pub use crate::{
    config::{PlanetConfig, ReformedTile},
    grid::{
        longitude_path, GridRectangle, GridRow, GridTile, PolarCoordinate,
        Selection,
    },
    planet::{
        reference::{PlanetModel, ReformMap, TaperedGrid},
        Planet, PlanetGrid, PlatformSystem, ReformType,
    },
    tool::{SelectionTool, ToolAction},
    util::range::{Range, SimpleRange},
};
