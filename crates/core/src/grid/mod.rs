//! Types for addressing tiles on a planet's latitude/longitude grid, and for
//! selecting rectangles of them.
//!
//! The grid is made of latitude rows ([GridRow]), and each row is split into
//! longitude tiles ([GridTile]). Both axes use the same non-linear addressing
//! scheme, see [PolarCoordinate]. Rows closer to the poles have fewer
//! longitude segments, so a longitude element only means something relative
//! to its own row.

mod polar;
mod rectangle;
mod row;
mod tile;

pub use polar::PolarCoordinate;
pub use rectangle::{longitude_path, GridRectangle, Selection};
pub use row::GridRow;
pub use tile::GridTile;
