//! Quadrilateral geometry on patch centers.
//!
//! Points arrive in grid convention (`x` = row, `y` = column). Ordering and
//! area work directly in that convention; only [`draw_closed_polyline`] maps
//! points to raster `(column, row)` addressing.
//!
//! [`order_ccw`] sorts by `atan2` around the centroid. That yields a simple
//! polygon for convex point sets surrounding their centroid. For other sets
//! the result is whatever the angle sort produces, and [`shoelace_area`] then
//! measures that traversal as-is.

mod area;
mod order;
mod render;

pub use area::shoelace_area;
pub use order::{centroid, order_ccw};
pub use render::{QuadStyle, draw_closed_polyline};
