//! Foundational primitives for the brightquad workspace.
//!
//! ## Image Views and Stride
//! Images use element stride (not byte stride). `stride` is the distance, in
//! elements, between adjacent row starts and may be greater than `width`.
//! This allows borrowed views over padded buffers and subviews.
//!
//! ## Pixel Types
//! Grayscale grids are `Image<u8>`. Overlays are drawn on `Image<Rgb8>`, where
//! [`Rgb8`] stores channels in R, G, B order.
//!
//! ## Point Convention
//! Patch centers are [`Point2i`] values in *grid* convention: `x` is the row
//! index and `y` is the column index. Raster addressing is `(column, row)`,
//! so code that writes pixels must swap the two coordinates.

mod error;
mod geom;
mod image;

pub use error::Error;
pub use geom::{Point2d, Point2i, Vec2d};
pub use image::{Image, ImageView, ImageViewMut, Rgb8, gray_to_rgb};
