//! Umbrella crate for the `brightquad` workspace.
//!
//! Re-exports the core, patch and quad crates and adds the two pieces that
//! tie them together:
//! - [`detect_quad`] / [`render_quad`]: the full image -> patches -> quad ->
//!   area -> overlay pipeline.
//! - [`io`]: the codec boundary (`image` crate) for loading grayscale input
//!   and writing the RGB overlay.

pub mod io;
mod pipeline;

pub use bq_core::*;
pub use bq_patch::*;
pub use bq_quad::*;
pub use pipeline::{QuadDetection, detect_quad, render_quad};
