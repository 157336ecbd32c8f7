//! Brightest-patch search over 8-bit grayscale grids.
//!
//! Scoring:
//! - Every `p x p` window whose top-left corner `(row, col)` satisfies
//!   `row <= height - p` and `col <= width - p` gets the arithmetic mean of its
//!   samples.
//! - Means are read from a `u64` summed-area table. Window sums of `u8`
//!   samples are exact integers, so each mean equals `sum / p^2` computed by
//!   brute force.
//!
//! Selection:
//! - Positions are ranked by descending mean with a stable sort, so equal
//!   means keep row-major order.
//! - The ranking is scanned greedily. A candidate is rejected when any
//!   accepted center lies closer than `p` on *both* axes. The scan never
//!   backtracks.
//! - Centers are `(row + p / 2, col + p / 2)` in grid convention, returned in
//!   selection order.

mod score;
mod select;

pub use score::{PatchScores, score_patches};
pub use select::{PatchConfig, find_brightest_patches, overlaps, select_patches};
