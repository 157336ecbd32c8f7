use bq_core::{Error, ImageView, Point2i};

use crate::score::{PatchScores, score_patches};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatchConfig {
    /// Side length of the square window.
    pub patch_size: usize,
    /// Number of non-overlapping patches to select.
    pub num_patches: usize,
}

impl Default for PatchConfig {
    fn default() -> Self {
        Self {
            patch_size: 5,
            num_patches: 4,
        }
    }
}

/// Two centers overlap when they are closer than `patch_size` on both axes.
pub fn overlaps(a: Point2i, b: Point2i, patch_size: usize) -> bool {
    let reach = patch_size as i64;
    (a.x - b.x).abs() < reach && (a.y - b.y).abs() < reach
}

/// Greedily picks `num_patches` non-overlapping centers, brightest first.
///
/// Returns exactly `num_patches` centers or an error; never a partial list.
pub fn select_patches(scores: &PatchScores, num_patches: usize) -> Result<Vec<Point2i>, Error> {
    let patch_size = scores.patch_size();
    let mut selected = Vec::with_capacity(num_patches.min(scores.len()));
    if num_patches == 0 {
        return Ok(selected);
    }

    let means = scores.as_image().data();
    let cols = scores.cols();

    // Stable: equal means stay in row-major order.
    let mut ranking: Vec<usize> = (0..means.len()).collect();
    ranking.sort_by(|&a, &b| means[b].total_cmp(&means[a]));

    let mut rejected = 0usize;
    for idx in ranking {
        let candidate = scores.center_of(idx / cols, idx % cols);
        if selected
            .iter()
            .any(|&accepted| overlaps(candidate, accepted, patch_size))
        {
            rejected += 1;
            continue;
        }

        tracing::trace!(
            row = candidate.x,
            col = candidate.y,
            mean = means[idx],
            "accepted patch"
        );
        selected.push(candidate);
        if selected.len() == num_patches {
            tracing::debug!(
                patch_size,
                num_patches,
                rejected,
                "selected non-overlapping patches"
            );
            return Ok(selected);
        }
    }

    Err(Error::InsufficientPatches {
        patch_size,
        num_patches,
    })
}

/// Scores every window of `src` and selects the brightest non-overlapping
/// patch centers.
pub fn find_brightest_patches(
    src: &ImageView<'_, u8>,
    cfg: &PatchConfig,
) -> Result<Vec<Point2i>, Error> {
    let scores = score_patches(src, cfg.patch_size)?;
    select_patches(&scores, cfg.num_patches)
}
