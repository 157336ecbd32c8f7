use bq_core::{Error, Image, ImageView, Point2i};

/// Mean brightness of every valid patch position.
///
/// The score grid is `(width - p + 1) x (height - p + 1)`; entry `(col, row)`
/// holds the mean of the window whose top-left sample is `(row, col)`.
#[derive(Debug, Clone, PartialEq)]
pub struct PatchScores {
    patch_size: usize,
    means: Image<f64>,
}

impl PatchScores {
    pub fn patch_size(&self) -> usize {
        self.patch_size
    }

    /// Number of valid top-left rows.
    pub fn rows(&self) -> usize {
        self.means.height()
    }

    /// Number of valid top-left columns.
    pub fn cols(&self) -> usize {
        self.means.width()
    }

    pub fn len(&self) -> usize {
        self.means.data().len()
    }

    pub fn is_empty(&self) -> bool {
        self.means.data().is_empty()
    }

    pub fn mean(&self, row: usize, col: usize) -> Option<f64> {
        self.means.as_view().get(col, row).copied()
    }

    pub fn as_image(&self) -> &Image<f64> {
        &self.means
    }

    /// Top-left positions `(row, col)` in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let cols = self.cols();
        (0..self.len()).map(move |i| (i / cols, i % cols))
    }

    /// Center of the patch at top-left `(row, col)`, in grid convention.
    pub fn center_of(&self, row: usize, col: usize) -> Point2i {
        let half = self.patch_size / 2;
        Point2i::new((row + half) as i64, (col + half) as i64)
    }
}

pub fn score_patches(src: &ImageView<'_, u8>, patch_size: usize) -> Result<PatchScores, Error> {
    let (w, h) = (src.width(), src.height());
    if patch_size == 0 || patch_size > w || patch_size > h {
        return Err(Error::InvalidConfiguration {
            patch_size,
            width: w,
            height: h,
        });
    }

    let table = summed_area_table(src);
    let iw = w + 1;
    let out_w = w - patch_size + 1;
    let out_h = h - patch_size + 1;
    let area = (patch_size * patch_size) as f64;

    let mut means = Vec::with_capacity(out_w * out_h);
    for r in 0..out_h {
        let top = r * iw;
        let bottom = (r + patch_size) * iw;
        for c in 0..out_w {
            // a + d first keeps the running value non-negative.
            let sum = table[bottom + c + patch_size] + table[top + c]
                - table[top + c + patch_size]
                - table[bottom + c];
            means.push(sum as f64 / area);
        }
    }

    tracing::debug!(
        width = w,
        height = h,
        patch_size,
        positions = means.len(),
        "scored patch positions"
    );

    Ok(PatchScores {
        patch_size,
        means: Image::from_vec(out_w, out_h, means)?,
    })
}

/// `(h + 1) x (w + 1)` table; entry `(y, x)` is the sum of all samples with
/// row `< y` and column `< x`.
fn summed_area_table(src: &ImageView<'_, u8>) -> Vec<u64> {
    let iw = src.width() + 1;
    let mut table = vec![0u64; iw * (src.height() + 1)];

    for y in 0..src.height() {
        let mut row_sum = 0u64;
        for (x, &px) in src.row(y).iter().enumerate() {
            row_sum += u64::from(px);
            table[(y + 1) * iw + x + 1] = table[y * iw + x + 1] + row_sum;
        }
    }

    table
}
