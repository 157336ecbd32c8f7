use bq_core::{Error, Image, ImageView, Point2i, Rgb8, gray_to_rgb};
use bq_patch::{PatchConfig, find_brightest_patches};
use bq_quad::{QuadStyle, draw_closed_polyline, order_ccw, shoelace_area};

#[derive(Debug, Clone, PartialEq)]
pub struct QuadDetection {
    /// Patch centers in selection order (brightest first), grid convention.
    pub centers: Vec<Point2i>,
    /// The same centers sorted by angle around their centroid.
    pub quad: Vec<Point2i>,
    /// Shoelace area of `quad` in pixels^2.
    pub area: f64,
}

pub fn detect_quad(src: &ImageView<'_, u8>, cfg: &PatchConfig) -> Result<QuadDetection, Error> {
    let centers = find_brightest_patches(src, cfg)?;
    let quad = order_ccw(&centers);
    let area = shoelace_area(&quad);

    tracing::debug!(?centers, ?quad, area, "quad detected");

    Ok(QuadDetection {
        centers,
        quad,
        area,
    })
}

/// RGB copy of `src` with the closed polyline through `quad` drawn on top.
pub fn render_quad(src: &ImageView<'_, u8>, quad: &[Point2i], style: &QuadStyle) -> Image<Rgb8> {
    let mut raster = gray_to_rgb(src);
    draw_closed_polyline(&mut raster.as_view_mut(), quad, style);
    raster
}

#[cfg(test)]
mod tests {
    use bq_core::{Error, Image, Point2i};
    use bq_patch::PatchConfig;
    use bq_quad::QuadStyle;

    use super::{detect_quad, render_quad};

    fn pts(raw: &[(i64, i64)]) -> Vec<Point2i> {
        raw.iter().map(|&(x, y)| Point2i::new(x, y)).collect()
    }

    fn bright_blocks() -> Image<u8> {
        let mut img = Image::new_fill(100, 100, 0u8);
        let mut view = img.as_view_mut();
        for (row, col, value) in [(10, 10, 255u8), (50, 50, 250), (90, 90, 245), (30, 70, 240)] {
            for y in row..row + 5 {
                view.row_mut(y)[col..col + 5].fill(value);
            }
        }
        img
    }

    #[test]
    fn bright_blocks_end_to_end() {
        let img = bright_blocks();
        let det = detect_quad(&img.as_view(), &PatchConfig::default()).expect("quad found");

        assert_eq!(det.centers, pts(&[(12, 12), (52, 52), (92, 92), (32, 72)]));
        assert_eq!(det.quad, pts(&[(12, 12), (52, 52), (92, 92), (32, 72)]));
        // (52, 52) lies on the diagonal, so the quad spans a 1600 px^2 triangle.
        assert!((det.area - 1600.0).abs() < 1e-9);
    }

    #[test]
    fn rectangle_of_blocks_area() {
        let mut img = Image::new_fill(60, 40, 0u8);
        let mut view = img.as_view_mut();
        for (row, col) in [(5, 5), (5, 45), (30, 5), (30, 45)] {
            for y in row..row + 5 {
                view.row_mut(y)[col..col + 5].fill(200);
            }
        }

        let det = detect_quad(&img.as_view(), &PatchConfig::default()).expect("quad found");
        assert_eq!(det.quad, pts(&[(7, 7), (32, 7), (32, 47), (7, 47)]));
        assert!((det.area - 25.0 * 40.0).abs() < 1e-9);
    }

    #[test]
    fn errors_propagate_without_partial_result() {
        let img = Image::new_fill(8, 8, 10u8);
        let err = detect_quad(&img.as_view(), &PatchConfig::default()).expect_err("no room");
        assert_eq!(
            err,
            Error::InsufficientPatches {
                patch_size: 5,
                num_patches: 4
            }
        );

        let err = detect_quad(
            &img.as_view(),
            &PatchConfig {
                patch_size: 9,
                ..PatchConfig::default()
            },
        )
        .expect_err("patch too large");
        assert!(matches!(err, Error::InvalidConfiguration { .. }));
    }

    #[test]
    fn render_keeps_gray_and_draws_red() {
        let img = bright_blocks();
        let det = detect_quad(&img.as_view(), &PatchConfig::default()).expect("quad found");
        let out = render_quad(&img.as_view(), &det.quad, &QuadStyle::default());

        assert_eq!(out.width(), 100);
        assert_eq!(out.height(), 100);
        // Raster is (col, row): the (32, 72) -> (12, 12) edge passes through
        // grid (22, 42).
        assert_eq!(*out.as_view().get(42, 22).expect("in bounds"), [255, 0, 0]);
        assert_eq!(*out.as_view().get(0, 99).expect("in bounds"), [0, 0, 0]);
        assert_eq!(*out.as_view().get(14, 10).expect("in bounds"), [255, 255, 255]);
    }
}
