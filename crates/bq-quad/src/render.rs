use bq_core::{ImageViewMut, Point2i, Rgb8};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuadStyle {
    pub color: Rgb8,
    /// Brush side length in pixels. Zero draws nothing.
    pub thickness: u32,
}

impl Default for QuadStyle {
    fn default() -> Self {
        Self {
            color: [255, 0, 0],
            thickness: 2,
        }
    }
}

/// Draws segments between consecutive points, closing last -> first.
///
/// Points are in grid convention `(row, col)` and are swapped to raster
/// `(col, row)` here. Pixels falling outside the raster are skipped.
pub fn draw_closed_polyline(
    raster: &mut ImageViewMut<'_, Rgb8>,
    points: &[Point2i],
    style: &QuadStyle,
) {
    if style.thickness == 0 {
        return;
    }

    let n = points.len();
    for i in 0..n {
        let from = points[i].swapped();
        let to = points[(i + 1) % n].swapped();
        draw_segment(raster, from, to, style);
    }
}

/// Integer Bresenham walk in raster coordinates, stamping the brush at every
/// visited pixel.
fn draw_segment(
    raster: &mut ImageViewMut<'_, Rgb8>,
    from: Point2i,
    to: Point2i,
    style: &QuadStyle,
) {
    let dx = (to.x - from.x).abs();
    let dy = -(to.y - from.y).abs();
    let sx = if from.x < to.x { 1 } else { -1 };
    let sy = if from.y < to.y { 1 } else { -1 };

    let (mut x, mut y) = (from.x, from.y);
    let mut err = dx + dy;
    loop {
        stamp(raster, x, y, style);
        if x == to.x && y == to.y {
            break;
        }

        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

fn stamp(raster: &mut ImageViewMut<'_, Rgb8>, x: i64, y: i64, style: &QuadStyle) {
    let t = i64::from(style.thickness);
    let lo = -(t / 2);
    let hi = t - 1 - t / 2;

    for oy in lo..=hi {
        let py = y + oy;
        if py < 0 {
            continue;
        }
        for ox in lo..=hi {
            let px = x + ox;
            if px < 0 {
                continue;
            }
            if let Some(pixel) = raster.get_mut(px as usize, py as usize) {
                *pixel = style.color;
            }
        }
    }
}
