use bq_core::Point2d;

/// Polygon area by the shoelace formula with wrap-around indexing.
///
/// `0.5 * |sum(x[i] * y[i-1]) - sum(y[i] * x[i-1])|`, where the predecessor of
/// point 0 is the last point. Orientation does not affect the result.
/// Fewer than three points enclose nothing and yield `0.0`.
pub fn shoelace_area<P: Copy + Into<Point2d>>(points: &[P]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }

    let mut prev: Point2d = points[points.len() - 1].into();
    let mut twice = 0.0f64;
    for &p in points {
        let cur: Point2d = p.into();
        twice += cur.x * prev.y - cur.y * prev.x;
        prev = cur;
    }

    0.5 * twice.abs()
}
