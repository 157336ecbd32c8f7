use bq_core::Point2d;

/// Arithmetic mean of the points, or `None` for an empty set.
pub fn centroid<P: Copy + Into<Point2d>>(points: &[P]) -> Option<Point2d> {
    if points.is_empty() {
        return None;
    }

    let (sx, sy) = points.iter().fold((0.0f64, 0.0f64), |(sx, sy), &p| {
        let p: Point2d = p.into();
        (sx + p.x, sy + p.y)
    });
    let n = points.len() as f64;
    Some(Point2d::new(sx / n, sy / n))
}

/// Sorts points by ascending `atan2(y - cy, x - cx)` around their centroid.
///
/// Equal angles keep their input order. Fewer than three points are returned
/// unchanged.
pub fn order_ccw<P: Copy + Into<Point2d>>(points: &[P]) -> Vec<P> {
    let Some(c) = centroid(points).filter(|_| points.len() >= 3) else {
        return points.to_vec();
    };

    let mut keyed: Vec<(f64, P)> = points
        .iter()
        .map(|&p| {
            let q: Point2d = p.into();
            ((q - c).angle(), p)
        })
        .collect();
    keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
    keyed.into_iter().map(|(_, p)| p).collect()
}
