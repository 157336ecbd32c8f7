use core::ops::Sub;

/// Integer point in grid convention: `x` is the row, `y` is the column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point2i {
    pub x: i64,
    pub y: i64,
}

impl Point2i {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Same point with the two axes exchanged, `(row, col)` -> `(col, row)`.
    pub const fn swapped(self) -> Self {
        Self {
            x: self.y,
            y: self.x,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point2d {
    pub x: f64,
    pub y: f64,
}

impl Point2d {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<Point2i> for Point2d {
    fn from(p: Point2i) -> Self {
        Self {
            x: p.x as f64,
            y: p.y as f64,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2d {
    pub x: f64,
    pub y: f64,
}

impl Vec2d {
    /// `atan2(y, x)` in `(-pi, pi]`.
    pub fn angle(self) -> f64 {
        self.y.atan2(self.x)
    }
}

impl Sub<Point2d> for Point2d {
    type Output = Vec2d;

    fn sub(self, rhs: Point2d) -> Self::Output {
        Vec2d {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}
