use std::fmt;

/// An integer position in frame pixel coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point2D {
    pub x: i32,
    pub y: i32,
}

impl Point2D {
    pub const ZERO: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Component-wise `a - b`.
#[inline]
pub const fn subtract(a: Point2D, b: Point2D) -> Point2D {
    Point2D::new(a.x - b.x, a.y - b.y)
}

/// 2D cross product `a.x * b.y - a.y * b.x`, widened to `i64`.
///
/// Positive when `b` is counter-clockwise from `a` (in a y-up frame), zero
/// when they are collinear.
#[inline]
pub const fn cross(a: Point2D, b: Point2D) -> i64 {
    a.x as i64 * b.y as i64 - a.y as i64 * b.x as i64
}
