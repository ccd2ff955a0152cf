//! Integer coordinate pair

use std::fmt;

/// An ordered pair of integers.
///
/// Used as a grid position (tile keys), as a size (tile size, map size)
/// and as an offset (scroll). Equality and hashing are by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0, y: 0 };

    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Scale a grid position by a tile size, giving the pixel origin.
    ///
    /// `None` when either product overflows `i64`.
    pub fn to_pixels(self, tile_size: Point) -> Option<Point> {
        Some(Point::new(
            self.x.checked_mul(tile_size.x)?,
            self.y.checked_mul(tile_size.y)?,
        ))
    }

    pub fn checked_add(self, rhs: Point) -> Option<Point> {
        Some(Point::new(
            self.x.checked_add(rhs.x)?,
            self.y.checked_add(rhs.y)?,
        ))
    }

    pub fn checked_sub(self, rhs: Point) -> Option<Point> {
        Some(Point::new(
            self.x.checked_sub(rhs.x)?,
            self.y.checked_sub(rhs.y)?,
        ))
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Point::new(x, y)
    }
}

impl From<Point> for (i64, i64) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

/// Formats in the document's `x;y` notation
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{};{}", self.x, self.y)
    }
}
