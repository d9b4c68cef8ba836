//! Points and axis-aligned rectangles on the integer grid

use std::fmt;
use std::ops::{Add, Sub};

/// Grid coordinate. `y` grows downward, so "top" is the smaller `y`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point2D {
    pub x: i64,
    pub y: i64,
}

impl Point2D {
    pub const ZERO: Point2D = Point2D { x: 0, y: 0 };

    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl Add for Point2D {
    type Output = Point2D;

    fn add(self, rhs: Point2D) -> Point2D {
        Point2D::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point2D {
    type Output = Point2D;

    fn sub(self, rhs: Point2D) -> Point2D {
        Point2D::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl fmt::Display for Point2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// Axis-aligned rectangle covering every grid cell between two corners.
///
/// Both corners are inclusive: a rectangle whose corners share a column is
/// one cell wide, not zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rectangle {
    min: Point2D,
    max: Point2D,
}

impl Rectangle {
    /// Rectangle with `a` and `b` as opposite corners, in any order
    pub fn from_corners(a: Point2D, b: Point2D) -> Self {
        Self {
            min: Point2D::new(a.x.min(b.x), a.y.min(b.y)),
            max: Point2D::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Smallest rectangle containing every point, `None` for no points
    pub fn bounding<'a, I>(points: I) -> Option<Rectangle>
    where
        I: IntoIterator<Item = &'a Point2D>,
    {
        let mut points = points.into_iter();
        let first = *points.next()?;
        Some(points.fold(Rectangle::from_corners(first, first), |bound, p| {
            Rectangle {
                min: Point2D::new(bound.min.x.min(p.x), bound.min.y.min(p.y)),
                max: Point2D::new(bound.max.x.max(p.x), bound.max.y.max(p.y)),
            }
        }))
    }

    /// Columns covered. Up to 2^64 for corners at opposite ends of `i64`.
    pub fn width(&self) -> u128 {
        u128::from(self.max.x.abs_diff(self.min.x)) + 1
    }

    pub fn height(&self) -> u128 {
        u128::from(self.max.y.abs_diff(self.min.y)) + 1
    }

    /// Number of cells covered, saturating at `u128::MAX` for the whole plane
    pub fn area(&self) -> u128 {
        self.width().saturating_mul(self.height())
    }

    pub fn top(&self) -> i64 {
        self.min.y
    }

    pub fn left(&self) -> i64 {
        self.min.x
    }

    pub fn bottom(&self) -> i64 {
        self.max.y
    }

    pub fn right(&self) -> i64 {
        self.max.x
    }

    pub fn top_left(&self) -> Point2D {
        self.min
    }

    pub fn bottom_right(&self) -> Point2D {
        self.max
    }

    /// Top-left, top-right, bottom-left, bottom-right
    pub fn corners(&self) -> [Point2D; 4] {
        [
            self.min,
            Point2D::new(self.max.x, self.min.y),
            Point2D::new(self.min.x, self.max.y),
            self.max,
        ]
    }

    pub fn contains_point(&self, p: Point2D) -> bool {
        (self.min.x..=self.max.x).contains(&p.x) && (self.min.y..=self.max.y).contains(&p.y)
    }

    /// Every cell on the border: top and bottom rows, then left and right
    /// columns. Corners are visited more than once.
    pub fn perimeter(&self) -> impl Iterator<Item = Point2D> + '_ {
        let rows = (self.left()..=self.right()).flat_map(move |x| {
            [Point2D::new(x, self.top()), Point2D::new(x, self.bottom())]
        });
        let columns = (self.top()..=self.bottom()).flat_map(move |y| {
            [Point2D::new(self.left(), y), Point2D::new(self.right(), y)]
        });
        rows.chain(columns)
    }

    /// Every cell, row by row
    pub fn cells(&self) -> impl Iterator<Item = Point2D> + '_ {
        (self.top()..=self.bottom())
            .flat_map(move |y| (self.left()..=self.right()).map(move |x| Point2D::new(x, y)))
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} .. {}] ({}x{})", self.min, self.max, self.width(), self.height())
    }
}
