//! Rectilinear polygon containment and rectangle search
//!
//! A [`Polygon`] answers point and rectangle containment by casting a ray
//! from the query point and counting edge crossings. [`RasterGrid`] answers
//! the same questions from a precomputed cell grid, which is faster for small
//! coordinate ranges. Both implement [`Region`], and
//! [`find_max_inscribed`] searches either for the largest rectangle spanned
//! by two polygon vertices.
//!
//! ```rust
//! use aoc2025::utils::geometry::{Point2D, Polygon};
//!
//! // an L-shaped tile floor
//! let floor = Polygon::new(vec![
//!     Point2D::new(0, 0),
//!     Point2D::new(2, 0),
//!     Point2D::new(2, 3),
//!     Point2D::new(5, 3),
//!     Point2D::new(5, 5),
//!     Point2D::new(0, 5),
//! ])
//! .unwrap();
//!
//! assert!(floor.contains_point(Point2D::new(1, 4)));
//! assert!(!floor.contains_point(Point2D::new(4, 1)));
//!
//! let best = floor.max_inscribed_rectangle().unwrap();
//! assert_eq!(best.area(), 18);
//! ```

mod polygon;
mod raster;
mod shapes;


use std::cmp::Reverse;

use thiserror::Error;

pub use polygon::Polygon;
pub use raster::{RasterGrid, Tile};
pub use shapes::{Point2D, Rectangle};

/// Error type for polygon construction and searches
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    #[error("polygon has no vertices")]
    EmptyPolygon,
    /// An edge is neither horizontal nor vertical
    #[error("edge {index} from {from} to {to} is not axis-aligned")]
    InvalidPolygon {
        index: usize,
        from: Point2D,
        to: Point2D,
    },
    #[error("no rectangle spanned by two vertices fits inside the polygon")]
    NoInscribedRectangle,
    #[error("raster of {cells} cells exceeds the limit of {limit}")]
    RasterTooLarge { cells: u128, limit: u64 },
}

/// Anything that can say whether grid cells belong to it
pub trait Region {
    fn contains_point(&self, p: Point2D) -> bool;

    /// Whether the whole rectangle lies inside the region
    fn contains_rect(&self, rect: &Rectangle) -> bool;
}

/// Largest rectangle with two of `vertices` as opposite corners that
/// `region` contains.
///
/// All `n(n-1)/2` pairs are sorted by area, largest first, with ties kept in
/// pair discovery order; the first one the region contains wins.
pub fn find_max_inscribed<R>(vertices: &[Point2D], region: &R) -> Result<Rectangle, GeometryError>
where
    R: Region + ?Sized,
{
    let mut candidates: Vec<Rectangle> = vertices
        .iter()
        .enumerate()
        .flat_map(|(i, &a)| {
            vertices[i + 1..]
                .iter()
                .map(move |&b| Rectangle::from_corners(a, b))
        })
        .collect();
    candidates.sort_by_key(|rect| Reverse(rect.area()));

    candidates
        .into_iter()
        .find(|rect| region.contains_rect(rect))
        .ok_or(GeometryError::NoInscribedRectangle)
}

/// Largest rectangle with any two of `points` as opposite corners,
/// ignoring what lies between them. `None` for fewer than two points.
pub fn largest_spanned_rectangle(points: &[Point2D]) -> Option<Rectangle> {
    points
        .iter()
        .enumerate()
        .flat_map(|(i, &a)| {
            points[i + 1..]
                .iter()
                .map(move |&b| Rectangle::from_corners(a, b))
        })
        .fold(None, |best: Option<Rectangle>, rect| match best {
            Some(current) if current.area() >= rect.area() => Some(current),
            _ => Some(rect),
        })
}
