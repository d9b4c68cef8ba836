//! Rectilinear polygons and ray-casting containment

use super::shapes::{Point2D, Rectangle};
use super::{GeometryError, Region, find_max_inscribed};

/// True when `value` lies between `a` and `b`, inclusive, in either order
fn in_range(a: i64, b: i64, value: i64) -> bool {
    a.min(b) <= value && value <= a.max(b)
}

/// Simple polygon whose edges are all horizontal or vertical.
///
/// Vertices form a cycle: the last vertex connects back to the first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polygon {
    vertices: Vec<Point2D>,
}

impl Polygon {
    /// Build a polygon, checking that every edge (including the closing
    /// one) is axis-aligned.
    ///
    /// # Errors
    ///
    /// - `EmptyPolygon` for an empty vertex list
    /// - `InvalidPolygon` naming the first diagonal edge
    pub fn new(vertices: Vec<Point2D>) -> Result<Self, GeometryError> {
        if vertices.is_empty() {
            return Err(GeometryError::EmptyPolygon);
        }

        let polygon = Self { vertices };
        if let Some((index, (from, to))) = polygon
            .edges()
            .enumerate()
            .find(|(_, (from, to))| from.x != to.x && from.y != to.y)
        {
            return Err(GeometryError::InvalidPolygon { index, from, to });
        }
        Ok(polygon)
    }

    pub fn vertices(&self) -> &[Point2D] {
        &self.vertices
    }

    /// Edges as (start, end) pairs, ending with the closing edge
    pub fn edges(&self) -> impl Iterator<Item = (Point2D, Point2D)> + '_ {
        self.vertices
            .iter()
            .copied()
            .zip(self.vertices.iter().copied().cycle().skip(1))
    }

    pub fn bounding_rect(&self) -> Rectangle {
        Rectangle::bounding(&self.vertices).unwrap_or_else(|| {
            // constructor guarantees at least one vertex
            Rectangle::from_corners(Point2D::ZERO, Point2D::ZERO)
        })
    }

    /// Whether `p` lies exactly on an edge
    pub fn is_on_outline(&self, p: Point2D) -> bool {
        self.edges().any(|(a, b)| {
            let on_vertical = a.x == b.x && a.x == p.x && in_range(a.y, b.y, p.y);
            let on_horizontal = a.y == b.y && a.y == p.y && in_range(a.x, b.x, p.x);
            on_vertical || on_horizontal
        })
    }

    /// Point-in-polygon test with a half-line cast from `p` toward +x.
    ///
    /// Outline points count as inside. A vertical edge is crossed when one
    /// end is strictly above the ray's row and the other is on or below it,
    /// so a ray grazing a vertex is counted once.
    pub fn contains_point(&self, p: Point2D) -> bool {
        let mut crossings = 0usize;
        for (a, b) in self.edges() {
            // edge entirely above the row
            if p.y > a.y && p.y > b.y {
                continue;
            }
            // edge entirely on or below the row
            if p.y <= a.y && p.y <= b.y {
                if p.y == a.y && p.y == b.y && in_range(a.x, b.x, p.x) {
                    return true;
                }
                continue;
            }
            // edge left of the point
            if p.x > a.x && p.x > b.x {
                continue;
            }
            if p.x == a.x && p.x == b.x {
                if in_range(a.y, b.y, p.y) {
                    return true;
                }
                continue;
            }
            crossings += 1;
        }
        crossings % 2 == 1
    }

    /// Whether every cell on the border of `rect` is inside the polygon.
    ///
    /// Checking the corners alone is not enough: a concavity can cut into
    /// an edge of the rectangle between two inside corners.
    pub fn contains_rect(&self, rect: &Rectangle) -> bool {
        rect.corners().into_iter().all(|p| self.contains_point(p))
            && rect.perimeter().all(|p| self.contains_point(p))
    }

    /// Largest rectangle with two vertices as opposite corners that fits
    /// inside the polygon.
    ///
    /// Candidates are tried by decreasing area; among equal areas the pair
    /// found first in vertex order wins.
    ///
    /// # Errors
    ///
    /// `NoInscribedRectangle` if no candidate fits, which includes polygons
    /// with a single vertex.
    pub fn max_inscribed_rectangle(&self) -> Result<Rectangle, GeometryError> {
        find_max_inscribed(&self.vertices, self)
    }
}

impl Region for Polygon {
    fn contains_point(&self, p: Point2D) -> bool {
        Polygon::contains_point(self, p)
    }

    fn contains_rect(&self, rect: &Rectangle) -> bool {
        Polygon::contains_rect(self, rect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn polygon(points: &[(i64, i64)]) -> Polygon {
        Polygon::new(points.iter().map(|&(x, y)| Point2D::new(x, y)).collect()).unwrap()
    }

    #[test]
    fn test_rejects_diagonal_edge() {
        let result = Polygon::new(vec![
            Point2D::new(0, 0),
            Point2D::new(4, 0),
            Point2D::new(4, 4),
            Point2D::new(1, 3),
        ]);
        assert!(matches!(
            result,
            Err(GeometryError::InvalidPolygon { index: 2, .. })
        ));
    }

    #[test]
    fn test_rejects_diagonal_closing_edge() {
        let result = Polygon::new(vec![Point2D::new(0, 0), Point2D::new(4, 0), Point2D::new(4, 4)]);
        assert!(matches!(
            result,
            Err(GeometryError::InvalidPolygon { index: 2, .. })
        ));
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(Polygon::new(Vec::new()), Err(GeometryError::EmptyPolygon));
    }

    #[test]
    fn test_edges_wrap_around() {
        let square = polygon(&[(0, 0), (2, 0), (2, 2), (0, 2)]);
        let edges: Vec<_> = square.edges().collect();
        assert_eq!(edges.len(), 4);
        assert_eq!(edges[3], (Point2D::new(0, 2), Point2D::new(0, 0)));
    }

    #[test]
    fn test_outline_of_square() {
        let square = polygon(&[(0, 0), (4, 0), (4, 3), (0, 3)]);
        assert!(square.is_on_outline(Point2D::new(0, 0)));
        assert!(square.is_on_outline(Point2D::new(2, 0)));
        assert!(square.is_on_outline(Point2D::new(4, 1)));
        assert!(square.is_on_outline(Point2D::new(0, 2)));
        assert!(!square.is_on_outline(Point2D::new(2, 1)));
        assert!(!square.is_on_outline(Point2D::new(5, 0)));
    }

    #[test]
    fn test_contains_square() {
        let square = polygon(&[(0, 0), (4, 0), (4, 3), (0, 3)]);
        assert!(square.contains_point(Point2D::new(2, 1)));
        assert!(square.contains_point(Point2D::new(4, 3)));
        assert!(square.contains_point(Point2D::new(0, 1)));
        assert!(!square.contains_point(Point2D::new(-1, 1)));
        assert!(!square.contains_point(Point2D::new(5, 1)));
        assert!(!square.contains_point(Point2D::new(2, 4)));
        assert!(!square.contains_point(Point2D::new(2, -1)));
    }

    #[test]
    fn test_max_inscribed_of_rectangle_is_its_bounds() {
        let shape = polygon(&[(1, 1), (5, 1), (5, 4), (1, 4)]);
        let best = shape.max_inscribed_rectangle().unwrap();
        assert_eq!(best, shape.bounding_rect());
        assert_eq!(best.area(), 20);
    }

    #[test]
    fn test_single_vertex_has_no_candidate() {
        let dot = polygon(&[(3, 3)]);
        assert!(dot.contains_point(Point2D::new(3, 3)));
        assert_eq!(
            dot.max_inscribed_rectangle(),
            Err(GeometryError::NoInscribedRectangle)
        );
    }
}
