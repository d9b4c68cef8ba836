//! Rasterized polygon for cell lookups

use std::fmt;

use super::polygon::Polygon;
use super::shapes::{Point2D, Rectangle};
use super::{GeometryError, Region};

/// Classification of one grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Outside,
    Interior,
    Outline,
}

impl Tile {
    fn symbol(self) -> char {
        match self {
            Tile::Outside => '.',
            Tile::Interior => '#',
            Tile::Outline => 'X',
        }
    }
}

/// Every cell of a polygon's bounding box, classified once up front.
///
/// Point queries become a lookup and rectangle queries a scan of the
/// covered cells. Only practical for small coordinate ranges, hence the
/// cell budget in [`RasterGrid::from_polygon`].
#[derive(Debug, Clone)]
pub struct RasterGrid {
    bounds: Rectangle,
    width: usize,
    tiles: Vec<Tile>,
}

impl RasterGrid {
    /// Rasterize `polygon` over its bounding box.
    ///
    /// # Errors
    ///
    /// `RasterTooLarge` when the bounding box holds more than `max_cells` cells.
    pub fn from_polygon(polygon: &Polygon, max_cells: u64) -> Result<Self, GeometryError> {
        let bounds = polygon.bounding_rect();
        let cells = bounds.area();
        if cells > u128::from(max_cells) {
            return Err(GeometryError::RasterTooLarge {
                cells,
                limit: max_cells,
            });
        }

        let tiles = bounds
            .cells()
            .map(|p| {
                if polygon.is_on_outline(p) {
                    Tile::Outline
                } else if polygon.contains_point(p) {
                    Tile::Interior
                } else {
                    Tile::Outside
                }
            })
            .collect();

        Ok(Self {
            bounds,
            width: bounds.width() as usize,
            tiles,
        })
    }

    pub fn bounds(&self) -> Rectangle {
        self.bounds
    }

    /// Tile at `p`; anything beyond the bounding box is outside
    pub fn tile(&self, p: Point2D) -> Tile {
        if !self.bounds.contains_point(p) {
            return Tile::Outside;
        }
        let row = (p.y - self.bounds.top()) as usize;
        let column = (p.x - self.bounds.left()) as usize;
        self.tiles[row * self.width + column]
    }

    pub fn contains_point(&self, p: Point2D) -> bool {
        self.tile(p) != Tile::Outside
    }

    /// Whether no cell covered by `rect` is outside the polygon
    pub fn contains_rect(&self, rect: &Rectangle) -> bool {
        rect.corners().into_iter().all(|p| self.bounds.contains_point(p))
            && rect.cells().all(|p| self.contains_point(p))
    }
}

impl Region for RasterGrid {
    fn contains_point(&self, p: Point2D) -> bool {
        RasterGrid::contains_point(self, p)
    }

    fn contains_rect(&self, rect: &Rectangle) -> bool {
        RasterGrid::contains_rect(self, rect)
    }
}

/// One text row per grid row: `.` outside, `#` interior, `X` outline
impl fmt::Display for RasterGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.tiles.chunks(self.width).enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            for tile in row {
                write!(f, "{}", tile.symbol())?;
            }
        }
        Ok(())
    }
}
