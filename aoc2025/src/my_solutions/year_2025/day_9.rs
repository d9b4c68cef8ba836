use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::geometry::{GeometryError, Point2D, Polygon, largest_spanned_rectangle};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 9, tags = ["geometry"])]
pub struct Solver;

/// Red tiles in input order; consecutive tiles share a row or a column
#[derive(Debug)]
pub struct SharedData {
    red_tiles: Vec<Point2D>,
}

fn parse_point(line: &str) -> Result<Point2D, anyhow::Error> {
    let (x, y) = line
        .split_once(',')
        .ok_or_else(|| anyhow!("expected a tile 'X,Y', got '{}'", line))?;
    Ok(Point2D::new(x.trim().parse()?, y.trim().parse()?))
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .trim()
            .lines()
            .map(parse_point)
            .enumerate()
            .map(|(line_idx, point_res)| {
                point_res.map_err(|e| anyhow!("(line {}) {}", line_idx + 1, e))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(|red_tiles| SharedData { red_tiles })
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        largest_spanned_rectangle(&shared.red_tiles)
            .map(|rect| rect.area().to_string())
            .ok_or_else(|| SolveError::failed(GeometryError::NoInscribedRectangle))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Polygon::new(shared.red_tiles.clone())
            .and_then(|floor| floor.max_inscribed_rectangle())
            .map(|rect| rect.area().to_string())
            .map_err(SolveError::failed)
    }
}
