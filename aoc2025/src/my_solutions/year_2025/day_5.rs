use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::intervals::{IntervalSet, Span};

/// Fresh ingredient IDs.
///
/// Part 1 counts listed IDs inside any fresh range, part 2 counts every ID
/// the ranges cover. [`SharedData::theoretical_max`] reports how many IDs
/// lie between the lowest and highest range bound, gaps included.
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 5, tags = ["intervals"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData {
    fresh: IntervalSet,
    ids: Vec<u64>,
}

impl SharedData {
    /// IDs from the lowest range start to the highest range end
    pub fn theoretical_max(&self) -> u128 {
        self.fresh.theoretical_max().unwrap_or(0)
    }
}

fn parse_span(line: &str) -> Result<Span, anyhow::Error> {
    let (min, max) = line
        .split_once('-')
        .ok_or_else(|| anyhow!("expected a range 'MIN-MAX', got '{}'", line))?;
    Ok(Span::new(min.trim().parse()?, max.trim().parse()?)?)
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut lines = input.trim().lines().map(str::trim).enumerate();

        // ranges run up to the first blank line, which take_while consumes
        let fresh = lines
            .by_ref()
            .take_while(|(_, line)| !line.is_empty())
            .map(|(line_idx, line)| {
                parse_span(line).map_err(|e| anyhow!("(line {}) {}", line_idx + 1, e))
            })
            .collect::<Result<IntervalSet, _>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))?;

        let ids = lines
            .map(|(line_idx, line)| {
                line.parse::<u64>()
                    .map_err(|e| anyhow!("(line {}) invalid ID '{}': {}", line_idx + 1, line, e))
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))?;

        if fresh.is_empty() {
            return Err(ParseError::MissingData("no fresh ID ranges".to_string()));
        }

        Ok(SharedData { fresh, ids })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared.fresh.merge_all();
        let Some(covered) = shared.fresh.bounding_span() else {
            return Ok("0".to_string());
        };

        let fresh_count = shared
            .ids
            .iter()
            .filter(|&&id| covered.contains(id) && shared.fresh.contains(id))
            .count();
        Ok(fresh_count.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared.fresh.merge_all();
        shared
            .fresh
            .total_coverage()
            .map(|total| total.to_string())
            .map_err(SolveError::failed)
    }
}
