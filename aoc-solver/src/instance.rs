//! Parsed solver instances and their type-erased interface

use crate::error::{ParseError, SolveError};
use crate::solver::{Solver, SolverExt};
use chrono::{DateTime, TimeDelta, Utc};

/// Wall-clock window of one parse or solve call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Timing {
    /// Run `f` and record when it started and finished
    pub fn measure<T>(f: impl FnOnce() -> T) -> (T, Timing) {
        let start = Utc::now();
        let value = f();
        let end = Utc::now();
        (value, Timing { start, end })
    }

    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }
}

/// Answer of one part with its timing
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub answer: String,
    pub timing: Timing,
}

impl SolveResult {
    pub fn duration(&self) -> TimeDelta {
        self.timing.duration()
    }
}

/// A puzzle input parsed by solver `S`, ready to answer parts.
///
/// Parts run against the same shared data, so a part may reuse work left
/// behind by an earlier one (a merged interval set, a built polygon).
pub struct SolverInstance<'a, S: Solver> {
    year: u16,
    day: u8,
    shared: S::SharedData<'a>,
    parse: Timing,
}

impl<'a, S: Solver> SolverInstance<'a, S> {
    /// Parse `input` with `S`
    pub fn new(year: u16, day: u8, input: &'a str) -> Result<Self, ParseError> {
        let (parsed, parse) = Timing::measure(|| S::parse(input));
        Ok(Self {
            year,
            day,
            shared: parsed?,
            parse,
        })
    }

    /// Read-only view of the shared data
    pub fn shared(&self) -> &S::SharedData<'a> {
        &self.shared
    }
}

/// Type-erased access to any [`SolverInstance`].
///
/// ```no_run
/// use aoc_solver::DynSolver;
///
/// fn run_all(solver: &mut dyn DynSolver) {
///     for (part, outcome) in solver.solve_all() {
///         match outcome {
///             Ok(result) => println!("part {part}: {} ({})", result.answer, result.duration()),
///             Err(e) => eprintln!("part {part}: {e}"),
///         }
///     }
/// }
/// ```
pub trait DynSolver {
    /// Solve `part`, timing the call
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError>;

    /// When the input was parsed
    fn parse_timing(&self) -> Timing;

    fn year(&self) -> u16;

    fn day(&self) -> u8;

    /// Number of parts the underlying solver answers
    fn parts(&self) -> u8;

    fn parse_duration(&self) -> TimeDelta {
        self.parse_timing().duration()
    }

    /// Every part in order. A failed part does not stop the later ones.
    fn solve_all(&mut self) -> Vec<(u8, Result<SolveResult, SolveError>)> {
        (1..=self.parts())
            .map(|part| (part, self.solve(part)))
            .collect()
    }
}

impl<'a, S: SolverExt> DynSolver for SolverInstance<'a, S> {
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError> {
        let (answer, timing) =
            Timing::measure(|| S::solve_part_checked_range(&mut self.shared, part));
        Ok(SolveResult {
            answer: answer?,
            timing,
        })
    }

    fn parse_timing(&self) -> Timing {
        self.parse
    }

    fn year(&self) -> u16 {
        self.year
    }

    fn day(&self) -> u8 {
        self.day
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}
