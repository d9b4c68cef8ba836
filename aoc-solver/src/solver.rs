//! Core solver traits

use crate::error::{ParseError, SolveError};

/// Parses raw puzzle input into the data shared by every part.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, ParseError};
///
/// struct Ranges;
///
/// impl AocParser for Ranges {
///     type SharedData<'a> = Vec<(u64, u64)>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .map(|line| -> Result<(u64, u64), ParseError> {
///                 let (lo, hi) = line
///                     .split_once('-')
///                     .ok_or_else(|| ParseError::InvalidFormat("missing '-'".into()))?;
///                 let lo = lo.parse().map_err(|_| ParseError::InvalidFormat(lo.into()))?;
///                 let hi = hi.parse().map_err(|_| ParseError::InvalidFormat(hi.into()))?;
///                 Ok((lo, hi))
///             })
///             .collect()
///     }
/// }
///
/// assert_eq!(Ranges::parse("3-5\n10-14").unwrap(), vec![(3, 5), (10, 14)]);
/// ```
pub trait AocParser {
    /// Parsed input plus any intermediate results parts want to share.
    ///
    /// Owned structs are the common case; borrow from the input through `'a`
    /// when no transformation is needed.
    type SharedData<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;
}

/// Solves part `N` of a puzzle.
///
/// Implement it once per part and let `#[derive(AocSolver)]` generate the
/// [`Solver`] dispatch.
pub trait PartSolver<const N: u8>: AocParser {
    /// Compute the answer for this part. Earlier parts may have left
    /// intermediate results in `shared`.
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError>;
}

/// Runtime-dispatched solver over all parts of one puzzle.
///
/// Usually derived:
///
/// ```
/// use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver};
///
/// #[derive(AocSolver)]
/// #[aoc_solver(max_parts = 1)]
/// struct Sum;
///
/// impl AocParser for Sum {
///     type SharedData<'a> = Vec<u64>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat(l.into())))
///             .collect()
///     }
/// }
///
/// impl PartSolver<1> for Sum {
///     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
///         Ok(shared.iter().sum::<u64>().to_string())
///     }
/// }
///
/// let mut shared = Sum::parse("1\n2\n3").unwrap();
/// assert_eq!(Sum::solve_part(&mut shared, 1).unwrap(), "6");
/// ```
pub trait Solver: AocParser {
    /// Number of parts this solver answers
    const PARTS: u8;

    /// Solve `part`, returning `PartOutOfRange` for parts the solver does not declare.
    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;
}

pub trait SolverExt: Solver {
    /// Reject parts outside `1..=PARTS` before dispatching
    fn solve_part_checked_range(
        shared: &mut Self::SharedData<'_>,
        part: u8,
    ) -> Result<String, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(shared, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
