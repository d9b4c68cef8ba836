use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver};

#[derive(Debug, Default)]
struct Ranges {
    spans: Vec<(u64, u64)>,
    widest: Option<u64>,
}

#[derive(AocSolver)]
#[aoc_solver(max_parts = 3)]
struct RangeSolver;

impl AocParser for RangeSolver {
    type SharedData<'a> = Ranges;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let spans = input
            .lines()
            .map(|line| -> Result<(u64, u64), ParseError> {
                let (lo, hi) = line
                    .split_once('-')
                    .ok_or_else(|| ParseError::InvalidFormat(line.to_string()))?;
                let lo = lo.parse().map_err(|_| ParseError::InvalidFormat(line.to_string()))?;
                let hi = hi.parse().map_err(|_| ParseError::InvalidFormat(line.to_string()))?;
                Ok((lo, hi))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Ranges { spans, widest: None })
    }
}

impl PartSolver<1> for RangeSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.spans.len().to_string())
    }
}

// Stores the widest span for part 3
impl PartSolver<2> for RangeSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let widest = shared
            .spans
            .iter()
            .map(|(lo, hi)| hi - lo + 1)
            .max()
            .ok_or_else(|| SolveError::SolveFailed("no spans".into()))?;
        shared.widest = Some(widest);
        Ok(widest.to_string())
    }
}

impl PartSolver<3> for RangeSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .widest
            .map(|w| (w * 2).to_string())
            .ok_or(SolveError::PartNotImplemented(3))
    }
}

#[test]
fn test_parts_constant_matches_attribute() {
    assert_eq!(<RangeSolver as Solver>::PARTS, 3);
}

#[test]
fn test_dispatch_reaches_each_part() {
    let mut shared = RangeSolver::parse("3-5\n10-14").unwrap();
    assert_eq!(RangeSolver::solve_part(&mut shared, 1).unwrap(), "2");
    assert_eq!(RangeSolver::solve_part(&mut shared, 2).unwrap(), "5");
    assert_eq!(RangeSolver::solve_part(&mut shared, 3).unwrap(), "10");
}

#[test]
fn test_later_part_sees_earlier_mutation() {
    let mut shared = RangeSolver::parse("1-1").unwrap();
    assert!(RangeSolver::solve_part(&mut shared, 3).is_err());
    RangeSolver::solve_part(&mut shared, 2).unwrap();
    assert_eq!(shared.widest, Some(1));
    assert_eq!(RangeSolver::solve_part(&mut shared, 3).unwrap(), "2");
}

#[test]
fn test_part_out_of_range() {
    let mut shared = RangeSolver::parse("1-2").unwrap();
    assert!(matches!(
        RangeSolver::solve_part(&mut shared, 0),
        Err(SolveError::PartOutOfRange(0))
    ));
    assert!(matches!(
        RangeSolver::solve_part(&mut shared, 4),
        Err(SolveError::PartOutOfRange(4))
    ));
}

#[test]
fn test_part_error_propagates() {
    let mut shared = RangeSolver::parse("").unwrap();
    assert!(matches!(
        RangeSolver::solve_part(&mut shared, 2),
        Err(SolveError::SolveFailed(_))
    ));
}
