use aoc_solver::{
    AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError,
    SolverRegistryBuilder,
};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(year = 2025, day = 5, tags = ["intervals", "test"])]
pub struct TaggedSolver;

impl AocParser for TaggedSolver {
    type SharedData<'a> = &'a str;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(input)
    }
}

impl PartSolver<1> for TaggedSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.lines().count().to_string())
    }
}

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 9)]
pub struct UntaggedSolver;

impl AocParser for UntaggedSolver {
    type SharedData<'a> = usize;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(input.len())
    }
}

impl PartSolver<1> for UntaggedSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.to_string())
    }
}

impl PartSolver<2> for UntaggedSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok((*shared * 2).to_string())
    }
}

#[test]
fn test_all_plugins_registered() {
    let registry = SolverRegistryBuilder::new()
        .register_all_plugins()
        .unwrap()
        .build();

    let storage = registry.storage();
    assert_eq!(storage.len(), 2);
    assert_eq!(storage.get_info(2025, 5).map(|info| info.parts), Some(1));
    assert_eq!(storage.get_info(2025, 9).map(|info| info.parts), Some(2));

    let mut solver = registry.create_solver(2025, 9, "abcd").unwrap();
    assert_eq!(solver.parts(), 2);
    assert_eq!(solver.solve(2).unwrap().answer, "8");
}

#[test]
fn test_tag_filter() {
    let registry = SolverRegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.tags.contains(&"intervals"))
        .unwrap()
        .build();

    let days: Vec<u8> = registry.storage().iter_info().map(|info| info.day).collect();
    assert_eq!(days, vec![5]);

    let mut solver = registry.create_solver(2025, 5, "a\nb\nc").unwrap();
    assert_eq!(solver.solve(1).unwrap().answer, "3");
}

#[test]
fn test_duplicate_registration_rejected() {
    let result = SolverRegistryBuilder::new()
        .register_all_plugins()
        .unwrap()
        .register::<TaggedSolver>(2025, 5);
    assert!(matches!(
        result,
        Err(aoc_solver::RegistrationError::DuplicateSolver(2025, 5))
    ));
}
