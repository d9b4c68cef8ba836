//! The puzzle solvers register themselves and run through the type-erased
//! registry interface

use aoc_solver::{DynSolver, SolverError, SolverRegistry, SolverRegistryBuilder};

// link the plugins
use aoc2025 as _;

const DAY_5: &str = "3-5\n10-14\n16-20\n12-18\n\n1\n5\n8\n11\n17\n32\n";
const DAY_9: &str = "7,1\n11,1\n11,7\n9,7\n9,5\n2,5\n2,3\n7,3\n";

fn registry_with_tag(tag: &str) -> SolverRegistry {
    SolverRegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.tags.contains(&tag))
        .unwrap()
        .build()
}

fn solve_all(registry: &SolverRegistry, year: u16, day: u8, input: &str) -> Vec<String> {
    let mut solver = registry.create_solver(year, day, input).unwrap();
    solver
        .solve_all()
        .into_iter()
        .map(|(_, result)| result.unwrap().answer)
        .collect()
}

#[test]
fn test_both_puzzles_registered() {
    let registry = SolverRegistryBuilder::new()
        .register_all_plugins()
        .unwrap()
        .build();
    let storage = registry.storage();

    assert!(storage.contains(2025, 5));
    assert!(storage.contains(2025, 9));
    assert_eq!(storage.get_info(2025, 5).map(|info| info.parts), Some(2));
    assert_eq!(storage.get_info(2025, 9).map(|info| info.parts), Some(2));
}

#[test]
fn test_tags_select_puzzles() {
    let intervals = registry_with_tag("intervals");
    assert!(intervals.storage().contains(2025, 5));
    assert!(!intervals.storage().contains(2025, 9));

    let geometry = registry_with_tag("geometry");
    assert!(geometry.storage().contains(2025, 9));
    assert!(!geometry.storage().contains(2025, 5));
}

#[test]
fn test_examples_through_registry() {
    let registry = SolverRegistryBuilder::new()
        .register_all_plugins()
        .unwrap()
        .build();

    assert_eq!(solve_all(&registry, 2025, 5, DAY_5), vec!["3", "14"]);
    assert_eq!(solve_all(&registry, 2025, 9, DAY_9), vec!["50", "24"]);
}

#[test]
fn test_bad_input_is_a_parse_error() {
    let registry = registry_with_tag("geometry");
    assert!(matches!(
        registry.create_solver(2025, 9, "1,2\n3;4\n"),
        Err(SolverError::ParseError(_))
    ));
}
