//! Parallel executor for running solvers

use crate::cli::ParallelizeBy;
use crate::config::Config;
use crate::error::{ArcExecutorError, ExecutorError};
use crate::inputs::InputStore;
use aoc_solver::{DynSolver, ParseError, SolverError, SolverRegistry};
use chrono::TimeDelta;
use itertools::Itertools;
use rayon::prelude::*;
use std::ops::RangeInclusive;
use std::sync::mpsc::Sender;

/// Result from a single solver execution
pub struct SolverResult {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    pub answer: Result<String, SolverError>,
    pub solve_duration: TimeDelta,
    /// Set on the result of the first part solved from a parsed input
    pub parse_duration: Option<TimeDelta>,
}

/// Work item representing a solver to execute
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

/// Parallel executor for running solvers
pub struct Executor {
    sync_executor_config: SyncExecutorConfig,
    thread_pool: rayon::ThreadPool,
}

pub struct SyncExecutorConfig {
    registry: SolverRegistry,
    inputs: InputStore,
    parallelize_by: ParallelizeBy,
    year_filter: Option<u16>,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
}

impl Executor {
    /// Create a new executor from config
    pub fn new(registry: SolverRegistry, config: &Config) -> Result<Self, ExecutorError> {
        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.thread_count)
            .build()
            .map_err(|e| ExecutorError::ThreadPool(e.to_string()))?;

        Ok(Self {
            sync_executor_config: SyncExecutorConfig {
                registry,
                inputs: InputStore::new(config.input_dir.clone()),
                parallelize_by: config.parallelize_by,
                year_filter: config.year_filter,
                day_filter: config.day_filter,
                part_filter: config.part_filter,
            },
            thread_pool,
        })
    }

    pub fn inputs(&self) -> &InputStore {
        &self.sync_executor_config.inputs
    }

    /// Collect work items by filtering from registry metadata
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        let cfg = &self.sync_executor_config;
        cfg.registry
            .storage()
            .iter_info()
            .filter(|info| cfg.year_filter.is_none_or(|y| info.year == y))
            .filter(|info| cfg.day_filter.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                year: info.year,
                day: info.day,
                parts: self.filter_parts(info.parts),
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    /// Filter parts based on config.part_filter and solver's max parts
    #[allow(clippy::reversed_empty_ranges)]
    fn filter_parts(&self, max_parts: u8) -> RangeInclusive<u8> {
        match self.sync_executor_config.part_filter {
            Some(p) if p <= max_parts => p..=p,
            Some(_) => 1..=0, // Empty range - intentional
            None => 1..=max_parts,
        }
    }

    /// Execute all work items and send results to channel
    pub fn execute(&self, tx: Sender<SolverResult>) -> Result<(), ArcExecutorError> {
        let work_items = self.collect_work_items();

        match self.sync_executor_config.parallelize_by {
            ParallelizeBy::Sequential => {
                let mut collected_error: Option<ArcExecutorError> = None;
                for work in work_items {
                    if let Err(e) = run_work_item(&work, &tx, &self.sync_executor_config) {
                        collected_error = Some(ArcExecutorError::combine_opt(collected_error, e));
                    }
                }
                collected_error.map_or(Ok(()), Err)
            }
            ParallelizeBy::Year => {
                // Group by year, parallelize years using configured thread pool
                let by_year: Vec<Vec<WorkItem>> = work_items
                    .into_iter()
                    .chunk_by(|w| w.year)
                    .into_iter()
                    .map(|(_, group)| group.collect())
                    .collect();

                self.execute_parallel_grouped(by_year, &tx)
            }
            // Day and Part both parallelize across all work items (Part differs in run_work_item behavior)
            ParallelizeBy::Day | ParallelizeBy::Part => self.execute_parallel(work_items, &tx),
        }
    }

    /// Execute work items in parallel, collecting errors
    fn execute_parallel(
        &self,
        work_items: Vec<WorkItem>,
        tx: &Sender<SolverResult>,
    ) -> Result<(), ArcExecutorError> {
        let sync_executor_config = &self.sync_executor_config;

        self.thread_pool.install(|| {
            work_items
                .into_par_iter()
                .map(|work| run_work_item(&work, tx, sync_executor_config).err())
                .reduce(|| None, merge_errors)
                .map_or(Ok(()), Err)
        })
    }

    /// Execute grouped work items in parallel (for year-level parallelism)
    fn execute_parallel_grouped(
        &self,
        groups: Vec<Vec<WorkItem>>,
        tx: &Sender<SolverResult>,
    ) -> Result<(), ArcExecutorError> {
        let sync_executor_config = &self.sync_executor_config;

        self.thread_pool.install(|| {
            groups
                .into_par_iter()
                .map(|items| {
                    items
                        .iter()
                        .map(|work| run_work_item(work, tx, sync_executor_config).err())
                        .fold(None, merge_errors)
                })
                .reduce(|| None, merge_errors)
                .map_or(Ok(()), Err)
        })
    }
}

/// Keep both errors, `first` before `second`
fn merge_errors(
    first: Option<ArcExecutorError>,
    second: Option<ArcExecutorError>,
) -> Option<ArcExecutorError> {
    match second {
        Some(second) => Some(ArcExecutorError::combine_opt(first, second)),
        None => first,
    }
}

/// Send one error result per part of `work`
fn send_error_results(
    work: &WorkItem,
    tx: &Sender<SolverResult>,
    error: impl Fn() -> SolverError,
) -> Result<(), ArcExecutorError> {
    for part in work.parts.clone() {
        send_result(
            tx,
            SolverResult {
                year: work.year,
                day: work.day,
                part,
                answer: Err(error()),
                solve_duration: TimeDelta::zero(),
                parse_duration: None,
            },
        )?;
    }
    Ok(())
}

fn send_result(tx: &Sender<SolverResult>, result: SolverResult) -> Result<(), ArcExecutorError> {
    tx.send(result)
        .map_err(|_| ExecutorError::ChannelSend.into())
}

/// Parse `input` for `work`. A parse failure is reported as an error result
/// for every part and yields `Ok(None)`; a registry failure is fatal.
fn create_solver<'a>(
    work: &WorkItem,
    input: &'a str,
    tx: &Sender<SolverResult>,
    registry: &SolverRegistry,
) -> Result<Option<Box<dyn DynSolver + 'a>>, ArcExecutorError> {
    match registry.create_solver(work.year, work.day, input) {
        Ok(solver) => Ok(Some(solver)),
        Err(SolverError::ParseError(e)) => {
            send_error_results(work, tx, || SolverError::ParseError(e.clone()))?;
            Ok(None)
        }
        Err(e) => Err(ExecutorError::Solver(e).into()),
    }
}

/// Read the input for one work item and solve its parts
fn run_work_item(
    work: &WorkItem,
    tx: &Sender<SolverResult>,
    sync_executor_config: &SyncExecutorConfig,
) -> Result<(), ArcExecutorError> {
    let input = match sync_executor_config.inputs.read(work.year, work.day) {
        Ok(input) => input,
        Err(source) => {
            let message = ExecutorError::InputRead {
                year: work.year,
                day: work.day,
                source,
            }
            .to_string();
            return send_error_results(work, tx, || {
                SolverError::ParseError(ParseError::MissingData(message.clone()))
            });
        }
    };

    if matches!(sync_executor_config.parallelize_by, ParallelizeBy::Part) {
        run_solver_parts_parallel(work, &input, tx, &sync_executor_config.registry)
    } else {
        run_solver_sequential(work, &input, tx, &sync_executor_config.registry)
    }
}

/// Run solver with part-level parallelism, buffering results to emit in order.
///
/// Every part parses its own copy of the input, so no state left by one part
/// is visible to another.
fn run_solver_parts_parallel(
    work: &WorkItem,
    input: &str,
    tx: &Sender<SolverResult>,
    registry: &SolverRegistry,
) -> Result<(), ArcExecutorError> {
    let (year, day) = (work.year, work.day);

    let mut results: Vec<(u8, Result<Option<SolverResult>, ArcExecutorError>)> = work
        .parts
        .clone()
        .into_par_iter()
        .map(|part| {
            let single = WorkItem {
                year,
                day,
                parts: part..=part,
            };
            let solved = create_solver(&single, input, tx, registry).map(|solver| {
                solver.map(|mut solver| {
                    let mut result = solve_part_internal(year, day, part, &mut *solver);
                    result.parse_duration = Some(solver.parse_duration());
                    result
                })
            });
            (part, solved)
        })
        .collect();
    results.sort_by_key(|(part, _)| *part);

    results
        .into_iter()
        .map(|(_, solved)| match solved {
            Ok(Some(result)) => send_result(tx, result).err(),
            Ok(None) => None,
            Err(e) => Some(e),
        })
        .fold(None, merge_errors)
        .map_or(Ok(()), Err)
}

/// Parse and solve parts one after another on a scoped thread, forwarding
/// each result as soon as it is ready
fn run_solver_sequential(
    work: &WorkItem,
    input: &str,
    tx: &Sender<SolverResult>,
    registry: &SolverRegistry,
) -> Result<(), ArcExecutorError> {
    let (solve_tx, solve_rx) = std::sync::mpsc::channel();
    let (year, day) = (work.year, work.day);
    let parts = work.parts.clone();
    std::thread::scope(|s| {
        let solving = s.spawn(move || -> Result<(), ArcExecutorError> {
            let Some(mut solver) = create_solver(work, input, tx, registry)? else {
                return Ok(());
            };
            let mut parse_duration = Some(solver.parse_duration());
            for part in parts {
                let mut result = solve_part_internal(year, day, part, &mut *solver);
                result.parse_duration = parse_duration.take();
                if solve_tx.send(result).is_err() {
                    break;
                }
            }
            Ok(())
        });

        for result in solve_rx {
            send_result(tx, result)?
        }
        solving
            .join()
            .map_err(|_| ArcExecutorError::from(ExecutorError::SolverPanicked { year, day }))?
    })
}

/// Solve a single part
fn solve_part_internal(year: u16, day: u8, part: u8, solver: &mut dyn DynSolver) -> SolverResult {
    let (answer, solve_duration) = match solver.solve(part) {
        Ok(solved) => {
            let duration = solved.duration();
            (Ok(solved.answer), duration)
        }
        Err(e) => (Err(e.into()), TimeDelta::zero()),
    };

    SolverResult {
        year,
        day,
        part,
        answer,
        solve_duration,
        parse_duration: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Args;
    use aoc_solver::SolverRegistryBuilder;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    const DAY_5: &str = "3-5\n10-14\n16-20\n12-18\n\n1\n5\n8\n11\n17\n32\n";
    const DAY_9: &str = "7,1\n11,1\n11,7\n9,7\n9,5\n2,5\n2,3\n7,3\n";

    fn registry() -> SolverRegistry {
        SolverRegistryBuilder::new()
            .register::<aoc2025::my_solutions::year_2025::day_5::Solver>(2025, 5)
            .unwrap()
            .register::<aoc2025::my_solutions::year_2025::day_9::Solver>(2025, 9)
            .unwrap()
            .build()
    }

    fn executor(dir: &TempDir, extra_args: &[&str]) -> Executor {
        let mut args = vec!["aoc", "--input-dir", dir.path().to_str().unwrap()];
        args.extend_from_slice(extra_args);
        let config = Config::from_args(Args::parse_from(args)).unwrap();
        Executor::new(registry(), &config).unwrap()
    }

    fn run(executor: &Executor) -> Vec<SolverResult> {
        let (tx, rx) = std::sync::mpsc::channel();
        executor.execute(tx).unwrap();
        let mut results: Vec<SolverResult> = rx.into_iter().collect();
        results.sort_by_key(|r| (r.year, r.day, r.part));
        results
    }

    fn answers(results: &[SolverResult]) -> Vec<(u8, u8, String)> {
        results
            .iter()
            .map(|r| {
                let answer = match &r.answer {
                    Ok(answer) => answer.clone(),
                    Err(e) => format!("error: {}", e),
                };
                (r.day, r.part, answer)
            })
            .collect()
    }

    fn write_inputs(dir: &TempDir) {
        fs::write(dir.path().join("2025_day05.txt"), DAY_5).unwrap();
        fs::write(dir.path().join("2025_day09.txt"), DAY_9).unwrap();
    }

    #[test]
    fn test_every_parallelization_level_gives_same_answers() {
        let dir = TempDir::new().unwrap();
        write_inputs(&dir);
        let expected = vec![
            (5, 1, "3".to_string()),
            (5, 2, "14".to_string()),
            (9, 1, "50".to_string()),
            (9, 2, "24".to_string()),
        ];

        for level in ["sequential", "year", "day", "part"] {
            let results = run(&executor(&dir, &["--parallelize-by", level, "--threads", "2"]));
            assert_eq!(answers(&results), expected, "parallelize by {}", level);
        }
    }

    #[test]
    fn test_parse_duration_reported_once_per_parse() {
        let dir = TempDir::new().unwrap();
        write_inputs(&dir);

        let results = run(&executor(&dir, &["--parallelize-by", "day"]));
        let parsed: Vec<bool> = results.iter().map(|r| r.parse_duration.is_some()).collect();
        assert_eq!(parsed, vec![true, false, true, false]);

        let results = run(&executor(&dir, &["--parallelize-by", "part"]));
        assert!(results.iter().all(|r| r.parse_duration.is_some()));
    }

    #[test]
    fn test_filters() {
        let dir = TempDir::new().unwrap();
        write_inputs(&dir);

        let results = run(&executor(&dir, &["--day", "9", "--part", "2"]));
        assert_eq!(answers(&results), vec![(9, 2, "24".to_string())]);

        let executor = executor(&dir, &["--year", "2024"]);
        assert!(executor.collect_work_items().is_empty());
    }

    #[test]
    fn test_missing_input_is_reported_per_part() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("2025_day09.txt"), DAY_9).unwrap();

        let results = run(&executor(&dir, &[]));
        assert_eq!(results.len(), 4);
        for result in &results[..2] {
            let err = result.answer.as_ref().unwrap_err().to_string();
            assert!(err.contains("missing input file"), "{}", err);
        }
        assert_eq!(results[3].answer.as_deref().ok(), Some("24"));
    }

    #[test]
    fn test_parse_error_is_reported_per_part() {
        let dir = TempDir::new().unwrap();
        write_inputs(&dir);
        fs::write(dir.path().join("2025_day09.txt"), "7,1\nbroken\n").unwrap();

        for level in ["day", "part"] {
            let results = run(&executor(&dir, &["--day", "9", "--parallelize-by", level]));
            assert_eq!(results.len(), 2);
            assert!(results.iter().all(|r| matches!(
                r.answer,
                Err(SolverError::ParseError(ParseError::InvalidFormat(_)))
            )));
        }
    }

    #[test]
    fn test_merge_errors_keeps_both() {
        let a: ArcExecutorError = ExecutorError::ChannelSend.into();
        let b: ArcExecutorError = ExecutorError::ThreadPool("x".to_string()).into();

        assert!(merge_errors(None, None).is_none());
        assert!(merge_errors(Some(a.clone()), None).is_some());
        assert!(merge_errors(None, Some(b.clone())).is_some());
        let both = merge_errors(Some(a), Some(b)).unwrap();
        assert_eq!(both.to_string(), "Multiple errors occurred (2 total)");
    }
}
