//! AOC CLI - Command-line interface for running Advent of Code solvers

mod aggregator;
mod cli;
mod config;
mod error;
mod executor;
mod inputs;
mod output;

// Import aoc2025 to link the solver plugins
use aoc2025 as _;

use aggregator::{ResultAggregator, ResultKey};
use aoc_solver::SolverRegistryBuilder;
use clap::Parser;
use cli::Args;
use config::Config;
use error::CliError;
use executor::{Executor, WorkItem};
use inputs::InputStore;
use output::{OutputFormatter, RunSummary};

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let config = Config::from_args(args)?;
    let registry = build_registry(&config.tags)?;
    let executor = Executor::new(registry, &config).map_err(|e| CliError::Config(e.to_string()))?;

    let work_items = executor.collect_work_items();
    if work_items.is_empty() {
        println!("No solvers found matching the specified filters.");
        return Ok(());
    }

    if !config.quiet {
        report_missing_inputs(&work_items, executor.inputs());
    }

    run_executor(executor, work_items, config.quiet)
}

/// List inputs that are absent up front; their parts still run and fail
fn report_missing_inputs(work_items: &[WorkItem], inputs: &InputStore) {
    let missing: Vec<&WorkItem> = work_items
        .iter()
        .filter(|w| !inputs.contains(w.year, w.day))
        .collect();
    if missing.is_empty() {
        return;
    }

    eprintln!("Missing {} input file(s):", missing.len());
    for w in missing {
        eprintln!("  - {}", inputs.input_path(w.year, w.day).display());
    }
}

/// Run the executor and print results in order as they arrive.
///
/// Fails with `PartsFailed` unless every scheduled part was answered.
fn run_executor(executor: Executor, work_items: Vec<WorkItem>, quiet: bool) -> Result<(), CliError> {
    if !quiet {
        println!("Running {} solver(s)...", work_items.len());
    }

    let (tx, rx) = std::sync::mpsc::channel();
    let executor_handle = std::thread::spawn(move || executor.execute(tx));

    let formatter = OutputFormatter::new(quiet);
    let mut aggregator = ResultAggregator::new(ResultKey::for_work_items(&work_items));
    let mut results = Vec::new();

    for result in rx {
        for ready in aggregator.add(result) {
            formatter.print_result(&ready);
            results.push(ready);
        }
    }

    for ready in aggregator.drain() {
        formatter.print_result(&ready);
        results.push(ready);
    }

    let missing = aggregator.missing();
    if !missing.is_empty() {
        eprintln!("Warning: Not all expected results were received");
        for key in &missing {
            eprintln!("  - {}/{:02} Part {}", key.year, key.day, key.part);
        }
    }

    executor_handle
        .join()
        .map_err(|_| CliError::Config("Executor thread panicked".to_string()))?
        .map_err(CliError::Executor)?;

    let summary = RunSummary::tally(&results, missing.len());
    formatter.print_summary(&summary);
    summary.into_outcome()
}

/// Build registry with tag filtering
fn build_registry(tags: &[String]) -> Result<aoc_solver::SolverRegistry, CliError> {
    let builder = SolverRegistryBuilder::new();

    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_solver_plugins(|plugin| {
            tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
        })?
    };

    Ok(builder.build())
}
