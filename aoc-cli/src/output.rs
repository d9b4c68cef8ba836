//! Result lines, the closing summary, and the run's exit status

use crate::error::CliError;
use crate::executor::SolverResult;
use chrono::TimeDelta;
use std::time::{Duration, Instant};

/// Counts and timings over every result of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub solved: usize,
    pub failed: usize,
    /// Parts that were scheduled but never reported back
    pub missing: usize,
    pub parse_time: TimeDelta,
    pub solve_time: TimeDelta,
}

impl RunSummary {
    pub fn tally(results: &[SolverResult], missing: usize) -> Self {
        let mut summary = RunSummary {
            solved: 0,
            failed: 0,
            missing,
            parse_time: TimeDelta::zero(),
            solve_time: TimeDelta::zero(),
        };
        for result in results {
            if result.answer.is_err() {
                summary.failed += 1;
                continue;
            }
            summary.solved += 1;
            summary.solve_time = summary.solve_time + result.solve_duration;
            if let Some(parse) = result.parse_duration {
                summary.parse_time = summary.parse_time + parse;
            }
        }
        summary
    }

    pub fn total(&self) -> usize {
        self.solved + self.failed + self.missing
    }

    /// `Ok` only when every scheduled part produced an answer
    pub fn into_outcome(self) -> Result<(), CliError> {
        let unanswered = self.failed + self.missing;
        if unanswered == 0 {
            return Ok(());
        }
        Err(CliError::PartsFailed {
            failed: unanswered,
            total: self.total(),
        })
    }
}

/// Prints results as they are released and the summary at the end
pub struct OutputFormatter {
    quiet: bool,
    started: Instant,
}

impl OutputFormatter {
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            started: Instant::now(),
        }
    }

    /// Answers go to stdout, failures to stderr
    pub fn print_result(&self, result: &SolverResult) {
        match result_line(result, self.quiet) {
            Ok(line) => println!("{}", line),
            Err(line) => eprintln!("{}", line),
        }
    }

    pub fn print_summary(&self, summary: &RunSummary) {
        if self.quiet {
            return;
        }
        let elapsed = self.started.elapsed();
        for line in summary_lines(summary, elapsed) {
            println!("{}", line);
        }
    }
}

/// Display line for one result; `Err` carries the line for a failed part
fn result_line(result: &SolverResult, quiet: bool) -> Result<String, String> {
    let prefix = format!("{}/{:02} Part {}", result.year, result.day, result.part);
    match (&result.answer, quiet) {
        (Ok(answer), true) => Ok(answer.clone()),
        (Err(e), true) => Err(format!("{}: {}", prefix, e)),
        (Ok(answer), false) => {
            let parse = result
                .parse_duration
                .map(|d| format!("parse: {}, ", format_duration(d)))
                .unwrap_or_default();
            Ok(format!(
                "{}: {} ({}solve: {})",
                prefix,
                answer,
                parse,
                format_duration(result.solve_duration)
            ))
        }
        (Err(e), false) => Err(format!("{}: Error - {}", prefix, e)),
    }
}

fn summary_lines(summary: &RunSummary, elapsed: Duration) -> Vec<String> {
    let mut lines = vec![
        String::new(),
        "--- Summary ---".to_string(),
        format!(
            "Parts: {} solved, {} failed, {} missing",
            summary.solved, summary.failed, summary.missing
        ),
        format!("Total parse time: {}", format_duration(summary.parse_time)),
        format!("Total solve time: {}", format_duration(summary.solve_time)),
        format!("Elapsed wall-clock time: {}", format_std_duration(elapsed)),
    ];
    if !elapsed.is_zero() {
        let compute = summary.parse_time + summary.solve_time;
        let compute_secs = compute.num_microseconds().unwrap_or(0) as f64 / 1_000_000.0;
        lines.push(format!(
            "Speedup factor: {:.2}x",
            compute_secs / elapsed.as_secs_f64()
        ));
    }
    lines
}

fn format_duration(d: TimeDelta) -> String {
    match d.num_microseconds() {
        None => "N/A".to_string(),
        Some(micros) if micros < 0 => format!("-{}", format_duration(-d)),
        Some(micros) => format_micros(micros.unsigned_abs().into()),
    }
}

/// Wall-clock time comes from `Instant`, so it is a std duration
fn format_std_duration(d: Duration) -> String {
    format_micros(d.as_micros())
}

fn format_micros(micros: u128) -> String {
    if micros < 1_000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1_000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}
