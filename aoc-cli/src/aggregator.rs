//! Result aggregator for ordering parallel solver results
//!
//! Workers finish in any order, but output is printed in (year, day, part)
//! order as soon as a prefix of it is complete. Two min-heaps track the keys
//! still expected and the results already received.

use crate::executor::{SolverResult, WorkItem};
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Key for ordering results (year, day, part) - ordered ascending
#[derive(Debug, Ord, PartialOrd, Eq, PartialEq, Clone, Copy)]
pub struct ResultKey {
    pub year: u16,
    pub day: u8,
    pub part: u8,
}

impl ResultKey {
    /// One key per part of every work item
    pub fn for_work_items(work_items: &[WorkItem]) -> Vec<ResultKey> {
        work_items
            .iter()
            .flat_map(|w| {
                w.parts.clone().map(move |part| ResultKey {
                    year: w.year,
                    day: w.day,
                    part,
                })
            })
            .collect()
    }
}

impl From<&SolverResult> for ResultKey {
    fn from(r: &SolverResult) -> Self {
        Self {
            year: r.year,
            day: r.day,
            part: r.part,
        }
    }
}

/// Received result ordered by its key alone
struct Pending {
    key: ResultKey,
    result: SolverResult,
}

impl Ord for Pending {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Eq for Pending {}

impl PartialEq for Pending {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

/// Aggregator that buffers results and emits them in sorted order
pub struct ResultAggregator {
    expected: BinaryHeap<Reverse<ResultKey>>,
    pending: BinaryHeap<Reverse<Pending>>,
}

impl ResultAggregator {
    /// Create aggregator from list of expected keys
    pub fn new(expected_keys: Vec<ResultKey>) -> Self {
        Self {
            expected: expected_keys.into_iter().map(Reverse).collect(),
            pending: BinaryHeap::new(),
        }
    }

    /// Add a result and return every result now ready for output, in order
    pub fn add(&mut self, result: SolverResult) -> Vec<SolverResult> {
        self.pending.push(Reverse(Pending {
            key: ResultKey::from(&result),
            result,
        }));

        let mut ready = Vec::new();
        while let (Some(Reverse(next_expected)), Some(Reverse(top_pending))) =
            (self.expected.peek(), self.pending.peek())
        {
            if top_pending.key != *next_expected {
                break;
            }
            self.expected.pop();
            if let Some(Reverse(pending)) = self.pending.pop() {
                ready.push(pending.result);
            }
        }
        ready
    }

    /// Drain results still buffered behind a missing one, in order.
    /// Afterwards only keys that never arrived remain expected.
    pub fn drain(&mut self) -> Vec<SolverResult> {
        let mut drained = Vec::with_capacity(self.pending.len());
        while let Some(Reverse(pending)) = self.pending.pop() {
            drained.push(pending.result);
        }
        self.expected
            .retain(|Reverse(key)| !drained.iter().any(|r| ResultKey::from(r) == *key));
        drained
    }

    /// Keys still expected, in output order
    pub fn missing(&self) -> Vec<ResultKey> {
        let mut keys: Vec<ResultKey> = self.expected.iter().map(|Reverse(key)| *key).collect();
        keys.sort();
        keys
    }
}
