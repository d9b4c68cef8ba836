//! Interval sets with overlap merging
//!
//! An [`IntervalSet`] collects closed [`Span`]s that may overlap and can be
//! merged into a canonical, pairwise disjoint form. Merging never changes
//! which IDs are covered, only how the coverage is represented, so
//! membership queries give the same answer before and after.
//!
//! ```rust
//! use aoc2025::utils::intervals::IntervalSet;
//!
//! let mut set = IntervalSet::new();
//! set.add(3, 5).unwrap();
//! set.add(10, 14).unwrap();
//! set.add(16, 20).unwrap();
//! set.add(12, 18).unwrap();
//!
//! assert!(set.contains(17));
//! set.merge_all();
//! assert_eq!(set.len(), 2);
//! assert_eq!(set.total_coverage().unwrap(), 14);
//! ```

mod span;

#[cfg(test)]
mod tests;

pub use span::{IntervalError, Span};

/// How overlapping spans get combined
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MergeStrategy {
    /// Sort by lower bound, then fold overlapping neighbours in one pass.
    /// O(n log n).
    #[default]
    Sweep,
    /// Repeat pairwise passes until a full pass finds no overlap.
    /// O(n³) in the worst case; kept as a reference for the sweep.
    FixedPoint,
}

/// Collection of closed spans.
///
/// After [`merge_all`](Self::merge_all) the spans are sorted by lower bound and
/// no two of them overlap. Adding a span drops that guarantee until the next
/// merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalSet {
    spans: Vec<Span>,
    merged: bool,
}

impl IntervalSet {
    pub fn new() -> Self {
        Self {
            spans: Vec::new(),
            merged: true,
        }
    }

    /// Append the span `[min, max]`.
    ///
    /// # Errors
    ///
    /// `InvalidRange` when `min > max`; the set is left untouched.
    pub fn add(&mut self, min: u64, max: u64) -> Result<(), IntervalError> {
        self.push(Span::new(min, max)?);
        Ok(())
    }

    pub fn push(&mut self, span: Span) {
        self.spans.push(span);
        self.merged = false;
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Whether the set is in merged form (sorted, pairwise disjoint)
    pub fn is_merged(&self) -> bool {
        self.merged
    }

    /// Merge overlapping spans with the default [`MergeStrategy::Sweep`]
    pub fn merge_all(&mut self) {
        self.merge_with(MergeStrategy::Sweep);
    }

    /// Merge overlapping spans until none overlap.
    ///
    /// Chains are handled: `[1, 5]`, `[4, 8]` and `[7, 10]` collapse into
    /// `[1, 10]` even though the outer two never touch directly. Idempotent.
    pub fn merge_with(&mut self, strategy: MergeStrategy) {
        if self.merged {
            return;
        }
        match strategy {
            MergeStrategy::Sweep => merge_sweep(&mut self.spans),
            MergeStrategy::FixedPoint => {
                merge_fixed_point(&mut self.spans);
                sort_by_bounds(&mut self.spans);
            }
        }
        self.merged = true;
    }

    /// Number of distinct IDs covered by the set.
    ///
    /// # Errors
    ///
    /// `NotMerged` if spans were added since the last merge, since
    /// overlapping regions would be counted twice.
    pub fn total_coverage(&self) -> Result<u128, IntervalError> {
        if !self.merged {
            return Err(IntervalError::NotMerged);
        }
        Ok(self.spans.iter().map(Span::size).sum())
    }

    /// Whether any span covers `id`
    pub fn contains(&self, id: u64) -> bool {
        if self.merged {
            // sorted and disjoint, so upper bounds are increasing too
            let idx = self.spans.partition_point(|span| span.max() < id);
            self.spans.get(idx).is_some_and(|span| span.contains(id))
        } else {
            self.spans.iter().any(|span| span.contains(id))
        }
    }

    /// Span from the lowest lower bound to the highest upper bound, `None` when empty
    pub fn bounding_span(&self) -> Option<Span> {
        let (first, rest) = self.spans.split_first()?;
        Some(rest.iter().fold(*first, |bound, span| bound.hull(span)))
    }

    /// Size of [`bounding_span`](Self::bounding_span), gaps included.
    ///
    /// An upper limit on [`total_coverage`](Self::total_coverage) that needs
    /// no merge.
    pub fn theoretical_max(&self) -> Option<u128> {
        self.bounding_span().map(|span| span.size())
    }
}

impl Default for IntervalSet {
    fn default() -> Self {
        Self::new()
    }
}

impl Extend<Span> for IntervalSet {
    fn extend<T: IntoIterator<Item = Span>>(&mut self, iter: T) {
        for span in iter {
            self.push(span);
        }
    }
}

impl FromIterator<Span> for IntervalSet {
    fn from_iter<T: IntoIterator<Item = Span>>(iter: T) -> Self {
        let mut set = IntervalSet::new();
        set.extend(iter);
        set
    }
}

fn sort_by_bounds(spans: &mut [Span]) {
    spans.sort_unstable_by_key(|span| (span.min(), span.max()));
}

fn merge_sweep(spans: &mut Vec<Span>) {
    sort_by_bounds(spans);

    let mut merged: Vec<Span> = Vec::with_capacity(spans.len());
    for span in spans.drain(..) {
        if let Some(last) = merged.last_mut().filter(|last| last.overlaps(&span)) {
            *last = last.hull(&span);
        } else {
            merged.push(span);
        }
    }
    *spans = merged;
}

fn merge_fixed_point(spans: &mut Vec<Span>) {
    while has_any_overlap(spans) {
        let queue = std::mem::take(spans);
        for current in queue {
            match spans.iter().position(|kept| kept.overlaps(&current)) {
                Some(idx) => spans[idx] = spans[idx].hull(&current),
                None => spans.push(current),
            }
        }
    }
}

fn has_any_overlap(spans: &[Span]) -> bool {
    spans
        .iter()
        .enumerate()
        .any(|(i, left)| spans[i + 1..].iter().any(|right| left.overlaps(right)))
}
