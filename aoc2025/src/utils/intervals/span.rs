//! Closed integer spans

use std::fmt;
use thiserror::Error;

/// Error type for interval operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntervalError {
    /// A span was given a lower bound above its upper bound
    #[error("invalid range {min}-{max}: min is greater than max")]
    InvalidRange { min: u64, max: u64 },
    /// Coverage was requested on a set that still may contain overlaps
    #[error("interval set must be merged before its coverage can be computed")]
    NotMerged,
}

/// Inclusive range `[min, max]` of IDs.
///
/// Always satisfies `min <= max`, so a span covers at least one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    min: u64,
    max: u64,
}

impl Span {
    /// Create a span, rejecting `min > max`
    pub fn new(min: u64, max: u64) -> Result<Self, IntervalError> {
        if min > max {
            return Err(IntervalError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Span holding exactly one value
    pub fn single(value: u64) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    pub fn min(&self) -> u64 {
        self.min
    }

    pub fn max(&self) -> u64 {
        self.max
    }

    /// Number of values covered, `max - min + 1`.
    ///
    /// Returned as `u128` so `[0, u64::MAX]` does not overflow.
    pub fn size(&self) -> u128 {
        u128::from(self.max - self.min) + 1
    }

    pub fn contains(&self, id: u64) -> bool {
        (self.min..=self.max).contains(&id)
    }

    /// Number of values shared with `other`, 0 when disjoint
    pub fn overlap_size(&self, other: &Span) -> u128 {
        let min = self.min.max(other.min);
        let max = self.max.min(other.max);
        if min <= max {
            u128::from(max - min) + 1
        } else {
            0
        }
    }

    /// True when the spans share at least one value.
    ///
    /// Adjacent spans such as `[1, 5]` and `[6, 10]` do not overlap.
    pub fn overlaps(&self, other: &Span) -> bool {
        self.min.max(other.min) <= self.max.min(other.max)
    }

    /// Union of two overlapping spans, `None` if they are disjoint
    pub fn merge(&self, other: &Span) -> Option<Span> {
        self.overlaps(other).then(|| self.hull(other))
    }

    /// Smallest span covering both, regardless of overlap
    pub(super) fn hull(&self, other: &Span) -> Span {
        Span {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}
