//! Error types for the solver framework

use thiserror::Error;

/// Error raised while turning puzzle input into shared data
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    /// Input does not follow the expected line format
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    /// A required section of the input is absent
    #[error("Missing data: {0}")]
    MissingData(String),
    #[error("Parse error: {0}")]
    Other(String),
}

/// Error raised while solving one part
#[derive(Debug, Error)]
pub enum SolveError {
    /// The solver declares the part but has no implementation for it
    #[error("Part {0} is not implemented")]
    PartNotImplemented(u8),
    /// The part number is 0 or larger than the solver's part count
    #[error("Part {0} is out of range")]
    PartOutOfRange(u8),
    /// The puzzle logic itself failed (bad geometry, unmerged data, ...)
    #[error("Solve failed: {0}")]
    SolveFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl SolveError {
    /// Wrap any library error as a failed solve
    pub fn failed<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        SolveError::SolveFailed(Box::new(err))
    }
}

/// Error raised by registry lookups and solver execution
#[derive(Debug, Error)]
pub enum SolverError {
    #[error("Solver not found for year {0} day {1}")]
    NotFound(u16, u8),
    /// Year/day pair lies outside the supported storage range
    #[error("Invalid year {0} or day {1}")]
    InvalidYearDay(u16, u8),
    #[error("Parse error: {0}")]
    ParseError(#[from] ParseError),
    #[error("Solve error: {0}")]
    SolveError(#[from] SolveError),
}

/// Error raised while building a registry
#[derive(Debug, Clone, Error)]
pub enum RegistrationError {
    /// Two solvers claim the same year-day combination
    #[error("Duplicate solver registration for year {0} day {1}")]
    DuplicateSolver(u16, u8),
    #[error("Cannot register solver for year {0} day {1}: out of range")]
    InvalidYearDay(u16, u8),
}
