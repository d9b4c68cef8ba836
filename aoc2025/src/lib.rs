//! Advent of Code 2025 solutions with automatic registration
//!
//! The reusable pieces live in [`utils`]: an interval merge engine and
//! rectilinear polygon search. The puzzle solvers in `my_solutions` use the
//! `AutoRegisterSolver` derive macro for automatic plugin registration with
//! the solver framework.

pub mod utils;

#[cfg(feature = "my-solutions")]
pub mod my_solutions;
