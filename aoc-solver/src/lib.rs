//! Advent of Code Solver Library
//!
//! A small framework for solving Advent of Code puzzles across multiple years and days.
//! Each puzzle is a solver type with its own input parsing and one or more parts that
//! share the parsed data.
//!
//! # Overview
//!
//! This library provides:
//! - [`AocParser`] to parse raw input into a shared data structure
//! - [`PartSolver`] to implement one part at a time over that data
//! - [`Solver`] tying the parts together, usually via `#[derive(AocSolver)]`
//! - Literal [`Example`]s that the registry can self-check before real input is used
//! - A registry with plugin based auto-registration
//!
//! # Quick Example
//!
//! ```
//! use aoc_solver::{
//!     AocParser, AocSolver, Example, ParseError, PartSolver, SolveError, SolverRegistryBuilder,
//! };
//!
//! const EXAMPLES: &[Example] = &[
//!     Example::new(1, "1\n2\n3", "6"),
//!     Example::new(2, "1\n2\n3", "3"),
//! ];
//!
//! #[derive(AocSolver)]
//! #[aoc_solver(max_parts = 2, examples = EXAMPLES)]
//! pub struct MyDay1;
//!
//! impl AocParser for MyDay1 {
//!     type SharedData<'a> = Vec<i32>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         input
//!             .lines()
//!             .map(|line| {
//!                 line.parse()
//!                     .map_err(|_| ParseError::InvalidFormat(format!("Expected integer: {line}")))
//!             })
//!             .collect()
//!     }
//! }
//!
//! impl PartSolver<1> for MyDay1 {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().sum::<i32>().to_string())
//!     }
//! }
//!
//! impl PartSolver<2> for MyDay1 {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         shared
//!             .iter()
//!             .max()
//!             .map(|m| m.to_string())
//!             .ok_or_else(|| SolveError::NoSolution("empty input".into()))
//!     }
//! }
//!
//! let registry = SolverRegistryBuilder::new()
//!     .register::<MyDay1>(2023, 1)
//!     .unwrap()
//!     .build();
//!
//! assert_eq!(registry.check_examples(2023, 1, None).unwrap(), 2);
//!
//! let mut solver = registry.create_solver(2023, 1, "4\n5").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "9");
//! ```
//!
//! # Key Concepts
//!
//! ## Shared data
//!
//! `AocParser::SharedData<'a>` may borrow from the input. Every part receives
//! `&mut` access, so a part can leave intermediate results behind for later parts.
//!
//! ## Plugin System
//!
//! Use `#[derive(AutoRegisterSolver)]` to submit a solver to the plugin inventory:
//! ```ignore
//! #[derive(AocSolver, AutoRegisterSolver)]
//! #[aoc_solver(max_parts = 2)]
//! #[aoc(year = 2023, day = 1, tags = ["easy"])]
//! struct Day1Solver;
//! ```
//!
//! and collect all of them with [`SolverRegistryBuilder::register_all_plugins`].

mod error;
mod example;
mod instance;
mod registry;
mod solver;

// Re-export public API
pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use example::Example;
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{
    FactoryInfo, RegisterableSolver, SolverFactory, SolverFactoryStorage, SolverPlugin,
    SolverRegistry, SolverRegistryBuilder,
};
pub use solver::{AocParser, PartSolver, Solver, SolverExt};

// Re-export inventory for use by the derive macro
pub use inventory;

// Re-export the derive macros
pub use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
