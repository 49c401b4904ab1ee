//! Advent of Code puzzle solutions with automatic registration
//!
//! Solutions are organized by year behind the `year-2021` and `year-2022` features.
//! Each day derives `AocSolver` for part dispatch and `AutoRegisterSolver` for plugin
//! registration, and carries the puzzle's published examples for self-checking.

pub mod utils;

#[cfg(feature = "year-2021")]
pub mod year_2021;

#[cfg(feature = "year-2022")]
pub mod year_2022;
