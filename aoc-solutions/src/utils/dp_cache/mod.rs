//! Dynamic Programming Cache with Lazy Evaluation
//!
//! Memoization for problems where values depend on other values in a directed
//! acyclic graph (DAG): population counts per timer and remaining days, directory
//! sizes over a file tree, expression trees keyed by name.
//!
//! # Backend Types
//!
//! - [`VecBackend`]: dense `usize` indices (auto-growing)
//! - [`HashMapBackend`]: arbitrary hashable index types
//!
//! # Cycles
//!
//! Reaching an index again while it is still being resolved yields [`DpError::Cycle`]
//! instead of recursing forever.
//!
//! # Example
//!
//! ```rust
//! use aoc_solutions::utils::dp_cache::{DpCache, DpProblem, HashMapBackend};
//!
//! struct GridPaths;
//!
//! impl DpProblem<(usize, usize), u64> for GridPaths {
//!     fn deps(&self, pos: &(usize, usize)) -> Vec<(usize, usize)> {
//!         let (r, c) = *pos;
//!         if r == 0 && c == 0 { vec![] }
//!         else if r == 0 { vec![(0, c - 1)] }
//!         else if c == 0 { vec![(r - 1, 0)] }
//!         else { vec![(r - 1, c), (r, c - 1)] }
//!     }
//!     fn compute(&self, _pos: &(usize, usize), deps: Vec<u64>) -> u64 {
//!         if deps.is_empty() { 1 } else { deps.iter().sum() }
//!     }
//! }
//!
//! let cache = DpCache::new(HashMapBackend::new(), GridPaths);
//! assert_eq!(cache.get(&(4, 4)).unwrap(), 70); // C(8,4) = 70 paths
//! ```

mod backend;
mod cache;
mod problem;

pub use backend::{Backend, HashMapBackend, Slot, VecBackend};
pub use cache::{DpCache, DpError};
pub use problem::{ClosureProblem, DpProblem};

#[cfg(test)]
mod tests;
