//! Single-threaded DP cache implementation.

use std::cell::RefCell;
use std::marker::PhantomData;

use thiserror::Error;

use super::backend::{Backend, Slot};
use super::problem::DpProblem;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DpError {
    /// An index was reached again while its own dependencies were being resolved
    #[error("dependency cycle detected")]
    Cycle,
}

/// A dynamic programming cache with lazy evaluation and dependency resolution.
///
/// `DpCache` memoizes recursive computations where values depend on other values.
/// Dependencies are resolved on first access and each value is computed exactly once.
/// Dependency chains are resolved recursively, so very deep chains are limited by
/// the stack.
///
/// # Example
///
/// ```rust
/// use aoc_solutions::utils::dp_cache::{ClosureProblem, DpCache, VecBackend};
///
/// let factorial = ClosureProblem::new(
///     |n: &usize| if *n == 0 { vec![] } else { vec![n - 1] },
///     |n: &usize, deps: Vec<u64>| if *n == 0 { 1 } else { *n as u64 * deps[0] },
/// );
///
/// let cache = DpCache::new(VecBackend::new(), factorial);
/// assert_eq!(cache.get(&5).unwrap(), 120);
/// ```
pub struct DpCache<I, K, B, P> {
    backend: RefCell<B>,
    problem: P,
    _phantom: PhantomData<fn(&I) -> K>,
}

impl<I, K, B, P> DpCache<I, K, B, P>
where
    I: Clone,
    K: Clone,
    B: Backend<I, K>,
    P: DpProblem<I, K>,
{
    pub fn new(backend: B, problem: P) -> Self {
        Self {
            backend: RefCell::new(backend),
            problem,
            _phantom: PhantomData,
        }
    }

    /// Retrieves the value for the given index, computing it if necessary.
    ///
    /// # Errors
    ///
    /// Returns [`DpError::Cycle`] when the dependency graph reachable from `index`
    /// is not acyclic.
    pub fn get(&self, index: &I) -> Result<K, DpError> {
        match self.backend.borrow().slot(index) {
            Some(Slot::Ready(value)) => return Ok(value.clone()),
            Some(Slot::InProgress) => return Err(DpError::Cycle),
            None => {}
        }

        self.backend
            .borrow_mut()
            .set(index.clone(), Slot::InProgress);

        let dep_values = self
            .problem
            .deps(index)
            .iter()
            .map(|dep| self.get(dep))
            .collect::<Result<Vec<_>, _>>()?;

        let value = self.problem.compute(index, dep_values);
        self.backend
            .borrow_mut()
            .set(index.clone(), Slot::Ready(value.clone()));
        Ok(value)
    }

    pub fn problem(&self) -> &P {
        &self.problem
    }
}
