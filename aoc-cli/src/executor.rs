//! Sequential executor for running solvers

use crate::config::Config;
use crate::error::{ArcExecutorError, ExecutorError};
use crate::input::InputStore;
use aoc_solver::{SolveError, SolverRegistry};
use chrono::TimeDelta;
use std::ops::RangeInclusive;

/// Result from a single solver execution
#[derive(Debug)]
pub struct SolverResult {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    pub answer: Result<String, SolveError>,
    /// Set on the first part of each day only, since parsing happens once per day
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
}

/// Work item representing a solver to execute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

/// Runs every selected day in year/day order, one at a time
pub struct Executor {
    registry: SolverRegistry,
    store: InputStore,
    check: bool,
    skip_missing: bool,
    year_filter: Option<u16>,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
}

impl Executor {
    /// Create a new executor from config
    pub fn new(registry: SolverRegistry, config: &Config) -> Self {
        Self {
            registry,
            store: InputStore::new(config.input_dir.clone()),
            check: config.check,
            skip_missing: config.skip_missing,
            year_filter: config.year_filter,
            day_filter: config.day_filter,
            part_filter: config.part_filter,
        }
    }

    /// Collect work items by filtering from registry metadata
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        self.registry
            .storage()
            .iter_info()
            .filter(|info| self.year_filter.is_none_or(|y| info.year == y))
            .filter(|info| self.day_filter.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                year: info.year,
                day: info.day,
                parts: self.filter_parts(info.parts),
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    /// Filter parts based on the part filter and solver's max parts
    #[allow(clippy::reversed_empty_ranges)]
    fn filter_parts(&self, max_parts: u8) -> RangeInclusive<u8> {
        match self.part_filter {
            Some(p) if p <= max_parts => p..=p,
            Some(_) => 1..=0, // Empty range - intentional
            None => 1..=max_parts,
        }
    }

    /// Execute work items in order, handing each part's result to `on_result`
    ///
    /// A failing day does not stop later days; every error is collected and
    /// returned together at the end.
    pub fn execute(
        &self,
        work_items: &[WorkItem],
        mut on_result: impl FnMut(SolverResult),
    ) -> Result<(), ArcExecutorError> {
        let mut collected_error: Option<ArcExecutorError> = None;
        for work in work_items {
            if let Err(e) = self.run_day(work, &mut on_result) {
                collected_error = Some(ArcExecutorError::combine_opt(collected_error, e));
            }
        }
        collected_error.map_or(Ok(()), Err)
    }

    fn run_day(
        &self,
        work: &WorkItem,
        on_result: &mut impl FnMut(SolverResult),
    ) -> Result<(), ArcExecutorError> {
        let (year, day) = (work.year, work.day);

        if self.check {
            for part in work.parts.clone() {
                self.registry
                    .check_examples(year, day, Some(part))
                    .map_err(|source| ExecutorError::Example { year, day, source })?;
            }
        }

        let input = self
            .store
            .get(year, day)
            .map_err(|source| ExecutorError::InputRead { year, day, source })?;
        let Some(input) = input else {
            let path = self.store.input_path(year, day);
            if self.skip_missing {
                eprintln!(
                    "Warning: skipping {year}/{day:02}, no input at {}",
                    path.display()
                );
                return Ok(());
            }
            return Err(ExecutorError::MissingInput { year, day, path }.into());
        };

        let mut solver = self
            .registry
            .create_solver(year, day, &input)
            .map_err(|source| ExecutorError::Solver { year, day, source })?;

        let mut parse_duration = Some(solver.parse_duration());
        let mut failed: Option<ArcExecutorError> = None;
        for part in work.parts.clone() {
            let outcome = solver.solve(part);
            let solve_duration = outcome
                .as_ref()
                .map_or(TimeDelta::zero(), |result| result.duration());
            if let Err(e) = &outcome {
                let error = ExecutorError::Part {
                    year,
                    day,
                    part,
                    message: e.to_string(),
                };
                failed = Some(ArcExecutorError::combine_opt(failed, error.into()));
            }
            on_result(SolverResult {
                year,
                day,
                part,
                answer: outcome.map(|result| result.answer),
                parse_duration: parse_duration.take(),
                solve_duration,
            });
        }
        failed.map_or(Ok(()), Err)
    }
}
