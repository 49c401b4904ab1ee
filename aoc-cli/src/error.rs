//! Error types for the CLI

use std::path::PathBuf;
use thiserror::Error;
use thiserror_ext::Arc as ArcDerive;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] aoc_solver::RegistrationError),

    /// Executor error (wraps Arc for cheap cloning)
    #[error("{0}")]
    Executor(#[from] ArcExecutorError),
}

/// Executor-specific errors
#[derive(Error, Debug, ArcDerive)]
#[thiserror_ext(newtype(name = ArcExecutorError))]
pub enum ExecutorError {
    /// No input file for a selected day
    #[error("No input for {year}/{day:02} at {}", .path.display())]
    MissingInput { year: u16, day: u8, path: PathBuf },

    /// Input file exists but could not be read
    #[error("Input read failed for {year}/{day:02}: {source}")]
    InputRead {
        year: u16,
        day: u8,
        #[source]
        source: InputError,
    },

    /// Example self-check failed or could not run
    #[error("Example check failed for {year}/{day:02}: {source}")]
    Example {
        year: u16,
        day: u8,
        #[source]
        source: aoc_solver::SolverError,
    },

    /// Solver creation (lookup or parsing) failed
    #[error("Solver failed for {year}/{day:02}: {source}")]
    Solver {
        year: u16,
        day: u8,
        #[source]
        source: aoc_solver::SolverError,
    },

    /// A single part failed after the input parsed
    #[error("{year}/{day:02} Part {part} failed: {message}")]
    Part {
        year: u16,
        day: u8,
        part: u8,
        message: String,
    },

    /// Multiple errors collected across days
    #[error("Multiple errors occurred ({} total)", .0.len())]
    Multiple(Vec<ArcExecutorError>),
}

impl ArcExecutorError {
    /// Combine two Arc-wrapped errors into one
    /// 1. If first is singular and second is Multiple: prepend first to second's vec
    /// 2. If second is singular and first is Multiple: append second to first's vec
    /// 3. If both are Multiple: concat them
    /// 4. If both are singular: create new Multiple with both
    pub fn combine(first: ArcExecutorError, second: ArcExecutorError) -> ArcExecutorError {
        let errors = match (first.inner(), second.inner()) {
            (ExecutorError::Multiple(v1), ExecutorError::Multiple(v2)) => {
                let mut combined = v1.clone();
                combined.extend(v2.iter().cloned());
                combined
            }
            (_, ExecutorError::Multiple(v)) => {
                let mut combined = vec![first];
                combined.extend(v.iter().cloned());
                combined
            }
            (ExecutorError::Multiple(v), _) => {
                let mut combined = v.clone();
                combined.push(second);
                combined
            }
            _ => vec![first, second],
        };
        ExecutorError::Multiple(errors).into()
    }

    /// Combine an optional error with a new error
    pub fn combine_opt(
        existing: Option<ArcExecutorError>,
        new: ArcExecutorError,
    ) -> ArcExecutorError {
        match existing {
            Some(e) => Self::combine(e, new),
            None => new,
        }
    }

    /// Every singular error, in the order they were collected
    pub fn flatten(&self) -> Vec<&ExecutorError> {
        match self.inner() {
            ExecutorError::Multiple(errors) => errors.iter().flat_map(|e| e.flatten()).collect(),
            single => vec![single],
        }
    }
}

/// Input store errors
#[derive(Error, Debug)]
pub enum InputError {
    /// IO error while reading an input file
    #[error("IO error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn missing(day: u8) -> ArcExecutorError {
        ExecutorError::MissingInput {
            year: 2022,
            day,
            path: PathBuf::from(format!("inputs/2022/day{day:02}.txt")),
        }
        .into()
    }

    fn days(error: &ArcExecutorError) -> Vec<u8> {
        error
            .flatten()
            .into_iter()
            .map(|e| match e {
                ExecutorError::MissingInput { day, .. } => *day,
                other => panic!("unexpected error: {other}"),
            })
            .collect()
    }

    #[test]
    fn test_combine_keeps_order() {
        let combined = ArcExecutorError::combine(missing(1), missing(2));
        let combined = ArcExecutorError::combine(combined, missing(3));
        let combined = ArcExecutorError::combine(missing(0), combined);
        assert_eq!(days(&combined), [0, 1, 2, 3]);
        assert_eq!(combined.to_string(), "Multiple errors occurred (4 total)");
    }

    #[test]
    fn test_combine_opt_passes_single_through() {
        let single = ArcExecutorError::combine_opt(None, missing(7));
        assert!(matches!(single.inner(), ExecutorError::MissingInput { day: 7, .. }));
        assert_eq!(
            single.to_string(),
            "No input for 2022/07 at inputs/2022/day07.txt"
        );
    }

    proptest! {
        #[test]
        fn prop_fold_collects_every_error(count in 1u8..20) {
            let combined = (1..=count)
                .fold(None, |acc, day| Some(ArcExecutorError::combine_opt(acc, missing(day))))
                .unwrap();
            prop_assert_eq!(days(&combined), (1..=count).collect::<Vec<_>>());
        }
    }
}
