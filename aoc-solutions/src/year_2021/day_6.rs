use anyhow::anyhow;
use aoc_solver::{AocParser, Example, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::dp_cache::{DpCache, DpProblem, VecBackend};
use crate::utils::parse::{comma_separated, invalid};

const EXAMPLE_INPUT: &str = "3,4,3,1,2";

const EXAMPLES: &[Example] = &[
    Example::new(1, EXAMPLE_INPUT, "5934"),
    Example::new(2, EXAMPLE_INPUT, "26984457539"),
];

const RESET_TIMER: usize = 6;
const NEW_TIMER: usize = 8;
const TIMERS: usize = NEW_TIMER + 1;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, examples = EXAMPLES)]
#[aoc(year = 2021, day = 6, tags = ["2021"])]
pub struct Solver;

/// Number of fish descending from (and including) one fish, indexed by
/// `days_left * TIMERS + timer`
struct Lanternfish;

impl DpProblem<usize, u64> for Lanternfish {
    fn deps(&self, index: &usize) -> Vec<usize> {
        let (days_left, timer) = (index / TIMERS, index % TIMERS);
        if days_left == 0 {
            return vec![];
        }
        let tomorrow = (days_left - 1) * TIMERS;
        if timer == 0 {
            vec![tomorrow + RESET_TIMER, tomorrow + NEW_TIMER]
        } else {
            vec![tomorrow + timer - 1]
        }
    }

    fn compute(&self, _index: &usize, deps: Vec<u64>) -> u64 {
        if deps.is_empty() { 1 } else { deps.iter().sum() }
    }
}

pub struct School {
    timers: Vec<usize>,
    cache: DpCache<usize, u64, VecBackend<u64>, Lanternfish>,
}

impl School {
    fn population_after(&self, days: usize) -> Result<u64, SolveError> {
        self.timers.iter().try_fold(0u64, |total, &timer| {
            let fish = self
                .cache
                .get(&(days * TIMERS + timer))
                .map_err(|e| SolveError::InvariantViolation(e.to_string()))?;
            total
                .checked_add(fish)
                .ok_or_else(|| SolveError::InvariantViolation("population overflow".into()))
        })
    }
}

impl AocParser for Solver {
    type SharedData<'a> = School;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let timers = comma_separated::<usize>(input).map_err(invalid)?;
        if let Some(timer) = timers.iter().find(|&&t| t > NEW_TIMER) {
            return Err(invalid(anyhow!("timer {timer} exceeds {NEW_TIMER}")));
        }
        Ok(School {
            timers,
            cache: DpCache::new(VecBackend::with_capacity(257 * TIMERS), Lanternfish),
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.population_after(80)?.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.population_after(256)?.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    #[test]
    fn test_short_horizons() {
        let school = Solver::parse(EXAMPLE_INPUT).unwrap();
        assert_eq!(school.population_after(0).unwrap(), 5);
        assert_eq!(school.population_after(18).unwrap(), 26);
    }

    #[test]
    fn test_examples() {
        let mut shared = Solver::parse(EXAMPLE_INPUT).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "5934");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "26984457539");
    }

    #[test]
    fn test_rejects_large_timer() {
        assert!(Solver::parse("3,9").is_err());
    }
}
