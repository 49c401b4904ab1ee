use aoc_solver::{AocParser, Example, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::{Itertools, MinMaxResult};

use crate::utils::parse::{comma_separated, invalid};

const EXAMPLE_INPUT: &str = "16,1,2,0,4,2,7,1,2,14";

const EXAMPLES: &[Example] = &[
    Example::new(1, EXAMPLE_INPUT, "37"),
    Example::new(2, EXAMPLE_INPUT, "168"),
];

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, examples = EXAMPLES)]
#[aoc(year = 2021, day = 7, tags = ["2021"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<i64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let crabs = comma_separated::<i64>(input).map_err(invalid)?;
        if crabs.is_empty() {
            return Err(ParseError::MissingData("no crab positions".into()));
        }
        Ok(crabs)
    }
}

/// Cheapest total fuel to align every crab on one position between the extremes
fn min_fuel(crabs: &[i64], cost: impl Fn(i64) -> i64) -> Option<i64> {
    let (lo, hi) = match crabs.iter().minmax() {
        MinMaxResult::NoElements => return None,
        MinMaxResult::OneElement(&p) => (p, p),
        MinMaxResult::MinMax(&lo, &hi) => (lo, hi),
    };
    (lo..=hi)
        .map(|target| crabs.iter().map(|&p| cost((p - target).abs())).sum())
        .min()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        min_fuel(shared, |distance| distance)
            .map(|fuel| fuel.to_string())
            .ok_or_else(|| SolveError::NoSolution("no crabs".into()))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        min_fuel(shared, |distance| distance * (distance + 1) / 2)
            .map(|fuel| fuel.to_string())
            .ok_or_else(|| SolveError::NoSolution("no crabs".into()))
    }
}
