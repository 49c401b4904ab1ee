use aoc_solver::{AocParser, Example, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

use crate::utils::parse::parse_lines;

const EXAMPLE_INPUT: &str = "199\n200\n208\n210\n200\n207\n240\n269\n260\n263";

const EXAMPLES: &[Example] = &[
    Example::new(1, EXAMPLE_INPUT, "7"),
    Example::new(2, EXAMPLE_INPUT, "5"),
];

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, examples = EXAMPLES)]
#[aoc(year = 2021, day = 1, tags = ["2021"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<u32>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        parse_lines(input, |line| Ok(line.trim().parse::<u32>()?))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(count_increases(shared.iter().copied()).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let sums = shared.iter().tuple_windows().map(|(a, b, c)| a + b + c);
        Ok(count_increases(sums).to_string())
    }
}

fn count_increases(depths: impl Iterator<Item = u32>) -> usize {
    depths.tuple_windows().filter(|(a, b)| b > a).count()
}
