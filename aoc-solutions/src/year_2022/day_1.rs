use anyhow::Context;
use aoc_solver::{AocParser, Example, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse::{blocks, invalid};

const EXAMPLE_INPUT: &str = "\
1000
2000
3000

4000

5000
6000

7000
8000
9000

10000";

const EXAMPLES: &[Example] = &[
    Example::new(1, EXAMPLE_INPUT, "24000"),
    Example::new(2, EXAMPLE_INPUT, "45000"),
];

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, examples = EXAMPLES)]
#[aoc(year = 2022, day = 1, tags = ["2022"])]
pub struct Solver;

impl AocParser for Solver {
    /// Calories carried by each elf, largest first
    type SharedData<'a> = Vec<u64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let mut totals = blocks(input)
            .enumerate()
            .map(|(elf, block)| {
                block
                    .lines()
                    .map(|line| {
                        line.trim()
                            .parse::<u64>()
                            .with_context(|| format!("elf {}: invalid calories {line:?}", elf + 1))
                    })
                    .sum::<anyhow::Result<u64>>()
            })
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(invalid)?;
        totals.sort_unstable_by(|a, b| b.cmp(a));
        Ok(totals)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .first()
            .map(u64::to_string)
            .ok_or_else(|| SolveError::NoSolution("no elves".into()))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().take(3).sum::<u64>().to_string())
    }
}
