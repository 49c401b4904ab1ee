use anyhow::anyhow;
use aoc_solver::{AocParser, Example, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse::{parse_lines, split_exact};

const EXAMPLE_INPUT: &str = "A Y\nB X\nC Z";

const EXAMPLES: &[Example] = &[
    Example::new(1, EXAMPLE_INPUT, "15"),
    Example::new(2, EXAMPLE_INPUT, "12"),
];

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, examples = EXAMPLES)]
#[aoc(year = 2022, day = 2, tags = ["2022"])]
pub struct Solver;

/// Rock, paper and scissors as 0, 1 and 2: each shape beats the one before it
type Shape = u32;
/// Lose, draw and win as 0, 1 and 2
type Outcome = u32;

/// A strategy guide line; the second column is read differently by each part
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    opponent: Shape,
    column: u32,
}

fn outcome(player: Shape, opponent: Shape) -> Outcome {
    (player + 4 - opponent) % 3
}

fn score(player: Shape, outcome: Outcome) -> u32 {
    player + 1 + 3 * outcome
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Round>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        parse_lines(input, |line| {
            let [opponent, column] = split_exact(line.trim(), " ")?;
            let opponent = match opponent {
                "A" => 0,
                "B" => 1,
                "C" => 2,
                other => return Err(anyhow!("{other:?} is not a valid choice")),
            };
            let column = match column {
                "X" => 0,
                "Y" => 1,
                "Z" => 2,
                other => return Err(anyhow!("{other:?} is not a valid response")),
            };
            Ok(Round { opponent, column })
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: u32 = shared
            .iter()
            .map(|r| score(r.column, outcome(r.column, r.opponent)))
            .sum();
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: u32 = shared
            .iter()
            .map(|r| {
                let player = (r.opponent + r.column + 2) % 3;
                score(player, r.column)
            })
            .sum();
        Ok(total.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    #[test]
    fn test_outcomes() {
        // paper beats rock, rock beats scissors
        assert_eq!(outcome(1, 0), 2);
        assert_eq!(outcome(0, 2), 2);
        assert_eq!(outcome(2, 2), 1);
        assert_eq!(outcome(2, 0), 0);
    }

    #[test]
    fn test_examples() {
        let mut shared = Solver::parse(EXAMPLE_INPUT).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "15");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "12");
    }

    #[test]
    fn test_invalid_choice() {
        assert!(Solver::parse("A Y\nD X").is_err());
        assert!(Solver::parse("A").is_err());
    }
}
