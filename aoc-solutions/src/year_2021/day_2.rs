use anyhow::{Context, anyhow};
use aoc_solver::{AocParser, Example, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse::{parse_lines, split_exact};

const EXAMPLE_INPUT: &str = "forward 5\ndown 5\nforward 8\nup 3\ndown 8\nforward 2";

const EXAMPLES: &[Example] = &[
    Example::new(1, EXAMPLE_INPUT, "150"),
    Example::new(2, EXAMPLE_INPUT, "900"),
];

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, examples = EXAMPLES)]
#[aoc(year = 2021, day = 2, tags = ["2021"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Forward(i64),
    Down(i64),
    Up(i64),
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Command>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        parse_lines(input, |line| {
            let [direction, amount] = split_exact(line.trim(), " ")?;
            let amount: i64 = amount
                .parse()
                .with_context(|| format!("invalid amount {amount:?}"))?;
            match direction {
                "forward" => Ok(Command::Forward(amount)),
                "down" => Ok(Command::Down(amount)),
                "up" => Ok(Command::Up(amount)),
                other => Err(anyhow!("unknown command {other:?}")),
            }
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (position, depth) =
            shared
                .iter()
                .fold((0i64, 0i64), |(position, depth), command| match *command {
                    Command::Forward(n) => (position + n, depth),
                    Command::Down(n) => (position, depth + n),
                    Command::Up(n) => (position, depth - n),
                });
        Ok((position * depth).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (position, depth, _) = shared.iter().fold(
            (0i64, 0i64, 0i64),
            |(position, depth, aim), command| match *command {
                Command::Forward(n) => (position + n, depth + aim * n, aim),
                Command::Down(n) => (position, depth, aim + n),
                Command::Up(n) => (position, depth, aim - n),
            },
        );
        Ok((position * depth).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            Solver::parse("forward 5\nup 3").unwrap(),
            vec![Command::Forward(5), Command::Up(3)]
        );
    }

    #[test]
    fn test_examples() {
        let mut shared = Solver::parse(EXAMPLE_INPUT).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "150");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "900");
    }

    #[test]
    fn test_unknown_command_is_parse_error() {
        let err = Solver::parse("forward 5\nbackward 2").unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidFormat("(line 2) unknown command \"backward\"".into())
        );
    }
}
