use anyhow::{Context, anyhow};
use aoc_solver::{AocParser, Example, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use regex::Regex;

use crate::utils::parse::{invalid, line_error};

const EXAMPLE_INPUT: &str = concat!(
    "    [D]    \n",
    "[N] [C]    \n",
    "[Z] [M] [P]\n",
    " 1   2   3 \n",
    "\n",
    "move 1 from 2 to 1\n",
    "move 3 from 1 to 3\n",
    "move 2 from 2 to 1\n",
    "move 1 from 1 to 2",
);

const EXAMPLES: &[Example] = &[
    Example::new(1, EXAMPLE_INPUT, "CMZ"),
    Example::new(2, EXAMPLE_INPUT, "MCD"),
];

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, examples = EXAMPLES)]
#[aoc(year = 2022, day = 5, tags = ["2022"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    count: usize,
    from: usize,
    to: usize,
}

#[derive(Debug)]
pub struct Cargo {
    /// Crates per stack, bottom first
    stacks: Vec<Vec<u8>>,
    moves: Vec<Move>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Crane {
    /// Moves crates one at a time, reversing their order
    OneAtATime,
    /// Moves a batch of crates at once, keeping their order
    Batched,
}

fn parse_stacks(drawing: &str) -> anyhow::Result<Vec<Vec<u8>>> {
    let mut rows: Vec<&[u8]> = drawing.lines().map(str::as_bytes).collect();
    let labels = rows.pop().context("missing stack labels")?;
    let count = std::str::from_utf8(labels)?.split_whitespace().count();
    if count == 0 {
        return Err(anyhow!("no stacks labelled"));
    }

    let mut stacks = vec![Vec::new(); count];
    for row in rows.iter().rev() {
        for (i, stack) in stacks.iter_mut().enumerate() {
            match row.get(1 + i * 4) {
                Some(c) if c.is_ascii_alphabetic() => stack.push(*c),
                Some(b' ') | None => {}
                Some(c) => return Err(anyhow!("unexpected crate {:?}", *c as char)),
            }
        }
    }
    Ok(stacks)
}

impl AocParser for Solver {
    type SharedData<'a> = Cargo;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let (drawing, procedure) = input
            .split_once("\n\n")
            .ok_or_else(|| ParseError::MissingData("blank line after the drawing".into()))?;
        let stacks = parse_stacks(drawing).map_err(invalid)?;

        let re = Regex::new(r"^move (\d+) from (\d+) to (\d+)$").map_err(|e| invalid(e.into()))?;
        let first_line = drawing.lines().count() + 2;
        let moves = procedure
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(idx, line)| {
                let parse = || -> anyhow::Result<Move> {
                    let caps = re
                        .captures(line.trim())
                        .ok_or_else(|| anyhow!("expected `move N from A to B`"))?;
                    let m = Move {
                        count: caps[1].parse()?,
                        from: caps[2].parse()?,
                        to: caps[3].parse()?,
                    };
                    for stack in [m.from, m.to] {
                        if !(1..=stacks.len()).contains(&stack) {
                            return Err(anyhow!("no stack {stack}"));
                        }
                    }
                    Ok(m)
                };
                parse().map_err(|e| line_error(first_line + idx, e))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Cargo { stacks, moves })
    }
}

fn rearrange(cargo: &Cargo, crane: Crane) -> Result<String, SolveError> {
    let mut stacks = cargo.stacks.clone();
    for m in &cargo.moves {
        let source = &mut stacks[m.from - 1];
        let split = source.len().checked_sub(m.count).ok_or_else(|| {
            SolveError::InvariantViolation(format!(
                "cannot move {} crates from stack {} holding {}",
                m.count,
                m.from,
                source.len()
            ))
        })?;
        let mut moved = source.split_off(split);
        if crane == Crane::OneAtATime {
            moved.reverse();
        }
        stacks[m.to - 1].extend(moved);
    }

    stacks
        .iter()
        .enumerate()
        .map(|(i, stack)| {
            stack.last().map(|&c| c as char).ok_or_else(|| {
                SolveError::InvariantViolation(format!("stack {} ended empty", i + 1))
            })
        })
        .collect()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        rearrange(shared, Crane::OneAtATime)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        rearrange(shared, Crane::Batched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    #[test]
    fn test_parse_drawing() {
        let cargo = Solver::parse(EXAMPLE_INPUT).unwrap();
        assert_eq!(cargo.stacks, vec![b"ZN".to_vec(), b"MCD".to_vec(), b"P".to_vec()]);
        assert_eq!(
            cargo.moves[0],
            Move {
                count: 1,
                from: 2,
                to: 1
            }
        );
    }

    #[test]
    fn test_examples() {
        let mut shared = Solver::parse(EXAMPLE_INPUT).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "CMZ");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "MCD");
    }

    #[test]
    fn test_bad_move_reports_line() {
        let err = Solver::parse("[A]\n 1 \n\nmove 1 from 1 to 2").unwrap_err();
        assert_eq!(err, ParseError::InvalidFormat("(line 4) no stack 2".into()));
    }

    #[test]
    fn test_overdrawn_stack() {
        let mut shared = Solver::parse("[A]\n 1 \n\nmove 2 from 1 to 1").unwrap();
        assert!(matches!(
            Solver::solve_part(&mut shared, 1),
            Err(SolveError::InvariantViolation(_))
        ));
    }
}
