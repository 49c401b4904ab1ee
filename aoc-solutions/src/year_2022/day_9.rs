use std::collections::HashSet;

use anyhow::anyhow;
use aoc_solver::{AocParser, Example, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse::parse_lines;

const EXAMPLE_INPUT: &str = "R 4\nU 4\nL 3\nD 1\nR 4\nD 1\nL 5\nR 2";
const LARGER_EXAMPLE: &str = "R 5\nU 8\nL 8\nD 3\nR 17\nD 10\nL 25\nU 20";

const EXAMPLES: &[Example] = &[
    Example::new(1, EXAMPLE_INPUT, "13"),
    Example::new(2, EXAMPLE_INPUT, "1"),
    Example::new(2, LARGER_EXAMPLE, "36"),
];

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, examples = EXAMPLES)]
#[aoc(year = 2022, day = 9, tags = ["2022"])]
pub struct Solver;

type Point = (i32, i32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Motion {
    step: Point,
    count: u32,
}

/// Number of distinct cells the last knot of a `knots`-long rope visits
fn tail_visits(motions: &[Motion], knots: usize) -> usize {
    let mut rope = vec![(0, 0); knots];
    let mut visited = HashSet::from([(0, 0)]);

    for motion in motions {
        for _ in 0..motion.count {
            rope[0].0 += motion.step.0;
            rope[0].1 += motion.step.1;
            for i in 1..knots {
                let (lead, knot) = (rope[i - 1], &mut rope[i]);
                let (dx, dy) = (lead.0 - knot.0, lead.1 - knot.1);
                if dx.abs() <= 1 && dy.abs() <= 1 {
                    break;
                }
                knot.0 += dx.signum();
                knot.1 += dy.signum();
            }
            visited.insert(rope[knots - 1]);
        }
    }
    visited.len()
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Motion>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        parse_lines(input, |line| {
            let (dir, count) = line
                .trim()
                .split_once(' ')
                .ok_or_else(|| anyhow!("expected `<dir> <count>`"))?;
            let step = match dir {
                "U" => (0, 1),
                "D" => (0, -1),
                "L" => (-1, 0),
                "R" => (1, 0),
                _ => return Err(anyhow!("unknown direction {dir:?}")),
            };
            Ok(Motion {
                step,
                count: count.parse()?,
            })
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(tail_visits(shared, 2).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(tail_visits(shared, 10).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    #[test]
    fn test_examples() {
        let mut shared = Solver::parse(EXAMPLE_INPUT).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "13");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "1");

        let mut shared = Solver::parse(LARGER_EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "36");
    }

    #[test]
    fn test_single_knot_rope_tracks_head() {
        let motions = Solver::parse("R 3\nU 2").unwrap();
        assert_eq!(tail_visits(&motions, 1), 6);
    }

    #[test]
    fn test_rejects_unknown_direction() {
        let err = Solver::parse("R 1\nX 2").unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }
}
