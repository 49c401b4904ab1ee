use anyhow::anyhow;
use aoc_solver::{AocParser, Example, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse::parse_lines;

const EXAMPLE_INPUT: &str = "30373\n25512\n65332\n33549\n35390";

const EXAMPLES: &[Example] = &[
    Example::new(1, EXAMPLE_INPUT, "21"),
    Example::new(2, EXAMPLE_INPUT, "8"),
];

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, examples = EXAMPLES)]
#[aoc(year = 2022, day = 8, tags = ["2022"])]
pub struct Solver;

#[derive(Debug)]
pub struct Forest {
    rows: Vec<Vec<u8>>,
}

impl Forest {
    /// Heights seen looking from `(r, c)` towards each edge, nearest first
    fn sight_lines(&self, r: usize, c: usize) -> [Vec<u8>; 4] {
        let row = &self.rows[r];
        [
            row[..c].iter().rev().copied().collect(),
            row[c + 1..].to_vec(),
            self.rows[..r].iter().rev().map(|row| row[c]).collect(),
            self.rows[r + 1..].iter().map(|row| row[c]).collect(),
        ]
    }

    fn trees(&self) -> impl Iterator<Item = (usize, usize, u8)> + '_ {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(r, row)| row.iter().enumerate().map(move |(c, &h)| (r, c, h)))
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Forest;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let rows = parse_lines(input, |line| {
            line.trim()
                .bytes()
                .map(|b| match b {
                    b'0'..=b'9' => Ok(b - b'0'),
                    _ => Err(anyhow!("invalid tree height {:?}", b as char)),
                })
                .collect::<anyhow::Result<Vec<u8>>>()
        })?;
        let width = rows
            .first()
            .map(Vec::len)
            .ok_or_else(|| ParseError::MissingData("empty forest".into()))?;
        if rows.iter().any(|r| r.len() != width) {
            return Err(ParseError::InvalidFormat("forest rows differ in width".into()));
        }
        Ok(Forest { rows })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let visible = shared
            .trees()
            .filter(|&(r, c, h)| {
                shared
                    .sight_lines(r, c)
                    .iter()
                    .any(|line| line.iter().all(|&other| other < h))
            })
            .count();
        Ok(visible.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let best = shared
            .trees()
            .map(|(r, c, h)| {
                shared
                    .sight_lines(r, c)
                    .iter()
                    .map(|line| match line.iter().position(|&other| other >= h) {
                        Some(blocker) => blocker + 1,
                        None => line.len(),
                    })
                    .product::<usize>()
            })
            .max()
            .unwrap_or(0);
        Ok(best.to_string())
    }
}
