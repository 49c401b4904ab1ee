use anyhow::{Context, bail};
use aoc_solver::{AocParser, Example, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

use crate::utils::parse::{parse_lines, split_exact};

const EXAMPLE_INPUT: &str = "498,4 -> 498,6 -> 496,6\n503,4 -> 502,4 -> 502,9 -> 494,9";

const EXAMPLES: &[Example] = &[
    Example::new(1, EXAMPLE_INPUT, "24"),
    Example::new(2, EXAMPLE_INPUT, "93"),
];

const SOURCE: (i32, i32) = (500, 0);

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, examples = EXAMPLES)]
#[aoc(year = 2022, day = 14, tags = ["2022"])]
pub struct Solver;

/// Rock layout, sized so sand piled on the floor never leaves the grid
#[derive(Debug, Clone)]
pub struct Cave {
    min_x: i32,
    width: usize,
    /// Lowest rock row
    max_y: i32,
    rock: Vec<bool>,
}

impl Cave {
    fn new(paths: &[Vec<(i32, i32)>]) -> anyhow::Result<Self> {
        let points = || paths.iter().flatten();
        let max_y = points().map(|p| p.1).max().context("no rock paths")?;
        let floor = max_y + 2;
        let min_x = points().map(|p| p.0).min().unwrap_or(SOURCE.0).min(SOURCE.0 - floor) - 1;
        let max_x = points().map(|p| p.0).max().unwrap_or(SOURCE.0).max(SOURCE.0 + floor) + 1;
        if min_x < 0 || points().any(|p| p.1 < 0) {
            bail!("rock coordinates must be non-negative");
        }

        let width = (max_x - min_x + 1) as usize;
        let mut cave = Cave {
            min_x,
            width,
            max_y,
            rock: vec![false; width * (floor as usize + 1)],
        };
        for path in paths {
            for (&(x0, y0), &(x1, y1)) in path.iter().tuple_windows() {
                if x0 != x1 && y0 != y1 {
                    bail!("diagonal segment ({x0},{y0}) -> ({x1},{y1})");
                }
                for x in x0.min(x1)..=x0.max(x1) {
                    for y in y0.min(y1)..=y0.max(y1) {
                        let idx = cave.index(x, y);
                        cave.rock[idx] = true;
                    }
                }
            }
        }
        Ok(cave)
    }

    fn index(&self, x: i32, y: i32) -> usize {
        y as usize * self.width + (x - self.min_x) as usize
    }

    /// Units of sand that come to rest
    ///
    /// Without a floor pouring stops at the first grain to fall below every rock; with one
    /// it stops once the source itself is covered. Each grain resumes from where the
    /// previous one last moved, so the falling path is never replayed from the top.
    fn pour(&self, with_floor: bool) -> usize {
        let floor = self.max_y + 2;
        let mut blocked = self.rock.clone();
        let mut path = vec![SOURCE];
        let mut rested = 0;

        while let Some(&(x, y)) = path.last() {
            if !with_floor && y >= self.max_y {
                break;
            }
            let next = if y + 1 == floor {
                None
            } else {
                [x, x - 1, x + 1]
                    .into_iter()
                    .find(|&nx| !blocked[self.index(nx, y + 1)])
            };
            match next {
                Some(nx) => path.push((nx, y + 1)),
                None => {
                    let idx = self.index(x, y);
                    blocked[idx] = true;
                    rested += 1;
                    path.pop();
                }
            }
        }
        rested
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Cave;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let paths = parse_lines(input, |line| {
            line.split(" -> ")
                .map(|point| {
                    let [x, y] = split_exact(point.trim(), ",")?;
                    Ok((x.parse()?, y.parse()?))
                })
                .collect::<anyhow::Result<Vec<(i32, i32)>>>()
        })?;
        Cave::new(&paths).map_err(|e| ParseError::InvalidFormat(format!("{e:#}")))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.pour(false).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.pour(true).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    #[test]
    fn test_examples() {
        let mut shared = Solver::parse(EXAMPLE_INPUT).unwrap();
        assert_eq!(shared.max_y, 9);
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "24");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "93");
    }

    #[test]
    fn test_floor_only_fills_triangle() {
        // A single rock at depth 0 off to the side: the floor sits at y = 2
        let cave = Solver::parse("490,0 -> 490,0").unwrap();
        assert_eq!(cave.pour(false), 0);
        assert_eq!(cave.pour(true), 4);
    }

    #[test]
    fn test_rejects_diagonal_segment() {
        assert!(Solver::parse("498,4 -> 500,6").is_err());
        assert!(Solver::parse("498,4 -> 498").is_err());
    }
}
