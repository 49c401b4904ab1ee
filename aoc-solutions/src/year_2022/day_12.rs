use std::collections::VecDeque;

use anyhow::anyhow;
use aoc_solver::{AocParser, Example, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse::{invalid, parse_lines};

const EXAMPLE_INPUT: &str = "Sabqponm\nabcryxxl\naccszExk\nacctuvwj\nabdefghi";

const EXAMPLES: &[Example] = &[
    Example::new(1, EXAMPLE_INPUT, "31"),
    Example::new(2, EXAMPLE_INPUT, "29"),
];

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, examples = EXAMPLES)]
#[aoc(year = 2022, day = 12, tags = ["2022"])]
pub struct Solver;

#[derive(Debug)]
pub struct HeightMap {
    width: usize,
    /// Elevations `0..=25`, row-major
    heights: Vec<u8>,
    start: usize,
    end: usize,
    /// Steps from each cell to `end`, computed on first use
    distances: Option<Vec<Option<u32>>>,
}

impl HeightMap {
    fn neighbours(&self, idx: usize) -> impl Iterator<Item = usize> + '_ {
        let (x, y) = (idx % self.width, idx / self.width);
        let rows = self.heights.len() / self.width;
        [
            (x > 0).then(|| idx - 1),
            (x + 1 < self.width).then(|| idx + 1),
            (y > 0).then(|| idx - self.width),
            (y + 1 < rows).then(|| idx + self.width),
        ]
        .into_iter()
        .flatten()
    }

    /// Walk backwards from the summit; a step `a -> b` is legal when `b` is at most one higher
    fn distances_to_end(&mut self) -> &[Option<u32>] {
        if self.distances.is_none() {
            let mut dist = vec![None; self.heights.len()];
            let mut queue = VecDeque::from([self.end]);
            dist[self.end] = Some(0);
            while let Some(cur) = queue.pop_front() {
                let d = dist[cur].unwrap_or_default();
                for next in self.neighbours(cur) {
                    if dist[next].is_none() && self.heights[cur] <= self.heights[next] + 1 {
                        dist[next] = Some(d + 1);
                        queue.push_back(next);
                    }
                }
            }
            self.distances = Some(dist);
        }
        self.distances.as_deref().unwrap_or_default()
    }
}

impl AocParser for Solver {
    type SharedData<'a> = HeightMap;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let rows = parse_lines(input, |line| Ok(line.trim().as_bytes()))?;
        let width = rows.first().map_or(0, |r| r.len());
        if width == 0 || rows.iter().any(|r| r.len() != width) {
            return Err(ParseError::InvalidFormat("height map must be a non-empty rectangle".into()));
        }

        let (mut start, mut end) = (None, None);
        let mut heights = Vec::with_capacity(width * rows.len());
        for (idx, &b) in rows.iter().flat_map(|r| r.iter()).enumerate() {
            let h = match b {
                b'S' => {
                    start = Some(idx);
                    b'a'
                }
                b'E' => {
                    end = Some(idx);
                    b'z'
                }
                b'a'..=b'z' => b,
                _ => return Err(invalid(anyhow!("unexpected {:?} in height map", b as char))),
            };
            heights.push(h - b'a');
        }

        Ok(HeightMap {
            width,
            heights,
            start: start.ok_or_else(|| ParseError::MissingData("start marker S".into()))?,
            end: end.ok_or_else(|| ParseError::MissingData("end marker E".into()))?,
            distances: None,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let start = shared.start;
        shared.distances_to_end()[start]
            .map(|d| d.to_string())
            .ok_or_else(|| SolveError::NoSolution("summit unreachable from start".into()))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let lowest: Vec<usize> = (0..shared.heights.len())
            .filter(|&i| shared.heights[i] == 0)
            .collect();
        let distances = shared.distances_to_end();
        lowest
            .into_iter()
            .filter_map(|i| distances[i])
            .min()
            .map(|d| d.to_string())
            .ok_or_else(|| SolveError::NoSolution("summit unreachable from any lowest cell".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    #[test]
    fn test_examples() {
        let mut shared = Solver::parse(EXAMPLE_INPUT).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "31");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "29");
    }

    #[test]
    fn test_unreachable_summit() {
        let mut shared = Solver::parse("SbcdefghijklmnopqrstuvwxyE").unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "25");

        let mut shared = Solver::parse("SacE").unwrap();
        assert!(matches!(
            Solver::solve_part(&mut shared, 1),
            Err(SolveError::NoSolution(_))
        ));
    }

    #[test]
    fn test_rejects_missing_markers() {
        assert!(matches!(
            Solver::parse("abc\nSbc"),
            Err(ParseError::MissingData(_))
        ));
        assert!(Solver::parse("Sa\nE").is_err());
    }
}
