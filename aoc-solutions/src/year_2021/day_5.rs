use anyhow::anyhow;
use aoc_solver::{AocParser, Example, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;
use regex::Regex;

use crate::utils::parse::{invalid, parse_lines};

const EXAMPLE_INPUT: &str = "\
0,9 -> 5,9
8,0 -> 0,8
9,4 -> 3,4
2,2 -> 2,1
7,0 -> 7,4
6,4 -> 2,0
0,9 -> 2,9
3,4 -> 1,4
0,0 -> 8,8
5,5 -> 8,2";

const EXAMPLES: &[Example] = &[
    Example::new(1, EXAMPLE_INPUT, "5"),
    Example::new(2, EXAMPLE_INPUT, "12"),
];

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, examples = EXAMPLES)]
#[aoc(year = 2021, day = 5, tags = ["2021"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vent {
    start: (i32, i32),
    end: (i32, i32),
}

impl Vent {
    fn is_axis_aligned(&self) -> bool {
        self.start.0 == self.end.0 || self.start.1 == self.end.1
    }

    fn points(&self) -> impl Iterator<Item = (i32, i32)> + use<> {
        let dx = (self.end.0 - self.start.0).signum();
        let dy = (self.end.1 - self.start.1).signum();
        let length = (self.end.0 - self.start.0)
            .abs()
            .max((self.end.1 - self.start.1).abs());
        let start = self.start;
        (0..=length).map(move |i| (start.0 + dx * i, start.1 + dy * i))
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Vent>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let re = Regex::new(r"^(\d+),(\d+) -> (\d+),(\d+)$").map_err(|e| invalid(e.into()))?;
        parse_lines(input, |line| {
            let caps = re
                .captures(line.trim())
                .ok_or_else(|| anyhow!("expected `x1,y1 -> x2,y2`, got {line:?}"))?;
            let n = |i: usize| caps[i].parse::<i32>();
            let vent = Vent {
                start: (n(1)?, n(2)?),
                end: (n(3)?, n(4)?),
            };
            let (w, h) = (vent.end.0 - vent.start.0, vent.end.1 - vent.start.1);
            if !vent.is_axis_aligned() && w.abs() != h.abs() {
                return Err(anyhow!("line {line:?} is neither straight nor diagonal"));
            }
            Ok(vent)
        })
    }
}

fn count_overlaps<'a>(vents: impl Iterator<Item = &'a Vent>) -> usize {
    vents
        .flat_map(Vent::points)
        .counts()
        .values()
        .filter(|&&count| count > 1)
        .count()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(count_overlaps(shared.iter().filter(|v| v.is_axis_aligned())).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(count_overlaps(shared.iter()).to_string())
    }
}
