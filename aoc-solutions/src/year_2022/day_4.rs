use std::ops::RangeInclusive;

use anyhow::{Context, anyhow};
use aoc_solver::{AocParser, Example, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse::{parse_lines, split_exact};

const EXAMPLE_INPUT: &str = "2-4,6-8\n2-3,4-5\n5-7,7-9\n2-8,3-7\n6-6,4-6\n2-6,4-8";

const EXAMPLES: &[Example] = &[
    Example::new(1, EXAMPLE_INPUT, "2"),
    Example::new(2, EXAMPLE_INPUT, "4"),
];

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, examples = EXAMPLES)]
#[aoc(year = 2022, day = 4, tags = ["2022"])]
pub struct Solver;

type Sections = RangeInclusive<u32>;

fn parse_sections(s: &str) -> anyhow::Result<Sections> {
    let [start, end] = split_exact(s, "-")?;
    let start: u32 = start.parse().with_context(|| format!("invalid section {start:?}"))?;
    let end: u32 = end.parse().with_context(|| format!("invalid section {end:?}"))?;
    if start > end {
        return Err(anyhow!("section range {s:?} is reversed"));
    }
    Ok(start..=end)
}

fn contains(outer: &Sections, inner: &Sections) -> bool {
    outer.start() <= inner.start() && inner.end() <= outer.end()
}

fn overlaps(a: &Sections, b: &Sections) -> bool {
    a.start() <= b.end() && b.start() <= a.end()
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<(Sections, Sections)>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        parse_lines(input, |line| {
            let [first, second] = split_exact(line.trim(), ",")?;
            Ok((parse_sections(first)?, parse_sections(second)?))
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let count = shared
            .iter()
            .filter(|(a, b)| contains(a, b) || contains(b, a))
            .count();
        Ok(count.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let count = shared.iter().filter(|(a, b)| overlaps(a, b)).count();
        Ok(count.to_string())
    }
}
