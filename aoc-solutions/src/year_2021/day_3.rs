use anyhow::anyhow;
use aoc_solver::{AocParser, Example, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse::invalid;

const EXAMPLE_INPUT: &str = "\
00100
11110
10110
10111
10101
01111
00111
11100
10000
11001
00010
01010";

const EXAMPLES: &[Example] = &[
    Example::new(1, EXAMPLE_INPUT, "198"),
    Example::new(2, EXAMPLE_INPUT, "230"),
];

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, examples = EXAMPLES)]
#[aoc(year = 2021, day = 3, tags = ["2021"])]
pub struct Solver;

/// Diagnostic report lines, borrowed from the input
#[derive(Debug)]
pub struct Report<'a> {
    lines: Vec<&'a [u8]>,
    width: usize,
}

impl AocParser for Solver {
    type SharedData<'a> = Report<'a>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let lines: Vec<&[u8]> = input
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::as_bytes)
            .collect();
        let width = lines
            .first()
            .map(|l| l.len())
            .ok_or_else(|| ParseError::MissingData("empty report".into()))?;
        if width > 63 {
            return Err(invalid(anyhow!("lines of {width} bits do not fit a u64")));
        }
        for (idx, line) in lines.iter().enumerate() {
            if line.len() != width || line.iter().any(|b| !matches!(b, b'0' | b'1')) {
                return Err(invalid(anyhow!(
                    "(line {}) expected {width} binary digits",
                    idx + 1
                )));
            }
        }
        Ok(Report { lines, width })
    }
}

/// Most common bit at `i`, ties going to `1`
fn most_common(lines: &[&[u8]], i: usize) -> u8 {
    let ones = lines.iter().filter(|l| l[i] == b'1').count();
    if ones * 2 >= lines.len() { b'1' } else { b'0' }
}

fn to_number(bits: &[u8]) -> u64 {
    bits.iter().fold(0, |acc, b| acc << 1 | u64::from(b - b'0'))
}

fn rating(report: &Report, keep_most_common: bool) -> Result<u64, SolveError> {
    let mut candidates = report.lines.clone();
    for i in 0..report.width {
        if candidates.len() <= 1 {
            break;
        }
        let bit = most_common(&candidates, i);
        candidates.retain(|l| (l[i] == bit) == keep_most_common);
    }
    match candidates.as_slice() {
        [line] => Ok(to_number(line)),
        _ => Err(SolveError::NoSolution(format!(
            "{} candidates left after filtering",
            candidates.len()
        ))),
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let gamma_bits: Vec<u8> = (0..shared.width)
            .map(|i| most_common(&shared.lines, i))
            .collect();
        let gamma = to_number(&gamma_bits);
        let epsilon = !gamma & ((1 << shared.width) - 1);
        Ok((gamma * epsilon).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let oxygen = rating(shared, true)?;
        let co2 = rating(shared, false)?;
        Ok((oxygen * co2).to_string())
    }
}
