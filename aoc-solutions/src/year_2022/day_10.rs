use anyhow::anyhow;
use aoc_solver::{AocParser, Example, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse::parse_lines;

const EXAMPLE_INPUT: &str = "\
addx 15
addx -11
addx 6
addx -3
addx 5
addx -1
addx -8
addx 13
addx 4
noop
addx -1
addx 5
addx -1
addx 5
addx -1
addx 5
addx -1
addx 5
addx -1
addx -35
addx 1
addx 24
addx -19
addx 1
addx 16
addx -11
noop
noop
addx 21
addx -15
noop
noop
addx -3
addx 9
addx 1
addx -3
addx 8
addx 1
addx 5
noop
noop
noop
noop
noop
addx -36
noop
addx 1
addx 7
noop
noop
noop
addx 2
addx 6
noop
noop
noop
noop
noop
addx 1
noop
noop
addx 7
addx 1
noop
addx -13
addx 13
addx 7
noop
addx 1
addx -33
noop
noop
noop
addx 2
noop
noop
noop
addx 8
noop
addx -1
addx 2
addx 1
noop
addx 17
addx -9
addx 1
addx 1
addx -3
addx 11
noop
noop
addx 1
noop
addx 1
noop
noop
addx -13
addx -19
addx 1
addx 3
addx 26
addx -30
addx 12
addx -1
addx 3
addx 1
noop
noop
noop
addx -9
addx 18
addx 1
addx 2
noop
noop
addx 9
noop
noop
noop
addx -1
addx 2
addx -37
addx 1
addx 3
noop
addx 15
addx -21
addx 22
addx -6
addx 1
noop
addx 2
addx 1
noop
addx -10
noop
noop
addx 20
addx 1
addx 2
addx 2
addx -6
addx -11
noop
noop
noop";

const EXAMPLE_SCREEN: &str = "\
##..##..##..##..##..##..##..##..##..##..
###...###...###...###...###...###...###.
####....####....####....####....####....
#####.....#####.....#####.....#####.....
######......######......######......####
#######.......#######.......#######.....";

const EXAMPLES: &[Example] = &[
    Example::new(1, EXAMPLE_INPUT, "13140"),
    Example::new(2, EXAMPLE_INPUT, EXAMPLE_SCREEN),
];

const SCREEN_WIDTH: usize = 40;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, examples = EXAMPLES)]
#[aoc(year = 2022, day = 10, tags = ["2022"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Instruction {
    Noop,
    AddX(i32),
}

/// Value of the X register during each cycle, starting at cycle 1
fn register_trace(program: &[Instruction]) -> Vec<i32> {
    let mut x = 1;
    let mut trace = Vec::with_capacity(program.len() * 2);
    for instruction in program {
        match instruction {
            Instruction::Noop => trace.push(x),
            Instruction::AddX(v) => {
                trace.extend([x, x]);
                x += v;
            }
        }
    }
    trace
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<i32>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let program = parse_lines(input, |line| {
            let words: Vec<&str> = line.split_whitespace().collect();
            match words[..] {
                ["noop"] => Ok(Instruction::Noop),
                ["addx", v] => Ok(Instruction::AddX(v.parse()?)),
                _ => Err(anyhow!("unknown instruction {line:?}")),
            }
        })?;
        Ok(register_trace(&program))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let strength: i64 = (20..=shared.len())
            .step_by(SCREEN_WIDTH)
            .map(|cycle| cycle as i64 * shared[cycle - 1] as i64)
            .sum();
        Ok(strength.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let rows: Vec<String> = shared
            .chunks(SCREEN_WIDTH)
            .map(|row| {
                row.iter()
                    .enumerate()
                    .map(|(col, &x)| if (col as i32 - x).abs() <= 1 { '#' } else { '.' })
                    .collect()
            })
            .collect();
        Ok(rows.join("\n"))
    }
}
