use std::collections::HashMap;

use anyhow::{anyhow, bail};
use aoc_solver::{AocParser, Example, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::dp_cache::{DpCache, DpError, DpProblem, VecBackend};
use crate::utils::parse::{invalid, parse_lines};

const EXAMPLE_INPUT: &str = "\
root: pppw + sjmn
dbpl: 5
cczh: sllz + lgvd
zczc: 2
ptdq: humn - dvpt
dvpt: 3
lfqf: 4
humn: 5
ljgn: 2
sjmn: drzm * dbpl
sllz: 4
pppw: cczh / lfqf
lgvd: ljgn * ptdq
drzm: hmdt - zczc
hmdt: 32";

const EXAMPLES: &[Example] = &[
    Example::new(1, EXAMPLE_INPUT, "152"),
    Example::new(2, EXAMPLE_INPUT, "301"),
];

const ROOT: &str = "root";
const HUMAN: &str = "humn";
/// Largest integer every `f64` below it represents exactly
const SEARCH_LIMIT: i64 = 1 << 53;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, examples = EXAMPLES)]
#[aoc(year = 2022, day = 21, tags = ["2022"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Job {
    Number(i64),
    Math(usize, Op, usize),
}

#[derive(Debug)]
pub struct Troop {
    jobs: Vec<Job>,
    root: usize,
    human: Option<usize>,
}

impl Troop {
    fn new(named: Vec<(&str, JobSpec<'_>)>) -> anyhow::Result<Self> {
        let index: HashMap<&str, usize> = named
            .iter()
            .enumerate()
            .map(|(i, (name, _))| (*name, i))
            .collect();
        if index.len() != named.len() {
            bail!("duplicate monkey name");
        }
        let lookup = |name: &str| {
            index
                .get(name)
                .copied()
                .ok_or_else(|| anyhow!("unknown monkey {name:?}"))
        };

        let jobs = named
            .iter()
            .map(|(_, spec)| match *spec {
                JobSpec::Number(n) => Ok(Job::Number(n)),
                JobSpec::Math(l, op, r) => Ok(Job::Math(lookup(l)?, op, lookup(r)?)),
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        let troop = Troop {
            jobs,
            root: lookup(ROOT)?,
            human: index.get(HUMAN).copied(),
        };
        troop
            .yell_exact()
            .map_err(|e| anyhow!("monkeys cannot agree on {ROOT}: {e}"))?;
        Ok(troop)
    }

    fn operands(&self, monkey: usize) -> Vec<usize> {
        match self.jobs[monkey] {
            Job::Number(_) => vec![],
            Job::Math(l, _, r) => vec![l, r],
        }
    }

    /// Value of `root`, or `None` on overflow or division by zero
    fn yell_exact(&self) -> Result<Option<i64>, DpError> {
        DpCache::new(VecBackend::with_capacity(self.jobs.len()), Exact(self)).get(&self.root)
    }

    /// Difference between the two operands of `root` when the human yells `guess`
    fn root_difference(&self, human: usize, guess: i64) -> Option<f64> {
        let Job::Math(left, _, right) = self.jobs[self.root] else {
            return None;
        };
        let cache = DpCache::new(
            VecBackend::with_capacity(self.jobs.len()),
            Guess {
                troop: self,
                human,
                value: guess as f64,
            },
        );
        Some(cache.get(&left).ok()? - cache.get(&right).ok()?)
    }
}

struct Exact<'a>(&'a Troop);

impl DpProblem<usize, Option<i64>> for Exact<'_> {
    fn deps(&self, monkey: &usize) -> Vec<usize> {
        self.0.operands(*monkey)
    }

    fn compute(&self, monkey: &usize, deps: Vec<Option<i64>>) -> Option<i64> {
        match self.0.jobs[*monkey] {
            Job::Number(n) => Some(n),
            Job::Math(_, op, _) => {
                let (a, b) = (deps[0]?, deps[1]?);
                match op {
                    Op::Add => a.checked_add(b),
                    Op::Sub => a.checked_sub(b),
                    Op::Mul => a.checked_mul(b),
                    Op::Div => a.checked_div(b),
                }
            }
        }
    }
}

/// Evaluation in `f64` with the human's number replaced
struct Guess<'a> {
    troop: &'a Troop,
    human: usize,
    value: f64,
}

impl DpProblem<usize, f64> for Guess<'_> {
    fn deps(&self, monkey: &usize) -> Vec<usize> {
        if *monkey == self.human {
            return vec![];
        }
        self.troop.operands(*monkey)
    }

    fn compute(&self, monkey: &usize, deps: Vec<f64>) -> f64 {
        match self.troop.jobs[*monkey] {
            _ if *monkey == self.human => self.value,
            Job::Number(n) => n as f64,
            Job::Math(_, op, _) => match op {
                Op::Add => deps[0] + deps[1],
                Op::Sub => deps[0] - deps[1],
                Op::Mul => deps[0] * deps[1],
                Op::Div => deps[0] / deps[1],
            },
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum JobSpec<'a> {
    Number(i64),
    Math(&'a str, Op, &'a str),
}

impl AocParser for Solver {
    type SharedData<'a> = Troop;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let named = parse_lines(input, |line| {
            let (name, job) = line
                .trim()
                .split_once(": ")
                .ok_or_else(|| anyhow!("expected `name: job`"))?;
            let spec = match job.split(' ').collect::<Vec<_>>()[..] {
                [n] => JobSpec::Number(n.parse()?),
                [l, op, r] => {
                    let op = match op {
                        "+" => Op::Add,
                        "-" => Op::Sub,
                        "*" => Op::Mul,
                        "/" => Op::Div,
                        _ => bail!("unknown operator {op:?}"),
                    };
                    JobSpec::Math(l, op, r)
                }
                _ => bail!("malformed job {job:?}"),
            };
            Ok((name, spec))
        })?;
        Troop::new(named).map_err(invalid)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .yell_exact()
            .map_err(|e| SolveError::InvariantViolation(e.to_string()))?
            .map(|v| v.to_string())
            .ok_or_else(|| SolveError::InvariantViolation("overflow or division by zero".into()))
    }
}

impl PartSolver<2> for Solver {
    /// The difference at `root` is monotonic in the human's number, so bisect on its sign
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let human = shared
            .human
            .ok_or_else(|| SolveError::NoSolution(format!("no monkey named {HUMAN}")))?;
        let diff = |guess| {
            shared
                .root_difference(human, guess)
                .ok_or_else(|| SolveError::NoSolution(format!("{ROOT} does not compare two values")))
        };

        let (mut lo, mut hi) = (0, SEARCH_LIMIT);
        let start_positive = diff(lo)? > 0.0;
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            let d = diff(mid)?;
            if d == 0.0 {
                return Ok(mid.to_string());
            }
            if (d > 0.0) == start_positive {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }
        if diff(lo)? == 0.0 {
            return Ok(lo.to_string());
        }
        Err(SolveError::NoSolution("no human value balances root".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    #[test]
    fn test_examples() {
        let mut shared = Solver::parse(EXAMPLE_INPUT).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "152");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "301");
    }

    #[test]
    fn test_root_difference_is_linear() {
        let troop = Solver::parse(EXAMPLE_INPUT).unwrap();
        let human = troop.human.unwrap();
        assert_eq!(troop.root_difference(human, 301), Some(0.0));
        assert!(troop.root_difference(human, 0).unwrap() < 0.0);
    }

    #[test]
    fn test_rejects_cycles_and_unknown_names() {
        assert!(Solver::parse("root: a + b\na: b * c\nb: a - c\nc: 1").is_err());
        assert!(Solver::parse("root: a + b\na: 1").is_err());
        assert!(Solver::parse("a: 1").is_err());
    }

    #[test]
    fn test_division_by_zero_is_reported() {
        let mut shared = Solver::parse("root: a / b\na: 4\nb: 0").unwrap();
        assert!(matches!(
            Solver::solve_part(&mut shared, 1),
            Err(SolveError::InvariantViolation(_))
        ));
    }
}
