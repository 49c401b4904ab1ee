use anyhow::{Context, anyhow};
use aoc_solver::{AocParser, Example, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse::{blocks, comma_separated, invalid};

const EXAMPLE_INPUT: &str = "\
Monkey 0:
  Starting items: 79, 98
  Operation: new = old * 19
  Test: divisible by 23
    If true: throw to monkey 2
    If false: throw to monkey 3

Monkey 1:
  Starting items: 54, 65, 75, 74
  Operation: new = old + 6
  Test: divisible by 19
    If true: throw to monkey 2
    If false: throw to monkey 0

Monkey 2:
  Starting items: 79, 60, 97
  Operation: new = old * old
  Test: divisible by 13
    If true: throw to monkey 1
    If false: throw to monkey 3

Monkey 3:
  Starting items: 74
  Operation: new = old + 3
  Test: divisible by 17
    If true: throw to monkey 0
    If false: throw to monkey 1";

const EXAMPLES: &[Example] = &[
    Example::new(1, EXAMPLE_INPUT, "10605"),
    Example::new(2, EXAMPLE_INPUT, "2713310158"),
];

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, examples = EXAMPLES)]
#[aoc(year = 2022, day = 11, tags = ["2022"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operand {
    Old,
    Value(u64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operation {
    Add(Operand),
    Mul(Operand),
}

impl Operation {
    fn apply(self, old: u64) -> Option<u64> {
        let value = |operand| match operand {
            Operand::Old => old,
            Operand::Value(v) => v,
        };
        match self {
            Operation::Add(rhs) => old.checked_add(value(rhs)),
            Operation::Mul(rhs) => old.checked_mul(value(rhs)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Monkey {
    items: Vec<u64>,
    operation: Operation,
    divisor: u64,
    if_true: usize,
    if_false: usize,
}

#[derive(Debug, Clone, Copy)]
enum Relief {
    DivideByThree,
    /// Worry is kept modulo the product of every divisor
    Modulo(u64),
}

fn field<'a>(lines: &mut impl Iterator<Item = &'a str>, prefix: &str) -> anyhow::Result<&'a str> {
    let line = lines.next().with_context(|| format!("missing {prefix:?}"))?;
    line.trim()
        .strip_prefix(prefix)
        .ok_or_else(|| anyhow!("expected {prefix:?}, found {line:?}"))
}

fn parse_monkey(block: &str) -> anyhow::Result<Monkey> {
    let mut lines = block.lines();
    lines.next().context("missing monkey header")?;
    let items = comma_separated(field(&mut lines, "Starting items:")?)?;

    let operation = match field(&mut lines, "Operation: new = old ")?.split_once(' ') {
        Some((op, rhs)) => {
            let rhs = match rhs {
                "old" => Operand::Old,
                n => Operand::Value(n.parse()?),
            };
            match op {
                "+" => Operation::Add(rhs),
                "*" => Operation::Mul(rhs),
                _ => return Err(anyhow!("unsupported operator {op:?}")),
            }
        }
        None => return Err(anyhow!("malformed operation")),
    };

    let divisor = field(&mut lines, "Test: divisible by ")?.parse()?;
    if divisor == 0 {
        return Err(anyhow!("divisor must be positive"));
    }
    Ok(Monkey {
        items,
        operation,
        divisor,
        if_true: field(&mut lines, "If true: throw to monkey ")?.parse()?,
        if_false: field(&mut lines, "If false: throw to monkey ")?.parse()?,
    })
}

fn monkey_business(monkeys: &[Monkey], rounds: usize, relief: Relief) -> Result<u64, SolveError> {
    let mut monkeys = monkeys.to_vec();
    let mut inspected = vec![0u64; monkeys.len()];

    for _ in 0..rounds {
        for i in 0..monkeys.len() {
            let items = std::mem::take(&mut monkeys[i].items);
            inspected[i] += items.len() as u64;
            let Monkey {
                operation,
                divisor,
                if_true,
                if_false,
                ..
            } = monkeys[i];
            for item in items {
                let worry = operation.apply(item).ok_or_else(|| {
                    SolveError::InvariantViolation(format!("worry level overflow at {item}"))
                })?;
                let worry = match relief {
                    Relief::DivideByThree => worry / 3,
                    Relief::Modulo(m) => worry % m,
                };
                let target = if worry % divisor == 0 { if_true } else { if_false };
                monkeys[target].items.push(worry);
            }
        }
    }

    inspected.sort_unstable_by(|a, b| b.cmp(a));
    match inspected[..] {
        [a, b, ..] => a
            .checked_mul(b)
            .ok_or_else(|| SolveError::InvariantViolation("monkey business overflow".into())),
        _ => Err(SolveError::NoSolution("fewer than two monkeys".into())),
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Monkey>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let monkeys = blocks(input)
            .enumerate()
            .map(|(i, block)| parse_monkey(block).with_context(|| format!("monkey {i}")))
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(invalid)?;

        if let Some(m) = monkeys
            .iter()
            .find(|m| m.if_true >= monkeys.len() || m.if_false >= monkeys.len())
        {
            return Err(ParseError::InvalidFormat(format!(
                "throw target out of range: {} / {}",
                m.if_true, m.if_false
            )));
        }
        Ok(monkeys)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(monkey_business(shared, 20, Relief::DivideByThree)?.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let modulus = shared
            .iter()
            .try_fold(1u64, |acc, m| acc.checked_mul(m.divisor))
            .ok_or_else(|| SolveError::InvariantViolation("divisor product overflow".into()))?;
        Ok(monkey_business(shared, 10_000, Relief::Modulo(modulus))?.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    #[test]
    fn test_parse_monkey() {
        let monkeys = Solver::parse(EXAMPLE_INPUT).unwrap();
        assert_eq!(monkeys.len(), 4);
        assert_eq!(monkeys[1].items, vec![54, 65, 75, 74]);
        assert_eq!(monkeys[2].operation, Operation::Mul(Operand::Old));
        assert_eq!((monkeys[3].divisor, monkeys[3].if_true, monkeys[3].if_false), (17, 0, 1));
    }

    #[test]
    fn test_examples() {
        let mut shared = Solver::parse(EXAMPLE_INPUT).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "10605");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "2713310158");
    }

    #[test]
    fn test_rejects_unknown_target() {
        let input = EXAMPLE_INPUT.replace("throw to monkey 3", "throw to monkey 9");
        assert!(Solver::parse(&input).is_err());
    }
}
