use aoc_solver::{AocParser, Example, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse::parse_lines;

const EXAMPLE_INPUT: &str = "1\n2\n-3\n3\n-2\n0\n4";

const EXAMPLES: &[Example] = &[
    Example::new(1, EXAMPLE_INPUT, "3"),
    Example::new(2, EXAMPLE_INPUT, "1623178306"),
];

const DECRYPTION_KEY: i64 = 811_589_153;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, examples = EXAMPLES)]
#[aoc(year = 2022, day = 20, tags = ["2022"])]
pub struct Solver;

/// Mix `numbers` `rounds` times, returning the final circular order as original indices
fn mix(numbers: &[i64], rounds: usize) -> Vec<usize> {
    let mut order: Vec<usize> = (0..numbers.len()).collect();
    if numbers.len() < 2 {
        return order;
    }
    let cycle = numbers.len() as i64 - 1;

    for _ in 0..rounds {
        for (original, &value) in numbers.iter().enumerate() {
            let Some(at) = order.iter().position(|&i| i == original) else {
                continue;
            };
            order.remove(at);
            let target = (at as i64 + value).rem_euclid(cycle) as usize;
            order.insert(target, original);
        }
    }
    order
}

fn grove_coordinates(numbers: &[i64], rounds: usize) -> Result<i64, SolveError> {
    let order = mix(numbers, rounds);
    let zero = order
        .iter()
        .position(|&i| numbers[i] == 0)
        .ok_or_else(|| SolveError::NoSolution("sequence has no zero".into()))?;
    Ok([1000, 2000, 3000]
        .iter()
        .map(|offset| numbers[order[(zero + offset) % order.len()]])
        .sum())
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<i64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        parse_lines(input, |line| Ok(line.trim().parse::<i64>()?))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(grove_coordinates(shared, 1)?.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let keyed = shared
            .iter()
            .map(|n| n.checked_mul(DECRYPTION_KEY))
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| SolveError::InvariantViolation("decryption key overflow".into()))?;
        Ok(grove_coordinates(&keyed, 10)?.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    #[test]
    fn test_single_round_order() {
        let numbers = Solver::parse(EXAMPLE_INPUT).unwrap();
        let mixed: Vec<i64> = mix(&numbers, 1).into_iter().map(|i| numbers[i]).collect();
        assert_eq!(mixed, vec![-2, 1, 2, -3, 4, 0, 3]);
    }

    #[test]
    fn test_examples() {
        let mut shared = Solver::parse(EXAMPLE_INPUT).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "3");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "1623178306");
    }

    #[test]
    fn test_missing_zero() {
        let mut shared = Solver::parse("1\n2").unwrap();
        assert!(matches!(
            Solver::solve_part(&mut shared, 1),
            Err(SolveError::NoSolution(_))
        ));
    }
}
