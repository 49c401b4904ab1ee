use anyhow::anyhow;
use aoc_solver::{AocParser, Example, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse::parse_lines;

const EXAMPLE_INPUT: &str = "\
vJrwpWtwJgWrhcsFMMfFFhFp
jqHRNqRjqzjGDLGLrsFMfFZSrLrFZsSL
PmmdzqPrVvPwwTWBwg
wMqvLMZHhHMvwLHjbvcjnnSBnvTQFn
ttgJtRGJQctTZtZT
CrZsJsPPZsGzwwsLwLmpwMDw";

const EXAMPLES: &[Example] = &[
    Example::new(1, EXAMPLE_INPUT, "157"),
    Example::new(2, EXAMPLE_INPUT, "70"),
];

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, examples = EXAMPLES)]
#[aoc(year = 2022, day = 3, tags = ["2022"])]
pub struct Solver;

fn priority(item: u8) -> Option<u32> {
    match item {
        b'a'..=b'z' => Some(u32::from(item - b'a') + 1),
        b'A'..=b'Z' => Some(u32::from(item - b'A') + 27),
        _ => None,
    }
}

/// Set of item priorities as a bitmask
fn item_set(items: &[u8]) -> u64 {
    items
        .iter()
        .filter_map(|&b| priority(b))
        .fold(0, |set, p| set | 1 << p)
}

/// The priority of the single item present in every set
fn single_common(sets: impl IntoIterator<Item = u64>) -> Result<u32, SolveError> {
    let common = sets.into_iter().fold(u64::MAX, |acc, s| acc & s);
    if common.count_ones() == 1 {
        Ok(common.trailing_zeros())
    } else {
        Err(SolveError::InvariantViolation(format!(
            "expected exactly one common item, found {}",
            common.count_ones()
        )))
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<&'a [u8]>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        parse_lines(input, |line| {
            let items = line.trim().as_bytes();
            if items.len() % 2 != 0 {
                return Err(anyhow!("rucksack has an odd number of items"));
            }
            if let Some(&bad) = items.iter().find(|&&b| priority(b).is_none()) {
                return Err(anyhow!("invalid item {:?}", bad as char));
            }
            Ok(items)
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut total = 0;
        for rucksack in shared.iter() {
            let (first, second) = rucksack.split_at(rucksack.len() / 2);
            total += single_common([item_set(first), item_set(second)])?;
        }
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        if shared.len() % 3 != 0 {
            return Err(SolveError::InvariantViolation(format!(
                "{} rucksacks cannot form groups of three",
                shared.len()
            )));
        }
        let mut total = 0;
        for group in shared.chunks_exact(3) {
            total += single_common(group.iter().map(|r| item_set(r)))?;
        }
        Ok(total.to_string())
    }
}
