use std::collections::{HashMap, HashSet};

use anyhow::anyhow;
use aoc_solver::{AocParser, Example, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse::invalid;

const EXAMPLE_INPUT: &str = "\
....#..
..###.#
#...#.#
.#...##
#.###..
##.#.##
.#..#..";

const EXAMPLES: &[Example] = &[
    Example::new(1, EXAMPLE_INPUT, "110"),
    Example::new(2, EXAMPLE_INPUT, "20"),
];

/// Stop searching for a settled round after this many
const MAX_ROUNDS: usize = 100_000;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, examples = EXAMPLES)]
#[aoc(year = 2022, day = 23, tags = ["2022"])]
pub struct Solver;

type Elf = (i32, i32);

/// Proposal directions in their initial priority: the step, then the three cells that must be free
const PROPOSALS: [(Elf, [Elf; 3]); 4] = [
    ((0, -1), [(-1, -1), (0, -1), (1, -1)]),
    ((0, 1), [(-1, 1), (0, 1), (1, 1)]),
    ((-1, 0), [(-1, -1), (-1, 0), (-1, 1)]),
    ((1, 0), [(1, -1), (1, 0), (1, 1)]),
];

const AROUND: [Elf; 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Run round `round` (0-based); returns whether any elf moved
fn spread(elves: &mut HashSet<Elf>, round: usize) -> bool {
    let free = |(x, y): Elf, (dx, dy): Elf| !elves.contains(&(x + dx, y + dy));

    let mut proposals: HashMap<Elf, Vec<Elf>> = HashMap::new();
    for &elf in elves.iter() {
        if AROUND.iter().all(|&d| free(elf, d)) {
            continue;
        }
        let choice = (0..4)
            .map(|k| PROPOSALS[(round + k) % 4])
            .find(|(_, checks)| checks.iter().all(|&d| free(elf, d)));
        if let Some(((dx, dy), _)) = choice {
            proposals.entry((elf.0 + dx, elf.1 + dy)).or_default().push(elf);
        }
    }

    let mut moved = false;
    for (target, from) in proposals {
        if let [elf] = from[..] {
            elves.remove(&elf);
            elves.insert(target);
            moved = true;
        }
    }
    moved
}

fn empty_ground(elves: &HashSet<Elf>) -> usize {
    let (Some(min_x), Some(max_x)) = (
        elves.iter().map(|e| e.0).min(),
        elves.iter().map(|e| e.0).max(),
    ) else {
        return 0;
    };
    let (min_y, max_y) = (
        elves.iter().map(|e| e.1).min().unwrap_or(0),
        elves.iter().map(|e| e.1).max().unwrap_or(0),
    );
    ((max_x - min_x + 1) * (max_y - min_y + 1)) as usize - elves.len()
}

impl AocParser for Solver {
    type SharedData<'a> = HashSet<Elf>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let mut elves = HashSet::new();
        for (y, line) in input.lines().enumerate() {
            for (x, c) in line.trim_end().chars().enumerate() {
                match c {
                    '#' => {
                        elves.insert((x as i32, y as i32));
                    }
                    '.' => {}
                    _ => return Err(invalid(anyhow!("(line {}) unexpected {c:?}", y + 1))),
                }
            }
        }
        Ok(elves)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut elves = shared.clone();
        for round in 0..10 {
            spread(&mut elves, round);
        }
        Ok(empty_ground(&elves).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut elves = shared.clone();
        (0..MAX_ROUNDS)
            .find(|&round| !spread(&mut elves, round))
            .map(|round| (round + 1).to_string())
            .ok_or_else(|| SolveError::NoSolution(format!("still moving after {MAX_ROUNDS} rounds")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    #[test]
    fn test_small_example_rounds() {
        let mut elves = Solver::parse(".....\n..##.\n..#..\n.....\n..##.\n.....").unwrap();
        for round in 0..3 {
            spread(&mut elves, round);
        }
        let mut positions: Vec<Elf> = elves.into_iter().collect();
        positions.sort_unstable();
        assert_eq!(positions, vec![(0, 2), (2, 0), (2, 5), (4, 1), (4, 3)]);
    }

    #[test]
    fn test_lone_elf_never_moves() {
        let mut elves = Solver::parse("#").unwrap();
        assert!(!spread(&mut elves, 0));
        assert_eq!(empty_ground(&elves), 0);
    }

    #[test]
    fn test_examples() {
        let mut shared = Solver::parse(EXAMPLE_INPUT).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "110");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "20");
    }
}
