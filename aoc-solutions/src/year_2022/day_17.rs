use std::collections::HashMap;

use anyhow::anyhow;
use aoc_solver::{AocParser, Example, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse::invalid;

const EXAMPLE_INPUT: &str = ">>><<><>><<<>><>>><<<>>><<<><<<>><>><<>>";

const EXAMPLES: &[Example] = &[
    Example::new(1, EXAMPLE_INPUT, "3068"),
    Example::new(2, EXAMPLE_INPUT, "1514285714288"),
];

/// Rock shapes as row bitmasks, bottom row first, bit `c` being column `c` from the left
const ROCKS: [&[u8]; 5] = [
    &[0b1111],
    &[0b010, 0b111, 0b010],
    &[0b111, 0b100, 0b100],
    &[0b1, 0b1, 0b1, 0b1],
    &[0b11, 0b11],
];

const LEFT_WALL: u8 = 0b000_0001;
const RIGHT_WALL: u8 = 0b100_0000;
/// Rows of the tower top compared when looking for a repeating state
const SURFACE_DEPTH: usize = 32;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, examples = EXAMPLES)]
#[aoc(year = 2022, day = 17, tags = ["2022"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Jet {
    Left,
    Right,
}

type StateKey = (usize, usize, [u8; SURFACE_DEPTH]);

struct Chamber<'a> {
    jets: &'a [Jet],
    next_jet: usize,
    rows: Vec<u8>,
}

impl<'a> Chamber<'a> {
    fn new(jets: &'a [Jet]) -> Self {
        Self {
            jets,
            next_jet: 0,
            rows: Vec::new(),
        }
    }

    fn fits(&self, rock: &[u8], y: usize) -> bool {
        rock.iter()
            .enumerate()
            .all(|(i, r)| self.rows.get(y + i).is_none_or(|row| row & r == 0))
    }

    fn drop_rock(&mut self, shape: &[u8]) {
        let mut rock: Vec<u8> = shape.iter().map(|r| r << 2).collect();
        let mut y = self.rows.len() + 3;

        loop {
            let jet = self.jets[self.next_jet];
            self.next_jet = (self.next_jet + 1) % self.jets.len();
            let shifted: Option<Vec<u8>> = match jet {
                Jet::Left if rock.iter().all(|r| r & LEFT_WALL == 0) => {
                    Some(rock.iter().map(|r| r >> 1).collect())
                }
                Jet::Right if rock.iter().all(|r| r & RIGHT_WALL == 0) => {
                    Some(rock.iter().map(|r| r << 1).collect())
                }
                _ => None,
            };
            if let Some(shifted) = shifted.filter(|s| self.fits(s, y)) {
                rock = shifted;
            }

            if y == 0 || !self.fits(&rock, y - 1) {
                break;
            }
            y -= 1;
        }

        for (i, r) in rock.into_iter().enumerate() {
            if self.rows.len() <= y + i {
                self.rows.resize(y + i + 1, 0);
            }
            self.rows[y + i] |= r;
        }
    }

    fn surface(&self) -> Option<[u8; SURFACE_DEPTH]> {
        let start = self.rows.len().checked_sub(SURFACE_DEPTH)?;
        self.rows[start..].try_into().ok()
    }
}

/// Tower height after `total` rocks, skipping whole cycles once the state repeats
fn tower_height(jets: &[Jet], total: u64) -> u64 {
    let mut chamber = Chamber::new(jets);
    let mut seen: HashMap<StateKey, (u64, u64)> = HashMap::new();
    let mut skipped = 0;
    let mut dropped = 0;

    while dropped < total {
        chamber.drop_rock(ROCKS[(dropped % 5) as usize]);
        dropped += 1;

        if skipped > 0 {
            continue;
        }
        let Some(surface) = chamber.surface() else {
            continue;
        };
        let height = chamber.rows.len() as u64;
        let key = ((dropped % 5) as usize, chamber.next_jet, surface);
        if let Some(&(prev_dropped, prev_height)) = seen.get(&key) {
            let period = dropped - prev_dropped;
            let cycles = (total - dropped) / period;
            dropped += cycles * period;
            skipped = cycles * (height - prev_height);
        } else {
            seen.insert(key, (dropped, height));
        }
    }
    chamber.rows.len() as u64 + skipped
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Jet>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let jets = input
            .trim()
            .chars()
            .map(|c| match c {
                '<' => Ok(Jet::Left),
                '>' => Ok(Jet::Right),
                _ => Err(anyhow!("unexpected jet {c:?}")),
            })
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(invalid)?;
        if jets.is_empty() {
            return Err(ParseError::MissingData("jet pattern".into()));
        }
        Ok(jets)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(tower_height(shared, 2022).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(tower_height(shared, 1_000_000_000_000).to_string())
    }
}
