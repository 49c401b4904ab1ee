use anyhow::{Context, anyhow};
use aoc_solver::{AocParser, Example, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse::{blocks, comma_separated, invalid};

const EXAMPLE_INPUT: &str = "\
7,4,9,5,11,17,23,2,0,14,21,24,10,16,13,6,15,25,12,22,18,20,8,19,3,26,1

22 13 17 11  0
 8  2 23  4 24
21  9 14 16  7
 6 10  3 18  5
 1 12 20 15 19

 3 15  0  2 22
 9 18 13 17  5
19  8  7 25 23
20 11 10 24  4
14 21 16 12  6

14 21 17 24  4
10 16 15  9 19
18  8 23 26 20
22 11 13  6  5
 2  0 12  3  7";

const EXAMPLES: &[Example] = &[
    Example::new(1, EXAMPLE_INPUT, "4512"),
    Example::new(2, EXAMPLE_INPUT, "1924"),
];

const SIZE: usize = 5;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, examples = EXAMPLES)]
#[aoc(year = 2021, day = 4, tags = ["2021"])]
pub struct Solver;

#[derive(Debug, Clone)]
struct Board {
    cells: [[u32; SIZE]; SIZE],
    marked: [[bool; SIZE]; SIZE],
}

impl Board {
    fn parse(block: &str) -> anyhow::Result<Self> {
        let mut cells = [[0; SIZE]; SIZE];
        let rows: Vec<&str> = block.lines().collect();
        if rows.len() != SIZE {
            return Err(anyhow!("board must have {SIZE} rows, found {}", rows.len()));
        }
        for (r, row) in rows.iter().enumerate() {
            let values: Vec<&str> = row.split_whitespace().collect();
            if values.len() != SIZE {
                return Err(anyhow!("board row {:?} must have {SIZE} numbers", row));
            }
            for (c, value) in values.iter().enumerate() {
                cells[r][c] = value
                    .parse()
                    .with_context(|| format!("invalid board number {value:?}"))?;
            }
        }
        Ok(Self {
            cells,
            marked: [[false; SIZE]; SIZE],
        })
    }

    /// Mark `number`, returning whether the board has a complete row or column
    fn mark(&mut self, number: u32) -> bool {
        for r in 0..SIZE {
            for c in 0..SIZE {
                if self.cells[r][c] == number {
                    self.marked[r][c] = true;
                }
            }
        }
        (0..SIZE).any(|i| {
            self.marked[i].iter().all(|&m| m) || self.marked.iter().all(|row| row[i])
        })
    }

    fn unmarked_sum(&self) -> u32 {
        self.cells
            .iter()
            .flatten()
            .zip(self.marked.iter().flatten())
            .filter(|(_, marked)| !**marked)
            .map(|(value, _)| value)
            .sum()
    }
}

#[derive(Debug)]
pub struct Bingo {
    numbers: Vec<u32>,
    boards: Vec<Board>,
    win_scores: Option<Vec<u32>>,
}

impl Bingo {
    /// Scores of the boards in the order they win
    fn win_scores(&mut self) -> &[u32] {
        self.win_scores.get_or_insert_with(|| {
            let mut boards = self.boards.clone();
            let mut won = vec![false; boards.len()];
            let mut scores = Vec::with_capacity(boards.len());
            for &number in &self.numbers {
                for (board, won) in boards.iter_mut().zip(won.iter_mut()) {
                    if !*won && board.mark(number) {
                        *won = true;
                        scores.push(number * board.unmarked_sum());
                    }
                }
            }
            scores
        })
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Bingo;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let mut blocks = blocks(input);
        let numbers = blocks
            .next()
            .ok_or_else(|| ParseError::MissingData("drawn numbers".into()))
            .and_then(|line| comma_separated::<u32>(line).map_err(invalid))?;
        let boards = blocks
            .enumerate()
            .map(|(i, block)| {
                Board::parse(block).map_err(|e| invalid(e.context(format!("board {}", i + 1))))
            })
            .collect::<Result<Vec<_>, _>>()?;
        if boards.is_empty() {
            return Err(ParseError::MissingData("no boards".into()));
        }
        Ok(Bingo {
            numbers,
            boards,
            win_scores: None,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .win_scores()
            .first()
            .map(u32::to_string)
            .ok_or_else(|| SolveError::NoSolution("no board wins".into()))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .win_scores()
            .last()
            .map(u32::to_string)
            .ok_or_else(|| SolveError::NoSolution("no board wins".into()))
    }
}
