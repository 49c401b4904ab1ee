use aoc_solver::{AocParser, Example, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

const EXAMPLES: &[Example] = &[
    Example::new(1, "mjqjpqmgbljsphdztnvjfqwrcgsmlb", "7"),
    Example::new(1, "bvwbjplbgvbhsrlpgdmjqwftvncz", "5"),
    Example::new(1, "nppdvjthqldpwncqszvftbrmjlhg", "6"),
    Example::new(1, "nznrnfrfntjfmvfwmzdfjlvtqnbhcprsg", "10"),
    Example::new(1, "zcfzfwzzqfrljwzlrfnpqdbhtmscgvjw", "11"),
    Example::new(2, "mjqjpqmgbljsphdztnvjfqwrcgsmlb", "19"),
    Example::new(2, "bvwbjplbgvbhsrlpgdmjqwftvncz", "23"),
    Example::new(2, "nppdvjthqldpwncqszvftbrmjlhg", "23"),
    Example::new(2, "nznrnfrfntjfmvfwmzdfjlvtqnbhcprsg", "29"),
    Example::new(2, "zcfzfwzzqfrljwzlrfnpqdbhtmscgvjw", "26"),
];

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, examples = EXAMPLES)]
#[aoc(year = 2022, day = 6, tags = ["2022"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = &'a [u8];

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let stream = input.trim().as_bytes();
        if stream.is_empty() {
            return Err(ParseError::MissingData("empty datastream".into()));
        }
        Ok(stream)
    }
}

/// Number of characters read once the last `length` characters are all distinct
fn find_marker(stream: &[u8], length: usize) -> Option<usize> {
    let mut last_seen = [None::<usize>; 256];
    let mut window_start = 0;
    for (i, &b) in stream.iter().enumerate() {
        if let Some(prev) = last_seen[b as usize] {
            window_start = window_start.max(prev + 1);
        }
        last_seen[b as usize] = Some(i);
        if i + 1 - window_start == length {
            return Some(i + 1);
        }
    }
    None
}

fn solve_for(stream: &[u8], length: usize) -> Result<String, SolveError> {
    find_marker(stream, length)
        .map(|end| end.to_string())
        .ok_or_else(|| SolveError::NoSolution(format!("no run of {length} distinct characters")))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        solve_for(shared, 4)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        solve_for(shared, 14)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_examples() {
        for example in EXAMPLES {
            let length = if example.part == 1 { 4 } else { 14 };
            let answer = find_marker(example.input.as_bytes(), length).unwrap();
            assert_eq!(answer.to_string(), example.expected, "{}", example.input);
        }
    }

    #[test]
    fn test_no_marker() {
        assert_eq!(find_marker(b"aaaa", 2), None);
        assert_eq!(find_marker(b"abab", 3), None);
        assert!(matches!(
            solve_for(b"abc", 4),
            Err(SolveError::NoSolution(_))
        ));
    }
}
