//! Literal example inputs used to self-check a solver before it sees real input

/// A puzzle example with the answer published for one part
///
/// Solvers expose their examples through [`Solver::EXAMPLES`](crate::Solver::EXAMPLES),
/// usually via `#[aoc_solver(examples = ...)]`.
///
/// # Example
///
/// ```
/// use aoc_solver::Example;
///
/// const EXAMPLES: &[Example] = &[
///     Example::new(1, "1\n2\n3", "6"),
///     Example::new(2, "1\n2\n3", "6"),
/// ];
/// assert_eq!(EXAMPLES[0].expected, "6");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Example {
    /// Part the expected answer belongs to
    pub part: u8,
    /// Raw example input, exactly as it would appear in an input file
    pub input: &'static str,
    /// Expected answer text
    pub expected: &'static str,
}

impl Example {
    pub const fn new(part: u8, input: &'static str, expected: &'static str) -> Self {
        Self {
            part,
            input,
            expected,
        }
    }

    /// Compare an answer with the expected text, ignoring trailing whitespace
    pub fn matches(&self, answer: &str) -> bool {
        self.expected.trim_end() == answer.trim_end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_ignores_trailing_whitespace() {
        let example = Example::new(1, "", "##..\n#...");
        assert!(example.matches("##..\n#...\n"));
        assert!(!example.matches("##.."));
    }
}
