use anyhow::{Context, anyhow};
use aoc_solver::{AocParser, Example, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse::{parse_lines, split_exact};

const EXAMPLE_INPUT: &str = "\
be cfbegad cbdgef fgaecd cgeb fdcge agebfd fecdb fabcd edb | fdgacbe cefdb cefbgd gcbe
edbfga begcd cbg gc gcadebf fbgde acbgfd abcde gfcbed gfec | fcgedb cgb dgebacf gc
fgaebd cg bdaec gdafb agbcfd gdcbef bgcad gfac gcb cdgabef | cg cg fdcagb cbg
fbegcd cbd adcefb dageb afcb bc aefdc ecdab fgdeca fcdbega | efabcd cedba gadfec cb
aecbfdg fbg gf bafeg dbefa fcge gcbea fcaegb dgceab fcbdga | gecf egdcabf bgf bfgea
fgeab ca afcebg bdacfeg cfaedg gcfdb baec bfadeg bafgc acf | gebdcfa ecba ca fadegcb
dbcfg fgd bdegcaf fgec aegbdf ecdfab fbedc dacgb gdcebf gf | cefg dcbef fcge gbcadfe
bdfegc cbegaf gecbf dfcage bdacg ed bedf ced adcbefg gebcd | ed bcgafe cdgba cbgef
egadfb cdbfeg cegd fecab cgb gbdefca cg fgcdab egfdb bfceg | gbdfcae bgc cg cgb
gcafb gcf dcaebfg ecagb gf abcdeg gaef cafbge fdbac fegbdc | fgae cfgab fg bagce";

const EXAMPLES: &[Example] = &[
    Example::new(1, EXAMPLE_INPUT, "26"),
    Example::new(2, EXAMPLE_INPUT, "61229"),
];

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, examples = EXAMPLES)]
#[aoc(year = 2021, day = 8, tags = ["2021"])]
pub struct Solver;

/// Lit segments as a bitmask, `a` being bit 0
type Segments = u8;

#[derive(Debug, Clone)]
pub struct Entry {
    patterns: [Segments; 10],
    outputs: [Segments; 4],
}

fn parse_segments(word: &str) -> anyhow::Result<Segments> {
    if word.is_empty() {
        return Err(anyhow!("empty segment pattern"));
    }
    word.bytes().try_fold(0, |mask, b| match b {
        b'a'..=b'g' => Ok(mask | 1 << (b - b'a')),
        _ => Err(anyhow!("invalid segment {:?} in {word:?}", b as char)),
    })
}

fn parse_words<const N: usize>(s: &str) -> anyhow::Result<[Segments; N]> {
    let words: Vec<Segments> = s
        .split_whitespace()
        .map(parse_segments)
        .collect::<anyhow::Result<_>>()?;
    let count = words.len();
    words
        .try_into()
        .map_err(|_| anyhow!("expected {N} patterns, found {count}"))
}

impl Entry {
    fn find(&self, what: &str, pred: impl Fn(Segments) -> bool) -> anyhow::Result<Segments> {
        self.patterns
            .iter()
            .copied()
            .find(|&p| pred(p))
            .with_context(|| format!("no pattern for {what}"))
    }

    /// Deduce which pattern shows which digit, then read the four output digits
    fn decode(&self) -> anyhow::Result<u32> {
        let lit = |p: Segments| p.count_ones();
        let one = self.find("1", |p| lit(p) == 2)?;
        let four = self.find("4", |p| lit(p) == 4)?;
        let seven = self.find("7", |p| lit(p) == 3)?;
        let eight = self.find("8", |p| lit(p) == 7)?;
        let nine = self.find("9", |p| lit(p) == 6 && p & four == four)?;
        let zero = self.find("0", |p| lit(p) == 6 && p != nine && p & one == one)?;
        let six = self.find("6", |p| lit(p) == 6 && p != nine && p != zero)?;
        let three = self.find("3", |p| lit(p) == 5 && p & one == one)?;
        let five = self.find("5", |p| lit(p) == 5 && p & six == p)?;
        let two = self.find("2", |p| lit(p) == 5 && p != three && p != five)?;

        let digits = [zero, one, two, three, four, five, six, seven, eight, nine];
        self.outputs.iter().try_fold(0, |value, output| {
            let digit = digits
                .iter()
                .position(|d| d == output)
                .with_context(|| format!("output {output:#09b} matches no digit"))?;
            Ok(value * 10 + digit as u32)
        })
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Entry>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        parse_lines(input, |line| {
            let [patterns, outputs] = split_exact(line.trim(), " | ")?;
            Ok(Entry {
                patterns: parse_words(patterns)?,
                outputs: parse_words(outputs)?,
            })
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let easy = shared
            .iter()
            .flat_map(|entry| entry.outputs)
            .filter(|output| matches!(output.count_ones(), 2 | 3 | 4 | 7))
            .count();
        Ok(easy.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut total = 0;
        for (idx, entry) in shared.iter().enumerate() {
            total += entry.decode().map_err(|e| {
                SolveError::NoSolution(format!("entry {}: {e:#}", idx + 1))
            })?;
        }
        Ok(total.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    #[test]
    fn test_decode_single_entry() {
        let shared = Solver::parse(
            "acedgfb cdfbe gcdfa fbcad dab cefabd cdfgeb eafb cagedb ab | cdfeb fcadb cdfeb cdbaf",
        )
        .unwrap();
        assert_eq!(shared[0].decode().unwrap(), 5353);
    }

    #[test]
    fn test_examples() {
        let mut shared = Solver::parse(EXAMPLE_INPUT).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "26");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "61229");
    }

    #[test]
    fn test_rejects_bad_segments() {
        assert!(Solver::parse("ab | ab").is_err());
        assert!(parse_segments("abz").is_err());
    }
}
