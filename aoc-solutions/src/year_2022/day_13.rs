use std::cmp::Ordering;
use std::iter::Peekable;
use std::str::Bytes;

use anyhow::{anyhow, bail};
use aoc_solver::{AocParser, Example, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse::parse_lines;

const EXAMPLE_INPUT: &str = "\
[1,1,3,1,1]
[1,1,5,1,1]

[[1],[2,3,4]]
[[1],4]

[9]
[[8,7,6]]

[[4,4],4,4]
[[4,4],4,4,4]

[7,7,7,7]
[7,7,7]

[]
[3]

[[[]]]
[[]]

[1,[2,[3,[4,[5,6,7]]]],8,9]
[1,[2,[3,[4,[5,6,0]]]],8,9]";

const EXAMPLES: &[Example] = &[
    Example::new(1, EXAMPLE_INPUT, "13"),
    Example::new(2, EXAMPLE_INPUT, "140"),
];

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, examples = EXAMPLES)]
#[aoc(year = 2022, day = 13, tags = ["2022"])]
pub struct Solver;

#[derive(Debug, Clone)]
pub enum Packet {
    Int(u32),
    List(Vec<Packet>),
}

impl Ord for Packet {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Packet::Int(a), Packet::Int(b)) => a.cmp(b),
            (Packet::List(a), Packet::List(b)) => a.cmp(b),
            (Packet::Int(_), Packet::List(b)) => std::slice::from_ref(self).cmp(b),
            (Packet::List(a), Packet::Int(_)) => a.as_slice().cmp(std::slice::from_ref(other)),
        }
    }
}

impl PartialEq for Packet {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Packet {}

impl PartialOrd for Packet {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Packet {
    fn divider(n: u32) -> Self {
        Packet::List(vec![Packet::List(vec![Packet::Int(n)])])
    }

    fn parse(line: &str) -> anyhow::Result<Self> {
        let mut bytes = line.trim().bytes().peekable();
        let packet = Self::parse_value(&mut bytes)?;
        if let Some(b) = bytes.next() {
            bail!("trailing {:?} after packet", b as char);
        }
        Ok(packet)
    }

    fn parse_value(bytes: &mut Peekable<Bytes<'_>>) -> anyhow::Result<Self> {
        match bytes.next() {
            Some(b'[') => {
                let mut items = Vec::new();
                if bytes.next_if_eq(&b']').is_some() {
                    return Ok(Packet::List(items));
                }
                loop {
                    items.push(Self::parse_value(bytes)?);
                    match bytes.next() {
                        Some(b',') => {}
                        Some(b']') => return Ok(Packet::List(items)),
                        other => bail!("expected ',' or ']', found {:?}", other.map(char::from)),
                    }
                }
            }
            Some(d @ b'0'..=b'9') => {
                let mut value = u32::from(d - b'0');
                while let Some(d) = bytes.next_if(u8::is_ascii_digit) {
                    value = value
                        .checked_mul(10)
                        .and_then(|v| v.checked_add(u32::from(d - b'0')))
                        .ok_or_else(|| anyhow!("integer too large"))?;
                }
                Ok(Packet::Int(value))
            }
            other => bail!("unexpected {:?}", other.map(char::from)),
        }
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Packet>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let packets = parse_lines(input, Packet::parse)?;
        if packets.len() % 2 != 0 {
            return Err(ParseError::InvalidFormat("packets must come in pairs".into()));
        }
        Ok(packets)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let sum: usize = shared
            .chunks_exact(2)
            .enumerate()
            .filter(|(_, pair)| pair[0] < pair[1])
            .map(|(i, _)| i + 1)
            .sum();
        Ok(sum.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (first, second) = (Packet::divider(2), Packet::divider(6));
        let before = |divider: &Packet| shared.iter().filter(|p| *p < divider).count();
        // The first divider also sorts before the second
        let key = (before(&first) + 1) * (before(&second) + 2);
        Ok(key.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    #[test]
    fn test_parse_packet() {
        assert_eq!(
            Packet::parse("[1,[],[23]]").unwrap(),
            Packet::List(vec![
                Packet::Int(1),
                Packet::List(vec![]),
                Packet::List(vec![Packet::Int(23)]),
            ])
        );
        assert!(Packet::parse("[1,2").is_err());
        assert!(Packet::parse("[1]]").is_err());
        assert!(Packet::parse("[a]").is_err());
    }

    #[test]
    fn test_mixed_comparison() {
        let int = Packet::parse("[9]").unwrap();
        let nested = Packet::parse("[[8,7,6]]").unwrap();
        assert!(int > nested);
        assert_eq!(Packet::parse("[[1]]").unwrap(), Packet::parse("[1]").unwrap());
    }

    #[test]
    fn test_examples() {
        let mut shared = Solver::parse(EXAMPLE_INPUT).unwrap();
        assert_eq!(shared.len(), 16);
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "13");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "140");
    }
}
