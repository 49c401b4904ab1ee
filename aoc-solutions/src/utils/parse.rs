//! Input parsing helpers shared by the solutions

use std::str::FromStr;

use anyhow::{Context, anyhow};
use aoc_solver::ParseError;

/// Parse every non-empty line with `f`, prefixing errors with the 1-based line number
///
/// ```
/// use aoc_solutions::utils::parse::parse_lines;
///
/// let values = parse_lines("1\n2\n\n3\n", |line| Ok(line.parse::<u8>()?)).unwrap();
/// assert_eq!(values, vec![1, 2, 3]);
///
/// let err = parse_lines("1\nx", |line| Ok(line.parse::<u8>()?)).unwrap_err();
/// assert!(err.to_string().contains("line 2"));
/// ```
pub fn parse_lines<'a, T, F>(input: &'a str, mut f: F) -> Result<Vec<T>, ParseError>
where
    F: FnMut(&'a str) -> anyhow::Result<T>,
{
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| f(line).map_err(|e| line_error(idx + 1, e)))
        .collect()
}

pub fn line_error(line: usize, error: anyhow::Error) -> ParseError {
    ParseError::InvalidFormat(format!("(line {line}) {error:#}"))
}

pub fn invalid(error: anyhow::Error) -> ParseError {
    ParseError::InvalidFormat(format!("{error:#}"))
}

/// Split input into blocks separated by blank lines, skipping empty blocks
pub fn blocks(input: &str) -> impl Iterator<Item = &str> {
    input
        .split("\n\n")
        .map(|block| block.trim_matches('\n'))
        .filter(|block| !block.is_empty())
}

/// Split `s` by `sep` into exactly `N` parts
pub fn split_exact<'a, const N: usize>(s: &'a str, sep: &str) -> anyhow::Result<[&'a str; N]> {
    let mut parts = [""; N];
    let mut iter = s.split(sep);
    for (i, slot) in parts.iter_mut().enumerate() {
        *slot = iter
            .next()
            .ok_or_else(|| anyhow!("expected {N} parts separated by {sep:?}, found {i} in {s:?}"))?;
    }
    if iter.next().is_some() {
        return Err(anyhow!("expected {N} parts separated by {sep:?} in {s:?}"));
    }
    Ok(parts)
}

/// Parse a comma-separated list such as `3,4,3,1,2`
pub fn comma_separated<T>(s: &str) -> anyhow::Result<Vec<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    s.trim()
        .split(',')
        .map(|item| {
            item.trim()
                .parse()
                .with_context(|| format!("invalid number {item:?}"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blocks_skip_extra_blank_lines() {
        let blocks: Vec<_> = blocks("a\nb\n\nc\n\n\n\nd\n").collect();
        assert_eq!(blocks, vec!["a\nb", "c", "d"]);
    }

    #[test]
    fn test_split_exact() {
        assert_eq!(split_exact::<2>("2-4", "-").unwrap(), ["2", "4"]);
        assert!(split_exact::<2>("2-4-6", "-").is_err());
        assert!(split_exact::<3>("2-4", "-").is_err());
    }

    #[test]
    fn test_comma_separated() {
        assert_eq!(comma_separated::<u8>("3,4,3,1,2\n").unwrap(), vec![3, 4, 3, 1, 2]);
        assert!(comma_separated::<u8>("3,x").is_err());
    }

    #[test]
    fn test_line_error_carries_line_number() {
        let err = parse_lines("ok\nok\nbad", |line| {
            if line == "ok" {
                Ok(())
            } else {
                Err(anyhow!("unexpected {line:?}"))
            }
        })
        .unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidFormat("(line 3) unexpected \"bad\"".to_string())
        );
    }
}
