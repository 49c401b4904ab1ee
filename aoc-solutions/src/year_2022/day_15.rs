use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;
use regex::Regex;

use crate::utils::parse::{invalid, parse_lines};

const ROW: i64 = 2_000_000;
const SEARCH_BOUND: i64 = 4_000_000;

/// The puzzle's examples ask about row 10 and bound 20 rather than the real
/// input's values, so they are exercised by the unit tests instead of `--check`.
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 15, tags = ["2022"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sensor {
    x: i64,
    y: i64,
    beacon: (i64, i64),
    radius: i64,
}

impl Sensor {
    fn covers(&self, x: i64, y: i64) -> bool {
        (self.x - x).abs() + (self.y - y).abs() <= self.radius
    }

    /// Inclusive x-range this sensor rules out on row `y`
    fn span_on_row(&self, y: i64) -> Option<(i64, i64)> {
        let reach = self.radius - (self.y - y).abs();
        (reach >= 0).then(|| (self.x - reach, self.x + reach))
    }
}

/// Sorted, non-overlapping, non-adjacent covered ranges on row `y`
fn merged_spans(sensors: &[Sensor], y: i64) -> Vec<(i64, i64)> {
    let mut spans: Vec<(i64, i64)> = sensors.iter().filter_map(|s| s.span_on_row(y)).collect();
    spans.sort_unstable();
    let mut merged: Vec<(i64, i64)> = Vec::with_capacity(spans.len());
    for (lo, hi) in spans {
        match merged.last_mut() {
            Some(last) if lo <= last.1 + 1 => last.1 = last.1.max(hi),
            _ => merged.push((lo, hi)),
        }
    }
    merged
}

/// Positions on row `y` where no beacon can be
pub fn excluded_on_row(sensors: &[Sensor], y: i64) -> i64 {
    let spans = merged_spans(sensors, y);
    let covered: i64 = spans.iter().map(|(lo, hi)| hi - lo + 1).sum();
    let beacons = sensors
        .iter()
        .filter(|s| s.beacon.1 == y)
        .map(|s| s.beacon.0)
        .unique()
        .filter(|bx| spans.iter().any(|(lo, hi)| (lo..=hi).contains(&bx)))
        .count() as i64;
    covered - beacons
}

/// The only position in `0..=bound` on both axes not covered by any sensor
///
/// Such a cell borders at least two diamonds, so the intersections of the lines just
/// outside every diamond are tried first; a row sweep handles gaps pinned to the edge.
pub fn find_gap(sensors: &[Sensor], bound: i64) -> Option<(i64, i64)> {
    let in_bounds = |x: i64, y: i64| (0..=bound).contains(&x) && (0..=bound).contains(&y);
    let uncovered = |x: i64, y: i64| sensors.iter().all(|s| !s.covers(x, y));

    let sums: Vec<i64> = sensors
        .iter()
        .flat_map(|s| [s.x + s.y - s.radius - 1, s.x + s.y + s.radius + 1])
        .collect();
    let diffs: Vec<i64> = sensors
        .iter()
        .flat_map(|s| [s.x - s.y - s.radius - 1, s.x - s.y + s.radius + 1])
        .collect();

    let candidate = sums
        .iter()
        .cartesian_product(&diffs)
        .filter(|&(a, b)| (a - b) % 2 == 0)
        .map(|(a, b)| ((a + b) / 2, (a - b) / 2))
        .find(|&(x, y)| in_bounds(x, y) && uncovered(x, y));
    if candidate.is_some() {
        return candidate;
    }

    (0..=bound).find_map(|y| {
        let mut x = 0;
        for (lo, hi) in merged_spans(sensors, y) {
            if lo > x {
                break;
            }
            x = x.max(hi + 1);
        }
        (x <= bound).then_some((x, y))
    })
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Sensor>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let re = Regex::new(
            r"^Sensor at x=(-?\d+), y=(-?\d+): closest beacon is at x=(-?\d+), y=(-?\d+)$",
        )
        .map_err(|e| invalid(e.into()))?;
        parse_lines(input, |line| {
            let caps = re
                .captures(line.trim())
                .ok_or_else(|| anyhow!("expected a sensor report"))?;
            let [x, y, bx, by] = [1usize, 2, 3, 4].map(|i| caps[i].parse::<i64>());
            let (x, y, bx, by) = (x?, y?, bx?, by?);
            Ok(Sensor {
                x,
                y,
                beacon: (bx, by),
                radius: (x - bx).abs() + (y - by).abs(),
            })
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(excluded_on_row(shared, ROW).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (x, y) = find_gap(shared, SEARCH_BOUND)
            .ok_or_else(|| SolveError::NoSolution("every position is covered".into()))?;
        Ok((x * 4_000_000 + y).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE_INPUT: &str = "\
Sensor at x=2, y=18: closest beacon is at x=-2, y=15
Sensor at x=9, y=16: closest beacon is at x=10, y=16
Sensor at x=13, y=2: closest beacon is at x=15, y=3
Sensor at x=12, y=14: closest beacon is at x=10, y=16
Sensor at x=10, y=20: closest beacon is at x=10, y=16
Sensor at x=14, y=17: closest beacon is at x=10, y=16
Sensor at x=8, y=7: closest beacon is at x=2, y=10
Sensor at x=2, y=0: closest beacon is at x=2, y=10
Sensor at x=0, y=11: closest beacon is at x=2, y=10
Sensor at x=20, y=14: closest beacon is at x=25, y=17
Sensor at x=17, y=20: closest beacon is at x=21, y=22
Sensor at x=16, y=7: closest beacon is at x=15, y=3
Sensor at x=14, y=3: closest beacon is at x=15, y=3
Sensor at x=20, y=1: closest beacon is at x=15, y=3";

    #[test]
    fn test_example_row() {
        let sensors = Solver::parse(EXAMPLE_INPUT).unwrap();
        assert_eq!(sensors.len(), 14);
        assert_eq!(sensors[6].radius, 9);
        assert_eq!(excluded_on_row(&sensors, 10), 26);
    }

    #[test]
    fn test_example_gap() {
        let sensors = Solver::parse(EXAMPLE_INPUT).unwrap();
        let (x, y) = find_gap(&sensors, 20).unwrap();
        assert_eq!(x * 4_000_000 + y, 56000011);
    }

    #[test]
    fn test_gap_on_edge_found_by_sweep() {
        // Covers everything in 0..=4 except the corner (4, 4)
        let sensors = Solver::parse("Sensor at x=0, y=0: closest beacon is at x=3, y=4").unwrap();
        assert_eq!(find_gap(&sensors, 4), Some((4, 4)));
        assert_eq!(find_gap(&sensors, 3), None);
    }

    #[test]
    fn test_rejects_malformed_report() {
        let err = Solver::parse("Sensor at x=1, y=2").unwrap_err();
        assert!(err.to_string().contains("line 1"));
    }
}
