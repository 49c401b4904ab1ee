use anyhow::anyhow;
use aoc_solver::{AocParser, Example, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use regex::Regex;

use crate::utils::parse::{invalid, parse_lines};

const EXAMPLE_INPUT: &str = "\
Blueprint 1: Each ore robot costs 4 ore. Each clay robot costs 2 ore. Each obsidian robot costs 3 ore and 14 clay. Each geode robot costs 2 ore and 7 obsidian.
Blueprint 2: Each ore robot costs 2 ore. Each clay robot costs 3 ore. Each obsidian robot costs 3 ore and 8 clay. Each geode robot costs 3 ore and 12 obsidian.";

const EXAMPLES: &[Example] = &[
    Example::new(1, EXAMPLE_INPUT, "33"),
    Example::new(2, EXAMPLE_INPUT, "3472"),
];

const ORE: usize = 0;
const CLAY: usize = 1;
const OBSIDIAN: usize = 2;
const GEODE: usize = 3;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, examples = EXAMPLES)]
#[aoc(year = 2022, day = 19, tags = ["2022"])]
pub struct Solver;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blueprint {
    id: u32,
    /// Ore, clay and obsidian cost of each robot kind, indexed by what it collects
    costs: [[u32; 3]; 4],
    /// Largest per-minute spend of each resource; more collectors than this are never needed
    max_useful: [u32; 3],
}

impl Blueprint {
    fn new(id: u32, costs: [[u32; 3]; 4]) -> Self {
        let max_useful =
            [ORE, CLAY, OBSIDIAN].map(|res| costs.iter().map(|c| c[res]).max().unwrap_or(0));
        Self {
            id,
            costs,
            max_useful,
        }
    }

    /// Most geodes that can be open after `minutes`
    fn max_geodes(&self, minutes: u32) -> u32 {
        let mut best = 0;
        self.search(minutes, [1, 0, 0], [0, 0, 0], 0, &mut best);
        best
    }

    /// Branch on which robot to build next, fast-forwarding over the minutes spent saving up
    ///
    /// Geodes are credited in full when a geode robot is built, for every minute it has left.
    fn search(&self, left: u32, robots: [u32; 3], stock: [u32; 3], geodes: u32, best: &mut u32) {
        *best = (*best).max(geodes);
        if left <= 1 || geodes + left * (left - 1) / 2 <= *best {
            return;
        }

        for kind in [GEODE, OBSIDIAN, CLAY, ORE] {
            if kind != GEODE && robots[kind] >= self.max_useful[kind] {
                continue;
            }
            let cost = self.costs[kind];
            let Some(wait) = (0..3).try_fold(0, |wait: u32, res| {
                if cost[res] <= stock[res] {
                    Some(wait)
                } else if robots[res] == 0 {
                    None
                } else {
                    Some(wait.max((cost[res] - stock[res]).div_ceil(robots[res])))
                }
            }) else {
                continue;
            };
            if wait + 1 >= left {
                continue;
            }

            let remaining = left - wait - 1;
            let stock =
                std::array::from_fn(|res| stock[res] + robots[res] * (wait + 1) - cost[res]);
            if kind == GEODE {
                self.search(remaining, robots, stock, geodes + remaining, best);
            } else {
                let mut robots = robots;
                robots[kind] += 1;
                self.search(remaining, robots, stock, geodes, best);
            }
        }
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Blueprint>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let re = Regex::new(concat!(
            r"^Blueprint (\d+): Each ore robot costs (\d+) ore\. ",
            r"Each clay robot costs (\d+) ore\. ",
            r"Each obsidian robot costs (\d+) ore and (\d+) clay\. ",
            r"Each geode robot costs (\d+) ore and (\d+) obsidian\.$",
        ))
        .map_err(|e| invalid(e.into()))?;

        parse_lines(input, |line| {
            let caps = re
                .captures(line.trim())
                .ok_or_else(|| anyhow!("expected a blueprint"))?;
            let mut numbers = [0u32; 7];
            for (slot, m) in numbers.iter_mut().zip(caps.iter().skip(1).flatten()) {
                *slot = m.as_str().parse()?;
            }
            let [id, ore, clay, obs_ore, obs_clay, geode_ore, geode_obs] = numbers;
            Ok(Blueprint::new(
                id,
                [
                    [ore, 0, 0],
                    [clay, 0, 0],
                    [obs_ore, obs_clay, 0],
                    [geode_ore, 0, geode_obs],
                ],
            ))
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let quality: u32 = shared.iter().map(|b| b.id * b.max_geodes(24)).sum();
        Ok(quality.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let product: u64 = shared
            .iter()
            .take(3)
            .map(|b| u64::from(b.max_geodes(32)))
            .product();
        Ok(product.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    #[test]
    fn test_parse_blueprint() {
        let blueprints = Solver::parse(EXAMPLE_INPUT).unwrap();
        assert_eq!(blueprints[1].id, 2);
        assert_eq!(blueprints[1].costs[OBSIDIAN], [3, 8, 0]);
        assert_eq!(blueprints[1].max_useful, [3, 8, 12]);
    }

    #[test]
    fn test_geodes_per_blueprint() {
        let blueprints = Solver::parse(EXAMPLE_INPUT).unwrap();
        assert_eq!(blueprints[0].max_geodes(24), 9);
        assert_eq!(blueprints[1].max_geodes(24), 12);
        assert_eq!(blueprints[0].max_geodes(32), 56);
        assert_eq!(blueprints[1].max_geodes(32), 62);
    }

    #[test]
    fn test_examples() {
        let mut shared = Solver::parse(EXAMPLE_INPUT).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "33");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "3472");
    }

    #[test]
    fn test_rejects_malformed_blueprint() {
        assert!(Solver::parse("Blueprint 1: Each ore robot costs 4 ore.").is_err());
    }
}
