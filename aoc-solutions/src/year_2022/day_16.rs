use std::collections::{HashMap, VecDeque};

use anyhow::anyhow;
use aoc_solver::{AocParser, Example, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use regex::Regex;

use crate::utils::parse::{invalid, parse_lines};

const EXAMPLE_INPUT: &str = "\
Valve AA has flow rate=0; tunnels lead to valves DD, II, BB
Valve BB has flow rate=13; tunnels lead to valves CC, AA
Valve CC has flow rate=2; tunnels lead to valves DD, BB
Valve DD has flow rate=20; tunnels lead to valves CC, AA, EE
Valve EE has flow rate=3; tunnels lead to valves FF, DD
Valve FF has flow rate=0; tunnels lead to valves EE, GG
Valve GG has flow rate=0; tunnels lead to valves FF, HH
Valve HH has flow rate=22; tunnel leads to valve GG
Valve II has flow rate=0; tunnels lead to valves AA, JJ
Valve JJ has flow rate=21; tunnel leads to valve II";

const EXAMPLES: &[Example] = &[
    Example::new(1, EXAMPLE_INPUT, "1651"),
    Example::new(2, EXAMPLE_INPUT, "1707"),
];

const START: &str = "AA";

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, examples = EXAMPLES)]
#[aoc(year = 2022, day = 16, tags = ["2022"])]
pub struct Solver;

/// Valves with a positive flow rate, plus travel times between them
#[derive(Debug)]
pub struct Network {
    rates: Vec<u32>,
    /// `travel[i][j]` minutes from valve `i` to valve `j`; index `rates.len()` is the start
    travel: Vec<Vec<u32>>,
}

impl Network {
    fn start(&self) -> usize {
        self.rates.len()
    }

    /// Best pressure released for every set of opened valves reachable in `minutes`
    fn best_per_valve_set(&self, minutes: u32) -> HashMap<u64, u32> {
        let mut best = HashMap::new();
        self.explore(self.start(), minutes, 0, 0, &mut best);
        best
    }

    fn explore(
        &self,
        at: usize,
        left: u32,
        opened: u64,
        released: u32,
        best: &mut HashMap<u64, u32>,
    ) {
        let entry = best.entry(opened).or_insert(0);
        *entry = (*entry).max(released);

        for (next, &rate) in self.rates.iter().enumerate() {
            if opened & (1 << next) != 0 {
                continue;
            }
            let cost = self.travel[at][next].saturating_add(1);
            if cost < left {
                let remaining = left - cost;
                let released = released + remaining * rate;
                self.explore(next, remaining, opened | 1 << next, released, best);
            }
        }
    }
}

fn build_network(lines: &[(&str, u32, Vec<&str>)]) -> anyhow::Result<Network> {
    let index: HashMap<&str, usize> = lines.iter().enumerate().map(|(i, l)| (l.0, i)).collect();
    let tunnels = lines
        .iter()
        .map(|(name, _, targets)| {
            targets
                .iter()
                .map(|t| {
                    index
                        .get(t)
                        .copied()
                        .ok_or_else(|| anyhow!("{name} leads to unknown valve {t}"))
                })
                .collect::<anyhow::Result<Vec<usize>>>()
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    let start = *index.get(START).ok_or_else(|| anyhow!("no valve {START}"))?;
    let mut relevant: Vec<usize> = (0..lines.len()).filter(|&i| lines[i].1 > 0).collect();
    if relevant.len() > 63 {
        return Err(anyhow!("too many working valves: {}", relevant.len()));
    }
    relevant.push(start);

    let distances_from = |from: usize| {
        let mut dist = vec![u32::MAX; lines.len()];
        dist[from] = 0;
        let mut queue = VecDeque::from([from]);
        while let Some(cur) = queue.pop_front() {
            for &next in &tunnels[cur] {
                if dist[next] == u32::MAX {
                    dist[next] = dist[cur] + 1;
                    queue.push_back(next);
                }
            }
        }
        dist
    };

    let travel = relevant
        .iter()
        .map(|&from| {
            let dist = distances_from(from);
            relevant.iter().map(|&to| dist[to]).collect()
        })
        .collect();

    Ok(Network {
        rates: relevant[..relevant.len() - 1].iter().map(|&i| lines[i].1).collect(),
        travel,
    })
}

impl AocParser for Solver {
    type SharedData<'a> = Network;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let re = Regex::new(r"^Valve (\w+) has flow rate=(\d+); tunnels? leads? to valves? (.+)$")
            .map_err(|e| invalid(e.into()))?;
        let lines = parse_lines(input, |line| {
            let caps = re
                .captures(line.trim())
                .ok_or_else(|| anyhow!("expected a valve description"))?;
            let (Some(name), Some(rate), Some(targets)) = (caps.get(1), caps.get(2), caps.get(3))
            else {
                return Err(anyhow!("incomplete valve description"));
            };
            Ok((
                name.as_str(),
                rate.as_str().parse()?,
                targets.as_str().split(", ").collect(),
            ))
        })?;
        build_network(&lines).map_err(invalid)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let best = shared.best_per_valve_set(30).into_values().max().unwrap_or(0);
        Ok(best.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut routes: Vec<(u64, u32)> = shared.best_per_valve_set(26).into_iter().collect();
        routes.sort_unstable_by(|a, b| b.1.cmp(&a.1));

        let mut best = 0;
        for (i, &(mine, released)) in routes.iter().enumerate() {
            // Any partner route releases at most as much as this one
            if released * 2 < best {
                break;
            }
            for &(theirs, other) in &routes[i + 1..] {
                if mine & theirs == 0 {
                    best = best.max(released + other);
                }
            }
        }
        Ok(best.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    #[test]
    fn test_network_compression() {
        let network = Solver::parse(EXAMPLE_INPUT).unwrap();
        assert_eq!(network.rates, vec![13, 2, 20, 3, 22, 21]);
        // AA to HH: AA -> DD -> EE -> FF -> GG -> HH
        assert_eq!(network.travel[network.start()][4], 5);
    }

    #[test]
    fn test_examples() {
        let mut shared = Solver::parse(EXAMPLE_INPUT).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "1651");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "1707");
    }

    #[test]
    fn test_rejects_unknown_tunnel() {
        let input = "Valve AA has flow rate=0; tunnel leads to valve ZZ";
        assert!(Solver::parse(input).is_err());
        assert!(Solver::parse("Valve BB has flow rate=1; tunnel leads to valve BB").is_err());
    }
}
