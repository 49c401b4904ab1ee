use aoc_solver::{AocParser, Example, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse::invalid;
use crate::utils::time_grid::{BasinMap, ObstacleField, Position, shortest_path};

const EXAMPLE_INPUT: &str = "\
#.######
#>>.<^<#
#.<..<<#
#>v.><>#
#<^v^^>#
######.#";

const EXAMPLES: &[Example] = &[
    Example::new(1, EXAMPLE_INPUT, "18"),
    Example::new(2, EXAMPLE_INPUT, "54"),
];

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, examples = EXAMPLES)]
#[aoc(year = 2022, day = 24, tags = ["2022"])]
pub struct Solver;

/// Total time to visit `legs` in order, each leg departing when the previous one arrives
fn trip(map: &BasinMap, legs: &[Position]) -> Result<u32, SolveError> {
    legs.windows(2).try_fold(0, |elapsed, leg| {
        let taken = shortest_path(&map.field, leg[0], leg[1], elapsed).ok_or_else(|| {
            SolveError::NoSolution(format!(
                "no path from {:?} to {:?} leaving at minute {elapsed}",
                leg[0], leg[1]
            ))
        })?;
        Ok(elapsed + taken)
    })
}

impl AocParser for Solver {
    type SharedData<'a> = BasinMap;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        ObstacleField::from_map(input).map_err(invalid)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(trip(shared, &[shared.entrance, shared.exit])?.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let legs = [shared.entrance, shared.exit, shared.entrance, shared.exit];
        Ok(trip(shared, &legs)?.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    #[test]
    fn test_examples() {
        let mut shared = Solver::parse(EXAMPLE_INPUT).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "18");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "54");
    }

    #[test]
    fn test_blocked_valley_has_no_solution() {
        // A vertical blizzard column sits on the only route out of the entrance on every step
        let mut shared = Solver::parse("#.#\n#v#\n#.#").unwrap();
        assert_eq!(shared.field.period(), 1);
        assert!(matches!(
            Solver::solve_part(&mut shared, 1),
            Err(SolveError::NoSolution(_))
        ));
    }

    #[test]
    fn test_rejects_malformed_map() {
        assert!(matches!(
            Solver::parse("#.##\n#.x#\n##.#"),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(Solver::parse("#..#\n#..#\n##.#").is_err());
    }
}
