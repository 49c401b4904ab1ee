use aoc_solver::{AocParser, Example, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse::{parse_lines, split_exact};

const EXAMPLE_INPUT: &str = "2,2,2\n1,2,2\n3,2,2\n2,1,2\n2,3,2\n2,2,1\n2,2,3\n2,2,4\n2,2,6\n1,2,5\n3,2,5\n2,1,5\n2,3,5";

const EXAMPLES: &[Example] = &[
    Example::new(1, EXAMPLE_INPUT, "64"),
    Example::new(2, EXAMPLE_INPUT, "58"),
];

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, examples = EXAMPLES)]
#[aoc(year = 2022, day = 18, tags = ["2022"])]
pub struct Solver;

type Cube = [usize; 3];

const MAX_EXTENT: usize = 256;

/// Lava droplet on a dense grid with one empty layer of padding on every side
#[derive(Debug)]
pub struct Droplet {
    cubes: Vec<Cube>,
    size: usize,
    lava: Vec<bool>,
}

impl Droplet {
    fn new(raw: Vec<Cube>) -> Result<Self, ParseError> {
        // Shift by one so coordinate 0 has padding below it
        let cubes: Vec<Cube> = raw.into_iter().map(|c| c.map(|v| v + 1)).collect();
        let size = cubes.iter().flatten().max().map_or(1, |m| m + 2);
        if size > MAX_EXTENT {
            return Err(ParseError::InvalidFormat(format!(
                "coordinates exceed {}",
                MAX_EXTENT - 3
            )));
        }
        let mut droplet = Droplet {
            cubes,
            size,
            lava: vec![false; size * size * size],
        };
        for i in 0..droplet.cubes.len() {
            let idx = droplet.index(droplet.cubes[i]);
            droplet.lava[idx] = true;
        }
        Ok(droplet)
    }

    fn index(&self, [x, y, z]: Cube) -> usize {
        (z * self.size + y) * self.size + x
    }

    fn neighbours(&self, cube: Cube) -> impl Iterator<Item = Cube> + '_ {
        (0..3).flat_map(move |axis| {
            let mut down = cube;
            let mut up = cube;
            let has_down = cube[axis] > 0;
            down[axis] = down[axis].saturating_sub(1);
            up[axis] += 1;
            [has_down.then_some(down), (up[axis] < self.size).then_some(up)]
        })
        .flatten()
    }

    fn surface_area(&self) -> usize {
        self.cubes
            .iter()
            .flat_map(|&c| self.neighbours(c))
            .filter(|&n| !self.lava[self.index(n)])
            .count()
    }

    /// Faces reachable by flood-filling the air from the padded corner
    fn exterior_surface_area(&self) -> usize {
        let mut outside = vec![false; self.lava.len()];
        let mut stack = vec![[0, 0, 0]];
        outside[0] = true;
        let mut faces = 0;

        while let Some(cube) = stack.pop() {
            for next in self.neighbours(cube) {
                let idx = self.index(next);
                if self.lava[idx] {
                    faces += 1;
                } else if !outside[idx] {
                    outside[idx] = true;
                    stack.push(next);
                }
            }
        }
        faces
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Droplet;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let cubes = parse_lines(input, |line| {
            let [x, y, z] = split_exact(line.trim(), ",")?;
            Ok([x.parse()?, y.parse()?, z.parse()?])
        })?;
        Droplet::new(cubes)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.surface_area().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.exterior_surface_area().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    #[test]
    fn test_two_adjacent_cubes() {
        let droplet = Solver::parse("1,1,1\n2,1,1").unwrap();
        assert_eq!(droplet.surface_area(), 10);
        assert_eq!(droplet.exterior_surface_area(), 10);
    }

    #[test]
    fn test_cube_at_origin() {
        let droplet = Solver::parse("0,0,0").unwrap();
        assert_eq!(droplet.size, 3);
        assert_eq!(droplet.exterior_surface_area(), 6);
    }

    #[test]
    fn test_examples() {
        let mut shared = Solver::parse(EXAMPLE_INPUT).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "64");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "58");
    }

    #[test]
    fn test_rejects_negative_coordinates() {
        assert!(Solver::parse("1,-1,2").is_err());
        assert!(Solver::parse("1,2").is_err());
        assert!(Solver::parse("1,2,900").is_err());
    }
}
