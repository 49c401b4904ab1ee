use std::collections::{HashMap, VecDeque};

use anyhow::{anyhow, bail};
use aoc_solver::{AocParser, Example, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse::invalid;

const EXAMPLE_INPUT: &str = concat!(
    "        ...#\n",
    "        .#..\n",
    "        #...\n",
    "        ....\n",
    "...#.......#\n",
    "........#...\n",
    "..#....#....\n",
    "..........#.\n",
    "        ...#....\n",
    "        .....#..\n",
    "        .#......\n",
    "        ......#.\n",
    "\n",
    "10R5L5R10L4R5L5",
);

const EXAMPLES: &[Example] = &[
    Example::new(1, EXAMPLE_INPUT, "6032"),
    Example::new(2, EXAMPLE_INPUT, "5031"),
];

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, examples = EXAMPLES)]
#[aoc(year = 2022, day = 22, tags = ["2022"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tile {
    Void,
    Open,
    Wall,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Forward(u32),
    Left,
    Right,
}

/// Facing in password order: right, down, left, up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Facing(u8);

impl Facing {
    const ALL: [Facing; 4] = [Facing(0), Facing(1), Facing(2), Facing(3)];

    fn delta(self) -> (i64, i64) {
        [(1, 0), (0, 1), (-1, 0), (0, -1)][self.0 as usize]
    }

    fn turn(self, step: Step) -> Self {
        match step {
            Step::Left => Facing((self.0 + 3) % 4),
            Step::Right => Facing((self.0 + 1) % 4),
            Step::Forward(_) => self,
        }
    }

    fn is_horizontal(self) -> bool {
        self.0 % 2 == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Pose {
    x: usize,
    y: usize,
    facing: Facing,
}

#[derive(Debug)]
pub struct Board {
    tiles: Vec<Vec<Tile>>,
    width: usize,
    path: Vec<Step>,
}

impl Board {
    fn tile(&self, x: i64, y: i64) -> Tile {
        if x < 0 || y < 0 {
            return Tile::Void;
        }
        self.tiles
            .get(y as usize)
            .and_then(|row| row.get(x as usize))
            .copied()
            .unwrap_or(Tile::Void)
    }

    /// Follow the path; `wrap` maps a pose about to step into the void to the pose after wrapping
    fn walk(&self, wrap: impl Fn(Pose) -> Option<Pose>) -> Option<Pose> {
        let x = self.tiles.first()?.iter().position(|t| *t == Tile::Open)?;
        let mut pose = Pose {
            x,
            y: 0,
            facing: Facing(0),
        };

        for &step in &self.path {
            let Step::Forward(count) = step else {
                pose.facing = pose.facing.turn(step);
                continue;
            };
            for _ in 0..count {
                let (dx, dy) = pose.facing.delta();
                let (nx, ny) = (pose.x as i64 + dx, pose.y as i64 + dy);
                let next = match self.tile(nx, ny) {
                    Tile::Void => wrap(pose)?,
                    _ => Pose {
                        x: nx as usize,
                        y: ny as usize,
                        facing: pose.facing,
                    },
                };
                if self.tile(next.x as i64, next.y as i64) != Tile::Open {
                    break;
                }
                pose = next;
            }
        }
        Some(pose)
    }

    /// Re-enter from the far side of the current row or column
    fn wrap_flat(&self, pose: Pose) -> Option<Pose> {
        let (dx, dy) = pose.facing.delta();
        let (mut x, mut y) = (pose.x as i64, pose.y as i64);
        while self.tile(x - dx, y - dy) != Tile::Void {
            x -= dx;
            y -= dy;
        }
        Some(Pose {
            x: x as usize,
            y: y as usize,
            facing: pose.facing,
        })
    }
}

type Vec3 = [i32; 3];

fn neg(v: Vec3) -> Vec3 {
    v.map(|c| -c)
}

/// Orientation of one face once folded: where its map x and y axes point, and its outward normal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Frame {
    right: Vec3,
    down: Vec3,
    normal: Vec3,
}

impl Frame {
    fn direction(&self, facing: Facing) -> Vec3 {
        match facing.0 {
            0 => self.right,
            1 => self.down,
            2 => neg(self.right),
            _ => neg(self.down),
        }
    }

    /// Frame of the neighbouring face in `facing`, folded away from the viewer
    fn fold(&self, facing: Facing) -> Frame {
        let Frame {
            right,
            down,
            normal,
        } = *self;
        match facing.0 {
            0 => Frame { right: neg(normal), down, normal: right },
            1 => Frame { right, down: neg(normal), normal: down },
            2 => Frame { right: normal, down, normal: neg(right) },
            _ => Frame { right, down: normal, normal: neg(down) },
        }
    }
}

/// The map's six faces and their folded orientations
#[derive(Debug)]
struct Cube {
    size: usize,
    frames: HashMap<(usize, usize), Frame>,
    by_normal: HashMap<Vec3, (usize, usize)>,
}

impl Cube {
    fn fold(board: &Board) -> anyhow::Result<Self> {
        let cells = board
            .tiles
            .iter()
            .flatten()
            .filter(|t| **t != Tile::Void)
            .count();
        let size = (cells / 6).isqrt();
        if size == 0 || size * size * 6 != cells {
            bail!("{cells} tiles cannot cover a cube");
        }

        let present = |(fx, fy): (usize, usize)| {
            board.tile((fx * size) as i64, (fy * size) as i64) != Tile::Void
        };
        let start = (0..board.width.div_ceil(size))
            .map(|fx| (fx, 0))
            .find(|&f| present(f))
            .ok_or_else(|| anyhow!("empty top row"))?;

        let mut frames = HashMap::from([(
            start,
            Frame {
                right: [1, 0, 0],
                down: [0, 1, 0],
                normal: [0, 0, 1],
            },
        )]);
        let mut queue = VecDeque::from([start]);
        while let Some(face) = queue.pop_front() {
            let frame = frames[&face];
            for facing in Facing::ALL {
                let (dx, dy) = facing.delta();
                let (Some(fx), Some(fy)) = (
                    face.0.checked_add_signed(dx as isize),
                    face.1.checked_add_signed(dy as isize),
                ) else {
                    continue;
                };
                if !frames.contains_key(&(fx, fy)) && present((fx, fy)) {
                    frames.insert((fx, fy), frame.fold(facing));
                    queue.push_back((fx, fy));
                }
            }
        }

        let by_normal: HashMap<Vec3, (usize, usize)> =
            frames.iter().map(|(&face, frame)| (frame.normal, face)).collect();
        if frames.len() != 6 || by_normal.len() != 6 {
            bail!("the map does not fold into a cube");
        }
        Ok(Cube {
            size,
            frames,
            by_normal,
        })
    }

    /// Carry a pose stepping off its face over the cube edge onto the adjacent face
    fn wrap(&self, pose: Pose) -> Option<Pose> {
        let n = self.size;
        let face = (pose.x / n, pose.y / n);
        let (lx, ly) = (pose.x % n, pose.y % n);
        let from = self.frames.get(&face)?;

        let target = *self.by_normal.get(&from.direction(pose.facing))?;
        let to = self.frames.get(&target)?;

        // Position along the shared edge, measured along a fixed 3-D axis
        let (edge_axis, along) = if pose.facing.is_horizontal() {
            (from.down, ly)
        } else {
            (from.right, lx)
        };
        let facing = Facing::ALL
            .into_iter()
            .find(|&f| to.direction(f) == neg(from.normal))?;
        let tangent = if facing.is_horizontal() { to.down } else { to.right };
        let along = if tangent == edge_axis { along } else { n - 1 - along };

        let (x, y) = match facing.0 {
            0 => (0, along),
            1 => (along, 0),
            2 => (n - 1, along),
            _ => (along, n - 1),
        };
        Some(Pose {
            x: target.0 * n + x,
            y: target.1 * n + y,
            facing,
        })
    }
}

fn password(pose: Pose) -> usize {
    1000 * (pose.y + 1) + 4 * (pose.x + 1) + pose.facing.0 as usize
}

fn parse_path(line: &str) -> anyhow::Result<Vec<Step>> {
    let mut steps = Vec::new();
    let mut rest = line.trim();
    while !rest.is_empty() {
        let digits = rest.len() - rest.trim_start_matches(|c: char| c.is_ascii_digit()).len();
        if digits > 0 {
            steps.push(Step::Forward(rest[..digits].parse()?));
            rest = &rest[digits..];
            continue;
        }
        steps.push(match rest.as_bytes()[0] {
            b'L' => Step::Left,
            b'R' => Step::Right,
            _ => bail!("unexpected {:?} in path", &rest[..1]),
        });
        rest = &rest[1..];
    }
    Ok(steps)
}

impl AocParser for Solver {
    type SharedData<'a> = Board;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let (map, path) = input
            .split_once("\n\n")
            .ok_or_else(|| ParseError::MissingData("blank line before the path".into()))?;

        let tiles = map
            .lines()
            .map(|line| {
                line.chars()
                    .map(|c| match c {
                        ' ' => Ok(Tile::Void),
                        '.' => Ok(Tile::Open),
                        '#' => Ok(Tile::Wall),
                        _ => Err(anyhow!("unexpected {c:?} in map")),
                    })
                    .collect::<anyhow::Result<Vec<_>>>()
            })
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(invalid)?;
        let width = tiles.iter().map(Vec::len).max().unwrap_or(0);

        Ok(Board {
            tiles,
            width,
            path: parse_path(path).map_err(invalid)?,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .walk(|pose| shared.wrap_flat(pose))
            .map(|pose| password(pose).to_string())
            .ok_or_else(|| SolveError::NoSolution("no open tile on the top row".into()))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let cube = Cube::fold(shared).map_err(|e| SolveError::InvariantViolation(format!("{e:#}")))?;
        shared
            .walk(|pose| cube.wrap(pose))
            .map(|pose| password(pose).to_string())
            .ok_or_else(|| SolveError::InvariantViolation("walked off the folded cube".into()))
    }
}
