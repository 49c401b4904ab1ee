//! Periodic obstacle field over a walled rectangle

use thiserror::Error;

/// A cell in the bounded rectangle, `(0, 0)` being the top-left wall corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    pub fn manhattan(self, other: Position) -> usize {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

/// Direction an obstacle marker travels, one cell per time-step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn from_marker(c: char) -> Option<Self> {
        match c {
            '^' => Some(Direction::Up),
            'v' => Some(Direction::Down),
            '<' => Some(Direction::Left),
            '>' => Some(Direction::Right),
            _ => None,
        }
    }

    pub const fn bit(self) -> u8 {
        match self {
            Direction::Up => 0b0001,
            Direction::Down => 0b0010,
            Direction::Left => 0b0100,
            Direction::Right => 0b1000,
        }
    }

    const fn delta(self) -> (i64, i64) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("field must be at least 3x3 including walls, got {width}x{height}")]
    TooSmall { width: usize, height: usize },
    #[error("marker at {0:?} is outside the interior")]
    MarkerOutsideInterior(Position),
    #[error("opening at {0:?} is not on the border wall")]
    OpeningNotOnBorder(Position),
}

/// Occupancy of every cell at one time-step
///
/// Each cell holds a bitmask of the [`Direction`]s of markers currently on it;
/// zero means free.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: usize,
    cells: Vec<u8>,
}

impl Frame {
    fn empty(width: usize, height: usize) -> Self {
        Self {
            width,
            cells: vec![0; width * height],
        }
    }

    pub fn markers_at(&self, pos: Position) -> u8 {
        if pos.x >= self.width {
            return 0;
        }
        self.cells.get(pos.y * self.width + pos.x).copied().unwrap_or(0)
    }

    pub fn is_occupied(&self, pos: Position) -> bool {
        self.markers_at(pos) != 0
    }

    /// Blocked positions in row-major order
    pub fn iter_occupied(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, mask)| **mask != 0)
            .map(|(i, _)| Position::new(i % self.width, i / self.width))
    }
}

/// Obstacle markers moving inside a one-cell-thick wall, wrapping at the interior edge
///
/// Every distinct configuration is computed once at construction; lookups index
/// them by `t mod period`.
#[derive(Debug, Clone)]
pub struct ObstacleField {
    width: usize,
    height: usize,
    openings: Vec<Position>,
    frames: Vec<Frame>,
}

impl ObstacleField {
    /// Build a field of `width`×`height` cells including the wall
    ///
    /// `openings` are border cells that may be entered (entrance and exit).
    pub fn new(
        width: usize,
        height: usize,
        markers: impl IntoIterator<Item = (Position, Direction)>,
        openings: impl IntoIterator<Item = Position>,
    ) -> Result<Self, FieldError> {
        if width < 3 || height < 3 {
            return Err(FieldError::TooSmall { width, height });
        }
        let inner_w = width - 2;
        let inner_h = height - 2;

        let markers: Vec<(Position, Direction)> = markers.into_iter().collect();
        if let Some((pos, _)) = markers
            .iter()
            .find(|(p, _)| p.x == 0 || p.y == 0 || p.x > inner_w || p.y > inner_h)
        {
            return Err(FieldError::MarkerOutsideInterior(*pos));
        }

        let openings: Vec<Position> = openings.into_iter().collect();
        if let Some(pos) = openings.iter().find(|p| {
            let on_border = p.x == 0 || p.y == 0 || p.x == width - 1 || p.y == height - 1;
            !on_border || p.x >= width || p.y >= height
        }) {
            return Err(FieldError::OpeningNotOnBorder(*pos));
        }

        let period = lcm(inner_w, inner_h);
        let frames = (0..period)
            .map(|t| {
                let mut frame = Frame::empty(width, height);
                for &(pos, dir) in &markers {
                    let (dx, dy) = dir.delta();
                    let x = (pos.x as i64 - 1 + dx * t as i64).rem_euclid(inner_w as i64) + 1;
                    let y = (pos.y as i64 - 1 + dy * t as i64).rem_euclid(inner_h as i64) + 1;
                    frame.cells[y as usize * width + x as usize] |= dir.bit();
                }
                frame
            })
            .collect();

        Ok(Self {
            width,
            height,
            openings,
            frames,
        })
    }

    /// Parse a map drawn with `#` walls, `.` free cells and `^v<>` markers
    ///
    /// The single gap in the top wall is the entrance, the one in the bottom wall the exit.
    pub fn from_map(input: &str) -> anyhow::Result<BasinMap> {
        let rows: Vec<&[u8]> = input
            .lines()
            .map(str::trim_end)
            .filter(|l| !l.is_empty())
            .map(str::as_bytes)
            .collect();

        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.len());
        if let Some(y) = rows.iter().position(|r| r.len() != width) {
            anyhow::bail!("row {} has width {}, expected {width}", y + 1, rows[y].len());
        }
        if height < 3 || width < 3 {
            anyhow::bail!("map must be at least 3x3, got {width}x{height}");
        }

        let gap = |row: &[u8], name: &str| -> anyhow::Result<usize> {
            let gaps: Vec<usize> = (1..width - 1).filter(|&x| row[x] == b'.').collect();
            match gaps.as_slice() {
                [x] => Ok(*x),
                _ => anyhow::bail!("{name} wall must have exactly one gap, found {}", gaps.len()),
            }
        };
        let entrance = Position::new(gap(rows[0], "top")?, 0);
        let exit = Position::new(gap(rows[height - 1], "bottom")?, height - 1);

        let mut markers = Vec::new();
        for (y, row) in rows.iter().enumerate().take(height - 1).skip(1) {
            for (x, &b) in row.iter().enumerate() {
                let on_wall = x == 0 || x == width - 1;
                match (b, on_wall) {
                    (b'#', true) | (b'.', false) => {}
                    (_, false) => {
                        let dir = Direction::from_marker(b as char).ok_or_else(|| {
                            anyhow::anyhow!("unexpected {:?} at ({x}, {y})", b as char)
                        })?;
                        markers.push((Position::new(x, y), dir));
                    }
                    (_, true) => anyhow::bail!("expected wall at ({x}, {y})"),
                }
            }
        }

        let field = ObstacleField::new(width, height, markers, [entrance, exit])?;
        Ok(BasinMap {
            field,
            entrance,
            exit,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of time-steps after which the configuration repeats
    pub fn period(&self) -> usize {
        self.frames.len()
    }

    /// Occupancy at time-step `t`
    pub fn occupied_at(&self, t: u32) -> &Frame {
        self.frame_at_phase(t as usize % self.period())
    }

    pub(super) fn frame_at_phase(&self, phase: usize) -> &Frame {
        &self.frames[phase]
    }

    /// Whether a token may stand on `pos` when no marker covers it
    pub fn is_passable(&self, pos: Position) -> bool {
        let interior =
            pos.x >= 1 && pos.y >= 1 && pos.x <= self.width - 2 && pos.y <= self.height - 2;
        interior || self.openings.contains(&pos)
    }

    pub(super) fn cell_index(&self, pos: Position) -> usize {
        pos.y * self.width + pos.x
    }

    pub(super) fn cell_count(&self) -> usize {
        self.width * self.height
    }
}

/// A parsed map: the field plus its entrance and exit openings
#[derive(Debug, Clone)]
pub struct BasinMap {
    pub field: ObstacleField,
    pub entrance: Position,
    pub exit: Position,
}

fn gcd(a: usize, b: usize) -> usize {
    if b == 0 { a } else { gcd(b, a % b) }
}

fn lcm(a: usize, b: usize) -> usize {
    a / gcd(a, b) * b
}
