//! Grids whose obstacles move periodically, and shortest paths through them
//!
//! ```
//! use aoc_solutions::utils::time_grid::{ObstacleField, shortest_path};
//!
//! let map = ObstacleField::from_map("#.###\n#...#\n#...#\n###.#").unwrap();
//! assert_eq!(map.field.period(), 6);
//! assert_eq!(shortest_path(&map.field, map.entrance, map.exit, 0), Some(5));
//! ```

mod field;
mod search;

pub use field::{BasinMap, Direction, FieldError, Frame, ObstacleField, Position};
pub use search::shortest_path;

#[cfg(test)]
mod tests;
