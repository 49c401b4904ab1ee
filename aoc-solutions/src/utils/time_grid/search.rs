//! Breadth-first search over (position, time) states in an [`ObstacleField`]

use std::collections::VecDeque;

use super::field::{ObstacleField, Position};

/// Minimum number of time-steps to walk from `start` to `goal`, departing at `start_time`
///
/// Each step the token moves to an orthogonal neighbour or waits, and may only end
/// the step on a passable cell that is free at the new time. Visited states are
/// keyed by `(position, time mod period)`, which bounds the search to
/// `cells × period` states. Returns `None` when either endpoint is not passable
/// or the goal cannot be reached.
pub fn shortest_path(
    field: &ObstacleField,
    start: Position,
    goal: Position,
    start_time: u32,
) -> Option<u32> {
    if !field.is_passable(start) || !field.is_passable(goal) {
        return None;
    }
    if start == goal {
        return Some(0);
    }

    let period = field.period();
    let cells = field.cell_count();
    let start_phase = start_time as usize % period;
    let mut visited = vec![false; cells * period];
    visited[start_phase * cells + field.cell_index(start)] = true;

    let mut queue = VecDeque::from([(start, 0u32)]);
    while let Some((pos, elapsed)) = queue.pop_front() {
        let phase = (start_phase + elapsed as usize + 1) % period;
        let frame = field.frame_at_phase(phase);

        for next in std::iter::once(pos).chain(neighbours(pos)) {
            if !field.is_passable(next) || frame.is_occupied(next) {
                continue;
            }
            if next == goal {
                return Some(elapsed + 1);
            }
            let key = phase * cells + field.cell_index(next);
            if !visited[key] {
                visited[key] = true;
                queue.push_back((next, elapsed + 1));
            }
        }
    }

    None
}

fn neighbours(pos: Position) -> impl Iterator<Item = Position> {
    [
        pos.y.checked_sub(1).map(|y| Position::new(pos.x, y)),
        Some(Position::new(pos.x, pos.y + 1)),
        pos.x.checked_sub(1).map(|x| Position::new(x, pos.y)),
        Some(Position::new(pos.x + 1, pos.y)),
    ]
    .into_iter()
    .flatten()
}
