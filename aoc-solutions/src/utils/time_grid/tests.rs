use proptest::prelude::*;

use super::*;

const EXAMPLE: &str = "\
#.######
#>>.<^<#
#.<..<<#
#>v.><>#
#<^v^^>#
######.#";

fn example() -> BasinMap {
    ObstacleField::from_map(EXAMPLE).unwrap()
}

#[test]
fn test_example_period_and_entrances() {
    let map = example();
    assert_eq!(map.field.period(), 12);
    assert_eq!(map.entrance, Position::new(1, 0));
    assert_eq!(map.exit, Position::new(6, 5));
    assert_eq!(map.field.occupied_at(0).iter_occupied().count(), 19);
}

#[test]
fn test_example_single_trip() {
    let map = example();
    assert_eq!(shortest_path(&map.field, map.entrance, map.exit, 0), Some(18));
}

#[test]
fn test_example_round_trip() {
    let map = example();
    let there = shortest_path(&map.field, map.entrance, map.exit, 0).unwrap();
    let back = shortest_path(&map.field, map.exit, map.entrance, there).unwrap();
    let again = shortest_path(&map.field, map.entrance, map.exit, there + back).unwrap();
    assert_eq!((there, back, again), (18, 23, 13));
    assert_eq!(there + back + again, 54);
}

#[test]
fn test_markers_wrap_inside_walls() {
    let field = ObstacleField::new(
        5,
        4,
        [(Position::new(3, 1), Direction::Right)],
        [],
    )
    .unwrap();
    assert_eq!(field.period(), 6);
    assert!(field.occupied_at(0).is_occupied(Position::new(3, 1)));
    assert!(field.occupied_at(1).is_occupied(Position::new(1, 1)));
    assert!(field.occupied_at(2).is_occupied(Position::new(2, 1)));
    assert_eq!(
        field.occupied_at(1).markers_at(Position::new(1, 1)),
        Direction::Right.bit()
    );
}

#[test]
fn test_single_cell_interior_has_period() {
    let narrow = ObstacleField::new(3, 6, [], []).unwrap();
    assert_eq!(narrow.period(), 4);

    let tiny = ObstacleField::new(3, 3, [], []).unwrap();
    assert_eq!(tiny.period(), 1);
}

#[test]
fn test_permanently_blocked_corridor_has_no_path() {
    let field = ObstacleField::new(
        3,
        3,
        [(Position::new(1, 1), Direction::Right)],
        [Position::new(1, 0), Position::new(1, 2)],
    )
    .unwrap();
    assert!(field.occupied_at(7).is_occupied(Position::new(1, 1)));
    assert_eq!(
        shortest_path(&field, Position::new(1, 0), Position::new(1, 2), 0),
        None
    );
}

#[test]
fn test_goal_in_wall_is_unreachable() {
    let map = example();
    assert_eq!(
        shortest_path(&map.field, map.entrance, Position::new(0, 3), 0),
        None
    );
}

#[test]
fn test_start_off_grid_is_unreachable() {
    let map = example();
    assert_eq!(
        shortest_path(&map.field, Position::new(100, 5), map.exit, 11),
        None
    );
    assert_eq!(
        shortest_path(&map.field, Position::new(0, 2), map.exit, 0),
        None
    );
    let far = Position::new(40, 40);
    assert_eq!(shortest_path(&map.field, far, far, 0), None);
}

#[test]
fn test_invalid_fields_rejected() {
    assert_eq!(
        ObstacleField::new(2, 5, [], []).unwrap_err(),
        FieldError::TooSmall {
            width: 2,
            height: 5
        }
    );
    assert_eq!(
        ObstacleField::new(5, 5, [(Position::new(4, 2), Direction::Up)], []).unwrap_err(),
        FieldError::MarkerOutsideInterior(Position::new(4, 2))
    );
    assert_eq!(
        ObstacleField::new(5, 5, [], [Position::new(2, 2)]).unwrap_err(),
        FieldError::OpeningNotOnBorder(Position::new(2, 2))
    );
    assert!(ObstacleField::from_map("#.###\n#..#\n###.#").is_err());
    assert!(ObstacleField::from_map("#.###\n#.x.#\n###.#").is_err());
    assert!(ObstacleField::from_map("#####\n#...#\n###.#").is_err());
}

fn arb_field() -> impl Strategy<Value = ObstacleField> {
    (3usize..9, 3usize..9).prop_flat_map(|(w, h)| {
        prop::collection::vec((1..w - 1, 1..h - 1, 0usize..4), 0..12).prop_map(move |markers| {
            let markers = markers
                .into_iter()
                .map(|(x, y, d)| (Position::new(x, y), Direction::ALL[d]));
            ObstacleField::new(w, h, markers, [Position::new(1, 0), Position::new(w - 2, h - 1)])
                .unwrap()
        })
    })
}

proptest! {
    #[test]
    fn prop_occupancy_repeats_every_period(field in arb_field(), t in 0u32..200) {
        let period = field.period() as u32;
        prop_assert_eq!(field.occupied_at(t), field.occupied_at(t + period));
    }

    #[test]
    fn prop_search_is_idempotent(field in arb_field(), t in 0u32..50) {
        let start = Position::new(1, 0);
        let goal = Position::new(field.width() - 2, field.height() - 1);
        prop_assert_eq!(
            shortest_path(&field, start, goal, t),
            shortest_path(&field, start, goal, t)
        );
    }

    #[test]
    fn prop_phase_shift_invariance(field in arb_field(), t in 0u32..50, k in 1u32..4) {
        let start = Position::new(1, 0);
        let goal = Position::new(field.width() - 2, field.height() - 1);
        let period = field.period() as u32;
        prop_assert_eq!(
            shortest_path(&field, start, goal, t),
            shortest_path(&field, start, goal, t + k * period)
        );
    }

    #[test]
    fn prop_example_phase_shift(t in 0u32..100) {
        let map = example();
        prop_assert_eq!(
            shortest_path(&map.field, map.entrance, map.exit, t),
            shortest_path(&map.field, map.entrance, map.exit, t + 12)
        );
    }

    #[test]
    fn prop_empty_field_takes_manhattan_distance(
        w in 3usize..10,
        h in 3usize..10,
        a in (0usize..100, 0usize..100),
        b in (0usize..100, 0usize..100),
    ) {
        let field = ObstacleField::new(w, h, [], []).unwrap();
        let start = Position::new(1 + a.0 % (w - 2), 1 + a.1 % (h - 2));
        let goal = Position::new(1 + b.0 % (w - 2), 1 + b.1 % (h - 2));
        prop_assert_eq!(
            shortest_path(&field, start, goal, 0),
            Some(start.manhattan(goal) as u32)
        );
    }
}
