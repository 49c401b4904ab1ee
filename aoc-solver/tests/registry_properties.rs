//! Registry lookup, creation and example self-check behaviour

use aoc_solver::{
    AocParser, AocSolver, Example, ParseError, PartSolver, RegistrationError, SolveError,
    SolverError, SolverRegistryBuilder,
};
use proptest::prelude::*;

const SUM_EXAMPLES: &[Example] = &[
    Example::new(1, "1\n2\n3", "6"),
    Example::new(2, "1\n2\n3", "3"),
    Example::new(1, "10\n-4", "6"),
];

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2, examples = SUM_EXAMPLES)]
struct SumMax;

impl AocParser for SumMax {
    type SharedData<'a> = Vec<i64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .lines()
            .enumerate()
            .map(|(i, line)| {
                line.parse().map_err(|_| {
                    ParseError::InvalidFormat(format!("line {}: expected integer", i + 1))
                })
            })
            .collect()
    }
}

impl PartSolver<1> for SumMax {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().sum::<i64>().to_string())
    }
}

impl PartSolver<2> for SumMax {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .iter()
            .max()
            .map(|m| m.to_string())
            .ok_or_else(|| SolveError::NoSolution("empty input".into()))
    }
}

const WRONG_EXAMPLES: &[Example] = &[Example::new(1, "1\n2", "4")];

#[derive(AocSolver)]
#[aoc_solver(max_parts = 1, examples = WRONG_EXAMPLES)]
struct Miscounted;

impl AocParser for Miscounted {
    type SharedData<'a> = Vec<&'a str>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(input.lines().collect())
    }
}

impl PartSolver<1> for Miscounted {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.len().to_string())
    }
}

#[test]
fn test_create_and_solve() {
    let registry = SolverRegistryBuilder::new()
        .register::<SumMax>(2022, 1)
        .unwrap()
        .build();

    let mut solver = registry.create_solver(2022, 1, "4\n9\n-2").unwrap();
    assert_eq!(solver.year(), 2022);
    assert_eq!(solver.day(), 1);
    assert_eq!(solver.parts(), 2);
    assert!(solver.parse_duration() >= chrono::TimeDelta::zero());

    let result = solver.solve(1).unwrap();
    assert_eq!(result.answer, "11");
    assert!(result.solve_end >= result.solve_start);
    assert_eq!(solver.solve(2).unwrap().answer, "9");
    assert!(matches!(
        solver.solve(3),
        Err(SolveError::PartOutOfRange(3))
    ));
}

#[test]
fn test_duplicate_registration_rejected() {
    let result = SolverRegistryBuilder::new()
        .register::<SumMax>(2022, 1)
        .unwrap()
        .register::<Miscounted>(2022, 1);

    assert!(matches!(
        result,
        Err(RegistrationError::DuplicateSolver(2022, 1))
    ));
}

#[test]
fn test_lookup_errors() {
    let registry = SolverRegistryBuilder::new()
        .register::<SumMax>(2022, 1)
        .unwrap()
        .build();

    assert!(matches!(
        registry.create_solver(2022, 2, ""),
        Err(SolverError::NotFound(2022, 2))
    ));
    assert!(matches!(
        registry.create_solver(2022, 26, ""),
        Err(SolverError::InvalidYearDay(2022, 26))
    ));
    match registry.create_solver(2022, 1, "1\nx") {
        Err(SolverError::ParseError(ParseError::InvalidFormat(msg))) => {
            assert!(msg.contains("line 2"), "{msg}")
        }
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected parse failure"),
    }
}

#[test]
fn test_storage_info_is_ordered() {
    let registry = SolverRegistryBuilder::new()
        .register::<Miscounted>(2022, 5)
        .unwrap()
        .register::<SumMax>(2021, 7)
        .unwrap()
        .build();

    let infos: Vec<_> = registry.storage().iter_info().collect();
    assert_eq!(infos.len(), 2);
    assert_eq!((infos[0].year, infos[0].day, infos[0].parts), (2021, 7, 2));
    assert_eq!((infos[1].year, infos[1].day, infos[1].parts), (2022, 5, 1));
    assert_eq!(infos[0].examples, SUM_EXAMPLES);
}

#[test]
fn test_check_examples() {
    let registry = SolverRegistryBuilder::new()
        .register::<SumMax>(2022, 1)
        .unwrap()
        .register::<Miscounted>(2022, 2)
        .unwrap()
        .build();

    assert_eq!(registry.check_examples(2022, 1, None).unwrap(), 3);
    assert_eq!(registry.check_examples(2022, 1, Some(1)).unwrap(), 2);
    assert_eq!(registry.check_examples(2022, 1, Some(2)).unwrap(), 1);

    match registry.check_examples(2022, 2, None) {
        Err(SolverError::ExampleMismatch {
            year,
            day,
            part,
            expected,
            actual,
        }) => {
            assert_eq!((year, day, part), (2022, 2, 1));
            assert_eq!(expected, "4");
            assert_eq!(actual, "2");
        }
        other => panic!("expected mismatch, got {other:?}"),
    }

    assert!(matches!(
        registry.check_examples(2022, 3, None),
        Err(SolverError::NotFound(2022, 3))
    ));
}

proptest! {
    #[test]
    fn prop_valid_year_day_registers(year in 2015u16..2035, day in 1u8..=25) {
        let registry = SolverRegistryBuilder::new()
            .register::<SumMax>(year, day)
            .unwrap()
            .build();

        prop_assert!(registry.storage().contains(year, day));
        prop_assert_eq!(registry.storage().len(), 1);
        let info = registry.storage().get_info(year, day).unwrap();
        prop_assert_eq!((info.year, info.day), (year, day));
    }

    #[test]
    fn prop_out_of_range_rejected(
        (year, day) in prop_oneof![
            (0u16..2015, 1u8..=25),
            (2035u16..=u16::MAX, 1u8..=25),
            (2015u16..2035, prop_oneof![Just(0u8), 26u8..=u8::MAX]),
        ]
    ) {
        let result = SolverRegistryBuilder::new().register::<SumMax>(year, day);
        prop_assert!(matches!(result, Err(RegistrationError::InvalidYearDay(y, d)) if y == year && d == day));
    }
}
