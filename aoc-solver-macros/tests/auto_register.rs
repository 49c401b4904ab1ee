use aoc_solver::{
    AocParser, AocSolver, AutoRegisterSolver, Example, ParseError, PartSolver, SolveError,
    SolverRegistryBuilder,
};

const EXAMPLES: &[Example] = &[Example::new(1, "5\n6\n7", "18"), Example::new(2, "5\n6\n7", "210")];

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, examples = EXAMPLES)]
#[aoc(year = 2023, day = 20, tags = ["test", "combined"])]
struct Combined;

impl AocParser for Combined {
    type SharedData<'a> = Vec<i64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .lines()
            .map(|line| {
                line.trim()
                    .parse()
                    .map_err(|_| ParseError::InvalidFormat(format!("Expected integer: {line}")))
            })
            .collect()
    }
}

impl PartSolver<1> for Combined {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().sum::<i64>().to_string())
    }
}

impl PartSolver<2> for Combined {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().product::<i64>().to_string())
    }
}

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(year = 2024, day = 1)]
struct Untagged;

impl AocParser for Untagged {
    type SharedData<'a> = &'a str;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(input.trim())
    }
}

impl PartSolver<1> for Untagged {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.chars().rev().collect())
    }
}

#[test]
fn test_all_plugins_register() {
    let registry = SolverRegistryBuilder::new()
        .register_all_plugins()
        .expect("Failed to register plugins")
        .build();

    assert_eq!(registry.storage().len(), 2);

    let info = registry.storage().get_info(2023, 20).unwrap();
    assert_eq!(info.parts, 2);
    assert_eq!(info.examples.len(), 2);

    let mut solver = registry.create_solver(2023, 20, "5\n6\n7").unwrap();
    assert_eq!(solver.solve(1).unwrap().answer, "18");
    assert_eq!(solver.solve(2).unwrap().answer, "210");

    let mut solver = registry.create_solver(2024, 1, "abc\n").unwrap();
    assert_eq!(solver.solve(1).unwrap().answer, "cba");
}

#[test]
fn test_registered_examples_pass() {
    let registry = SolverRegistryBuilder::new()
        .register_all_plugins()
        .unwrap()
        .build();

    assert_eq!(registry.check_examples(2023, 20, None).unwrap(), 2);
    assert_eq!(registry.check_examples(2023, 20, Some(2)).unwrap(), 1);
    assert_eq!(registry.check_examples(2024, 1, None).unwrap(), 0);
}

#[test]
fn test_tag_filter_selects_plugins() {
    let registry = SolverRegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.tags.contains(&"combined"))
        .unwrap()
        .build();

    assert!(registry.storage().contains(2023, 20));
    assert!(!registry.storage().contains(2024, 1));
}

#[test]
fn test_plugins_cannot_register_twice() {
    let result = SolverRegistryBuilder::new()
        .register_all_plugins()
        .unwrap()
        .register_all_plugins();

    assert!(result.is_err());
}
