use aoc_solver::{AocParser, AocSolver, Example, ParseError, PartSolver, SolveError, Solver};

fn parse_numbers(input: &str) -> Result<Vec<i32>, ParseError> {
    input
        .lines()
        .map(|line| {
            line.trim()
                .parse::<i32>()
                .map_err(|_| ParseError::InvalidFormat(format!("Expected integer: {line}")))
        })
        .collect()
}

#[derive(AocSolver)]
#[aoc_solver(max_parts = 1)]
struct SinglePart;

impl AocParser for SinglePart {
    type SharedData<'a> = Vec<i32>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        parse_numbers(input)
    }
}

impl PartSolver<1> for SinglePart {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().sum::<i32>().to_string())
    }
}

#[test]
fn test_single_part_dispatch() {
    assert_eq!(SinglePart::PARTS, 1);
    assert!(SinglePart::EXAMPLES.is_empty());

    let mut shared = SinglePart::parse("1\n2\n3").unwrap();
    assert_eq!(SinglePart::solve_part(&mut shared, 1).unwrap(), "6");
    assert!(matches!(
        SinglePart::solve_part(&mut shared, 2),
        Err(SolveError::PartNotImplemented(2))
    ));
}

#[derive(Debug)]
struct Tally {
    numbers: Vec<i32>,
    sum: Option<i32>,
}

#[derive(AocSolver)]
#[aoc_solver(max_parts = 3)]
struct Dependent;

impl AocParser for Dependent {
    type SharedData<'a> = Tally;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(Tally {
            numbers: parse_numbers(input)?,
            sum: None,
        })
    }
}

impl PartSolver<1> for Dependent {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let sum = shared.numbers.iter().sum();
        shared.sum = Some(sum);
        Ok(sum.to_string())
    }
}

impl PartSolver<2> for Dependent {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let sum = shared
            .sum
            .ok_or_else(|| SolveError::InvariantViolation("part 1 has not run".into()))?;
        Ok((sum * 2).to_string())
    }
}

impl PartSolver<3> for Dependent {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .numbers
            .iter()
            .max()
            .map(|m| m.to_string())
            .ok_or_else(|| SolveError::NoSolution("no numbers".into()))
    }
}

#[test]
fn test_parts_share_mutable_state() {
    let mut shared = Dependent::parse("4\n5\n6").unwrap();

    assert!(matches!(
        Dependent::solve_part(&mut shared, 2),
        Err(SolveError::InvariantViolation(_))
    ));
    assert_eq!(Dependent::solve_part(&mut shared, 1).unwrap(), "15");
    assert_eq!(Dependent::solve_part(&mut shared, 2).unwrap(), "30");
    assert_eq!(Dependent::solve_part(&mut shared, 3).unwrap(), "6");
}

#[test]
fn test_error_from_part_propagates() {
    let mut shared = Dependent::parse("").unwrap();
    assert!(matches!(
        Dependent::solve_part(&mut shared, 3),
        Err(SolveError::NoSolution(_))
    ));
}

const WORD_EXAMPLES: &[Example] = &[
    Example::new(1, "alpha beta\ngamma", "3"),
    Example::new(2, "alpha beta\ngamma", "gamma"),
];

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2, examples = WORD_EXAMPLES)]
struct Words;

impl AocParser for Words {
    type SharedData<'a> = Vec<&'a str>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(input.split_whitespace().collect())
    }
}

impl PartSolver<1> for Words {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.len().to_string())
    }
}

impl PartSolver<2> for Words {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared.sort_unstable();
        shared
            .last()
            .map(|w| w.to_string())
            .ok_or_else(|| SolveError::NoSolution("no words".into()))
    }
}

#[test]
fn test_examples_attribute_and_borrowed_data() {
    assert_eq!(Words::EXAMPLES, WORD_EXAMPLES);

    for example in Words::EXAMPLES {
        let mut shared = Words::parse(example.input).unwrap();
        let answer = Words::solve_part(&mut shared, example.part).unwrap();
        assert!(example.matches(&answer), "part {}: {answer}", example.part);
    }
}
