//! Every registered solution reproduces its published example answers

use aoc_solver::SolverRegistryBuilder;
use aoc_solutions as _;

fn registry() -> aoc_solver::SolverRegistry {
    SolverRegistryBuilder::new()
        .register_all_plugins()
        .expect("plugins register without conflicts")
        .build()
}

#[test]
fn test_all_days_registered() {
    let registry = registry();
    let storage = registry.storage();

    for day in 1..=8 {
        assert!(storage.contains(2021, day), "2021 day {day} missing");
    }
    for day in 1..=24 {
        assert!(storage.contains(2022, day), "2022 day {day} missing");
    }
    assert_eq!(storage.len(), 32);
    assert!(storage.iter_info().all(|info| info.parts == 2));
}

#[test]
fn test_examples_match() {
    let registry = registry();
    let infos: Vec<_> = registry.storage().iter_info().collect();

    for info in infos {
        let checked = registry
            .check_examples(info.year, info.day, None)
            .unwrap_or_else(|e| panic!("{}/{:02}: {e}", info.year, info.day));
        assert_eq!(checked, info.examples.len());
        if (info.year, info.day) != (2022, 15) {
            assert!(checked >= 2, "{}/{:02} has no examples", info.year, info.day);
        }
    }
}

#[test]
fn test_tag_filter_selects_one_year() {
    let registry = SolverRegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.tags.contains(&"2021"))
        .unwrap()
        .build();

    assert_eq!(registry.storage().len(), 8);
    assert!(registry.storage().iter_info().all(|info| info.year == 2021));
}
