//! Tests for the DP cache module.

use std::cell::Cell;
use std::rc::Rc;

use proptest::prelude::*;

use super::*;

struct Fibonacci;

impl DpProblem<usize, u64> for Fibonacci {
    fn deps(&self, n: &usize) -> Vec<usize> {
        if *n <= 1 { vec![] } else { vec![n - 1, n - 2] }
    }

    fn compute(&self, n: &usize, deps: Vec<u64>) -> u64 {
        if *n <= 1 { *n as u64 } else { deps[0] + deps[1] }
    }
}

#[test]
fn test_fibonacci_linear_dependency_chain() {
    let cache = DpCache::new(VecBackend::new(), Fibonacci);

    assert_eq!(cache.get(&0).unwrap(), 0);
    assert_eq!(cache.get(&1).unwrap(), 1);
    assert_eq!(cache.get(&2).unwrap(), 1);
    assert_eq!(cache.get(&10).unwrap(), 55);
    assert_eq!(cache.get(&90).unwrap(), 2_880_067_194_370_816_120);
}

#[test]
fn test_diamond_dependency_memoization() {
    // A(0) depends on B(1) and C(2), both depend on D(3)
    struct Diamond {
        count: Rc<Cell<i32>>,
    }

    impl DpProblem<usize, i32> for Diamond {
        fn deps(&self, n: &usize) -> Vec<usize> {
            match *n {
                0 => vec![1, 2],
                1 | 2 => vec![3],
                _ => vec![],
            }
        }

        fn compute(&self, n: &usize, deps: Vec<i32>) -> i32 {
            self.count.set(self.count.get() + 1);
            match *n {
                0 => deps[0] + deps[1],
                1 => deps[0] * 2,
                2 => deps[0] * 3,
                _ => 10,
            }
        }
    }

    let compute_count = Rc::new(Cell::new(0));
    let cache = DpCache::new(
        VecBackend::new(),
        Diamond {
            count: compute_count.clone(),
        },
    );

    assert_eq!(cache.get(&0).unwrap(), 50);
    assert_eq!(compute_count.get(), 4);

    assert_eq!(cache.get(&0).unwrap(), 50);
    assert_eq!(cache.get(&3).unwrap(), 10);
    assert_eq!(compute_count.get(), 4);
}

#[test]
fn test_hashmap_backend_with_string_keys() {
    let cache = DpCache::new(
        HashMapBackend::new(),
        ClosureProblem::new(
            |s: &String| {
                if s.is_empty() {
                    vec![]
                } else {
                    vec![s[1..].to_string()]
                }
            },
            |_s: &String, deps: Vec<usize>| deps.first().map_or(0, |d| d + 1),
        ),
    );

    assert_eq!(cache.get(&"hello".to_string()).unwrap(), 5);
    assert_eq!(cache.get(&String::new()).unwrap(), 0);
}

#[test]
fn test_cycle_is_reported() {
    let cache = DpCache::new(
        HashMapBackend::new(),
        ClosureProblem::new(
            |n: &u32| match *n {
                0 => vec![1],
                1 => vec![2],
                2 => vec![0],
                _ => vec![],
            },
            |_n: &u32, deps: Vec<u32>| deps.iter().sum::<u32>() + 1,
        ),
    );

    assert_eq!(cache.get(&0), Err(DpError::Cycle));
    assert_eq!(cache.get(&7), Ok(1));
}

#[test]
fn test_backend_slots() {
    let mut backend: VecBackend<i32> = VecBackend::with_capacity(4);
    assert_eq!(backend.slot(&5), None);

    backend.set(5, Slot::InProgress);
    assert_eq!(backend.slot(&5), Some(&Slot::InProgress));
    assert_eq!(backend.slot(&2), None);

    backend.set(5, Slot::Ready(42));
    assert_eq!(backend.slot(&5), Some(&Slot::Ready(42)));
}

proptest! {
    #[test]
    fn prop_closure_matches_trait(n in 0usize..80) {
        let by_trait = DpCache::new(VecBackend::new(), Fibonacci);
        let by_closure = DpCache::new(
            HashMapBackend::new(),
            ClosureProblem::new(
                |n: &usize| if *n <= 1 { vec![] } else { vec![n - 1, n - 2] },
                |n: &usize, deps: Vec<u64>| if *n <= 1 { *n as u64 } else { deps[0] + deps[1] },
            ),
        );

        let (mut a, mut b) = (0u64, 1u64);
        for _ in 0..n {
            (a, b) = (b, a + b);
        }

        prop_assert_eq!(by_trait.get(&n).unwrap(), a);
        prop_assert_eq!(by_closure.get(&n).unwrap(), a);
    }
}
