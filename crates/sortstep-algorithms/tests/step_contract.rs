//! The `SortMachine` contract, checked for every algorithm.
//!
//! A step makes at most one comparison and at most one swap or write.
//! `Done` is sticky and leaves the data alone. A machine interrupted at
//! any step and resumed from a copy of its state finishes identically.

use proptest::prelude::*;
use sortstep_algorithms::AlgorithmState;
use sortstep_core::{AlgorithmKind, Dataset, OpCounts, SortMachine, StepOutcome};
use sortstep_test_utils::{is_sorted_ascending, run_to_completion, same_multiset, seeded_values};

fn moves(c: OpCounts) -> u64 {
    c.swaps + c.writes
}

#[test]
fn each_step_compares_and_moves_at_most_once() {
    for kind in AlgorithmKind::ALL {
        let values = seeded_values(40, 13);
        let mut data = Dataset::new(values);
        let mut machine = AlgorithmState::new(kind, data.len());
        loop {
            let before = data.counts();
            let outcome = machine.step(&mut data);
            let after = data.counts();
            assert!(after.comparisons - before.comparisons <= 1, "{kind}");
            assert!(moves(after) - moves(before) <= 1, "{kind}");
            if outcome.is_done() {
                break;
            }
        }
    }
}

#[test]
fn done_is_sticky_and_inert() {
    for kind in AlgorithmKind::ALL {
        let mut data = Dataset::new(seeded_values(25, 2));
        let mut machine = AlgorithmState::new(kind, data.len());
        run_to_completion(&mut machine, &mut data);

        let values = data.values().to_vec();
        let markers = data.markers().to_vec();
        let counts = data.counts();
        for _ in 0..5 {
            assert_eq!(machine.step(&mut data), StepOutcome::Done, "{kind}");
        }
        assert_eq!(data.values(), values.as_slice());
        assert_eq!(data.markers(), markers.as_slice());
        assert_eq!(data.counts(), counts);
    }
}

#[test]
fn fresh_machine_reports_its_kind() {
    for kind in AlgorithmKind::ALL {
        assert_eq!(AlgorithmState::new(kind, 10).kind(), kind);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn interrupt_anywhere_and_resume(
        values in proptest::collection::vec(0i32..200, 0..50),
        algo in 0usize..4,
        cut in 0usize..400,
    ) {
        let kind = AlgorithmKind::ALL[algo];

        let mut straight = Dataset::new(values.clone());
        let straight_run = run_to_completion(&mut AlgorithmState::new(kind, values.len()), &mut straight);

        let mut data = Dataset::new(values.clone());
        let mut machine = AlgorithmState::new(kind, values.len());
        let mut taken = 0u64;
        for _ in 0..cut {
            if machine.step(&mut data).is_done() {
                break;
            }
            taken += 1;
        }
        let mut resumed = machine.clone();
        let rest = run_to_completion(&mut resumed, &mut data);

        prop_assert_eq!(taken + rest.steps, straight_run.steps);
        prop_assert_eq!(data.values(), straight.values());
        prop_assert_eq!(data.counts(), straight.counts());
        prop_assert!(is_sorted_ascending(data.values()));
        prop_assert!(same_multiset(data.values(), &values));
    }
}
