//! Test utilities and fixtures for sortstep development.
//!
//! Provides seeded and edge-case datasets ([`fixtures`]), a hand-driven
//! [`ManualClock`], and helpers that drive a [`SortMachine`] to completion
//! and check the result.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use sortstep_core::{Clock, Dataset, OpCounts, SortMachine, StepOutcome};

pub mod fixtures;

pub use fixtures::{edge_cases, seeded_values};

/// A [`Clock`] that only moves when told to.
///
/// Clones share the same time, so a test can hand one clone to the
/// controller and keep another to advance.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    nanos: Arc<AtomicU64>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move time forward by `by`.
    pub fn advance(&self, by: Duration) {
        let by = u64::try_from(by.as_nanos()).unwrap_or(u64::MAX);
        self.nanos.fetch_add(by, Ordering::Relaxed);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        Duration::from_nanos(self.nanos.load(Ordering::Relaxed))
    }
}

/// Generous upper bound on steps for any of the quadratic sorts.
pub fn step_budget(len: usize) -> u64 {
    let n = len as u64;
    4 * n * n + 4 * n + 16
}

/// Summary of a run driven by [`run_to_completion`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of `step()` calls that returned `MoreWork`.
    pub steps: u64,
    /// Counters on the dataset when `Done` was returned.
    pub counts: OpCounts,
}

/// Step `machine` until it reports `Done`.
///
/// Asserts after every step that the dataset length is unchanged and that
/// no counter decreased.
///
/// # Panics
///
/// Panics if the machine exceeds [`step_budget`] for the dataset length.
pub fn run_to_completion<M: SortMachine + ?Sized>(
    machine: &mut M,
    data: &mut Dataset,
) -> RunSummary {
    let len = data.len();
    let budget = step_budget(len);
    let mut steps = 0;
    let mut prev = data.counts();
    loop {
        let outcome = machine.step(data);
        assert_eq!(data.len(), len, "dataset length changed mid-run");
        assert_eq!(data.markers().len(), len, "marker length drifted");
        let now = data.counts();
        assert!(
            now.comparisons >= prev.comparisons && now.swaps >= prev.swaps && now.writes >= prev.writes,
            "counters went backwards: {prev:?} -> {now:?}"
        );
        prev = now;
        if outcome == StepOutcome::Done {
            return RunSummary { steps, counts: now };
        }
        steps += 1;
        assert!(
            steps <= budget,
            "{:?} exceeded {budget} steps on {len} elements",
            machine.kind()
        );
    }
}

/// Whether `values` is sorted ascending.
pub fn is_sorted_ascending(values: &[i32]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}

/// Whether `a` and `b` hold the same values with the same multiplicities.
pub fn same_multiset(a: &[i32], b: &[i32]) -> bool {
    let mut a = a.to_vec();
    let mut b = b.to_vec();
    a.sort_unstable();
    b.sort_unstable();
    a == b
}
