//! Core abstraction traits: frame reading, algorithm stepping, and time.

use std::time::Duration;

use crate::dataset::Dataset;
use crate::kind::{AlgorithmKind, StepOutcome};
use crate::marker::Marker;
use crate::state::RunState;
use crate::stats::RunStats;

/// Everything a renderer needs to draw one frame.
///
/// Implemented by the controller. Adapters read through this trait and
/// never mutate engine state, which keeps the engine testable without
/// any graphics dependency.
pub trait FrameSource {
    /// Current values, used for bar heights.
    fn values(&self) -> &[i32];

    /// Current marker per index. Same length as [`values`](Self::values).
    fn markers(&self) -> &[Marker];

    /// Counters and timing for the current run.
    fn stats(&self) -> RunStats;

    /// The selected algorithm, if any.
    fn algorithm(&self) -> Option<AlgorithmKind>;

    /// Current lifecycle state.
    fn run_state(&self) -> RunState;

    /// Display name of the selected algorithm.
    fn algorithm_name(&self) -> &'static str {
        self.algorithm()
            .map_or("No Algorithm Selected", AlgorithmKind::name)
    }
}

/// A resumable sorting algorithm advanced one primitive operation at a time.
///
/// # Contract
///
/// - Each [`step`](Self::step) performs at most one comparison, one swap,
///   or one write, fully applied before returning. Some steps only move
///   internal cursors (finishing a pass, popping an empty range).
/// - All progress lives in `self`; the machine never holds a borrow of the
///   dataset between calls, so a caller may stop calling `step` at any
///   point and resume later with identical results.
/// - Once `Done` is returned the dataset is sorted ascending and further
///   calls keep returning `Done` without touching the dataset.
/// - The dataset length must not change between calls.
pub trait SortMachine {
    /// Which algorithm this machine runs.
    fn kind(&self) -> AlgorithmKind;

    /// Advance by one primitive operation.
    fn step(&mut self, data: &mut Dataset) -> StepOutcome;
}

/// Monotonic time source for run timing.
///
/// Returns time since an arbitrary fixed origin. Abstracted so run timing
/// can be driven by hand in tests.
pub trait Clock: Send {
    /// Time since this clock's origin.
    fn now(&self) -> Duration;
}
