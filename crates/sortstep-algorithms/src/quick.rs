//! Quicksort with an explicit range stack.
//!
//! The recursive partition-then-recurse structure becomes data: a stack of
//! `(low, high)` ranges waiting to be partitioned and, while a range is
//! being partitioned, a [`Partition`] holding the Lomuto cursors. A step
//! either pops one range, scans one element against the pivot, or places
//! the pivot and pushes the two sub-ranges.
//!
//! Bounds are signed because Lomuto's `i` starts at `low - 1` and the
//! pushed left sub-range of a pivot at 0 is `(0, -1)`.

use smallvec::SmallVec;
use sortstep_core::{AlgorithmKind, Dataset, SortMachine, StepOutcome};

/// Inclusive index range awaiting partition. May be empty (`low >= high`).
type Range = (isize, isize);

/// Lomuto partition in progress over `[low, high]` with pivot `data[high]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Partition {
    low: isize,
    high: isize,
    pivot: i32,
    /// Last index of the `< pivot` region. Starts at `low - 1`.
    i: isize,
    /// Next index to compare against the pivot.
    j: isize,
}

/// Iterative Lomuto quicksort.
///
/// Sub-ranges are pushed low-then-high, so the high side is processed
/// first. Popping a range with fewer than two elements is an idle step:
/// it makes no comparison or swap but still returns `MoreWork`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuickSort {
    stack: SmallVec<[Range; 32]>,
    active: Option<Partition>,
}

impl QuickSort {
    /// A machine that will sort a dataset of `len` elements.
    pub fn new(len: usize) -> Self {
        let mut stack = SmallVec::new();
        stack.push((0, len as isize - 1));
        Self {
            stack,
            active: None,
        }
    }

    /// Ranges waiting to be partitioned.
    pub fn pending(&self) -> usize {
        self.stack.len()
    }

    /// Whether a partition is in progress.
    pub fn is_partitioning(&self) -> bool {
        self.active.is_some()
    }

    fn begin(&mut self, data: &Dataset) {
        let Some((low, high)) = self.stack.pop() else {
            return;
        };
        if low < high {
            self.active = Some(Partition {
                low,
                high,
                pivot: data.get(high as usize),
                i: low - 1,
                j: low,
            });
        }
    }
}

impl SortMachine for QuickSort {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Quick
    }

    fn step(&mut self, data: &mut Dataset) -> StepOutcome {
        let Some(mut p) = self.active else {
            if self.stack.is_empty() {
                return StepOutcome::Done;
            }
            self.begin(data);
            return StepOutcome::MoreWork;
        };

        if p.j < p.high {
            debug_assert!(p.j >= p.low && p.i < p.j, "partition cursors out of order: {p:?}");
            let j = p.j as usize;
            let high = p.high as usize;
            data.count_comparison();
            data.mark_compare(j, high);
            if data.get(j) < p.pivot {
                p.i += 1;
                let i = p.i as usize;
                data.swap(i, j);
                data.mark_swapped(i, j);
            }
            p.j += 1;
            self.active = Some(p);
        } else {
            let pivot_index = p.i + 1;
            data.swap(pivot_index as usize, p.high as usize);
            data.mark_swapped(pivot_index as usize, p.high as usize);
            self.stack.push((p.low, pivot_index - 1));
            self.stack.push((pivot_index + 1, p.high));
            self.active = None;
        }
        StepOutcome::MoreWork
    }
}
