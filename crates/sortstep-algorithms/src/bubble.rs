//! Bubble sort as a two-cursor automaton.

use sortstep_core::{AlgorithmKind, Dataset, SortMachine, StepOutcome};

/// Bubble sort over `(i, j)`: `i` counts finished passes, `j` scans the
/// unsorted prefix `[0, n-1-i]`.
///
/// Each step compares one adjacent pair (swapping if out of order) or,
/// when `j` reaches the end of the prefix, marks the last prefix index
/// sorted and starts the next pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BubbleSort {
    i: usize,
    j: usize,
}

impl BubbleSort {
    /// A machine positioned at the start of the first pass.
    pub fn new() -> Self {
        Self::default()
    }

    /// Completed passes.
    pub fn pass(&self) -> usize {
        self.i
    }

    /// Left index of the next pair to compare.
    pub fn scan(&self) -> usize {
        self.j
    }
}

impl SortMachine for BubbleSort {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Bubble
    }

    fn step(&mut self, data: &mut Dataset) -> StepOutcome {
        let n = data.len();
        if n < 2 || self.i >= n - 1 {
            return StepOutcome::Done;
        }

        let bound = n - 1 - self.i;
        debug_assert!(self.j <= bound, "bubble scan {} past bound {bound}", self.j);

        if self.j < bound {
            let j = self.j;
            data.count_comparison();
            data.mark_compare(j, j + 1);
            if data.get(j) > data.get(j + 1) {
                data.swap(j, j + 1);
                data.mark_swapped(j, j + 1);
            }
            self.j += 1;
        } else {
            data.mark_sorted(bound);
            self.j = 0;
            self.i += 1;
        }
        StepOutcome::MoreWork
    }
}
