//! Selection sort as a three-cursor automaton.

use sortstep_core::{AlgorithmKind, Dataset, SortMachine, StepOutcome};

/// Selection sort over `(i, j, min)`.
///
/// `i` is the slot being filled, `j` scans `(i, n)`, and `min` tracks the
/// smallest value seen so far in the scan. When the scan finishes the
/// minimum is swapped into `i` (if it is not already there) and `i` is
/// marked sorted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectionSort {
    i: usize,
    j: usize,
    min: usize,
}

impl SelectionSort {
    /// A machine positioned at the start of the first scan.
    pub fn new() -> Self {
        Self { i: 0, j: 1, min: 0 }
    }

    /// Slot currently being filled.
    pub fn slot(&self) -> usize {
        self.i
    }

    /// Next index to compare against the running minimum.
    pub fn scan(&self) -> usize {
        self.j
    }

    /// Index of the smallest value seen in the current scan.
    pub fn min_index(&self) -> usize {
        self.min
    }
}

impl Default for SelectionSort {
    fn default() -> Self {
        Self::new()
    }
}

impl SortMachine for SelectionSort {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Selection
    }

    fn step(&mut self, data: &mut Dataset) -> StepOutcome {
        let n = data.len();
        if n < 2 || self.i >= n - 1 {
            return StepOutcome::Done;
        }
        debug_assert!(
            self.i <= self.min && self.min < self.j.max(self.i + 1),
            "selection cursors out of order: {self:?}"
        );

        if self.j < n {
            let j = self.j;
            data.count_comparison();
            data.mark_compare(j, self.min);
            if data.get(j) < data.get(self.min) {
                self.min = j;
            }
            self.j += 1;
        } else {
            if self.min != self.i {
                data.swap(self.i, self.min);
                data.mark_swapped(self.i, self.min);
            }
            data.mark_sorted(self.i);
            self.i += 1;
            self.j = self.i + 1;
            self.min = self.i;
        }
        StepOutcome::MoreWork
    }
}
