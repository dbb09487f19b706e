//! The active-algorithm sum type.

use sortstep_core::{AlgorithmKind, Dataset, SortMachine, StepOutcome};

use crate::{BubbleSort, MergeSort, QuickSort, SelectionSort};

/// Exactly one algorithm's saved progress.
///
/// Replacing the variant discards the previous algorithm's progress;
/// there is no cross-algorithm resume.
///
/// # Examples
///
/// ```
/// use sortstep_algorithms::{AlgorithmState, SortMachine};
/// use sortstep_core::{AlgorithmKind, Dataset, StepOutcome};
///
/// let mut data = Dataset::new(vec![3, 1, 2]);
/// let mut state = AlgorithmState::new(AlgorithmKind::Quick, data.len());
/// while state.step(&mut data) == StepOutcome::MoreWork {}
/// assert_eq!(data.values(), &[1, 2, 3]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AlgorithmState {
    /// Bubble sort progress.
    Bubble(BubbleSort),
    /// Quicksort progress.
    Quick(QuickSort),
    /// Merge sort progress.
    Merge(MergeSort),
    /// Selection sort progress.
    Selection(SelectionSort),
}

impl AlgorithmState {
    /// Starting configuration of `kind` for a dataset of `len` elements.
    pub fn new(kind: AlgorithmKind, len: usize) -> Self {
        match kind {
            AlgorithmKind::Bubble => Self::Bubble(BubbleSort::new()),
            AlgorithmKind::Quick => Self::Quick(QuickSort::new(len)),
            AlgorithmKind::Merge => Self::Merge(MergeSort::new(len)),
            AlgorithmKind::Selection => Self::Selection(SelectionSort::new()),
        }
    }
}

impl SortMachine for AlgorithmState {
    fn kind(&self) -> AlgorithmKind {
        match self {
            Self::Bubble(m) => m.kind(),
            Self::Quick(m) => m.kind(),
            Self::Merge(m) => m.kind(),
            Self::Selection(m) => m.kind(),
        }
    }

    fn step(&mut self, data: &mut Dataset) -> StepOutcome {
        match self {
            Self::Bubble(m) => m.step(data),
            Self::Quick(m) => m.step(data),
            Self::Merge(m) => m.step(data),
            Self::Selection(m) => m.step(data),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_matches_kind() {
        for kind in AlgorithmKind::ALL {
            assert_eq!(AlgorithmState::new(kind, 10).kind(), kind);
        }
    }

    #[test]
    fn fresh_state_equals_restart() {
        let mut data = Dataset::new(vec![2, 1]);
        let mut state = AlgorithmState::new(AlgorithmKind::Bubble, 2);
        state.step(&mut data);
        assert_ne!(state, AlgorithmState::new(AlgorithmKind::Bubble, 2));
        state = AlgorithmState::new(AlgorithmKind::Bubble, 2);
        assert_eq!(state, AlgorithmState::Bubble(BubbleSort::new()));
    }
}
