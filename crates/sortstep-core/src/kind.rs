//! Algorithm identities and the per-step outcome.

use std::fmt;

/// The sorting algorithms the engine can animate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AlgorithmKind {
    /// Adjacent-pair exchange sort.
    Bubble,
    /// Lomuto-partition quicksort with an explicit range stack.
    Quick,
    /// Bottom-up merge sort with an explicit queue of pending merges.
    Merge,
    /// Minimum-selection sort.
    Selection,
}

impl AlgorithmKind {
    /// All algorithms, in control-scheme order (keys 1 to 4).
    pub const ALL: [AlgorithmKind; 4] = [
        AlgorithmKind::Bubble,
        AlgorithmKind::Quick,
        AlgorithmKind::Merge,
        AlgorithmKind::Selection,
    ];

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Bubble => "Bubble Sort",
            Self::Quick => "Quick Sort",
            Self::Merge => "Merge Sort",
            Self::Selection => "Selection Sort",
        }
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of advancing a state machine by one step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// The step did something (or consumed an idle work item); call again.
    MoreWork,
    /// Nothing left to do. The dataset is sorted.
    Done,
}

impl StepOutcome {
    /// Whether this outcome ends the run.
    pub fn is_done(self) -> bool {
        self == Self::Done
    }
}
