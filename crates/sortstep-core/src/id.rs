//! Strongly-typed counters.

use std::fmt;

/// Number of `step()` invocations made in the current run.
///
/// Reset to zero whenever a run starts fresh. Idle steps (for example a
/// quicksort pop of an empty range) count, so this is not the same as
/// comparisons plus swaps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StepId(pub u64);

impl StepId {
    /// The next step number.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for StepId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
