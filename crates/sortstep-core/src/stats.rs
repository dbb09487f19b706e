//! Statistics for the current run.

use std::fmt;
use std::time::Duration;

use crate::dataset::OpCounts;

/// Counters and timing for the current run.
///
/// Zeroed when a run starts and when the data is reset; never reset
/// mid-run. `interval` is the current tick interval and survives both.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Comparisons made this run.
    pub comparisons: u64,
    /// Swaps made this run.
    pub swaps: u64,
    /// Single-index writes made this run (merge sort only).
    pub writes: u64,
    /// Wall time from run start to the most recent step.
    pub elapsed: Duration,
    /// Minimum time between steps.
    pub interval: Duration,
}

impl RunStats {
    /// Build stats from dataset counters plus timing.
    pub fn from_counts(counts: OpCounts, elapsed: Duration, interval: Duration) -> Self {
        Self {
            comparisons: counts.comparisons,
            swaps: counts.swaps,
            writes: counts.writes,
            elapsed,
            interval,
        }
    }
}

impl fmt::Display for RunStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Comparisons: {}  |  Swaps: {}  |  Time: {}ms  |  Speed: {}ms",
            self.comparisons,
            self.swaps,
            self.elapsed.as_millis(),
            self.interval.as_millis()
        )
    }
}
