//! Controller run states.

use std::fmt;

/// Lifecycle state of a controller.
///
/// ```text
/// Idle ──select──▶ Ready ──toggle──▶ Running ◀──toggle──▶ Paused
///                    ▲                  │
///                    │                done
///                 select                ▼
///                    └──────────── Completed ──toggle──▶ Running
/// ```
///
/// Selecting an algorithm from any state lands in `Ready`. Resetting the
/// data lands in `Ready` (or `Idle` when nothing is selected).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RunState {
    /// No algorithm selected.
    #[default]
    Idle,
    /// Algorithm selected, not started.
    Ready,
    /// Stepping on every due tick.
    Running,
    /// Started but ticks are ignored.
    Paused,
    /// The last run finished; every index is marked sorted.
    Completed,
}

impl RunState {
    /// Upper-case label for status text.
    pub fn label(self) -> &'static str {
        match self {
            Self::Idle | Self::Ready => "READY",
            Self::Running => "RUNNING",
            Self::Paused => "PAUSED",
            Self::Completed => "COMPLETED",
        }
    }

    /// Whether a run is in progress (running or paused).
    pub fn is_active(self) -> bool {
        matches!(self, Self::Running | Self::Paused)
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
