//! Per-index visual classification of the dataset.

use std::fmt;

/// What happened to an index during the most recent step.
///
/// `Comparing` and `Swapping` are transient: every new compare or swap
/// mark clears them. `Sorted` is cumulative across steps of a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Marker {
    /// Untouched this step.
    #[default]
    Default,
    /// One side of the comparison just made.
    Comparing,
    /// Just exchanged or written.
    Swapping,
    /// In its final position.
    Sorted,
}

impl Marker {
    /// All markers in legend order.
    pub const ALL: [Marker; 4] = [
        Marker::Default,
        Marker::Comparing,
        Marker::Swapping,
        Marker::Sorted,
    ];

    /// Legend label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Comparing => "Comparing",
            Self::Swapping => "Swapping",
            Self::Sorted => "Sorted",
        }
    }

    /// Suggested bar colour as `(r, g, b)`.
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Default => (70, 130, 180),
            Self::Comparing => (255, 99, 71),
            Self::Swapping => (50, 205, 50),
            Self::Sorted => (147, 112, 219),
        }
    }

    /// Whether the next compare/swap mark resets this marker.
    pub fn is_transient(self) -> bool {
        matches!(self, Self::Comparing | Self::Swapping)
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
