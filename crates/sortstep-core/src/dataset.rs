//! The sequence being sorted plus its per-index markers.
//!
//! [`Dataset`] is a pure data holder. It exposes the primitives the state
//! machines are built from: [`swap`](Dataset::swap) and
//! [`write`](Dataset::write) mutate values, the `mark_*` family rewrites
//! markers, and [`count_comparison`](Dataset::count_comparison) bumps the
//! comparison counter. Counting a comparison is always an explicit call;
//! marking does not count.
//!
//! # Invariants
//!
//! - `markers().len() == values().len()` at all times.
//! - The length never changes except through
//!   [`replace_values`](Dataset::replace_values).
//! - Counters only increase until [`reset_counts`](Dataset::reset_counts).

use crate::marker::Marker;

/// Primitive operation counters accumulated by a [`Dataset`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OpCounts {
    /// Number of [`Dataset::count_comparison`] calls.
    pub comparisons: u64,
    /// Number of [`Dataset::swap`] calls.
    pub swaps: u64,
    /// Number of [`Dataset::write`] calls.
    pub writes: u64,
}

/// Mutable values with per-index [`Marker`]s and operation counters.
///
/// # Examples
///
/// ```
/// use sortstep_core::{Dataset, Marker};
///
/// let mut ds = Dataset::new(vec![5, 3, 1]);
/// ds.count_comparison();
/// ds.mark_compare(0, 1);
/// ds.swap(0, 1);
/// ds.mark_swapped(0, 1);
///
/// assert_eq!(ds.values(), &[3, 5, 1]);
/// assert_eq!(ds.markers()[0], Marker::Swapping);
/// assert_eq!(ds.counts().comparisons, 1);
/// assert_eq!(ds.counts().swaps, 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dataset {
    values: Vec<i32>,
    markers: Vec<Marker>,
    counts: OpCounts,
}

impl Dataset {
    /// Wrap `values` with all markers at [`Marker::Default`] and zeroed counters.
    pub fn new(values: Vec<i32>) -> Self {
        let markers = vec![Marker::Default; values.len()];
        Self {
            values,
            markers,
            counts: OpCounts::default(),
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the dataset holds no elements.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Current values in index order.
    pub fn values(&self) -> &[i32] {
        &self.values
    }

    /// Value at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds. State machines only pass
    /// indices derived from their own invariants.
    pub fn get(&self, index: usize) -> i32 {
        self.values[index]
    }

    /// Current marker for every index.
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Counters accumulated since the last [`reset_counts`](Self::reset_counts).
    pub fn counts(&self) -> OpCounts {
        self.counts
    }

    /// Replace every value. Markers return to default and counters to zero.
    pub fn replace_values(&mut self, values: Vec<i32>) {
        self.markers = vec![Marker::Default; values.len()];
        self.values = values;
        self.counts = OpCounts::default();
    }

    /// Zero all counters without touching values or markers.
    pub fn reset_counts(&mut self) {
        self.counts = OpCounts::default();
    }

    // ── Mutation primitives ─────────────────────────────────────

    /// Exchange the values at `i` and `j` and count one swap.
    ///
    /// `i == j` is allowed and still counts.
    pub fn swap(&mut self, i: usize, j: usize) {
        debug_assert!(
            i < self.values.len() && j < self.values.len(),
            "swap({i}, {j}) out of bounds for length {}",
            self.values.len()
        );
        self.values.swap(i, j);
        self.counts.swaps += 1;
    }

    /// Store `value` at `index` and count one write.
    pub fn write(&mut self, index: usize, value: i32) {
        debug_assert!(
            index < self.values.len(),
            "write({index}) out of bounds for length {}",
            self.values.len()
        );
        self.values[index] = value;
        self.counts.writes += 1;
    }

    /// Count one comparison. Callers invoke this immediately before comparing.
    pub fn count_comparison(&mut self) {
        self.counts.comparisons += 1;
    }

    // ── Markers ─────────────────────────────────────────────────

    /// Clear transient markers, then mark `i` and `j` as [`Marker::Comparing`].
    pub fn mark_compare(&mut self, i: usize, j: usize) {
        self.clear_transient();
        self.markers[i] = Marker::Comparing;
        self.markers[j] = Marker::Comparing;
    }

    /// Clear transient markers, then mark `i` and `j` as [`Marker::Swapping`].
    pub fn mark_swapped(&mut self, i: usize, j: usize) {
        self.clear_transient();
        self.markers[i] = Marker::Swapping;
        self.markers[j] = Marker::Swapping;
    }

    /// Clear transient markers, then mark a single written index as
    /// [`Marker::Swapping`].
    pub fn mark_written(&mut self, index: usize) {
        self.clear_transient();
        self.markers[index] = Marker::Swapping;
    }

    /// Mark `index` as [`Marker::Sorted`] without clearing anything else.
    pub fn mark_sorted(&mut self, index: usize) {
        self.markers[index] = Marker::Sorted;
    }

    /// Mark every index as [`Marker::Sorted`].
    pub fn mark_all_sorted(&mut self) {
        self.markers.fill(Marker::Sorted);
    }

    /// Return every marker, including `Sorted`, to [`Marker::Default`].
    pub fn clear_markers(&mut self) {
        self.markers.fill(Marker::Default);
    }

    fn clear_transient(&mut self) {
        for m in self.markers.iter_mut().filter(|m| m.is_transient()) {
            *m = Marker::Default;
        }
    }
}
