//! Bottom-up merge sort with an explicit merge queue.
//!
//! All merges are planned up front as [`MergeRange`]s in bottom-up order
//! (width 1, then 2, then 4, ...), so every range is merged only after both
//! of its halves. When a range becomes active its values are copied into a
//! scratch run; each step then writes exactly one element back into the
//! dataset, either after one comparison of the two run heads or as a flush
//! of whichever half remains.

use std::collections::VecDeque;

use sortstep_core::{AlgorithmKind, Dataset, SortMachine, StepOutcome};

/// Two adjacent sorted runs `[left, mid]` and `[mid + 1, right]` to merge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MergeRange {
    /// First index of the left run.
    pub left: usize,
    /// Last index of the left run.
    pub mid: usize,
    /// Last index of the right run.
    pub right: usize,
}

/// Merge in progress: a scratch copy of the range and three cursors.
#[derive(Clone, Debug, PartialEq, Eq)]
struct ActiveMerge {
    range: MergeRange,
    scratch: Vec<i32>,
    /// Next unconsumed scratch index of the left run.
    left: usize,
    /// Next unconsumed scratch index of the right run.
    right: usize,
    /// Next dataset index to write.
    out: usize,
}

impl ActiveMerge {
    fn open(range: MergeRange, data: &Dataset) -> Self {
        Self {
            range,
            scratch: data.values()[range.left..=range.right].to_vec(),
            left: 0,
            right: range.mid - range.left + 1,
            out: range.left,
        }
    }

    fn left_end(&self) -> usize {
        self.range.mid - self.range.left + 1
    }

    fn is_finished(&self) -> bool {
        self.out > self.range.right
    }
}

/// Plan bottom-up merges for `len` elements.
fn plan(len: usize) -> VecDeque<MergeRange> {
    let mut queue = VecDeque::new();
    let mut width = 1;
    while width < len {
        let mut left = 0;
        while left + width < len {
            queue.push_back(MergeRange {
                left,
                mid: left + width - 1,
                right: (left + 2 * width - 1).min(len - 1),
            });
            left += 2 * width;
        }
        width *= 2;
    }
    queue
}

/// Iterative bottom-up merge sort.
///
/// Every step performs one write. The step that opens a new range also
/// performs that range's first write, so there are no idle steps: a run
/// over `n` elements takes at most `n * ceil(log2 n)` steps.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MergeSort {
    pending: VecDeque<MergeRange>,
    active: Option<ActiveMerge>,
}

impl MergeSort {
    /// A machine that will sort a dataset of `len` elements.
    pub fn new(len: usize) -> Self {
        Self {
            pending: plan(len),
            active: None,
        }
    }

    /// Merges not yet started.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// The range currently being merged.
    pub fn current(&self) -> Option<MergeRange> {
        self.active.as_ref().map(|m| m.range)
    }
}

impl SortMachine for MergeSort {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Merge
    }

    fn step(&mut self, data: &mut Dataset) -> StepOutcome {
        if self.active.is_none() {
            let Some(range) = self.pending.pop_front() else {
                return StepOutcome::Done;
            };
            self.active = Some(ActiveMerge::open(range, data));
        }
        let Some(m) = self.active.as_mut() else {
            return StepOutcome::Done;
        };

        let left_end = m.left_end();
        let right_end = m.scratch.len();
        let base = m.range.left;
        debug_assert!(m.out == base + m.left + (m.right - left_end));

        let value = if m.left < left_end && m.right < right_end {
            data.count_comparison();
            data.mark_compare(base + m.left, base + m.right);
            // `<=` keeps equal values in their original order.
            if m.scratch[m.left] <= m.scratch[m.right] {
                m.left += 1;
                m.scratch[m.left - 1]
            } else {
                m.right += 1;
                m.scratch[m.right - 1]
            }
        } else if m.left < left_end {
            m.left += 1;
            m.scratch[m.left - 1]
        } else {
            m.right += 1;
            m.scratch[m.right - 1]
        };

        data.write(m.out, value);
        data.mark_written(m.out);
        m.out += 1;

        if m.is_finished() {
            self.active = None;
        }
        StepOutcome::MoreWork
    }
}
