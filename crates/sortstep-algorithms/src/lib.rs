//! Resumable sorting state machines.
//!
//! Each algorithm is rewritten as an explicit automaton that performs one
//! primitive operation per [`SortMachine::step`] call. Recursive
//! formulations are replaced by data: quicksort keeps a stack of pending
//! ranges, merge sort a queue of pending merges.
//!
//! | Machine | Saved state |
//! |---------|-------------|
//! | [`BubbleSort`] | pass index, scan index |
//! | [`QuickSort`] | range stack, active partition (pivot, `i`, `j`) |
//! | [`SelectionSort`] | outer index, scan index, running minimum |
//! | [`MergeSort`] | merge queue, scratch run, left/right/output cursors |
//!
//! [`AlgorithmState`] wraps the four as a sum type so the controller can
//! hold exactly one active machine.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod bubble;
pub mod merge;
pub mod quick;
pub mod selection;
pub mod state;

pub use bubble::BubbleSort;
pub use merge::{MergeRange, MergeSort};
pub use quick::QuickSort;
pub use selection::SelectionSort;
pub use state::AlgorithmState;

pub use sortstep_core::SortMachine;
