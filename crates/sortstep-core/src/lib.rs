//! Core types and traits for the sortstep animation engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the data every other crate passes around: the [`Dataset`] being
//! sorted with its per-index [`Marker`]s, algorithm identities, run
//! statistics, abstract commands, and the read-only [`FrameSource`]
//! seam that presentation adapters consume.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod command;
pub mod dataset;
pub mod error;
pub mod id;
pub mod kind;
pub mod marker;
pub mod state;
pub mod stats;
pub mod traits;

pub use command::{Command, CONTROLS_HELP};
pub use dataset::{Dataset, OpCounts};
pub use error::ParseCommandError;
pub use id::StepId;
pub use kind::{AlgorithmKind, StepOutcome};
pub use marker::Marker;
pub use state::RunState;
pub use stats::RunStats;
pub use traits::{Clock, FrameSource, SortMachine};
