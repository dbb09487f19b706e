//! Sortstep: a step-driven sorting algorithm animation engine.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all sortstep sub-crates. For most users, adding `sortstep` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use std::time::Duration;
//! use sortstep::prelude::*;
//!
//! let config = EngineConfig {
//!     element_count: 32,
//!     seed: Some(7),
//!     ..EngineConfig::default()
//! };
//! let mut ctl = Controller::new(config).unwrap();
//! ctl.handle_command(Command::SelectQuick);
//! ctl.handle_command(Command::ToggleRun);
//!
//! // One 60 Hz frame at a time, exactly as a render loop would.
//! while ctl.run_state() == RunState::Running {
//!     ctl.tick(Duration::from_millis(17));
//! }
//!
//! assert_eq!(ctl.status_line(), "Algorithm: Quick Sort (COMPLETED)");
//! assert!(ctl.values().windows(2).all(|w| w[0] <= w[1]));
//! assert!(ctl.markers().iter().all(|&m| m == Marker::Sorted));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `sortstep-core` | Dataset, markers, lifecycle, commands, core traits |
//! | [`algorithms`] | `sortstep-algorithms` | The four resumable sort machines |
//! | [`engine`] | `sortstep-engine` | Controller, configuration, clocks |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, traits, and IDs (`sortstep-core`).
///
/// Contains the [`types::Dataset`], markers, the run lifecycle, input
/// commands, and the [`types::SortMachine`] and [`types::FrameSource`]
/// traits.
pub use sortstep_core as types;

/// Resumable sorting algorithms (`sortstep-algorithms`).
///
/// [`algorithms::AlgorithmState`] wraps whichever machine is active.
pub use sortstep_algorithms as algorithms;

/// The run controller (`sortstep-engine`).
pub use sortstep_engine as engine;

/// Common imports for typical sortstep usage.
///
/// ```rust
/// use sortstep::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use sortstep_core::{
        AlgorithmKind, Command, Dataset, FrameSource, Marker, RunState, RunStats, SortMachine,
        StepOutcome,
    };

    // Errors
    pub use sortstep_core::ParseCommandError;
    pub use sortstep_engine::ConfigError;

    // Engine
    pub use sortstep_engine::{Controller, EngineConfig};
}
