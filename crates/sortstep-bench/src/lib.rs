//! Benchmark profiles for the sortstep animation engine.
//!
//! Provides pre-built [`EngineConfig`] profiles for benchmarking:
//!
//! - [`reference_profile`]: 100 elements, the interactive default
//! - [`stress_profile`]: 2 000 elements for stress testing
//! - [`run_headless`]: drive a controller to completion without a clock

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use sortstep_core::{AlgorithmKind, FrameSource, RunState};
use sortstep_engine::{Controller, EngineConfig};

/// Build the reference profile: 100 elements in `[50, 600]`.
pub fn reference_profile(seed: u64) -> EngineConfig {
    EngineConfig {
        seed: Some(seed),
        ..EngineConfig::default()
    }
}

/// Build a stress profile: 2 000 elements over a wide value range.
///
/// Same timing as [`reference_profile`]; only the dataset grows.
pub fn stress_profile(seed: u64) -> EngineConfig {
    EngineConfig {
        element_count: 2_000,
        min_value: 0,
        max_value: 1_000_000,
        seed: Some(seed),
        ..EngineConfig::default()
    }
}

/// Run `kind` to completion on `ctl`'s current data, bypassing tick gating.
///
/// Returns the number of steps taken. The controller is left `Completed`.
pub fn run_headless(ctl: &mut Controller, kind: AlgorithmKind) -> u64 {
    ctl.select_algorithm(kind);
    ctl.start_or_toggle();
    while ctl.run_state() == RunState::Running {
        ctl.step();
    }
    ctl.steps().0
}
