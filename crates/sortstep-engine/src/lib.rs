//! Tick-driven controller that animates sortstep algorithms.
//!
//! [`Controller`] owns the dataset, the active algorithm's saved state,
//! and the run lifecycle. Callers drive it with [`Controller::tick`] from
//! their frame loop and [`Controller::handle_command`] from their input
//! layer, then read the frame back through
//! [`FrameSource`](sortstep_core::FrameSource). Nothing runs between calls.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod clock;
pub mod config;
pub mod controller;

pub use clock::MonotonicClock;
pub use config::{ConfigError, EngineConfig};
pub use controller::Controller;
