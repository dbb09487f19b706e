//! Headless run of every algorithm, rendered as ASCII frames.
//!
//! Demonstrates:
//!   1. Building an `EngineConfig` and `Controller`
//!   2. Driving the controller with commands and a fixed frame time
//!   3. Reading frames back through `FrameSource`
//!
//! Run with:
//!   RUST_LOG=sortstep_engine=debug cargo run -p sortstep-engine --example headless

use std::time::Duration;

use sortstep_core::{AlgorithmKind, Command, FrameSource, Marker, RunState, CONTROLS_HELP};
use sortstep_engine::{Controller, EngineConfig};
use tracing_subscriber::EnvFilter;

const FRAME: Duration = Duration::from_millis(16);
const ROWS: i32 = 8;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    println!("=== sortstep headless demo ===");
    println!("{CONTROLS_HELP}\n");

    let config = EngineConfig {
        element_count: 16,
        min_value: 1,
        max_value: 64,
        seed: Some(42),
        ..EngineConfig::default()
    };
    let mut ctl = Controller::new(config)?;
    let input = ctl.values().to_vec();

    for kind in AlgorithmKind::ALL {
        ctl.replace_values(input.clone());
        ctl.handle_command(Command::select(kind));
        ctl.handle_command(Command::ToggleRun);
        println!("{}", ctl.status_line());
        render(&ctl);

        let mut frames = 0u64;
        while ctl.run_state() == RunState::Running {
            if ctl.tick(FRAME).is_some() && ctl.steps().0 % 25 == 0 {
                println!("-- step {} --", ctl.steps());
                render(&ctl);
            }
            frames += 1;
        }

        println!("{}", ctl.status_line());
        render(&ctl);
        println!("{}", ctl.stats());
        println!("({} steps over {frames} frames)\n", ctl.steps());
    }

    // Speed controls saturate at the configured bounds.
    for _ in 0..100 {
        ctl.handle_command(Command::SpeedUp);
    }
    println!("fastest interval: {:?}", ctl.interval());
    Ok(())
}

/// Print bars top-down, one column per element.
fn render(frame: &impl FrameSource) {
    let values = frame.values();
    let max = values.iter().copied().max().unwrap_or(1).max(1);
    for row in (1..=ROWS).rev() {
        let line: String = values
            .iter()
            .zip(frame.markers())
            .map(|(&v, &m)| {
                if i64::from(v) * i64::from(ROWS) >= i64::from(row) * i64::from(max) {
                    glyph(m)
                } else {
                    ' '
                }
            })
            .collect();
        println!("|{line}|");
    }
}

fn glyph(marker: Marker) -> char {
    match marker {
        Marker::Default => '#',
        Marker::Comparing => '?',
        Marker::Swapping => '*',
        Marker::Sorted => '=',
    }
}
