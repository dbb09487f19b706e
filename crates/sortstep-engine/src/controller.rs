//! The run controller.
//!
//! [`Controller`] is the primary user-facing API. It owns the dataset, the
//! active algorithm's saved state, and the run lifecycle, and advances the
//! algorithm by exactly one primitive operation per due tick.
//!
//! # Ownership model
//!
//! All mutating methods take `&mut self`; read accessors hand out borrows
//! of the dataset. A renderer therefore cannot hold a frame across a
//! tick, and the borrow checker rules out tearing.
//!
//! # Lifecycle
//!
//! See [`RunState`] for the state diagram. Selecting an algorithm or
//! resetting the data cancels a run immediately; because every step is
//! fully applied before returning, there is no partial state to clean up.

use std::time::Duration;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use sortstep_algorithms::AlgorithmState;
use sortstep_core::{
    AlgorithmKind, Clock, Command, Dataset, FrameSource, Marker, RunState, RunStats, SortMachine,
    StepId, StepOutcome,
};
use tracing::{debug, info, trace};

use crate::clock::MonotonicClock;
use crate::config::{ConfigError, EngineConfig};

// Compile-time assertion: Controller is Send.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<Controller>();
    }
};

/// Single-threaded, pull-driven sort animation controller.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use sortstep_core::{AlgorithmKind, Command, FrameSource, RunState};
/// use sortstep_engine::{Controller, EngineConfig};
///
/// let config = EngineConfig { element_count: 8, seed: Some(1), ..Default::default() };
/// let mut ctl = Controller::new(config).unwrap();
/// ctl.handle_command(Command::SelectMerge);
/// ctl.handle_command(Command::ToggleRun);
/// while ctl.run_state() == RunState::Running {
///     ctl.tick(Duration::from_millis(60));
/// }
/// assert!(ctl.values().windows(2).all(|w| w[0] <= w[1]));
/// ```
pub struct Controller {
    config: EngineConfig,
    data: Dataset,
    machine: Option<AlgorithmState>,
    state: RunState,
    rng: ChaCha8Rng,
    clock: Box<dyn Clock>,
    started_at: Duration,
    elapsed: Duration,
    interval: Duration,
    since_last_step: Duration,
    steps: StepId,
}

impl Controller {
    /// Create a controller using wall-clock timing.
    ///
    /// Validates the configuration and generates the first dataset.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        Self::with_clock(config, Box::new(MonotonicClock::new()))
    }

    /// Create a controller that reads run time from `clock`.
    pub fn with_clock(config: EngineConfig, clock: Box<dyn Clock>) -> Result<Self, ConfigError> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let data = Dataset::new(generate(&config, &mut rng));
        debug!(seed, elements = data.len(), "controller created");
        Ok(Self {
            interval: config.initial_interval,
            config,
            data,
            machine: None,
            state: RunState::Idle,
            rng,
            clock,
            started_at: Duration::ZERO,
            elapsed: Duration::ZERO,
            since_last_step: Duration::ZERO,
            steps: StepId::default(),
        })
    }

    // ── Commands ────────────────────────────────────────────────

    /// Apply an abstract input command.
    pub fn handle_command(&mut self, command: Command) {
        match command {
            Command::SelectBubble
            | Command::SelectQuick
            | Command::SelectMerge
            | Command::SelectSelection => {
                if let Some(kind) = command.algorithm() {
                    self.select_algorithm(kind);
                }
            }
            Command::ToggleRun => self.start_or_toggle(),
            Command::Reset => self.reset_data(),
            Command::SpeedUp => self.shift_interval(false, self.config.speed_step),
            Command::SpeedDown => self.shift_interval(true, self.config.speed_step),
        }
    }

    /// Make `kind` the active algorithm, discarding any run in progress.
    ///
    /// Dataset values are left untouched.
    pub fn select_algorithm(&mut self, kind: AlgorithmKind) {
        self.machine = Some(AlgorithmState::new(kind, self.data.len()));
        self.state = RunState::Ready;
        debug!(algorithm = %kind, "algorithm selected");
    }

    /// Start a fresh run, or pause/resume the current one.
    ///
    /// No-op when no algorithm is selected. A fresh run zeroes the
    /// statistics, restarts the clock, clears markers, and returns the
    /// algorithm to its starting configuration.
    pub fn start_or_toggle(&mut self) {
        let Some(kind) = self.algorithm() else {
            return;
        };
        match self.state {
            RunState::Running => {
                self.state = RunState::Paused;
                debug!(step = %self.steps, "paused");
            }
            RunState::Paused => {
                self.state = RunState::Running;
                debug!(step = %self.steps, "resumed");
            }
            RunState::Idle | RunState::Ready | RunState::Completed => {
                self.machine = Some(AlgorithmState::new(kind, self.data.len()));
                self.data.reset_counts();
                self.data.clear_markers();
                self.started_at = self.clock.now();
                self.elapsed = Duration::ZERO;
                self.steps = StepId::default();
                self.state = RunState::Running;
                info!(algorithm = %kind, elements = self.data.len(), "run started");
            }
        }
    }

    /// Regenerate the dataset with fresh random values and stop any run.
    ///
    /// The algorithm selection survives; the run state drops to `Ready`
    /// (or stays `Idle` if nothing is selected).
    pub fn reset_data(&mut self) {
        let values = generate(&self.config, &mut self.rng);
        self.replace_values(values);
    }

    /// Replace the dataset with `values` and stop any run.
    ///
    /// Same lifecycle effect as [`reset_data`](Self::reset_data), for
    /// callers that need a specific input.
    pub fn replace_values(&mut self, values: Vec<i32>) {
        self.data.replace_values(values);
        self.elapsed = Duration::ZERO;
        self.steps = StepId::default();
        if let Some(kind) = self.algorithm() {
            self.machine = Some(AlgorithmState::new(kind, self.data.len()));
            self.state = RunState::Ready;
        } else {
            self.state = RunState::Idle;
        }
        debug!(elements = self.data.len(), "dataset replaced");
    }

    /// Adjust the tick interval by `delta_ms`, clamped to the configured
    /// bounds. Negative values speed up.
    pub fn set_speed(&mut self, delta_ms: i64) {
        let by = Duration::from_millis(delta_ms.unsigned_abs());
        self.shift_interval(delta_ms > 0, by);
    }

    fn shift_interval(&mut self, slower: bool, by: Duration) {
        let next = if slower {
            self.interval.saturating_add(by)
        } else {
            self.interval.saturating_sub(by)
        };
        self.interval = next.clamp(self.config.min_interval, self.config.max_interval);
        debug!(interval_ms = self.interval.as_millis() as u64, "speed changed");
    }

    // ── Stepping ────────────────────────────────────────────────

    /// Account `elapsed` frame time and step once if the interval has passed.
    ///
    /// Time accumulates across calls; once it strictly exceeds the current
    /// interval the accumulator restarts and [`step`](Self::step) is
    /// invoked. Returns the step outcome, or `None` if no step ran.
    pub fn tick(&mut self, elapsed: Duration) -> Option<StepOutcome> {
        self.since_last_step = self.since_last_step.saturating_add(elapsed);
        if self.since_last_step <= self.interval {
            return None;
        }
        self.since_last_step = Duration::ZERO;
        self.step()
    }

    /// Advance the active algorithm by one primitive operation, ignoring
    /// the interval.
    ///
    /// Returns `None` (and does nothing) unless the controller is
    /// `Running`. When the algorithm reports `Done` every index is marked
    /// sorted and the controller moves to `Completed`.
    pub fn step(&mut self) -> Option<StepOutcome> {
        if self.state != RunState::Running {
            return None;
        }
        let machine = self.machine.as_mut()?;
        let outcome = machine.step(&mut self.data);
        self.steps = self.steps.next();
        self.elapsed = self.clock.now().saturating_sub(self.started_at);
        trace!(step = %self.steps, ?outcome, "stepped");

        if outcome.is_done() {
            self.data.mark_all_sorted();
            self.state = RunState::Completed;
            let counts = self.data.counts();
            info!(
                algorithm = %machine.kind(),
                steps = self.steps.0,
                comparisons = counts.comparisons,
                swaps = counts.swaps,
                writes = counts.writes,
                elapsed_ms = self.elapsed.as_millis() as u64,
                "run completed"
            );
        }
        Some(outcome)
    }

    // ── Accessors ───────────────────────────────────────────────

    /// The dataset, including markers and counters.
    pub fn dataset(&self) -> &Dataset {
        &self.data
    }

    /// The configuration this controller was built from.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Current tick interval.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Steps taken in the current run.
    pub fn steps(&self) -> StepId {
        self.steps
    }

    /// Status text, e.g. `"Algorithm: Quick Sort (RUNNING)"`.
    pub fn status_line(&self) -> String {
        format!(
            "Algorithm: {} ({})",
            self.algorithm_name(),
            self.state.label()
        )
    }
}

impl FrameSource for Controller {
    fn values(&self) -> &[i32] {
        self.data.values()
    }

    fn markers(&self) -> &[Marker] {
        self.data.markers()
    }

    fn stats(&self) -> RunStats {
        RunStats::from_counts(self.data.counts(), self.elapsed, self.interval)
    }

    fn algorithm(&self) -> Option<AlgorithmKind> {
        self.machine.as_ref().map(SortMachine::kind)
    }

    fn run_state(&self) -> RunState {
        self.state
    }
}

impl std::fmt::Debug for Controller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Controller")
            .field("algorithm", &self.algorithm())
            .field("state", &self.state)
            .field("elements", &self.data.len())
            .field("steps", &self.steps)
            .field("interval", &self.interval)
            .finish()
    }
}

fn generate(config: &EngineConfig, rng: &mut ChaCha8Rng) -> Vec<i32> {
    (0..config.element_count)
        .map(|_| rng.random_range(config.min_value..=config.max_value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sortstep_test_utils::{is_sorted_ascending, same_multiset, ManualClock};

    fn config(n: usize) -> EngineConfig {
        EngineConfig {
            element_count: n,
            seed: Some(42),
            ..EngineConfig::default()
        }
    }

    fn controller(n: usize) -> (Controller, ManualClock) {
        let clock = ManualClock::new();
        let ctl = Controller::with_clock(config(n), Box::new(clock.clone())).unwrap();
        (ctl, clock)
    }

    #[test]
    fn new_generates_values_in_range() {
        let (ctl, _) = controller(100);
        assert_eq!(ctl.values().len(), 100);
        assert!(ctl.values().iter().all(|v| (50..=600).contains(v)));
        assert_eq!(ctl.run_state(), RunState::Idle);
        assert_eq!(ctl.algorithm(), None);
    }

    #[test]
    fn same_seed_same_dataset() {
        let (a, _) = controller(32);
        let (b, _) = controller(32);
        assert_eq!(a.values(), b.values());
    }

    #[test]
    fn invalid_config_is_rejected() {
        assert_eq!(
            Controller::new(config(0)).unwrap_err(),
            ConfigError::EmptyDataset
        );
    }

    #[test]
    fn toggle_without_algorithm_is_noop() {
        let (mut ctl, _) = controller(8);
        ctl.start_or_toggle();
        assert_eq!(ctl.run_state(), RunState::Idle);
        assert_eq!(ctl.step(), None);
    }

    #[test]
    fn select_moves_to_ready() {
        let (mut ctl, _) = controller(8);
        ctl.select_algorithm(AlgorithmKind::Quick);
        assert_eq!(ctl.run_state(), RunState::Ready);
        assert_eq!(ctl.algorithm(), Some(AlgorithmKind::Quick));
        assert_eq!(ctl.step(), None, "ready does not step");
    }

    #[test]
    fn toggle_cycles_running_and_paused() {
        let (mut ctl, _) = controller(8);
        ctl.select_algorithm(AlgorithmKind::Bubble);
        ctl.start_or_toggle();
        assert_eq!(ctl.run_state(), RunState::Running);
        ctl.start_or_toggle();
        assert_eq!(ctl.run_state(), RunState::Paused);
        assert_eq!(ctl.step(), None, "paused does not step");
        ctl.start_or_toggle();
        assert_eq!(ctl.run_state(), RunState::Running);
    }

    #[test]
    fn run_completes_and_marks_everything_sorted() {
        let (mut ctl, _) = controller(20);
        let before = ctl.values().to_vec();
        ctl.select_algorithm(AlgorithmKind::Selection);
        ctl.start_or_toggle();
        while ctl.step() == Some(StepOutcome::MoreWork) {}
        assert_eq!(ctl.run_state(), RunState::Completed);
        assert!(is_sorted_ascending(ctl.values()));
        assert!(same_multiset(ctl.values(), &before));
        assert!(ctl.markers().iter().all(|&m| m == Marker::Sorted));
        assert_eq!(ctl.step(), None);
    }

    #[test]
    fn restart_after_completion_zeroes_stats() {
        let (mut ctl, _) = controller(10);
        ctl.select_algorithm(AlgorithmKind::Bubble);
        ctl.start_or_toggle();
        while ctl.step() == Some(StepOutcome::MoreWork) {}
        assert!(ctl.stats().comparisons > 0);

        ctl.start_or_toggle();
        assert_eq!(ctl.run_state(), RunState::Running);
        assert_eq!(ctl.stats().comparisons, 0);
        assert_eq!(ctl.stats().swaps, 0);
        assert_eq!(ctl.steps(), StepId(0));
        assert!(ctl.markers().iter().all(|&m| m == Marker::Default));
    }

    #[test]
    fn select_mid_run_cancels_but_keeps_values() {
        let (mut ctl, _) = controller(16);
        ctl.select_algorithm(AlgorithmKind::Bubble);
        ctl.start_or_toggle();
        for _ in 0..10 {
            ctl.step();
        }
        let values = ctl.values().to_vec();
        ctl.select_algorithm(AlgorithmKind::Merge);
        assert_eq!(ctl.run_state(), RunState::Ready);
        assert_eq!(ctl.values(), values.as_slice());
        assert_eq!(ctl.step(), None);
    }

    #[test]
    fn reset_mid_run_zeroes_stats_and_stops() {
        let (mut ctl, clock) = controller(16);
        ctl.select_algorithm(AlgorithmKind::Quick);
        ctl.start_or_toggle();
        for _ in 0..10 {
            clock.advance(Duration::from_millis(5));
            ctl.step();
        }
        assert!(ctl.stats().elapsed > Duration::ZERO);

        ctl.reset_data();
        let stats = ctl.stats();
        assert_eq!(stats.comparisons, 0);
        assert_eq!(stats.swaps, 0);
        assert_eq!(stats.writes, 0);
        assert_eq!(stats.elapsed, Duration::ZERO);
        assert_eq!(ctl.run_state(), RunState::Ready);
        assert_eq!(ctl.algorithm(), Some(AlgorithmKind::Quick));
        assert_eq!(ctl.values().len(), 16);
    }

    #[test]
    fn reset_without_algorithm_stays_idle() {
        let (mut ctl, _) = controller(16);
        let before = ctl.values().to_vec();
        ctl.reset_data();
        assert_eq!(ctl.run_state(), RunState::Idle);
        assert_ne!(ctl.values(), before.as_slice(), "reset draws fresh values");
    }

    #[test]
    fn elapsed_tracks_clock_at_last_step() {
        let (mut ctl, clock) = controller(16);
        clock.advance(Duration::from_millis(1000));
        ctl.select_algorithm(AlgorithmKind::Bubble);
        ctl.start_or_toggle();
        clock.advance(Duration::from_millis(30));
        ctl.step();
        assert_eq!(ctl.stats().elapsed, Duration::from_millis(30));
        clock.advance(Duration::from_millis(70));
        assert_eq!(
            ctl.stats().elapsed,
            Duration::from_millis(30),
            "elapsed refreshes only on step"
        );
        ctl.step();
        assert_eq!(ctl.stats().elapsed, Duration::from_millis(100));
    }

    #[test]
    fn tick_steps_only_after_interval_strictly_passes() {
        let (mut ctl, _) = controller(16);
        ctl.select_algorithm(AlgorithmKind::Bubble);
        ctl.start_or_toggle();
        assert_eq!(ctl.interval(), Duration::from_millis(50));

        assert_eq!(ctl.tick(Duration::from_millis(30)), None);
        assert_eq!(ctl.tick(Duration::from_millis(20)), None, "50ms is not > 50ms");
        assert_eq!(ctl.tick(Duration::from_millis(1)), Some(StepOutcome::MoreWork));
        assert_eq!(ctl.steps(), StepId(1));
        assert_eq!(ctl.tick(Duration::from_millis(10)), None, "accumulator restarted");
    }

    #[test]
    fn tick_steps_at_most_once_per_call() {
        let (mut ctl, _) = controller(16);
        ctl.select_algorithm(AlgorithmKind::Bubble);
        ctl.start_or_toggle();
        ctl.tick(Duration::from_secs(10));
        assert_eq!(ctl.steps(), StepId(1));
    }

    #[test]
    fn speed_is_clamped() {
        let (mut ctl, _) = controller(4);
        for _ in 0..100 {
            ctl.handle_command(Command::SpeedUp);
        }
        assert_eq!(ctl.interval(), Duration::from_millis(10));
        for _ in 0..100 {
            ctl.handle_command(Command::SpeedDown);
        }
        assert_eq!(ctl.interval(), Duration::from_millis(500));
        ctl.set_speed(-45);
        assert_eq!(ctl.interval(), Duration::from_millis(455));
        ctl.set_speed(0);
        assert_eq!(ctl.interval(), Duration::from_millis(455));
    }

    #[test]
    fn speed_survives_reset_and_restart() {
        let (mut ctl, _) = controller(4);
        ctl.handle_command(Command::SpeedDown);
        ctl.handle_command(Command::SelectBubble);
        ctl.handle_command(Command::ToggleRun);
        ctl.handle_command(Command::Reset);
        assert_eq!(ctl.stats().interval, Duration::from_millis(60));
    }

    #[test]
    fn status_line_reflects_state() {
        let (mut ctl, _) = controller(4);
        assert_eq!(
            ctl.status_line(),
            "Algorithm: No Algorithm Selected (READY)"
        );
        ctl.handle_command(Command::SelectQuick);
        ctl.handle_command(Command::ToggleRun);
        assert_eq!(ctl.status_line(), "Algorithm: Quick Sort (RUNNING)");
        ctl.handle_command(Command::ToggleRun);
        assert_eq!(ctl.status_line(), "Algorithm: Quick Sort (PAUSED)");
    }

    #[test]
    fn replace_values_supports_empty_input() {
        let (mut ctl, _) = controller(4);
        ctl.select_algorithm(AlgorithmKind::Quick);
        ctl.replace_values(vec![]);
        ctl.start_or_toggle();
        assert_eq!(ctl.step(), Some(StepOutcome::MoreWork));
        assert_eq!(ctl.step(), Some(StepOutcome::Done));
        assert_eq!(ctl.run_state(), RunState::Completed);
        assert_eq!(ctl.stats().comparisons, 0);
    }
}
