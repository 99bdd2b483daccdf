//! Spin animation state machine: `Idle -> Running -> Idle`.
//!
//! The scheduler owns exactly one in-flight spin. The host calls
//! [`SpinScheduler::tick`] from its display-synchronized callback with a
//! wall-clock timestamp; rotation is a function of elapsed time, never of the
//! number of ticks. Ticks closer together than the frame interval are
//! coalesced so render work stays bounded on high refresh-rate displays.
//!
//! Cancellation drops the active spin before touching [`WheelState`], so a
//! late tick after [`SpinScheduler::cancel`] always observes `Idle`.

#[cfg(test)]
#[path = "scheduler_test.rs"]
mod scheduler_test;

use rand::Rng;

use crate::config::{ConfigError, SpinConfig};
use crate::consts::{FULL_TURN, MIN_SPIN_OPTIONS};
use crate::state::WheelState;

/// Why a spin request was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SpinRejected {
    #[error("a spin is already in progress")]
    AlreadySpinning,
    #[error("need at least 2 options to spin, have {count}")]
    TooFewOptions { count: usize },
}

/// Parameters of the spin currently in flight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveSpin {
    pub started_ms: f64,
    pub start_rotation: f64,
    /// Extra rotation added over the whole spin, in radians.
    pub total_delta: f64,
    last_frame_ms: f64,
}

impl ActiveSpin {
    /// Rotation the wheel must show once the spin completes.
    #[must_use]
    pub fn terminal_rotation(&self) -> f64 {
        self.start_rotation + self.total_delta
    }

    /// Eased rotation `elapsed_ms` after the spin started.
    #[must_use]
    pub fn rotation_at(&self, elapsed_ms: f64, config: &SpinConfig) -> f64 {
        let progress = (elapsed_ms / config.duration_ms).clamp(0.0, 1.0);
        self.start_rotation + self.total_delta * ease_out(progress, config.ease_exponent)
    }
}

/// Result of a single tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tick {
    /// No spin in flight.
    Idle,
    /// Too soon after the previous frame; nothing changed.
    Coalesced,
    /// Rotation advanced; redraw.
    Frame { rotation: f64 },
    /// Spin completed at the exact terminal rotation.
    Finished { rotation: f64 },
}

/// `1 - (1 - t)^k`: fast start, smooth stop, no overshoot.
#[must_use]
pub fn ease_out(progress: f64, exponent: f64) -> f64 {
    let t = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powf(exponent)
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
enum Phase {
    #[default]
    Idle,
    Running(ActiveSpin),
}

#[derive(Debug, Clone, Default)]
pub struct SpinScheduler {
    config: SpinConfig,
    phase: Phase,
}

impl SpinScheduler {
    /// Build a scheduler for `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `config` fails [`SpinConfig::validate`];
    /// an empty turn range would otherwise break [`SpinScheduler::start`].
    pub fn new(config: SpinConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config, phase: Phase::Idle })
    }

    #[must_use]
    pub fn config(&self) -> &SpinConfig {
        &self.config
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        matches!(self.phase, Phase::Running(_))
    }

    /// The spin in flight, if any.
    #[must_use]
    pub fn active(&self) -> Option<&ActiveSpin> {
        match &self.phase {
            Phase::Running(spin) => Some(spin),
            Phase::Idle => None,
        }
    }

    /// Begin a spin from the current rotation.
    ///
    /// The added rotation is drawn uniformly from `[min_turns, max_turns)`
    /// full turns.
    ///
    /// # Errors
    ///
    /// Returns [`SpinRejected`] when a spin is already running or the wheel
    /// holds fewer than two options. The state is left untouched.
    pub fn start<R: Rng + ?Sized>(
        &mut self,
        state: &mut WheelState,
        now_ms: f64,
        rng: &mut R,
    ) -> Result<ActiveSpin, SpinRejected> {
        if self.is_running() || state.spinning {
            return Err(SpinRejected::AlreadySpinning);
        }
        let count = state.options.len();
        if count < MIN_SPIN_OPTIONS {
            return Err(SpinRejected::TooFewOptions { count });
        }

        let turns = rng.random_range(self.config.min_turns..self.config.max_turns);
        let spin = ActiveSpin {
            started_ms: now_ms,
            start_rotation: state.rotation,
            total_delta: turns * FULL_TURN,
            last_frame_ms: now_ms,
        };
        self.phase = Phase::Running(spin);
        state.spinning = true;
        Ok(spin)
    }

    /// Advance the spin to `now_ms`.
    pub fn tick(&mut self, state: &mut WheelState, now_ms: f64) -> Tick {
        let Phase::Running(spin) = &mut self.phase else {
            return Tick::Idle;
        };

        let elapsed = now_ms - spin.started_ms;
        if elapsed >= self.config.duration_ms {
            let rotation = spin.terminal_rotation();
            self.phase = Phase::Idle;
            state.rotation = rotation;
            state.spinning = false;
            return Tick::Finished { rotation };
        }

        let since_frame = now_ms - spin.last_frame_ms;
        if since_frame < self.config.frame_interval_ms {
            return Tick::Coalesced;
        }
        if self.config.frame_interval_ms > 0.0 {
            spin.last_frame_ms = now_ms - (since_frame % self.config.frame_interval_ms);
        } else {
            spin.last_frame_ms = now_ms;
        }

        // Clock jitter must never run the wheel backwards.
        let rotation = spin.rotation_at(elapsed, &self.config).max(state.rotation);
        state.rotation = rotation;
        Tick::Frame { rotation }
    }

    /// Abort the spin without completing it. Idempotent.
    ///
    /// Returns `true` if a spin was actually running.
    pub fn cancel(&mut self, state: &mut WheelState) -> bool {
        let was_running = self.is_running();
        self.phase = Phase::Idle;
        state.spinning = false;
        was_running
    }
}
