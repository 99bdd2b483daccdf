use rand::Rng;

use crate::config::{ConfigError, SpinConfig};
use crate::consts::POINTER_ANGLE;
use crate::geometry;
use crate::i18n::Language;
use crate::options::{OptionId, WheelOption};
use crate::scheduler::{SpinScheduler, Tick};
use crate::state::WheelState;
use crate::storage::{self, KeyValueStore};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from engine calls for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Redraw the canvas and refresh the option list.
    RenderNeeded,
    /// Flush the option list to storage.
    Persist,
    /// A spin began: disable the spin control and hide the last result.
    SpinStarted,
    /// A spin completed with a winner.
    SpinFinished(SpinResult),
    /// Remove `id` after `delay_ms` via [`WheelCore::apply_auto_remove`].
    ScheduleAutoRemove { id: OptionId, delay_ms: u32 },
}

/// Outcome of one completed spin. Not retained by the engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinResult {
    pub winner_id: OptionId,
    pub winner_index: usize,
    pub final_rotation: f64,
}

/// Engine state and every operation the UI may invoke.
///
/// Mutations are refused while a spin is in flight, with the single
/// exception of [`WheelCore::apply_auto_remove`].
#[derive(Debug, Clone, Default)]
pub struct WheelCore {
    pub state: WheelState,
    scheduler: SpinScheduler,
    /// Remove the winner shortly after each spin. Read at completion time.
    pub auto_remove: bool,
}

impl WheelCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with overridden tunables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `config` fails validation.
    pub fn with_config(config: SpinConfig) -> Result<Self, ConfigError> {
        Ok(Self { scheduler: SpinScheduler::new(config)?, ..Self::default() })
    }

    // --- Data inputs ---

    /// Populate the store at startup.
    ///
    /// `None` means nothing usable was persisted; the store is then seeded
    /// with `language`'s default options and a persist is requested.
    pub fn hydrate(&mut self, records: Option<Vec<WheelOption>>, language: Language) -> Vec<Action> {
        self.scheduler.cancel(&mut self.state);
        if let Some(records) = records {
            self.state.options.load(records);
            return vec![Action::RenderNeeded];
        }
        self.state.options.clear();
        for text in language.default_options() {
            self.state.options.add(text);
        }
        log::debug!("seeded {} default options", self.state.options.len());
        vec![Action::RenderNeeded, Action::Persist]
    }

    /// Append an option. Blank text and in-flight spins are ignored.
    pub fn add_option(&mut self, text: &str) -> Vec<Action> {
        if self.state.spinning {
            return Vec::new();
        }
        match self.state.options.add(text) {
            Some(_) => vec![Action::RenderNeeded, Action::Persist],
            None => Vec::new(),
        }
    }

    pub fn remove_option(&mut self, id: &OptionId) -> Vec<Action> {
        if self.state.spinning {
            return Vec::new();
        }
        self.remove_unguarded(id)
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Vec<Action> {
        if self.state.spinning {
            return Vec::new();
        }
        self.state.options.shuffle(rng);
        vec![Action::RenderNeeded, Action::Persist]
    }

    /// Remove every option and reset rotation to zero.
    pub fn clear(&mut self) -> Vec<Action> {
        if self.state.spinning {
            return Vec::new();
        }
        self.state.options.clear();
        self.state.rotation = 0.0;
        vec![Action::RenderNeeded, Action::Persist]
    }

    pub fn set_auto_remove(&mut self, enabled: bool) {
        self.auto_remove = enabled;
    }

    // --- Spin lifecycle ---

    /// Start a spin at `now_ms`. Ignored if one is running or fewer than two
    /// options exist.
    pub fn start_spin<R: Rng + ?Sized>(&mut self, now_ms: f64, rng: &mut R) -> Vec<Action> {
        match self.scheduler.start(&mut self.state, now_ms, rng) {
            Ok(spin) => {
                log::debug!(
                    "spin started: from {:.3} rad, adding {:.3} rad",
                    spin.start_rotation,
                    spin.total_delta
                );
                vec![Action::SpinStarted, Action::RenderNeeded]
            }
            Err(reason) => {
                log::debug!("spin ignored: {reason}");
                Vec::new()
            }
        }
    }

    /// Advance the spin animation to `now_ms`.
    pub fn tick(&mut self, now_ms: f64) -> Vec<Action> {
        match self.scheduler.tick(&mut self.state, now_ms) {
            Tick::Idle | Tick::Coalesced => Vec::new(),
            Tick::Frame { .. } => vec![Action::RenderNeeded],
            Tick::Finished { rotation } => self.finish(rotation),
        }
    }

    /// Abort a spin during teardown without reporting a result.
    pub fn cancel_spin(&mut self) -> Vec<Action> {
        if self.scheduler.cancel(&mut self.state) {
            log::debug!("spin cancelled at {:.3} rad", self.state.rotation);
            vec![Action::RenderNeeded]
        } else {
            Vec::new()
        }
    }

    /// Deferred auto-removal of a past winner.
    ///
    /// Bypasses the spinning guard. A winner that is already gone is a no-op.
    pub fn apply_auto_remove(&mut self, id: &OptionId) -> Vec<Action> {
        self.remove_unguarded(id)
    }

    fn remove_unguarded(&mut self, id: &OptionId) -> Vec<Action> {
        match self.state.options.remove(id) {
            Some(_) => vec![Action::RenderNeeded, Action::Persist],
            None => Vec::new(),
        }
    }

    fn finish(&mut self, rotation: f64) -> Vec<Action> {
        let count = self.state.options.len();
        let Some(winner) = geometry::resolve_winner(rotation, count, POINTER_ANGLE)
            .and_then(|index| self.state.options.at(index).map(|option| (index, option.id)))
        else {
            log::warn!("spin finished with no options to pick from");
            return vec![Action::RenderNeeded];
        };

        let (winner_index, winner_id) = winner;
        let result = SpinResult { winner_id, winner_index, final_rotation: rotation };
        log::debug!("spin finished: index {winner_index} at {rotation:.3} rad");

        let mut actions = vec![Action::RenderNeeded, Action::SpinFinished(result)];
        if self.auto_remove {
            actions.push(Action::ScheduleAutoRemove {
                id: winner_id,
                delay_ms: self.scheduler.config().auto_remove_delay_ms,
            });
        }
        actions
    }

    // --- Persistence ---

    /// Write the option list to `store`, logging failures.
    pub fn persist<S: KeyValueStore + ?Sized>(&self, store: &mut S) {
        if let Err(err) = storage::save_options(store, self.state.options.as_slice()) {
            log::error!("failed to save options: {err}");
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn can_spin(&self) -> bool {
        self.state.can_spin()
    }

    #[must_use]
    pub fn is_spinning(&self) -> bool {
        self.state.spinning
    }

    #[must_use]
    pub fn rotation(&self) -> f64 {
        self.state.rotation
    }

    #[must_use]
    pub fn options(&self) -> &[WheelOption] {
        self.state.options.as_slice()
    }

    /// The option a result refers to, if it still exists.
    #[must_use]
    pub fn winner(&self, result: &SpinResult) -> Option<&WheelOption> {
        self.state.options.get(&result.winner_id)
    }

    #[must_use]
    pub fn config(&self) -> &SpinConfig {
        self.scheduler.config()
    }
}
