//! The single owned wheel state shared by the store, scheduler, and renderer.

use crate::consts::MIN_SPIN_OPTIONS;
use crate::options::OptionStore;

/// Everything the wheel draws from. Owned by [`crate::engine::WheelCore`]
/// and lent to the scheduler and render step; there are no globals.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WheelState {
    pub options: OptionStore,
    /// Absolute rotation in radians. Only reset by clearing all options.
    pub rotation: f64,
    /// True strictly between spin start and completion (or cancellation).
    pub spinning: bool,
}

impl WheelState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the spin control should be enabled.
    #[must_use]
    pub fn can_spin(&self) -> bool {
        !self.spinning && self.options.len() >= MIN_SPIN_OPTIONS
    }
}
