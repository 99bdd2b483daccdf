//! Executes the [`Action`]s returned by `WheelCore` calls.
//!
//! UI-visible consequences are folded into [`UiState`] by [`reflect`], which
//! is pure. Browser side effects (storage, timers) run only under `csr`.

#[cfg(test)]
#[path = "actions_test.rs"]
mod actions_test;

use leptos::prelude::*;
use wheel::engine::{Action, WheelCore};

use crate::state::ui::UiState;

/// Fold one action into the UI state.
pub fn reflect(action: &Action, core: &WheelCore, ui: &mut UiState) {
    match action {
        Action::RenderNeeded => ui.request_redraw(),
        Action::SpinStarted => ui.hide_result(),
        Action::SpinFinished(result) => match core.winner(result) {
            Some(winner) => ui.show_result(winner),
            None => ui.hide_result(),
        },
        Action::Persist | Action::ScheduleAutoRemove { .. } => {}
    }
}

/// Add the input draft as an option.
///
/// While a spin runs the draft is kept so nothing typed is lost.
pub fn submit_draft(core: &mut WheelCore, ui: &mut UiState) -> Vec<Action> {
    if core.is_spinning() {
        return Vec::new();
    }
    match ui.take_draft() {
        Some(text) => core.add_option(&text),
        None => Vec::new(),
    }
}

/// Apply `actions` to the UI and run their side effects.
pub fn execute(actions: Vec<Action>, core: RwSignal<WheelCore>, ui: RwSignal<UiState>) {
    if actions.is_empty() {
        return;
    }
    core.with_untracked(|core_ref| {
        ui.update(|ui_state| {
            for action in &actions {
                reflect(action, core_ref, ui_state);
            }
        });
    });
    for action in actions {
        match action {
            Action::Persist => persist(core),
            Action::ScheduleAutoRemove { id, delay_ms } => schedule_auto_remove(core, ui, id, delay_ms),
            Action::RenderNeeded | Action::SpinStarted | Action::SpinFinished(_) => {}
        }
    }
}

fn persist(core: RwSignal<WheelCore>) {
    #[cfg(feature = "csr")]
    {
        match wheel::storage::LocalStore::open() {
            Ok(mut store) => core.with_untracked(|c| c.persist(&mut store)),
            Err(err) => log::warn!("options not saved: {err}"),
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = core;
    }
}

fn schedule_auto_remove(
    core: RwSignal<WheelCore>,
    ui: RwSignal<UiState>,
    id: wheel::options::OptionId,
    delay_ms: u32,
) {
    #[cfg(feature = "csr")]
    {
        gloo_timers::callback::Timeout::new(delay_ms, move || {
            let mut actions = Vec::new();
            core.update(|c| actions = c.apply_auto_remove(&id));
            execute(actions, core, ui);
        })
        .forget();
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (core, ui, id, delay_ms);
    }
}
