//! Shuffle, clear-all and the auto-remove switch.

use leptos::prelude::*;
use wheel::engine::WheelCore;

use crate::actions::execute;
use crate::state::ui::UiState;

/// Ask the user to confirm a destructive action.
fn confirm(message: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        match window.confirm_with_message(message) {
            Ok(answer) => answer,
            Err(err) => {
                log::warn!("confirm dialog failed: {err:?}");
                false
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = message;
        true
    }
}

#[component]
pub fn ActionsPanel() -> impl IntoView {
    let core = expect_context::<RwSignal<WheelCore>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let spinning = move || core.with(WheelCore::is_spinning);

    let on_shuffle = move |_| {
        let mut rng = crate::util::rng::seeded();
        let mut actions = Vec::new();
        core.update(|c| actions = c.shuffle(&mut rng));
        execute(actions, core, ui);
    };

    let on_clear = move |_| {
        if core.with_untracked(WheelCore::is_spinning) {
            return;
        }
        let has_options = core.with_untracked(|c| !c.options().is_empty());
        if has_options && !confirm(ui.get_untracked().strings().confirm_clear) {
            return;
        }
        let mut actions = Vec::new();
        core.update(|c| actions = c.clear());
        ui.update(UiState::hide_result);
        execute(actions, core, ui);
    };

    let on_auto_remove = move |ev: leptos::ev::Event| {
        let enabled = event_target_checked(&ev);
        core.update(|c| c.set_auto_remove(enabled));
    };

    view! {
        <section class="panel actions-panel">
            <h2 class="panel__heading">{move || ui.get().strings().heading_actions}</h2>
            <div class="actions-panel__buttons">
                <button class="btn" disabled=spinning on:click=on_shuffle>
                    {move || ui.get().strings().shuffle}
                </button>
                <button class="btn btn--danger" disabled=spinning on:click=on_clear>
                    {move || ui.get().strings().clear_all}
                </button>
            </div>
            <label class="actions-panel__toggle">
                <input
                    type="checkbox"
                    prop:checked=move || core.with(|c| c.auto_remove)
                    on:change=on_auto_remove
                />
                <span>{move || ui.get().strings().auto_remove}</span>
            </label>
        </section>
    }
}
