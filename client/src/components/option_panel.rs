//! Option entry and the list of current options.

use leptos::prelude::*;
use wheel::engine::WheelCore;
use wheel::options::WheelOption;

use crate::actions::{execute, submit_draft};
use crate::state::ui::UiState;

/// Input row plus the option list with per-row delete.
#[component]
pub fn OptionPanel() -> impl IntoView {
    let core = expect_context::<RwSignal<WheelCore>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let submit = move || {
        if core.with_untracked(WheelCore::is_spinning) {
            return;
        }
        let mut actions = Vec::new();
        core.update(|c| ui.update(|u| actions = submit_draft(c, u)));
        execute(actions, core, ui);
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            submit();
        }
    };

    let remove = move |option: &WheelOption| {
        let id = option.id;
        move |_| {
            let mut actions = Vec::new();
            core.update(|c| actions = c.remove_option(&id));
            execute(actions, core, ui);
        }
    };

    let options = move || core.with(|c| c.options().to_vec());
    let spinning = move || core.with(WheelCore::is_spinning);

    view! {
        <section class="panel option-panel">
            <h2 class="panel__heading">{move || ui.get().strings().heading_add_options}</h2>
            <div class="option-panel__input-row">
                <input
                    class="option-panel__input"
                    type="text"
                    placeholder=move || ui.get().strings().input_placeholder
                    prop:value=move || ui.get().draft
                    on:input=move |ev| ui.update(|u| u.draft = event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button class="btn btn--primary" disabled=spinning on:click=move |_| submit()>
                    {move || ui.get().strings().add}
                </button>
            </div>

            <h2 class="panel__heading">
                {move || ui.get().strings().heading_options}
                <span class="option-panel__count">{move || core.with(|c| c.options().len())}</span>
            </h2>
            <Show
                when=move || core.with(|c| !c.options().is_empty())
                fallback=move || {
                    let [first, second] = ui.get().strings().empty_state;
                    view! {
                        <p class="option-panel__empty">{first}<br />{second}</p>
                    }
                }
            >
                <ul class="option-panel__list">
                    <For each=options key=|option| option.id let:option>
                        <li class="option-panel__item">
                            <span
                                class="option-panel__swatch"
                                style=format!("background:{}", option.color())
                            ></span>
                            <span class="option-panel__text">{option.text.clone()}</span>
                            <button
                                class="btn btn--icon option-panel__delete"
                                disabled=spinning
                                on:click=remove(&option)
                            >
                                "×"
                            </button>
                        </li>
                    </For>
                </ul>
            </Show>
        </section>
    }
}
