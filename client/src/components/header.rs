//! Page header with title, theme toggle and language picker.

use leptos::prelude::*;
use wheel::i18n::Language;
use wheel::palette::Theme;

use crate::state::ui::UiState;
use crate::util::{language, theme};

#[component]
pub fn Header() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let on_toggle_theme = move |_| {
        let mut next = Theme::default();
        ui.update(|u| next = u.toggle_theme());
        theme::select(next);
    };

    let on_language = move |ev: leptos::ev::Event| {
        let Some(next) = Language::from_code(&event_target_value(&ev)) else {
            return;
        };
        let mut changed = false;
        ui.update(|u| changed = u.set_language(next));
        if changed {
            language::select(next);
        }
    };

    view! {
        <header class="header">
            <div class="header__titles">
                <h1 class="header__title">"SpinSelector"</h1>
                <p class="header__subtitle">{move || ui.get().strings().subtitle}</p>
            </div>
            <div class="header__controls">
                <button
                    class="btn header__theme-toggle"
                    on:click=on_toggle_theme
                    title="Toggle theme"
                >
                    {move || if ui.get().theme == Theme::Dark { "☀" } else { "☾" }}
                </button>
                <select
                    class="header__lang"
                    prop:value=move || ui.get().language.code()
                    on:change=on_language
                >
                    {Language::ALL
                        .into_iter()
                        .map(|lang| {
                            view! { <option value=lang.code()>{lang.label()}</option> }
                        })
                        .collect_view()}
                </select>
            </div>
        </header>
    }
}
