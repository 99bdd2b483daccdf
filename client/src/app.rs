//! Root component: restores persisted state and lays out the page.

use leptos::prelude::*;
use wheel::engine::WheelCore;
use wheel::options::WheelOption;

use crate::actions::execute;
use crate::components::actions_panel::ActionsPanel;
use crate::components::header::Header;
use crate::components::option_panel::OptionPanel;
use crate::components::wheel_host::WheelHost;
use crate::state::ui::UiState;
use crate::util::{language, theme};

/// Options saved by a previous visit, if any are readable.
fn load_records() -> Option<Vec<WheelOption>> {
    #[cfg(feature = "csr")]
    {
        match wheel::storage::LocalStore::open() {
            Ok(store) => wheel::storage::load_options(&store),
            Err(err) => {
                log::warn!("saved options unavailable: {err}");
                None
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

#[component]
pub fn App() -> impl IntoView {
    let initial_theme = theme::read_preference();
    let initial_language = language::detect();
    theme::apply(initial_theme);
    language::apply(initial_language);

    let core = RwSignal::new(WheelCore::new());
    let ui = RwSignal::new(UiState::new(initial_theme, initial_language));
    provide_context(core);
    provide_context(ui);

    let records = load_records();
    let mut actions = Vec::new();
    core.update(|c| actions = c.hydrate(records, initial_language));
    execute(actions, core, ui);

    view! {
        <div class="app">
            <Header />
            <main class="app__main">
                <WheelHost />
                <aside class="app__sidebar">
                    <OptionPanel />
                    <ActionsPanel />
                </aside>
            </main>
        </div>
    }
}
