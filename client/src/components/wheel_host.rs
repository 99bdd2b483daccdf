//! Canvas host for the wheel, the spin button and the result banner.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounts a `wheel::render::WheelCanvas` on the `<canvas>` element, drives
//! `WheelCore::tick` from a `requestAnimationFrame` loop while a spin runs,
//! and tears the loop down when the page is hidden or unloaded.

#[cfg(feature = "csr")]
use std::cell::RefCell;
#[cfg(feature = "csr")]
use std::rc::Rc;

use leptos::prelude::*;
#[cfg(feature = "csr")]
use wheel::engine::Action;
use wheel::engine::WheelCore;
#[cfg(feature = "csr")]
use wheel::i18n::Language;
#[cfg(feature = "csr")]
use wheel::palette::Theme;
#[cfg(feature = "csr")]
use wheel::render::WheelCanvas;

#[cfg(feature = "csr")]
use crate::actions::execute;
use crate::state::ui::{RESULT_TEXT_COLOR, UiState};
#[cfg(feature = "csr")]
use crate::util::frame_loop::FrameLoop;

const CANVAS_SIZE_PX: &str = "500";

#[cfg(feature = "csr")]
type Surface = Rc<RefCell<Option<WheelCanvas>>>;

#[cfg(feature = "csr")]
fn paint(canvas: &mut WheelCanvas, core: &WheelCore, theme: Theme, language: Language) {
    let label_max_chars = core.config().label_max_chars;
    if let Err(err) = canvas.render(&core.state, theme, language.strings(), label_max_chars) {
        log::error!("wheel render failed: {err:?}");
    }
}

/// Milliseconds on the same clock as animation frame timestamps.
#[cfg(feature = "csr")]
fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map_or_else(js_sys::Date::now, |p| p.now())
}

/// One animation frame. Returns whether the loop should continue.
#[cfg(feature = "csr")]
fn step(core: RwSignal<WheelCore>, ui: RwSignal<UiState>, surface: &Surface, timestamp: f64) -> bool {
    let mut actions = Vec::new();
    core.update(|c| actions = c.tick(timestamp));
    if actions.is_empty() {
        return core.with_untracked(WheelCore::is_spinning);
    }
    let (theme, language) = ui.with_untracked(|u| (u.theme, u.language));
    if let Some(canvas) = surface.borrow_mut().as_mut() {
        core.with_untracked(|c| paint(canvas, c, theme, language));
    }
    // Drawn above; the remaining actions are announcements and timers.
    actions.retain(|action| *action != Action::RenderNeeded);
    execute(actions, core, ui);
    core.with_untracked(WheelCore::is_spinning)
}

/// Run `handler` whenever `target` fires `event` for the rest of the page's life.
#[cfg(feature = "csr")]
fn listen(target: &web_sys::EventTarget, event: &str, handler: impl FnMut() + 'static) {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let callback = Closure::<dyn FnMut()>::new(handler);
    match target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
        Ok(()) => callback.forget(),
        Err(err) => log::warn!("failed to listen for {event}: {err:?}"),
    }
}

/// Cancel the frame loop, then stop the spin so the controls come back.
#[cfg(feature = "csr")]
fn install_teardown(core: RwSignal<WheelCore>, ui: RwSignal<UiState>, frames: &FrameLoop) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let frames = frames.clone();
    let teardown: Rc<dyn Fn()> = Rc::new(move || {
        frames.cancel();
        let mut actions = Vec::new();
        core.update(|c| actions = c.cancel_spin());
        execute(actions, core, ui);
    });

    for event in ["pagehide", "beforeunload"] {
        let teardown = Rc::clone(&teardown);
        listen(&window, event, move || teardown());
    }
    if let Some(document) = window.document() {
        let hidden_check = document.clone();
        listen(&document, "visibilitychange", move || {
            if hidden_check.hidden() {
                teardown();
            }
        });
    }
}

/// Wheel canvas, spin button and result banner.
#[component]
pub fn WheelHost() -> impl IntoView {
    let core = expect_context::<RwSignal<WheelCore>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    #[cfg(feature = "csr")]
    let surface: Surface = Rc::new(RefCell::new(None));
    #[cfg(feature = "csr")]
    let frames = FrameLoop::new();

    #[cfg(feature = "csr")]
    {
        let surface = Rc::clone(&surface);
        Effect::new(move || {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            if surface.borrow().is_some() {
                return;
            }
            match WheelCanvas::new(canvas) {
                Ok(mounted) => {
                    *surface.borrow_mut() = Some(mounted);
                    ui.update(UiState::request_redraw);
                }
                Err(err) => log::error!("wheel canvas unavailable: {err:?}"),
            }
        });
    }

    #[cfg(feature = "csr")]
    {
        // Full redraws on store mutations, theme and language changes.
        let scene = Memo::new(move |_| ui.with(|u| (u.theme, u.language, u.redraw_seq)));
        let surface = Rc::clone(&surface);
        Effect::new(move || {
            let (theme, language, _) = scene.get();
            let mut guard = surface.borrow_mut();
            let Some(canvas) = guard.as_mut() else {
                return;
            };
            canvas.invalidate();
            core.with_untracked(|c| paint(canvas, c, theme, language));
        });
    }

    #[cfg(feature = "csr")]
    install_teardown(core, ui, &frames);

    let on_spin = {
        #[cfg(feature = "csr")]
        {
            let surface = Rc::clone(&surface);
            let frames = frames.clone();
            move |_: leptos::ev::MouseEvent| {
                let mut rng = crate::util::rng::seeded();
                let now = now_ms();
                let mut actions = Vec::new();
                core.update(|c| actions = c.start_spin(now, &mut rng));
                if !actions.contains(&Action::SpinStarted) {
                    return;
                }
                execute(actions, core, ui);
                let surface = Rc::clone(&surface);
                frames.start(move |timestamp| step(core, ui, &surface, timestamp));
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_: leptos::ev::MouseEvent| {}
        }
    };

    let banner = move || {
        let state = ui.get();
        let text = state.result_text()?;
        let color = state.result.as_ref()?.color;
        let style = format!("background:{color};color:{RESULT_TEXT_COLOR}");
        Some(view! { <div class="result result--show" style=style>{text}</div> })
    };

    view! {
        <section class="wheel-host">
            <div class="wheel-host__stage">
                <canvas
                    class="wheel-host__canvas"
                    node_ref=canvas_ref
                    width=CANVAS_SIZE_PX
                    height=CANVAS_SIZE_PX
                ></canvas>
                <button
                    class="btn wheel-host__spin"
                    disabled=move || !core.with(WheelCore::can_spin)
                    on:click=on_spin
                >
                    {move || ui.get().strings().spin}
                </button>
            </div>
            {banner}
        </section>
    }
}
