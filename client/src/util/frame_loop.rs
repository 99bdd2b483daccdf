//! A cancellable `requestAnimationFrame` loop.
//!
//! The loop owns exactly one pending frame handle and the closure it points
//! at. [`FrameLoop::cancel`] revokes the handle before releasing the closure,
//! so a stale frame can never run against state reset after cancellation.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

#[derive(Default)]
struct Inner {
    handle: Option<i32>,
    callback: Option<Closure<dyn FnMut(f64)>>,
}

/// Drives a per-frame step until it reports completion or is cancelled.
#[derive(Clone, Default)]
pub struct FrameLoop {
    inner: Rc<RefCell<Inner>>,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.inner.borrow().callback.is_some()
    }

    /// Call `step` with each frame timestamp while it returns `true`.
    ///
    /// Any loop already running is cancelled first.
    pub fn start(&self, mut step: impl FnMut(f64) -> bool + 'static) {
        self.cancel();
        let weak: Weak<RefCell<Inner>> = Rc::downgrade(&self.inner);
        let callback = Closure::wrap(Box::new(move |timestamp: f64| {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            inner.borrow_mut().handle = None;
            if !step(timestamp) {
                inner.borrow_mut().callback.take();
                return;
            }
            // `step` may have cancelled the loop.
            if inner.borrow().callback.is_some() {
                request_frame(&inner);
            }
        }) as Box<dyn FnMut(f64)>);
        self.inner.borrow_mut().callback = Some(callback);
        request_frame(&self.inner);
    }

    /// Stop the loop. Idempotent.
    pub fn cancel(&self) {
        let (handle, callback) = {
            let mut inner = self.inner.borrow_mut();
            (inner.handle.take(), inner.callback.take())
        };
        if let (Some(id), Some(window)) = (handle, web_sys::window()) {
            if let Err(err) = window.cancel_animation_frame(id) {
                log::warn!("cancel_animation_frame failed: {err:?}");
            }
        }
        drop(callback);
    }
}

fn request_frame(inner: &Rc<RefCell<Inner>>) {
    let Some(window) = web_sys::window() else {
        inner.borrow_mut().callback.take();
        return;
    };
    let requested = {
        let guard = inner.borrow();
        let Some(callback) = guard.callback.as_ref() else {
            return;
        };
        window.request_animation_frame(callback.as_ref().unchecked_ref())
    };
    match requested {
        Ok(id) => inner.borrow_mut().handle = Some(id),
        Err(err) => {
            log::error!("request_animation_frame failed: {err:?}");
            inner.borrow_mut().callback.take();
        }
    }
}
