//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from component logic.
//! Everything here compiles natively without the `csr` feature so the pure
//! parts stay testable.

#[cfg(feature = "csr")]
pub mod frame_loop;
pub mod language;
pub mod rng;
pub mod theme;
