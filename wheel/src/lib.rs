//! Spin-the-wheel engine for the browser.
//!
//! This crate is compiled to WebAssembly and runs in the browser, but every
//! piece with real logic is plain Rust and tested natively. It owns the
//! option list, the spin animation, winner resolution, the draw plan, and
//! persistence. The UI layer (`client`) only wires DOM events to
//! [`engine::WheelCore`] and executes the returned [`engine::Action`]s.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | [`engine::WheelCore`]: the single mutation entry point |
//! | [`state`] | [`state::WheelState`]: options, rotation, spinning flag |
//! | [`options`] | Ordered option store |
//! | [`geometry`] | Segment layout and winner resolution |
//! | [`scheduler`] | Frame-capped, eased spin state machine |
//! | [`render`] | Pure draw plan plus the `<canvas>` painter |
//! | [`palette`] | Segment colours and theme |
//! | [`i18n`] | UI strings and default options per language |
//! | [`storage`] | Key-value persistence (`localStorage` or in-memory) |
//! | [`config`] | Spin and render tunables |
//! | [`consts`] | Shared numeric constants |

pub mod config;
pub mod consts;
pub mod engine;
pub mod geometry;
pub mod i18n;
pub mod options;
pub mod palette;
pub mod render;
pub mod scheduler;
pub mod state;
pub mod storage;
