//! Shared numeric constants for the wheel crate.

use std::f64::consts::{FRAC_PI_2, TAU};

// ── Geometry ────────────────────────────────────────────────────

/// Direction of the fixed pointer in canvas angle space (y grows downward,
/// angles grow clockwise from +x). `3π/2` is the top of the wheel.
///
/// Both the renderer and the winner resolver read this constant.
pub const POINTER_ANGLE: f64 = 3.0 * FRAC_PI_2;

/// One full turn in radians.
pub const FULL_TURN: f64 = TAU;

// ── Spin timing ─────────────────────────────────────────────────

/// Fixed spin duration in milliseconds.
pub const SPIN_DURATION_MS: f64 = 3500.0;

/// Lower bound (inclusive) of full turns per spin.
pub const MIN_TURNS: f64 = 5.0;

/// Upper bound (exclusive) of full turns per spin.
pub const MAX_TURNS: f64 = 7.0;

/// Target frame interval for a 60 Hz cap.
pub const FRAME_INTERVAL_MS: f64 = 1000.0 / 60.0;

/// Exponent of the ease-out curve `1 - (1 - t)^k`.
pub const EASE_EXPONENT: f64 = 3.5;

/// Delay between a resolved result and the auto-removal of the winner.
pub const AUTO_REMOVE_DELAY_MS: u32 = 2000;

// ── Rendering ───────────────────────────────────────────────────

/// Labels longer than this many characters are cut and suffixed with `...`.
pub const LABEL_MAX_CHARS: usize = 20;

/// Radius fraction at which wedge labels are centered.
pub const LABEL_RADIUS_RATIO: f64 = 0.65;

/// Gap between the canvas edge and the wheel rim, in CSS pixels.
pub const WHEEL_MARGIN_PX: f64 = 10.0;

/// Minimum option count for the spin control to be enabled.
pub const MIN_SPIN_OPTIONS: usize = 2;
