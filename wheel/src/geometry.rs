//! Segment layout and winner resolution.
//!
//! Angles follow the 2D canvas convention: radians, measured from +x, growing
//! clockwise on screen because y points down. Segment `i` spans
//! `[rotation + i * seg, rotation + (i + 1) * seg)`. The renderer draws
//! wedges with [`segment_bounds`] and the resolver inverts the same mapping
//! with [`segment_at`], so both agree on what sits under
//! [`POINTER_ANGLE`](crate::consts::POINTER_ANGLE).

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use crate::consts::FULL_TURN;

/// Wrap an angle into `[0, 2π)`.
#[must_use]
pub fn normalize_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(FULL_TURN);
    // rem_euclid can round up to exactly 2π for tiny negative inputs.
    if wrapped >= FULL_TURN { 0.0 } else { wrapped }
}

/// Angular width of one segment. `count` must be non-zero.
#[must_use]
pub fn segment_angle(count: usize) -> f64 {
    FULL_TURN / count as f64
}

/// Start and end angle of segment `index` under `rotation`.
#[must_use]
pub fn segment_bounds(index: usize, rotation: f64, count: usize) -> (f64, f64) {
    let seg = segment_angle(count);
    let start = rotation + index as f64 * seg;
    (start, start + seg)
}

/// Mid-angle of segment `index`, where its label is drawn.
#[must_use]
pub fn segment_mid_angle(index: usize, rotation: f64, count: usize) -> f64 {
    let (start, end) = segment_bounds(index, rotation, count);
    start + (end - start) / 2.0
}

/// Index of the segment covering the absolute direction `angle`.
///
/// Returns `None` when `count == 0`.
#[must_use]
pub fn segment_at(angle: f64, rotation: f64, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }
    if count == 1 {
        return Some(0);
    }
    let offset = normalize_angle(angle - normalize_angle(rotation));
    let raw = (offset / segment_angle(count)).floor();
    // `offset` is in [0, 2π) so `raw` is a small non-negative integer.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let index = raw as usize;
    Some(index % count)
}

/// Winning segment for a terminal rotation with the pointer at `pointer_angle`.
///
/// Returns `None` for an empty wheel so callers never index with garbage.
#[must_use]
pub fn resolve_winner(final_rotation: f64, count: usize, pointer_angle: f64) -> Option<usize> {
    segment_at(pointer_angle, final_rotation, count)
}
