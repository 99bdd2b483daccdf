//! Rendering: turns wheel state into draw commands and paints them.
//!
//! [`plan`] is pure and produces a [`DrawCommand`] list in canvas angle space.
//! [`draw`] is the only function that touches
//! [`web_sys::CanvasRenderingContext2d`]; it scales the plan to the canvas
//! size and does not mutate any wheel state.
//!
//! Wedge placement comes from [`geometry::segment_bounds`] and the pointer is
//! drawn at [`POINTER_ANGLE`], the same inputs the winner resolver uses.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::borrow::Cow;
use std::f64::consts::FRAC_PI_2;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::consts::{FULL_TURN, LABEL_RADIUS_RATIO, POINTER_ANGLE, WHEEL_MARGIN_PX};
use crate::geometry;
use crate::i18n::Strings;
use crate::palette::{SEPARATOR_COLOR, Theme};
use crate::state::WheelState;

/// Pointer fill colour.
pub const POINTER_COLOR: &str = "#ef4444";

const SEPARATOR_WIDTH: f64 = 3.0;
const RIM_WIDTH: f64 = 6.0;
const EMPTY_RIM_WIDTH: f64 = 4.0;
const LABEL_FONT: &str = "bold 16px Arial";
const CAPTION_FONT: &str = "bold 20px Arial";

/// One drawing step. Angles are radians in canvas space.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Full placeholder disc for an empty wheel.
    Disc { fill: &'static str, stroke: &'static str },
    /// Text centered on the wheel.
    Caption { text: &'static str, color: &'static str },
    /// One option's wedge from `start` to `end`.
    Wedge { index: usize, start: f64, end: f64, fill: &'static str },
    /// Option label centered on the wedge's mid-angle.
    Label { index: usize, text: String, angle: f64 },
    /// White outer ring.
    Rim,
    /// Fixed pointer marking the winning direction.
    Pointer { angle: f64 },
}

/// Cut labels longer than `max_chars` characters and append `...`.
#[must_use]
pub fn truncate_label(text: &str, max_chars: usize) -> Cow<'_, str> {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => Cow::Owned(format!("{}...", &text[..cut])),
        None => Cow::Borrowed(text),
    }
}

/// Build the draw list for the current state.
#[must_use]
pub fn plan(state: &WheelState, theme: Theme, strings: &Strings, label_max_chars: usize) -> Vec<DrawCommand> {
    let count = state.options.len();
    if count == 0 {
        let colors = theme.empty_wheel();
        return vec![
            DrawCommand::Disc { fill: colors.fill, stroke: colors.stroke },
            DrawCommand::Caption { text: strings.canvas_empty, color: colors.text },
        ];
    }

    let mut commands = Vec::with_capacity(count * 2 + 2);
    for (index, option) in state.options.iter().enumerate() {
        let (start, end) = geometry::segment_bounds(index, state.rotation, count);
        commands.push(DrawCommand::Wedge { index, start, end, fill: option.color() });
    }
    for (index, option) in state.options.iter().enumerate() {
        commands.push(DrawCommand::Label {
            index,
            text: truncate_label(&option.text, label_max_chars).into_owned(),
            angle: geometry::segment_mid_angle(index, state.rotation, count),
        });
    }
    commands.push(DrawCommand::Rim);
    commands.push(DrawCommand::Pointer { angle: POINTER_ANGLE });
    commands
}

/// Skips redraws when nothing visible changed.
///
/// A draw is skipped only when the wheel is idle, non-empty, and already
/// drawn at the current rotation. Store mutations must call
/// [`RenderCache::invalidate`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RenderCache {
    last_drawn: Option<f64>,
}

impl RenderCache {
    /// Decide whether to draw `state`, recording the rotation if so.
    pub fn should_draw(&mut self, state: &WheelState) -> bool {
        #[allow(clippy::float_cmp)]
        let unchanged = self.last_drawn == Some(state.rotation);
        if unchanged && !state.spinning && !state.options.is_empty() {
            return false;
        }
        self.last_drawn = Some(state.rotation);
        true
    }

    pub fn invalidate(&mut self) {
        self.last_drawn = None;
    }
}

/// Paint `commands` onto `ctx` for a canvas of `width` x `height` CSS pixels.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails.
pub fn draw(ctx: &CanvasRenderingContext2d, commands: &[DrawCommand], width: f64, height: f64) -> Result<(), JsValue> {
    let cx = width / 2.0;
    let cy = height / 2.0;
    let radius = (width.min(height) / 2.0 - WHEEL_MARGIN_PX).max(0.0);

    ctx.clear_rect(0.0, 0.0, width, height);
    ctx.save();
    for command in commands {
        match command {
            DrawCommand::Disc { fill, stroke } => {
                ctx.begin_path();
                ctx.arc(cx, cy, radius, 0.0, FULL_TURN)?;
                ctx.set_fill_style_str(fill);
                ctx.fill();
                ctx.set_stroke_style_str(stroke);
                ctx.set_line_width(EMPTY_RIM_WIDTH);
                ctx.stroke();
            }
            DrawCommand::Caption { text, color } => {
                ctx.set_fill_style_str(color);
                ctx.set_font(CAPTION_FONT);
                ctx.set_text_align("center");
                ctx.set_text_baseline("middle");
                ctx.fill_text(text, cx, cy)?;
            }
            DrawCommand::Wedge { start, end, fill, .. } => {
                ctx.begin_path();
                ctx.move_to(cx, cy);
                ctx.arc(cx, cy, radius, *start, *end)?;
                ctx.close_path();
                ctx.set_fill_style_str(fill);
                ctx.fill();
                ctx.set_stroke_style_str(SEPARATOR_COLOR);
                ctx.set_line_width(SEPARATOR_WIDTH);
                ctx.stroke();
            }
            DrawCommand::Label { text, angle, .. } => {
                let r = radius * LABEL_RADIUS_RATIO;
                ctx.save();
                ctx.set_fill_style_str(SEPARATOR_COLOR);
                ctx.set_font(LABEL_FONT);
                ctx.set_text_align("center");
                ctx.set_text_baseline("middle");
                ctx.translate(cx + angle.cos() * r, cy + angle.sin() * r)?;
                ctx.rotate(angle + FRAC_PI_2)?;
                ctx.fill_text(text, 0.0, 0.0)?;
                ctx.restore();
            }
            DrawCommand::Rim => {
                ctx.begin_path();
                ctx.arc(cx, cy, radius, 0.0, FULL_TURN)?;
                ctx.set_stroke_style_str(SEPARATOR_COLOR);
                ctx.set_line_width(RIM_WIDTH);
                ctx.stroke();
            }
            DrawCommand::Pointer { angle } => draw_pointer(ctx, cx, cy, radius, *angle),
        }
    }
    ctx.restore();
    Ok(())
}

/// Triangle straddling the rim, tip pointing at the hub.
fn draw_pointer(ctx: &CanvasRenderingContext2d, cx: f64, cy: f64, radius: f64, angle: f64) {
    let (dir_y, dir_x) = angle.sin_cos();
    let (perp_x, perp_y) = (-dir_y, dir_x);
    let tip = radius - 14.0;
    let base = radius + WHEEL_MARGIN_PX - 1.0;
    let half_width = 12.0;

    ctx.begin_path();
    ctx.move_to(cx + dir_x * tip, cy + dir_y * tip);
    ctx.line_to(cx + dir_x * base + perp_x * half_width, cy + dir_y * base + perp_y * half_width);
    ctx.line_to(cx + dir_x * base - perp_x * half_width, cy + dir_y * base - perp_y * half_width);
    ctx.close_path();
    ctx.set_fill_style_str(POINTER_COLOR);
    ctx.fill();
    ctx.set_stroke_style_str(SEPARATOR_COLOR);
    ctx.set_line_width(2.0);
    ctx.stroke();
}

/// A `<canvas>` element bound to the render plan.
pub struct WheelCanvas {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    cache: RenderCache,
}

impl WheelCanvas {
    /// Acquire the 2D context of `canvas`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the element has no 2D context.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(JsValue::from)?;
        Ok(Self { canvas, ctx, cache: RenderCache::default() })
    }

    /// Force the next [`WheelCanvas::render`] to draw.
    pub fn invalidate(&mut self) {
        self.cache.invalidate();
    }

    /// Draw `state` unless the cache says nothing changed.
    ///
    /// Returns whether a draw happened.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any `Canvas2D` call fails.
    pub fn render(
        &mut self,
        state: &WheelState,
        theme: Theme,
        strings: &Strings,
        label_max_chars: usize,
    ) -> Result<bool, JsValue> {
        if !self.cache.should_draw(state) {
            return Ok(false);
        }
        let commands = plan(state, theme, strings, label_max_chars);
        let width = f64::from(self.canvas.width());
        let height = f64::from(self.canvas.height());
        draw(&self.ctx, &commands, width, height)?;
        Ok(true)
    }
}
