// Animation state for the intro video. No web APIs here.
//
// Each event source writes only its own fields, through its own method:
// scroll -> apply_scroll_progress, resize -> apply_breakpoint,
// pointer -> track_pointer, frame loop -> advance_parallax.

use super::breakpoints::BreakpointValues;
use super::constants::*;

#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[inline]
pub fn scale_at(progress: f64) -> f64 {
    lerp(SCALE_START, SCALE_END, progress)
}

#[inline]
pub fn translate_y_at(progress: f64, initial_translate_y: f64) -> f64 {
    lerp(initial_translate_y, TRANSLATE_Y_END_PX, progress)
}

/// Caption size shrinks to the trough by `FONT_SIZE_TROUGH_AT`, then grows
/// back over the rest of the region. Both halves meet exactly at the trough.
pub fn font_size_at(progress: f64) -> f64 {
    if progress <= FONT_SIZE_TROUGH_AT {
        let t = progress / FONT_SIZE_TROUGH_AT;
        lerp(FONT_SIZE_EDGE_PX, FONT_SIZE_TROUGH_PX, t)
    } else {
        let t = (progress - FONT_SIZE_TROUGH_AT) / (1.0 - FONT_SIZE_TROUGH_AT);
        lerp(FONT_SIZE_TROUGH_PX, FONT_SIZE_EDGE_PX, t)
    }
}

/// Horizontal parallax target in pixels for the current zoom level.
pub fn max_horizontal_movement(scale: f64, target_mouse_x: f64, movement_multiplier: f64) -> f64 {
    if scale < PARALLAX_SCALE_CUTOFF {
        target_mouse_x * (1.0 - scale) * movement_multiplier
    } else {
        0.0
    }
}

/// Pointer x mapped to [-1, 1] with 0 at the horizontal center.
#[inline]
pub fn normalized_pointer_x(pointer_x: f64, viewport_width: f64) -> Option<f64> {
    if viewport_width > 0.0 && viewport_width.is_finite() && pointer_x.is_finite() {
        Some(((pointer_x / viewport_width) - 0.5) * 2.0)
    } else {
        None
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AnimationState {
    pub scroll_progress: f64,
    pub initial_translate_y: f64,
    pub current_translate_y: f64,
    pub movement_multiplier: f64,
    pub scale: f64,
    pub font_size: f64,
    pub gap: f64,
    pub target_mouse_x: f64,
    pub current_mouse_x: f64,
}

impl AnimationState {
    pub fn new(initial: BreakpointValues) -> Self {
        Self {
            scroll_progress: 0.0,
            initial_translate_y: initial.translate_y,
            current_translate_y: initial.translate_y,
            movement_multiplier: initial.movement_multiplier,
            scale: SCALE_START,
            font_size: FONT_SIZE_EDGE_PX,
            gap: GAP_EM,
            target_mouse_x: 0.0,
            current_mouse_x: 0.0,
        }
    }

    /// Recompute everything scroll-driven from `progress` alone.
    pub fn apply_scroll_progress(&mut self, progress: f64) {
        self.scroll_progress = progress;
        self.current_translate_y = translate_y_at(progress, self.initial_translate_y);
        self.scale = scale_at(progress);
        self.font_size = font_size_at(progress);
    }

    /// New breakpoint after a resize. The current offset is only reset while
    /// the user is still above the intro; otherwise it stays where scrolling
    /// put it.
    pub fn apply_breakpoint(&mut self, values: BreakpointValues) {
        self.initial_translate_y = values.translate_y;
        self.movement_multiplier = values.movement_multiplier;
        if self.scroll_progress == 0.0 {
            self.current_translate_y = values.translate_y;
        }
    }

    pub fn track_pointer(&mut self, pointer_x: f64, viewport_width: f64) {
        if let Some(x) = normalized_pointer_x(pointer_x, viewport_width) {
            self.target_mouse_x = x;
        }
    }

    /// One render-loop step of the parallax pursuit. Framerate dependent.
    pub fn advance_parallax(&mut self) {
        let target =
            max_horizontal_movement(self.scale, self.target_mouse_x, self.movement_multiplier);
        self.current_mouse_x = lerp(self.current_mouse_x, target, MOUSE_SMOOTHING);
    }
}
