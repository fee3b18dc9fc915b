// Animation tuning constants.
//
// Values are in CSS pixels unless noted. The breakpoint table lives in
// `breakpoints.rs` next to the resolver that walks it.

// Scale of the video block across the intro region
pub const SCALE_START: f64 = 0.25;
pub const SCALE_END: f64 = 1.0;

// Caption font size: dips to the trough then recovers
pub const FONT_SIZE_EDGE_PX: f64 = 80.0;
pub const FONT_SIZE_TROUGH_PX: f64 = 40.0;
pub const FONT_SIZE_TROUGH_AT: f64 = 0.4; // progress where the dip bottoms out

// Vertical offset eases from the breakpoint value to this
pub const TRANSLATE_Y_END_PX: f64 = 0.0;

// Gap between video and caption (em)
pub const GAP_EM: f64 = 2.0;

// Parallax
pub const PARALLAX_SCALE_CUTOFF: f64 = 0.95; // parallax off at or above this scale
pub const MOUSE_SMOOTHING: f64 = 0.05; // fraction of remaining distance per frame
