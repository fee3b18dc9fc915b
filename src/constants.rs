/// Page-facing constants: which elements to animate and when.
///
/// Selectors follow the landing page markup; markers use the
/// `"<element-edge> <viewport-edge>"` form understood by `core::trigger`.

// Elements
pub const VIDEO_SELECTOR: &str = ".video-container-desktop";
pub const CAPTION_SELECTOR: &str = ".video-title p";
pub const TRIGGER_SELECTOR: &str = "intro";

// Trigger region: intro top at viewport bottom -> intro top at 10% from top
pub const TRIGGER_START: &str = "top bottom";
pub const TRIGGER_END: &str = "top 10%";

// Width gates (CSS px)
pub const ACTIVATE_MIN_WIDTH: f64 = 768.0; // animation set up only above this
pub const RENDER_MIN_WIDTH: f64 = 900.0; // frames are skipped below this

// Events
pub const POINTER_MOVE_EVENT: &str = "mousemove"; // mouse only; touch drags don't steer parallax
pub const DOM_LOADING_STATE: &str = "loading"; // document.readyState before DOMContentLoaded
