use crate::constants::*;
use crate::core::BreakpointTable;

/// Everything the page wiring needs to know about the markup and gates.
#[derive(Clone, Debug)]
pub struct PageConfig {
    pub video_selector: &'static str,
    pub caption_selector: &'static str,
    pub trigger_selector: &'static str,
    pub trigger_start: &'static str,
    pub trigger_end: &'static str,
    pub activate_min_width: f64,
    pub render_min_width: f64,
    pub breakpoints: BreakpointTable,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            video_selector: VIDEO_SELECTOR,
            caption_selector: CAPTION_SELECTOR,
            trigger_selector: TRIGGER_SELECTOR,
            trigger_start: TRIGGER_START,
            trigger_end: TRIGGER_END,
            activate_min_width: ACTIVATE_MIN_WIDTH,
            render_min_width: RENDER_MIN_WIDTH,
            breakpoints: BreakpointTable::default(),
        }
    }
}

impl PageConfig {
    /// The animation is only set up on wide viewports.
    #[inline]
    pub fn should_activate(&self, viewport_width: f64) -> bool {
        viewport_width > self.activate_min_width
    }

    /// Frames still run below this width but write nothing.
    #[inline]
    pub fn should_render(&self, viewport_width: f64) -> bool {
        viewport_width >= self.render_min_width
    }
}

/// `document.readyState` past `"loading"` means the DOM is parsed.
#[inline]
pub fn dom_is_parsed(ready_state: &str) -> bool {
    ready_state != DOM_LOADING_STATE
}
