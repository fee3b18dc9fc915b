// Host-side tests for page configuration and width gates.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod breakpoints {
        include!("../src/core/breakpoints.rs");
    }
    pub use breakpoints::*;
}
mod constants {
    include!("../src/constants.rs");
}
mod config {
    include!("../src/config.rs");
}

use config::PageConfig;

#[test]
fn activation_gate_is_exclusive() {
    let c = PageConfig::default();
    assert!(!c.should_activate(600.0));
    assert!(!c.should_activate(768.0));
    assert!(c.should_activate(769.0));
}

#[test]
fn render_gate_skips_below_900() {
    let c = PageConfig::default();
    assert!(!c.should_render(899.0));
    assert!(c.should_render(900.0));
    assert!(c.should_render(1920.0));
}

#[test]
fn gates_leave_a_setup_only_band() {
    // 769..899 sets up listeners but renders nothing
    let c = PageConfig::default();
    assert!(c.activate_min_width < c.render_min_width);
    assert!(c.should_activate(800.0) && !c.should_render(800.0));
}

#[test]
fn default_markers_parse() {
    mod trigger {
        include!("../src/core/trigger.rs");
    }
    let c = PageConfig::default();
    assert!(trigger::ScrollTrigger::parse(c.trigger_start, c.trigger_end).is_ok());
}

#[test]
fn default_selectors_match_page_markup() {
    let c = PageConfig::default();
    assert_eq!(c.video_selector, ".video-container-desktop");
    assert_eq!(c.caption_selector, ".video-title p");
    assert_eq!(c.trigger_selector, "intro");
    assert_eq!(c.breakpoints.resolve(1250.0).translate_y, -120.0);
}

#[test]
fn ready_state_strings_gate_dom_ready() {
    assert!(!config::dom_is_parsed("loading"));
    assert!(config::dom_is_parsed("interactive"));
    assert!(config::dom_is_parsed("complete"));
}

#[test]
fn parallax_follows_mouse_only() {
    assert_eq!(constants::POINTER_MOVE_EVENT, "mousemove");
}
