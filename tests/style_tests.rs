// Host-side tests for inline style formatting.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod breakpoints {
        include!("../src/core/breakpoints.rs");
    }
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod state {
        include!("../src/core/state.rs");
    }
    pub mod style {
        include!("../src/core/style.rs");
    }
}

use crate::core::breakpoints::resolve_breakpoint;
use crate::core::state::AnimationState;
use crate::core::style::*;

#[test]
fn initial_state_formats_like_css() {
    let s = AnimationState::new(resolve_breakpoint(950.0));
    let style = VideoStyle::from_state(&s);
    assert_eq!(style.transform, "translateY(-135px) translateX(0px) scale(0.25)");
    assert_eq!(style.gap, "2em");
    assert_eq!(style.font_size, "80px");
}

#[test]
fn settled_state_formats_like_css() {
    let mut s = AnimationState::new(resolve_breakpoint(1400.0));
    s.apply_scroll_progress(1.0);
    s.current_mouse_x = -12.5;
    let style = VideoStyle::from_state(&s);
    assert_eq!(style.transform, "translateY(0px) translateX(-12.5px) scale(1)");
    assert_eq!(style.font_size, "80px");
}

#[test]
fn first_frame_writes_everything() {
    let style = VideoStyle::from_state(&AnimationState::new(resolve_breakpoint(950.0)));
    let diff = StyleDiff::between(None, &style);
    assert!(diff.transform && diff.gap && diff.font_size);
}

#[test]
fn unchanged_frame_writes_nothing() {
    let s = AnimationState::new(resolve_breakpoint(950.0));
    let a = VideoStyle::from_state(&s);
    let b = VideoStyle::from_state(&s);
    assert!(!StyleDiff::between(Some(&a), &b).any());
}

#[test]
fn parallax_only_touches_transform() {
    let mut s = AnimationState::new(resolve_breakpoint(950.0));
    let before = VideoStyle::from_state(&s);
    s.track_pointer(1000.0, 1000.0);
    s.advance_parallax();
    let after = VideoStyle::from_state(&s);

    let diff = StyleDiff::between(Some(&before), &after);
    assert!(diff.transform);
    assert!(!diff.gap);
    assert!(!diff.font_size);
}
