use crate::core::{AnimationState, ScrollTrigger};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

thread_local! {
    static ACTIVE_SYNC: RefCell<Option<ScrollSync>> = const { RefCell::new(None) };
}

/// Binds the trigger element's layout to the animation state.
#[derive(Clone)]
pub struct ScrollSync {
    pub trigger_el: web::Element,
    pub trigger: Rc<RefCell<ScrollTrigger>>,
    pub state: Rc<RefCell<AnimationState>>,
}

impl ScrollSync {
    /// Measure the trigger and push any progress change into the state.
    pub fn refresh(&self) {
        let rect = self.trigger_el.get_bounding_client_rect();
        let moved = self
            .trigger
            .borrow_mut()
            .update(rect.top(), rect.height(), dom::viewport_height());
        if let Some(progress) = moved {
            self.state.borrow_mut().apply_scroll_progress(progress);
        }
    }
}

pub fn wire_scroll(sync: ScrollSync) {
    let s = sync.clone();
    dom::add_window_listener("scroll", true, move |_: web::Event| s.refresh());
    sync.refresh();
    ACTIVE_SYNC.with(|slot| *slot.borrow_mut() = Some(sync));
}

/// Resync scroll progress from host JS, e.g. a smooth-scroll library's
/// scroll hook. No-op until the animation is active.
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn refresh_scroll() {
    let sync = ACTIVE_SYNC.with(|slot| slot.borrow().clone());
    if let Some(s) = sync {
        s.refresh();
    }
}
