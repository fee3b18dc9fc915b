use crate::constants::POINTER_MOVE_EVENT;
use crate::core::AnimationState;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Record the pointer's horizontal position as the parallax target.
/// Smoothing happens in the frame loop.
pub fn wire_mousemove(state: Rc<RefCell<AnimationState>>) {
    dom::add_document_listener(POINTER_MOVE_EVENT, true, move |ev: web::MouseEvent| {
        state
            .borrow_mut()
            .track_pointer(ev.client_x() as f64, dom::viewport_width());
    });
}
