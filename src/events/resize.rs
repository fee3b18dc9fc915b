use crate::core::{AnimationState, BreakpointTable};
use crate::dom;
use crate::events::ScrollSync;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub fn wire_resize(
    state: Rc<RefCell<AnimationState>>,
    breakpoints: BreakpointTable,
    scroll: Option<ScrollSync>,
) {
    let mut last = breakpoints.resolve(dom::viewport_width());
    dom::add_window_listener("resize", true, move |_: web::Event| {
        let values = breakpoints.resolve(dom::viewport_width());
        if values != last {
            log::debug!(
                "[resize] breakpoint translateY={} multiplier={}",
                values.translate_y,
                values.movement_multiplier
            );
            last = values;
        }
        state.borrow_mut().apply_breakpoint(values);
        // Layout moved under the trigger; resync progress too.
        if let Some(s) = &scroll {
            s.refresh();
        }
    });
}
