use crate::config::PageConfig;
use crate::core::{AnimationState, StyleDiff, VideoStyle};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub state: Rc<RefCell<AnimationState>>,
    pub video: web::HtmlElement,
    pub caption: web::HtmlElement,
    pub config: PageConfig,
    // last values written, to skip no-op style writes
    pub written: Option<VideoStyle>,
}

impl FrameContext {
    pub fn new(
        state: Rc<RefCell<AnimationState>>,
        video: web::HtmlElement,
        caption: web::HtmlElement,
        config: &PageConfig,
    ) -> Self {
        Self {
            state,
            video,
            caption,
            config: config.clone(),
            written: None,
        }
    }

    pub fn frame(&mut self) {
        if !self.config.should_render(dom::viewport_width()) {
            return;
        }

        let style = {
            let mut s = self.state.borrow_mut();
            s.advance_parallax();
            VideoStyle::from_state(&s)
        };

        let diff = StyleDiff::between(self.written.as_ref(), &style);
        if !diff.any() {
            return;
        }
        if diff.transform {
            dom::set_style(&self.video, "transform", &style.transform);
        }
        if diff.gap {
            dom::set_style(&self.video, "gap", &style.gap);
        }
        if diff.font_size {
            dom::set_style(&self.caption, "font-size", &style.font_size);
        }
        self.written = Some(style);
    }
}

fn request_frame(window: &web::Window, tick: &Closure<dyn FnMut()>) {
    _ = window.request_animation_frame(tick.as_ref().unchecked_ref::<js_sys::Function>());
}

/// Drive `frame()` from requestAnimationFrame for the rest of the page's life.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            request_frame(&w, cb);
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        request_frame(&w, cb);
    };
}
