#![cfg(target_arch = "wasm32")]
use crate::config::PageConfig;
use crate::core::{AnimationState, ScrollTrigger};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

mod config;
mod constants;
mod core;
mod dom;
mod events;
mod frame;

pub use events::scroll::refresh_scroll;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("intro-video-web starting");

    dom::on_dom_ready(|| {
        spawn_local(async move {
            if let Err(e) = init(PageConfig::default()).await {
                log::error!("init error: {:?}", e);
            }
        });
    });
    Ok(())
}

async fn init(config: PageConfig) -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let width = dom::viewport_width();
    if !config.should_activate(width) {
        log::info!(
            "viewport {}px <= {}px, intro animation disabled",
            width,
            config.activate_min_width
        );
        return Ok(());
    }

    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let video = dom::query_html_element(&document, config.video_selector)?
        .ok_or_else(|| anyhow::anyhow!("missing {}", config.video_selector))?;
    let caption = dom::query_html_element(&document, config.caption_selector)?
        .ok_or_else(|| anyhow::anyhow!("missing {}", config.caption_selector))?;

    let initial = config.breakpoints.resolve(width);
    let state = Rc::new(RefCell::new(AnimationState::new(initial)));
    log::info!(
        "[init] width={} translateY={} multiplier={}",
        width,
        initial.translate_y,
        initial.movement_multiplier
    );

    let trigger_el = document
        .query_selector(config.trigger_selector)
        .map_err(|e| anyhow::anyhow!("bad selector '{}': {:?}", config.trigger_selector, e))?;
    let scroll = match trigger_el {
        Some(trigger_el) => {
            match ScrollTrigger::parse(config.trigger_start, config.trigger_end) {
                Ok(trigger) => Some(events::ScrollSync {
                    trigger_el,
                    trigger: Rc::new(RefCell::new(trigger)),
                    state: state.clone(),
                }),
                Err(e) => {
                    log::error!("scroll trigger: {:?}", e);
                    None
                }
            }
        }
        None => {
            log::warn!(
                "trigger '{}' not found; scroll mapping disabled",
                config.trigger_selector
            );
            None
        }
    };

    if let Some(sync) = &scroll {
        events::wire_scroll(sync.clone());
        log::info!(
            "[init] intro progress={:.3}",
            sync.trigger.borrow().progress()
        );
    }
    events::wire_resize(state.clone(), config.breakpoints, scroll);
    events::wire_mousemove(state.clone());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        state, video, caption, &config,
    )));
    frame::start_loop(frame_ctx);
    log::info!("[init] render loop started");

    Ok(())
}
