#![cfg(target_arch = "wasm32")]
use elastic_core::ElasticSlider;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod config;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;

use constants::*;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("elastic-slider-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

fn find_elements(document: &web::Document) -> anyhow::Result<render::SliderElements> {
    Ok(render::SliderElements {
        container: dom::required_element(document, CONTAINER_ID)?,
        track: dom::required_element(document, TRACK_ID)?,
        range: dom::required_element(document, RANGE_ID)?,
        thumb: dom::required_element(document, THUMB_ID)?,
        icon_left: dom::required_element(document, ICON_LEFT_ID)?,
        icon_right: dom::required_element(document, ICON_RIGHT_ID)?,
        value_readout: dom::required_element(document, VALUE_READOUT_ID)?,
    })
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    dom::document_ready(&document).await?;

    let root = dom::required_element(&document, ROOT_ID)?;
    let elements = find_elements(&document)?;

    let attr_root = root.clone();
    let config = config::config_from_attributes(move |name| attr_root.get_attribute(name));
    log::info!(
        "[slider] max_overflow={} bounce={} initial={}",
        config.max_overflow,
        config.release_bounce,
        config.initial_value
    );

    let slider = Rc::new(RefCell::new(ElasticSlider::new(config)));
    {
        let mut s = slider.borrow_mut();
        render::apply_value(&elements, s.value());
        let els = elements.clone();
        s.subscribe_value(move |v| render::apply_value(&els, *v));
    }

    let track = dom::TrackElement(root.clone());
    let wiring = events::InputWiring {
        slider: slider.clone(),
        root,
        container: elements.container.clone(),
        track: track.clone(),
    };
    events::wire_input_handlers(&wiring);
    events::wire_hover_handlers(&wiring);
    events::wire_max_overflow_input(&document, &slider);
    events::wire_debug_toggle(&document);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        slider,
        elements,
        track,
        debug_readout: overlay::find_readout(&document),
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);
    log::info!("[slider] ready");
    Ok(())
}
