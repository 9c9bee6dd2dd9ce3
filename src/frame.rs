use crate::constants::MAX_FRAME_DT_SEC;
use crate::dom::TrackElement;
use crate::input;
use crate::overlay;
use crate::render::{self, SliderElements};
use elastic_core::{ElasticSlider, TrackGeometry};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub slider: Rc<RefCell<ElasticSlider>>,
    pub elements: SliderElements,
    pub track: TrackElement,
    pub debug_readout: Option<web::HtmlElement>,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = input::frame_dt((now - self.last_instant).as_secs_f64(), MAX_FRAME_DT_SEC);
        self.last_instant = now;

        let mut slider = self.slider.borrow_mut();
        slider.tick(dt_sec);

        // Layout is read fresh each frame; it changes on resize.
        let bbox = self.track.bounding_box();
        let presentation = slider.presentation(bbox);
        render::apply(&self.elements, &presentation);

        if let Some(el) = &self.debug_readout {
            overlay::update_readout(el, &slider.readout());
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
