use crate::dom::TrackElement;
use crate::input;
use elastic_core::ElasticSlider;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub slider: Rc<RefCell<ElasticSlider>>,
    pub root: web::HtmlElement,
    pub container: web::HtmlElement,
    pub track: TrackElement,
}

pub fn wire_input_handlers(w: &InputWiring) {
    wire_pointerdown(w);
    wire_pointermove(w);
    wire_lostpointercapture(w);
    wire_drag_end(w, "pointerup");
    wire_drag_end(w, "pointercancel");
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let root = w.root.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        if let Err(e) = w.root.set_pointer_capture(ev.pointer_id()) {
            log::warn!("[slider] pointer capture failed: {:?}", e);
        }
        let x = ev.client_x() as f64;
        w.slider.borrow_mut().on_pointer_down(x, &w.track);
        log::debug!("[slider] drag start at x={:.0}", x);
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = root.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();
    let root = w.root.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let buttons = ev.buttons();
        if !input::buttons_pressed(buttons) {
            return;
        }
        w.slider
            .borrow_mut()
            .on_pointer_move(ev.client_x() as f64, buttons, &w.track);
    }) as Box<dyn FnMut(_)>);
    _ = root.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

// Fires after pointerup, pointercancel, or the capture being stolen, so it is
// the single place the spring-back starts.
fn wire_lostpointercapture(w: &InputWiring) {
    let w = w.clone();
    let root = w.root.clone();

    let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        let mut slider = w.slider.borrow_mut();
        slider.on_lost_pointer_capture();
        log::debug!("[slider] drag end, value={}", slider.value());
    }) as Box<dyn FnMut(_)>);
    _ = root
        .add_event_listener_with_callback("lostpointercapture", closure.as_ref().unchecked_ref());
    closure.forget();
}

// Covers drags where capture was never acquired: the root then sees no
// `lostpointercapture`, so release here instead.
fn wire_drag_end(w: &InputWiring, event: &str) {
    let w = w.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let has_capture = w.root.has_pointer_capture(ev.pointer_id());
        let mut slider = w.slider.borrow_mut();
        if input::needs_fallback_release(slider.is_pressed(), has_capture) {
            slider.on_lost_pointer_capture();
            log::debug!("[slider] drag end without capture, value={}", slider.value());
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
