use super::pointer::InputWiring;
use crate::input;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_hover_handlers(w: &InputWiring) {
    wire_pointer_hover(w, "pointerenter", true);
    wire_pointer_hover(w, "pointerleave", false);
    wire_touch(w, "touchstart", true);
    wire_touch(w, "touchend", false);
    wire_touch(w, "touchcancel", false);
}

fn wire_pointer_hover(w: &InputWiring, event: &str, entering: bool) {
    let slider = w.slider.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if !input::is_hover_pointer(&ev.pointer_type()) {
            return;
        }
        let mut s = slider.borrow_mut();
        if entering {
            s.on_hover_start();
        } else {
            s.on_hover_end();
        }
    }) as Box<dyn FnMut(_)>);
    _ = w
        .container
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_touch(w: &InputWiring, event: &str, starting: bool) {
    let slider = w.slider.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::TouchEvent| {
        let mut s = slider.borrow_mut();
        if starting {
            s.on_touch_start();
        } else {
            s.on_touch_end();
        }
    }) as Box<dyn FnMut(_)>);
    _ = w
        .container
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}
