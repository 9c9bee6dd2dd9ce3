use crate::constants::{DEBUG_TOGGLE_ID, MAX_OVERFLOW_INPUT_ID, MAX_OVERFLOW_READOUT_ID};
use crate::{dom, overlay};
use elastic_core::ElasticSlider;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Optional `<input type="range">` that adjusts the overflow ceiling.
pub fn wire_max_overflow_input(document: &web::Document, slider: &Rc<RefCell<ElasticSlider>>) {
    let Some(el) = document.get_element_by_id(MAX_OVERFLOW_INPUT_ID) else {
        return;
    };
    let input = match el.dyn_into::<web::HtmlInputElement>() {
        Ok(i) => i,
        Err(_) => {
            log::warn!("[dom] #{} is not an <input>", MAX_OVERFLOW_INPUT_ID);
            return;
        }
    };
    let readout = dom::optional_element(document, MAX_OVERFLOW_READOUT_ID);

    let current = slider.borrow().max_overflow();
    input.set_value_as_number(current);
    if let Some(r) = &readout {
        r.set_text_content(Some(&format!("{:.0}", current)));
    }

    let slider = slider.clone();
    let input_for_listener = input.clone();
    let closure = Closure::wrap(Box::new(move || {
        let requested = input_for_listener.value_as_number();
        let applied = slider.borrow_mut().set_max_overflow(requested);
        log::debug!("[slider] max overflow -> {}", applied);
        if let Some(r) = &readout {
            r.set_text_content(Some(&format!("{:.0}", applied)));
        }
    }) as Box<dyn FnMut()>);
    _ = input.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn wire_debug_toggle(document: &web::Document) {
    dom::add_click_listener(document, DEBUG_TOGGLE_ID, || {
        if let Some(d) = dom::window_document() {
            overlay::toggle(&d);
        }
    });
}
