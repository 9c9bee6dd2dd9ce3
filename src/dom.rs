use anyhow::anyhow;
use elastic_core::{BoundingBox, TrackGeometry};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn required_element(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow!("missing #{}", id))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow!("#{} is not an HtmlElement: {:?}", id, e))
}

pub fn optional_element(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    let el = document.get_element_by_id(id)?;
    match el.dyn_into::<web::HtmlElement>() {
        Ok(el) => Some(el),
        Err(_) => {
            log::warn!("[dom] #{} is not an HtmlElement; ignoring", id);
            None
        }
    }
}

/// Resolve once the document has finished parsing.
pub async fn document_ready(document: &web::Document) -> anyhow::Result<()> {
    if document.ready_state() != "loading" {
        return Ok(());
    }
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let on_ready = Closure::once_into_js(move || {
            _ = resolve.call0(&JsValue::NULL);
        });
        _ = document
            .add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref());
    });
    wasm_bindgen_futures::JsFuture::from(promise)
        .await
        .map_err(|e| anyhow!("DOMContentLoaded: {:?}", e))?;
    Ok(())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

/// The slider root, queried fresh for its layout on every use.
#[derive(Clone)]
pub struct TrackElement(pub web::HtmlElement);

impl TrackGeometry for TrackElement {
    fn bounding_box(&self) -> Option<BoundingBox> {
        if !self.0.is_connected() {
            return None;
        }
        let rect = self.0.get_bounding_client_rect();
        if rect.width() <= 0.0 {
            return None;
        }
        Some(BoundingBox {
            left: rect.left(),
            right: rect.right(),
            width: rect.width(),
        })
    }
}
