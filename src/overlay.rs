use crate::constants::{DEBUG_PANEL_ID, DEBUG_READOUT_ID};
use crate::input;
use elastic_core::DebugReadout;
use web_sys as web;

/// Flip the debug panel's `hidden` class.
pub fn toggle(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(DEBUG_PANEL_ID) {
        match el.class_list().toggle("hidden") {
            Ok(hidden) => log::debug!("[dom] debug panel hidden={}", hidden),
            Err(e) => log::warn!("[dom] debug panel toggle failed: {:?}", e),
        }
    }
}

/// Write the live internals into the debug readout, if the page has one.
pub fn update_readout(readout_el: &web::HtmlElement, readout: &DebugReadout) {
    readout_el.set_text_content(Some(&input::format_readout(readout)));
    _ = readout_el.set_attribute("data-region", readout.region.as_str());
}

#[inline]
pub fn find_readout(document: &web::Document) -> Option<web::HtmlElement> {
    crate::dom::optional_element(document, DEBUG_READOUT_ID)
}
