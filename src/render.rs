//! Applies presentation parameters to element styles.

use crate::dom::set_style;
use elastic_core::Presentation;
use web_sys as web;

#[derive(Clone)]
pub struct SliderElements {
    pub container: web::HtmlElement,
    pub track: web::HtmlElement,
    pub range: web::HtmlElement,
    pub thumb: web::HtmlElement,
    pub icon_left: web::HtmlElement,
    pub icon_right: web::HtmlElement,
    pub value_readout: web::HtmlElement,
}

pub fn apply(els: &SliderElements, p: &Presentation) {
    set_style(&els.container, "transform", &format!("scale({:.4})", p.container_scale));
    set_style(&els.container, "opacity", &format!("{:.3}", p.container_opacity));

    set_style(
        &els.track,
        "transform",
        &format!("scaleX({:.4}) scaleY({:.4})", p.track_scale_x, p.track_scale_y),
    );
    set_style(&els.track, "transform-origin", p.track_origin.as_css());
    set_style(&els.track, "height", &format!("{:.2}px", p.track_height_px));
    let margin = format!("{:.2}px", p.track_margin_y_px);
    set_style(&els.track, "margin-top", &margin);
    set_style(&els.track, "margin-bottom", &margin);

    let pct = format!("{:.2}%", p.value_fraction * 100.0);
    set_style(&els.range, "width", &pct);
    set_style(&els.thumb, "left", &pct);

    set_style(
        &els.icon_left,
        "transform",
        &format!("translateX({:.2}px) scale({:.4})", p.left_icon_x, p.left_icon_scale),
    );
    set_style(
        &els.icon_right,
        "transform",
        &format!("translateX({:.2}px) scale({:.4})", p.right_icon_x, p.right_icon_scale),
    );
}

pub fn apply_value(els: &SliderElements, value: u32) {
    els.value_readout.set_text_content(Some(&value.to_string()));
    _ = els.thumb.set_attribute("aria-valuenow", &value.to_string());
}
