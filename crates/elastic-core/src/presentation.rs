//! Pure mapping from widget state to the style parameters the renderer
//! applies each frame.

use crate::geometry::{BoundingBox, Region};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransformOrigin {
    Left,
    Center,
    Right,
}

impl TransformOrigin {
    pub fn as_css(self) -> &'static str {
        match self {
            TransformOrigin::Left => "left",
            TransformOrigin::Center => "center",
            TransformOrigin::Right => "right",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Presentation {
    pub container_scale: f64,
    pub container_opacity: f64,
    pub track_scale_x: f64,
    pub track_scale_y: f64,
    pub track_origin: TransformOrigin,
    pub track_height_px: f64,
    pub track_margin_y_px: f64,
    pub left_icon_x: f64,
    pub right_icon_x: f64,
    pub left_icon_scale: f64,
    pub right_icon_scale: f64,
    /// Value as a fraction of the range, for the range fill and thumb.
    pub value_fraction: f64,
}

/// Linear map of `v` from `input` to `output`, clamped to the output range.
pub fn map_clamped(v: f64, input: [f64; 2], output: [f64; 2]) -> f64 {
    let span = input[1] - input[0];
    if span == 0.0 || !v.is_finite() {
        return output[0];
    }
    let t = ((v - input[0]) / span).clamp(0.0, 1.0);
    output[0] + (output[1] - output[0]) * t
}

/// Horizontal stretch: the track grows by the overflow in pixels. A negative
/// overflow (spring-back overshoot) compresses it.
#[inline]
pub fn squeeze_scale_x(overflow: f64, width: Option<f64>) -> f64 {
    match width {
        Some(w) if w > 0.0 => 1.0 + overflow / w,
        _ => 1.0,
    }
}

/// Vertical squeeze: thinner as overflow approaches the cap.
#[inline]
pub fn squeeze_scale_y(overflow: f64, max_overflow: f64, min_scale_y: f64) -> f64 {
    map_clamped(overflow, [0.0, max_overflow], [1.0, min_scale_y])
}

/// Anchor the side opposite to where the pointer is, so the track stretches
/// toward the pointer.
pub fn transform_origin(pointer_x: f64, bbox: Option<&BoundingBox>) -> TransformOrigin {
    match bbox {
        Some(b) if pointer_x < b.center_x() => TransformOrigin::Right,
        Some(_) => TransformOrigin::Left,
        None => TransformOrigin::Center,
    }
}

/// Icon translation for the icon on `side`. The container's scale is divided
/// out so the on-screen offset tracks the overflow in pixels.
pub fn icon_offset(side: Region, region: Region, overflow: f64, scale: f64) -> f64 {
    if region != side || scale <= 0.0 {
        return 0.0;
    }
    match side {
        Region::Left => -overflow / scale,
        Region::Right => overflow / scale,
        Region::Middle => 0.0,
    }
}
