use crate::constants::NO_BUTTONS;
use elastic_core::{DebugReadout, Region};

/// True when any pointer button (or an active touch/pen contact) is down.
#[inline]
pub fn buttons_pressed(buttons: u16) -> bool {
    buttons != NO_BUTTONS
}

/// A drag ended (pointerup/pointercancel) while the control still thinks it
/// is pressed but holds no capture, so no `lostpointercapture` will follow.
#[inline]
pub fn needs_fallback_release(pressed: bool, has_capture: bool) -> bool {
    pressed && !has_capture
}

/// Hover magnification applies to mouse pointers only; touch has its own
/// start/end events.
#[inline]
pub fn is_hover_pointer(pointer_type: &str) -> bool {
    pointer_type == "mouse"
}

/// Clamp a frame delta to something the integrators can digest.
#[inline]
pub fn frame_dt(elapsed_sec: f64, max_sec: f64) -> f64 {
    if elapsed_sec.is_finite() {
        elapsed_sec.clamp(0.0, max_sec)
    } else {
        0.0
    }
}

pub fn region_marker(region: Region) -> &'static str {
    match region {
        Region::Left => "L",
        Region::Middle => "M",
        Region::Right => "R",
    }
}

pub fn format_readout(r: &DebugReadout) -> String {
    format!(
        "Volume: {} • Client X: {} • Overflow: {} • Region: {} • Max overflow: {:.0}",
        r.value,
        r.pointer_x,
        r.overflow,
        region_marker(r.region),
        r.max_overflow
    )
}
