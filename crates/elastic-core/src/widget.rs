//! The slider control: bounded value, pointer forwarding to the overflow
//! tracker, hover magnification and edge pulses.

use crate::config::SliderConfig;
use crate::constants::*;
use crate::geometry::{drag_value_at, BoundingBox, Region, TrackGeometry};
use crate::observable::Observable;
use crate::presentation::{
    icon_offset, map_clamped, squeeze_scale_x, squeeze_scale_y, transform_origin, Presentation,
};
use crate::pulse::EdgePulse;
use crate::spring::{Spring, SpringParams};
use crate::tracker::OverflowTracker;

/// Snapshot of the live internals, for an inspector or logging.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DebugReadout {
    pub value: u32,
    pub pointer_x: i64,
    pub overflow: i64,
    pub region: Region,
    pub max_overflow: f64,
}

/// Whole-unit value for a raw drag value: floored, then clamped to the range.
/// Non-finite input yields `None`.
#[inline]
pub fn quantize_value(raw: f64) -> Option<u32> {
    if !raw.is_finite() {
        return None;
    }
    Some(raw.floor().clamp(VALUE_MIN, VALUE_MAX) as u32)
}

/// Clamp to the secondary control's range and snap to its step.
#[inline]
pub fn quantize_max_overflow(m: f64) -> Option<f64> {
    if !m.is_finite() {
        return None;
    }
    let stepped = (m / MAX_OVERFLOW_CONTROL_STEP).round() * MAX_OVERFLOW_CONTROL_STEP;
    Some(stepped.clamp(MAX_OVERFLOW_CONTROL_MIN, MAX_OVERFLOW_CONTROL_MAX))
}

#[derive(Debug)]
pub struct ElasticSlider {
    config: SliderConfig,
    value: Observable<u32>,
    tracker: OverflowTracker,
    scale: Spring,
    left_pulse: EdgePulse,
    right_pulse: EdgePulse,
    pressed: bool,
}

impl ElasticSlider {
    pub fn new(config: SliderConfig) -> Self {
        let config = config.or_default();
        let mut tracker = OverflowTracker::from_config(&config);
        // The cap follows the control's range and step from the start.
        if let Some(m) = quantize_max_overflow(config.max_overflow) {
            tracker.set_max_overflow(m);
        }
        let scale = Spring::new(
            config.base_scale,
            config.base_scale,
            SpringParams::new(SCALE_SPRING_STIFFNESS, SCALE_SPRING_DAMPING)
                .with_rest(SCALE_SPRING_REST_DELTA, SCALE_SPRING_REST_DELTA),
        );
        let initial = quantize_value(config.initial_value).unwrap_or(DEFAULT_VALUE as u32);
        Self {
            value: Observable::new(initial),
            tracker,
            scale,
            left_pulse: EdgePulse::new(Region::Left, config.pulse_peak, config.pulse_duration_sec),
            right_pulse: EdgePulse::new(
                Region::Right,
                config.pulse_peak,
                config.pulse_duration_sec,
            ),
            pressed: false,
            config,
        }
    }

    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    #[inline]
    pub fn value(&self) -> u32 {
        self.value.get()
    }

    /// Drag-value callback from the slider primitive.
    pub fn on_value_change(&mut self, raw: f64) -> u32 {
        if let Some(v) = quantize_value(raw) {
            self.value.set(v);
        }
        self.value.get()
    }

    /// Programmatic set; same clamping as a drag.
    pub fn set_value(&mut self, value: f64) -> u32 {
        self.on_value_change(value)
    }

    pub fn subscribe_value(&mut self, listener: impl FnMut(&u32) + 'static) {
        self.value.subscribe(listener);
    }

    /// Pointer pressed over the control: capture begins and the value jumps
    /// to the pressed position.
    pub fn on_pointer_down(&mut self, x: f64, geometry: &impl TrackGeometry) {
        self.pressed = true;
        if let Some(raw) = geometry.bounding_box().and_then(|b| drag_value_at(x, &b)) {
            self.on_value_change(raw);
        }
    }

    /// Pointer moved over the control. `buttons` is the pressed-buttons mask;
    /// hover-only movement is ignored.
    pub fn on_pointer_move(&mut self, x: f64, buttons: u16, geometry: &impl TrackGeometry) {
        if buttons == 0 {
            return;
        }
        let bbox = geometry.bounding_box();
        if self.pressed {
            if let Some(raw) = bbox.and_then(|b| drag_value_at(x, &b)) {
                self.on_value_change(raw);
            }
        }
        self.tracker.on_pointer_move(x, &bbox);
        let region = self.tracker.region();
        let left_fired = self.left_pulse.observe(region);
        let right_fired = self.right_pulse.observe(region);
        if left_fired || right_fired {
            log::debug!("[slider] edge pulse {}", region.as_str());
        }
    }

    /// Capture lost for any reason, including cancelled drags. Always starts
    /// the spring-back.
    pub fn on_lost_pointer_capture(&mut self) {
        self.pressed = false;
        self.tracker.on_pointer_release();
    }

    pub fn on_hover_start(&mut self) {
        self.scale.set_target(self.config.hover_scale);
    }

    pub fn on_hover_end(&mut self) {
        self.scale.set_target(self.config.base_scale);
    }

    pub fn on_touch_start(&mut self) {
        self.scale.set_target(self.config.hover_scale);
    }

    pub fn on_touch_end(&mut self) {
        self.scale.set_target(self.config.base_scale);
    }

    /// Secondary control input; returns the applied cap.
    pub fn set_max_overflow(&mut self, max_overflow: f64) -> f64 {
        if let Some(m) = quantize_max_overflow(max_overflow) {
            self.tracker.set_max_overflow(m);
        }
        self.tracker.max_overflow()
    }

    /// Advance all animations by one frame. Returns true while any runs.
    pub fn tick(&mut self, dt_sec: f64) -> bool {
        let releasing = self.tracker.tick(dt_sec);
        let scaling = self.scale.step(dt_sec);
        let left = self.left_pulse.tick(dt_sec);
        let right = self.right_pulse.tick(dt_sec);
        releasing || scaling || left || right
    }

    #[inline]
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    #[inline]
    pub fn scale(&self) -> f64 {
        self.scale.position
    }

    #[inline]
    pub fn region(&self) -> Region {
        self.tracker.region()
    }

    #[inline]
    pub fn overflow(&self) -> f64 {
        self.tracker.overflow()
    }

    #[inline]
    pub fn pointer_x(&self) -> f64 {
        self.tracker.pointer_x()
    }

    #[inline]
    pub fn max_overflow(&self) -> f64 {
        self.tracker.max_overflow()
    }

    pub fn tracker(&self) -> &OverflowTracker {
        &self.tracker
    }

    pub fn tracker_mut(&mut self) -> &mut OverflowTracker {
        &mut self.tracker
    }

    /// Style parameters for the current state. `bbox` is the track's layout
    /// for this frame, if known.
    pub fn presentation(&self, bbox: Option<BoundingBox>) -> Presentation {
        let scale = self.scale();
        let overflow = self.tracker.signed_overflow();
        let region = self.region();
        let scale_range = [self.config.base_scale, self.config.hover_scale];
        Presentation {
            container_scale: scale,
            container_opacity: map_clamped(scale, scale_range, CONTAINER_OPACITY),
            track_scale_x: squeeze_scale_x(overflow, bbox.map(|b| b.width)),
            track_scale_y: squeeze_scale_y(overflow, self.max_overflow(), SQUEEZE_MIN_SCALE_Y),
            track_origin: transform_origin(self.pointer_x(), bbox.as_ref()),
            track_height_px: map_clamped(scale, scale_range, TRACK_HEIGHT_PX),
            track_margin_y_px: map_clamped(scale, scale_range, TRACK_MARGIN_Y_PX),
            left_icon_x: icon_offset(Region::Left, region, overflow, scale),
            right_icon_x: icon_offset(Region::Right, region, overflow, scale),
            left_icon_scale: self.left_pulse.scale(),
            right_icon_scale: self.right_pulse.scale(),
            value_fraction: (self.value() as f64 - VALUE_MIN) / (VALUE_MAX - VALUE_MIN),
        }
    }

    pub fn readout(&self) -> DebugReadout {
        DebugReadout {
            value: self.value(),
            pointer_x: self.pointer_x().floor() as i64,
            overflow: self.overflow().floor() as i64,
            region: self.region(),
            max_overflow: self.max_overflow(),
        }
    }
}

impl Default for ElasticSlider {
    fn default() -> Self {
        Self::new(SliderConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_value_is_floored() {
        let mut s = ElasticSlider::default();
        assert_eq!(s.value(), 50);
        assert_eq!(s.on_value_change(73.6), 73);
        assert_eq!(s.on_value_change(99.99), 99);
        assert_eq!(s.on_value_change(100.0), 100);
    }

    #[test]
    fn out_of_range_is_clamped_and_nan_ignored() {
        let mut s = ElasticSlider::default();
        assert_eq!(s.on_value_change(-4.2), 0);
        assert_eq!(s.on_value_change(140.0), 100);
        assert_eq!(s.on_value_change(f64::NAN), 100);
        assert_eq!(s.set_value(f64::INFINITY), 100);
    }

    #[test]
    fn max_overflow_control_is_stepped_and_bounded() {
        let mut s = ElasticSlider::default();
        assert_eq!(s.set_max_overflow(33.4), 33.0);
        assert_eq!(s.set_max_overflow(250.0), 100.0);
        assert_eq!(s.set_max_overflow(-1.0), 0.0);
        assert_eq!(s.set_max_overflow(f64::NAN), 0.0);
    }

    #[test]
    fn configured_cap_is_bounded_like_the_control() {
        let s = ElasticSlider::new(SliderConfig {
            max_overflow: 150.0,
            ..Default::default()
        });
        assert_eq!(s.max_overflow(), 100.0);
        let s = ElasticSlider::new(SliderConfig {
            max_overflow: 42.6,
            ..Default::default()
        });
        assert_eq!(s.max_overflow(), 43.0);
    }

    #[test]
    fn readout_floors_live_values() {
        let mut s = ElasticSlider::default();
        let track = BoundingBox::new(100.0, 300.0);
        s.on_pointer_move(70.7, 1, &track);
        let r = s.readout();
        assert_eq!(r.pointer_x, 70);
        assert_eq!(r.region, Region::Left);
        assert_eq!(r.overflow, s.overflow().floor() as i64);
        assert_eq!(r.max_overflow, 50.0);
    }
}
