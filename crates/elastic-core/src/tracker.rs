//! Converts live pointer X into a region and a decayed overflow magnitude, and
//! springs the magnitude back to rest on release.

use crate::config::SliderConfig;
use crate::decay::decay;
use crate::geometry::{one_sided_displacement, Region, TrackGeometry};
use crate::observable::Observable;
use crate::spring::{Spring, SpringParams};

#[derive(Debug)]
pub struct OverflowTracker {
    pointer_x: Observable<f64>,
    region: Observable<Region>,
    overflow: Observable<f64>,
    // Oscillator displacement during spring-back, negative on overshoot.
    // Equals `overflow` otherwise.
    signed_overflow: f64,
    max_overflow: f64,
    release_params: SpringParams,
    // Sole writer of `overflow` while Some; dropped on the next pointer move.
    release: Option<Spring>,
}

impl OverflowTracker {
    pub fn new(max_overflow: f64, release_params: SpringParams) -> Self {
        Self {
            pointer_x: Observable::new(0.0),
            region: Observable::new(Region::Middle),
            overflow: Observable::new(0.0),
            signed_overflow: 0.0,
            max_overflow: sanitize_max(max_overflow, 0.0),
            release_params,
            release: None,
        }
    }

    pub fn from_config(config: &SliderConfig) -> Self {
        Self::new(
            config.max_overflow,
            SpringParams::from_bounce(config.release_bounce, config.release_duration_sec),
        )
    }

    /// Record a drag-move position. Region and overflow follow instantly when
    /// the track geometry is available and keep their last values otherwise.
    pub fn on_pointer_move(&mut self, x: f64, geometry: &impl TrackGeometry) {
        if !x.is_finite() {
            return;
        }
        self.pointer_x.set(x);
        let Some(bbox) = geometry.bounding_box() else {
            log::trace!("[tracker] no track layout; keeping region/overflow");
            return;
        };
        let region = Region::classify(x, &bbox);
        if self.region.set(region) {
            log::debug!("[tracker] region -> {}", region.as_str());
        }
        let displacement = one_sided_displacement(x, &bbox);
        self.jump(decay(displacement, self.max_overflow));
    }

    /// Start the spring-back from the current magnitude toward 0.
    pub fn on_pointer_release(&mut self) {
        let from = self.overflow.get();
        let spring = Spring::new(from, 0.0, self.release_params);
        if spring.is_settled() {
            self.release = None;
            self.signed_overflow = 0.0;
            self.overflow.set(0.0);
            return;
        }
        log::debug!("[tracker] spring-back from {:.2}", from);
        self.release = Some(spring);
    }

    /// Does not rescale an overflow already in flight.
    pub fn set_max_overflow(&mut self, max_overflow: f64) {
        self.max_overflow = sanitize_max(max_overflow, self.max_overflow);
    }

    /// Advance the spring-back by one frame. Returns true while it runs.
    pub fn tick(&mut self, dt_sec: f64) -> bool {
        let Some(spring) = self.release.as_mut() else {
            return false;
        };
        let running = spring.step(dt_sec);
        self.signed_overflow = spring.position;
        let magnitude = spring.position.abs();
        if !running {
            self.release = None;
        }
        self.overflow.set(magnitude);
        running
    }

    fn jump(&mut self, overflow: f64) {
        if self.release.take().is_some() {
            log::debug!("[tracker] spring-back cancelled");
        }
        self.signed_overflow = overflow;
        self.overflow.set(overflow);
    }

    #[inline]
    pub fn pointer_x(&self) -> f64 {
        self.pointer_x.get()
    }

    #[inline]
    pub fn region(&self) -> Region {
        self.region.get()
    }

    #[inline]
    pub fn overflow(&self) -> f64 {
        self.overflow.get()
    }

    /// Like `overflow`, but keeps the sign of the spring-back overshoot so the
    /// renderer can briefly compress the track past rest.
    #[inline]
    pub fn signed_overflow(&self) -> f64 {
        self.signed_overflow
    }

    #[inline]
    pub fn max_overflow(&self) -> f64 {
        self.max_overflow
    }

    #[inline]
    pub fn is_releasing(&self) -> bool {
        self.release.is_some()
    }

    pub fn overflow_version(&self) -> u64 {
        self.overflow.version()
    }

    pub fn subscribe_region(&mut self, listener: impl FnMut(&Region) + 'static) {
        self.region.subscribe(listener);
    }

    pub fn subscribe_overflow(&mut self, listener: impl FnMut(&f64) + 'static) {
        self.overflow.subscribe(listener);
    }
}

#[inline]
fn sanitize_max(max_overflow: f64, fallback: f64) -> f64 {
    if max_overflow.is_finite() {
        max_overflow.max(0.0)
    } else {
        fallback
    }
}
