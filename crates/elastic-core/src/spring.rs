//! Mass-spring-damper integrator used for spring-back and magnification.

use crate::constants::{
    SPRING_MAX_FRAME_SEC, SPRING_MAX_SUBSTEPS, SPRING_MAX_SUBSTEP_SEC, SPRING_REST_DELTA,
    SPRING_REST_SPEED,
};
use std::f64::consts::TAU;

// Lower bound on the damping ratio so that a bounce of ~1 still settles.
const MIN_DAMPING_RATIO: f64 = 0.05;
// Shortest duration `from_bounce` accepts; keeps the substep count bounded.
const MIN_DURATION_SEC: f64 = 0.005;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringParams {
    pub stiffness: f64,
    pub damping: f64,
    pub rest_delta: f64,
    pub rest_speed: f64,
}

impl SpringParams {
    pub fn new(stiffness: f64, damping: f64) -> Self {
        Self {
            stiffness,
            damping,
            rest_delta: SPRING_REST_DELTA,
            rest_speed: SPRING_REST_SPEED,
        }
    }

    /// Unit-mass spring from a bounce factor and a perceived duration.
    ///
    /// `bounce` maps to damping ratio `1 - bounce`, so 0 is critically damped
    /// and larger values overshoot more. The duration sets the natural
    /// frequency (`2π / duration`).
    pub fn from_bounce(bounce: f64, duration_sec: f64) -> Self {
        let zeta = (1.0 - bounce).clamp(MIN_DAMPING_RATIO, 1.0);
        let omega = TAU / duration_sec.max(MIN_DURATION_SEC);
        Self::new(omega * omega, 2.0 * zeta * omega)
    }

    pub fn with_rest(mut self, rest_delta: f64, rest_speed: f64) -> Self {
        self.rest_delta = rest_delta;
        self.rest_speed = rest_speed;
        self
    }

    #[inline]
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * self.stiffness.sqrt())
    }

    /// Largest substep for which semi-implicit Euler stays stable for these
    /// parameters: `h <= 1 / (2ω)` and `h * c <= 1/2`.
    pub fn stable_substep(&self) -> f64 {
        let omega = self.stiffness.max(0.0).sqrt();
        let mut h = SPRING_MAX_SUBSTEP_SEC;
        if omega > 0.0 {
            h = h.min(0.5 / omega);
        }
        if self.damping > 0.0 {
            h = h.min(0.5 / self.damping);
        }
        h
    }
}

/// A running spring animation from `position` toward `target`.
#[derive(Clone, Copy, Debug)]
pub struct Spring {
    pub position: f64,
    pub velocity: f64,
    pub target: f64,
    params: SpringParams,
    settled: bool,
}

impl Spring {
    pub fn new(position: f64, target: f64, params: SpringParams) -> Self {
        let mut spring = Self {
            position,
            velocity: 0.0,
            target,
            params,
            settled: false,
        };
        spring.try_settle();
        spring
    }

    pub fn with_velocity(mut self, velocity: f64) -> Self {
        self.velocity = velocity;
        self.settled = false;
        self.try_settle();
        self
    }

    pub fn params(&self) -> &SpringParams {
        &self.params
    }

    /// Retarget without resetting position or velocity.
    pub fn set_target(&mut self, target: f64) {
        if target != self.target {
            self.target = target;
            self.settled = false;
            self.try_settle();
        }
    }

    #[inline]
    pub fn is_settled(&self) -> bool {
        self.settled
    }

    /// Advance by `dt_sec` using semi-implicit Euler substeps.
    /// Returns true while still animating.
    pub fn step(&mut self, dt_sec: f64) -> bool {
        if self.settled {
            return false;
        }
        let dt = dt_sec.clamp(0.0, SPRING_MAX_FRAME_SEC);
        if dt == 0.0 {
            return true;
        }
        let substeps = ((dt / self.params.stable_substep()).ceil().max(1.0) as u32)
            .min(SPRING_MAX_SUBSTEPS);
        let h = dt / substeps as f64;
        let k = self.params.stiffness;
        let c = self.params.damping;
        for _ in 0..substeps {
            let accel = -k * (self.position - self.target) - c * self.velocity;
            self.velocity += accel * h;
            self.position += self.velocity * h;
        }
        !self.try_settle()
    }

    fn try_settle(&mut self) -> bool {
        if (self.position - self.target).abs() < self.params.rest_delta
            && self.velocity.abs() < self.params.rest_speed
        {
            self.position = self.target;
            self.velocity = 0.0;
            self.settled = true;
        }
        self.settled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f64 = 1.0 / 60.0;

    #[test]
    fn bounce_maps_to_damping_ratio() {
        let p = SpringParams::from_bounce(0.5, 0.8);
        assert!((p.damping_ratio() - 0.5).abs() < 1e-9);
        let critical = SpringParams::from_bounce(0.0, 0.8);
        assert!((critical.damping_ratio() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn underdamped_spring_overshoots_then_settles() {
        let mut s = Spring::new(40.0, 0.0, SpringParams::from_bounce(0.5, 0.8));
        let mut min_seen = f64::MAX;
        let mut frames = 0;
        while s.step(FRAME) {
            min_seen = min_seen.min(s.position);
            frames += 1;
            assert!(frames < 600, "spring did not settle");
        }
        assert!(min_seen < 0.0, "expected an overshoot past the target");
        assert_eq!(s.position, 0.0);
        assert_eq!(s.velocity, 0.0);
        assert!(s.is_settled());
    }

    #[test]
    fn at_rest_spring_is_settled_immediately() {
        let mut s = Spring::new(0.0, 0.0, SpringParams::from_bounce(0.5, 0.8));
        assert!(s.is_settled());
        assert!(!s.step(FRAME));
    }

    #[test]
    fn retarget_keeps_velocity() {
        let params = SpringParams::new(500.0, 25.0).with_rest(0.001, 0.01);
        let mut s = Spring::new(1.0, 1.2, params);
        s.step(FRAME);
        let v = s.velocity;
        assert!(v > 0.0);
        s.set_target(1.0);
        assert_eq!(s.velocity, v);
        assert!(!s.is_settled());
    }

    #[test]
    fn very_stiff_spring_stays_bounded_and_settles() {
        let params = SpringParams::from_bounce(0.5, 0.01);
        assert!(params.stable_substep() * params.stiffness.sqrt() <= 0.5 + 1e-12);
        let mut s = Spring::new(38.0, 0.0, params);
        let mut frames = 0;
        while s.step(FRAME) {
            assert!(s.position.is_finite());
            assert!(s.position.abs() <= 38.0);
            frames += 1;
            assert!(frames < 600, "spring did not settle");
        }
        assert_eq!(s.position, 0.0);
    }

    #[test]
    fn long_frames_are_clamped() {
        let mut a = Spring::new(10.0, 0.0, SpringParams::from_bounce(0.5, 0.8));
        let mut b = a;
        a.step(5.0);
        b.step(SPRING_MAX_FRAME_SEC);
        assert_eq!(a.position, b.position);
    }
}
