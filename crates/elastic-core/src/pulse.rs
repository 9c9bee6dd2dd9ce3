//! One-shot icon pulse fired on the rising edge of "pointer is past this edge".

use crate::geometry::Region;

#[derive(Clone, Debug)]
pub struct EdgePulse {
    side: Region,
    peak: f64,
    duration_sec: f64,
    elapsed_sec: Option<f64>,
    was_active: bool,
}

impl EdgePulse {
    pub fn new(side: Region, peak: f64, duration_sec: f64) -> Self {
        Self {
            side,
            peak,
            duration_sec,
            elapsed_sec: None,
            was_active: false,
        }
    }

    pub fn side(&self) -> Region {
        self.side
    }

    /// Feed the current region. Starts (or restarts) the pulse only when the
    /// region enters this pulse's side; returns true when it fired.
    pub fn observe(&mut self, region: Region) -> bool {
        let active = region == self.side;
        let rising = active && !self.was_active;
        self.was_active = active;
        if rising {
            self.elapsed_sec = Some(0.0);
        }
        rising
    }

    /// Returns true while the pulse is still playing.
    pub fn tick(&mut self, dt_sec: f64) -> bool {
        let Some(elapsed) = self.elapsed_sec.as_mut() else {
            return false;
        };
        *elapsed += dt_sec.max(0.0);
        if *elapsed >= self.duration_sec {
            self.elapsed_sec = None;
            return false;
        }
        true
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.elapsed_sec.is_some()
    }

    /// Keyframes 1 -> peak -> 1, eased in-out per segment.
    pub fn scale(&self) -> f64 {
        let Some(elapsed) = self.elapsed_sec else {
            return 1.0;
        };
        let t = (elapsed / self.duration_sec).clamp(0.0, 1.0);
        let (from, to, local) = if t < 0.5 {
            (1.0, self.peak, t * 2.0)
        } else {
            (self.peak, 1.0, (t - 0.5) * 2.0)
        };
        from + (to - from) * ease_in_out(local)
    }
}

#[inline]
fn ease_in_out(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f64 = 1.0 / 60.0;

    #[test]
    fn fires_once_per_entry() {
        let mut p = EdgePulse::new(Region::Left, 1.4, 0.25);
        assert!(!p.observe(Region::Middle));
        assert!(p.observe(Region::Left));
        assert!(!p.observe(Region::Left));
        assert!(!p.observe(Region::Left));
        assert!(!p.observe(Region::Right));
        assert!(p.observe(Region::Left));
    }

    #[test]
    fn plays_up_and_back_within_duration() {
        let mut p = EdgePulse::new(Region::Right, 1.4, 0.25);
        assert_eq!(p.scale(), 1.0);
        p.observe(Region::Right);
        let mut peak = 1.0_f64;
        let mut frames = 0;
        while p.tick(FRAME) {
            let s = p.scale();
            assert!((1.0..=1.4 + 1e-9).contains(&s));
            peak = peak.max(s);
            frames += 1;
        }
        assert!(peak > 1.35, "peak {peak}");
        assert!(frames <= 15);
        assert_eq!(p.scale(), 1.0);
        assert!(!p.is_running());
    }
}
