use crate::constants::*;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("max overflow must be finite and >= 0, got {0}")]
    MaxOverflow(f64),
    #[error("release bounce must be within (0, 1), got {0}")]
    Bounce(f64),
    #[error("release duration must be positive, got {0}s")]
    ReleaseDuration(f64),
    #[error("release duration must be at least {min}s, got {got}s")]
    ReleaseDurationTooShort { min: f64, got: f64 },
    #[error("hover scale {hover} must be >= base scale {base}")]
    HoverScale { base: f64, hover: f64 },
    #[error("pulse duration must be positive, got {0}s")]
    PulseDuration(f64),
    #[error("pulse peak must be >= 1, got {0}")]
    PulsePeak(f64),
}

/// Tunables for one slider instance.
#[derive(Clone, Debug, PartialEq)]
pub struct SliderConfig {
    pub initial_value: f64,
    pub max_overflow: f64,
    pub release_bounce: f64,
    pub release_duration_sec: f64,
    pub base_scale: f64,
    pub hover_scale: f64,
    pub pulse_peak: f64,
    pub pulse_duration_sec: f64,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            initial_value: DEFAULT_VALUE,
            max_overflow: DEFAULT_MAX_OVERFLOW,
            release_bounce: RELEASE_BOUNCE,
            release_duration_sec: RELEASE_DURATION_SEC,
            base_scale: BASE_SCALE,
            hover_scale: HOVER_SCALE,
            pulse_peak: PULSE_PEAK_SCALE,
            pulse_duration_sec: PULSE_DURATION_SEC,
        }
    }
}

impl SliderConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.max_overflow.is_finite() || self.max_overflow < 0.0 {
            return Err(ConfigError::MaxOverflow(self.max_overflow));
        }
        if !(self.release_bounce > 0.0 && self.release_bounce < 1.0) {
            return Err(ConfigError::Bounce(self.release_bounce));
        }
        if !(self.release_duration_sec > 0.0) {
            return Err(ConfigError::ReleaseDuration(self.release_duration_sec));
        }
        if self.release_duration_sec < MIN_RELEASE_DURATION_SEC {
            return Err(ConfigError::ReleaseDurationTooShort {
                min: MIN_RELEASE_DURATION_SEC,
                got: self.release_duration_sec,
            });
        }
        if !(self.base_scale > 0.0 && self.hover_scale >= self.base_scale) {
            return Err(ConfigError::HoverScale {
                base: self.base_scale,
                hover: self.hover_scale,
            });
        }
        if !(self.pulse_duration_sec > 0.0) {
            return Err(ConfigError::PulseDuration(self.pulse_duration_sec));
        }
        if !(self.pulse_peak >= 1.0) {
            return Err(ConfigError::PulsePeak(self.pulse_peak));
        }
        Ok(())
    }

    /// Validate, falling back to defaults (and logging why) when invalid.
    pub fn or_default(self) -> Self {
        match self.validate() {
            Ok(()) => self,
            Err(e) => {
                log::warn!("[config] {e}; using defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(SliderConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_bad_values() {
        let bad = SliderConfig {
            max_overflow: -1.0,
            ..Default::default()
        };
        assert_eq!(bad.validate(), Err(ConfigError::MaxOverflow(-1.0)));

        let bad = SliderConfig {
            release_bounce: 0.0,
            ..Default::default()
        };
        assert!(matches!(bad.validate(), Err(ConfigError::Bounce(_))));

        let bad = SliderConfig {
            hover_scale: 0.9,
            ..Default::default()
        };
        assert!(matches!(bad.validate(), Err(ConfigError::HoverScale { .. })));

        let bad = SliderConfig {
            pulse_duration_sec: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(bad.validate(), Err(ConfigError::PulseDuration(_))));
    }

    #[test]
    fn rejects_release_duration_below_floor() {
        let short = SliderConfig {
            release_duration_sec: 0.01,
            ..Default::default()
        };
        assert_eq!(
            short.validate(),
            Err(ConfigError::ReleaseDurationTooShort {
                min: MIN_RELEASE_DURATION_SEC,
                got: 0.01
            })
        );
        let floor = SliderConfig {
            release_duration_sec: MIN_RELEASE_DURATION_SEC,
            ..Default::default()
        };
        assert_eq!(floor.validate(), Ok(()));
    }

    #[test]
    fn invalid_config_falls_back_to_defaults() {
        let bad = SliderConfig {
            release_duration_sec: 0.0,
            ..Default::default()
        };
        assert_eq!(bad.or_default(), SliderConfig::default());
    }
}
