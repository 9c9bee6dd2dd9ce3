use crate::constants::{ATTR_BOUNCE, ATTR_HOVER_SCALE, ATTR_INITIAL_VALUE, ATTR_MAX_OVERFLOW};
use elastic_core::SliderConfig;

/// Build a config from `data-*` overrides. `attr` returns the raw attribute
/// value, if present. Unparsable values are logged and skipped.
pub fn config_from_attributes(attr: impl Fn(&str) -> Option<String>) -> SliderConfig {
    let mut config = SliderConfig::default();
    let fields: [(&str, &mut f64); 4] = [
        (ATTR_MAX_OVERFLOW, &mut config.max_overflow),
        (ATTR_BOUNCE, &mut config.release_bounce),
        (ATTR_INITIAL_VALUE, &mut config.initial_value),
        (ATTR_HOVER_SCALE, &mut config.hover_scale),
    ];
    for (name, slot) in fields {
        let Some(raw) = attr(name) else {
            continue;
        };
        match raw.trim().parse::<f64>() {
            Ok(v) => *slot = v,
            Err(e) => log::warn!("[config] ignoring {}={:?}: {}", name, raw, e),
        }
    }
    config.or_default()
}
