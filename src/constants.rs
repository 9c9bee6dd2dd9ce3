// Element ids and DOM tuning for the slider page.

// Required elements
pub const CONTAINER_ID: &str = "elastic-slider"; // hover/touch target, magnified as a whole
pub const ROOT_ID: &str = "slider-root"; // pointer target; its box is the track extent
pub const TRACK_ID: &str = "slider-track"; // stretched and squeezed
pub const RANGE_ID: &str = "slider-range"; // filled part of the track
pub const THUMB_ID: &str = "slider-thumb";
pub const ICON_LEFT_ID: &str = "icon-left";
pub const ICON_RIGHT_ID: &str = "icon-right";
pub const VALUE_READOUT_ID: &str = "value-readout";

// Optional elements
pub const MAX_OVERFLOW_INPUT_ID: &str = "max-overflow";
pub const MAX_OVERFLOW_READOUT_ID: &str = "max-overflow-value";
pub const DEBUG_PANEL_ID: &str = "debug-panel";
pub const DEBUG_READOUT_ID: &str = "debug-readout";
pub const DEBUG_TOGGLE_ID: &str = "debug-toggle";

// Config overrides read from the root element
pub const ATTR_MAX_OVERFLOW: &str = "data-max-overflow";
pub const ATTR_BOUNCE: &str = "data-bounce";
pub const ATTR_INITIAL_VALUE: &str = "data-initial-value";
pub const ATTR_HOVER_SCALE: &str = "data-hover-scale";

// Frame timing
pub const MAX_FRAME_DT_SEC: f64 = 0.1; // clamp after tab switches / stalls

// Pointer buttons mask value meaning "nothing pressed"
pub const NO_BUTTONS: u16 = 0;
