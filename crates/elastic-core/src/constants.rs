// Shared tuning constants for the elastic slider.

// Value range
pub const VALUE_MIN: f64 = 0.0;
pub const VALUE_MAX: f64 = 100.0;
pub const DRAG_STEP: f64 = 0.01; // granularity of the raw drag value
pub const DEFAULT_VALUE: f64 = 50.0;

// Overflow ceiling and its secondary control
pub const DEFAULT_MAX_OVERFLOW: f64 = 50.0;
pub const MAX_OVERFLOW_CONTROL_MIN: f64 = 0.0;
pub const MAX_OVERFLOW_CONTROL_MAX: f64 = 100.0;
pub const MAX_OVERFLOW_CONTROL_STEP: f64 = 1.0;

// Spring-back on release
pub const RELEASE_BOUNCE: f64 = 0.5; // 0 = critically damped, towards 1 = springier
pub const RELEASE_DURATION_SEC: f64 = 0.8; // perceived duration used to derive stiffness
pub const MIN_RELEASE_DURATION_SEC: f64 = 0.05; // shorter reads as a jump, not a spring
pub const SPRING_MAX_SUBSTEPS: u32 = 4096; // per frame, bounds work for very stiff springs
pub const SPRING_REST_DELTA: f64 = 0.01; // |x| below which a spring may settle
pub const SPRING_REST_SPEED: f64 = 0.05; // |v| below which a spring may settle
pub const SPRING_MAX_SUBSTEP_SEC: f64 = 1.0 / 240.0; // integrator substep cap
pub const SPRING_MAX_FRAME_SEC: f64 = 0.1; // frames longer than this are clamped

// Hover/touch magnification
pub const BASE_SCALE: f64 = 1.0;
pub const HOVER_SCALE: f64 = 1.2;
pub const SCALE_SPRING_STIFFNESS: f64 = 500.0;
pub const SCALE_SPRING_DAMPING: f64 = 25.0;
pub const SCALE_SPRING_REST_DELTA: f64 = 0.001;

// Edge pulse
pub const PULSE_PEAK_SCALE: f64 = 1.4;
pub const PULSE_DURATION_SEC: f64 = 0.25;

// Track squeeze and magnified geometry
pub const SQUEEZE_MIN_SCALE_Y: f64 = 0.8; // vertical scale at full overflow
pub const TRACK_HEIGHT_PX: [f64; 2] = [6.0, 12.0]; // at base and hover scale
pub const TRACK_MARGIN_Y_PX: [f64; 2] = [0.0, -3.0];
pub const CONTAINER_OPACITY: [f64; 2] = [0.7, 1.0];
