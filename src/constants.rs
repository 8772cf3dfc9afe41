/// Default tuning for the sea field, the flock and the marquee.
///
/// These are aesthetic knobs, not derived quantities. `core::params` gathers
/// them into parameter structs that can be overridden per container.
// Scene
pub const BACKGROUND_RGB: [u8; 3] = [248, 250, 252]; // slate-50
pub const TIME_STEP: f32 = 1.0; // simulation time advanced per rendered frame

// Wave grid
pub const GRID_ROWS: usize = 40;
pub const GRID_COLS: usize = 50;
pub const GRID_DIM_MAX: usize = 400; // upper bound accepted from data attributes
pub const WAVE_SPEED: f32 = 0.02; // swell phase per time unit
pub const PERSPECTIVE_EXPONENT: f32 = 0.7; // < 1 compresses far columns to the right
pub const SWELL_FREQUENCY: f32 = 5.0;
pub const SWELL_AMPLITUDE: f32 = 0.08; // fraction of surface height
pub const RIPPLE_ROW_FREQUENCY: f32 = 8.0;
pub const RIPPLE_COL_FREQUENCY: f32 = 12.0;
pub const RIPPLE_TIME_SCALE: f32 = 1.5; // ripple phase runs faster than the swell
pub const RIPPLE_AMPLITUDE: f32 = 0.03; // fraction of surface height
pub const DAMPENING_EXPONENT: f32 = 1.2; // horizon convergence
pub const VERTICAL_SPREAD: f32 = 1.5; // fraction of surface height at the near edge

// Pointer wake
pub const INTERACTION_RADIUS: f32 = 300.0; // backing pixels
pub const WAKE_SPATIAL_FREQUENCY: f32 = 0.04;
pub const WAKE_TEMPORAL_FREQUENCY: f32 = 0.05;
pub const WAKE_AMPLITUDE: f32 = 50.0; // backing pixels at distance 0
pub const POINTER_OFF_SURFACE: f32 = -1.0e6;

// Dots
pub const DOT_BASE_RADIUS: f32 = 8.0;
pub const DOT_MIN_VISIBLE_RADIUS: f32 = 0.5;
pub const DOT_NEAR_RGB: [u8; 3] = [2, 132, 199]; // sky-600
pub const DOT_FAR_RGB: [u8; 3] = [186, 230, 253]; // sky-200
pub const DOT_ALPHA_EXPONENT: f32 = 3.0;

// Birds
pub const FLOCK_SIZE: usize = 8;
pub const BIRD_EDGE_MARGIN: f32 = 200.0; // off-screen run-up on both sides
pub const BIRD_SCALE_BASE: f32 = 0.2;
pub const BIRD_SCALE_SPAN: f32 = 6.0; // scaled by depth squared
pub const BIRD_SPEED_BASE: f32 = 0.5; // pixels per frame
pub const BIRD_SPEED_SPAN: f32 = 3.5; // scaled by depth
pub const BIRD_SPAWN_BAND: [f32; 2] = [0.0, 0.4]; // initial y, fraction of height
pub const BIRD_REBIRTH_BAND: [f32; 2] = [0.1, 0.6]; // y on re-entry, fraction of height
pub const BIRD_BOB_TIME_RATE: f32 = 0.05;
pub const BIRD_BOB_SPACE_RATE: f32 = 0.01;
pub const BIRD_BOB_AMPLITUDE: f32 = 20.0;
pub const BIRD_FLAP_AMPLITUDE: f32 = 5.0; // multiplied by bird scale
pub const BIRD_FLAP_RATE_MIN: f32 = 0.15;
pub const BIRD_FLAP_RATE_SPAN: f32 = 0.1;
pub const BIRD_RGB: [u8; 3] = [15, 23, 42]; // slate-900

// Marquee
pub const MARQUEE_CYCLE_SECS: f32 = 60.0; // time to scroll exactly one copy
pub const MARQUEE_TITLE: &str = "Project Gallery";
pub const VIDEO_EXTENSIONS: [&str; 3] = ["mp4", "webm", "mov"];
