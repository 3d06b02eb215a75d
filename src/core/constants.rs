// All world distances are in terminal cells, velocities in cells per frame.

// Screen and timing
pub const SCREEN_WIDTH: u16 = 40;
pub const SCREEN_HEIGHT: u16 = 24;
pub const MIN_SCREEN_WIDTH: u16 = 24;
pub const MIN_SCREEN_HEIGHT: u16 = 16;
pub const FPS: u32 = 30;
pub const MAX_FPS: u32 = 240;

/// Fraction of the screen height above the floor.
pub const VIEWPORT_RATIO: f64 = 0.79;

// Player physics (normal flight)
pub const GRAVITY: f64 = 0.05;
pub const FLAP_IMPULSE: f64 = -0.42;
pub const TERMINAL_VELOCITY: f64 = 0.47;
/// Player's fixed column as a fraction of the screen width.
pub const PLAYER_X_RATIO: f64 = 0.2;

// Player rotation, in degrees
pub const FLAP_ROTATION: f64 = 80.0;
pub const ROTATION_SPEED: f64 = -3.0;
pub const ROTATION_MIN: f64 = -90.0;
pub const ROTATION_MAX: f64 = 20.0;

// Splash hover
pub const HOVER_VELOCITY: f64 = 0.05;
pub const HOVER_MAX_VELOCITY: f64 = 0.2;
pub const HOVER_ACCELERATION: f64 = 0.025;

// Crash fall
pub const CRASH_GRAVITY: f64 = 0.1;
pub const CRASH_VELOCITY: f64 = 0.33;
pub const CRASH_MAX_VELOCITY: f64 = 0.7;
pub const CRASH_ROTATION_SPEED: f64 = -8.0;

/// Wing animation advances once every this many frames.
pub const WING_FRAME_INTERVAL: u64 = 5;

// Pipes. Speed and spawn offset are exact binary fractions so pipe centres
// land on the same values every run and crossing checks never straddle.
pub const PIPE_SPEED: f64 = 0.75;
pub const PIPE_GAP: f64 = 6.0;
pub const PIPE_WIDTH: u16 = 4;
pub const PIPE_SPAWN_OFFSET: f64 = 1.5;
/// A new pair spawns once the last one is this many pipe widths clear of the right edge.
pub const PIPE_CLEARANCE: f64 = 2.5;

// Floor
pub const FLOOR_SPEED: f64 = 0.5;
/// Extra floor columns beyond the screen width, used for the scroll loop.
pub const FLOOR_EXTRA_WIDTH: u16 = 8;

// Tiers
pub const TIER_SCORE_STEP: u32 = 20;

// Files in the data directory
pub const HIGH_SCORE_FILE: &str = "high_score.json";
pub const CONFIG_FILE: &str = "config.json";
