//! Mini Golf - a 2D mini golf motion and collision engine
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, collisions, round state)
//! - `course`: Hole layouts and the JSON course loader
//! - `tuning`: Data-driven physics parameters
//! - `scorecard`: In-session stroke bookkeeping
//! - `autoplay`: Seeded aim bot used by the headless runner

pub mod autoplay;
pub mod course;
pub mod error;
pub mod scorecard;
pub mod sim;
pub mod tuning;

pub use course::Course;
pub use error::{LevelError, TuningError};
pub use scorecard::Scorecard;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Frame cadence the engine constants are calibrated for
    pub const FPS: u32 = 60;

    /// Playfield dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Multiplicative per-frame velocity decay
    pub const FRICTION: f32 = 0.98;
    /// Below this speed a rolling ball comes to rest
    pub const STOP_EPSILON: f32 = 0.1;

    /// Cup defaults
    pub const CUP_RADIUS: f32 = 15.0;
    /// The ball only drops in when slower than this
    pub const CAPTURE_SPEED_EPSILON: f32 = 1.0;

    /// Shot power: drag length (px) times scale, capped
    pub const POWER_SCALE: f32 = 0.1;
    pub const MAX_POWER: f32 = 15.0;

    /// Aim arrow length per unit of power
    pub const AIM_ARROW_SCALE: f32 = 20.0;

    /// Segments shorter than this (squared) are treated as points
    pub const MIN_SEGMENT_LENGTH_SQ: f32 = 1.0e-4;
}
