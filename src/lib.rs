//! Brickfall - a brick-breaking arcade game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (bricks, balls, paddle, power-ups, tick)
//! - `game`: Presentation-facing handle with pending input
//! - `config`: Playfield and host-supplied settings
//! - `web`: wasm-bindgen surface for browser hosts

pub mod config;
pub mod error;
pub mod game;
pub mod sim;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use config::GameConfig;
pub use error::ConfigError;
pub use game::Game;

/// Game configuration constants
pub mod consts {
    /// Nominal tick rate of the presentation layer
    pub const TICK_RATE_HZ: u64 = 60;

    /// Default playfield dimensions
    pub const PLAYFIELD_WIDTH: f32 = 480.0;
    pub const PLAYFIELD_HEIGHT: f32 = 320.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 6.0;
    pub const BALL_INITIAL_SPEED: f32 = 4.0;
    /// Start height above the bottom edge
    pub const BALL_START_OFFSET: f32 = 30.0;
    /// Trail capacity (oldest evicted first)
    pub const TRAIL_LENGTH: usize = 10;
    /// Horizontal speed at the paddle's outer edge
    pub const PADDLE_DEFLECT_SPEED: f32 = 5.0;
    /// Minimum upward speed after a paddle bounce
    pub const MIN_BOUNCE_SPEED: f32 = 2.0;

    /// Paddle defaults
    pub const PADDLE_BASE_WIDTH: f32 = 45.0;
    pub const PADDLE_SPEED: f32 = 7.0;
    pub const PADDLE_EXPAND_FACTOR: f32 = 1.5;
    /// Height / width of the paddle sprite when the host supplies nothing
    pub const DEFAULT_PADDLE_ASPECT: f32 = 10.0 / 45.0;
    /// Paddle shake after a ball bounce
    pub const SHAKE_TICKS: u32 = 10;

    /// Brick layout
    pub const BRICK_ROWS: usize = 5;
    pub const BRICK_COLUMNS: usize = 8;
    pub const BRICK_PADDING: f32 = 5.0;
    pub const BRICK_OFFSET_TOP: f32 = 25.0;
    pub const BRICK_OFFSET_LEFT: f32 = 30.0;
    pub const BRICK_HEIGHT: f32 = 15.0;

    /// Power-ups
    pub const POWERUP_DROP_CHANCE: f64 = 0.2;
    pub const POWERUP_FALL_SPEED: f32 = 2.0;
    pub const POWERUP_SIZE: f32 = 20.0;
    /// Expand lasts 10 seconds
    pub const EXPAND_DURATION_TICKS: u64 = 10 * TICK_RATE_HZ;
    /// Vertical speed of multiball spawns relative to the initial speed
    pub const MULTIBALL_LIFT: f32 = 0.8;
}

/// Width of a single brick for a playfield of the given width
#[inline]
pub fn brick_width(playfield_width: f32) -> f32 {
    use consts::*;
    (playfield_width - BRICK_OFFSET_LEFT * 2.0 - BRICK_PADDING * (BRICK_COLUMNS as f32 - 1.0))
        / BRICK_COLUMNS as f32
}

/// Clamp a possibly non-finite value into `[min, max]`, mapping NaN to `fallback`
#[inline]
pub fn clamp_finite(value: f32, min: f32, max: f32, fallback: f32) -> f32 {
    if value.is_nan() {
        fallback
    } else {
        value.clamp(min, max.max(min))
    }
}
