//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One discrete step per tick, no wall-clock time
//! - Seeded RNG only
//! - Stable iteration order (spawn order for balls, column-major for bricks)
//! - No rendering or platform dependencies

pub mod ball;
pub mod bricks;
pub mod collision;
pub mod paddle;
pub mod powerup;
pub mod state;
pub mod tick;

pub use ball::{Ball, BallMotion};
pub use bricks::{Brick, BrickGrid};
pub use collision::Rect;
pub use paddle::Paddle;
pub use powerup::{PowerUp, PowerUpKind, PowerUpSet};
pub use state::{GamePhase, GameState, Snapshot};
pub use tick::{TickInput, tick};
