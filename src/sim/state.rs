//! Game state and core simulation types
//!
//! `GameState` owns every entity. The presentation layer only reads it,
//! either through the borrowed fields or a serializable `Snapshot`.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::bricks::BrickGrid;
use super::paddle::Paddle;
use super::powerup::{PowerUpKind, PowerUpSet};
use crate::config::GameConfig;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Every brick destroyed (terminal)
    Won,
    /// Every ball lost (terminal)
    Lost,
}

impl GamePhase {
    pub fn is_over(&self) -> bool {
        !matches!(self, GamePhase::Playing)
    }

    /// Overlay title for a finished game
    pub fn banner(&self) -> Option<&'static str> {
        match self {
            GamePhase::Playing => None,
            GamePhase::Won => Some("YOU WIN!"),
            GamePhase::Lost => Some("GAME OVER"),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Playing => "playing",
            GamePhase::Won => "won",
            GamePhase::Lost => "lost",
        }
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: GameConfig,
    /// Power-up RNG; carried across resets
    pub rng: Pcg32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub phase: GamePhase,
    /// Bricks destroyed this game
    pub score: u32,
    /// Remaining ticks of paddle shake
    pub shake_ticks: u32,
    pub paddle: Paddle,
    /// Active balls, in spawn order
    pub balls: Vec<Ball>,
    pub bricks: BrickGrid,
    pub power_ups: PowerUpSet,
}

impl GameState {
    /// Create a new game from a config, seeding the RNG from it
    pub fn new(config: GameConfig) -> Self {
        let rng = Pcg32::seed_from_u64(config.seed);
        Self::with_rng(config, rng)
    }

    /// Create a fresh game that draws from an existing RNG
    pub fn with_rng(config: GameConfig, rng: Pcg32) -> Self {
        let width = config.playfield_width;
        let height = config.playfield_height;
        Self {
            rng,
            time_ticks: 0,
            phase: GamePhase::Playing,
            score: 0,
            shake_ticks: 0,
            paddle: Paddle::new(width, config.paddle_aspect_ratio),
            balls: vec![Ball::starting(width, height)],
            bricks: BrickGrid::new(width),
            power_ups: PowerUpSet::new(),
            config,
        }
    }

    /// Replace the whole state with a fresh game in one assignment
    ///
    /// The paddle keeps the aspect ratio the host supplied.
    pub fn reset(&mut self) {
        let mut config = self.config.clone();
        config.paddle_aspect_ratio = self.paddle.aspect_ratio;
        let rng = self.rng.clone();
        *self = Self::with_rng(config, rng);
        log::info!("New game");
    }

    pub fn width(&self) -> f32 {
        self.config.playfield_width
    }

    pub fn height(&self) -> f32 {
        self.config.playfield_height
    }

    /// Bricks needed to win
    pub fn total_bricks(&self) -> u32 {
        (BRICK_ROWS * BRICK_COLUMNS) as u32
    }

    /// Transition to `Won` once the score covers every brick
    pub fn check_win(&mut self) -> bool {
        if self.phase == GamePhase::Playing && self.score >= self.total_bricks() {
            self.phase = GamePhase::Won;
            log::info!("All bricks cleared, score {}", self.score);
        }
        self.phase == GamePhase::Won
    }

    /// Transition to `Lost` once no balls remain
    pub fn check_loss(&mut self) -> bool {
        if self.phase == GamePhase::Playing && self.balls.is_empty() {
            self.phase = GamePhase::Lost;
            log::info!("Last ball lost, score {}", self.score);
        }
        self.phase == GamePhase::Lost
    }

    /// Apply a caught power-up
    pub fn activate_power_up(&mut self, kind: PowerUpKind) {
        match kind {
            PowerUpKind::Expand => {
                self.paddle.activate_expand(self.time_ticks);
            }
            PowerUpKind::MultiBall => {
                // Spawn from the first ball, or mid-field if none remain
                let origin = self
                    .balls
                    .first()
                    .map(|b| b.pos)
                    .unwrap_or_else(|| self.config.center());
                let lift = -BALL_INITIAL_SPEED * MULTIBALL_LIFT;
                self.balls
                    .push(Ball::new(origin, Vec2::new(BALL_INITIAL_SPEED, lift)));
                self.balls
                    .push(Ball::new(origin, Vec2::new(-BALL_INITIAL_SPEED, lift)));
            }
        }
        log::debug!("Power-up {:?} activated ({} balls)", kind, self.balls.len());
    }

    /// Read-only copy of everything the presentation layer draws
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            width: self.width(),
            height: self.height(),
            phase: self.phase,
            score: self.score,
            shake_ticks: self.shake_ticks,
            paddle: PaddleView {
                x: self.paddle.x,
                y: self.paddle.top(self.height()),
                width: self.paddle.width,
                height: self.paddle.height,
                expanded: self.paddle.is_expanded(),
            },
            bricks: self
                .bricks
                .iter()
                .map(|b| BrickView {
                    x: b.rect.pos.x,
                    y: b.rect.pos.y,
                    width: b.rect.size.x,
                    height: b.rect.size.y,
                    alive: b.alive,
                })
                .collect(),
            balls: self
                .balls
                .iter()
                .map(|b| BallView {
                    x: b.pos.x,
                    y: b.pos.y,
                    radius: BALL_RADIUS,
                    trail: b
                        .trail_fade()
                        .map(|(pos, fade)| TrailView {
                            x: pos.x,
                            y: pos.y,
                            fade,
                            radius: BALL_RADIUS * (0.5 + 0.5 * fade),
                        })
                        .collect(),
                })
                .collect(),
            power_ups: self
                .power_ups
                .iter()
                .map(|p| PowerUpView {
                    x: p.pos.x,
                    y: p.pos.y,
                    size: POWERUP_SIZE,
                    kind: p.kind,
                    label: p.kind.label(),
                    color: p.kind.color(),
                })
                .collect(),
        }
    }
}

/// Serializable view of the game for rendering
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub width: f32,
    pub height: f32,
    pub phase: GamePhase,
    pub score: u32,
    pub shake_ticks: u32,
    pub paddle: PaddleView,
    pub bricks: Vec<BrickView>,
    pub balls: Vec<BallView>,
    pub power_ups: Vec<PowerUpView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PaddleView {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub expanded: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct BrickView {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub alive: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct BallView {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    /// Oldest first
    pub trail: Vec<TrailView>,
}

/// A trail dot: `fade` runs from faint (oldest) to 1.0 (newest)
#[derive(Debug, Clone, Serialize)]
pub struct TrailView {
    pub x: f32,
    pub y: f32,
    pub fade: f32,
    pub radius: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct PowerUpView {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub kind: PowerUpKind,
    pub label: &'static str,
    pub color: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_state() {
        let state = GameState::new(GameConfig::default());
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.balls.len(), 1);
        assert_eq!(state.balls[0].pos, Vec2::new(240.0, 290.0));
        assert_eq!(state.balls[0].vel, Vec2::new(4.0, -4.0));
        assert!(state.power_ups.is_empty());
        assert_eq!(state.bricks.alive_count(), 40);
        assert_eq!(state.paddle.width, PADDLE_BASE_WIDTH);
    }

    #[test]
    fn test_win_needs_every_brick() {
        let mut state = GameState::new(GameConfig::default());
        state.bricks.get_mut(0, 0).unwrap().alive = false;
        state.score = 1;
        assert!(!state.check_win());
        assert_eq!(state.phase, GamePhase::Playing);

        state.score = 40;
        assert!(state.check_win());
        assert_eq!(state.phase, GamePhase::Won);
        assert_eq!(state.phase.banner(), Some("YOU WIN!"));
    }

    #[test]
    fn test_terminal_phases_do_not_flip() {
        let mut state = GameState::new(GameConfig::default());
        state.score = 40;
        state.check_win();
        state.balls.clear();
        assert!(!state.check_loss());
        assert_eq!(state.phase, GamePhase::Won);
    }

    #[test]
    fn test_multiball_without_balls_spawns_mid_field() {
        let mut state = GameState::new(GameConfig::default());
        state.balls.clear();
        state.activate_power_up(PowerUpKind::MultiBall);
        assert_eq!(state.balls.len(), 2);
        assert_eq!(state.balls[0].pos, Vec2::new(240.0, 160.0));
        assert_eq!(state.balls[1].pos, Vec2::new(240.0, 160.0));
    }

    #[test]
    fn test_snapshot_serializes() {
        let state = GameState::new(GameConfig::default());
        let json = serde_json::to_string(&state.snapshot()).unwrap();
        assert!(json.contains("\"phase\":\"Playing\""));
        assert!(json.contains("\"bricks\""));
    }
}
