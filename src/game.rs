//! Presentation-facing game handle
//!
//! Holds the simulation state plus the input the host has set since the last
//! tick. Hosts call `set_input`/`set_paddle_target_x` from their event
//! handlers and `tick` once per frame.

use crate::config::GameConfig;
use crate::sim::{
    Ball, BrickGrid, GamePhase, GameState, Paddle, PowerUpSet, Snapshot, TickInput, tick,
};

/// Game instance holding all state
#[derive(Debug, Clone)]
pub struct Game {
    state: GameState,
    input: TickInput,
}

impl Game {
    pub fn new(config: GameConfig) -> Self {
        log::info!(
            "Game initialized: {}x{} playfield, seed {}",
            config.playfield_width,
            config.playfield_height,
            config.seed
        );
        Self {
            state: GameState::new(config),
            input: TickInput::default(),
        }
    }

    /// Advance one step, consuming any one-shot paddle target
    pub fn tick(&mut self) {
        tick(&mut self.state, &self.input);
        self.input.target_x = None;
    }

    /// Start a fresh game; held keys and autopilot stay as they are
    pub fn reset(&mut self) {
        self.state.reset();
        self.input.target_x = None;
    }

    /// Held-direction flags, read by every tick until changed
    pub fn set_input(&mut self, left: bool, right: bool) {
        self.input.left = left;
        self.input.right = right;
    }

    /// Absolute paddle center for the next tick only
    pub fn set_paddle_target_x(&mut self, x: f32) {
        self.input.target_x = Some(x);
    }

    /// Paddle sprite height / width, once the host has loaded it
    pub fn set_paddle_aspect_ratio(&mut self, aspect_ratio: f32) {
        self.state.paddle.set_aspect_ratio(aspect_ratio);
        log::debug!("Paddle aspect ratio set to {}", self.state.paddle.aspect_ratio);
    }

    pub fn set_autopilot(&mut self, enabled: bool) {
        self.input.autopilot = enabled;
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct access for hosts and tests that stage scenarios
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn paddle(&self) -> &Paddle {
        &self.state.paddle
    }

    pub fn balls(&self) -> &[Ball] {
        &self.state.balls
    }

    pub fn bricks(&self) -> &BrickGrid {
        &self.state.bricks
    }

    pub fn power_ups(&self) -> &PowerUpSet {
        &self.state.power_ups
    }

    pub fn shake_ticks(&self) -> u32 {
        self.state.shake_ticks
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    /// Tick until the game ends or `max_ticks` pass; returns ticks run
    pub fn run(&mut self, max_ticks: u64) -> u64 {
        let mut ticks = 0;
        while ticks < max_ticks && !self.state.phase.is_over() {
            self.tick();
            ticks += 1;
        }
        ticks
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
