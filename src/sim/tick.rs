//! Simulation tick
//!
//! Advances the game by one frame. Order matters: input, bricks, power-ups,
//! balls, then the loss check.

use super::ball::BallMotion;
use super::state::{GamePhase, GameState};
use crate::consts::*;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Left held
    pub left: bool,
    /// Right held
    pub right: bool,
    /// Absolute paddle center (from pointer/touch); overrides held directions
    pub target_x: Option<f32>,
    /// Demo mode - the core steers the paddle
    pub autopilot: bool,
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    if state.phase.is_over() {
        return;
    }

    state.time_ticks += 1;
    if state.paddle.expire(state.time_ticks) {
        log::debug!("Expand wore off at tick {}", state.time_ticks);
    }
    state.shake_ticks = state.shake_ticks.saturating_sub(1);

    // Paddle
    let width = state.width();
    let height = state.height();
    let target_x = if input.autopilot {
        autopilot_target(state)
    } else {
        input.target_x
    };
    match target_x {
        Some(x) => state.paddle.move_to(x, width),
        None => state.paddle.apply_input(input.left, input.right, width),
    }

    // Bricks
    for i in 0..state.balls.len() {
        let hits = state.bricks.check_collision(state.balls[i].pos);
        for center in hits {
            state.balls[i].bounce_vertical();
            state.score += 1;
            if let Some(kind) = state.power_ups.maybe_spawn(&mut state.rng, center) {
                log::debug!("Spawned {:?} at ({:.1}, {:.1})", kind, center.x, center.y);
            }
            if state.check_win() {
                return;
            }
        }
    }

    // Power-ups
    for kind in state.power_ups.advance(&state.paddle, height) {
        state.activate_power_up(kind);
    }

    // Balls
    let paddle = &state.paddle;
    let mut shake = false;
    state.balls.retain_mut(|ball| match ball.advance(paddle, width, height) {
        BallMotion::Moved => true,
        BallMotion::PaddleHit => {
            shake = true;
            true
        }
        BallMotion::Lost => {
            log::trace!("Ball lost at ({:.1}, {:.1})", ball.pos.x, ball.pos.y);
            false
        }
    });
    if shake {
        state.shake_ticks = SHAKE_TICKS;
    }

    state.check_loss();
}

/// Where the autopilot wants the paddle center this tick
///
/// Tracks the lowest ball heading down. When every ball is safe (rising, or
/// still high up) it goes for the nearest falling power-up instead.
fn autopilot_target(state: &GameState) -> Option<f32> {
    let height = state.height();
    let danger_line = height * 0.5;

    let falling = state
        .balls
        .iter()
        .filter(|b| b.vel.y > 0.0)
        .max_by(|a, b| {
            a.pos
                .y
                .partial_cmp(&b.pos.y)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

    let all_balls_safe = falling.is_none_or(|b| b.pos.y < danger_line);

    if all_balls_safe {
        let paddle_top = state.paddle.top(height);
        let nearest_power_up = state
            .power_ups
            .iter()
            .filter(|p| p.pos.y < paddle_top)
            .max_by(|a, b| {
                a.pos
                    .y
                    .partial_cmp(&b.pos.y)
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
        if let Some(power_up) = nearest_power_up {
            return Some(power_up.pos.x);
        }
    }

    // Lead the ball slightly, with an offset so bounces vary
    let ball = falling.or_else(|| state.balls.first())?;
    let lead = ball.pos.x + ball.vel.x * 2.0;
    let offset = (state.time_ticks as f32 * 0.05).sin() * state.paddle.width * 0.3;
    Some(lead + offset)
}
