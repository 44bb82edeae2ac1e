//! Invariants that must hold on every tick, whatever the input

use brickfall::consts::*;
use brickfall::sim::{Ball, GamePhase, GameState, Paddle, TickInput, tick};
use brickfall::GameConfig;
use glam::Vec2;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Action {
    Hold { left: bool, right: bool },
    Target(f32),
    Autopilot,
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        (any::<bool>(), any::<bool>()).prop_map(|(left, right)| Action::Hold { left, right }),
        prop_oneof![
            -100.0f32..600.0,
            Just(f32::NAN),
            Just(f32::INFINITY),
            Just(f32::NEG_INFINITY),
        ]
        .prop_map(Action::Target),
        Just(Action::Autopilot),
    ]
}

fn to_input(action: &Action) -> TickInput {
    match *action {
        Action::Hold { left, right } => TickInput {
            left,
            right,
            ..Default::default()
        },
        Action::Target(x) => TickInput {
            target_x: Some(x),
            ..Default::default()
        },
        Action::Autopilot => TickInput {
            autopilot: true,
            ..Default::default()
        },
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn invariants_hold_every_tick(
        seed in any::<u64>(),
        actions in prop::collection::vec(action(), 1..40),
        repeat in 1usize..60,
    ) {
        let mut state = GameState::new(GameConfig::with_seed(seed));
        let base = PADDLE_BASE_WIDTH;
        let expanded = PADDLE_BASE_WIDTH * PADDLE_EXPAND_FACTOR;

        for action in &actions {
            let input = to_input(action);
            for _ in 0..repeat {
                let was_over = state.phase.is_over();
                let phase_before = state.phase;
                tick(&mut state, &input);

                prop_assert_eq!(state.score as usize, state.bricks.destroyed_count());
                prop_assert!(state.paddle.width == base || state.paddle.width == expanded);
                prop_assert!(state.paddle.x.is_finite());
                for ball in &state.balls {
                    prop_assert!(ball.trail.len() <= TRAIL_LENGTH);
                }
                match state.phase {
                    GamePhase::Won => prop_assert_eq!(state.score, state.bricks.total() as u32),
                    GamePhase::Lost => prop_assert!(state.balls.is_empty()),
                    GamePhase::Playing => prop_assert!(!state.balls.is_empty()),
                }
                if was_over {
                    prop_assert_eq!(state.phase, phase_before);
                }
            }
        }
    }

    #[test]
    fn trail_keeps_newest_positions_in_order(steps in 1usize..40) {
        let paddle = Paddle::new(PLAYFIELD_WIDTH, DEFAULT_PADDLE_ASPECT);
        let mut ball = Ball::new(Vec2::new(240.0, 200.0), Vec2::new(1.0, 0.0));
        let mut seen = Vec::new();
        for _ in 0..steps {
            seen.push(ball.pos);
            ball.advance(&paddle, PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT);
        }
        let expected: Vec<Vec2> = seen.iter().rev().take(TRAIL_LENGTH).rev().copied().collect();
        let actual: Vec<Vec2> = ball.trail.iter().copied().collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn paddle_target_stays_in_bounds(x in prop::num::f32::ANY) {
        let mut paddle = Paddle::new(PLAYFIELD_WIDTH, DEFAULT_PADDLE_ASPECT);
        paddle.move_to(x, PLAYFIELD_WIDTH);
        prop_assert!(paddle.x >= 0.0);
        prop_assert!(paddle.x <= PLAYFIELD_WIDTH - paddle.width);
    }

    #[test]
    fn paddle_bounce_always_goes_up(
        offset in 0.0f32..44.9,
        dx in -6.0f32..6.0,
        dy in 0.1f32..6.0,
    ) {
        let paddle = Paddle::new(PLAYFIELD_WIDTH, DEFAULT_PADDLE_ASPECT);
        let x = paddle.x + offset;
        let y = PLAYFIELD_HEIGHT - paddle.height - BALL_RADIUS + 0.05 - dy;
        let mut ball = Ball::new(Vec2::new(x, y), Vec2::new(dx, dy));
        ball.advance(&paddle, PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT);
        prop_assert!(ball.vel.y <= -MIN_BOUNCE_SPEED);
        prop_assert!(ball.vel.x.abs() <= PADDLE_DEFLECT_SPEED + 1e-4);
    }
}
