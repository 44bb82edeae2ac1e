//! Ball bodies and their per-tick motion

use std::collections::VecDeque;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{
    crosses_ceiling, crosses_side_wall, in_paddle_band, over_paddle, paddle_deflection,
    past_paddle_plane,
};
use super::paddle::Paddle;
use crate::consts::*;

/// Outcome of advancing a ball by one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallMotion {
    /// Moved freely (walls may have reflected it)
    Moved,
    /// Bounced off the paddle
    PaddleHit,
    /// Fell past the paddle plane; the ball should be removed
    Lost,
}

/// A ball entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Recent positions, oldest first
    pub trail: VecDeque<Vec2>,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            trail: VecDeque::with_capacity(TRAIL_LENGTH + 1),
        }
    }

    /// The ball every game starts with
    pub fn starting(playfield_width: f32, playfield_height: f32) -> Self {
        Self::new(
            Vec2::new(playfield_width / 2.0, playfield_height - BALL_START_OFFSET),
            Vec2::new(BALL_INITIAL_SPEED, -BALL_INITIAL_SPEED),
        )
    }

    /// Record current position to trail, evicting the oldest past capacity
    pub fn record_trail(&mut self) {
        self.trail.push_back(self.pos);
        while self.trail.len() > TRAIL_LENGTH {
            self.trail.pop_front();
        }
    }

    /// Bounce off a brick
    pub fn bounce_vertical(&mut self) {
        self.vel.y = -self.vel.y;
    }

    /// Advance one tick: trail, walls, paddle, loss check, then move
    pub fn advance(&mut self, paddle: &Paddle, width: f32, height: f32) -> BallMotion {
        self.record_trail();

        let r = BALL_RADIUS;
        let mut motion = BallMotion::Moved;

        if crosses_side_wall(self.pos.x + self.vel.x, width, r) {
            self.vel.x = -self.vel.x;
        }

        let next_y = self.pos.y + self.vel.y;
        if crosses_ceiling(next_y, r) {
            self.vel.y = -self.vel.y;
        } else if in_paddle_band(next_y, height, paddle.height, r)
            && over_paddle(self.pos.x, paddle.x, paddle.width)
        {
            self.vel = paddle_deflection(self.pos.x, self.vel, paddle.x, paddle.width);
            motion = BallMotion::PaddleHit;
        }

        // Uses the reflected velocity, so a caught ball is never lost
        if past_paddle_plane(self.pos.y + self.vel.y, height, r) {
            return BallMotion::Lost;
        }

        self.pos += self.vel;
        motion
    }

    /// Trail points with their fade factor, oldest (faintest) first
    pub fn trail_fade(&self) -> impl Iterator<Item = (Vec2, f32)> + '_ {
        let len = self.trail.len() as f32;
        self.trail
            .iter()
            .enumerate()
            .map(move |(i, &pos)| (pos, (i as f32 + 1.0) / len))
    }
}
