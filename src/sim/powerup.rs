//! Falling power-ups spawned from destroyed bricks

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::paddle::Paddle;
use crate::consts::*;

/// Power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUpKind {
    /// Wider paddle for a while
    Expand,
    /// Two extra balls
    MultiBall,
}

impl PowerUpKind {
    /// Letter drawn on the pickup
    pub fn label(&self) -> &'static str {
        match self {
            PowerUpKind::Expand => "W",
            PowerUpKind::MultiBall => "M",
        }
    }

    /// Fill color as a CSS hex string
    pub fn color(&self) -> &'static str {
        match self {
            PowerUpKind::Expand => "#FF00FF",
            PowerUpKind::MultiBall => "#00FFFF",
        }
    }
}

/// A falling pickup, positioned by its center
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerUp {
    pub kind: PowerUpKind,
    pub pos: Vec2,
}

impl PowerUp {
    pub fn new(kind: PowerUpKind, pos: Vec2) -> Self {
        Self { kind, pos }
    }

    fn caught_by(&self, paddle: &Paddle, playfield_height: f32) -> bool {
        self.pos.x > paddle.x
            && self.pos.x < paddle.x + paddle.width
            && self.pos.y + POWERUP_SIZE > paddle.top(playfield_height)
    }
}

/// All power-ups currently falling
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PowerUpSet {
    items: Vec<PowerUp>,
}

impl PowerUpSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Roll for a drop at `pos`; returns the kind if one spawned
    pub fn maybe_spawn<R: Rng + ?Sized>(&mut self, rng: &mut R, pos: Vec2) -> Option<PowerUpKind> {
        if !rng.random_bool(POWERUP_DROP_CHANCE) {
            return None;
        }
        let kind = if rng.random_bool(0.5) {
            PowerUpKind::Expand
        } else {
            PowerUpKind::MultiBall
        };
        self.items.push(PowerUp::new(kind, pos));
        Some(kind)
    }

    pub fn push(&mut self, power_up: PowerUp) {
        self.items.push(power_up);
    }

    /// Drop every power-up one step; returns the kinds the paddle caught
    ///
    /// Caught and missed power-ups are removed. Effects are left to the caller.
    pub fn advance(&mut self, paddle: &Paddle, playfield_height: f32) -> Vec<PowerUpKind> {
        let mut caught = Vec::new();
        self.items.retain_mut(|p| {
            p.pos.y += POWERUP_FALL_SPEED;
            if p.caught_by(paddle, playfield_height) {
                caught.push(p.kind);
                false
            } else {
                p.pos.y <= playfield_height
            }
        });
        caught
    }

    pub fn iter(&self) -> impl Iterator<Item = &PowerUp> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}
