//! The player's paddle

use serde::{Deserialize, Serialize};

use crate::clamp_finite;
use crate::consts::*;

/// The player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    /// Left edge
    pub x: f32,
    /// Either `PADDLE_BASE_WIDTH` or `PADDLE_BASE_WIDTH * PADDLE_EXPAND_FACTOR`
    pub width: f32,
    /// `width * aspect_ratio`
    pub height: f32,
    /// Sprite height / width
    pub aspect_ratio: f32,
    /// Tick at which the expand effect ends
    pub expand_deadline: Option<u64>,
}

impl Paddle {
    /// A base-width paddle centered in a playfield of the given width
    pub fn new(playfield_width: f32, aspect_ratio: f32) -> Self {
        let aspect_ratio = sanitize_aspect(aspect_ratio);
        Self {
            x: (playfield_width - PADDLE_BASE_WIDTH) / 2.0,
            width: PADDLE_BASE_WIDTH,
            height: PADDLE_BASE_WIDTH * aspect_ratio,
            aspect_ratio,
            expand_deadline: None,
        }
    }

    /// Top edge of the paddle
    pub fn top(&self, playfield_height: f32) -> f32 {
        playfield_height - self.height
    }

    pub fn is_expanded(&self) -> bool {
        self.expand_deadline.is_some()
    }

    /// Held-direction movement; right wins when both are held
    pub fn apply_input(&mut self, left: bool, right: bool, playfield_width: f32) {
        if right && self.x < playfield_width - self.width {
            self.x += PADDLE_SPEED;
        } else if left && self.x > 0.0 {
            self.x -= PADDLE_SPEED;
        }
    }

    /// Center the paddle on an absolute x (pointer/touch)
    pub fn move_to(&mut self, target_x: f32, playfield_width: f32) {
        let center = self.x + self.width / 2.0;
        let target = clamp_finite(target_x, 0.0, playfield_width, center);
        self.x = (target - self.width / 2.0).clamp(0.0, (playfield_width - self.width).max(0.0));
    }

    /// Widen the paddle and (re)start the expand deadline from `now`
    pub fn activate_expand(&mut self, now: u64) {
        self.set_width(PADDLE_BASE_WIDTH * PADDLE_EXPAND_FACTOR);
        self.expand_deadline = Some(now + EXPAND_DURATION_TICKS);
    }

    /// Revert to base width once the deadline has passed; true if it did
    pub fn expire(&mut self, now: u64) -> bool {
        match self.expand_deadline {
            Some(deadline) if now >= deadline => {
                self.expand_deadline = None;
                self.set_width(PADDLE_BASE_WIDTH);
                true
            }
            _ => false,
        }
    }

    /// Host-supplied sprite ratio; bad values fall back to the default
    pub fn set_aspect_ratio(&mut self, aspect_ratio: f32) {
        self.aspect_ratio = sanitize_aspect(aspect_ratio);
        self.height = self.width * self.aspect_ratio;
    }

    fn set_width(&mut self, width: f32) {
        self.width = width;
        self.height = width * self.aspect_ratio;
    }
}

fn sanitize_aspect(aspect_ratio: f32) -> f32 {
    if aspect_ratio.is_finite() && aspect_ratio > 0.0 {
        aspect_ratio
    } else {
        DEFAULT_PADDLE_ASPECT
    }
}
