//! Collision predicates for axis-aligned geometry
//!
//! All tests here work on the ball's *center point* against rectangles and
//! bounds. Comparisons are strict or half-open exactly where noted; changing
//! them lets a ball tunnel through an edge in a single tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// An axis-aligned rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Strict containment: points on an edge are outside
    #[inline]
    pub fn contains_strict(&self, p: Vec2) -> bool {
        p.x > self.pos.x && p.x < self.right() && p.y > self.pos.y && p.y < self.bottom()
    }
}

/// Would the next x leave `[radius, width - radius]`?
#[inline]
pub fn crosses_side_wall(next_x: f32, width: f32, radius: f32) -> bool {
    next_x > width - radius || next_x < radius
}

/// Would the next y go above the top wall?
#[inline]
pub fn crosses_ceiling(next_y: f32, radius: f32) -> bool {
    next_y < radius
}

/// Is the next y inside the paddle's vertical band (open interval)?
#[inline]
pub fn in_paddle_band(next_y: f32, height: f32, paddle_height: f32, radius: f32) -> bool {
    next_y > height - paddle_height - radius && next_y < height
}

/// Is x over the paddle, half-open `[left, left + width)`?
#[inline]
pub fn over_paddle(x: f32, paddle_x: f32, paddle_width: f32) -> bool {
    x >= paddle_x && x < paddle_x + paddle_width
}

/// Has the ball fully passed the paddle plane?
#[inline]
pub fn past_paddle_plane(next_y: f32, height: f32, radius: f32) -> bool {
    next_y > height - radius
}

/// Velocity after bouncing off the paddle
///
/// The horizontal component comes from where the ball struck, in `[-1, 1)`
/// across the paddle. The vertical component always points up with a
/// magnitude of at least `MIN_BOUNCE_SPEED`.
pub fn paddle_deflection(ball_x: f32, vel: Vec2, paddle_x: f32, paddle_width: f32) -> Vec2 {
    let half = paddle_width / 2.0;
    let normalized_hit = (ball_x - (paddle_x + half)) / half;
    let mut dy = -vel.y.abs();
    if dy.abs() < MIN_BOUNCE_SPEED {
        dy = -MIN_BOUNCE_SPEED;
    }
    Vec2::new(normalized_hit * PADDLE_DEFLECT_SPEED, dy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_strict_edges() {
        let r = Rect::new(10.0, 10.0, 20.0, 10.0);
        assert!(r.contains_strict(Vec2::new(15.0, 15.0)));
        assert!(!r.contains_strict(Vec2::new(10.0, 15.0)));
        assert!(!r.contains_strict(Vec2::new(30.0, 15.0)));
        assert!(!r.contains_strict(Vec2::new(15.0, 20.0)));
        assert_eq!(r.center(), Vec2::new(20.0, 15.0));
    }

    #[test]
    fn test_side_walls() {
        assert!(!crosses_side_wall(6.0, 480.0, 6.0));
        assert!(crosses_side_wall(5.9, 480.0, 6.0));
        assert!(!crosses_side_wall(474.0, 480.0, 6.0));
        assert!(crosses_side_wall(474.1, 480.0, 6.0));
    }

    #[test]
    fn test_paddle_band_and_extent() {
        // height 320, paddle 10, radius 6 -> band is (304, 320)
        assert!(!in_paddle_band(304.0, 320.0, 10.0, 6.0));
        assert!(in_paddle_band(304.5, 320.0, 10.0, 6.0));
        assert!(!in_paddle_band(320.0, 320.0, 10.0, 6.0));

        assert!(over_paddle(100.0, 100.0, 45.0));
        assert!(!over_paddle(145.0, 100.0, 45.0));
    }

    #[test]
    fn test_deflection_center_and_edges() {
        let v = paddle_deflection(122.5, Vec2::new(4.0, 4.0), 100.0, 45.0);
        assert!(v.x.abs() < 1e-5);
        assert_eq!(v.y, -4.0);

        let v = paddle_deflection(100.0, Vec2::new(4.0, 4.0), 100.0, 45.0);
        assert!((v.x + PADDLE_DEFLECT_SPEED).abs() < 1e-5);
    }

    #[test]
    fn test_deflection_enforces_min_speed() {
        let v = paddle_deflection(110.0, Vec2::new(1.0, 0.5), 100.0, 45.0);
        assert_eq!(v.y, -MIN_BOUNCE_SPEED);
    }
}
