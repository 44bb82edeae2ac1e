//! Brick grid layout and hit detection

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::brick_width;
use crate::consts::*;

/// A single brick cell
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brick {
    pub column: usize,
    pub row: usize,
    pub rect: Rect,
    pub alive: bool,
}

/// The fixed grid of bricks, stored column-major
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrickGrid {
    bricks: Vec<Brick>,
}

impl BrickGrid {
    /// Lay out a full grid for a playfield of the given width
    pub fn new(playfield_width: f32) -> Self {
        let width = brick_width(playfield_width);
        let mut bricks = Vec::with_capacity(BRICK_COLUMNS * BRICK_ROWS);
        for column in 0..BRICK_COLUMNS {
            for row in 0..BRICK_ROWS {
                let x = column as f32 * (width + BRICK_PADDING) + BRICK_OFFSET_LEFT;
                let y = row as f32 * (BRICK_HEIGHT + BRICK_PADDING) + BRICK_OFFSET_TOP;
                bricks.push(Brick {
                    column,
                    row,
                    rect: Rect::new(x, y, width, BRICK_HEIGHT),
                    alive: true,
                });
            }
        }
        Self { bricks }
    }

    /// Mark every brick alive again
    pub fn reset(&mut self) {
        for brick in &mut self.bricks {
            brick.alive = true;
        }
    }

    /// Destroy every alive brick containing `point`
    ///
    /// Scans column by column, then row by row, without stopping at the first
    /// hit. Returns the centers of the destroyed bricks in scan order.
    pub fn check_collision(&mut self, point: Vec2) -> Vec<Vec2> {
        let mut hits = Vec::new();
        for brick in self.bricks.iter_mut().filter(|b| b.alive) {
            if brick.rect.contains_strict(point) {
                brick.alive = false;
                hits.push(brick.rect.center());
            }
        }
        hits
    }

    pub fn get(&self, column: usize, row: usize) -> Option<&Brick> {
        if column >= BRICK_COLUMNS || row >= BRICK_ROWS {
            return None;
        }
        self.bricks.get(column * BRICK_ROWS + row)
    }

    pub fn get_mut(&mut self, column: usize, row: usize) -> Option<&mut Brick> {
        if column >= BRICK_COLUMNS || row >= BRICK_ROWS {
            return None;
        }
        self.bricks.get_mut(column * BRICK_ROWS + row)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Brick> {
        self.bricks.iter()
    }

    pub fn total(&self) -> usize {
        self.bricks.len()
    }

    pub fn alive_count(&self) -> usize {
        self.bricks.iter().filter(|b| b.alive).count()
    }

    pub fn destroyed_count(&self) -> usize {
        self.total() - self.alive_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout() {
        let grid = BrickGrid::new(480.0);
        assert_eq!(grid.total(), 40);

        let w = (480.0 - 60.0 - 35.0) / 8.0;
        let first = grid.get(0, 0).unwrap();
        assert_eq!(first.rect.pos, Vec2::new(30.0, 25.0));
        assert!((first.rect.size.x - w).abs() < 1e-4);

        let last = grid.get(7, 4).unwrap();
        assert!((last.rect.pos.x - (7.0 * (w + 5.0) + 30.0)).abs() < 1e-3);
        assert_eq!(last.rect.pos.y, 4.0 * 20.0 + 25.0);
        assert!(grid.get(8, 0).is_none());
    }

    #[test]
    fn test_hit_destroys_once() {
        let mut grid = BrickGrid::new(480.0);
        let center = grid.get(2, 1).unwrap().rect.center();

        let hits = grid.check_collision(center);
        assert_eq!(hits, vec![center]);
        assert!(!grid.get(2, 1).unwrap().alive);
        assert_eq!(grid.destroyed_count(), 1);

        // Dead bricks are ignored
        assert!(grid.check_collision(center).is_empty());
    }

    #[test]
    fn test_gap_between_bricks_misses() {
        let mut grid = BrickGrid::new(480.0);
        let brick = grid.get(0, 0).unwrap().rect;
        // In the padding between row 0 and row 1
        let point = Vec2::new(brick.center().x, brick.bottom() + 2.5);
        assert!(grid.check_collision(point).is_empty());
        assert_eq!(grid.alive_count(), 40);
    }

    #[test]
    fn test_reset_revives() {
        let mut grid = BrickGrid::new(480.0);
        for column in 0..BRICK_COLUMNS {
            grid.get_mut(column, 0).unwrap().alive = false;
        }
        assert_eq!(grid.alive_count(), 32);
        grid.reset();
        assert_eq!(grid.alive_count(), 40);
    }
}
