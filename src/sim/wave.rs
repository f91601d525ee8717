//! Brick wave generation
//!
//! A wave is one full grid of bricks. Columns advance along x, rows along y,
//! and bricks are numbered column by column starting at zero.

use serde::{Deserialize, Serialize};

use super::entity::{Entity, EntityIds, EntityKind, shared};
use super::state::Brick;
use super::vector::Vector2;
use crate::consts::*;

/// Grid geometry for a wave
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrickLayout {
    pub columns: u32,
    pub rows: u32,
    pub brick_size: Vector2,
    /// Gap between neighbouring bricks on both axes
    pub padding: f32,
    /// Top-left corner of the first brick
    pub offset: Vector2,
}

impl Default for BrickLayout {
    fn default() -> Self {
        Self {
            columns: BRICK_COLUMNS,
            rows: BRICK_ROWS,
            brick_size: Vector2::new(BRICK_WIDTH, BRICK_HEIGHT),
            padding: BRICK_PADDING,
            offset: Vector2::new(BRICK_OFFSET_LEFT, BRICK_OFFSET_TOP),
        }
    }
}

impl BrickLayout {
    pub fn brick_count(&self) -> usize {
        (self.columns as usize).saturating_mul(self.rows as usize)
    }

    /// Top-left corner of the brick at `column`, `row`
    pub fn origin(&self, column: u32, row: u32) -> Vector2 {
        Vector2::new(
            self.offset.x + column as f32 * (self.brick_size.x + self.padding),
            self.offset.y + row as f32 * (self.brick_size.y + self.padding),
        )
    }
}

/// Lay out one wave of bricks, indexed `0..brick_count()`
pub fn generate_wave(layout: &BrickLayout, ids: &mut EntityIds) -> Vec<Entity> {
    let mut bricks = Vec::with_capacity(layout.brick_count());
    let mut index = 0u32;

    for column in 0..layout.columns {
        for row in 0..layout.rows {
            let brick = Brick::new(layout.brick_size, index);
            bricks.push(Entity::new(
                ids.next_id(),
                EntityKind::Brick(brick),
                Some(shared(layout.origin(column, row))),
            ));
            index += 1;
        }
    }

    bricks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_wave_is_fifteen_bricks() {
        let layout = BrickLayout::default();
        let mut ids = EntityIds::default();
        let bricks = generate_wave(&layout, &mut ids);

        assert_eq!(bricks.len(), 15);
        let indices: Vec<u32> = bricks
            .iter()
            .filter_map(|e| e.as_brick().map(|b| b.index))
            .collect();
        assert_eq!(indices, (0..15).collect::<Vec<_>>());
        assert!(
            bricks
                .iter()
                .all(|e| e.as_brick().is_some_and(|b| b.size == Vector2::new(75.0, 20.0)))
        );
    }

    #[test]
    fn test_grid_positions() {
        let layout = BrickLayout::default();
        let mut ids = EntityIds::default();
        let bricks = generate_wave(&layout, &mut ids);

        // Column-major: index 0..2 is the first column
        assert_eq!(bricks[0].position(), Vector2::new(30.0, 30.0));
        assert_eq!(bricks[1].position(), Vector2::new(30.0, 60.0));
        assert_eq!(bricks[2].position(), Vector2::new(30.0, 90.0));
        assert_eq!(bricks[3].position(), Vector2::new(115.0, 30.0));
        // Index 7 is column 2, row 1
        assert_eq!(bricks[7].position(), Vector2::new(200.0, 60.0));
        assert_eq!(bricks[14].position(), Vector2::new(370.0, 90.0));
    }

    #[test]
    fn test_indices_restart_each_wave_but_ids_do_not() {
        let layout = BrickLayout::default();
        let mut ids = EntityIds::default();
        let first = generate_wave(&layout, &mut ids);
        let second = generate_wave(&layout, &mut ids);

        assert_eq!(second[0].as_brick().map(|b| b.index), Some(0));
        assert_ne!(first[0].id(), second[0].id());
    }

    #[test]
    fn test_brick_count_saturates() {
        let layout = BrickLayout {
            columns: u32::MAX,
            rows: u32::MAX,
            ..BrickLayout::default()
        };
        assert!(layout.brick_count() >= u32::MAX as usize);
    }

    #[test]
    fn test_custom_layout() {
        let layout = BrickLayout {
            columns: 2,
            rows: 4,
            brick_size: Vector2::new(10.0, 5.0),
            padding: 1.0,
            offset: Vector2::ZERO,
        };
        let mut ids = EntityIds::default();
        let bricks = generate_wave(&layout, &mut ids);
        assert_eq!(bricks.len(), 8);
        assert_eq!(bricks[7].position(), Vector2::new(11.0, 18.0));
    }
}
