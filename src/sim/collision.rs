//! Point-in-rectangle collision test
//!
//! Moving entities are treated as points (their position), never as shapes.
//! A ball grazing a rectangle with its edge but not its centre does not collide.

use super::vector::Vector2;

/// True iff `point` lies strictly inside the rectangle at `target_pos` with `target_size`.
///
/// Both axes use open intervals: a point exactly on an edge is outside.
#[inline]
pub fn collides(point: Vector2, target_pos: Vector2, target_size: Vector2) -> bool {
    point.x > target_pos.x
        && point.x < target_pos.x + target_size.x
        && point.y > target_pos.y
        && point.y < target_pos.y + target_size.y
}
