//! Two-component vector for positions, velocities and sizes

use std::ops::Add;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A point or displacement in screen space (pixels, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl Vector2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Square vector, both components set to `v`
    pub const fn splat(v: f32) -> Self {
        Self { x: v, y: v }
    }

    /// Build from optional components with falsy defaults.
    ///
    /// A missing or falsy `x` resolves to 0. A missing or falsy `y` copies the
    /// resolved `x`. Zero and NaN count as falsy, so `from_parts(Some(3.0), Some(0.0))`
    /// is `(3, 3)`, not `(3, 0)`.
    pub fn from_parts(x: Option<f32>, y: Option<f32>) -> Self {
        let x = x.filter(|&v| is_truthy(v)).unwrap_or(0.0);
        let y = y.filter(|&v| is_truthy(v)).unwrap_or(x);
        Self { x, y }
    }
}

#[inline]
fn is_truthy(v: f32) -> bool {
    v != 0.0 && !v.is_nan()
}

impl Add for Vector2 {
    type Output = Vector2;

    #[inline]
    fn add(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x + other.x, self.y + other.y)
    }
}

impl From<Vec2> for Vector2 {
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector2> for Vec2 {
    fn from(v: Vector2) -> Self {
        Vec2::new(v.x, v.y)
    }
}
