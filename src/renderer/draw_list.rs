//! Recording surface
//!
//! Keeps the commands issued since the last clear, so a finished frame can be
//! inspected or tessellated.

use super::shapes;
use super::surface::{Color, Surface};
use super::vertex::Vertex;
use crate::sim::Vector2;

/// One recorded fill
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    Rect {
        position: Vector2,
        size: Vector2,
        color: Color,
    },
    Circle {
        center: Vector2,
        radius: f32,
        color: Color,
    },
}

#[derive(Debug, Clone, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
    clears: u64,
}

impl DrawList {
    /// Commands issued since the last clear
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// How many times the surface has been cleared
    pub fn clears(&self) -> u64 {
        self.clears
    }

    /// Triangulate the current frame
    pub fn tessellate(&self, circle_segments: u32) -> Vec<Vertex> {
        let mut vertices = Vec::new();
        for command in &self.commands {
            match *command {
                DrawCommand::Rect {
                    position,
                    size,
                    color,
                } => vertices.extend(shapes::rect(position.into(), size.into(), color)),
                DrawCommand::Circle {
                    center,
                    radius,
                    color,
                } => vertices.extend(shapes::circle(center.into(), radius, color, circle_segments)),
            }
        }
        vertices
    }
}

impl Surface for DrawList {
    fn clear(&mut self) {
        self.commands.clear();
        self.clears += 1;
    }

    fn fill_rect(&mut self, position: Vector2, size: Vector2, color: Color) {
        self.commands.push(DrawCommand::Rect {
            position,
            size,
            color,
        });
    }

    fn fill_circle(&mut self, center: Vector2, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::colors;

    #[test]
    fn test_clear_drops_previous_frame() {
        let mut list = DrawList::default();
        list.fill_rect(Vector2::ZERO, Vector2::splat(1.0), colors::ENTITY);
        list.clear();
        list.fill_circle(Vector2::splat(4.0), 2.0, colors::ENTITY);
        assert_eq!(list.clears(), 1);
        assert_eq!(list.commands().len(), 1);
        assert!(matches!(list.commands()[0], DrawCommand::Circle { radius, .. } if radius == 2.0));
    }

    #[test]
    fn test_tessellate_counts() {
        let mut list = DrawList::default();
        list.fill_rect(Vector2::ZERO, Vector2::new(75.0, 10.0), colors::ENTITY);
        list.fill_circle(Vector2::new(50.0, 50.0), 10.0, colors::ENTITY);
        let vertices = list.tessellate(16);
        assert_eq!(vertices.len(), 6 + 16 * 3);
        assert_eq!(
            bytemuck::cast_slice::<Vertex, u8>(&vertices).len(),
            vertices.len() * std::mem::size_of::<Vertex>()
        );
    }
}
