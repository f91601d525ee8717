//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a filled axis-aligned rectangle (top-left origin)
pub fn rect(position: Vec2, size: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    let min = position;
    let max = position + size;

    vec![
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, max.y, color),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_closes() {
        let center = Vec2::new(10.0, 20.0);
        let vertices = circle(center, 5.0, [1.0; 4], 8);
        assert_eq!(vertices.len(), 24);

        // First edge starts at angle 0, last edge ends back there
        let first = Vec2::from(vertices[1].position);
        let last = Vec2::from(vertices[23].position);
        assert!((first - Vec2::new(15.0, 20.0)).length() < 1e-4);
        assert!((last - first).length() < 1e-4);
    }

    #[test]
    fn test_rect_corners() {
        let vertices = rect(Vec2::new(30.0, 30.0), Vec2::new(75.0, 20.0), [1.0; 4]);
        assert_eq!(vertices.len(), 6);
        assert_eq!(vertices[0].position, [30.0, 30.0]);
        assert_eq!(vertices[5].position, [105.0, 50.0]);
    }
}
