//! Drawing surface abstraction

use crate::sim::Vector2;

/// RGBA, each channel in 0..=1
pub type Color = [f32; 4];

/// A 2D drawing target with solid fills
pub trait Surface {
    /// Wipe the whole surface
    fn clear(&mut self);

    /// Fill the axis-aligned rectangle with top-left `position`
    fn fill_rect(&mut self, position: Vector2, size: Vector2, color: Color);

    /// Fill a full circle (0..2π) around `center`
    fn fill_circle(&mut self, center: Vector2, radius: f32, color: Color);
}

/// CSS form of a colour: `#rrggbb` when opaque, `rgba(...)` otherwise
pub fn css_color(color: Color) -> String {
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    let [r, g, b, a] = color;
    if a >= 1.0 {
        format!("#{:02x}{:02x}{:02x}", channel(r), channel(g), channel(b))
    } else {
        format!(
            "rgba({}, {}, {}, {})",
            channel(r),
            channel(g),
            channel(b),
            a.max(0.0)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::colors;

    #[test]
    fn test_entity_color_matches_css() {
        assert_eq!(css_color(colors::ENTITY), "#0095dd");
    }

    #[test]
    fn test_translucent_color() {
        assert_eq!(css_color([1.0, 0.0, 0.0, 0.5]), "rgba(255, 0, 0, 0.5)");
    }
}
