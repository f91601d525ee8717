//! Browser canvas surface

use std::f64::consts::TAU;

use web_sys::CanvasRenderingContext2d;

use super::surface::{Color, Surface, css_color};
use crate::sim::Vector2;

/// Draws onto a `CanvasRenderingContext2d`
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d, width: u32, height: u32) -> Self {
        Self {
            ctx,
            width: width as f64,
            height: height as f64,
        }
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self) {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
    }

    fn fill_rect(&mut self, position: Vector2, size: Vector2, color: Color) {
        self.ctx.begin_path();
        self.ctx.rect(
            position.x as f64,
            position.y as f64,
            size.x as f64,
            size.y as f64,
        );
        self.ctx.set_fill_style_str(&css_color(color));
        self.ctx.fill();
        self.ctx.close_path();
    }

    fn fill_circle(&mut self, center: Vector2, radius: f32, color: Color) {
        self.ctx.begin_path();
        if let Err(e) = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU)
        {
            log::warn!("arc failed: {:?}", e);
        }
        self.ctx.set_fill_style_str(&css_color(color));
        self.ctx.fill();
        self.ctx.close_path();
    }
}
