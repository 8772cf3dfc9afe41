use crate::core::{BirdPose, Painter, WavePoint};
use glam::Vec2;
use std::f64::consts::TAU;
use web_sys as web;

/// `Painter` over a 2D canvas context.
pub struct CanvasPainter {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasPainter {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl Painter for CanvasPainter {
    fn clear(&mut self, rgb: [u8; 3], surface: Vec2) {
        self.ctx.set_fill_style_str(&css_rgb(rgb));
        self.ctx.fill_rect(0.0, 0.0, surface.x as f64, surface.y as f64);
    }

    fn dot(&mut self, p: &WavePoint) {
        self.ctx.begin_path();
        _ = self.ctx.arc(p.x as f64, p.y as f64, p.radius as f64, 0.0, TAU);
        self.ctx.set_fill_style_str(&format!(
            "rgba({}, {}, {}, {:.3})",
            p.rgb[0], p.rgb[1], p.rgb[2], p.alpha
        ));
        self.ctx.fill();
    }

    fn bird(&mut self, pose: &BirdPose, rgb: [u8; 3]) {
        let ctx = &self.ctx;
        ctx.save();
        _ = ctx.translate(pose.x as f64, pose.y as f64);
        _ = ctx.scale(pose.scale as f64, pose.scale as f64);
        // wings as one quadratic sweep, body as a notch back to the tail
        ctx.begin_path();
        ctx.move_to(-6.0, -2.0);
        ctx.quadratic_curve_to(0.0, 8.0 + pose.wing as f64, 6.0, -2.0);
        ctx.line_to(0.0, 3.0);
        ctx.line_to(-6.0, -2.0);
        ctx.set_fill_style_str(&css_rgb(rgb));
        ctx.fill();
        ctx.restore();
    }
}

#[inline]
fn css_rgb(rgb: [u8; 3]) -> String {
    format!("rgb({}, {}, {})", rgb[0], rgb[1], rgb[2])
}
