use crate::core::birds::{BirdPose, Flock};
use crate::core::params::SceneParams;
use crate::core::pointer::PointerState;
use crate::core::waves::{self, WavePoint};
use glam::Vec2;

/// Drawing backend for one frame of the sea field.
pub trait Painter {
    fn clear(&mut self, rgb: [u8; 3], surface: Vec2);
    fn dot(&mut self, point: &WavePoint);
    fn bird(&mut self, pose: &BirdPose, rgb: [u8; 3]);
}

/// Simulation state owned by the frame loop.
///
/// `time` advances by a fixed step per rendered frame, so a paused tab pauses
/// the simulation and frame N is reproducible from the frame count alone.
pub struct SeaScene {
    pub params: SceneParams,
    pub flock: Flock,
    pub time: f32,
    surface: Vec2,
}

impl SeaScene {
    pub fn new(params: SceneParams, flock: Flock, width: u32, height: u32) -> Self {
        Self {
            params,
            flock,
            time: 0.0,
            surface: Vec2::new(width as f32, height as f32),
        }
    }

    #[inline]
    pub fn surface(&self) -> Vec2 {
        self.surface
    }

    /// Track a new backing size; time and birds carry on untouched.
    ///
    /// Returns `false` when the size is unchanged, which several resize
    /// sources report for the same layout change.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        let surface = Vec2::new(width as f32, height as f32);
        if surface == self.surface {
            return false;
        }
        self.surface = surface;
        true
    }

    pub fn render_frame(&mut self, pointer: &PointerState, painter: &mut impl Painter) {
        let surface = self.surface;
        painter.clear(self.params.background, surface);

        waves::for_each_point(&self.params.wave, self.time, surface, pointer, |p| {
            painter.dot(p)
        });

        self.flock.step(&self.params.birds, surface);
        for i in self.flock.draw_order() {
            let pose = self.flock.pose(&self.params.birds, i, self.time);
            painter.bird(&pose, self.params.birds.color);
        }

        self.time += self.params.time_step;
    }
}

/// Backing-store size for a container of `css_w` x `css_h` CSS pixels.
#[inline]
pub fn backing_size(css_w: f64, css_h: f64, dpr: f64) -> (u32, u32) {
    let dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
    let w = (css_w * dpr).floor().max(1.0) as u32;
    let h = (css_h * dpr).floor().max(1.0) as u32;
    (w, h)
}
