use crate::constants::FLOCK_SIZE;
use crate::core::params::BirdParams;
use glam::Vec2;
use rand::prelude::*;
use smallvec::SmallVec;
use std::f32::consts::TAU;

/// A bird crossing the sea from left to right.
///
/// `depth` fixes the scale and speed for the current traversal; all three are
/// resampled together when the bird re-enters from the left.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bird {
    pub x: f32,
    pub y: f32,
    pub depth: f32,
    pub scale: f32,
    pub speed: f32,
    pub wing_phase: f32,
    pub flap_rate: f32,
}

/// Where and how to draw a bird this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BirdPose {
    pub x: f32,
    pub y: f32,
    pub scale: f32,
    /// Vertical offset of the wing control point, already scaled.
    pub wing: f32,
}

#[inline]
pub fn scale_for_depth(params: &BirdParams, depth: f32) -> f32 {
    params.scale_base + depth * depth * params.scale_span
}

#[inline]
pub fn speed_for_depth(params: &BirdParams, depth: f32) -> f32 {
    params.speed_base + depth * params.speed_span
}

/// Fixed-size flock; birds are reborn in place, never added or removed.
pub struct Flock {
    pub birds: [Bird; FLOCK_SIZE],
    rng: StdRng,
}

impl Flock {
    /// Scatter a new flock over `surface`; the same seed gives the same flock.
    pub fn new(params: &BirdParams, seed: u64, surface: Vec2) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let birds = std::array::from_fn(|_| {
            let depth: f32 = rng.gen();
            Bird {
                x: rng.gen::<f32>() * surface.x,
                y: sample_band(&mut rng, params.spawn_band, surface.y),
                depth,
                scale: scale_for_depth(params, depth),
                speed: speed_for_depth(params, depth),
                wing_phase: rng.gen::<f32>() * TAU,
                flap_rate: params.flap_rate_min + rng.gen::<f32>() * params.flap_rate_span,
            }
        });
        Self { birds, rng }
    }

    /// Advance every bird one frame, rebirthing those past the right edge.
    pub fn step(&mut self, params: &BirdParams, surface: Vec2) {
        let exit_x = surface.x + params.edge_margin;
        for i in 0..FLOCK_SIZE {
            self.birds[i].x += self.birds[i].speed;
            if self.birds[i].x > exit_x {
                self.rebirth(params, i, surface);
            }
        }
    }

    fn rebirth(&mut self, params: &BirdParams, index: usize, surface: Vec2) {
        let depth: f32 = self.rng.gen();
        let y = sample_band(&mut self.rng, params.rebirth_band, surface.y);
        let bird = &mut self.birds[index];
        bird.x = -params.edge_margin;
        bird.y = y;
        bird.depth = depth;
        bird.scale = scale_for_depth(params, depth);
        bird.speed = speed_for_depth(params, depth);
        log::debug!(
            "[birds] rebirth {} depth={:.2} scale={:.2} speed={:.2}",
            index,
            depth,
            bird.scale,
            bird.speed
        );
    }

    /// Indices ordered far-to-near (ascending scale) for painter's-order drawing.
    pub fn draw_order(&self) -> SmallVec<[usize; FLOCK_SIZE]> {
        let mut order: SmallVec<[usize; FLOCK_SIZE]> = (0..FLOCK_SIZE).collect();
        order.sort_by(|&a, &b| self.birds[a].scale.total_cmp(&self.birds[b].scale));
        order
    }

    pub fn pose(&self, params: &BirdParams, index: usize, time: f32) -> BirdPose {
        let bird = &self.birds[index];
        let bob = (time * params.bob_time_rate + bird.x * params.bob_space_rate).sin()
            * params.bob_amplitude;
        let wing = (time * bird.flap_rate + bird.wing_phase).sin()
            * (params.flap_amplitude * bird.scale);
        BirdPose {
            x: bird.x,
            y: bird.y + bob,
            scale: bird.scale,
            wing,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.birds.len()
    }
}

#[inline]
fn sample_band(rng: &mut StdRng, band: [f32; 2], height: f32) -> f32 {
    (band[0] + rng.gen::<f32>() * (band[1] - band[0])) * height
}
