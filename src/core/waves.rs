//! Perspective wave grid.
//!
//! Every frame recomputes the whole grid from the simulation time and the
//! pointer position; nothing is stored between frames. Column 0 is the near
//! (left) edge and the last column approaches the horizon on the right.

use crate::core::params::WaveParams;
use crate::core::pointer::PointerState;
use glam::Vec2;

/// One visible grid cell for the current frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WavePoint {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub rgb: [u8; 3],
    pub alpha: f32,
}

/// Compute the cell at (`row`, `col`), or `None` when it is too small to draw.
///
/// `surface` is the backing size in pixels. The result depends only on the
/// arguments.
pub fn wave_point(
    params: &WaveParams,
    row: usize,
    col: usize,
    time: f32,
    surface: Vec2,
    pointer: &PointerState,
) -> Option<WavePoint> {
    let norm_x = col as f32 / params.cols.max(1) as f32;
    let norm_y = row as f32 / params.rows.max(1) as f32;
    let near = (1.0 - norm_x).max(0.0);

    let radius = params.base_radius * near * near;
    if radius <= params.min_visible_radius {
        return None;
    }

    let (width, height) = (surface.x, surface.y);
    let x = norm_x.powf(params.perspective_exponent) * width;

    let phase = time * params.wave_speed;
    let swell = (norm_x * params.swell_frequency + phase).sin() * (height * params.swell_amplitude);
    let ripple = (norm_y * params.ripple_row_frequency
        + norm_x * params.ripple_col_frequency
        + phase * params.ripple_time_scale)
        .cos()
        * (height * params.ripple_amplitude);

    let damp = near.powf(params.dampening_exponent);
    let spread = (norm_y - 0.5) * height * params.vertical_spread;
    let mut y = height * 0.5 + spread * damp + (swell + ripple) * damp;

    let distance = pointer.distance_to(Vec2::new(x, y));
    y += wake_displacement(params, distance, time, pointer);

    Some(WavePoint {
        x,
        y,
        radius,
        rgb: lerp_rgb(params.near_color, params.far_color, norm_x),
        alpha: (1.0 - norm_x.powf(params.alpha_exponent)).clamp(0.0, 1.0),
    })
}

/// Vertical wake offset for a cell `distance` pixels from the pointer.
///
/// Zero outside the interaction radius and whenever the pointer is off-surface.
#[inline]
pub fn wake_displacement(
    params: &WaveParams,
    distance: f32,
    time: f32,
    pointer: &PointerState,
) -> f32 {
    if pointer.is_off_surface() || !(distance < params.interaction_radius) {
        return 0.0;
    }
    let force = 1.0 - distance / params.interaction_radius;
    (distance * params.wake_spatial_frequency - time * params.wake_temporal_frequency).sin()
        * params.wake_amplitude
        * force
}

/// Visit every drawable cell, column by column.
pub fn for_each_point(
    params: &WaveParams,
    time: f32,
    surface: Vec2,
    pointer: &PointerState,
    mut f: impl FnMut(&WavePoint),
) {
    for col in 0..params.cols {
        for row in 0..params.rows {
            if let Some(p) = wave_point(params, row, col, time, surface, pointer) {
                f(&p);
            }
        }
    }
}

#[inline]
fn lerp_rgb(near: [u8; 3], far: [u8; 3], t: f32) -> [u8; 3] {
    let t = t.clamp(0.0, 1.0);
    let mut out = [0u8; 3];
    for i in 0..3 {
        let a = near[i] as f32;
        let b = far[i] as f32;
        out[i] = (a + (b - a) * t).floor().clamp(0.0, 255.0) as u8;
    }
    out
}
