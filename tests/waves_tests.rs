// Host-side tests for the wave grid and the pointer wake.
// The main crate is wasm-only, so we load the pure modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
#[path = "../src/core/mod.rs"]
mod core;

use crate::core::*;
use glam::Vec2;

const SURFACE: Vec2 = Vec2::new(1600.0, 900.0);

#[test]
fn alpha_and_radius_stay_in_range_for_every_cell() {
    let params = WaveParams::default();
    let pointers = [
        PointerState::off_surface(),
        PointerState::at(800.0, 450.0),
        PointerState::at(0.0, 0.0),
    ];
    for time in [0.0, 17.0, 1234.0] {
        for pointer in &pointers {
            for_each_point(&params, time, SURFACE, pointer, |p| {
                assert!((0.0..=1.0).contains(&p.alpha), "alpha {} out of range", p.alpha);
                assert!(p.radius >= 0.0);
                assert!(p.radius > params.min_visible_radius);
                assert!(p.x.is_finite() && p.y.is_finite());
            });
        }
    }
}

#[test]
fn cells_below_visibility_threshold_are_not_drawn() {
    let params = WaveParams::default();
    let pointer = PointerState::off_surface();
    // 8 * (1 - 37/50)^2 = 0.54 is visible, 8 * (1 - 38/50)^2 = 0.46 is not
    assert!(wave_point(&params, 0, 37, 0.0, SURFACE, &pointer).is_some());
    for col in 38..params.cols {
        for row in 0..params.rows {
            assert!(wave_point(&params, row, col, 0.0, SURFACE, &pointer).is_none());
        }
    }

    let mut drawn = 0;
    for_each_point(&params, 0.0, SURFACE, &pointer, |_| drawn += 1);
    assert_eq!(drawn, 38 * params.rows);
}

#[test]
fn grid_is_a_pure_function_of_time_and_pointer() {
    let params = WaveParams::default();
    let pointer = PointerState::at(300.0, 420.0);
    for (row, col) in [(0, 0), (12, 7), (39, 30)] {
        let a = wave_point(&params, row, col, 250.0, SURFACE, &pointer);
        let b = wave_point(&params, row, col, 250.0, SURFACE, &pointer);
        assert_eq!(a, b);
    }
    let early = wave_point(&params, 10, 5, 0.0, SURFACE, &pointer).unwrap();
    let later = wave_point(&params, 10, 5, 40.0, SURFACE, &pointer).unwrap();
    assert_ne!(early.y, later.y, "waves should move over time");
    assert_eq!(early.x, later.x, "columns do not drift horizontally");
}

#[test]
fn off_surface_pointer_never_produces_a_wake() {
    let mut params = WaveParams::default();
    params.interaction_radius = 1.0e9;
    let sentinel = PointerState::off_surface();
    for d in [0.0, 1.0, 150.0, 299.9, 1.0e4, 1.0e7] {
        assert_eq!(wake_displacement(&params, d, 123.0, &sentinel), 0.0);
    }

    let params = WaveParams::default();
    let far_away = PointerState::at(-5000.0, -5000.0);
    for (row, col) in [(0, 0), (20, 0), (39, 10), (5, 25)] {
        let a = wave_point(&params, row, col, 77.0, SURFACE, &sentinel).unwrap();
        let b = wave_point(&params, row, col, 77.0, SURFACE, &far_away).unwrap();
        assert_eq!(a, b);
    }
}

#[test]
fn pointer_on_a_cell_applies_full_wake() {
    let params = WaveParams::default();
    let time = 10.0;
    let still = wave_point(&params, 20, 0, time, SURFACE, &PointerState::off_surface()).unwrap();
    let pointer = PointerState::at(still.x, still.y);
    let pushed = wave_point(&params, 20, 0, time, SURFACE, &pointer).unwrap();

    let expected = (-time * params.wake_temporal_frequency).sin() * params.wake_amplitude;
    assert!((pushed.y - still.y - expected).abs() < 1e-3);
    assert_eq!(pushed.x, still.x);
}

#[test]
fn wake_decays_to_zero_at_interaction_radius() {
    let params = WaveParams::default();
    let pointer = PointerState::at(0.0, 0.0);
    let r = params.interaction_radius;
    assert_eq!(wake_displacement(&params, r, 3.0, &pointer), 0.0);
    assert_eq!(wake_displacement(&params, r + 1.0, 3.0, &pointer), 0.0);

    let near_edge = wake_displacement(&params, r - 1.0, 3.0, &pointer).abs();
    assert!(near_edge <= params.wake_amplitude / r + 1e-4);
    for d in [0.0, 50.0, 150.0, 250.0] {
        let force = 1.0 - d / r;
        assert!(wake_displacement(&params, d, 3.0, &pointer).abs() <= params.wake_amplitude * force + 1e-4);
    }
}

#[test]
fn color_and_opacity_fade_toward_the_horizon() {
    let params = WaveParams::default();
    let pointer = PointerState::off_surface();
    let near = wave_point(&params, 0, 0, 0.0, SURFACE, &pointer).unwrap();
    assert_eq!(near.rgb, params.near_color);
    assert_eq!(near.alpha, 1.0);
    assert_eq!(near.radius, params.base_radius);

    let mut prev = near;
    for col in 1..38 {
        let p = wave_point(&params, 0, col, 0.0, SURFACE, &pointer).unwrap();
        assert!(p.alpha <= prev.alpha);
        assert!(p.radius < prev.radius);
        for ch in 0..3 {
            assert!(p.rgb[ch] >= prev.rgb[ch], "channel {} not moving toward far colour", ch);
        }
        prev = p;
    }
}

#[test]
fn far_columns_are_compressed_to_the_right() {
    let params = WaveParams::default();
    let pointer = PointerState::off_surface();
    let xs: Vec<f32> = (0..38)
        .map(|c| wave_point(&params, 0, c, 0.0, SURFACE, &pointer).unwrap().x)
        .collect();
    for w in xs.windows(3) {
        assert!(w[1] > w[0]);
        assert!(w[2] - w[1] < w[1] - w[0] + 1e-3, "spacing should shrink with distance");
    }
}

#[test]
fn rows_converge_toward_center_at_the_horizon() {
    let params = WaveParams::default();
    let pointer = PointerState::off_surface();
    let spread = |col: usize| {
        let top = wave_point(&params, 0, col, 0.0, SURFACE, &pointer).unwrap().y;
        let bottom = wave_point(&params, params.rows - 1, col, 0.0, SURFACE, &pointer).unwrap().y;
        (bottom - top).abs()
    };
    assert!(spread(30) < spread(15));
    assert!(spread(15) < spread(0));
}
