// Host-side tests for the flock: fixed size, rebirth and draw order.
// The main crate is wasm-only, so we load the pure modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
#[path = "../src/core/mod.rs"]
mod core;

use crate::constants::FLOCK_SIZE;
use crate::core::*;
use glam::Vec2;

const SURFACE: Vec2 = Vec2::new(1200.0, 800.0);

fn make_flock(seed: u64) -> (BirdParams, Flock) {
    let params = BirdParams::default();
    let flock = Flock::new(&params, seed, SURFACE);
    (params, flock)
}

#[test]
fn new_flock_starts_inside_the_spawn_band() {
    let (params, flock) = make_flock(3);
    assert_eq!(flock.len(), FLOCK_SIZE);
    for b in &flock.birds {
        assert!((0.0..=SURFACE.x).contains(&b.x));
        assert!(b.y >= params.spawn_band[0] * SURFACE.y && b.y <= params.spawn_band[1] * SURFACE.y);
        assert!((0.0..1.0).contains(&b.depth));
        assert_eq!(b.scale, scale_for_depth(&params, b.depth));
        assert_eq!(b.speed, speed_for_depth(&params, b.depth));
        assert!(b.flap_rate >= params.flap_rate_min);
    }
}

#[test]
fn flock_size_never_changes_and_birds_stay_in_lane() {
    let (params, mut flock) = make_flock(7);
    // Rebirth needs x strictly past the exit, so x == exit_x survives a frame.
    let exit_x = SURFACE.x + params.edge_margin;
    for _ in 0..5000 {
        flock.step(&params, SURFACE);
        assert_eq!(flock.len(), FLOCK_SIZE);
        for b in &flock.birds {
            assert!(b.x >= -params.edge_margin && b.x <= exit_x, "bird at x={}", b.x);
        }
    }
}

#[test]
fn bird_past_the_right_edge_is_reborn_on_the_left_with_fresh_depth() {
    let (params, mut flock) = make_flock(11);
    {
        // Stale values that no depth in [0, 1) could produce.
        let b = &mut flock.birds[0];
        b.x = SURFACE.x + params.edge_margin - 0.1;
        b.depth = 5.0;
        b.scale = -1.0;
        b.speed = 1000.0;
    }
    flock.step(&params, SURFACE);

    let b = flock.birds[0];
    assert_eq!(b.x, -params.edge_margin);
    assert!((0.0..1.0).contains(&b.depth));
    assert_eq!(b.scale, scale_for_depth(&params, b.depth));
    assert_eq!(b.speed, speed_for_depth(&params, b.depth));
    assert!(b.y >= params.rebirth_band[0] * SURFACE.y && b.y <= params.rebirth_band[1] * SURFACE.y);
}

#[test]
fn bird_exactly_on_the_exit_line_is_kept_until_it_passes_it() {
    let (params, mut flock) = make_flock(13);
    let exit_x = SURFACE.x + params.edge_margin;
    flock.birds[1].speed = 0.5;
    flock.birds[1].x = exit_x - 0.5;
    flock.step(&params, SURFACE);
    assert_eq!(flock.birds[1].x, exit_x);

    flock.birds[1].speed = 0.5;
    flock.step(&params, SURFACE);
    assert_eq!(flock.birds[1].x, -params.edge_margin);
}

#[test]
fn bird_inside_the_surface_just_advances() {
    let (params, mut flock) = make_flock(5);
    flock.birds[2].x = 100.0;
    let before = flock.birds[2];
    flock.step(&params, SURFACE);
    let after = flock.birds[2];
    assert_eq!(after.x, 100.0 + before.speed);
    assert_eq!(after.y, before.y);
    assert_eq!(after.scale, before.scale);
}

#[test]
fn draw_order_is_far_to_near() {
    let (params, mut flock) = make_flock(21);
    for frame in 0..2000 {
        flock.step(&params, SURFACE);
        if frame % 97 != 0 {
            continue;
        }
        let order = flock.draw_order();
        assert_eq!(order.len(), FLOCK_SIZE);
        let mut seen = order.to_vec();
        seen.sort_unstable();
        assert_eq!(seen, (0..FLOCK_SIZE).collect::<Vec<_>>());
        for w in order.windows(2) {
            assert!(flock.birds[w[0]].scale <= flock.birds[w[1]].scale);
        }
    }
}

#[test]
fn same_seed_gives_the_same_flight() {
    let (params, mut a) = make_flock(42);
    let (_, mut b) = make_flock(42);
    let (_, mut c) = make_flock(43);
    for _ in 0..600 {
        a.step(&params, SURFACE);
        b.step(&params, SURFACE);
        c.step(&params, SURFACE);
    }
    assert_eq!(a.birds, b.birds);
    assert_ne!(a.birds, c.birds);
}

#[test]
fn pose_bobs_and_flaps_within_amplitude() {
    let (params, flock) = make_flock(9);
    for time in [0.0, 13.0, 400.0, 9999.0] {
        for i in 0..FLOCK_SIZE {
            let bird = flock.birds[i];
            let pose = flock.pose(&params, i, time);
            assert_eq!(pose.x, bird.x);
            assert_eq!(pose.scale, bird.scale);
            assert!((pose.y - bird.y).abs() <= params.bob_amplitude + 1e-3);
            assert!(pose.wing.abs() <= params.flap_amplitude * bird.scale + 1e-3);
        }
    }
}
