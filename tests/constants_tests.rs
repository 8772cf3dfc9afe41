// Host-side tests for tuning constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    assert!(TIME_STEP > 0.0);
    assert!(WAVE_SPEED > 0.0);
    assert!(GRID_ROWS > 0 && GRID_ROWS <= GRID_DIM_MAX);
    assert!(GRID_COLS > 0 && GRID_COLS <= GRID_DIM_MAX);

    // Sub-linear curve gives foreshortening toward the horizon
    assert!(PERSPECTIVE_EXPONENT > 0.0 && PERSPECTIVE_EXPONENT < 1.0);
    assert!(DAMPENING_EXPONENT > 0.0);
    assert!(DOT_ALPHA_EXPONENT > 1.0);

    assert!(INTERACTION_RADIUS > 0.0);
    assert!(WAKE_AMPLITUDE > 0.0);
    assert!(DOT_MIN_VISIBLE_RADIUS > 0.0 && DOT_MIN_VISIBLE_RADIUS < DOT_BASE_RADIUS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn wake_and_ripple_run_at_their_intended_rates() {
    // Ripple is a finer, faster pattern than the swell
    assert!(RIPPLE_COL_FREQUENCY > SWELL_FREQUENCY);
    assert!(RIPPLE_TIME_SCALE > 1.0);
    assert!(RIPPLE_AMPLITUDE < SWELL_AMPLITUDE);
    // The wake's time rate stays slower than one full wave per frame
    assert!(WAKE_TEMPORAL_FREQUENCY < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn sentinel_is_outside_any_interaction_radius() {
    assert!(POINTER_OFF_SURFACE.abs() > INTERACTION_RADIUS * 100.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn bird_bands_are_fractions_of_the_surface() {
    for band in [BIRD_SPAWN_BAND, BIRD_REBIRTH_BAND] {
        assert!(band[0] >= 0.0 && band[0] < band[1] && band[1] <= 1.0);
    }
    assert!(FLOCK_SIZE > 0);
    assert!(BIRD_EDGE_MARGIN > 0.0);
    assert!(BIRD_SPEED_BASE > 0.0 && BIRD_SCALE_BASE > 0.0);
    assert!(BIRD_FLAP_RATE_MIN > 0.0 && BIRD_FLAP_RATE_SPAN > 0.0);
}

#[test]
fn near_dots_are_darker_than_far_dots() {
    for ch in 0..3 {
        assert!(DOT_NEAR_RGB[ch] <= DOT_FAR_RGB[ch]);
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn marquee_defaults() {
    assert!(MARQUEE_CYCLE_SECS > 0.0);
    assert!(!MARQUEE_TITLE.is_empty());
    for ext in VIDEO_EXTENSIONS {
        assert_eq!(ext, ext.to_ascii_lowercase());
        assert!(!ext.starts_with('.'));
    }
}
