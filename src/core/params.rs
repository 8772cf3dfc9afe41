use crate::constants::*;
use std::str::FromStr;

/// Shape and motion of the perspective wave grid.
#[derive(Clone, Debug, PartialEq)]
pub struct WaveParams {
    pub rows: usize,
    pub cols: usize,
    pub wave_speed: f32,
    pub perspective_exponent: f32,
    pub swell_frequency: f32,
    /// Fraction of surface height.
    pub swell_amplitude: f32,
    pub ripple_row_frequency: f32,
    pub ripple_col_frequency: f32,
    pub ripple_time_scale: f32,
    /// Fraction of surface height.
    pub ripple_amplitude: f32,
    pub dampening_exponent: f32,
    /// Fraction of surface height.
    pub vertical_spread: f32,
    pub interaction_radius: f32,
    pub wake_spatial_frequency: f32,
    pub wake_temporal_frequency: f32,
    pub wake_amplitude: f32,
    pub base_radius: f32,
    pub min_visible_radius: f32,
    pub near_color: [u8; 3],
    pub far_color: [u8; 3],
    pub alpha_exponent: f32,
}

impl Default for WaveParams {
    fn default() -> Self {
        Self {
            rows: GRID_ROWS,
            cols: GRID_COLS,
            wave_speed: WAVE_SPEED,
            perspective_exponent: PERSPECTIVE_EXPONENT,
            swell_frequency: SWELL_FREQUENCY,
            swell_amplitude: SWELL_AMPLITUDE,
            ripple_row_frequency: RIPPLE_ROW_FREQUENCY,
            ripple_col_frequency: RIPPLE_COL_FREQUENCY,
            ripple_time_scale: RIPPLE_TIME_SCALE,
            ripple_amplitude: RIPPLE_AMPLITUDE,
            dampening_exponent: DAMPENING_EXPONENT,
            vertical_spread: VERTICAL_SPREAD,
            interaction_radius: INTERACTION_RADIUS,
            wake_spatial_frequency: WAKE_SPATIAL_FREQUENCY,
            wake_temporal_frequency: WAKE_TEMPORAL_FREQUENCY,
            wake_amplitude: WAKE_AMPLITUDE,
            base_radius: DOT_BASE_RADIUS,
            min_visible_radius: DOT_MIN_VISIBLE_RADIUS,
            near_color: DOT_NEAR_RGB,
            far_color: DOT_FAR_RGB,
            alpha_exponent: DOT_ALPHA_EXPONENT,
        }
    }
}

/// Sampling ranges and flight motion for the flock.
#[derive(Clone, Debug, PartialEq)]
pub struct BirdParams {
    pub edge_margin: f32,
    pub scale_base: f32,
    pub scale_span: f32,
    pub speed_base: f32,
    pub speed_span: f32,
    pub spawn_band: [f32; 2],
    pub rebirth_band: [f32; 2],
    pub bob_time_rate: f32,
    pub bob_space_rate: f32,
    pub bob_amplitude: f32,
    pub flap_amplitude: f32,
    pub flap_rate_min: f32,
    pub flap_rate_span: f32,
    pub color: [u8; 3],
}

impl Default for BirdParams {
    fn default() -> Self {
        Self {
            edge_margin: BIRD_EDGE_MARGIN,
            scale_base: BIRD_SCALE_BASE,
            scale_span: BIRD_SCALE_SPAN,
            speed_base: BIRD_SPEED_BASE,
            speed_span: BIRD_SPEED_SPAN,
            spawn_band: BIRD_SPAWN_BAND,
            rebirth_band: BIRD_REBIRTH_BAND,
            bob_time_rate: BIRD_BOB_TIME_RATE,
            bob_space_rate: BIRD_BOB_SPACE_RATE,
            bob_amplitude: BIRD_BOB_AMPLITUDE,
            flap_amplitude: BIRD_FLAP_AMPLITUDE,
            flap_rate_min: BIRD_FLAP_RATE_MIN,
            flap_rate_span: BIRD_FLAP_RATE_SPAN,
            color: BIRD_RGB,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneParams {
    pub background: [u8; 3],
    pub time_step: f32,
    pub wave: WaveParams,
    pub birds: BirdParams,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            background: BACKGROUND_RGB,
            time_step: TIME_STEP,
            wave: WaveParams::default(),
            birds: BirdParams::default(),
        }
    }
}

impl SceneParams {
    /// Apply `data-*` overrides looked up by attribute name.
    ///
    /// Unparseable or out-of-range values are logged and ignored.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        override_with(&lookup, "data-wave-speed", &mut self.wave.wave_speed, |v| {
            v.is_finite() && *v >= 0.0
        });
        override_with(
            &lookup,
            "data-interaction-radius",
            &mut self.wave.interaction_radius,
            |v| v.is_finite() && *v > 0.0,
        );
        override_with(&lookup, "data-grid-rows", &mut self.wave.rows, |v| {
            (1..=GRID_DIM_MAX).contains(v)
        });
        override_with(&lookup, "data-grid-cols", &mut self.wave.cols, |v| {
            (1..=GRID_DIM_MAX).contains(v)
        });
        override_with(&lookup, "data-time-step", &mut self.time_step, |v| {
            v.is_finite() && *v > 0.0
        });
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MarqueeParams {
    /// Seconds to translate the strip by exactly one copy of the media list.
    pub cycle_secs: f32,
    pub title: String,
}

impl Default for MarqueeParams {
    fn default() -> Self {
        Self {
            cycle_secs: MARQUEE_CYCLE_SECS,
            title: MARQUEE_TITLE.to_string(),
        }
    }
}

impl MarqueeParams {
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        override_with(&lookup, "data-marquee-seconds", &mut self.cycle_secs, |v| {
            v.is_finite() && *v > 0.0
        });
        if let Some(title) = lookup("data-title") {
            self.title = title;
        }
        self
    }
}

fn override_with<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    slot: &mut T,
    valid: impl Fn(&T) -> bool,
) {
    let Some(raw) = lookup(key) else {
        return;
    };
    match raw.trim().parse::<T>() {
        Ok(v) if valid(&v) => *slot = v,
        _ => log::warn!("[config] ignoring {}={:?}", key, raw),
    }
}
