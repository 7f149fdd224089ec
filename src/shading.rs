//! Per-dot size and opacity.
//!
//! Size grows with pointer influence and shimmers with `sin(time + phase)`.
//! Opacity grows with influence, flickers slowly with
//! `|sin(time / 2 + phase)|`, and is capped at [`MAX_OPACITY`].

#[cfg(test)]
#[path = "shading_test.rs"]
mod shading_test;

use crate::consts::{
    BASE_DOT_SIZE, BASE_OPACITY, FLICKER_AMPLITUDE, FLICKER_RATE, INFLUENCE_OPACITY_GAIN, INFLUENCE_SIZE_GAIN,
    MAX_OPACITY, SHIMMER_AMPLITUDE,
};

/// How one dot is drawn on one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DotStyle {
    /// Circle radius in logical pixels.
    pub radius: f64,
    /// Fill alpha in `[BASE_OPACITY, MAX_OPACITY]`.
    pub opacity: f64,
}

impl DotStyle {
    #[must_use]
    pub fn compute(influence: f64, time: f64, phase: f64) -> Self {
        Self { radius: dot_size(influence, time, phase), opacity: dot_opacity(influence, time, phase) }
    }
}

#[must_use]
pub fn dot_size(influence: f64, time: f64, phase: f64) -> f64 {
    BASE_DOT_SIZE + influence * INFLUENCE_SIZE_GAIN + (time + phase).sin() * SHIMMER_AMPLITUDE
}

#[must_use]
pub fn dot_opacity(influence: f64, time: f64, phase: f64) -> f64 {
    let flicker = (time * FLICKER_RATE + phase).sin().abs() * FLICKER_AMPLITUDE;
    (BASE_OPACITY + influence * INFLUENCE_OPACITY_GAIN + flicker).min(MAX_OPACITY)
}
