#![allow(clippy::float_cmp)]

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

// --- Size ---

#[test]
fn resting_size() {
    // sin(0) = 0
    assert!(approx_eq(dot_size(0.0, 0.0, 0.0), 1.2));
}

#[test]
fn maximum_size() {
    // influence 1, sin(π/2) = 1
    assert!(approx_eq(dot_size(1.0, 0.0, FRAC_PI_2), 6.0));
}

#[test]
fn minimum_size() {
    // influence 0, sin(3π/2) = -1
    assert!(approx_eq(dot_size(0.0, PI, FRAC_PI_2), 0.9));
}

#[test]
fn size_stays_within_bounds() {
    for i in 0..=20 {
        let influence = f64::from(i) / 20.0;
        for t in 0..50 {
            let time = f64::from(t) * 0.37;
            for p in 0..8 {
                let phase = f64::from(p) * TAU / 8.0;
                let size = dot_size(influence, time, phase);
                assert!((0.9 - EPSILON..=6.0 + EPSILON).contains(&size), "{influence} {time} {phase} -> {size}");
            }
        }
    }
}

// --- Opacity ---

#[test]
fn resting_opacity_is_base() {
    assert!(approx_eq(dot_opacity(0.0, 0.0, 0.0), 0.08));
}

#[test]
fn full_influence_full_flicker_is_047() {
    // 0.5 * 0 + π/2 -> |sin| = 1
    assert!(approx_eq(dot_opacity(1.0, 0.0, FRAC_PI_2), 0.47));
}

#[test]
fn flicker_runs_at_half_rate() {
    // time = π, phase = 0 -> sin(π/2) = 1
    assert!(approx_eq(dot_opacity(0.0, PI, 0.0), 0.12));
}

#[test]
fn opacity_is_capped() {
    // Influence above the legal range still cannot exceed the cap.
    assert_eq!(dot_opacity(5.0, 0.0, FRAC_PI_2), 0.5);
}

#[test]
fn opacity_stays_within_bounds() {
    for i in 0..=20 {
        let influence = f64::from(i) / 20.0;
        for t in 0..200 {
            let time = f64::from(t) * 0.113;
            for p in 0..16 {
                let phase = f64::from(p) * TAU / 16.0;
                let opacity = dot_opacity(influence, time, phase);
                assert!((0.08..=0.5).contains(&opacity), "{influence} {time} {phase} -> {opacity}");
            }
        }
    }
}

#[test]
fn opacity_grows_with_influence() {
    let time = 1.7;
    let phase = 0.4;
    let mut last = dot_opacity(0.0, time, phase);
    for i in 1..=10 {
        let next = dot_opacity(f64::from(i) / 10.0, time, phase);
        assert!(next >= last);
        last = next;
    }
}

#[test]
fn style_combines_both() {
    let style = DotStyle::compute(1.0, 0.0, FRAC_PI_2);
    assert!(approx_eq(style.radius, 6.0));
    assert!(approx_eq(style.opacity, 0.47));
}
