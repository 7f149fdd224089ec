//! The dot lattice.
//!
//! A [`DotGrid`] is a pure function of (viewport width, viewport height,
//! spacing) plus random phases. It is rebuilt from scratch whenever any of the
//! three change; points carry no identity across a rebuild.

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;

use std::f64::consts::TAU;

use log::warn;
use rand::Rng;

use crate::consts::MAX_GRID_POINTS;
use crate::geom::Point;

/// Source of per-dot phase offsets, uniform in `[0, 2π)`.
pub trait PhaseSource {
    fn next_phase(&mut self) -> f64;
}

impl<R: Rng + ?Sized> PhaseSource for R {
    fn next_phase(&mut self) -> f64 {
        self.random_range(0.0..TAU)
    }
}

/// One dot in the field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridPoint {
    /// Fixed lattice anchor.
    pub original: Point,
    /// Where the dot is drawn this frame. Currently always `original`.
    pub render: Point,
    /// Oscillation offset in `[0, 2π)`.
    pub phase: f64,
}

/// All dots for one viewport size and spacing.
#[derive(Debug, Clone, Default)]
pub struct DotGrid {
    points: Vec<GridPoint>,
    columns: usize,
    rows: usize,
}

impl DotGrid {
    /// Lay out a lattice over `width × height` logical pixels.
    ///
    /// Samples start at `spacing / 2` on both axes and step by `spacing`
    /// while strictly below the extent. Points are ordered column by column.
    /// A layout needing more than [`MAX_GRID_POINTS`] dots yields an empty
    /// grid.
    #[must_use]
    pub fn initialize(width: f64, height: f64, spacing: f64, phases: &mut dyn PhaseSource) -> Self {
        let total = samples_along(width, spacing)
            .zip(samples_along(height, spacing))
            .and_then(|(columns, rows)| Some((columns, rows, columns.checked_mul(rows)?)))
            .filter(|&(_, _, total)| total <= MAX_GRID_POINTS);
        let Some((columns, rows, total)) = total else {
            warn!("dots: {width}x{height} at spacing {spacing} exceeds {MAX_GRID_POINTS} dots, grid left empty");
            return Self::default();
        };
        let mut points = Vec::with_capacity(total);
        for col in 0..columns {
            let x = sample_at(col, spacing);
            for row in 0..rows {
                let y = sample_at(row, spacing);
                let anchor = Point::new(x, y);
                points.push(GridPoint { original: anchor, render: anchor, phase: phases.next_phase() });
            }
        }
        Self { points, columns, rows }
    }

    #[must_use]
    pub fn points(&self) -> &[GridPoint] {
        &self.points
    }

    pub fn points_mut(&mut self) -> &mut [GridPoint] {
        &mut self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Samples along the x axis.
    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Samples along the y axis.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }
}

/// Number of `k >= 0` with `spacing/2 + k*spacing < extent`, or `None` when
/// that alone exceeds [`MAX_GRID_POINTS`].
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn samples_along(extent: f64, spacing: f64) -> Option<usize> {
    let first = spacing / 2.0;
    if !extent.is_finite() || !spacing.is_finite() || spacing <= 0.0 || extent <= first {
        return Some(0);
    }
    let estimate = ((extent - first) / spacing).ceil();
    if estimate > MAX_GRID_POINTS as f64 {
        return None;
    }
    let mut count = estimate as usize;
    // Guard the float boundary so the last sample is strictly inside.
    while count > 0 && sample_at(count - 1, spacing) >= extent {
        count -= 1;
    }
    while sample_at(count, spacing) < extent {
        count += 1;
    }
    Some(count)
}

#[allow(clippy::cast_precision_loss)]
fn sample_at(index: usize, spacing: f64) -> f64 {
    spacing / 2.0 + index as f64 * spacing
}
