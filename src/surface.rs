//! Drawing surface abstraction.
//!
//! [`Surface`] is the narrow set of 2D operations the engine needs. The browser
//! implementation lives in [`crate::web`]; tests use a recording fake. All
//! coordinates passed to drawing calls are logical (CSS) pixels: the surface
//! applies the device-pixel-ratio scale set by [`Surface::set_scale`].

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

use crate::color::Rgba;
use crate::error::DotFieldError;
use crate::geom::Point;

/// A 2D drawing target with a resizable backing store.
pub trait Surface {
    /// Size the backing store in physical pixels.
    fn set_backing_size(&mut self, width: u32, height: u32);

    /// Keep the on-page (display) size in logical pixels.
    ///
    /// # Errors
    ///
    /// Returns an error if the host rejects the style change.
    fn set_display_size(&mut self, width: f64, height: f64) -> Result<(), DotFieldError>;

    /// Replace the current transform with a uniform `scale`.
    ///
    /// # Errors
    ///
    /// Returns an error if the host rejects the transform.
    fn set_scale(&mut self, scale: f64) -> Result<(), DotFieldError>;

    /// Clear `width × height` logical pixels from the origin.
    fn clear(&mut self, width: f64, height: f64);

    /// Fill `width × height` logical pixels from the origin with a CSS color.
    fn fill_rect(&mut self, width: f64, height: f64, color: &str);

    /// Fill a circle.
    ///
    /// # Errors
    ///
    /// Returns an error if the host rejects the path (e.g. negative radius).
    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba) -> Result<(), DotFieldError>;
}

/// Logical viewport plus the device pixel ratio it is displayed at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub dpr: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { width: 0.0, height: 0.0, dpr: 1.0 }
    }
}

impl Viewport {
    /// Build a viewport, falling back to a ratio of 1 when `dpr` is missing,
    /// non-finite, or not positive. Negative or non-finite sizes clamp to 0.
    #[must_use]
    pub fn new(width: f64, height: f64, dpr: Option<f64>) -> Self {
        Self { width: sanitize_extent(width), height: sanitize_extent(height), dpr: sanitize_dpr(dpr) }
    }

    /// Backing-store size in physical pixels.
    #[must_use]
    pub fn backing_size(&self) -> BackingSize {
        BackingSize { width: to_device_pixels(self.width * self.dpr), height: to_device_pixels(self.height * self.dpr) }
    }
}

/// Physical pixel dimensions of a surface's backing store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackingSize {
    pub width: u32,
    pub height: u32,
}

fn sanitize_extent(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 { value } else { 0.0 }
}

fn sanitize_dpr(dpr: Option<f64>) -> f64 {
    match dpr {
        Some(ratio) if ratio.is_finite() && ratio > 0.0 => ratio,
        _ => 1.0,
    }
}

/// Canvas dimensions are unsigned integers; fractional values truncate.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_device_pixels(value: f64) -> u32 {
    value.clamp(0.0, f64::from(u32::MAX)).trunc() as u32
}
