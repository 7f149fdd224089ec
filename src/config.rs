//! Widget configuration.
//!
//! [`DotFieldConfig`] is the loose, serde-friendly shape a host page passes in
//! (every field optional, camelCase keys). [`DotFieldConfig::validate`] turns
//! it into a [`ValidatedConfig`] with the dot color already decomposed into
//! channels, so the render loop never re-parses strings.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::color::{Background, Rgb};
use crate::consts::{DEFAULT_ANIMATION_SPEED, DEFAULT_DOT_COLOR, DEFAULT_GRID_SPACING, MIN_GRID_SPACING};
use crate::error::DotFieldError;

/// Configuration accepted at mount.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DotFieldConfig {
    /// CSS fill painted under the dots; `None` or `"transparent"` means no fill.
    pub background_color: Option<String>,
    /// Dot color as `#RRGGBB`, `#RGB`, or `#RRGGBBAA` (alpha ignored).
    pub dot_color: String,
    /// Lattice spacing in logical pixels, at least 1.
    pub grid_spacing: f64,
    /// Clock increment per rendered frame.
    pub animation_speed: f64,
}

impl Default for DotFieldConfig {
    fn default() -> Self {
        Self {
            background_color: None,
            dot_color: DEFAULT_DOT_COLOR.to_owned(),
            grid_spacing: DEFAULT_GRID_SPACING,
            animation_speed: DEFAULT_ANIMATION_SPEED,
        }
    }
}

impl DotFieldConfig {
    /// Parse a JSON object such as `{"dotColor": "#004E64", "gridSpacing": 32}`.
    ///
    /// Missing keys keep their defaults. The result is not yet validated.
    ///
    /// # Errors
    ///
    /// Returns [`DotFieldError::ConfigParse`] for malformed JSON or wrong types.
    pub fn from_json(raw: &str) -> Result<Self, DotFieldError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }

    /// Check every field and decompose the colors.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field: color, then spacing, then speed.
    pub fn validate(&self) -> Result<ValidatedConfig, DotFieldError> {
        let dot_color = Rgb::parse_hex(&self.dot_color)?;
        if !self.grid_spacing.is_finite() || self.grid_spacing < MIN_GRID_SPACING {
            return Err(DotFieldError::InvalidSpacing(self.grid_spacing));
        }
        if !self.animation_speed.is_finite() || self.animation_speed <= 0.0 {
            return Err(DotFieldError::InvalidSpeed(self.animation_speed));
        }
        Ok(ValidatedConfig {
            background: Background::from_config(self.background_color.as_deref()),
            dot_color,
            grid_spacing: self.grid_spacing,
            animation_speed: self.animation_speed,
        })
    }
}

/// Configuration that has passed [`DotFieldConfig::validate`].
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedConfig {
    pub background: Background,
    pub dot_color: Rgb,
    pub grid_spacing: f64,
    pub animation_speed: f64,
}

impl Default for ValidatedConfig {
    fn default() -> Self {
        Self {
            background: Background::Transparent,
            dot_color: Rgb { red: 0x00, green: 0x4E, blue: 0x64 },
            grid_spacing: DEFAULT_GRID_SPACING,
            animation_speed: DEFAULT_ANIMATION_SPEED,
        }
    }
}
