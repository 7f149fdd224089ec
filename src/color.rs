//! Dot and background color handling.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

use std::fmt;

use crate::consts::TRANSPARENT;
use crate::error::DotFieldError;

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    /// Parse `#RGB`, `#RRGGBB`, or `#RRGGBBAA` (alpha digits ignored).
    ///
    /// # Errors
    ///
    /// Returns [`DotFieldError::InvalidColor`] for anything else.
    pub fn parse_hex(raw: &str) -> Result<Self, DotFieldError> {
        parse_hex_rgb(raw)
            .map(|(red, green, blue)| Self { red, green, blue })
            .ok_or_else(|| DotFieldError::InvalidColor(raw.to_owned()))
    }

    /// This color with an alpha channel.
    #[must_use]
    pub fn with_alpha(self, alpha: f64) -> Rgba {
        Rgba { rgb: self, alpha }
    }
}

/// Parse `#RGB`, `#RRGGBB`, or `#RRGGBBAA` into RGB channels. Alpha is
/// ignored; dot opacity comes from shading.
fn parse_hex_rgb(raw: &str) -> Option<(u8, u8, u8)> {
    let hex = raw.trim().strip_prefix('#')?;
    let nibbles = hex.bytes().map(nibble).collect::<Option<Vec<u8>>>()?;
    match nibbles[..] {
        [r, g, b] => Some((r * 17, g * 17, b * 17)),
        [r1, r0, g1, g0, b1, b0] | [r1, r0, g1, g0, b1, b0, _, _] => {
            Some(((r1 << 4) | r0, (g1 << 4) | g0, (b1 << 4) | b0))
        }
        _ => None,
    }
}

fn nibble(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

/// An RGB color plus opacity; formats as a CSS `rgba()` fill style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub rgb: Rgb,
    pub alpha: f64,
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.rgb.red, self.rgb.green, self.rgb.blue, self.alpha)
    }
}

/// What to paint under the dots each frame.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Background {
    /// Leave the cleared surface as is.
    #[default]
    Transparent,
    /// Fill the viewport with a CSS color string.
    Fill(String),
}

impl Background {
    /// Interpret an optional configured color. Missing, blank, or
    /// `"transparent"` means no fill.
    #[must_use]
    pub fn from_config(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") => Self::Transparent,
            Some(value) if value.eq_ignore_ascii_case(TRANSPARENT) => Self::Transparent,
            Some(value) => Self::Fill(value.to_owned()),
        }
    }

    /// The fill style, if any.
    #[must_use]
    pub fn fill(&self) -> Option<&str> {
        match self {
            Self::Transparent => None,
            Self::Fill(color) => Some(color),
        }
    }
}
