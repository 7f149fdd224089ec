//! Error type for the dot field.
//!
//! Configuration problems surface once, at mount. Steady-state failures
//! (draw calls, frame requests) are logged by the caller and never reach the
//! host page.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use wasm_bindgen::JsValue;

/// Errors produced while configuring, mounting, or drawing the dot field.
#[derive(Debug, thiserror::Error)]
pub enum DotFieldError {
    /// The dot color is not `#RGB`, `#RRGGBB`, or `#RRGGBBAA`.
    #[error("invalid dot color: {0:?}")]
    InvalidColor(String),

    /// Grid spacing must be finite and at least one logical pixel.
    #[error("invalid grid spacing: {0}")]
    InvalidSpacing(f64),

    /// Animation speed must be a positive finite number.
    #[error("invalid animation speed: {0}")]
    InvalidSpeed(f64),

    /// The JSON configuration could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// No browser window (or document) is available.
    #[error("browser window unavailable")]
    NoWindow,

    /// The host refused a frame or listener request.
    #[error("host request failed: {0}")]
    Host(String),

    /// A browser API call threw.
    #[error("javascript error: {0}")]
    Js(String),
}

impl DotFieldError {
    /// The host declined to schedule a frame or register a listener.
    #[must_use]
    pub fn refused(request: &str, detail: impl std::fmt::Display) -> Self {
        Self::Host(format!("{request}: {detail}"))
    }

    /// Stable machine-readable code for this error.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidColor(_) => "E_INVALID_COLOR",
            Self::InvalidSpacing(_) => "E_INVALID_SPACING",
            Self::InvalidSpeed(_) => "E_INVALID_SPEED",
            Self::ConfigParse(_) => "E_CONFIG_PARSE",
            Self::NoWindow => "E_NO_WINDOW",
            Self::Host(_) => "E_HOST",
            Self::Js(_) => "E_JS",
        }
    }
}

impl From<JsValue> for DotFieldError {
    fn from(value: JsValue) -> Self {
        Self::Js(js_message(&value))
    }
}

/// Text of a thrown JS value.
pub(crate) fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

impl From<DotFieldError> for JsValue {
    fn from(err: DotFieldError) -> Self {
        js_sys::Error::new(&format!("{}: {err}", err.error_code())).into()
    }
}
