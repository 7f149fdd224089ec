//! Shared numeric constants for the dot field.

// ── Influence ───────────────────────────────────────────────────

/// Distance in logical pixels at which pointer influence falls to zero.
pub const MAX_INFLUENCE_DISTANCE: f64 = 180.0;

// ── Dot size ────────────────────────────────────────────────────

/// Radius of a dot at rest, in logical pixels.
pub const BASE_DOT_SIZE: f64 = 1.2;

/// Extra radius at full pointer influence.
pub const INFLUENCE_SIZE_GAIN: f64 = 4.5;

/// Amplitude of the per-dot size shimmer.
pub const SHIMMER_AMPLITUDE: f64 = 0.3;

// ── Opacity ─────────────────────────────────────────────────────

/// Opacity of a dot at rest.
pub const BASE_OPACITY: f64 = 0.08;

/// Extra opacity at full pointer influence.
pub const INFLUENCE_OPACITY_GAIN: f64 = 0.35;

/// Amplitude of the slow per-dot opacity flicker.
pub const FLICKER_AMPLITUDE: f64 = 0.04;

/// Flicker runs at half the clock rate.
pub const FLICKER_RATE: f64 = 0.5;

/// Hard ceiling on dot opacity.
pub const MAX_OPACITY: f64 = 0.5;

// ── Defaults ────────────────────────────────────────────────────

/// Smallest accepted lattice spacing in logical pixels.
pub const MIN_GRID_SPACING: f64 = 1.0;

/// Largest grid that is built; denser layouts produce no dots.
pub const MAX_GRID_POINTS: usize = 1 << 20;

/// Default lattice spacing in logical pixels.
pub const DEFAULT_GRID_SPACING: f64 = 32.0;

/// Default clock increment per rendered frame.
pub const DEFAULT_ANIMATION_SPEED: f64 = 0.005;

/// Default dot color (teal).
pub const DEFAULT_DOT_COLOR: &str = "#004E64";

/// Background value that means "do not fill".
pub const TRANSPARENT: &str = "transparent";
