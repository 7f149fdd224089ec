//! Animated interactive dot-grid background for the browser.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! full lifecycle of a decorative canvas layer: laying out a square lattice of
//! dots over the viewport, advancing an animation clock once per display
//! refresh, and shading every dot from the clock, a per-dot phase, and the
//! distance to the pointer. The host page only mounts a canvas and, later,
//! unmounts it.
//!
//! Everything except [`web`] and [`bindings`] is browser-free, so the engine,
//! the frame loop, and the mount/unmount lifecycle are tested natively through
//! the [`host::Host`] and [`surface::Surface`] traits.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Testable [`engine::EngineCore`]: clock, grid, pointer, viewport |
//! | [`grid`] | Lattice points and phase assignment |
//! | [`pointer`] | Pointer state and the linear influence falloff |
//! | [`shading`] | Per-dot size and opacity |
//! | [`surface`] | Drawing-surface trait and DPR backing-store sizing |
//! | [`host`] | Embedding environment trait (viewport, frames, listeners) |
//! | [`driver`] | Continuous frame loop with a cancellation handle |
//! | [`widget`] | Mount / unmount lifecycle |
//! | [`web`] | Browser host and canvas surface over `web_sys` |
//! | [`bindings`] | `wasm_bindgen` exports for the host page |
//! | [`config`] | Widget configuration, defaults, and validation |
//! | [`color`] | Hex color parsing and `rgba()` fill strings |
//! | [`error`] | Crate error type |
//! | [`geom`] | Logical-pixel points |
//! | [`consts`] | Shared numeric constants |

pub mod bindings;
pub mod color;
pub mod config;
pub mod consts;
pub mod driver;
pub mod engine;
pub mod error;
pub mod geom;
pub mod grid;
pub mod host;
pub mod pointer;
pub mod shading;
pub mod surface;
pub mod web;
pub mod widget;

#[cfg(test)]
mod fakes;

pub use config::DotFieldConfig;
pub use error::DotFieldError;
pub use widget::DotField;
