use log::{debug, trace};

use crate::config::ValidatedConfig;
use crate::error::DotFieldError;
use crate::geom::Point;
use crate::grid::{DotGrid, PhaseSource};
use crate::pointer::PointerState;
use crate::shading::DotStyle;
use crate::surface::{Surface, Viewport};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Monotonic animation time, advanced once per rendered frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AnimationClock {
    time: f64,
}

impl AnimationClock {
    #[must_use]
    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn advance(&mut self, step: f64) {
        self.time += step;
    }

    pub fn reset(&mut self) {
        self.time = 0.0;
    }
}

/// Engine state that does not depend on the browser.
///
/// The widget layer owns one of these behind a `RefCell` and calls into it
/// from the frame loop and from resize/pointer listeners.
pub struct EngineCore {
    config: ValidatedConfig,
    grid: DotGrid,
    clock: AnimationClock,
    pointer: PointerState,
    viewport: Viewport,
    phases: Box<dyn PhaseSource>,
    frames_rendered: u64,
}

impl EngineCore {
    /// Engine with thread-local random phases.
    #[must_use]
    pub fn new(config: ValidatedConfig) -> Self {
        Self::with_phase_source(config, Box::new(rand::rng()))
    }

    #[must_use]
    pub fn with_phase_source(config: ValidatedConfig, phases: Box<dyn PhaseSource>) -> Self {
        Self {
            config,
            grid: DotGrid::default(),
            clock: AnimationClock::default(),
            pointer: PointerState::default(),
            viewport: Viewport::default(),
            phases,
            frames_rendered: 0,
        }
    }

    // --- Event inputs ---

    /// Size `surface` for a `width × height` logical viewport at `dpr`, then
    /// rebuild the grid for the new logical size.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the surface rejects the display size or transform. The
    /// grid is still rebuilt so the next frame draws the right lattice.
    pub fn resize<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        width: f64,
        height: f64,
        dpr: Option<f64>,
    ) -> Result<(), DotFieldError> {
        self.viewport = Viewport::new(width, height, dpr);
        let backing = self.viewport.backing_size();
        surface.set_backing_size(backing.width, backing.height);
        let styled = surface
            .set_display_size(self.viewport.width, self.viewport.height)
            .and_then(|()| surface.set_scale(self.viewport.dpr));
        self.regenerate_grid();
        debug!(
            "dots: resized to {}x{} @{} ({}x{} px), {} dots",
            self.viewport.width,
            self.viewport.height,
            self.viewport.dpr,
            backing.width,
            backing.height,
            self.grid.len()
        );
        styled
    }

    /// Record the latest pointer position.
    pub fn on_pointer_move(&mut self, position: Point) {
        self.pointer.move_to(position);
    }

    // --- Render ---

    /// Advance the clock and paint one frame.
    ///
    /// # Errors
    ///
    /// Returns the first failing draw call; the rest of the frame is skipped.
    pub fn render_frame<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Result<(), DotFieldError> {
        self.clock.advance(self.config.animation_speed);
        let time = self.clock.time();
        let Viewport { width, height, .. } = self.viewport;

        surface.clear(width, height);
        if let Some(fill) = self.config.background.fill() {
            surface.fill_rect(width, height, fill);
        }

        let rgb = self.config.dot_color;
        let pointer = self.pointer;
        for dot in self.grid.points_mut() {
            dot.render = dot.original;
            let influence = pointer.influence(dot.original);
            let style = DotStyle::compute(influence, time, dot.phase);
            surface.fill_circle(dot.render, style.radius, rgb.with_alpha(style.opacity))?;
        }

        self.frames_rendered += 1;
        trace!("dots: frame {} at t={time}", self.frames_rendered);
        Ok(())
    }

    /// Discard clock, grid, and pointer.
    pub fn teardown(&mut self) {
        self.clock.reset();
        self.grid = DotGrid::default();
        self.pointer = PointerState::default();
    }

    fn regenerate_grid(&mut self) {
        self.grid = DotGrid::initialize(
            self.viewport.width,
            self.viewport.height,
            self.config.grid_spacing,
            self.phases.as_mut(),
        );
    }

    // --- Queries ---

    /// Current animation time.
    #[must_use]
    pub fn time(&self) -> f64 {
        self.clock.time()
    }

    #[must_use]
    pub fn grid(&self) -> &DotGrid {
        &self.grid
    }

    #[must_use]
    pub fn pointer(&self) -> Point {
        self.pointer.position()
    }

    /// Influence of the pointer on a point at `position`.
    #[must_use]
    pub fn influence(&self, position: Point) -> f64 {
        self.pointer.influence(position)
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn config(&self) -> &ValidatedConfig {
        &self.config
    }

    /// Frames painted since construction.
    #[must_use]
    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }
}
