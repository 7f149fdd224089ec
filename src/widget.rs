//! Mount / unmount lifecycle.
//!
//! [`DotField::mount`] sizes the surface, builds the grid, subscribes to
//! resize and pointer-move events, paints the first frame, and starts the
//! frame loop. [`DotField::unmount`] (also run on drop) reverses all of it:
//! the pending frame is withdrawn, both listeners are removed, and the clock
//! and grid are discarded.
//!
//! Listener and frame callbacks hold `Weak` references to the engine and the
//! host, so nothing the host retains keeps a torn-down widget alive.

#[cfg(test)]
#[path = "widget_test.rs"]
mod widget_test;

use std::cell::{Ref, RefCell};
use std::rc::{Rc, Weak};

use log::{debug, trace, warn};

use crate::config::DotFieldConfig;
use crate::driver::FrameDriver;
use crate::engine::EngineCore;
use crate::error::DotFieldError;
use crate::grid::PhaseSource;
use crate::host::{Host, Listener, ListenerId};

/// A mounted dot field.
pub struct DotField<H: Host + 'static> {
    host: Rc<H>,
    engine: Rc<RefCell<EngineCore>>,
    driver: Option<FrameDriver<H>>,
    listeners: Vec<ListenerId>,
    mounted: bool,
}

impl<H: Host + 'static> DotField<H> {
    /// Mount with thread-local random phases.
    ///
    /// # Errors
    ///
    /// Returns an error for invalid configuration or if the host refuses a
    /// listener. Nothing stays registered on error.
    pub fn mount(host: Rc<H>, config: &DotFieldConfig) -> Result<Self, DotFieldError> {
        Self::mount_with_phases(host, config, Box::new(rand::rng()))
    }

    /// Mount with an injected phase source.
    ///
    /// # Errors
    ///
    /// Same as [`DotField::mount`].
    pub fn mount_with_phases(
        host: Rc<H>,
        config: &DotFieldConfig,
        phases: Box<dyn PhaseSource>,
    ) -> Result<Self, DotFieldError> {
        let validated = config.validate()?;
        let engine = Rc::new(RefCell::new(EngineCore::with_phase_source(validated, phases)));
        let mut field = Self { host, engine, driver: None, listeners: Vec::new(), mounted: true };

        resize_from_host(&*field.host, &field.engine);
        if let Err(err) = field.subscribe() {
            field.unmount();
            return Err(err);
        }

        render_tick(&*field.host, &field.engine);
        let host = Rc::downgrade(&field.host);
        let engine = Rc::downgrade(&field.engine);
        field.driver = Some(FrameDriver::start(Rc::clone(&field.host), move || {
            if let (Some(host), Some(engine)) = (host.upgrade(), engine.upgrade()) {
                render_tick(&*host, &engine);
            }
        }));

        debug!("dots: mounted with {} dots", field.engine.borrow().grid().len());
        Ok(field)
    }

    fn subscribe(&mut self) -> Result<(), DotFieldError> {
        let host: Weak<H> = Rc::downgrade(&self.host);
        let engine = Rc::downgrade(&self.engine);
        let on_resize = Listener::Resize(Box::new(move || {
            if let (Some(host), Some(engine)) = (host.upgrade(), engine.upgrade()) {
                resize_from_host(&*host, &engine);
            }
        }));
        self.listeners.push(self.host.listen(on_resize)?);

        let engine = Rc::downgrade(&self.engine);
        let on_pointer = Listener::PointerMove(Box::new(move |position| {
            if let Some(engine) = engine.upgrade() {
                engine.borrow_mut().on_pointer_move(position);
            }
        }));
        self.listeners.push(self.host.listen(on_pointer)?);
        Ok(())
    }

    /// Stop the loop, unsubscribe, and discard state. Safe to call repeatedly.
    pub fn unmount(&mut self) {
        if let Some(driver) = self.driver.take() {
            driver.stop();
        }
        for id in self.listeners.drain(..) {
            self.host.unlisten(id);
        }
        if self.mounted {
            self.mounted = false;
            let mut engine = self.engine.borrow_mut();
            debug!("dots: unmounted after {} frames", engine.frames_rendered());
            engine.teardown();
        }
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Frames painted since mount.
    #[must_use]
    pub fn frames_rendered(&self) -> u64 {
        self.engine.borrow().frames_rendered()
    }

    /// Read-only view of the engine state.
    #[must_use]
    pub fn engine(&self) -> Ref<'_, EngineCore> {
        self.engine.borrow()
    }
}

impl<H: Host + 'static> Drop for DotField<H> {
    fn drop(&mut self) {
        self.unmount();
    }
}

/// Re-read the host viewport and resize. No-op while the surface is missing.
fn resize_from_host<H: Host>(host: &H, engine: &RefCell<EngineCore>) {
    let Some(mut surface) = host.surface() else {
        debug!("dots: surface unavailable, resize skipped");
        return;
    };
    let (width, height) = host.viewport_size();
    if let Err(err) = engine.borrow_mut().resize(&mut surface, width, height, host.device_pixel_ratio()) {
        warn!("dots: resize failed: {err}");
    }
}

/// Paint one frame. Skipped silently while the surface is missing.
fn render_tick<H: Host>(host: &H, engine: &RefCell<EngineCore>) {
    let Some(mut surface) = host.surface() else {
        trace!("dots: surface unavailable, frame skipped");
        return;
    };
    if let Err(err) = engine.borrow_mut().render_frame(&mut surface) {
        warn!("dots: frame failed: {err}");
    }
}
