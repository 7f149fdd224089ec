//! Continuous frame loop.
//!
//! [`FrameDriver::start`] runs a tick on every display refresh by chaining
//! one-shot [`Host::request_frame`] calls. At most one request is pending at a
//! time; [`FrameDriver::stop`] withdraws it, so no callback outlives the loop.
//! Callbacks hold only a `Weak` reference to the loop state: a frame the host
//! had already queued when the driver was dropped finds nothing and returns.

#[cfg(test)]
#[path = "driver_test.rs"]
mod driver_test;

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use log::{debug, warn};

use crate::host::{FrameId, Host};

struct DriverState<H: Host> {
    host: Rc<H>,
    tick: RefCell<Box<dyn FnMut()>>,
    pending: Cell<Option<FrameId>>,
    running: Cell<bool>,
    ticks: Cell<u64>,
}

/// Cancellation handle for a running frame loop.
pub struct FrameDriver<H: Host + 'static> {
    state: Rc<DriverState<H>>,
}

impl<H: Host + 'static> FrameDriver<H> {
    /// Request the first frame and keep requesting one per refresh until
    /// stopped.
    pub fn start(host: Rc<H>, tick: impl FnMut() + 'static) -> Self {
        let state = Rc::new(DriverState {
            host,
            tick: RefCell::new(Box::new(tick)),
            pending: Cell::new(None),
            running: Cell::new(true),
            ticks: Cell::new(0),
        });
        schedule(&state);
        Self { state }
    }

    /// Withdraw the pending frame request. Safe to call repeatedly.
    pub fn stop(&self) {
        let was_running = self.state.running.replace(false);
        if let Some(id) = self.state.pending.take() {
            self.state.host.cancel_frame(id);
        }
        if was_running {
            debug!("dots: frame loop stopped after {} ticks", self.state.ticks.get());
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state.running.get()
    }

    /// Whether a frame request is outstanding.
    #[must_use]
    pub fn has_pending_frame(&self) -> bool {
        self.state.pending.get().is_some()
    }

    /// Ticks executed so far.
    #[must_use]
    pub fn ticks(&self) -> u64 {
        self.state.ticks.get()
    }
}

impl<H: Host + 'static> Drop for FrameDriver<H> {
    fn drop(&mut self) {
        self.stop();
    }
}

fn schedule<H: Host + 'static>(state: &Rc<DriverState<H>>) {
    let weak: Weak<DriverState<H>> = Rc::downgrade(state);
    let callback = Box::new(move || {
        if let Some(state) = weak.upgrade() {
            state.pending.set(None);
            fire(&state);
        }
    });
    match state.host.request_frame(callback) {
        Ok(id) => state.pending.set(Some(id)),
        Err(err) => {
            warn!("dots: frame request failed, loop halted: {err}");
            state.running.set(false);
        }
    }
}

fn fire<H: Host + 'static>(state: &Rc<DriverState<H>>) {
    if !state.running.get() {
        return;
    }
    (state.tick.borrow_mut())();
    state.ticks.set(state.ticks.get() + 1);
    // The tick may have stopped the loop.
    if state.running.get() && state.pending.get().is_none() {
        schedule(state);
    }
}
