//! In-memory `Surface` and `Host` doubles shared by the unit tests.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::color::Rgba;
use crate::error::DotFieldError;
use crate::geom::Point;
use crate::host::{FrameCallback, FrameId, Host, Listener, ListenerId, ListenerKind};
use crate::surface::Surface;

/// One recorded drawing call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    BackingSize(u32, u32),
    DisplaySize(f64, f64),
    Scale(f64),
    Clear(f64, f64),
    FillRect(f64, f64, String),
    Circle(Point, f64, Rgba),
}

/// Surface that records every call into a shared log.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub calls: Rc<RefCell<Vec<DrawCall>>>,
    pub fail_circles: Rc<Cell<bool>>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&self) -> Vec<DrawCall> {
        std::mem::take(&mut *self.calls.borrow_mut())
    }

    pub fn circles(&self) -> Vec<(Point, f64, Rgba)> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                DrawCall::Circle(p, r, color) => Some((*p, *r, *color)),
                _ => None,
            })
            .collect()
    }

    fn push(&self, call: DrawCall) {
        self.calls.borrow_mut().push(call);
    }
}

impl Surface for RecordingSurface {
    fn set_backing_size(&mut self, width: u32, height: u32) {
        self.push(DrawCall::BackingSize(width, height));
    }

    fn set_display_size(&mut self, width: f64, height: f64) -> Result<(), DotFieldError> {
        self.push(DrawCall::DisplaySize(width, height));
        Ok(())
    }

    fn set_scale(&mut self, scale: f64) -> Result<(), DotFieldError> {
        self.push(DrawCall::Scale(scale));
        Ok(())
    }

    fn clear(&mut self, width: f64, height: f64) {
        self.push(DrawCall::Clear(width, height));
    }

    fn fill_rect(&mut self, width: f64, height: f64, color: &str) {
        self.push(DrawCall::FillRect(width, height, color.to_owned()));
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba) -> Result<(), DotFieldError> {
        if self.fail_circles.get() {
            return Err(DotFieldError::Js("arc rejected".into()));
        }
        self.push(DrawCall::Circle(center, radius, color));
        Ok(())
    }
}

/// Host whose frames and events are pumped by hand.
pub struct FakeHost {
    pub viewport: Cell<(f64, f64)>,
    pub dpr: Cell<Option<f64>>,
    pub surface_available: Cell<bool>,
    pub refuse_frames: Cell<bool>,
    pub surface: RecordingSurface,
    frames: RefCell<BTreeMap<i32, FrameCallback>>,
    next_frame: Cell<i32>,
    cancelled: RefCell<Vec<FrameId>>,
    listeners: RefCell<BTreeMap<u32, Listener>>,
    next_listener: Cell<u32>,
}

impl FakeHost {
    pub fn new(width: f64, height: f64, dpr: Option<f64>) -> Self {
        Self {
            viewport: Cell::new((width, height)),
            dpr: Cell::new(dpr),
            surface_available: Cell::new(true),
            refuse_frames: Cell::new(false),
            surface: RecordingSurface::new(),
            frames: RefCell::new(BTreeMap::new()),
            next_frame: Cell::new(1),
            cancelled: RefCell::new(Vec::new()),
            listeners: RefCell::new(BTreeMap::new()),
            next_listener: Cell::new(1),
        }
    }

    /// Run every frame callback queued so far. Returns how many ran.
    pub fn pump_frame(&self) -> usize {
        let due = std::mem::take(&mut *self.frames.borrow_mut());
        let count = due.len();
        for (_, callback) in due {
            callback();
        }
        count
    }

    pub fn pending_frames(&self) -> usize {
        self.frames.borrow().len()
    }

    pub fn cancelled(&self) -> Vec<FrameId> {
        self.cancelled.borrow().clone()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    pub fn listener_kinds(&self) -> Vec<ListenerKind> {
        self.listeners.borrow().values().map(Listener::kind).collect()
    }

    /// Change the viewport and fire every resize listener.
    pub fn resize_to(&self, width: f64, height: f64) {
        self.viewport.set((width, height));
        let ids: Vec<u32> = self.listeners.borrow().keys().copied().collect();
        for id in ids {
            let listener = self.listeners.borrow_mut().remove(&id);
            if let Some(mut listener) = listener {
                if let Listener::Resize(handler) = &mut listener {
                    handler();
                }
                self.listeners.borrow_mut().insert(id, listener);
            }
        }
    }

    /// Fire every pointer-move listener.
    pub fn move_pointer(&self, x: f64, y: f64) {
        let ids: Vec<u32> = self.listeners.borrow().keys().copied().collect();
        for id in ids {
            let listener = self.listeners.borrow_mut().remove(&id);
            if let Some(mut listener) = listener {
                if let Listener::PointerMove(handler) = &mut listener {
                    handler(Point::new(x, y));
                }
                self.listeners.borrow_mut().insert(id, listener);
            }
        }
    }
}

impl Host for FakeHost {
    type Surface = RecordingSurface;

    fn viewport_size(&self) -> (f64, f64) {
        self.viewport.get()
    }

    fn device_pixel_ratio(&self) -> Option<f64> {
        self.dpr.get()
    }

    fn surface(&self) -> Option<RecordingSurface> {
        self.surface_available.get().then(|| self.surface.clone())
    }

    fn request_frame(&self, callback: FrameCallback) -> Result<FrameId, DotFieldError> {
        if self.refuse_frames.get() {
            return Err(DotFieldError::refused("frame", "refused by test host"));
        }
        let id = self.next_frame.get();
        self.next_frame.set(id + 1);
        self.frames.borrow_mut().insert(id, callback);
        Ok(FrameId(id))
    }

    fn cancel_frame(&self, id: FrameId) {
        self.frames.borrow_mut().remove(&id.0);
        self.cancelled.borrow_mut().push(id);
    }

    fn listen(&self, listener: Listener) -> Result<ListenerId, DotFieldError> {
        let id = self.next_listener.get();
        self.next_listener.set(id + 1);
        self.listeners.borrow_mut().insert(id, listener);
        Ok(ListenerId(id))
    }

    fn unlisten(&self, id: ListenerId) {
        self.listeners.borrow_mut().remove(&id.0);
    }
}
