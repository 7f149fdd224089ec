//! Browser host: `window` events, `requestAnimationFrame`, and a canvas 2D
//! surface.
//!
//! This module is the only place that touches [`web_sys`]. Every fallible DOM
//! call is converted into [`DotFieldError`] and handled by the widget layer,
//! which logs and carries on rather than throwing into the host page.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::f64::consts::TAU;
use std::rc::Rc;

use log::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use crate::color::Rgba;
use crate::error::{DotFieldError, js_message};
use crate::geom::Point;
use crate::host::{FrameCallback, FrameId, Host, Listener, ListenerId};
use crate::surface::Surface;

// =============================================================
// Surface
// =============================================================

/// A canvas element and its 2D context.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// The canvas's 2D surface, or `None` if the context cannot be obtained.
    #[must_use]
    pub fn from_canvas(canvas: &HtmlCanvasElement) -> Option<Self> {
        let Ok(Some(context)) = canvas.get_context("2d") else {
            return None;
        };
        let Ok(ctx) = context.dyn_into::<CanvasRenderingContext2d>() else {
            return None;
        };
        Some(Self { canvas: canvas.clone(), ctx })
    }
}

impl Surface for CanvasSurface {
    fn set_backing_size(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn set_display_size(&mut self, width: f64, height: f64) -> Result<(), DotFieldError> {
        let style = self.canvas.style();
        style.set_property("width", &format!("{width}px"))?;
        style.set_property("height", &format!("{height}px"))?;
        Ok(())
    }

    fn set_scale(&mut self, scale: f64) -> Result<(), DotFieldError> {
        self.ctx.set_transform(scale, 0.0, 0.0, scale, 0.0, 0.0)?;
        Ok(())
    }

    fn clear(&mut self, width: f64, height: f64) {
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn fill_rect(&mut self, width: f64, height: f64, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(0.0, 0.0, width, height);
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba) -> Result<(), DotFieldError> {
        self.ctx.begin_path();
        self.ctx.arc(center.x, center.y, radius, 0.0, TAU)?;
        self.ctx.set_fill_style_str(&color.to_string());
        self.ctx.fill();
        Ok(())
    }
}

// =============================================================
// Host
// =============================================================

enum WebListener {
    Resize(Closure<dyn FnMut()>),
    PointerMove(Closure<dyn FnMut(MouseEvent)>),
}

impl WebListener {
    fn event_name(&self) -> &'static str {
        match self {
            Self::Resize(_) => "resize",
            Self::PointerMove(_) => "mousemove",
        }
    }

    fn function(&self) -> &js_sys::Function {
        match self {
            Self::Resize(closure) => closure.as_ref().unchecked_ref(),
            Self::PointerMove(closure) => closure.as_ref().unchecked_ref(),
        }
    }
}

/// The browser window plus the canvas the dots are drawn on.
///
/// Pending animation-frame closures and event-listener closures are kept
/// alive here until they run or are withdrawn.
pub struct WebHost {
    window: Window,
    canvas: HtmlCanvasElement,
    frames: Rc<RefCell<HashMap<i32, Closure<dyn FnMut()>>>>,
    listeners: RefCell<HashMap<u32, WebListener>>,
    next_listener: Cell<u32>,
}

impl WebHost {
    /// # Errors
    ///
    /// Returns [`DotFieldError::NoWindow`] outside a browser window.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, DotFieldError> {
        let window = web_sys::window().ok_or(DotFieldError::NoWindow)?;
        Ok(Self {
            window,
            canvas,
            frames: Rc::new(RefCell::new(HashMap::new())),
            listeners: RefCell::new(HashMap::new()),
            next_listener: Cell::new(1),
        })
    }

    fn detach(&self, listener: &WebListener) {
        if let Err(err) = self
            .window
            .remove_event_listener_with_callback(listener.event_name(), listener.function())
        {
            warn!("dots: failed to remove {} listener: {}", listener.event_name(), DotFieldError::from(err));
        }
    }
}

impl Host for WebHost {
    type Surface = CanvasSurface;

    fn viewport_size(&self) -> (f64, f64) {
        let width = match self.window.inner_width() {
            Ok(value) => value.as_f64().unwrap_or(0.0),
            Err(_) => 0.0,
        };
        let height = match self.window.inner_height() {
            Ok(value) => value.as_f64().unwrap_or(0.0),
            Err(_) => 0.0,
        };
        (width, height)
    }

    fn device_pixel_ratio(&self) -> Option<f64> {
        Some(self.window.device_pixel_ratio())
    }

    fn surface(&self) -> Option<CanvasSurface> {
        if !self.canvas.is_connected() {
            return None;
        }
        CanvasSurface::from_canvas(&self.canvas)
    }

    fn request_frame(&self, callback: FrameCallback) -> Result<FrameId, DotFieldError> {
        let slot: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let slot_for_cb = Rc::clone(&slot);
        let frames_for_cb = Rc::clone(&self.frames);
        let closure: Closure<dyn FnMut()> = Closure::once(move || {
            // Release our own closure; wasm-bindgen defers the free until we return.
            if let Some(id) = slot_for_cb.get() {
                frames_for_cb.borrow_mut().remove(&id);
            }
            callback();
        });
        let id = self
            .window
            .request_animation_frame(closure.as_ref().unchecked_ref())
            .map_err(|err| DotFieldError::refused("requestAnimationFrame", js_message(&err)))?;
        slot.set(Some(id));
        self.frames.borrow_mut().insert(id, closure);
        Ok(FrameId(id))
    }

    fn cancel_frame(&self, id: FrameId) {
        if let Err(err) = self.window.cancel_animation_frame(id.0) {
            warn!("dots: cancelAnimationFrame failed: {}", DotFieldError::from(err));
        }
        self.frames.borrow_mut().remove(&id.0);
    }

    fn listen(&self, listener: Listener) -> Result<ListenerId, DotFieldError> {
        let web = match listener {
            Listener::Resize(handler) => WebListener::Resize(Closure::wrap(handler)),
            Listener::PointerMove(mut handler) => {
                WebListener::PointerMove(Closure::wrap(Box::new(move |event: MouseEvent| {
                    handler(Point::new(f64::from(event.client_x()), f64::from(event.client_y())));
                }) as Box<dyn FnMut(MouseEvent)>))
            }
        };
        self.window
            .add_event_listener_with_callback(web.event_name(), web.function())
            .map_err(|err| DotFieldError::refused(web.event_name(), js_message(&err)))?;
        let id = self.next_listener.get();
        self.next_listener.set(id.wrapping_add(1));
        self.listeners.borrow_mut().insert(id, web);
        Ok(ListenerId(id))
    }

    fn unlisten(&self, id: ListenerId) {
        let removed = self.listeners.borrow_mut().remove(&id.0);
        if let Some(listener) = removed {
            self.detach(&listener);
        }
    }
}

impl Drop for WebHost {
    fn drop(&mut self) {
        let listeners: Vec<WebListener> = self.listeners.borrow_mut().drain().map(|(_, l)| l).collect();
        for listener in &listeners {
            self.detach(listener);
        }
        let frames: Vec<i32> = self.frames.borrow().keys().copied().collect();
        for id in frames {
            self.cancel_frame(FrameId(id));
        }
    }
}
