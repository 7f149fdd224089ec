//! The embedding environment as seen by the widget.
//!
//! A [`Host`] answers "how big is the viewport", hands out the drawing
//! surface, schedules one-shot frame callbacks, and manages event listeners.
//! The browser implementation is [`crate::web::WebHost`]. Everything runs on
//! one thread, so callbacks are plain `FnOnce`/`FnMut` without `Send`.

use crate::error::DotFieldError;
use crate::geom::Point;
use crate::surface::Surface;

/// One-shot callback run on the next display refresh.
pub type FrameCallback = Box<dyn FnOnce()>;

/// Handle for a pending frame request, used to withdraw it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameId(pub i32);

/// Handle for a registered listener, used to unsubscribe it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenerId(pub u32);

/// An event subscription.
pub enum Listener {
    /// The viewport changed size; re-read [`Host::viewport_size`].
    Resize(Box<dyn FnMut()>),
    /// The pointer moved to a viewport position.
    PointerMove(Box<dyn FnMut(Point)>),
}

/// Which event a [`Listener`] is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerKind {
    Resize,
    PointerMove,
}

impl Listener {
    #[must_use]
    pub fn kind(&self) -> ListenerKind {
        match self {
            Self::Resize(_) => ListenerKind::Resize,
            Self::PointerMove(_) => ListenerKind::PointerMove,
        }
    }
}

pub trait Host {
    type Surface: Surface;

    /// Logical viewport size in CSS pixels.
    fn viewport_size(&self) -> (f64, f64);

    /// Physical-to-logical pixel ratio, if the host reports one.
    fn device_pixel_ratio(&self) -> Option<f64>;

    /// The drawing surface, or `None` while it is not available.
    fn surface(&self) -> Option<Self::Surface>;

    /// Run `callback` once on the next display refresh.
    ///
    /// # Errors
    ///
    /// Returns an error if the host cannot schedule frames.
    fn request_frame(&self, callback: FrameCallback) -> Result<FrameId, DotFieldError>;

    /// Withdraw a pending frame request. Unknown or already-run ids are ignored.
    fn cancel_frame(&self, id: FrameId);

    /// Subscribe to an event.
    ///
    /// # Errors
    ///
    /// Returns an error if the host cannot register the listener.
    fn listen(&self, listener: Listener) -> Result<ListenerId, DotFieldError>;

    /// Unsubscribe. Unknown ids are ignored.
    fn unlisten(&self, id: ListenerId);
}
