//! `wasm_bindgen` exports for the host page.
//!
//! ```js
//! import init, { InteractiveDots, initLogging } from "./interactive_dots.js";
//! await init();
//! initLogging("debug");
//! const dots = InteractiveDots.mount(canvas, JSON.stringify({ gridSpacing: 24 }));
//! // ...
//! dots.unmount();
//! ```

use std::rc::Rc;

use log::{Level, info, warn};
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use crate::config::DotFieldConfig;
use crate::web::WebHost;
use crate::widget::DotField;

/// Handle to a dot field mounted on a page canvas.
#[wasm_bindgen]
pub struct InteractiveDots {
    field: DotField<WebHost>,
}

#[wasm_bindgen]
impl InteractiveDots {
    /// Mount on `canvas`. `config` is optional camelCase JSON; omitted keys
    /// take their defaults.
    ///
    /// # Errors
    ///
    /// Throws a JS `Error` whose message starts with the error code when the
    /// configuration is invalid or the page has no window.
    pub fn mount(canvas: HtmlCanvasElement, config: Option<String>) -> Result<InteractiveDots, JsValue> {
        let config = DotFieldConfig::from_json(config.as_deref().unwrap_or_default())?;
        let host = Rc::new(WebHost::new(canvas)?);
        let field = DotField::mount(host, &config)?;
        Ok(Self { field })
    }

    /// Stop animating and release every listener. Safe to call twice.
    pub fn unmount(&mut self) {
        self.field.unmount();
    }

    #[wasm_bindgen(js_name = isMounted)]
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.field.is_mounted()
    }

    #[wasm_bindgen(js_name = framesRendered)]
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn frames_rendered(&self) -> f64 {
        self.field.frames_rendered() as f64
    }
}

/// Route `log` output to the browser console and install the panic hook.
///
/// `level` is one of `error`, `warn`, `info`, `debug`, `trace`; anything else
/// falls back to `info`. Calling it again keeps the first logger.
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging(level: Option<String>) {
    console_error_panic_hook::set_once();
    let level = match level.as_deref().map(str::parse::<Level>) {
        Some(Ok(level)) => level,
        _ => Level::Info,
    };
    match console_log::init_with_level(level) {
        Ok(()) => info!("dots: logging at {level}"),
        Err(err) => warn!("dots: logger already installed: {err}"),
    }
}
