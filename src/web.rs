//! Browser bindings for the engine.
//!
//! This module is the only place that touches the DOM. `Mosaic` wraps
//! [`EngineCore`] with a container element: it measures the element's width
//! and the window's device pixel ratio before each pass, and speaks JSON
//! strings with the host so gallery, options, and results all go through the
//! same serde types as the native tests.

use std::sync::Once;

use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::HtmlElement;

use crate::engine::EngineCore;
use crate::gallery::GalleryImage;
use crate::options::{Options, PartialOptions};

static LOG_INIT: Once = Once::new();

/// Route `log` output to the browser console, once per module instance.
fn init_host_logging() {
    LOG_INIT.call_once(|| {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            // Another initializer won the race; the facade still works.
        }
    });
}

/// The mosaic engine as seen by the host page.
#[wasm_bindgen]
pub struct Mosaic {
    node: HtmlElement,
    core: EngineCore,
}

#[wasm_bindgen]
impl Mosaic {
    /// Create an engine bound to the given container element.
    ///
    /// `gallery_json` is the gallery array; `options_json` is the options
    /// object (pass `"{}"` for defaults).
    ///
    /// # Errors
    ///
    /// Returns a string `JsValue` describing the parse failure when either
    /// payload is malformed.
    #[wasm_bindgen(constructor)]
    pub fn new(node: HtmlElement, gallery_json: &str, options_json: &str) -> Result<Mosaic, JsValue> {
        init_host_logging();

        let images: Vec<GalleryImage> = serde_json::from_str(gallery_json)
            .map_err(|e| JsValue::from_str(&format!("invalid gallery: {e}")))?;
        let options: Options = serde_json::from_str(options_json)
            .map_err(|e| JsValue::from_str(&format!("invalid options: {e}")))?;

        let mut core = EngineCore::with_options(options);
        core.load_gallery(images);

        let mut mosaic = Mosaic { node, core };
        mosaic.measure();
        Ok(mosaic)
    }

    /// Re-measure the container element and window device pixel ratio.
    pub fn measure(&mut self) {
        let dpr = web_sys::window().map_or(1.0, |w| w.device_pixel_ratio());
        self.core.set_viewport(f64::from(self.node.offset_width()), dpr);
    }

    /// Run a layout pass and return the result as a JSON string, or `null`
    /// when the mosaic must be hidden.
    ///
    /// # Errors
    ///
    /// Returns a string `JsValue` when the result cannot be serialized.
    pub fn layout(&mut self) -> Result<JsValue, JsValue> {
        self.measure();
        match self.core.layout() {
            Some(result) => serde_json::to_string(&result)
                .map(|json| JsValue::from_str(&json))
                .map_err(|e| JsValue::from_str(&format!("layout serialization failed: {e}"))),
            None => Ok(JsValue::NULL),
        }
    }

    /// Recompute from scratch; wired to the host's resize handler.
    ///
    /// # Errors
    ///
    /// Same as [`Mosaic::layout`].
    pub fn refresh(&mut self) -> Result<JsValue, JsValue> {
        self.layout()
    }

    /// Apply a sparse options update (JSON object of changed keys only).
    ///
    /// # Errors
    ///
    /// Returns a string `JsValue` when the payload is malformed.
    pub fn update(&mut self, options_json: &str) -> Result<(), JsValue> {
        let partial: PartialOptions = serde_json::from_str(options_json)
            .map_err(|e| JsValue::from_str(&format!("invalid options update: {e}")))?;
        self.core.update(&partial);
        Ok(())
    }

    /// Replace the gallery (JSON array of image descriptors).
    ///
    /// # Errors
    ///
    /// Returns a string `JsValue` when the payload is malformed.
    pub fn load_gallery(&mut self, gallery_json: &str) -> Result<(), JsValue> {
        let images: Vec<GalleryImage> = serde_json::from_str(gallery_json)
            .map_err(|e| JsValue::from_str(&format!("invalid gallery: {e}")))?;
        self.core.load_gallery(images);
        Ok(())
    }
}
