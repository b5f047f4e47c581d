//! Top-level engine state and operations.
//!
//! `EngineCore` owns everything a layout pass needs: the gallery store, the
//! original and working image orders, the option set, and the measured
//! viewport. It has no browser dependencies so it can be tested natively;
//! the `web` feature wraps it with DOM measurement and JSON plumbing.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use crate::columns;
use crate::common;
use crate::gallery::{GalleryImage, GalleryStore, ImageId};
use crate::layout::LayoutResult;
use crate::options::{LayoutMode, Options, Order, PartialOptions, Viewport};

/// Core engine state — all logic that doesn't depend on the DOM.
pub struct EngineCore {
    /// Image descriptors, keyed by id.
    pub gallery: GalleryStore,
    /// Full option set.
    pub options: Options,
    /// Measured container state fed in by the host.
    pub viewport: Viewport,
    /// Gallery order as given by the host; the reference for re-ordering.
    original_order: Vec<ImageId>,
    /// Current working order; a permutation of `original_order`.
    order: Vec<ImageId>,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::with_options(Options::default())
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with the given options and an empty gallery.
    #[must_use]
    pub fn with_options(options: Options) -> Self {
        Self {
            gallery: GalleryStore::new(),
            options,
            viewport: Viewport::default(),
            original_order: Vec::new(),
            order: Vec::new(),
        }
    }

    // --- Data inputs ---

    /// Hydrate or replace the gallery, capturing the original order and
    /// applying the configured ordering strategy.
    pub fn load_gallery(&mut self, images: Vec<GalleryImage>) {
        self.original_order = images.iter().map(|image| image.id.clone()).collect();
        self.gallery.load(images);
        self.reorder();
    }

    /// Record the measured DOM container width and device pixel ratio.
    pub fn set_viewport(&mut self, container_width: f64, dpr: f64) {
        self.viewport = Viewport { container_width, dpr };
    }

    /// Merge a sparse option update.
    ///
    /// An `order` change re-derives the working order from the original
    /// gallery order (and re-shuffles when random). Everything else is a
    /// plain field replacement picked up by the next layout pass.
    pub fn update(&mut self, partial: &PartialOptions) {
        if let Some(layout) = partial.layout {
            self.options.layout = layout;
        }
        if let Some(width) = partial.width {
            self.options.width = width;
        }
        if let Some(height) = partial.height {
            self.options.height = height;
        }
        if let Some(columns) = partial.columns {
            self.options.columns = columns;
        }
        if let Some(ref breakpoints) = partial.breakpoints {
            self.options.breakpoints = breakpoints.clone();
        }
        if let Some(padding) = partial.padding {
            self.options.padding = padding;
        }
        if let Some(prevent_crop) = partial.prevent_crop {
            self.options.prevent_crop = prevent_crop;
        }
        if let Some(honor) = partial.honor_device_pixel_ratio {
            self.options.honor_device_pixel_ratio = honor;
        }
        if let Some(order) = partial.order {
            self.options.order = order;
            self.reorder();
        }
    }

    // --- Layout ---

    /// Run a layout pass for the current state.
    ///
    /// Returns `None` when the configuration is unrenderable and the mosaic
    /// must be hidden; the fault is logged. Never re-shuffles a random order
    /// — ordering only changes on gallery load or an `order` update.
    pub fn layout(&mut self) -> Option<LayoutResult> {
        let outcome = match self.options.layout {
            LayoutMode::Columns => {
                columns::compute(&self.gallery, &self.order, &self.options, &self.viewport)
            }
        };

        match outcome {
            Ok(result) => Some(result),
            Err(fault) => {
                log::error!("{fault}");
                None
            }
        }
    }

    /// Recompute from scratch (window resize); identical inputs give an
    /// identical layout.
    pub fn refresh(&mut self) -> Option<LayoutResult> {
        self.layout()
    }

    // --- Queries ---

    /// The current working order.
    #[must_use]
    pub fn order(&self) -> &[ImageId] {
        &self.order
    }

    /// The gallery order as originally given by the host.
    #[must_use]
    pub fn original_order(&self) -> &[ImageId] {
        &self.original_order
    }

    // --- Internals ---

    /// Re-derive the working order from the original order per the
    /// configured strategy.
    fn reorder(&mut self) {
        self.order = self.original_order.clone();
        if self.options.order == Order::Random {
            common::randomize(&mut self.order);
        }
    }
}
