//! Gallery model: image descriptors and the in-memory store.
//!
//! This module defines the data that describes what is in the gallery
//! (`GalleryImage`, `SourceSize`) and the runtime store that owns all live
//! descriptors (`GalleryStore`). Data flows into this layer from the host
//! (JSON deserialization of the gallery array); the layout strategies read
//! from the store by id and never mutate it — all derived geometry lives in
//! the layout pass itself.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

/// Stable identifier for a gallery image, as assigned by the host.
pub type ImageId = String;

/// One pre-generated rendition of an image (e.g. `"thumbnail"`, `"large"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSize {
    /// URL of this rendition.
    pub url: String,
    /// Natural width of this rendition in pixels.
    pub width: u32,
    /// Natural height of this rendition in pixels.
    pub height: u32,
}

/// An image as described by the host gallery array.
///
/// Only natural data lives here. Container dimensions, crop windows, and
/// mosaic positions are computed per layout pass and returned in
/// [`crate::layout::PlacedImage`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryImage {
    /// Unique identifier for this image.
    pub id: ImageId,
    /// URL of the full-size image; fallback when no named size fits.
    pub src: String,
    /// Natural width in pixels.
    pub width: u32,
    /// Natural height in pixels.
    pub height: u32,
    /// Named renditions available for this image, keyed by size name.
    #[serde(default)]
    pub sizes: BTreeMap<String, SourceSize>,
}

/// In-memory store of gallery images, keyed by id.
///
/// Ordering is owned by the engine (original vs. working order); the store is
/// purely the lookup map.
pub struct GalleryStore {
    images: HashMap<ImageId, GalleryImage>,
}

impl GalleryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self { images: HashMap::new() }
    }

    /// Insert or replace an image. If an image with the same `id` already
    /// exists it is overwritten.
    pub fn insert(&mut self, image: GalleryImage) {
        self.images.insert(image.id.clone(), image);
    }

    /// Remove an image by id, returning it if it was present.
    pub fn remove(&mut self, id: &str) -> Option<GalleryImage> {
        self.images.remove(id)
    }

    /// Return a reference to an image by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&GalleryImage> {
        self.images.get(id)
    }

    /// Replace all images with a full gallery snapshot.
    pub fn load(&mut self, images: Vec<GalleryImage>) {
        self.images.clear();
        for image in images {
            self.images.insert(image.id.clone(), image);
        }
    }

    /// Number of images currently in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Returns `true` if the store contains no images.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

impl Default for GalleryStore {
    fn default() -> Self {
        Self::new()
    }
}
