//! Layout results, per-image placements, and fault reporting.
//!
//! A layout pass produces a [`LayoutResult`] for the host renderer: overall
//! mosaic dimensions, one [`PlacedImage`] per gallery image, and a
//! `force_hidden` flag for the degenerate-but-recoverable cases. Truly
//! unrenderable configurations surface as a [`LayoutFault`] instead; the
//! engine logs the fault and tells the host to hide the mosaic entirely.

use serde::{Deserialize, Serialize};

use crate::gallery::ImageId;

/// Non-fatal degradations detected during a layout pass.
///
/// Faults never panic and never propagate past the engine; they are logged
/// through the `log` facade and collapse to either a hidden-but-present
/// layout or no layout at all.
#[derive(Debug, thiserror::Error)]
pub enum LayoutFault {
    /// The container measured zero wide, so a mosaic width could not be
    /// resolved. A fallback-width layout is produced and flagged hidden.
    #[error("the mosaic container has no width (width = 0); make sure it isn't hidden")]
    ZeroWidth,
    /// Height adjustment squeezed an image below the minimum renderable
    /// height; the columns are re-balanced to recover.
    #[error("the mosaic height doesn't allow images to be proportioned by their aspect ratios")]
    AspectSqueeze,
    /// Even after balancing, an image height is not positive. The mosaic is
    /// hidden rather than rendered corrupt.
    #[error("the mosaic has been hidden: its height is too small for the current settings")]
    Unrenderable,
}

/// One laid-out image, in mosaic coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedImage {
    /// Gallery id of the image.
    pub id: ImageId,
    /// Index of the column bucket this image was dealt into.
    pub column: usize,
    /// Left edge of the container box within the mosaic, in pixels.
    pub x: i64,
    /// Top edge of the container box within the mosaic, in pixels.
    pub y: i64,
    /// Container (visible) width in pixels; the column width.
    pub width: i64,
    /// Container (visible) height in pixels after adjustment/balancing.
    pub height: i64,
    /// Cover-scaled draw width in pixels; equals `width` under crop
    /// prevention.
    pub draw_width: i64,
    /// Cover-scaled draw height in pixels; equals `height` under crop
    /// prevention.
    pub draw_height: i64,
    /// Horizontal shift of the draw box within the container (≤ 0).
    pub offset_x: i64,
    /// Vertical shift of the draw box within the container (≤ 0).
    pub offset_y: i64,
    /// URL the host should load for this container.
    pub src: String,
    /// Name of the chosen rendition, if a named size was picked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
}

/// The outcome of a layout pass, consumed by the host renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutResult {
    /// Overall mosaic width in pixels.
    pub width: i64,
    /// Overall mosaic height in pixels.
    pub height: i64,
    /// Every gallery image, placed exactly once.
    pub images: Vec<PlacedImage>,
    /// The host should render the nodes but keep the mosaic invisible
    /// (`display: none`); set when the container had no measurable width.
    pub force_hidden: bool,
}
