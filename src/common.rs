//! Geometry helpers shared across layout strategies.
//!
//! Everything here is a pure function over owned or borrowed state: resolving
//! option sizing against the measured container, deriving column counts and
//! widths, dealing images into buckets, cover-scaling a draw box inside a
//! container, and picking the cheapest source rendition that still covers it.
//! The column strategy composes these; a future rows/grid strategy would too.

#[cfg(test)]
#[path = "common_test.rs"]
mod common_test;

use std::collections::HashMap;

use rand::seq::SliceRandom;

use crate::consts::AUTO_COLUMN_WIDTH_PX;
use crate::gallery::{GalleryImage, ImageId};
use crate::options::{ColumnCount, Options, Sizing, Viewport};

/// A column bucket: the ids dealt into it, in top-to-bottom order.
pub type Column = Vec<ImageId>;

/// Container box of one image during a layout pass.
///
/// Owned by the pass itself; gallery descriptors are never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizedBox {
    /// Container width in pixels.
    pub width: i64,
    /// Container height in pixels. May go non-positive in degenerate
    /// configurations; the strategy's error checks catch that.
    pub height: i64,
}

/// Cover-scaled draw box centered within a container box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropWindow {
    /// Draw width in pixels (≥ container width when cropping).
    pub draw_width: i64,
    /// Draw height in pixels (≥ container height when cropping).
    pub draw_height: i64,
    /// Horizontal shift of the draw box (≤ 0).
    pub offset_x: i64,
    /// Vertical shift of the draw box (≤ 0).
    pub offset_y: i64,
}

/// Resolve the width option against the measured container.
///
/// `auto` and `0` mean "fill the container"; percent is a fraction of the
/// container. The result may be zero when the container itself measures
/// zero — the strategy's width check handles that.
#[must_use]
pub fn resolve_width(sizing: Sizing, viewport: &Viewport) -> i64 {
    let container = viewport.container_width.floor() as i64;
    match sizing {
        Sizing::Auto | Sizing::Px(0) => container,
        Sizing::Px(px) => i64::from(px),
        Sizing::Percent(fraction) => (viewport.container_width * fraction).floor() as i64,
    }
}

/// Resolve the height option to an explicit target, if there is one.
///
/// `auto` (and percent, which has no meaning for height) leaves the target
/// to be derived from the column heights.
#[must_use]
pub fn resolve_height(sizing: Sizing) -> Option<i64> {
    match sizing {
        Sizing::Auto | Sizing::Px(0) | Sizing::Percent(_) => None,
        Sizing::Px(px) => Some(i64::from(px)),
    }
}

/// Determine the number of column buckets for this pass.
///
/// Breakpoints win over the configured count; the narrowest matching
/// breakpoint applies. An automatic count is derived from the mosaic width.
/// The result is always clamped to `1..=image_count` (1 when the gallery is
/// empty).
#[must_use]
pub fn column_count(options: &Options, mosaic_width: i64, image_count: usize) -> usize {
    let configured = options
        .breakpoints
        .iter()
        .filter(|bp| mosaic_width <= i64::from(bp.max_width))
        .min_by_key(|bp| bp.max_width)
        .map(|bp| i64::from(bp.columns))
        .unwrap_or(match options.columns {
            ColumnCount::Fixed(count) => i64::from(count),
            ColumnCount::Auto => mosaic_width / AUTO_COLUMN_WIDTH_PX,
        });

    let ceiling = image_count.max(1) as i64;
    configured.clamp(1, ceiling) as usize
}

/// The shared width of every column:
/// `floor((mosaic_width - padding * (count - 1)) / count)`.
#[must_use]
pub fn column_width(count: usize, mosaic_width: i64, padding: i64) -> i64 {
    let count = count.max(1) as i64;
    (mosaic_width - padding * (count - 1)) / count
}

/// Deal images into `count` buckets round-robin, in working order.
///
/// Every id lands in exactly one bucket.
#[must_use]
pub fn deal_into_columns(order: &[ImageId], count: usize) -> Vec<Column> {
    let count = count.max(1);
    let mut columns: Vec<Column> = vec![Vec::new(); count];
    for (i, id) in order.iter().enumerate() {
        columns[i % count].push(id.clone());
    }
    columns
}

/// Aggregate height of one column: the sum of its container heights plus
/// `padding` between neighbors.
#[must_use]
pub fn column_height(ids: &[ImageId], boxes: &HashMap<ImageId, SizedBox>, padding: i64) -> i64 {
    if ids.is_empty() {
        return 0;
    }
    let images: i64 = ids
        .iter()
        .map(|id| boxes.get(id).map_or(0, |b| b.height))
        .sum();
    images + padding * (ids.len() as i64 - 1)
}

/// Compute the draw box for an image inside its container.
///
/// With crop prevention the draw box is the container box and nothing is
/// shifted. Otherwise the image is scaled to cover the container while
/// preserving its aspect ratio, and centered by shifting the overflow half
/// off each edge.
#[must_use]
pub fn cover_window(image: &GalleryImage, container: SizedBox, prevent_crop: bool) -> CropWindow {
    let flush = CropWindow {
        draw_width: container.width,
        draw_height: container.height,
        offset_x: 0,
        offset_y: 0,
    };

    if prevent_crop || image.width == 0 || image.height == 0 {
        return flush;
    }
    if container.width <= 0 || container.height <= 0 {
        return flush;
    }

    let scale_x = container.width as f64 / f64::from(image.width);
    let scale_y = container.height as f64 / f64::from(image.height);
    let scale = scale_x.max(scale_y);

    let draw_width = (f64::from(image.width) * scale).ceil() as i64;
    let draw_height = (f64::from(image.height) * scale).ceil() as i64;

    CropWindow {
        draw_width: draw_width.max(container.width),
        draw_height: draw_height.max(container.height),
        offset_x: -((draw_width - container.width).max(0) / 2),
        offset_y: -((draw_height - container.height).max(0) / 2),
    }
}

/// Pick the source the host should load for a container box.
///
/// Chooses the smallest named rendition whose natural dimensions cover the
/// container (scaled by the device pixel ratio when honored), falling back to
/// the largest rendition, and finally to the full-size `src` when the image
/// has no named sizes. Returns the URL and the chosen size name, if any.
#[must_use]
pub fn pick_source(
    image: &GalleryImage,
    container: SizedBox,
    dpr: f64,
    honor_dpr: bool,
) -> (String, Option<String>) {
    let factor = if honor_dpr { dpr.max(1.0) } else { 1.0 };
    let need_width = (container.width.max(0) as f64 * factor).ceil() as u64;
    let need_height = (container.height.max(0) as f64 * factor).ceil() as u64;

    let covering = image
        .sizes
        .iter()
        .filter(|(_, s)| u64::from(s.width) >= need_width && u64::from(s.height) >= need_height)
        .min_by_key(|(_, s)| u64::from(s.width) * u64::from(s.height));

    let chosen = covering.or_else(|| {
        image
            .sizes
            .iter()
            .max_by_key(|(_, s)| u64::from(s.width) * u64::from(s.height))
    });

    match chosen {
        Some((name, size)) => (size.url.clone(), Some(name.clone())),
        None => (image.src.clone(), None),
    }
}

/// Shuffle the working order in place (Fisher–Yates).
pub fn randomize(order: &mut [ImageId]) {
    order.shuffle(&mut rand::rng());
}
