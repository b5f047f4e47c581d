//! The column layout strategy.
//!
//! Scales every image to a shared column width (preserving aspect ratio),
//! deals the working order into column buckets, derives a target mosaic
//! height, then converges every column on that height: pixel-by-pixel
//! round-robin adjustment when cropping is allowed, or an even re-balance
//! with the remainder handed to the leading images when adjustment squeezed
//! an image too far. Degenerate configurations never render corrupt output;
//! they come back flagged hidden or as a [`LayoutFault`].

#[cfg(test)]
#[path = "columns_test.rs"]
mod columns_test;

use std::collections::HashMap;

use crate::common::{self, Column, SizedBox};
use crate::consts::{FALLBACK_WIDTH_PX, MIN_RENDERABLE_HEIGHT_PX};
use crate::gallery::{GalleryStore, ImageId};
use crate::layout::{LayoutFault, LayoutResult, PlacedImage};
use crate::options::{Options, Viewport};

/// Run a full column layout pass.
///
/// `order` is the working order maintained by the engine; every id in it is
/// placed exactly once. Geometry derived during the pass lives in the pass —
/// the gallery store is read-only here.
///
/// # Errors
///
/// Returns [`LayoutFault::Unrenderable`] when no positive image heights can
/// satisfy the configuration; the caller should hide the mosaic.
pub fn compute(
    gallery: &GalleryStore,
    order: &[ImageId],
    options: &Options,
    viewport: &Viewport,
) -> Result<LayoutResult, LayoutFault> {
    let padding = i64::from(options.padding);

    // Lazy-loading needs nodes to attach to, so a zero-width container still
    // produces a layout, just one the host must keep hidden.
    let mut mosaic_width = common::resolve_width(options.width, viewport);
    let mut force_hidden = false;
    if mosaic_width <= 0 {
        log::error!("{}", LayoutFault::ZeroWidth);
        mosaic_width = FALLBACK_WIDTH_PX;
        force_hidden = true;
    }

    if order.is_empty() {
        return Ok(LayoutResult {
            width: mosaic_width,
            height: 0,
            images: Vec::new(),
            force_hidden,
        });
    }

    let count = common::column_count(options, mosaic_width, order.len());
    let col_width = common::column_width(count, mosaic_width, padding);

    let mut boxes = scale_to_width(gallery, order, col_width);
    let columns = common::deal_into_columns(order, count);

    let target = mosaic_height(&columns, &boxes, options, padding);

    if !options.prevent_crop {
        for ids in &columns {
            adjust_column_to_height(ids, &mut boxes, target, padding);
        }
    }

    // Do everything possible to make sure we show SOMETHING.
    if squeezed(order, &boxes) {
        log::error!("{}", LayoutFault::AspectSqueeze);
        if !options.prevent_crop {
            for ids in &columns {
                balance_column_to_height(ids, &mut boxes, target, padding);
            }
        }
    }

    if collapsed(order, &boxes) {
        return Err(LayoutFault::Unrenderable);
    }

    let images = place(gallery, &columns, &boxes, options, viewport, col_width, padding);

    Ok(LayoutResult {
        width: col_width * count as i64 + padding * (count as i64 - 1),
        height: target,
        images,
        force_hidden,
    })
}

/// Scale each image to the column width, preserving its aspect ratio.
///
/// An image with a zero natural width scales to a zero-height box, which the
/// collapse check downstream turns into the hidden outcome.
fn scale_to_width(
    gallery: &GalleryStore,
    order: &[ImageId],
    col_width: i64,
) -> HashMap<ImageId, SizedBox> {
    let mut boxes = HashMap::with_capacity(order.len());
    for id in order {
        let Some(image) = gallery.get(id) else {
            continue;
        };
        let height = if image.width == 0 {
            0
        } else {
            i64::from(image.height) * col_width / i64::from(image.width)
        };
        boxes.insert(id.clone(), SizedBox { width: col_width, height });
    }
    boxes
}

/// Derive the target height for the entire mosaic.
///
/// An explicit height option wins. Otherwise: the tallest column when crop is
/// prevented (nothing may be trimmed to meet a shorter target), else the
/// ceiling of the mean column height.
fn mosaic_height(
    columns: &[Column],
    boxes: &HashMap<ImageId, SizedBox>,
    options: &Options,
    padding: i64,
) -> i64 {
    if let Some(explicit) = common::resolve_height(options.height) {
        return explicit;
    }

    let heights: Vec<i64> = columns
        .iter()
        .map(|ids| common::column_height(ids, boxes, padding))
        .collect();

    if options.prevent_crop {
        heights.iter().copied().max().unwrap_or(0)
    } else {
        let len = heights.len().max(1) as i64;
        heights.iter().sum::<i64>().div_ceil(len)
    }
}

/// Grow or shrink a column's image heights, one pixel at a time in
/// round-robin order, until the column height equals the target exactly.
fn adjust_column_to_height(
    ids: &[ImageId],
    boxes: &mut HashMap<ImageId, SizedBox>,
    target: i64,
    padding: i64,
) {
    if ids.is_empty() {
        return;
    }

    let current = common::column_height(ids, boxes, padding);
    let diff = target - current;
    let step = if diff > 0 { 1 } else { -1 };
    let mut remaining = diff.abs();

    let mut i = 0;
    while remaining > 0 {
        if i >= ids.len() {
            i = 0;
        }
        if let Some(b) = boxes.get_mut(&ids[i]) {
            b.height += step;
        }
        i += 1;
        remaining -= 1;
    }
}

/// Re-balance a column: split the usable height evenly across its images and
/// hand the remainder, one pixel each, to the first `remainder` images.
fn balance_column_to_height(
    ids: &[ImageId],
    boxes: &mut HashMap<ImageId, SizedBox>,
    target: i64,
    padding: i64,
) {
    if ids.is_empty() {
        return;
    }

    let len = ids.len() as i64;
    let usable = target - padding * (len - 1);
    let share = usable.div_euclid(len);
    let remainder = usable.rem_euclid(len);

    for (i, id) in ids.iter().enumerate() {
        if let Some(b) = boxes.get_mut(id) {
            b.height = share + i64::from((i as i64) < remainder);
        }
    }
}

/// Whether any image was squeezed below the minimum renderable height.
fn squeezed(order: &[ImageId], boxes: &HashMap<ImageId, SizedBox>) -> bool {
    order
        .iter()
        .filter_map(|id| boxes.get(id))
        .any(|b| b.height <= MIN_RENDERABLE_HEIGHT_PX)
}

/// Whether any image height collapsed to zero or below.
fn collapsed(order: &[ImageId], boxes: &HashMap<ImageId, SizedBox>) -> bool {
    order
        .iter()
        .filter_map(|id| boxes.get(id))
        .any(|b| b.height <= 0)
}

/// Convert buckets and boxes into per-image placements: mosaic x/y, crop
/// window, and the source the host should load.
fn place(
    gallery: &GalleryStore,
    columns: &[Column],
    boxes: &HashMap<ImageId, SizedBox>,
    options: &Options,
    viewport: &Viewport,
    col_width: i64,
    padding: i64,
) -> Vec<PlacedImage> {
    let mut images = Vec::new();

    for (column, ids) in columns.iter().enumerate() {
        let x = column as i64 * (col_width + padding);
        let mut y = 0;

        for id in ids {
            let Some(image) = gallery.get(id) else {
                continue;
            };
            let Some(container) = boxes.get(id).copied() else {
                continue;
            };

            let crop = common::cover_window(image, container, options.prevent_crop);
            let (src, size) = common::pick_source(
                image,
                container,
                viewport.dpr,
                options.honor_device_pixel_ratio,
            );

            images.push(PlacedImage {
                id: id.clone(),
                column,
                x,
                y,
                width: container.width,
                height: container.height,
                draw_width: crop.draw_width,
                draw_height: crop.draw_height,
                offset_x: crop.offset_x,
                offset_y: crop.offset_y,
                src,
                size,
            });

            y += container.height + padding;
        }
    }

    images
}
