//! Option model: sizing strategies, ordering, breakpoints, and sparse updates.
//!
//! This module defines the option keys consumed by the layout strategies.
//! `Options` carries the full set with host-facing defaults; `PartialOptions`
//! is the only-present-fields update applied by the `update` operation.
//! `Viewport` is the measured state of the DOM container the host feeds in.

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Width/height sizing strategy for the mosaic.
///
/// On the wire this is `"auto"`, a pixel number (`0` means auto), or a
/// percent string such as `"50%"`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sizing {
    /// Fill the measured container.
    Auto,
    /// Absolute pixel value.
    Px(u32),
    /// Fraction of the measured container (`1.0` = 100%).
    Percent(f64),
}

impl Sizing {
    fn from_json(raw: &serde_json::Value) -> Result<Self, String> {
        match raw {
            serde_json::Value::Number(n) => {
                let px = n
                    .as_u64()
                    .ok_or_else(|| format!("sizing must be a non-negative integer, got {n}"))?;
                if px == 0 {
                    Ok(Self::Auto)
                } else {
                    Ok(Self::Px(px as u32))
                }
            }
            serde_json::Value::String(s) if s == "auto" => Ok(Self::Auto),
            serde_json::Value::String(s) => {
                let digits = s.trim_end_matches('%');
                if digits.len() == s.len() {
                    return Err(format!("unrecognized sizing value: {s:?}"));
                }
                let pct: f64 = digits
                    .trim()
                    .parse()
                    .map_err(|_| format!("unrecognized sizing value: {s:?}"))?;
                Ok(Self::Percent(pct / 100.0))
            }
            other => Err(format!("unrecognized sizing value: {other}")),
        }
    }
}

impl Serialize for Sizing {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Auto => serializer.serialize_str("auto"),
            Self::Px(px) => serializer.serialize_u32(*px),
            Self::Percent(fraction) => serializer.serialize_str(&format!("{}%", fraction * 100.0)),
        }
    }
}

impl<'de> Deserialize<'de> for Sizing {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = serde_json::Value::deserialize(deserializer)?;
        Self::from_json(&raw).map_err(D::Error::custom)
    }
}

/// Column count strategy.
///
/// On the wire this is `"auto"` or a column count (`0` means auto).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnCount {
    /// Derive the count from the resolved mosaic width.
    Auto,
    /// Exactly this many columns (clamped to the image count).
    Fixed(u32),
}

impl ColumnCount {
    fn from_json(raw: &serde_json::Value) -> Result<Self, String> {
        match raw {
            serde_json::Value::Number(n) => {
                let count = n
                    .as_u64()
                    .ok_or_else(|| format!("columns must be a non-negative integer, got {n}"))?;
                if count == 0 {
                    Ok(Self::Auto)
                } else {
                    Ok(Self::Fixed(count as u32))
                }
            }
            serde_json::Value::String(s) if s == "auto" => Ok(Self::Auto),
            other => Err(format!("unrecognized columns value: {other}")),
        }
    }
}

impl Serialize for ColumnCount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Auto => serializer.serialize_str("auto"),
            Self::Fixed(count) => serializer.serialize_u32(*count),
        }
    }
}

impl<'de> Deserialize<'de> for ColumnCount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = serde_json::Value::deserialize(deserializer)?;
        Self::from_json(&raw).map_err(D::Error::custom)
    }
}

/// Image ordering strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Order {
    /// Keep the gallery order as given by the host.
    #[default]
    Gallery,
    /// Shuffle once per gallery load or `order` update; refreshes keep the
    /// same shuffle.
    Random,
}

/// Responsive override: when the resolved mosaic width is at or below
/// `max_width`, use `columns` instead of the configured count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakpoint {
    /// Inclusive mosaic-width threshold in pixels.
    pub max_width: u32,
    /// Column count to use at or below the threshold.
    pub columns: u32,
}

/// Active layout strategy.
///
/// Rows and grid variants existed upstream but are not part of the active
/// build; columns is the only strategy shipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    /// Masonry columns with a converged bottom edge.
    #[default]
    Columns,
}

/// Full option set with host-facing defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Active layout strategy.
    pub layout: LayoutMode,
    /// Mosaic width strategy.
    pub width: Sizing,
    /// Mosaic height strategy. Percent has no meaning for height and is
    /// treated as auto.
    pub height: Sizing,
    /// Column count strategy.
    pub columns: ColumnCount,
    /// Responsive column-count overrides, checked against the resolved width.
    pub breakpoints: Vec<Breakpoint>,
    /// Gap between images and between columns, in pixels.
    pub padding: u32,
    /// Never trim image content; column heights are allowed to vary.
    pub prevent_crop: bool,
    /// Image ordering strategy.
    pub order: Order,
    /// Multiply container dimensions by the device pixel ratio when picking
    /// an image source.
    pub honor_device_pixel_ratio: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            layout: LayoutMode::Columns,
            width: Sizing::Auto,
            height: Sizing::Auto,
            columns: ColumnCount::Auto,
            breakpoints: Vec::new(),
            padding: 2,
            prevent_crop: false,
            order: Order::Gallery,
            honor_device_pixel_ratio: false,
        }
    }
}

/// Sparse update for the option set. Only present fields are applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialOptions {
    /// New layout strategy, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<LayoutMode>,
    /// New width strategy, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<Sizing>,
    /// New height strategy, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<Sizing>,
    /// New column count strategy, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<ColumnCount>,
    /// New breakpoint set, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakpoints: Option<Vec<Breakpoint>>,
    /// New padding, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<u32>,
    /// New crop-prevention flag, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prevent_crop: Option<bool>,
    /// New ordering strategy, if being updated. Applying this re-derives the
    /// working order from the original gallery order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<Order>,
    /// New device-pixel-ratio flag, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub honor_device_pixel_ratio: Option<bool>,
}

/// Measured state of the DOM container, fed in by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Container width in CSS pixels.
    pub container_width: f64,
    /// Device pixel ratio reported by the window.
    pub dpr: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { container_width: 0.0, dpr: 1.0 }
    }
}
