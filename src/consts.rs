//! Shared numeric constants for the mosaic engine.

// ── Degenerate-geometry thresholds ──────────────────────────────

/// Minimum container height in pixels at which an image can still be
/// proportioned by its aspect ratio. Below this the column is re-balanced.
pub const MIN_RENDERABLE_HEIGHT_PX: i64 = 10;

/// Substitute mosaic width in pixels when the container measures zero.
/// Lazy-loading needs nodes to attach to, so a layout is still produced
/// but flagged hidden.
pub const FALLBACK_WIDTH_PX: i64 = 300;

// ── Automatic sizing ────────────────────────────────────────────

/// Ideal column width in pixels used to derive an automatic column count
/// from the resolved mosaic width.
pub const AUTO_COLUMN_WIDTH_PX: i64 = 150;
