#![feature(int_roundings)]
//! Masonry / column mosaic layout engine for image galleries.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! geometry of the mosaic: scaling gallery images to column widths, dealing
//! them into column buckets, converging every column on a shared bottom edge,
//! and picking the cheapest image source that still covers each container.
//! The host layer is responsible only for measuring the DOM container,
//! feeding in gallery and option data, and painting the resulting
//! [`layout::LayoutResult`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine state and operations ([`engine::EngineCore`]) |
//! | [`gallery`] | Image descriptors and the in-memory gallery store |
//! | [`options`] | Option keys, sizing strategies, and sparse updates |
//! | [`columns`] | The column layout strategy: scale, deal, adjust, balance |
//! | [`common`] | Geometry helpers shared across layout strategies |
//! | [`layout`] | Layout results, per-image placements, and fault reporting |
//! | [`consts`] | Shared numeric constants (minimum heights, fallbacks) |
//! | [`web`] | Browser bindings (behind the `web` feature) |

pub mod columns;
pub mod common;
pub mod consts;
pub mod engine;
pub mod gallery;
pub mod layout;
pub mod options;
#[cfg(feature = "web")]
pub mod web;
