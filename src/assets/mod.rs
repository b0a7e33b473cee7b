//! # Assets Module
//!
//! Browser asset management for the upload widget.
//!
//! ## Overview
//!
//! The widget needs a set of JavaScript/CSS files injected into the page
//! before it can render. Assets come in two groups:
//!
//! - **basic** - the widget core, needed wherever the widget appears
//! - **backend** - the bridge that wires the widget into the admin UI
//!
//! The listener requests inclusion of the union of both groups when a form
//! contains at least one widget field. Inclusion is set-like: including the
//! same asset twice is harmless, so callers never need to deduplicate.
//!
//! [`AssetCatalog`] is the default [`AssetsManager`]; it picks minified or
//! plain variants based on [`RuntimeConfig`](crate::runtime_config::RuntimeConfig)
//! and records what has been included for the page renderer to pick up.

mod core;

pub use core::{AssetCatalog, AssetKind, AssetRef, AssetsManager};
