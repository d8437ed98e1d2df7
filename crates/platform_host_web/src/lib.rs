//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! This crate is the concrete browser-side wiring layer for the theme runtime's three host
//! services:
//! - `storage::local_prefs`: `window.localStorage`
//! - `color_scheme`: `matchMedia("(prefers-color-scheme: dark)")` and its `change` events
//! - `surface`: class markers and custom properties on `document.documentElement`
//!
//! On non-wasm targets every adapter degrades to the behavior of the `platform_host` no-op
//! services, so native tests and server-side rendering never touch browser globals.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and concrete adapter factories for runtime wiring.
pub mod adapters;
pub mod color_scheme;
pub mod storage;
pub mod surface;

pub use adapters::{
    build_host_services, color_scheme_source, host_strategy_name, prefs_store,
    selected_host_strategy, theme_surface, ColorSchemeSourceAdapter, PrefsStoreAdapter,
    ThemeSurfaceAdapter,
};
pub use color_scheme::WebColorSchemeSource;
pub use storage::local_prefs::WebPrefsStore;
pub use surface::WebThemeSurface;
