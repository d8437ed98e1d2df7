//! Typed host-domain contracts shared by the theme runtime and browser adapters.
//!
//! This crate is the API-first boundary for the platform services the theme runtime touches:
//! the lightweight preference store, the system color-scheme source, and the presentation
//! surface on the document root. Concrete browser adapters live in `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod color_scheme;
pub mod host;
pub mod storage;
pub mod surface;

pub use color_scheme::{
    ColorSchemeListener, ColorSchemeSource, ColorSchemeSubscription, MemoryColorSchemeSource,
    NoopColorSchemeSource, PREFERS_DARK_MEDIA_QUERY,
};
pub use host::{HostServices, HostStrategy};
pub use storage::prefs::{MemoryPrefsStore, NoopPrefsStore, PrefsStore};
pub use surface::{MemoryThemeSurface, NoopThemeSurface, SurfaceOperation, ThemeSurface};
