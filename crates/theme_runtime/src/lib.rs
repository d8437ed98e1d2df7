//! Light/dark theme preference runtime.
//!
//! [`ThemePreferenceController`] owns the active [`ThemeMode`] for a presentation session. It
//! resolves the mode once at startup (persisted record, then system preference, then the
//! configured default), mirrors every change to the root node and to the preference store, and
//! follows system color-scheme changes while its subscription is held.
//!
//! [`ThemeProvider`] exposes the controller to a Leptos tree as a [`ThemeContext`].

pub mod controller;
pub mod error;
pub mod model;
pub mod palette;
pub mod runtime_context;

pub use controller::{resolve_initial_theme, ThemePreferenceController};
pub use error::ThemeError;
pub use model::{
    ThemeColors, ThemeConfig, ThemeMode, BACKGROUND_PROPERTY, DEFAULT_STORAGE_KEY,
    FOREGROUND_PROPERTY,
};
pub use palette::{palette_color, PaletteColor, PALETTE};
pub use runtime_context::{use_theme, ThemeContext, ThemeProvider};
