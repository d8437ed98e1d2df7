//! Typed errors raised by the theme runtime.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Errors surfaced to callers of the theme runtime.
pub enum ThemeError {
    /// The preference store rejected the write. In-memory and presentation state were already
    /// updated when this is returned.
    #[error("failed to persist theme preference: {0}")]
    Persist(String),
    /// A theme token other than `light` or `dark`.
    #[error("unknown theme mode `{0}`")]
    UnknownThemeMode(String),
    /// The theme configuration document could not be used.
    #[error("invalid theme configuration: {0}")]
    InvalidConfig(String),
    /// The owning [`ThemeProvider`](crate::ThemeProvider) was unmounted.
    #[error("theme provider has been disposed")]
    ProviderDisposed,
}
