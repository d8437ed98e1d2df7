//! Shared host-bundle models for browser and headless runtime composition.

use std::{fmt, rc::Rc};

use crate::{
    ColorSchemeSource, NoopColorSchemeSource, NoopPrefsStore, NoopThemeSurface, PrefsStore,
    ThemeSurface,
};

/// Stable host strategy selected for the current build/runtime composition path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Browser-backed runtime composition.
    Browser,
    /// Composition with no presentation runtime (server rendering, native tests).
    Headless,
}

impl HostStrategy {
    /// Returns a stable string token for diagnostics and runtime inspection.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Headless => "headless",
        }
    }
}

/// Runtime-selected host service bundle injected into the theme runtime.
///
/// All environment-specific service selection happens before this bundle crosses into
/// `theme_runtime`, which keeps the controller decoupled from browser adapter details.
#[derive(Clone)]
pub struct HostServices {
    /// Lightweight preference store holding the persisted theme record.
    pub prefs: Rc<dyn PrefsStore>,
    /// System color-scheme query and change notifications.
    pub color_scheme: Rc<dyn ColorSchemeSource>,
    /// Root presentation node receiving class markers and custom properties.
    pub surface: Rc<dyn ThemeSurface>,
    /// Stable strategy identifier for diagnostics.
    pub host_strategy: HostStrategy,
}

impl HostServices {
    /// Bundles explicit service implementations under the given strategy.
    pub fn new(
        prefs: Rc<dyn PrefsStore>,
        color_scheme: Rc<dyn ColorSchemeSource>,
        surface: Rc<dyn ThemeSurface>,
        host_strategy: HostStrategy,
    ) -> Self {
        Self {
            prefs,
            color_scheme,
            surface,
            host_strategy,
        }
    }

    /// Bundle of no-op services for contexts without a presentation runtime.
    pub fn headless() -> Self {
        Self::new(
            Rc::new(NoopPrefsStore),
            Rc::new(NoopColorSchemeSource),
            Rc::new(NoopThemeSurface),
            HostStrategy::Headless,
        )
    }
}

impl fmt::Debug for HostServices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostServices")
            .field("host_strategy", &self.host_strategy)
            .finish_non_exhaustive()
    }
}
