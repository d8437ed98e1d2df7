use std::rc::Rc;

use platform_host::{
    ColorSchemeListener, ColorSchemeSource, ColorSchemeSubscription, HostServices, HostStrategy,
    NoopColorSchemeSource, NoopPrefsStore, NoopThemeSurface, PrefsStore, ThemeSurface,
};

use crate::{WebColorSchemeSource, WebPrefsStore, WebThemeSurface};

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(feature = "headless-host")]
    {
        HostStrategy::Headless
    }

    #[cfg(not(feature = "headless-host"))]
    {
        HostStrategy::Browser
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    selected_host_strategy().as_str()
}

/// Adapter enum that erases the concrete preferences backend behind [`PrefsStore`].
#[derive(Debug, Clone, Copy)]
pub enum PrefsStoreAdapter {
    /// Browser-backed `localStorage` preference storage.
    Browser(WebPrefsStore),
    /// No-op fallback for builds without a presentation runtime.
    Headless(NoopPrefsStore),
}

impl PrefsStore for PrefsStoreAdapter {
    fn load_pref(&self, key: &str) -> Result<Option<String>, String> {
        match self {
            Self::Browser(store) => store.load_pref(key),
            Self::Headless(store) => store.load_pref(key),
        }
    }

    fn save_pref(&self, key: &str, raw: &str) -> Result<(), String> {
        match self {
            Self::Browser(store) => store.save_pref(key, raw),
            Self::Headless(store) => store.save_pref(key, raw),
        }
    }
}

/// Adapter enum that erases the concrete color-scheme backend behind [`ColorSchemeSource`].
#[derive(Debug, Clone, Copy)]
pub enum ColorSchemeSourceAdapter {
    /// Browser `matchMedia` color-scheme source.
    Browser(WebColorSchemeSource),
    /// No-op fallback for builds without a presentation runtime.
    Headless(NoopColorSchemeSource),
}

impl ColorSchemeSource for ColorSchemeSourceAdapter {
    fn prefers_dark(&self) -> Option<bool> {
        match self {
            Self::Browser(source) => source.prefers_dark(),
            Self::Headless(source) => source.prefers_dark(),
        }
    }

    fn subscribe(&self, listener: ColorSchemeListener) -> ColorSchemeSubscription {
        match self {
            Self::Browser(source) => source.subscribe(listener),
            Self::Headless(source) => source.subscribe(listener),
        }
    }
}

/// Adapter enum that erases the concrete root-node backend behind [`ThemeSurface`].
#[derive(Debug, Clone, Copy)]
pub enum ThemeSurfaceAdapter {
    /// Browser `document.documentElement` surface.
    Browser(WebThemeSurface),
    /// No-op fallback for builds without a presentation runtime.
    Headless(NoopThemeSurface),
}

impl ThemeSurface for ThemeSurfaceAdapter {
    fn remove_classes(&self, classes: &[&str]) -> Result<(), String> {
        match self {
            Self::Browser(surface) => surface.remove_classes(classes),
            Self::Headless(surface) => surface.remove_classes(classes),
        }
    }

    fn add_class(&self, class: &str) -> Result<(), String> {
        match self {
            Self::Browser(surface) => surface.add_class(class),
            Self::Headless(surface) => surface.add_class(class),
        }
    }

    fn set_custom_property(&self, name: &str, value: &str) -> Result<(), String> {
        match self {
            Self::Browser(surface) => surface.set_custom_property(name, value),
            Self::Headless(surface) => surface.set_custom_property(name, value),
        }
    }
}

/// Builds the preferences adapter for the compile-time selected host strategy.
pub fn prefs_store() -> PrefsStoreAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => PrefsStoreAdapter::Browser(WebPrefsStore),
        HostStrategy::Headless => PrefsStoreAdapter::Headless(NoopPrefsStore),
    }
}

/// Builds the color-scheme adapter for the compile-time selected host strategy.
pub fn color_scheme_source() -> ColorSchemeSourceAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => ColorSchemeSourceAdapter::Browser(WebColorSchemeSource),
        HostStrategy::Headless => ColorSchemeSourceAdapter::Headless(NoopColorSchemeSource),
    }
}

/// Builds the root-node adapter for the compile-time selected host strategy.
pub fn theme_surface() -> ThemeSurfaceAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => ThemeSurfaceAdapter::Browser(WebThemeSurface),
        HostStrategy::Headless => ThemeSurfaceAdapter::Headless(NoopThemeSurface),
    }
}

/// Assembles the [`HostServices`] bundle injected into the theme runtime.
pub fn build_host_services() -> HostServices {
    HostServices::new(
        Rc::new(prefs_store()),
        Rc::new(color_scheme_source()),
        Rc::new(theme_surface()),
        selected_host_strategy(),
    )
}
