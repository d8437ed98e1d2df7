//! Leptos provider and context wiring for the theme controller.
//!
//! [`ThemeProvider`] owns one [`ThemePreferenceController`] per mounted tree and releases its
//! system listener when the provider's owner is cleaned up. Descendants read and change the
//! theme through [`use_theme`].

use std::{cell::RefCell, rc::Rc};

use leptos::*;
use platform_host::HostServices;

use crate::{
    controller::ThemePreferenceController,
    error::ThemeError,
    model::{ThemeConfig, ThemeMode},
};

#[derive(Clone, Copy)]
/// Leptos context exposing the active theme and the operations that change it.
pub struct ThemeContext {
    /// Reactive active theme.
    pub theme: ReadSignal<ThemeMode>,
    /// Derived `theme == Dark` projection.
    pub is_dark: Signal<bool>,
    controller: StoredValue<Rc<RefCell<ThemePreferenceController>>>,
}

impl ThemeContext {
    /// Mirrors a shared controller into reactive signals.
    ///
    /// Must run inside a reactive runtime.
    pub fn new(controller: Rc<RefCell<ThemePreferenceController>>) -> Self {
        let (theme, set_theme) = create_signal(controller.borrow().active_theme());
        controller.borrow().subscribe_changes(move |mode| {
            // The signal may already be disposed if the owner went away first.
            let _ = set_theme.try_set(mode);
        });
        let is_dark = Signal::derive(move || theme.get().is_dark());
        Self {
            theme,
            is_dark,
            controller: store_value(controller),
        }
    }

    /// Makes `mode` the active theme.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Persist`] when the preference write fails, or
    /// [`ThemeError::ProviderDisposed`] after the provider unmounted.
    pub fn set_theme(&self, mode: ThemeMode) -> Result<(), ThemeError> {
        self.controller
            .try_with_value(|controller| controller.borrow().set_theme(mode))
            .unwrap_or(Err(ThemeError::ProviderDisposed))
    }

    /// Switches to the opposite theme.
    ///
    /// # Errors
    ///
    /// Same as [`set_theme`](Self::set_theme).
    pub fn toggle_theme(&self) -> Result<(), ThemeError> {
        self.controller
            .try_with_value(|controller| controller.borrow().toggle_theme())
            .unwrap_or(Err(ThemeError::ProviderDisposed))
    }
}

#[component]
/// Provides [`ThemeContext`] to descendant components and applies the resolved theme.
pub fn ThemeProvider(
    /// Injected browser or headless host bundle assembled by the entry layer.
    host_services: HostServices,
    /// Controller configuration; defaults apply when omitted.
    #[prop(optional)]
    config: Option<ThemeConfig>,
    children: Children,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let config = match config.validate() {
        Ok(()) => config,
        Err(err) => {
            logging::warn!("{err}; falling back to default theme configuration");
            ThemeConfig::default()
        }
    };

    let controller = Rc::new(RefCell::new(ThemePreferenceController::new(
        config,
        &host_services,
    )));
    let context = ThemeContext::new(controller.clone());
    provide_context(context);
    on_cleanup(move || controller.borrow_mut().teardown());

    children()
}

/// Returns the [`ThemeContext`] provided by the nearest [`ThemeProvider`].
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not provided")
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use platform_host::{
        HostStrategy, MemoryColorSchemeSource, MemoryPrefsStore, MemoryThemeSurface,
    };
    use pretty_assertions::assert_eq;

    use super::*;

    fn host(prefs: &MemoryPrefsStore, scheme: &MemoryColorSchemeSource) -> HostServices {
        HostServices::new(
            Rc::new(prefs.clone()),
            Rc::new(scheme.clone()),
            Rc::new(MemoryThemeSurface::default()),
            HostStrategy::Headless,
        )
    }

    #[component]
    fn CaptureTheme(sink: Rc<Cell<Option<ThemeContext>>>) -> impl IntoView {
        sink.set(Some(use_theme()));
    }

    #[test]
    fn context_signals_follow_explicit_and_system_changes() {
        let runtime = create_runtime();
        let prefs = MemoryPrefsStore::default();
        let scheme = MemoryColorSchemeSource::new(false);
        let host = host(&prefs, &scheme);
        let controller = Rc::new(RefCell::new(ThemePreferenceController::new(
            ThemeConfig::default(),
            &host,
        )));
        let context = ThemeContext::new(controller.clone());

        assert_eq!(context.theme.get_untracked(), ThemeMode::Light);
        assert!(!context.is_dark.get_untracked());

        context.toggle_theme().expect("toggle");
        assert_eq!(context.theme.get_untracked(), ThemeMode::Dark);
        assert!(context.is_dark.get_untracked());

        scheme.emit(false);
        assert_eq!(context.theme.get_untracked(), ThemeMode::Light);

        context.set_theme(ThemeMode::Dark).expect("set dark");
        assert_eq!(prefs.get("app-theme"), Some("dark".to_string()));

        controller.borrow_mut().teardown();
        scheme.emit(false);
        assert_eq!(context.theme.get_untracked(), ThemeMode::Dark);

        runtime.dispose();
    }

    #[test]
    fn unmounting_provider_releases_listener_and_disables_context() {
        let runtime = create_runtime();
        let prefs = MemoryPrefsStore::default();
        let scheme = MemoryColorSchemeSource::new(false);
        let captured = Rc::new(Cell::new(None));
        let sink = captured.clone();
        let mount = as_child_of_current_owner(move |host: HostServices| {
            let sink = sink.clone();
            view! {
                <ThemeProvider host_services=host>
                    <CaptureTheme sink=sink.clone() />
                </ThemeProvider>
            }
        });

        let (_view, disposer) = mount(host(&prefs, &scheme));
        let context = captured.get().expect("context captured");
        assert_eq!(scheme.listener_count(), 1);

        scheme.emit(true);
        assert_eq!(context.theme.get_untracked(), ThemeMode::Dark);

        drop(disposer);
        assert_eq!(scheme.listener_count(), 0);

        scheme.emit(false);
        assert_eq!(prefs.get("app-theme"), Some("dark".to_string()));
        assert_eq!(
            context.set_theme(ThemeMode::Light),
            Err(ThemeError::ProviderDisposed)
        );
        assert_eq!(context.toggle_theme(), Err(ThemeError::ProviderDisposed));
        assert_eq!(prefs.get("app-theme"), Some("dark".to_string()));

        runtime.dispose();
    }

    #[test]
    fn blank_storage_key_falls_back_to_default_configuration() {
        let runtime = create_runtime();
        let prefs = MemoryPrefsStore::default();
        let scheme = MemoryColorSchemeSource::new(false);
        let captured = Rc::new(Cell::new(None));
        let sink = captured.clone();
        let mount = as_child_of_current_owner(move |host: HostServices| {
            let sink = sink.clone();
            view! {
                <ThemeProvider
                    host_services=host
                    config=ThemeConfig::default().with_storage_key("  ")
                >
                    <CaptureTheme sink=sink.clone() />
                </ThemeProvider>
            }
        });

        let (_view, disposer) = mount(host(&prefs, &scheme));
        let context = captured.get().expect("context captured");
        context.set_theme(ThemeMode::Dark).expect("set dark");

        assert_eq!(prefs.get("app-theme"), Some("dark".to_string()));
        assert_eq!(prefs.get("  "), None);

        drop(disposer);
        runtime.dispose();
    }
}
