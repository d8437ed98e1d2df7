//! Theme preference controller: resolution, presentation mirroring, persistence, and system
//! color-scheme tracking.

use std::{
    cell::{Cell, RefCell},
    rc::{Rc, Weak},
};

use leptos::logging;
use platform_host::{
    ColorSchemeSource, ColorSchemeSubscription, HostServices, PrefsStore, ThemeSurface,
};

use crate::{
    error::ThemeError,
    model::{ThemeConfig, ThemeMode, BACKGROUND_PROPERTY, FOREGROUND_PROPERTY},
};

type ChangeObserver = Rc<dyn Fn(ThemeMode)>;

/// Resolves the startup theme: persisted record, then system preference, then default.
///
/// A stored value other than `light` or `dark` counts as absent. A store read failure counts as
/// absent too and is logged. An unavailable system query falls through to the default.
pub fn resolve_initial_theme(
    config: &ThemeConfig,
    prefs: &dyn PrefsStore,
    color_scheme: &dyn ColorSchemeSource,
) -> ThemeMode {
    let persisted = match prefs.load_pref(&config.storage_key) {
        Ok(raw) => raw.and_then(|raw| raw.parse::<ThemeMode>().ok()),
        Err(err) => {
            logging::warn!(
                "theme preference load failed for `{}`: {err}",
                config.storage_key
            );
            None
        }
    };
    if let Some(mode) = persisted {
        return mode;
    }

    if config.enable_system_theme {
        if let Some(prefers_dark) = color_scheme.prefers_dark() {
            return ThemeMode::from_prefers_dark(prefers_dark);
        }
    }

    config.default_theme
}

struct ControllerState {
    config: ThemeConfig,
    active: Cell<ThemeMode>,
    prefs: Rc<dyn PrefsStore>,
    surface: Rc<dyn ThemeSurface>,
    observers: RefCell<Vec<ChangeObserver>>,
}

impl ControllerState {
    /// Single transition path shared by explicit changes and system notifications.
    fn apply(&self, mode: ThemeMode) -> Result<(), ThemeError> {
        self.active.set(mode);
        self.update_surface(mode);
        let persisted = self
            .prefs
            .save_pref(&self.config.storage_key, mode.as_str())
            .map_err(ThemeError::Persist);
        self.notify(mode);
        persisted
    }

    fn update_surface(&self, mode: ThemeMode) {
        let colors = mode.colors();
        // Each step runs even when an earlier one failed.
        let steps = [
            (
                "class reset",
                self.surface.remove_classes(&ThemeMode::CLASS_MARKERS),
            ),
            ("class marker", self.surface.add_class(mode.as_str())),
            (
                BACKGROUND_PROPERTY,
                self.surface
                    .set_custom_property(BACKGROUND_PROPERTY, colors.background),
            ),
            (
                FOREGROUND_PROPERTY,
                self.surface
                    .set_custom_property(FOREGROUND_PROPERTY, colors.foreground),
            ),
        ];
        for (step, result) in steps {
            if let Err(err) = result {
                logging::warn!("theme surface {step} failed for `{mode}`: {err}");
            }
        }
    }

    fn notify(&self, mode: ThemeMode) {
        // Observers may re-enter the controller, so iterate over a snapshot.
        let observers: Vec<ChangeObserver> = self.observers.borrow().clone();
        for observer in observers {
            observer(mode);
        }
    }
}

/// Owns the active [`ThemeMode`] for one presentation session.
///
/// Construct one per presentation root and drop it (or call [`teardown`](Self::teardown)) when
/// the root unmounts. The system color-scheme listener is held as a subscription handle and
/// only reaches controller state through a weak reference, so a released or dropped controller
/// is never mutated by late notifications.
pub struct ThemePreferenceController {
    state: Rc<ControllerState>,
    subscription: Option<ColorSchemeSubscription>,
}

impl ThemePreferenceController {
    /// Resolves the startup theme, applies it to the surface and store, and subscribes to
    /// system color-scheme changes when `config.enable_system_theme` is set.
    ///
    /// Never fails: a persistence failure during startup is logged and the resolved mode stays
    /// active.
    pub fn new(config: ThemeConfig, host: &HostServices) -> Self {
        let initial =
            resolve_initial_theme(&config, host.prefs.as_ref(), host.color_scheme.as_ref());
        let enable_system_theme = config.enable_system_theme;
        let state = Rc::new(ControllerState {
            config,
            active: Cell::new(initial),
            prefs: host.prefs.clone(),
            surface: host.surface.clone(),
            observers: RefCell::new(Vec::new()),
        });

        if let Err(err) = state.apply(initial) {
            logging::warn!("initial theme persist failed: {err}");
        }

        let subscription = enable_system_theme
            .then(|| subscribe_system_changes(&state, host.color_scheme.as_ref()));

        Self {
            state,
            subscription,
        }
    }

    pub fn active_theme(&self) -> ThemeMode {
        self.state.active.get()
    }

    pub fn is_dark(&self) -> bool {
        self.active_theme().is_dark()
    }

    pub fn config(&self) -> &ThemeConfig {
        &self.state.config
    }

    /// Makes `mode` active, then updates the root node and writes the preference record.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Persist`] when the store rejects the write. The new mode is already
    /// active and applied to the surface at that point.
    pub fn set_theme(&self, mode: ThemeMode) -> Result<(), ThemeError> {
        self.state.apply(mode)
    }

    /// Switches to the opposite mode.
    ///
    /// # Errors
    ///
    /// Same as [`set_theme`](Self::set_theme).
    pub fn toggle_theme(&self) -> Result<(), ThemeError> {
        self.set_theme(self.active_theme().toggled())
    }

    /// Registers `observer` to run after every transition, explicit or system-driven.
    pub fn subscribe_changes(&self, observer: impl Fn(ThemeMode) + 'static) {
        self.state.observers.borrow_mut().push(Rc::new(observer));
    }

    /// Whether the system color-scheme listener is attached.
    pub fn is_following_system(&self) -> bool {
        self.subscription
            .as_ref()
            .is_some_and(ColorSchemeSubscription::is_active)
    }

    /// Releases the system color-scheme subscription. Idempotent.
    pub fn teardown(&mut self) {
        if let Some(mut subscription) = self.subscription.take() {
            subscription.release();
        }
    }
}

impl std::fmt::Debug for ThemePreferenceController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemePreferenceController")
            .field("active", &self.active_theme())
            .field("config", &self.state.config)
            .field("following_system", &self.is_following_system())
            .finish()
    }
}

fn subscribe_system_changes(
    state: &Rc<ControllerState>,
    color_scheme: &dyn ColorSchemeSource,
) -> ColorSchemeSubscription {
    let weak: Weak<ControllerState> = Rc::downgrade(state);
    color_scheme.subscribe(Rc::new(move |prefers_dark: bool| {
        let Some(state) = weak.upgrade() else {
            return;
        };
        let mode = ThemeMode::from_prefers_dark(prefers_dark);
        if let Err(err) = state.apply(mode) {
            logging::warn!("theme persist after system change failed: {err}");
        }
    }))
}

#[cfg(test)]
mod tests {
    use platform_host::{
        HostStrategy, MemoryColorSchemeSource, MemoryPrefsStore, MemoryThemeSurface,
        SurfaceOperation,
    };
    use pretty_assertions::assert_eq;

    use super::*;

    fn host(
        prefs: &MemoryPrefsStore,
        scheme: &MemoryColorSchemeSource,
        surface: &MemoryThemeSurface,
    ) -> HostServices {
        HostServices::new(
            Rc::new(prefs.clone()),
            Rc::new(scheme.clone()),
            Rc::new(surface.clone()),
            HostStrategy::Headless,
        )
    }

    #[test]
    fn set_theme_updates_surface_before_persisting_in_order() {
        let prefs = MemoryPrefsStore::default();
        let scheme = MemoryColorSchemeSource::new(false);
        let surface = MemoryThemeSurface::default();
        let controller = ThemePreferenceController::new(
            ThemeConfig::default(),
            &host(&prefs, &scheme, &surface),
        );
        surface.clear_operations();

        controller.set_theme(ThemeMode::Dark).expect("set dark");

        assert_eq!(
            surface.operations(),
            vec![
                SurfaceOperation::RemoveClasses(vec!["light".to_string(), "dark".to_string()]),
                SurfaceOperation::AddClass("dark".to_string()),
                SurfaceOperation::SetCustomProperty(
                    "--background".to_string(),
                    "#111111".to_string()
                ),
                SurfaceOperation::SetCustomProperty(
                    "--foreground".to_string(),
                    "#ffffff".to_string()
                ),
            ]
        );
        assert_eq!(prefs.get("app-theme"), Some("dark".to_string()));
    }

    #[test]
    fn startup_mirrors_resolved_mode_to_surface_and_store() {
        let prefs = MemoryPrefsStore::default();
        let scheme = MemoryColorSchemeSource::new(true);
        let surface = MemoryThemeSurface::default();
        let controller = ThemePreferenceController::new(
            ThemeConfig::default(),
            &host(&prefs, &scheme, &surface),
        );

        assert_eq!(controller.active_theme(), ThemeMode::Dark);
        assert_eq!(surface.classes(), vec!["dark".to_string()]);
        assert_eq!(prefs.get("app-theme"), Some("dark".to_string()));
    }

    #[test]
    fn surface_failure_does_not_block_state_or_persistence() {
        let prefs = MemoryPrefsStore::default();
        let scheme = MemoryColorSchemeSource::new(false);
        let surface = MemoryThemeSurface::default();
        let controller = ThemePreferenceController::new(
            ThemeConfig::default(),
            &host(&prefs, &scheme, &surface),
        );
        surface.fail_updates(Some("document unavailable"));

        controller.set_theme(ThemeMode::Dark).expect("persist still succeeds");

        assert_eq!(controller.active_theme(), ThemeMode::Dark);
        assert_eq!(prefs.get("app-theme"), Some("dark".to_string()));
    }

    struct StuckClassesSurface(MemoryThemeSurface);

    impl ThemeSurface for StuckClassesSurface {
        fn remove_classes(&self, _classes: &[&str]) -> Result<(), String> {
            Err("classList locked".to_string())
        }

        fn add_class(&self, class: &str) -> Result<(), String> {
            self.0.add_class(class)
        }

        fn set_custom_property(&self, name: &str, value: &str) -> Result<(), String> {
            self.0.set_custom_property(name, value)
        }
    }

    #[test]
    fn failed_class_reset_still_applies_marker_and_colors() {
        let prefs = MemoryPrefsStore::default();
        let scheme = MemoryColorSchemeSource::new(false);
        let surface = MemoryThemeSurface::default();
        let host = HostServices::new(
            Rc::new(prefs.clone()),
            Rc::new(scheme.clone()),
            Rc::new(StuckClassesSurface(surface.clone())),
            HostStrategy::Headless,
        );
        let controller = ThemePreferenceController::new(ThemeConfig::default(), &host);

        controller.set_theme(ThemeMode::Dark).expect("set dark");

        assert!(surface.classes().contains(&"dark".to_string()));
        assert_eq!(
            surface.custom_property("--background"),
            Some("#111111".to_string())
        );
        assert_eq!(
            surface.custom_property("--foreground"),
            Some("#ffffff".to_string())
        );
        assert_eq!(prefs.get("app-theme"), Some("dark".to_string()));
    }

    #[test]
    fn observers_see_explicit_and_system_transitions() {
        let prefs = MemoryPrefsStore::default();
        let scheme = MemoryColorSchemeSource::new(false);
        let surface = MemoryThemeSurface::default();
        let controller = ThemePreferenceController::new(
            ThemeConfig::default(),
            &host(&prefs, &scheme, &surface),
        );
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        controller.subscribe_changes(move |mode| sink.borrow_mut().push(mode));

        controller.toggle_theme().expect("toggle");
        scheme.emit(false);

        assert_eq!(*seen.borrow(), vec![ThemeMode::Dark, ThemeMode::Light]);
    }

    #[test]
    fn system_disabled_controller_never_subscribes() {
        let prefs = MemoryPrefsStore::default();
        let scheme = MemoryColorSchemeSource::new(true);
        let surface = MemoryThemeSurface::default();
        let controller = ThemePreferenceController::new(
            ThemeConfig::default().with_system_theme(false),
            &host(&prefs, &scheme, &surface),
        );

        assert!(!controller.is_following_system());
        assert_eq!(scheme.listener_count(), 0);
        assert_eq!(controller.active_theme(), ThemeMode::Light);
    }

    #[test]
    fn dropping_controller_detaches_system_listener() {
        let prefs = MemoryPrefsStore::default();
        let scheme = MemoryColorSchemeSource::new(false);
        let surface = MemoryThemeSurface::default();
        for _ in 0..3 {
            let controller = ThemePreferenceController::new(
                ThemeConfig::default(),
                &host(&prefs, &scheme, &surface),
            );
            assert!(controller.is_following_system());
            assert_eq!(scheme.listener_count(), 1);
        }
        assert_eq!(scheme.listener_count(), 0);
    }

    #[test]
    fn store_read_failure_falls_back_to_system_preference() {
        let prefs = MemoryPrefsStore::with_value("app-theme", "light");
        prefs.fail_reads(Some("storage disabled"));
        let scheme = MemoryColorSchemeSource::new(true);

        let mode = resolve_initial_theme(&ThemeConfig::default(), &prefs, &scheme);

        assert_eq!(mode, ThemeMode::Dark);
    }

    #[test]
    fn custom_storage_key_is_read_and_written() {
        let prefs = MemoryPrefsStore::with_value("site.theme", "dark");
        let scheme = MemoryColorSchemeSource::new(false);
        let surface = MemoryThemeSurface::default();
        let controller = ThemePreferenceController::new(
            ThemeConfig::default().with_storage_key("site.theme"),
            &host(&prefs, &scheme, &surface),
        );

        assert_eq!(controller.config().storage_key, "site.theme");
        assert_eq!(controller.active_theme(), ThemeMode::Dark);
        controller.set_theme(ThemeMode::Light).expect("set light");
        assert_eq!(prefs.get("site.theme"), Some("light".to_string()));
        assert_eq!(prefs.get("app-theme"), None);
    }
}
