//! System color-scheme preference contracts.
//!
//! A [`ColorSchemeSource`] answers "does the platform prefer dark presentation" and delivers a
//! notification every time that answer changes. Subscriptions are explicit handles: dropping or
//! releasing a [`ColorSchemeSubscription`] detaches the listener, so repeated mount/unmount cycles
//! never accumulate stale listeners.

use std::{
    cell::RefCell,
    fmt,
    rc::{Rc, Weak},
};

/// Media query the browser evaluates for the system dark preference.
pub const PREFERS_DARK_MEDIA_QUERY: &str = "(prefers-color-scheme: dark)";

/// Callback invoked with the new "prefers dark" value on every system change.
pub type ColorSchemeListener = Rc<dyn Fn(bool)>;

/// Host service exposing the platform color-scheme preference.
pub trait ColorSchemeSource {
    /// Returns whether the platform currently prefers dark presentation.
    ///
    /// Returns `None` when the query is unavailable (no presentation runtime).
    fn prefers_dark(&self) -> Option<bool>;

    /// Registers `listener` for change notifications until the returned handle is released.
    fn subscribe(&self, listener: ColorSchemeListener) -> ColorSchemeSubscription;
}

/// Handle for one active color-scheme listener registration.
///
/// The listener is detached on [`ColorSchemeSubscription::release`] or when the handle drops.
#[must_use = "dropping the subscription detaches the listener immediately"]
pub struct ColorSchemeSubscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl ColorSchemeSubscription {
    /// Wraps a host-specific detach routine.
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Subscription that was never attached (unsupported host).
    pub fn inert() -> Self {
        Self { release: None }
    }

    /// Returns whether the listener is still attached.
    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }

    /// Detaches the listener. Calling this more than once is a no-op.
    pub fn release(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for ColorSchemeSubscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for ColorSchemeSubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColorSchemeSubscription")
            .field("active", &self.is_active())
            .finish()
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Color-scheme source for contexts without a presentation runtime.
pub struct NoopColorSchemeSource;

impl ColorSchemeSource for NoopColorSchemeSource {
    fn prefers_dark(&self) -> Option<bool> {
        None
    }

    fn subscribe(&self, _listener: ColorSchemeListener) -> ColorSchemeSubscription {
        ColorSchemeSubscription::inert()
    }
}

#[derive(Default)]
struct MemoryColorSchemeState {
    prefers_dark: Option<bool>,
    next_listener_id: u64,
    listeners: Vec<(u64, ColorSchemeListener)>,
}

#[derive(Clone, Default)]
/// Manually driven color-scheme source used by tests and headless hosts.
///
/// Clones share listener registrations, so one handle can [`emit`](Self::emit) changes while the
/// runtime holds another.
pub struct MemoryColorSchemeSource {
    inner: Rc<RefCell<MemoryColorSchemeState>>,
}

impl MemoryColorSchemeSource {
    /// Creates a source reporting `prefers_dark` from the initial query.
    pub fn new(prefers_dark: bool) -> Self {
        let source = Self::default();
        source.inner.borrow_mut().prefers_dark = Some(prefers_dark);
        source
    }

    /// Creates a source whose initial query is unavailable.
    pub fn unavailable() -> Self {
        Self::default()
    }

    /// Updates the reported preference and notifies every attached listener.
    pub fn emit(&self, prefers_dark: bool) {
        let listeners: Vec<ColorSchemeListener> = {
            let mut state = self.inner.borrow_mut();
            state.prefers_dark = Some(prefers_dark);
            state
                .listeners
                .iter()
                .map(|(_, listener)| listener.clone())
                .collect()
        };
        for listener in listeners {
            listener(prefers_dark);
        }
    }

    /// Number of listeners currently attached.
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

impl ColorSchemeSource for MemoryColorSchemeSource {
    fn prefers_dark(&self) -> Option<bool> {
        self.inner.borrow().prefers_dark
    }

    fn subscribe(&self, listener: ColorSchemeListener) -> ColorSchemeSubscription {
        let id = {
            let mut state = self.inner.borrow_mut();
            let id = state.next_listener_id;
            state.next_listener_id += 1;
            state.listeners.push((id, listener));
            id
        };
        let weak: Weak<RefCell<MemoryColorSchemeState>> = Rc::downgrade(&self.inner);
        ColorSchemeSubscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner
                    .borrow_mut()
                    .listeners
                    .retain(|(listener_id, _)| *listener_id != id);
            }
        })
    }
}
