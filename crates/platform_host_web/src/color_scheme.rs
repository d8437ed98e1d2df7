//! `matchMedia`-backed system color-scheme source.

use platform_host::{ColorSchemeListener, ColorSchemeSource, ColorSchemeSubscription};
#[cfg(target_arch = "wasm32")]
use platform_host::PREFERS_DARK_MEDIA_QUERY;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

#[derive(Debug, Clone, Copy, Default)]
/// Browser color-scheme source backed by `window.matchMedia("(prefers-color-scheme: dark)")`.
pub struct WebColorSchemeSource;

#[cfg(target_arch = "wasm32")]
fn prefers_dark_media_query() -> Option<web_sys::MediaQueryList> {
    web_sys::window()?
        .match_media(PREFERS_DARK_MEDIA_QUERY)
        .ok()
        .flatten()
}

impl ColorSchemeSource for WebColorSchemeSource {
    fn prefers_dark(&self) -> Option<bool> {
        #[cfg(target_arch = "wasm32")]
        {
            prefers_dark_media_query().map(|query| query.matches())
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            None
        }
    }

    fn subscribe(&self, listener: ColorSchemeListener) -> ColorSchemeSubscription {
        #[cfg(target_arch = "wasm32")]
        {
            let Some(query) = prefers_dark_media_query() else {
                return ColorSchemeSubscription::inert();
            };
            let on_change =
                Closure::<dyn FnMut(web_sys::MediaQueryListEvent)>::wrap(Box::new(
                    move |event: web_sys::MediaQueryListEvent| listener(event.matches()),
                ));
            if query
                .add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())
                .is_err()
            {
                return ColorSchemeSubscription::inert();
            }
            // The closure lives inside the release routine so the JS callback stays valid
            // exactly as long as the listener is attached.
            ColorSchemeSubscription::new(move || {
                let _ = query.remove_event_listener_with_callback(
                    "change",
                    on_change.as_ref().unchecked_ref(),
                );
                drop(on_change);
            })
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = listener;
            ColorSchemeSubscription::inert()
        }
    }
}
