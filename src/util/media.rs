//! OS media signals and cross-tab storage notifications.
//!
//! Without the `csr` feature every query reads `false` and watchers never
//! fire. Watchers live as long as the page and their closures are leaked.

#[cfg(test)]
#[path = "media_test.rs"]
mod media_test;

use crate::util::preference_sync::SystemSignals;

pub const PREFERS_DARK: &str = "(prefers-color-scheme: dark)";
pub const PREFERS_REDUCED_MOTION: &str = "(prefers-reduced-motion: reduce)";

/// Whether `query` currently matches.
#[must_use]
pub fn matches(query: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        media_list(query).is_some_and(|list| list.matches())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = query;
        false
    }
}

/// Both OS signals as of now.
#[must_use]
pub fn read_signals() -> SystemSignals {
    SystemSignals { prefers_dark: matches(PREFERS_DARK), reduced_motion: matches(PREFERS_REDUCED_MOTION) }
}

/// Call `on_change` with the new match state whenever `query` flips.
pub fn watch(query: &str, on_change: impl Fn(bool) + 'static) {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let Some(list) = media_list(query) else {
            log::debug!("media query unsupported: {query}");
            return;
        };
        let callback = Closure::<dyn Fn(web_sys::MediaQueryListEvent)>::new(move |ev: web_sys::MediaQueryListEvent| {
            on_change(ev.matches());
        });
        let _ = list.add_event_listener_with_callback("change", callback.as_ref().unchecked_ref());
        callback.forget();
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (query, on_change);
    }
}

/// Call `on_change` when another tab writes `key` or clears its storage.
pub fn watch_storage(key: &'static str, on_change: impl Fn() + 'static) {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let Some(window) = web_sys::window() else {
            return;
        };
        let callback = Closure::<dyn Fn(web_sys::StorageEvent)>::new(move |ev: web_sys::StorageEvent| {
            if concerns(ev.key().as_deref(), key) {
                on_change();
            }
        });
        let _ = window.add_event_listener_with_callback("storage", callback.as_ref().unchecked_ref());
        callback.forget();
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (key, on_change);
    }
}

/// A `storage` event names the changed key, or none when storage was cleared.
#[must_use]
pub fn concerns(changed: Option<&str>, key: &str) -> bool {
    changed.is_none_or(|changed| changed == key)
}

#[cfg(feature = "csr")]
fn media_list(query: &str) -> Option<web_sys::MediaQueryList> {
    web_sys::window()?.match_media(query).ok().flatten()
}
