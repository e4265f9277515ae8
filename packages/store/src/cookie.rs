//! # Cookie-backed key/value store: browser-side persistence
//!
//! [`CookieStore`] is the [`KeyValueStore`](crate::KeyValueStore) used on the
//! **web platform**. Each key is one first-party cookie on `path=/`, so the
//! session survives reloads and is shared by every page of the app.
//!
//! | Operation | Cookie written |
//! |-----------|----------------|
//! | `set(k, v, Some(ttl))` | `k=<uri-encoded v>; path=/; SameSite=Lax; max-age=<secs>` |
//! | `set(k, v, None)` | same, without `max-age` (browser-session cookie) |
//! | `remove(k)` | `k=; path=/; SameSite=Lax; max-age=0` |
//!
//! The browser enforces expiry, so reads only have to find the cookie. Parsing
//! and formatting are plain functions so they can be tested off the browser.

use std::time::Duration;

/// Find the raw (still encoded) value of cookie `name` in a
/// `document.cookie` string such as `"a=1; Token=abc"`.
pub fn find_cookie<'a>(cookies: &'a str, name: &str) -> Option<&'a str> {
    cookies.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name).then_some(value)
    })
}

/// Format the string assigned to `document.cookie` to store `encoded_value`.
pub fn set_cookie_string(name: &str, encoded_value: &str, ttl: Option<Duration>) -> String {
    match ttl {
        Some(ttl) => format!(
            "{name}={encoded_value}; path=/; SameSite=Lax; max-age={}",
            ttl.as_secs()
        ),
        None => format!("{name}={encoded_value}; path=/; SameSite=Lax"),
    }
}

/// Format the string assigned to `document.cookie` to delete `name`.
pub fn remove_cookie_string(name: &str) -> String {
    format!("{name}=; path=/; SameSite=Lax; max-age=0")
}

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use browser::CookieStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod browser {
    use std::time::Duration;

    use wasm_bindgen::JsCast;
    use web_sys::HtmlDocument;

    use super::{find_cookie, remove_cookie_string, set_cookie_string};
    use crate::session::KeyValueStore;

    /// `document.cookie`-backed KeyValueStore for the web platform.
    ///
    /// Zero-sized; every call looks the document up again. Failures (no
    /// window, cookies disabled) degrade to "nothing stored" and are logged.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct CookieStore;

    impl CookieStore {
        pub fn new() -> Self {
            Self
        }

        fn document() -> Option<HtmlDocument> {
            web_sys::window()?
                .document()?
                .dyn_into::<HtmlDocument>()
                .ok()
        }

        fn write(cookie: &str) {
            let Some(document) = Self::document() else {
                tracing::warn!("No document available to write cookie");
                return;
            };
            if let Err(e) = document.set_cookie(cookie) {
                tracing::warn!("Failed to write cookie: {:?}", e);
            }
        }
    }

    impl KeyValueStore for CookieStore {
        fn get(&self, key: &str) -> Option<String> {
            let cookies = Self::document()?.cookie().ok()?;
            let raw = find_cookie(&cookies, key)?;
            js_sys::decode_uri_component(raw).ok().map(String::from)
        }

        fn set(&self, key: &str, value: &str, ttl: Option<Duration>) {
            let encoded = String::from(js_sys::encode_uri_component(value));
            Self::write(&set_cookie_string(key, &encoded, ttl));
        }

        fn remove(&self, key: &str) {
            Self::write(&remove_cookie_string(key));
        }
    }
}
