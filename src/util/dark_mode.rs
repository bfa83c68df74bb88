//! Dark mode hydration, persistence, and application.
//!
//! Reads the user's preference from `localStorage` and applies a
//! `data-theme` attribute to the `<html>` element so the stylesheet can
//! theme the page. Persistence writes back on every change, including the
//! initial value on mount. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; native
//! builds safely no-op so the rest of the crate stays testable off-wasm.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

/// Origin-scoped storage key for the display-mode flag.
pub const STORAGE_KEY: &str = "darkMode";

/// Serialized form stored under `STORAGE_KEY`.
#[cfg(any(test, feature = "csr"))]
fn storage_value(enabled: bool) -> &'static str {
    if enabled { "true" } else { "false" }
}

/// Read the dark mode preference from localStorage.
///
/// Returns `true` if the user previously enabled dark mode, or if the
/// system prefers dark mode and no preference is stored.
pub fn read_preference() -> bool {
    #[cfg(feature = "csr")]
    {
        let window = match web_sys::window() {
            Some(w) => w,
            None => return false,
        };

        // Check localStorage first.
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(val)) = storage.get_item(STORAGE_KEY) {
                return val == "true";
            }
        }

        // Fall back to system preference.
        window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "csr")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let _ = el.set_attribute("data-theme", if enabled { "dark" } else { "light" });
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = enabled;
    }
}

/// Persist the current preference to localStorage, overwriting any prior
/// value. Storage failures are swallowed; no error path reaches the user.
pub fn persist(enabled: bool) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, storage_value(enabled));
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = enabled;
    }
}
