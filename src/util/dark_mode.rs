//! Dark theme preference, persisted across launches.
//!
//! The preference lives in localStorage under `orbyq.darkMode`; applying
//! it sets the `dark` class on the root element, which the stylesheet
//! keys off. A first launch with nothing stored follows the OS setting.

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "orbyq.darkMode";

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// The stored preference, or the `prefers-color-scheme` media query when
/// nothing was stored yet. Always `false` outside a browser.
pub fn read_preference() -> bool {
    #[cfg(feature = "hydrate")]
    {
        if let Some(value) = storage().and_then(|s| s.get_item(STORAGE_KEY).ok().flatten()) {
            return value == "true";
        }
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .is_some_and(|query| query.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Set or clear the `dark` class on `<html>`.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element());
        if let Some(root) = root {
            let classes = root.class_list();
            let _ = if enabled { classes.add_1("dark") } else { classes.remove_1("dark") };
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Flip the theme, apply it, and persist the new value.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    #[cfg(feature = "hydrate")]
    if let Some(storage) = storage() {
        let _ = storage.set_item(STORAGE_KEY, if next { "true" } else { "false" });
    }
    next
}
