//! Thin wrappers over the browser platform: localStorage, the
//! prefers-color-scheme media query, the body class, and the clock.
//!
//! Every function degrades to a no-op / `None` when the platform API is
//! unavailable, so the stores never panic over a missing `window`.

use lams_core::storage::THEME_KEY;
use lams_core::theme::ThemeMode;
use web_sys::Storage;

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

pub fn get_item(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok().flatten()
}

pub fn set_item(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(key, value);
    }
}

pub fn remove_item(key: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(key);
    }
}

/// The explicitly persisted theme preference, if any. Unparseable
/// values count as "no preference".
pub fn stored_theme() -> Option<ThemeMode> {
    get_item(THEME_KEY).as_deref().and_then(ThemeMode::parse)
}

pub fn persist_theme(mode: ThemeMode) {
    set_item(THEME_KEY, mode.as_str());
}

/// Current OS color-scheme preference, or `None` when matchMedia is
/// unavailable.
pub fn os_theme() -> Option<ThemeMode> {
    let mql = web_sys::window()?
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()?;
    Some(if mql.matches() {
        ThemeMode::Dark
    } else {
        ThemeMode::Light
    })
}

/// Swap the `light`/`dark` class on `<body>` so every themed surface -
/// not only directive-managed ones - follows the mode.
pub fn apply_body_class(mode: ThemeMode) {
    if let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    {
        let class_list = body.class_list();
        let _ = class_list.remove_1(mode.opposite().body_class());
        let _ = class_list.add_1(mode.body_class());
    }
}

/// Milliseconds since the epoch, for the token timestamp.
pub fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

/// ISO 8601 timestamp for the last-login update.
pub fn now_iso() -> String {
    String::from(js_sys::Date::new_0().to_iso_string())
}
