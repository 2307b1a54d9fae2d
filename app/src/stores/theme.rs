//! Reactive theme store.
//!
//! One `RwSignal<ThemeMode>` plus a memoized palette. Initialization
//! order: persisted preference, then OS preference, then light. OS
//! preference changes are mirrored only while no explicit preference
//! has been persisted; the first call to [`ThemeStore::set`] persists
//! one and ends the mirroring for good.

use lams_core::theme::{initial_mode, resolve_os_change, ThemeMode, ThemePalette};
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::browser;

#[derive(Clone, Copy)]
pub struct ThemeStore {
    mode: RwSignal<ThemeMode>,
    palette: Memo<ThemePalette>,
}

impl ThemeStore {
    /// Named `init` rather than `new`: this reads storage, queries the
    /// OS preference and registers the matchMedia listener.
    pub fn init() -> Self {
        let initial = initial_mode(browser::stored_theme(), browser::os_theme());
        let mode = RwSignal::new(initial);
        let palette = Memo::new(move |_| ThemePalette::for_mode(mode.get()));

        let store = ThemeStore { mode, palette };
        browser::apply_body_class(initial);
        store.watch_os_preference();
        store
    }

    /// Current mode (reactive read).
    pub fn mode(&self) -> ThemeMode {
        self.mode.get()
    }

    /// Current palette (reactive read).
    pub fn palette(&self) -> ThemePalette {
        self.palette.get()
    }

    pub fn is_dark(&self) -> bool {
        self.mode().is_dark()
    }

    /// Explicit user choice: mutate, persist, swap the body class.
    pub fn set(&self, mode: ThemeMode) {
        self.apply(mode);
        browser::persist_theme(mode);
    }

    pub fn toggle(&self) {
        self.set(self.mode.get_untracked().opposite());
    }

    /// Mutation without persisting - the OS-mirror path. Persisting
    /// here would turn the first OS change into an explicit preference.
    fn apply(&self, mode: ThemeMode) {
        self.mode.set(mode);
        browser::apply_body_class(mode);
    }

    fn watch_os_preference(&self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Ok(Some(mql)) = window.match_media("(prefers-color-scheme: dark)") else {
            return;
        };

        let store = *self;
        let closure = Closure::wrap(Box::new(move |ev: web_sys::MediaQueryListEvent| {
            let os = if ev.matches() {
                ThemeMode::Dark
            } else {
                ThemeMode::Light
            };
            if let Some(mode) = resolve_os_change(browser::stored_theme(), os) {
                store.apply(mode);
            }
        }) as Box<dyn FnMut(_)>);

        let _ = mql.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
        closure.forget(); // listener lives for the page lifetime
    }
}
