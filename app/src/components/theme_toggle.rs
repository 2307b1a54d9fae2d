use leptos::prelude::*;

use crate::stores::ThemeStore;

/// Flips the theme mode via the store. Label and tooltip follow the
/// mode it would switch *to*.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<ThemeStore>();

    let icon = move || if theme.is_dark() { "☀" } else { "🌙" };
    let label = move || if theme.is_dark() { "Light Mode" } else { "Dark Mode" };
    let tooltip = move || {
        if theme.is_dark() {
            "Switch to Light Mode"
        } else {
            "Switch to Dark Mode"
        }
    };

    view! {
        <button
            class="theme-toggle"
            title=tooltip
            on:click=move |_| theme.toggle()
        >
            <span class="theme-toggle-icon">{icon}</span>
            " "
            {label}
        </button>
    }
}
