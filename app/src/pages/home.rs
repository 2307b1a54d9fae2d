//! Welcome page shown after sign-in.

use leptos::prelude::*;

use crate::stores::{SessionStore, ThemeStore};
use crate::themed::{themed, ThemedOptions};

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let theme = expect_context::<ThemeStore>();

    let card_ref = NodeRef::new();
    themed(card_ref, theme, ThemedOptions::default());

    view! {
        <div class=move || format!("home-container {}", theme.mode().container_class())>
            <div class="home-card" node_ref=card_ref>
                <h1>"Welcome to LAMS"</h1>
                <p class="home-greeting">
                    {move || match session.full_name() {
                        Some(name) => format!("Signed in as {name}."),
                        None => String::new(),
                    }}
                </p>
                <p>
                    "This is a Progressive Web App shell built with Rust and Leptos. "
                    "The application features dynamic theming with light and dark modes."
                </p>

                <div class="feature-grid">
                    <section class="feature-panel">
                        <h3>"🌓 Dynamic Theming"</h3>
                        <p>
                            "Switch between light and dark themes seamlessly. "
                            "Your preference is saved automatically."
                        </p>
                    </section>
                    <section class="feature-panel">
                        <h3>"📱 Progressive Web App"</h3>
                        <p>
                            "Install this app on your device for a native-like "
                            "experience."
                        </p>
                    </section>
                    <section class="feature-panel">
                        <h3>"🎨 Themed Components"</h3>
                        <p>
                            "UI surfaces adapt to the current theme through the "
                            "themed directive and the derived palette."
                        </p>
                    </section>
                </div>
            </div>
        </div>
    }
}
