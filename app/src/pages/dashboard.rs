//! Role-gated dashboard placeholder, shared by the four role routes.

use leptos::prelude::*;

use crate::stores::ThemeStore;
use crate::themed::{themed, ThemedOptions};

#[component]
pub fn DashboardPage(
    title: &'static str,
    blurb: &'static str,
) -> impl IntoView {
    let theme = expect_context::<ThemeStore>();

    let card_ref = NodeRef::new();
    themed(card_ref, theme, ThemedOptions {
        border: true,
        ..ThemedOptions::default()
    });

    view! {
        <div class="dashboard-container">
            <div class="dashboard-card" node_ref=card_ref>
                <h1>{title}</h1>
                <p>{blurb}</p>
            </div>
        </div>
    }
}
