//! Theme demo page: the themed directive in action plus a swatch grid
//! of every palette role.

use lams_core::theme::PaletteRole;
use leptos::prelude::*;

use crate::stores::ThemeStore;
use crate::themed::{themed, ThemedOptions};

#[component]
pub fn ThemedExamplePage() -> impl IntoView {
    let theme = expect_context::<ThemeStore>();

    let box_ref = NodeRef::new();
    themed(box_ref, theme, ThemedOptions {
        border: true,
        ..ThemedOptions::default()
    });

    let accent_ref = NodeRef::new();
    themed(accent_ref, theme, ThemedOptions {
        background: false,
        text: false,
        light_class: Some("glow-light"),
        dark_class: Some("glow-dark"),
        color_role: Some(PaletteRole::Accent),
        ..ThemedOptions::default()
    });

    view! {
        <div class=move || format!("example-container {}", theme.mode().container_class())>
            <h2>"Dynamic Theme Example"</h2>

            <div class="themed-box" node_ref=box_ref>
                <h3>"Auto-Themed Box"</h3>
                <p>
                    "This box adapts to the current theme through the themed "
                    "directive: classes, surface, text and border colors are "
                    "reapplied on every mode change."
                </p>
            </div>

            <div class="themed-box" node_ref=accent_ref>
                <h3>"Accent Text"</h3>
                <p>"Custom per-mode classes, text colored by one named palette role."</p>
            </div>

            <div class="color-palette">
                <h3>"Current Theme Colors"</h3>
                <div class="color-grid">
                    {PaletteRole::ALL
                        .into_iter()
                        .map(|role| {
                            view! {
                                <div
                                    class="color-item"
                                    style:background-color=move || theme.palette().color(role)
                                >
                                    <span>
                                        {role.as_str()}
                                        ": "
                                        {move || theme.palette().color(role)}
                                    </span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
