use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use super::ThemeToggle;
use crate::stores::SessionStore;

/// App shell header: brand, navigation links, theme toggle, and the
/// signed-in user block with sign-out.
#[component]
pub fn Nav() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let navigate = use_navigate();

    let sign_out = move |_| {
        session.logout();
        navigate("/login", NavigateOptions::default());
    };

    view! {
        <nav class="nav">
            <div class="nav-inner">
                <a href="/" class="nav-brand">
                    <span class="nav-title">"LAMS"</span>
                    <span class="nav-subtitle">"Learning Activity Management System"</span>
                </a>
                <div class="nav-links">
                    <Show when=move || session.is_authenticated()>
                        <A attr:class="nav-link" href="/home">"Home"</A>
                        <A attr:class="nav-link" href="/themed">"Theme Demo"</A>
                    </Show>
                    <ThemeToggle/>
                    <Show when=move || session.is_authenticated()>
                        <span class="nav-user">
                            {move || session.full_name().unwrap_or_default()}
                        </span>
                        <button class="nav-cta" on:click=sign_out.clone()>
                            "Sign out"
                        </button>
                    </Show>
                </div>
            </div>
        </nav>
    }
}
