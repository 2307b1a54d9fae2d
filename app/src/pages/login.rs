//! Login form backed by the demo authentication flow.

use lams_core::guard::default_route_for_role;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use wasm_bindgen_futures::spawn_local;

use crate::stores::{SessionStore, ThemeStore};
use crate::themed::{themed, ThemedOptions};

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let theme = expect_context::<ThemeStore>();
    let navigate = use_navigate();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(None::<String>);

    let card_ref = NodeRef::new();
    themed(card_ref, theme, ThemedOptions {
        border: true,
        ..ThemedOptions::default()
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);

        let navigate = navigate.clone();
        let email = email.get_untracked();
        let password = password.get_untracked();
        spawn_local(async move {
            match session.login(email.trim(), &password).await {
                Ok(user) => {
                    // Back to where the guard bounced us from, or the
                    // role's own dashboard.
                    let target = session
                        .consume_redirect_target()
                        .unwrap_or_else(|| default_route_for_role(&user.role).to_string());
                    navigate(&target, NavigateOptions::default());
                }
                Err(err) => set_error.set(Some(err.to_string())),
            }
        });
    };

    view! {
        <div class="login-container">
            <div class="login-card" node_ref=card_ref>
                <h1>"Sign in to LAMS"</h1>
                <form on:submit=on_submit>
                    <label>
                        "Email"
                        <input
                            type="email"
                            placeholder="you@lams.com"
                            prop:value=email
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Password"
                        <input
                            type="password"
                            prop:value=password
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                    </label>
                    <Show when=move || error.get().is_some()>
                        <p class="login-error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <button type="submit" disabled=move || session.is_loading()>
                        {move || if session.is_loading() { "Signing in…" } else { "Sign in" }}
                    </button>
                </form>
                <p class="login-hint">
                    "Demo accounts: admin@lams.com / admin123, teacher@lams.com / teacher123, "
                    "student@lams.com / student123"
                </p>
            </div>
        </div>
    }
}
