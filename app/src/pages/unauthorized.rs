use leptos::prelude::*;
use leptos_router::components::A;

/// Shown when a signed-in user lacks the role a route requires.
#[component]
pub fn UnauthorizedPage() -> impl IntoView {
    view! {
        <div class="unauthorized-container">
            <h1>"Access denied"</h1>
            <p>"Your account does not have permission to view this page."</p>
            <A href="/home">"Back to home"</A>
        </div>
    }
}
