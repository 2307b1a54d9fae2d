//! Route guard components.
//!
//! Each guard takes one untracked reading of the session store at
//! mount, asks the pure decision functions in `lams_core::guard`, and
//! either renders its children or navigates away. The read is
//! deliberately not a subscription: a guard decides once per
//! navigation, so a later session change cannot yank an already
//! rendered page out from under the user mid-task. Denial is policy,
//! not error.

use lams_core::guard::{self, GuardOutcome};
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::NavigateOptions;

use crate::stores::SessionStore;

/// Default landing page for users bounced off guest-only routes.
const DEFAULT_LANDING: &str = "/home";

/// Allow any signed-in user; stash the attempted URL and send everyone
/// else to login.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let location = use_location();
    let navigate = use_navigate();

    let outcome = guard::check_auth(&session.snapshot_untracked());
    // Navigation must not happen during render; the effect runs once
    // right after.
    Effect::new(move || {
        if outcome == GuardOutcome::ToLogin {
            session.stash_attempted_url(&location.pathname.get_untracked());
            navigate("/login", NavigateOptions::default());
        }
    });

    view! {
        <Show when=move || outcome == GuardOutcome::Allow>
            {children()}
        </Show>
    }
}

/// Allow signed-in users holding any of `roles`; others are redirected
/// to login (anonymous) or the unauthorized page (wrong role).
#[component]
pub fn RequireRole(roles: Vec<&'static str>, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let location = use_location();
    let navigate = use_navigate();

    let outcome = guard::check_role(&session.snapshot_untracked(), &roles);
    Effect::new(move || match outcome {
        GuardOutcome::ToLogin => {
            session.stash_attempted_url(&location.pathname.get_untracked());
            navigate("/login", NavigateOptions::default());
        }
        GuardOutcome::ToUnauthorized => {
            navigate("/unauthorized", NavigateOptions::default());
        }
        _ => {}
    });

    view! {
        <Show when=move || outcome == GuardOutcome::Allow>
            {children()}
        </Show>
    }
}

/// Keep signed-in users off auth-only pages (login), sending them to
/// the default landing page instead.
#[component]
pub fn GuestOnly(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let navigate = use_navigate();

    let outcome = guard::check_guest(&session.snapshot_untracked());
    Effect::new(move || {
        if outcome == GuardOutcome::ToDefault {
            navigate(DEFAULT_LANDING, NavigateOptions::default());
        }
    });

    view! {
        <Show when=move || outcome == GuardOutcome::Allow>
            {children()}
        </Show>
    }
}
