//! Reactive session store.
//!
//! Wraps the [`Session`] snapshot in a signal and owns every side
//! effect of the login/logout flow: the directory fetch, token/user
//! persistence, the fire-and-forget last-login PATCH, and the
//! attempted-URL stash used by the guards.

use lams_core::session::{authenticate, AuthError, Session};
use lams_core::storage::{ATTEMPTED_URL_KEY, TOKEN_KEY, USER_KEY};
use lams_core::user::{LoginResponse, User};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::{api, browser};

#[derive(Clone, Copy)]
pub struct SessionStore {
    session: RwSignal<Session>,
}

impl SessionStore {
    /// Restore from persisted {token, user} when both are present.
    /// The token is not re-validated and has no expiry - a known
    /// limitation of the demo flow, not a feature.
    ///
    /// Named `init` rather than `new`: this reads durable storage.
    pub fn init() -> Self {
        let initial = match (browser::get_item(TOKEN_KEY), Self::restore_user()) {
            (Some(_), Some(user)) => Session::authenticated(user),
            _ => Session::anonymous(),
        };
        SessionStore {
            session: RwSignal::new(initial),
        }
    }

    fn restore_user() -> Option<User> {
        let json = browser::get_item(USER_KEY)?;
        // A corrupt record falls back to anonymous rather than erroring.
        serde_json::from_str(&json).ok()
    }

    /// Full snapshot (reactive read).
    pub fn snapshot(&self) -> Session {
        self.session.get()
    }

    /// One-shot snapshot for guards: a single read, no subscription.
    pub fn snapshot_untracked(&self) -> Session {
        self.session.get_untracked()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with(|s| s.is_authenticated)
    }

    pub fn is_loading(&self) -> bool {
        self.session.with(|s| s.is_loading)
    }

    pub fn full_name(&self) -> Option<String> {
        self.session.with(|s| s.full_name())
    }

    /// Anonymous → Authenticating → Authenticated, or back to Anonymous
    /// on failure. The error is returned for the login form to render.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        self.session.update(|s| s.is_loading = true);

        let users = match api::fetch_users().await {
            Ok(users) => users,
            Err(err) => {
                self.session.update(|s| s.is_loading = false);
                return Err(err);
            }
        };

        match authenticate(&users, email, password, browser::now_ms()) {
            Ok(LoginResponse { user, token }) => {
                browser::set_item(TOKEN_KEY, &token);
                if let Ok(json) = serde_json::to_string(&user) {
                    browser::set_item(USER_KEY, &json);
                }

                // Best-effort telemetry; a failed PATCH must not fail login.
                let user_id = user.id;
                spawn_local(async move {
                    if let Err(err) = api::update_last_login(user_id, &browser::now_iso()).await {
                        web_sys::console::warn_1(
                            &format!("last-login update failed: {err}").into(),
                        );
                    }
                });

                self.session.set(Session::authenticated(user.clone()));
                Ok(user)
            }
            Err(err) => {
                self.session.set(Session::anonymous());
                Err(err)
            }
        }
    }

    /// Synchronous: clear persisted credentials, drop to Anonymous.
    pub fn logout(&self) {
        browser::remove_item(TOKEN_KEY);
        browser::remove_item(USER_KEY);
        self.session.set(Session::anonymous());
    }

    /// Remember where a guard bounced the user from.
    pub fn stash_attempted_url(&self, url: &str) {
        browser::set_item(ATTEMPTED_URL_KEY, url);
    }

    /// Return and clear the stashed URL: Some once, then None.
    pub fn consume_redirect_target(&self) -> Option<String> {
        let url = browser::get_item(ATTEMPTED_URL_KEY)?;
        browser::remove_item(ATTEMPTED_URL_KEY);
        Some(url)
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn redirect_target_is_consumed_once() {
        let store = SessionStore::init();
        store.stash_attempted_url("/courses/5");

        assert_eq!(
            store.consume_redirect_target().as_deref(),
            Some("/courses/5")
        );
        assert_eq!(store.consume_redirect_target(), None);
    }

    #[wasm_bindgen_test]
    fn logout_clears_persisted_credentials() {
        browser::set_item(TOKEN_KEY, "token");
        browser::set_item(USER_KEY, "{}");

        let store = SessionStore::init();
        store.logout();

        assert_eq!(browser::get_item(TOKEN_KEY), None);
        assert_eq!(browser::get_item(USER_KEY), None);
        assert!(!store.is_authenticated());
    }
}
