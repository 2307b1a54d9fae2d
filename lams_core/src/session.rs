//! Session snapshot and the demo login flow.
//!
//! There is no real authentication here. "Login" filters the fetched
//! user directory client-side, compares the supplied password against a
//! fixed demo credential table, and fabricates a Base64 token. The
//! token carries no signature and is never validated on restore - a
//! known limitation of the demo flow, preserved on purpose.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::Serialize;
use thiserror::Error;

use crate::user::{LoginResponse, User};

/// Demo credential table keyed by email. In a real deployment password
/// verification happens server-side; this exists so the shell can be
/// exercised against a plain JSON user directory.
pub const DEMO_CREDENTIALS: [(&str, &str); 5] = [
    ("admin@lams.com", "admin123"),
    ("teacher@lams.com", "teacher123"),
    ("student@lams.com", "student123"),
    ("faculty@lams.com", "faculty123"),
    ("labtech@lams.com", "labtech123"),
];

/// Everything that can go wrong during login. Each variant's Display
/// string is the message shown on the login form verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("User not found or inactive")]
    UserNotFound,
    #[error("Invalid password")]
    InvalidCredentials,
    #[error("Could not reach the user directory: {0}")]
    NetworkFailure(String),
}

/// In-memory session snapshot. Single-writer: only the session store
/// mutates it, only on the UI event loop.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Session {
    pub current_user: Option<User>,
    pub is_authenticated: bool,
    pub is_loading: bool,
}

impl Session {
    pub fn anonymous() -> Self {
        Session::default()
    }

    pub fn authenticated(user: User) -> Self {
        Session {
            current_user: Some(user),
            is_authenticated: true,
            is_loading: false,
        }
    }

    /// True when the signed-in user has exactly this role. Always false
    /// while anonymous.
    pub fn has_role(&self, role: &str) -> bool {
        self.current_user
            .as_ref()
            .is_some_and(|u| u.role == role)
    }

    /// True when the signed-in user's role is any of `roles`.
    pub fn has_any_role(&self, roles: &[&str]) -> bool {
        self.current_user
            .as_ref()
            .is_some_and(|u| roles.contains(&u.role.as_str()))
    }

    pub fn full_name(&self) -> Option<String> {
        self.current_user.as_ref().map(User::full_name)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TokenPayload<'a> {
    user_id: u32,
    email: &'a str,
    role: &'a str,
    timestamp: u64,
}

/// Build the opaque demo token: Base64 over a small JSON payload.
/// Non-cryptographic by design; anyone can decode it.
pub fn fabricate_token(user: &User, timestamp_ms: u64) -> String {
    let payload = TokenPayload {
        user_id: user.id,
        email: &user.email,
        role: &user.role,
        timestamp: timestamp_ms,
    };
    // Serializing a struct of primitives cannot fail.
    let json = serde_json::to_string(&payload).unwrap_or_default();
    STANDARD.encode(json)
}

/// Validate a credential pair against the fetched directory.
///
/// Selects the first *active* user whose email matches, then checks the
/// password against [`DEMO_CREDENTIALS`]. `now_ms` feeds the token
/// timestamp so callers control the clock (the wasm shell passes
/// `js_sys::Date::now()`).
pub fn authenticate(
    users: &[User],
    email: &str,
    password: &str,
    now_ms: u64,
) -> Result<LoginResponse, AuthError> {
    let user = users
        .iter()
        .find(|u| u.email == email && u.is_active)
        .ok_or(AuthError::UserNotFound)?;

    let valid = DEMO_CREDENTIALS
        .iter()
        .any(|(e, p)| *e == user.email && *p == password);
    if !valid {
        return Err(AuthError::InvalidCredentials);
    }

    Ok(LoginResponse {
        user: user.clone(),
        token: fabricate_token(user, now_ms),
    })
}

#[cfg(test)]
mod tests {
    use base64::Engine as _;

    use super::*;

    fn directory() -> Vec<User> {
        let mk = |id: u32, email: &str, role: &str, active: bool| User {
            id,
            email: email.into(),
            first_name: "Test".into(),
            last_name: role.to_uppercase(),
            role: role.into(),
            is_active: active,
            avatar: None,
            department: "QA".into(),
            created_at: "2024-01-01T00:00:00Z".into(),
            last_login: None,
        };
        vec![
            mk(1, "admin@lams.com", "admin", true),
            mk(2, "teacher@lams.com", "teacher", true),
            mk(3, "student@lams.com", "student", true),
            mk(4, "faculty@lams.com", "faculty", false),
        ]
    }

    #[test]
    fn login_succeeds_with_demo_credentials() {
        let users = directory();
        let resp = authenticate(&users, "admin@lams.com", "admin123", 1_700_000_000_000)
            .expect("admin login");
        assert_eq!(resp.user.role, "admin");
        assert!(!resp.token.is_empty());
    }

    #[test]
    fn wrong_password_is_invalid_credentials() {
        let users = directory();
        let err = authenticate(&users, "admin@lams.com", "wrong", 0).unwrap_err();
        assert_eq!(err, AuthError::InvalidCredentials);
    }

    #[test]
    fn unknown_email_is_user_not_found() {
        let users = directory();
        let err = authenticate(&users, "nobody@lams.com", "x", 0).unwrap_err();
        assert_eq!(err, AuthError::UserNotFound);
    }

    #[test]
    fn inactive_user_is_user_not_found() {
        // faculty@lams.com exists in the directory but is deactivated;
        // even the right password must not get through.
        let users = directory();
        let err = authenticate(&users, "faculty@lams.com", "faculty123", 0).unwrap_err();
        assert_eq!(err, AuthError::UserNotFound);
    }

    #[test]
    fn token_decodes_to_the_expected_payload() {
        let users = directory();
        let resp = authenticate(&users, "teacher@lams.com", "teacher123", 42).expect("login");

        let raw = STANDARD.decode(resp.token).expect("valid base64");
        let payload: serde_json::Value =
            serde_json::from_slice(&raw).expect("json payload");
        assert_eq!(payload["userId"], 2);
        assert_eq!(payload["email"], "teacher@lams.com");
        assert_eq!(payload["role"], "teacher");
        assert_eq!(payload["timestamp"], 42);
    }

    #[test]
    fn restore_from_persisted_user_needs_no_network() {
        // Startup restore path: a persisted user record alone is enough
        // to rebuild an authenticated session.
        let user = directory().remove(0);
        let session = Session::authenticated(user);
        assert!(session.is_authenticated);
        assert!(!session.is_loading);
        assert!(session.has_role("admin"));
    }

    #[test]
    fn role_predicates_are_false_while_anonymous() {
        let session = Session::anonymous();
        assert!(!session.has_role("admin"));
        assert!(!session.has_any_role(&["admin", "teacher"]));
        assert_eq!(session.full_name(), None);
    }

    #[test]
    fn has_any_role_matches_any_listed_role() {
        let session = Session::authenticated(directory().remove(1));
        assert!(session.has_any_role(&["admin", "teacher"]));
        assert!(!session.has_any_role(&["admin", "student"]));
    }

    #[test]
    fn error_messages_read_like_form_copy() {
        assert_eq!(AuthError::UserNotFound.to_string(), "User not found or inactive");
        assert_eq!(AuthError::InvalidCredentials.to_string(), "Invalid password");
    }

    #[test]
    fn credential_table_covers_all_demo_accounts() {
        for (email, password) in DEMO_CREDENTIALS {
            assert!(email.ends_with("@lams.com"));
            assert!(password.ends_with("123"));
        }
    }
}
