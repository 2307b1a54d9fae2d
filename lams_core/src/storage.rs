//! Durable storage keys and the REST collaborator base URL.
//!
//! All localStorage keys in one place so the stores and guards cannot
//! drift apart on spelling. Last write wins on every key; each has
//! exactly one writer path.

/// Theme mode preference ("light" / "dark"). Written only on an
/// explicit user choice - never on OS-preference mirroring.
pub const THEME_KEY: &str = "lams-theme";

/// Opaque fabricated auth token.
pub const TOKEN_KEY: &str = "lams_token";

/// Serialized [`crate::user::User`] record of the signed-in user.
pub const USER_KEY: &str = "lams_user";

/// URL a guard stashed before redirecting to login. Transient: consumed
/// (read + removed) on the next successful login.
pub const ATTEMPTED_URL_KEY: &str = "lams_attempted_url";

/// Base URL of the user directory REST collaborator.
pub const API_URL: &str = "http://127.0.0.1:3000";
