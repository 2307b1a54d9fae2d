//! Navigation guard decisions.
//!
//! Guards are pure predicates over a [`Session`] snapshot. A denial is
//! a policy decision expressed as a redirect target, never an error.
//! The router layer in the `app` crate takes one reading of the session
//! signal, asks these functions, and navigates accordingly.

use crate::session::Session;

/// What the router should do with an attempted navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Proceed to the requested route.
    Allow,
    /// Deny; send to the login page. The caller stashes the attempted
    /// URL first so login can return the user there.
    ToLogin,
    /// Deny; the user is signed in but lacks a required role.
    ToUnauthorized,
    /// Deny; an auth-only page (e.g. login) was requested while already
    /// signed in. Send to the default landing page.
    ToDefault,
}

/// Protect a route that requires any signed-in user.
pub fn check_auth(session: &Session) -> GuardOutcome {
    if session.is_authenticated {
        GuardOutcome::Allow
    } else {
        GuardOutcome::ToLogin
    }
}

/// Protect a route that requires one of `required` roles. An empty
/// role list degenerates to [`check_auth`].
pub fn check_role(session: &Session, required: &[&str]) -> GuardOutcome {
    if !session.is_authenticated {
        return GuardOutcome::ToLogin;
    }
    if required.is_empty() || session.has_any_role(required) {
        GuardOutcome::Allow
    } else {
        GuardOutcome::ToUnauthorized
    }
}

/// Keep signed-in users off guest-only pages.
pub fn check_guest(session: &Session) -> GuardOutcome {
    if session.is_authenticated {
        GuardOutcome::ToDefault
    } else {
        GuardOutcome::Allow
    }
}

/// Where a freshly signed-in user lands when no attempted URL was
/// stashed. Unknown roles fall back to the student dashboard.
pub fn default_route_for_role(role: &str) -> &'static str {
    match role {
        "admin" => "/admin/dashboard",
        "teacher" | "faculty" => "/teacher/dashboard",
        "labtech" | "lab_technician" => "/lab/dashboard",
        _ => "/student/dashboard",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::User;

    fn signed_in(role: &str) -> Session {
        Session::authenticated(User {
            id: 1,
            email: format!("{role}@lams.com"),
            first_name: "Guard".into(),
            last_name: "Test".into(),
            role: role.into(),
            is_active: true,
            avatar: None,
            department: "QA".into(),
            created_at: "2024-01-01T00:00:00Z".into(),
            last_login: None,
        })
    }

    #[test]
    fn anonymous_is_sent_to_login() {
        let session = Session::anonymous();
        assert_eq!(check_auth(&session), GuardOutcome::ToLogin);
        assert_eq!(check_role(&session, &["admin"]), GuardOutcome::ToLogin);
    }

    #[test]
    fn authenticated_passes_auth_guard() {
        assert_eq!(check_auth(&signed_in("student")), GuardOutcome::Allow);
    }

    #[test]
    fn missing_role_is_unauthorized() {
        let session = signed_in("student");
        assert_eq!(
            check_role(&session, &["admin", "teacher"]),
            GuardOutcome::ToUnauthorized
        );
    }

    #[test]
    fn matching_role_is_allowed() {
        let session = signed_in("teacher");
        assert_eq!(check_role(&session, &["admin", "teacher"]), GuardOutcome::Allow);
    }

    #[test]
    fn empty_role_list_only_requires_sign_in() {
        assert_eq!(check_role(&signed_in("student"), &[]), GuardOutcome::Allow);
    }

    #[test]
    fn guest_guard_bounces_signed_in_users() {
        assert_eq!(check_guest(&signed_in("admin")), GuardOutcome::ToDefault);
        assert_eq!(check_guest(&Session::anonymous()), GuardOutcome::Allow);
    }

    #[test]
    fn role_landing_pages() {
        assert_eq!(default_route_for_role("admin"), "/admin/dashboard");
        assert_eq!(default_route_for_role("teacher"), "/teacher/dashboard");
        assert_eq!(default_route_for_role("faculty"), "/teacher/dashboard");
        assert_eq!(default_route_for_role("labtech"), "/lab/dashboard");
        assert_eq!(default_route_for_role("student"), "/student/dashboard");
        assert_eq!(default_route_for_role("unknown"), "/student/dashboard");
    }
}
