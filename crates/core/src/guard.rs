//! Admin route guard decision.
//!
//! A request to an admin route is allowed only when the session has
//! resolved, a user is signed in, and that user's profile carries the
//! `admin` role. Signed-in users without an admin profile are treated the
//! same as anonymous visitors.

use serde::Serialize;

use crate::roles::Role;

/// Where unauthorized visitors are sent.
pub const LOGIN_PATH: &str = "/admin/login";

/// Where the login page points when no admin account exists yet.
pub const SETUP_PATH: &str = "/admin/setup";

/// Outcome of guarding an admin route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GuardState {
    /// The session check has not finished yet.
    Loading,
    /// Redirect to [`LOGIN_PATH`].
    Unauthorized,
    /// Render the admin content.
    Authorized,
}

/// Decide the guard state from the session snapshot and the profile role
/// (`None` when the user has no profile row or is not signed in).
pub fn decide(is_loading: bool, signed_in: bool, role: Option<Role>) -> GuardState {
    if is_loading {
        return GuardState::Loading;
    }
    match (signed_in, role) {
        (true, Some(role)) if role.is_admin() => GuardState::Authorized,
        _ => GuardState::Unauthorized,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_wins_over_everything() {
        assert_eq!(decide(true, true, Some(Role::Admin)), GuardState::Loading);
        assert_eq!(decide(true, false, None), GuardState::Loading);
    }

    #[test]
    fn anonymous_is_unauthorized() {
        assert_eq!(decide(false, false, None), GuardState::Unauthorized);
    }

    #[test]
    fn signed_in_non_admin_is_unauthorized() {
        assert_eq!(decide(false, true, Some(Role::User)), GuardState::Unauthorized);
        assert_eq!(decide(false, true, None), GuardState::Unauthorized);
    }

    #[test]
    fn signed_in_admin_is_authorized() {
        assert_eq!(decide(false, true, Some(Role::Admin)), GuardState::Authorized);
    }
}
