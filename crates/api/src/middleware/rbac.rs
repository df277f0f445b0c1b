//! Admin route guard.
//!
//! Wraps [`CurrentSession`] and applies [`guard::decide`] with the role from
//! the user's profile row:
//!
//! - session check still running: 503 with `Retry-After`
//! - no session, or a profile without the `admin` role: 401 pointing at the login page
//! - signed-in admin: the handler runs

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use digitalpro_core::guard::{self, GuardState};
use digitalpro_db::auth::Identity;
use digitalpro_db::repositories::UserProfileRepo;

use super::auth::CurrentSession;
use crate::error::AppError;
use crate::state::AppState;

/// A signed-in admin.
#[derive(Debug, Clone)]
pub struct AdminSession {
    pub user: Identity,
    pub access_token: String,
}

/// Requires a signed-in user whose profile carries the `admin` role.
///
/// ```ignore
/// async fn admin_only(RequireAdmin(admin): RequireAdmin) -> AppResult<Json<()>> {
///     tracing::info!(user_id = %admin.user.id, "admin action");
///     Ok(Json(()))
/// }
/// ```
pub struct RequireAdmin(pub AdminSession);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let session = CurrentSession::from_request_parts(parts, state).await?;

        let role = match (&session.state.current_user, session.state.is_loading) {
            (Some(user), false) => UserProfileRepo::role_of(state.db(), user.id)
                .await
                .map_err(AppError::remote("Failed to verify admin access"))?,
            _ => None,
        };

        match guard::decide(
            session.state.is_loading,
            session.state.current_user.is_some(),
            role,
        ) {
            GuardState::Loading => Err(AppError::SessionLoading),
            GuardState::Unauthorized => Err(AppError::LoginRequired),
            GuardState::Authorized => match (session.state.current_user, session.access_token) {
                (Some(user), Some(access_token)) => Ok(RequireAdmin(AdminSession {
                    user,
                    access_token,
                })),
                _ => Err(AppError::LoginRequired),
            },
        }
    }
}
