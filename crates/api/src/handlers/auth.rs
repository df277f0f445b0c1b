//! Handlers for the `/auth` resource (login, logout, session).

use axum::extract::State;
use axum::Json;
use digitalpro_core::forms::{validate_form, LoginForm};
use digitalpro_core::guard::{self, GuardState};
use digitalpro_core::roles::Role;
use digitalpro_db::auth::{AuthError, Identity};
use digitalpro_db::repositories::UserProfileRepo;
use serde::Serialize;

use crate::auth::session::SessionState;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::CurrentSession;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub user: Identity,
    pub role: Option<Role>,
}

/// What the client needs to render the admin route guard.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    #[serde(flatten)]
    pub session: SessionState,
    pub role: Option<Role>,
    pub guard: GuardState,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/login
///
/// Password sign-in. Bad credentials answer 401 with `setup_suggested`
/// because the usual cause is that no admin account exists yet.
pub async fn login(
    State(state): State<AppState>,
    Json(form): Json<LoginForm>,
) -> AppResult<Json<DataResponse<LoginResponse>>> {
    validate_form(&form)?;

    let session = match state.auth.sign_in(&form.email, &form.password).await {
        Ok(session) => session,
        Err(AuthError::InvalidCredentials) => {
            tracing::info!("Sign-in rejected: invalid credentials");
            return Err(AppError::InvalidCredentials);
        }
        Err(e) => {
            tracing::error!(error = %e, "Sign-in failed");
            return Err(AppError::InternalError(format!("Login failed: {e}")));
        }
    };

    let role = UserProfileRepo::role_of(state.db(), session.user.id)
        .await
        .map_err(AppError::remote("Login failed. Please try again."))?;

    tracing::info!(user_id = %session.user.id, "Signed in");

    Ok(Json(DataResponse::success(
        LoginResponse {
            access_token: session.access_token,
            expires_in: session.expires_in,
            user: session.user,
            role,
        },
        "Welcome back!",
    )))
}

/// POST /api/v1/auth/logout
///
/// Clears the session behind the bearer token. Signing out without a
/// session is a no-op.
pub async fn logout(
    State(state): State<AppState>,
    session: CurrentSession,
) -> AppResult<Json<DataResponse<SessionState>>> {
    if let Some(token) = &session.access_token {
        state.auth.sign_out(token).await.map_err(|e| {
            tracing::error!(error = %e, "Sign-out failed");
            AppError::InternalError(format!("Error signing out: {e}"))
        })?;
        state.sessions.forget(token).await;
        if let Some(user) = &session.state.current_user {
            tracing::info!(user_id = %user.id, "Signed out");
        }
    }

    Ok(Json(DataResponse::success(
        SessionState::signed_out(),
        "Signed out successfully",
    )))
}

/// GET /api/v1/auth/session
///
/// Current session snapshot plus the guard decision for admin routes.
pub async fn session(
    State(state): State<AppState>,
    session: CurrentSession,
) -> AppResult<Json<DataResponse<SessionResponse>>> {
    let role = match (&session.state.current_user, session.state.is_loading) {
        (Some(user), false) => UserProfileRepo::role_of(state.db(), user.id)
            .await
            .map_err(AppError::remote("Failed to load session"))?,
        _ => None,
    };
    let guard = guard::decide(
        session.state.is_loading,
        session.state.current_user.is_some(),
        role,
    );

    Ok(Json(DataResponse::new(SessionResponse {
        session: session.state,
        role,
        guard,
    })))
}
