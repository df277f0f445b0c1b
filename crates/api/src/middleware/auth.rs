//! Bearer-token session extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use digitalpro_core::error::CoreError;

use crate::auth::session::SessionState;
use crate::error::AppError;
use crate::state::AppState;

/// The session behind the request's `Authorization: Bearer` token.
///
/// Requests without the header resolve to a signed-out session; this
/// extractor never rejects anonymous visitors.
///
/// ```ignore
/// async fn whoami(session: CurrentSession) -> Json<SessionState> {
///     Json(session.state)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CurrentSession {
    pub access_token: Option<String>,
    pub state: SessionState,
}

/// Extract the bearer token, `Ok(None)` when no header is present.
pub fn bearer_token(parts: &Parts) -> Result<Option<String>, AppError> {
    let Some(header) = parts.headers.get(AUTHORIZATION) else {
        return Ok(None);
    };
    let token = header
        .to_str()
        .ok()
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;
    Ok(Some(token.to_string()))
}

impl FromRequestParts<AppState> for CurrentSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let access_token = bearer_token(parts)?;
        let session = match &access_token {
            Some(token) => state.sessions.resolve(token).await,
            None => SessionState::signed_out(),
        };
        Ok(CurrentSession {
            access_token,
            state: session,
        })
    }
}
