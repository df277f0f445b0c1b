use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use digitalpro_core::error::CoreError;
use digitalpro_core::guard::{LOGIN_PATH, SETUP_PATH};
use digitalpro_db::StoreError;
use serde_json::json;

/// Seconds a client should wait before retrying while a session check runs.
pub const SESSION_RETRY_AFTER_SECS: u64 = 1;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds the remote-store and
/// session variants. Implements [`IntoResponse`] to produce consistent JSON
/// error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A remote call failed. `message` is what the visitor sees; `source`
    /// is only logged.
    #[error("{message}: {source}")]
    Remote {
        message: &'static str,
        #[source]
        source: StoreError,
    },

    /// The session check for this request has not finished.
    #[error("Session check in progress")]
    SessionLoading,

    /// No signed-in admin; the client should go to the login page.
    #[error("Admin sign-in required")]
    LoginRequired,

    /// Sign-in rejected. Usually means no admin account exists yet.
    #[error("Invalid login credentials")]
    InvalidCredentials,

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Map a store failure to the message shown for this operation.
    ///
    /// ```ignore
    /// ProposalRepo::create(client, form)
    ///     .await
    ///     .map_err(AppError::remote("Failed to submit proposal. Please try again."))?;
    /// ```
    pub fn remote(message: &'static str) -> impl FnOnce(StoreError) -> AppError {
        move |source| AppError::Remote { message, source }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "VALIDATION_ERROR",
                    msg.clone(),
                ),
                CoreError::InvalidFields(fields) => {
                    let body = json!({
                        "error": "Please correct the highlighted fields",
                        "code": "VALIDATION_ERROR",
                        "fields": fields,
                    });
                    return (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(body)).into_response();
                }
                CoreError::Unauthorized(msg) => {
                    (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
                }
                CoreError::Forbidden(msg) => (StatusCode::FORBIDDEN, "FORBIDDEN", msg.clone()),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            // --- Remote store errors ---
            AppError::Remote { message, source } => match source {
                StoreError::NotFound { table, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("No {table} row with id {id}"),
                ),
                other => {
                    tracing::error!(error = %other, "Remote store call failed");
                    (StatusCode::BAD_GATEWAY, "REMOTE_ERROR", message.to_string())
                }
            },

            // --- Session / guard ---
            AppError::SessionLoading => {
                let body = json!({
                    "error": "Checking your session, please retry shortly",
                    "code": "SESSION_LOADING",
                });
                return (
                    StatusCode::SERVICE_UNAVAILABLE,
                    [(header::RETRY_AFTER, SESSION_RETRY_AFTER_SECS.to_string())],
                    axum::Json(body),
                )
                    .into_response();
            }
            AppError::LoginRequired => {
                let body = json!({
                    "error": "Please sign in with an admin account",
                    "code": "UNAUTHORIZED",
                    "redirect": LOGIN_PATH,
                });
                return (StatusCode::UNAUTHORIZED, axum::Json(body)).into_response();
            }
            AppError::InvalidCredentials => {
                let body = json!({
                    "error": "No admin account found. Please create an admin account first.",
                    "code": "INVALID_CREDENTIALS",
                    "setup_suggested": true,
                    "redirect": SETUP_PATH,
                });
                return (StatusCode::UNAUTHORIZED, axum::Json(body)).into_response();
            }

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
