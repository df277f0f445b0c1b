//! First-run admin account setup.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use digitalpro_core::error::CoreError;
use digitalpro_core::forms::{validate_form, AdminSetupForm};
use digitalpro_core::guard::LOGIN_PATH;
use digitalpro_db::repositories::UserProfileRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SetupComplete {
    pub email: String,
    /// Where to sign in with the new account.
    pub login_path: &'static str,
}

/// POST /api/v1/admin/setup
///
/// Calls `create_admin_user`. A procedure result with `success = false`
/// is reported as a validation error carrying the procedure's message.
pub async fn create_admin(
    State(state): State<AppState>,
    Json(form): Json<AdminSetupForm>,
) -> AppResult<(StatusCode, Json<DataResponse<SetupComplete>>)> {
    validate_form(&form)?;

    let result = UserProfileRepo::create_admin(state.db(), &form.email, &form.password)
        .await
        .map_err(AppError::remote(
            "Failed to create admin account. Please try again.",
        ))?;

    if !result.success {
        let message = result
            .error
            .unwrap_or_else(|| "Failed to create admin account".to_string());
        return Err(AppError::Core(CoreError::Validation(message)));
    }

    tracing::info!(email = %form.email, "Admin account created via setup");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse::success(
            SetupComplete {
                email: form.email,
                login_path: LOGIN_PATH,
            },
            "Admin account created successfully!",
        )),
    ))
}
