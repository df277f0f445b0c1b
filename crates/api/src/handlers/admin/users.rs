//! Admin account management. Removing access demotes the profile to
//! `user`; accounts are never deleted.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use digitalpro_core::error::CoreError;
use digitalpro_core::forms::{validate_form, AdminUserForm};
use digitalpro_core::roles::Role;
use digitalpro_core::types::RowId;
use digitalpro_db::models::user_profile::AdminUser;
use digitalpro_db::repositories::UserProfileRepo;
use serde::Serialize;

use super::Removed;
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::{DataResponse, ListView};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CreatedAdmin {
    pub email: String,
}

/// GET /api/v1/admin/users
pub async fn list(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<ListView<AdminUser>>>> {
    let admins = UserProfileRepo::list_admins(state.db())
        .await
        .map_err(AppError::remote("Failed to load admin users"))?;

    Ok(Json(DataResponse::new(ListView::new(
        admins,
        "No admin users yet",
    ))))
}

/// POST /api/v1/admin/users
///
/// Creates a new admin account or promotes an existing user.
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(form): Json<AdminUserForm>,
) -> AppResult<(StatusCode, Json<DataResponse<CreatedAdmin>>)> {
    validate_form(&form)?;

    let result = UserProfileRepo::create_admin(state.db(), &form.email, &form.password)
        .await
        .map_err(AppError::remote("Failed to create admin user"))?;

    if !result.success {
        let message = result
            .error
            .unwrap_or_else(|| "Failed to create admin user".to_string());
        return Err(AppError::Core(CoreError::Validation(message)));
    }

    tracing::info!(email = %form.email, user_id = %admin.user.id, "Admin user created");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse::success(
            CreatedAdmin { email: form.email },
            "Admin user created successfully",
        )),
    ))
}

/// DELETE /api/v1/admin/users/{id}
pub async fn remove_access(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<RowId>,
) -> AppResult<Json<DataResponse<Removed>>> {
    UserProfileRepo::set_role(state.db(), id, Role::User)
        .await
        .map_err(AppError::remote("Failed to remove admin access"))?;

    tracing::info!(target_user_id = %id, user_id = %admin.user.id, "Admin access removed");

    Ok(Json(DataResponse::success(
        Removed { id },
        "Admin access removed successfully",
    )))
}
