//! Case-study management.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use digitalpro_core::editor::{toggle_featured, CaseStudyEditor, EditorEdit};
use digitalpro_core::error::CoreError;
use digitalpro_core::forms::{validate_form, CaseStudyForm};
use digitalpro_core::types::RowId;
use digitalpro_db::models::case_study::CaseStudy;
use digitalpro_db::repositories::CaseStudyRepo;
use serde::Deserialize;

use super::Removed;
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::{DataResponse, ListView};
use crate::state::AppState;

/// GET /api/v1/admin/case-studies
pub async fn list(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<ListView<CaseStudy>>>> {
    let items = CaseStudyRepo::list(state.db())
        .await
        .map_err(AppError::remote("Failed to load case studies"))?;
    Ok(Json(DataResponse::new(ListView::new(
        items,
        "No case studies yet",
    ))))
}

/// Body of `POST /admin/case-studies/editor`.
#[derive(Debug, Deserialize)]
pub struct EditorRequest {
    /// The draft as the editor currently holds it.
    #[serde(default)]
    pub form: CaseStudyForm,
    pub edit: EditorEdit,
}

/// POST /api/v1/admin/case-studies/editor
///
/// Applies one list edit to an unsaved draft and returns the resulting
/// editor state. Nothing is stored; an edit that changes nothing returns
/// the draft unchanged with an error notice.
pub async fn edit_draft(
    RequireAdmin(_admin): RequireAdmin,
    Json(request): Json<EditorRequest>,
) -> AppResult<Json<DataResponse<CaseStudyEditor>>> {
    let mut editor = CaseStudyEditor::from_form(request.form);
    if editor.apply(request.edit) {
        Ok(Json(DataResponse::new(editor)))
    } else {
        Ok(Json(DataResponse::error(editor, "Nothing to change")))
    }
}

/// POST /api/v1/admin/case-studies
///
/// Blank result and tag entries are dropped; new case studies start
/// unfeatured.
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(form): Json<CaseStudyForm>,
) -> AppResult<(StatusCode, Json<DataResponse<CaseStudy>>)> {
    validate_form(&form)?;
    let payload = CaseStudyEditor::from_form(form).to_payload();

    let case_study = CaseStudyRepo::create(state.db(), payload)
        .await
        .map_err(AppError::remote("Failed to save case study"))?;

    tracing::info!(
        case_study_id = %case_study.id,
        user_id = %admin.user.id,
        "Case study created"
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse::success(
            case_study,
            "Case study created successfully",
        )),
    ))
}

/// PUT /api/v1/admin/case-studies/{id}
///
/// Overwrites the editable fields; `featured` is left as it is.
pub async fn update(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<RowId>,
    Json(form): Json<CaseStudyForm>,
) -> AppResult<Json<DataResponse<CaseStudy>>> {
    validate_form(&form)?;
    let payload = CaseStudyEditor::from_form(form).to_payload();

    let case_study = CaseStudyRepo::update(state.db(), id, &payload)
        .await
        .map_err(AppError::remote("Failed to save case study"))?;

    tracing::info!(case_study_id = %id, user_id = %admin.user.id, "Case study updated");

    Ok(Json(DataResponse::success(
        case_study,
        "Case study updated successfully",
    )))
}

/// DELETE /api/v1/admin/case-studies/{id}
pub async fn delete(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<RowId>,
) -> AppResult<Json<DataResponse<Removed>>> {
    CaseStudyRepo::delete(state.db(), id)
        .await
        .map_err(AppError::remote("Failed to delete case study"))?;

    tracing::info!(case_study_id = %id, user_id = %admin.user.id, "Case study deleted");

    Ok(Json(DataResponse::success(
        Removed { id },
        "Case study deleted successfully",
    )))
}

/// POST /api/v1/admin/case-studies/{id}/featured
///
/// Reads the current flag and writes its negation.
pub async fn toggle_featured_flag(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<RowId>,
) -> AppResult<Json<DataResponse<CaseStudy>>> {
    const FAILED: &str = "Failed to update featured status";

    let current = CaseStudyRepo::find_by_id(state.db(), id)
        .await
        .map_err(AppError::remote(FAILED))?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "CaseStudy",
            id,
        }))?;

    let featured = toggle_featured(current.featured);
    let case_study = CaseStudyRepo::set_featured(state.db(), id, featured)
        .await
        .map_err(AppError::remote(FAILED))?;

    tracing::info!(
        case_study_id = %id,
        featured,
        user_id = %admin.user.id,
        "Case study featured flag toggled"
    );

    let verb = if featured { "featured" } else { "unfeatured" };
    Ok(Json(DataResponse::success(
        case_study,
        format!("Case study {verb} successfully"),
    )))
}
