//! Proposal review.

use axum::extract::{Path, Query, State};
use axum::Json;
use digitalpro_core::dashboard::ProposalStats;
use digitalpro_core::error::CoreError;
use digitalpro_core::status::{empty_list_placeholder, ProposalStatus};
use digitalpro_core::types::RowId;
use digitalpro_db::models::proposal::Proposal;
use digitalpro_db::repositories::ProposalRepo;

use super::{parse_filter, parse_status, StatusFilter, StatusUpdate};
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::{DataResponse, ListView, TalliedList};
use crate::state::AppState;

/// GET /api/v1/admin/proposals?status=pending
///
/// Loads every proposal so the stats cover the whole table, then filters.
pub async fn list(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Query(filter): Query<StatusFilter>,
) -> AppResult<Json<DataResponse<TalliedList<Proposal, ProposalStats>>>> {
    let status = parse_filter::<ProposalStatus>(&filter)?;

    let proposals = ProposalRepo::list(state.db(), None)
        .await
        .map_err(AppError::remote("Failed to load proposals"))?;

    let stats = ProposalStats::compute(proposals.iter().map(|p| p.status));
    let items = proposals
        .into_iter()
        .filter(|p| status.map_or(true, |s| p.status == s))
        .collect();

    Ok(Json(DataResponse::new(TalliedList {
        list: ListView::new(items, empty_list_placeholder("proposals", status)),
        stats,
    })))
}

/// GET /api/v1/admin/proposals/{id}
pub async fn show(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<RowId>,
) -> AppResult<Json<DataResponse<Proposal>>> {
    let proposal = ProposalRepo::find_by_id(state.db(), id)
        .await
        .map_err(AppError::remote("Failed to load proposals"))?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Proposal",
            id,
        }))?;

    Ok(Json(DataResponse::new(proposal)))
}

/// PUT /api/v1/admin/proposals/{id}/status
///
/// Any status may follow any other.
pub async fn update_status(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<RowId>,
    Json(input): Json<StatusUpdate>,
) -> AppResult<Json<DataResponse<Proposal>>> {
    let status: ProposalStatus = parse_status(&input.status)?;

    let proposal = ProposalRepo::update_status(state.db(), id, status)
        .await
        .map_err(AppError::remote("Failed to update proposal status"))?;

    tracing::info!(
        proposal_id = %id,
        status = %status,
        user_id = %admin.user.id,
        "Proposal status updated"
    );

    Ok(Json(DataResponse::success(
        proposal,
        format!("Proposal {status} successfully"),
    )))
}
