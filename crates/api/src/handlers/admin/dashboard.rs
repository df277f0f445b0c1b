//! Admin dashboard.

use axum::extract::State;
use axum::Json;
use digitalpro_core::dashboard::{self, DashboardStats};
use digitalpro_db::models::proposal::Proposal;
use digitalpro_db::repositories::{CaseStudyRepo, ContactMessageRepo, ProposalRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::{DataResponse, ListView};
use crate::state::AppState;

const LOAD_FAILED: &str = "Failed to load dashboard data";

#[derive(Debug, Serialize)]
pub struct Dashboard {
    /// Email of the signed-in admin, for the greeting.
    pub admin_email: String,
    pub stats: DashboardStats,
    pub recent_proposals: ListView<Proposal>,
}

/// GET /api/v1/admin/dashboard
///
/// Reads the three tables in full and aggregates in memory.
pub async fn show(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Dashboard>>> {
    let proposals = ProposalRepo::list(state.db(), None)
        .await
        .map_err(AppError::remote(LOAD_FAILED))?;
    let case_studies = CaseStudyRepo::list(state.db())
        .await
        .map_err(AppError::remote(LOAD_FAILED))?;
    let messages = ContactMessageRepo::list(state.db(), None)
        .await
        .map_err(AppError::remote(LOAD_FAILED))?;

    let stats = DashboardStats::compute(
        proposals.iter().map(|p| p.status),
        case_studies.iter().map(|cs| cs.featured),
        messages.iter().map(|m| m.status),
    );

    Ok(Json(DataResponse::new(Dashboard {
        admin_email: admin.user.email,
        stats,
        recent_proposals: ListView::new(dashboard::recent(&proposals), "No proposals yet"),
    })))
}
