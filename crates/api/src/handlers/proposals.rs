//! Handler for the public proposal request form.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use digitalpro_core::forms::{validate_form, ProposalForm};
use digitalpro_db::models::proposal::Proposal;
use digitalpro_db::repositories::ProposalRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/proposals
///
/// Validates, then inserts one `proposals` row with status `pending`.
pub async fn submit(
    State(state): State<AppState>,
    Json(form): Json<ProposalForm>,
) -> AppResult<(StatusCode, Json<DataResponse<Proposal>>)> {
    validate_form(&form)?;

    let proposal = ProposalRepo::create(state.db(), form)
        .await
        .map_err(AppError::remote("Failed to submit proposal. Please try again."))?;

    tracing::info!(
        proposal_id = %proposal.id,
        services = proposal.services.len(),
        "Proposal submitted"
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse::success(
            proposal,
            "Proposal submitted successfully! We'll review it and get back to you within 24 hours.",
        )),
    ))
}
