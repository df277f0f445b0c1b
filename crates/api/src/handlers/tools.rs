//! Handler for the review-link generator on the Tools page.

use axum::Json;
use digitalpro_core::forms::{validate_form, ReviewLinkForm};
use digitalpro_core::review_links::{self, ReviewLink, USAGE_TIPS};
use serde::Serialize;

use crate::error::AppResult;
use crate::response::DataResponse;

#[derive(Debug, Serialize)]
pub struct ReviewLinks {
    pub links: Vec<ReviewLink>,
    pub usage_tips: &'static [&'static str],
}

/// POST /api/v1/tools/review-links
///
/// Pure templating; nothing is stored.
pub async fn review_links(
    Json(form): Json<ReviewLinkForm>,
) -> AppResult<Json<DataResponse<ReviewLinks>>> {
    validate_form(&form)?;

    Ok(Json(DataResponse::success(
        ReviewLinks {
            links: review_links::generate(&form),
            usage_tips: USAGE_TIPS,
        },
        "Review links generated successfully!",
    )))
}
