//! Handlers for the public page view models.
//!
//! Everything except the case-study page is static content from
//! `digitalpro_core::content`.

use axum::extract::{Query, State};
use axum::Json;
use digitalpro_core::catalog::{self, CASE_STUDY_CATEGORIES, CATEGORY_ALL};
use digitalpro_core::content::{
    self, AboutPage, ContactPage, HomePage, Layout, ProposalPage, ServicesPage, ToolsPage,
};
use digitalpro_core::error::CoreError;
use digitalpro_db::models::case_study::CaseStudy;
use digitalpro_db::repositories::CaseStudyRepo;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::response::{DataResponse, ListView};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct LayoutParams {
    pub path: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CaseStudyParams {
    pub category: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CaseStudiesPage {
    pub categories: &'static [&'static str],
    pub selected_category: String,
    pub case_studies: ListView<CaseStudy>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/layout?path=/services
pub async fn layout(Query(params): Query<LayoutParams>) -> Json<DataResponse<Layout>> {
    let path = params.path.unwrap_or_else(|| "/".into());
    Json(DataResponse::new(content::layout(&path)))
}

/// GET /api/v1/pages/home
pub async fn home() -> Json<DataResponse<HomePage>> {
    Json(DataResponse::new(content::home()))
}

/// GET /api/v1/pages/services
pub async fn services() -> Json<DataResponse<ServicesPage>> {
    Json(DataResponse::new(content::services()))
}

/// GET /api/v1/pages/about
pub async fn about() -> Json<DataResponse<AboutPage>> {
    Json(DataResponse::new(content::about()))
}

/// GET /api/v1/pages/tools
pub async fn tools() -> Json<DataResponse<ToolsPage>> {
    Json(DataResponse::new(content::tools()))
}

/// GET /api/v1/pages/contact
pub async fn contact() -> Json<DataResponse<ContactPage>> {
    Json(DataResponse::new(content::contact()))
}

/// GET /api/v1/pages/proposal
pub async fn proposal() -> Json<DataResponse<ProposalPage>> {
    Json(DataResponse::new(content::proposal()))
}

/// GET /api/v1/pages/case-studies?category=E-commerce
///
/// Loads every case study, newest first, then keeps those whose tags
/// contain the selected category.
pub async fn case_studies(
    State(state): State<AppState>,
    Query(params): Query<CaseStudyParams>,
) -> AppResult<Json<DataResponse<CaseStudiesPage>>> {
    let category = params
        .category
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| CATEGORY_ALL.to_string());
    if !CASE_STUDY_CATEGORIES.contains(&category.as_str()) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Unknown category '{category}'. Must be one of: {}",
            CASE_STUDY_CATEGORIES.join(", ")
        ))));
    }

    let items: Vec<CaseStudy> = CaseStudyRepo::list(state.db())
        .await
        .map_err(AppError::remote("Failed to load case studies"))?
        .into_iter()
        .filter(|cs| catalog::matches_category(&cs.tags, &category))
        .collect();

    Ok(Json(DataResponse::new(CaseStudiesPage {
        categories: CASE_STUDY_CATEGORIES,
        selected_category: category,
        case_studies: ListView::new(items, "No case studies yet"),
    })))
}
