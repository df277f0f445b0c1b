//! Route definitions for the public site.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{contact, pages, proposals, tools};
use crate::state::AppState;

/// ```text
/// GET  /layout                -> pages::layout
/// GET  /pages/home            -> pages::home
/// GET  /pages/services        -> pages::services
/// GET  /pages/about           -> pages::about
/// GET  /pages/tools           -> pages::tools
/// GET  /pages/contact         -> pages::contact
/// GET  /pages/proposal        -> pages::proposal
/// GET  /pages/case-studies    -> pages::case_studies
/// POST /contact               -> contact::submit
/// POST /proposals             -> proposals::submit
/// POST /tools/review-links    -> tools::review_links
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/layout", get(pages::layout))
        .route("/pages/home", get(pages::home))
        .route("/pages/services", get(pages::services))
        .route("/pages/about", get(pages::about))
        .route("/pages/tools", get(pages::tools))
        .route("/pages/contact", get(pages::contact))
        .route("/pages/proposal", get(pages::proposal))
        .route("/pages/case-studies", get(pages::case_studies))
        .route("/contact", post(contact::submit))
        .route("/proposals", post(proposals::submit))
        .route("/tools/review-links", post(tools::review_links))
}
