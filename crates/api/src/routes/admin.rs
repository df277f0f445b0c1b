//! Route definitions for the admin console.
//!
//! Every handler here except `/setup` extracts `RequireAdmin`.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::admin::{case_studies, dashboard, messages, proposals, users};
use crate::handlers::setup;
use crate::state::AppState;

/// Routes mounted at `/admin`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/setup", post(setup::create_admin))
        .route("/dashboard", get(dashboard::show))
        .route(
            "/case-studies",
            get(case_studies::list).post(case_studies::create),
        )
        .route("/case-studies/editor", post(case_studies::edit_draft))
        .route(
            "/case-studies/{id}",
            put(case_studies::update).delete(case_studies::delete),
        )
        .route(
            "/case-studies/{id}/featured",
            post(case_studies::toggle_featured_flag),
        )
        .route("/proposals", get(proposals::list))
        .route("/proposals/{id}", get(proposals::show))
        .route("/proposals/{id}/status", put(proposals::update_status))
        .route("/messages", get(messages::list))
        .route("/messages/{id}", get(messages::show))
        .route("/messages/{id}/status", put(messages::update_status))
        .route("/messages/{id}/notes", put(messages::update_notes))
        .route("/users", get(users::list).post(users::create))
        .route("/users/{id}", delete(users::remove_access))
}
