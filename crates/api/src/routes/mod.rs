pub mod admin;
pub mod auth;
pub mod health;
pub mod public;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /layout?path=                                     navigation chrome
/// /pages/{home,services,about,tools,contact,proposal}
/// /pages/case-studies?category=                     store-backed
/// /contact                                          submit contact form (POST)
/// /proposals                                        submit proposal request (POST)
/// /tools/review-links                               generate review links (POST)
///
/// /auth/login                                       sign in (POST)
/// /auth/logout                                      sign out (POST)
/// /auth/session                                     session + guard state (GET)
///
/// /admin/setup                                      first admin account (POST, public)
/// /admin/dashboard                                  stats + recent proposals
/// /admin/case-studies                               list, create
/// /admin/case-studies/editor                        apply a list edit to a draft (POST)
/// /admin/case-studies/{id}                          update, delete
/// /admin/case-studies/{id}/featured                 toggle featured (POST)
/// /admin/proposals?status=                          list + per-status stats
/// /admin/proposals/{id}                             get
/// /admin/proposals/{id}/status                      update status (PUT)
/// /admin/messages?status=                           list + per-status stats
/// /admin/messages/{id}                              get (marks new as read)
/// /admin/messages/{id}/status                       update status (PUT)
/// /admin/messages/{id}/notes                        save notes (PUT)
/// /admin/users                                      list, create
/// /admin/users/{id}                                 remove admin access (DELETE)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(public::router())
        .nest("/auth", auth::router())
        .nest("/admin", admin::router())
}
