use std::sync::Arc;

use digitalpro_db::auth::AuthProvider;
use digitalpro_db::{SharedClient, TableClient};

use crate::auth::session::SessionProvider;
use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything inside is behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Remote data tables (hosted REST or in-memory).
    pub client: SharedClient,
    /// Auth service used for sign-in / sign-out.
    pub auth: Arc<dyn AuthProvider>,
    /// Per-token session state.
    pub sessions: Arc<SessionProvider>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Borrow the table client in the form repositories take.
    pub fn db(&self) -> &dyn TableClient {
        self.client.as_ref()
    }
}
