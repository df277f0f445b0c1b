//! The generic data-table contract.
//!
//! Rows travel as JSON objects; typed repositories in
//! [`crate::repositories`] decode them into models.

use async_trait::async_trait;
use digitalpro_core::types::RowId;
use serde_json::Value;

/// Errors surfaced by any [`TableClient`] implementation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend rejected the credentials used for the call.
    #[error("Not authorized by remote store ({status})")]
    Unauthorized { status: u16 },

    /// The backend returned a non-2xx status code.
    #[error("Remote store error ({status}): {body}")]
    Remote { status: u16, body: String },

    /// An update or delete matched no row.
    #[error("No row with id {id} in {table}")]
    NotFound { table: String, id: RowId },

    /// A returned row did not have the expected shape.
    #[error("Malformed row: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Sort order applied to a select.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub column: String,
    pub descending: bool,
}

/// Equality filters plus an optional order. No pagination.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectQuery {
    pub filters: Vec<(String, String)>,
    pub order: Option<Order>,
}

impl SelectQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every list view orders by `created_at` descending.
    pub fn newest_first() -> Self {
        Self::new().order_desc("created_at")
    }

    pub fn eq(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.push((column.into(), value.into()));
        self
    }

    pub fn by_id(id: RowId) -> Self {
        Self::new().eq("id", id.to_string())
    }

    pub fn order_desc(mut self, column: impl Into<String>) -> Self {
        self.order = Some(Order {
            column: column.into(),
            descending: true,
        });
        self
    }
}

/// Remote table operations. Object-safe so the server can hold an
/// `Arc<dyn TableClient>` regardless of backend.
///
/// No call is retried; failures are returned to the caller as-is.
#[async_trait]
pub trait TableClient: Send + Sync {
    async fn select(&self, table: &str, query: &SelectQuery) -> Result<Vec<Value>, StoreError>;

    /// Insert one row and return it as stored (with server-filled defaults).
    async fn insert(&self, table: &str, row: Value) -> Result<Value, StoreError>;

    /// Apply `patch` to the row with `id` and return the updated row.
    async fn update(&self, table: &str, id: RowId, patch: Value) -> Result<Value, StoreError>;

    async fn delete(&self, table: &str, id: RowId) -> Result<(), StoreError>;

    /// Invoke a server-side procedure by name.
    async fn call_procedure(&self, name: &str, args: Value) -> Result<Value, StoreError>;

    async fn health_check(&self) -> Result<(), StoreError>;
}
