//! Access to the hosted data-table service.
//!
//! - [`client`] -- the [`TableClient`] contract every backend implements.
//! - [`rest`] -- hosted REST implementation over `reqwest`.
//! - [`memory`] -- in-process implementation used for local development and tests.
//! - [`auth`] -- sign-in / sign-out against the hosted auth service.
//! - [`models`] and [`repositories`] -- typed rows and per-table operations.

pub mod auth;
pub mod client;
pub mod memory;
pub mod models;
pub mod repositories;
pub mod rest;

use std::sync::Arc;

pub use client::{Order, SelectQuery, StoreError, TableClient};
pub use memory::MemoryStore;
pub use rest::RestTableClient;

/// Shared handle to whichever backend the process was started with.
pub type SharedClient = Arc<dyn TableClient>;

/// Verify the backend is reachable.
pub async fn health_check(client: &dyn TableClient) -> Result<(), StoreError> {
    client.health_check().await
}
