//! Authentication against the hosted auth service.
//!
//! - [`hosted`] -- GoTrue-style REST client.
//! - [`jwt`] -- HS256 access tokens issued by the in-memory backend.
//! - [`password`] -- Argon2id hashing for the in-memory backend.
//!
//! Every provider publishes [`AuthEvent`]s on a broadcast channel so the
//! server's session state follows sign-ins and sign-outs.

pub mod hosted;
pub mod jwt;
pub mod password;

use async_trait::async_trait;
use digitalpro_core::types::RowId;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

pub use hosted::HostedAuthClient;

/// Capacity of each provider's event channel.
pub const EVENT_CHANNEL_CAPACITY: usize = 64;

/// The signed-in user as reported by the auth service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: RowId,
    pub email: String,
}

/// Result of a successful password sign-in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSession {
    pub access_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub user: Identity,
}

/// Session-change notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthEvent {
    SignedIn {
        access_token: String,
        /// Access token lifetime in seconds, as reported at sign-in.
        expires_in: i64,
        user: Identity,
    },
    SignedOut { access_token: String },
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid login credentials")]
    InvalidCredentials,

    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Auth service error ({status}): {body}")]
    Remote { status: u16, body: String },

    #[error("Auth internal error: {0}")]
    Internal(String),
}

/// Operations the server needs from the auth service.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, AuthError>;

    async fn sign_out(&self, access_token: &str) -> Result<(), AuthError>;

    /// Resolve the user behind an access token. `Ok(None)` when the token is
    /// unknown, expired or revoked.
    async fn get_user(&self, access_token: &str) -> Result<Option<Identity>, AuthError>;

    /// Subscribe to session-change notifications. Dropping the receiver
    /// unsubscribes.
    fn subscribe(&self) -> broadcast::Receiver<AuthEvent>;
}
