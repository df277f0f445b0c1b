//! REST client for the hosted auth service (GoTrue-style endpoints).

use async_trait::async_trait;
use reqwest::{Response, StatusCode};
use tokio::sync::broadcast;

use super::{AuthError, AuthEvent, AuthProvider, AuthSession, Identity, EVENT_CHANNEL_CAPACITY};

pub struct HostedAuthClient {
    client: reqwest::Client,
    base_url: String,
    anon_key: String,
    events: broadcast::Sender<AuthEvent>,
}

impl HostedAuthClient {
    pub fn new(base_url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url, anon_key)
    }

    pub fn with_client(
        client: reqwest::Client,
        base_url: impl Into<String>,
        anon_key: impl Into<String>,
    ) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            anon_key: anon_key.into(),
            events,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/auth/v1/{path}", self.base_url)
    }

    async fn check_status(response: Response) -> Result<Response, AuthError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(AuthError::Remote {
            status: status.as_u16(),
            body,
        })
    }

    fn publish(&self, event: AuthEvent) {
        // No subscribers is not an error.
        let _ = self.events.send(event);
    }
}

#[async_trait]
impl AuthProvider for HostedAuthClient {
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, AuthError> {
        let response = self
            .client
            .post(self.url("token"))
            .query(&[("grant_type", "password")])
            .header("apikey", &self.anon_key)
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await?;

        // The service answers bad credentials with 400 `invalid_grant`.
        if response.status() == StatusCode::BAD_REQUEST {
            return Err(AuthError::InvalidCredentials);
        }

        let session: AuthSession = Self::check_status(response).await?.json().await?;
        tracing::info!(user_id = %session.user.id, "Signed in against hosted auth");

        self.publish(AuthEvent::SignedIn {
            access_token: session.access_token.clone(),
            expires_in: session.expires_in,
            user: session.user.clone(),
        });
        Ok(session)
    }

    async fn sign_out(&self, access_token: &str) -> Result<(), AuthError> {
        let response = self
            .client
            .post(self.url("logout"))
            .header("apikey", &self.anon_key)
            .bearer_auth(access_token)
            .send()
            .await?;

        // An already-expired token is as good as signed out.
        if response.status() != StatusCode::UNAUTHORIZED {
            Self::check_status(response).await?;
        }

        self.publish(AuthEvent::SignedOut {
            access_token: access_token.to_string(),
        });
        Ok(())
    }

    async fn get_user(&self, access_token: &str) -> Result<Option<Identity>, AuthError> {
        let response = self
            .client
            .get(self.url("user"))
            .header("apikey", &self.anon_key)
            .bearer_auth(access_token)
            .send()
            .await?;

        if matches!(
            response.status(),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN
        ) {
            return Ok(None);
        }

        let identity: Identity = Self::check_status(response).await?.json().await?;
        Ok(Some(identity))
    }

    fn subscribe(&self) -> broadcast::Receiver<AuthEvent> {
        self.events.subscribe()
    }
}
