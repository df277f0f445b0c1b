//! Session provider.
//!
//! Holds `{current_user, is_loading}` for every bearer token the server has
//! seen. A token's first request runs a session check against the auth
//! service; while that check is in flight the session reads as loading.
//! After that the state follows the auth service's sign-in / sign-out
//! notifications until shutdown.
//!
//! A confirmed session is trusted until its token expires or
//! [`SESSION_RECHECK_INTERVAL`] passes, whichever is first. The next request
//! after that runs the check again. The listener also drops expired entries
//! every [`SESSION_PURGE_INTERVAL`].

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use digitalpro_db::auth::jwt::remaining_lifetime_secs;
use digitalpro_db::auth::{AuthEvent, AuthProvider, Identity};
use serde::Serialize;
use tokio::sync::broadcast::error::RecvError;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

/// Longest a session check may run before the token counts as signed out.
pub const SESSION_CHECK_TIMEOUT: Duration = Duration::from_secs(10);

/// Longest a confirmed session is served from the cache.
pub const SESSION_RECHECK_INTERVAL: Duration = Duration::from_secs(300);

/// How often the listener sweeps expired entries.
pub const SESSION_PURGE_INTERVAL: Duration = Duration::from_secs(60);

/// Session snapshot for one token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionState {
    pub current_user: Option<Identity>,
    pub is_loading: bool,
}

impl SessionState {
    pub fn loading() -> Self {
        Self {
            current_user: None,
            is_loading: true,
        }
    }

    pub fn signed_out() -> Self {
        Self::default()
    }

    pub fn signed_in(user: Identity) -> Self {
        Self {
            current_user: Some(user),
            is_loading: false,
        }
    }
}

struct CachedSession {
    state: SessionState,
    /// `None` while a check is in flight.
    expires_at: Option<Instant>,
}

impl CachedSession {
    fn loading() -> Self {
        Self {
            state: SessionState::loading(),
            expires_at: None,
        }
    }

    /// `lifetime_secs` is the token's remaining lifetime; zero or negative
    /// means already expired.
    fn signed_in(user: Identity, lifetime_secs: Option<i64>) -> Self {
        let lifetime = match lifetime_secs {
            Some(secs) => Duration::from_secs(u64::try_from(secs).unwrap_or(0)),
            None => SESSION_RECHECK_INTERVAL,
        };
        Self {
            state: SessionState::signed_in(user),
            expires_at: Some(Instant::now() + lifetime.min(SESSION_RECHECK_INTERVAL)),
        }
    }

    fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|at| at <= now)
    }
}

pub struct SessionProvider {
    auth: Arc<dyn AuthProvider>,
    sessions: RwLock<HashMap<String, CachedSession>>,
    check_timeout: Duration,
    cancel: CancellationToken,
}

impl SessionProvider {
    pub fn new(auth: Arc<dyn AuthProvider>) -> Arc<Self> {
        Self::with_check_timeout(auth, SESSION_CHECK_TIMEOUT)
    }

    pub fn with_check_timeout(auth: Arc<dyn AuthProvider>, check_timeout: Duration) -> Arc<Self> {
        Arc::new(Self {
            auth,
            sessions: RwLock::new(HashMap::new()),
            check_timeout,
            cancel: CancellationToken::new(),
        })
    }

    /// Subscribe to auth notifications and apply them until [`shutdown`]
    /// is called or the provider's channel closes.
    ///
    /// [`shutdown`]: SessionProvider::shutdown
    pub fn start(self: &Arc<Self>) -> JoinHandle<()> {
        let mut events = self.auth.subscribe();
        let provider = Arc::clone(self);
        let cancel = self.cancel.clone();

        tokio::spawn(async move {
            let mut purge = tokio::time::interval_at(
                Instant::now() + SESSION_PURGE_INTERVAL,
                SESSION_PURGE_INTERVAL,
            );
            loop {
                tokio::select! {
                    () = cancel.cancelled() => break,
                    _ = purge.tick() => {
                        let dropped = provider.purge_expired().await;
                        if dropped > 0 {
                            tracing::debug!(dropped, "Dropped expired sessions");
                        }
                    }
                    event = events.recv() => match event {
                        Ok(event) => provider.apply(event).await,
                        Err(RecvError::Lagged(skipped)) => {
                            tracing::warn!(skipped, "Session listener lagged behind auth events");
                        }
                        Err(RecvError::Closed) => break,
                    },
                }
            }
            tracing::info!("Session listener stopped");
        })
    }

    /// Stop the listener task. The receiver is dropped with the task.
    pub fn shutdown(&self) {
        self.cancel.cancel();
    }

    pub async fn apply(&self, event: AuthEvent) {
        let mut sessions = self.sessions.write().await;
        match event {
            AuthEvent::SignedIn {
                access_token,
                expires_in,
                user,
            } => {
                tracing::debug!(user_id = %user.id, expires_in, "Session signed in");
                sessions.insert(access_token, CachedSession::signed_in(user, Some(expires_in)));
            }
            AuthEvent::SignedOut { access_token } => {
                tracing::debug!("Session signed out");
                sessions.remove(&access_token);
            }
        }
    }

    /// Record that a session check for `token` is in flight. Returns the
    /// existing state instead when the token is already known and its
    /// entry has not expired.
    pub async fn mark_loading(&self, token: &str) -> Option<SessionState> {
        let mut sessions = self.sessions.write().await;
        if let Some(existing) = sessions.get(token) {
            if !existing.is_expired(Instant::now()) {
                return Some(existing.state.clone());
            }
            tracing::debug!("Cached session expired; checking again");
        }
        sessions.insert(token.to_string(), CachedSession::loading());
        None
    }

    /// Current state for `token`, running a session check the first time a
    /// token is seen and again once its entry expires. Unknown or rejected
    /// tokens are not kept.
    ///
    /// The check runs on its own task, so the loading entry is settled even
    /// when the caller stops waiting.
    pub async fn resolve(self: &Arc<Self>, token: &str) -> SessionState {
        if let Some(entry) = self.sessions.read().await.get(token) {
            if !entry.is_expired(Instant::now()) {
                return entry.state.clone();
            }
        }
        if let Some(state) = self.mark_loading(token).await {
            return state;
        }

        let provider = Arc::clone(self);
        let owned = token.to_string();
        match tokio::spawn(async move { provider.check(owned).await }).await {
            Ok(state) => state,
            Err(e) => {
                tracing::error!(error = %e, "Session check task failed");
                self.forget(token).await;
                SessionState::signed_out()
            }
        }
    }

    async fn check(&self, token: String) -> SessionState {
        let user = match tokio::time::timeout(self.check_timeout, self.auth.get_user(&token)).await
        {
            Ok(Ok(user)) => user,
            Ok(Err(e)) => {
                tracing::warn!(error = %e, "Session check failed");
                None
            }
            Err(_) => {
                tracing::warn!(
                    timeout_ms = self.check_timeout.as_millis() as u64,
                    "Session check timed out"
                );
                None
            }
        };

        let mut sessions = self.sessions.write().await;
        match user {
            Some(user) => {
                let entry = CachedSession::signed_in(user, remaining_lifetime_secs(&token));
                let state = entry.state.clone();
                sessions.insert(token, entry);
                state
            }
            None => {
                if sessions.get(&token).is_some_and(|e| e.state.is_loading) {
                    sessions.remove(&token);
                }
                SessionState::signed_out()
            }
        }
    }

    /// Drop every entry whose lifetime has run out. Returns how many went.
    pub async fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, entry| !entry.is_expired(now));
        before - sessions.len()
    }

    pub async fn forget(&self, token: &str) {
        self.sessions.write().await.remove(token);
    }

    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use digitalpro_core::roles::Role;
    use digitalpro_core::types::RowId;
    use digitalpro_db::auth::jwt::JwtConfig;
    use digitalpro_db::auth::{AuthError, AuthSession, EVENT_CHANNEL_CAPACITY};
    use digitalpro_db::MemoryStore;
    use tokio::sync::broadcast;

    use super::*;

    /// Auth service whose `get_user` answers after `delay`.
    struct SlowAuth {
        delay: Duration,
        user: Identity,
        events: broadcast::Sender<AuthEvent>,
    }

    impl SlowAuth {
        fn new(delay: Duration) -> Arc<Self> {
            let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
            Arc::new(Self {
                delay,
                user: Identity {
                    id: RowId::new_v4(),
                    email: "slow@digitalpro.test".into(),
                },
                events,
            })
        }
    }

    #[async_trait]
    impl AuthProvider for SlowAuth {
        async fn sign_in(&self, _email: &str, _password: &str) -> Result<AuthSession, AuthError> {
            Err(AuthError::InvalidCredentials)
        }

        async fn sign_out(&self, _access_token: &str) -> Result<(), AuthError> {
            Ok(())
        }

        async fn get_user(&self, _access_token: &str) -> Result<Option<Identity>, AuthError> {
            tokio::time::sleep(self.delay).await;
            Ok(Some(self.user.clone()))
        }

        fn subscribe(&self) -> broadcast::Receiver<AuthEvent> {
            self.events.subscribe()
        }
    }

    async fn wait_for_count(provider: &SessionProvider, expected: usize) {
        for _ in 0..100 {
            if provider.session_count().await == expected {
                return;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        assert_eq!(provider.session_count().await, expected);
    }

    async fn provider_with_admin() -> (Arc<MemoryStore>, Arc<SessionProvider>) {
        let store = Arc::new(MemoryStore::new(JwtConfig::new("session-test-secret")));
        store
            .create_user("owner@digitalpro.test", "longenough", Role::Admin)
            .await
            .unwrap();
        let provider = SessionProvider::new(store.clone());
        (store, provider)
    }

    #[tokio::test]
    async fn unknown_token_resolves_signed_out_and_is_not_kept() {
        let (_store, provider) = provider_with_admin().await;

        let state = provider.resolve("not-a-token").await;

        assert_eq!(state, SessionState::signed_out());
        assert_eq!(provider.session_count().await, 0);
    }

    #[tokio::test]
    async fn valid_token_resolves_to_user() {
        let (store, provider) = provider_with_admin().await;
        let session = store.sign_in("owner@digitalpro.test", "longenough").await.unwrap();

        let state = provider.resolve(&session.access_token).await;

        assert!(!state.is_loading);
        assert_eq!(state.current_user, Some(session.user));
    }

    #[tokio::test]
    async fn in_flight_check_reads_as_loading() {
        let (_store, provider) = provider_with_admin().await;
        assert_eq!(provider.mark_loading("pending-token").await, None);

        let state = provider.resolve("pending-token").await;

        assert!(state.is_loading);
        assert!(state.current_user.is_none());
    }

    #[tokio::test]
    async fn listener_follows_sign_out_and_stops_on_shutdown() {
        let (store, provider) = provider_with_admin().await;
        let handle = provider.start();

        let session = store.sign_in("owner@digitalpro.test", "longenough").await.unwrap();
        assert!(provider.resolve(&session.access_token).await.current_user.is_some());

        store.sign_out(&session.access_token).await.unwrap();
        wait_for_count(&provider, 0).await;
        assert!(provider.resolve(&session.access_token).await.current_user.is_none());

        provider.shutdown();
        tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .expect("listener should stop after shutdown")
            .unwrap();
    }

    #[tokio::test]
    async fn token_that_expired_while_cached_is_checked_again_and_dropped() {
        let mut jwt = JwtConfig::new("session-test-secret");
        jwt.access_token_expiry_mins = -5;
        let store = Arc::new(MemoryStore::new(jwt));
        store
            .create_user("owner@digitalpro.test", "longenough", Role::Admin)
            .await
            .unwrap();
        let provider = SessionProvider::new(store.clone());
        let handle = provider.start();

        let session = store.sign_in("owner@digitalpro.test", "longenough").await.unwrap();
        wait_for_count(&provider, 1).await;

        let state = provider.resolve(&session.access_token).await;

        assert_eq!(state, SessionState::signed_out());
        assert_eq!(provider.session_count().await, 0);

        provider.shutdown();
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn purge_drops_only_expired_entries() {
        let (_store, provider) = provider_with_admin().await;
        let user = Identity {
            id: RowId::new_v4(),
            email: "owner@digitalpro.test".into(),
        };
        provider
            .apply(AuthEvent::SignedIn {
                access_token: "stale".into(),
                expires_in: 0,
                user: user.clone(),
            })
            .await;
        provider
            .apply(AuthEvent::SignedIn {
                access_token: "fresh".into(),
                expires_in: 3600,
                user: user.clone(),
            })
            .await;

        assert_eq!(provider.purge_expired().await, 1);
        assert_eq!(provider.session_count().await, 1);
        assert_eq!(provider.resolve("fresh").await, SessionState::signed_in(user));
    }

    #[tokio::test]
    async fn abandoned_check_that_stalls_does_not_stay_loading() {
        let provider = SessionProvider::with_check_timeout(
            SlowAuth::new(Duration::from_secs(3600)),
            Duration::from_millis(50),
        );

        let abandoned =
            tokio::time::timeout(Duration::from_millis(20), provider.resolve("stalled-token")).await;
        assert!(abandoned.is_err());

        wait_for_count(&provider, 0).await;
        let state = provider.resolve("stalled-token").await;
        assert!(!state.is_loading);
        assert!(state.current_user.is_none());
    }

    #[tokio::test]
    async fn abandoned_check_still_records_the_user() {
        let auth = SlowAuth::new(Duration::from_millis(30));
        let expected = auth.user.clone();
        let provider = SessionProvider::new(auth);

        let abandoned =
            tokio::time::timeout(Duration::from_millis(5), provider.resolve("slow-token")).await;
        assert!(abandoned.is_err());

        let mut state = provider.resolve("slow-token").await;
        for _ in 0..100 {
            if !state.is_loading {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
            state = provider.resolve("slow-token").await;
        }
        assert_eq!(state, SessionState::signed_in(expected));
    }
}
