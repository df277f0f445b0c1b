use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use digitalpro_api::auth::session::SessionProvider;
use digitalpro_api::config::{BackendMode, LogFormat, ServerConfig};
use digitalpro_api::router::build_app_router;
use digitalpro_api::state::AppState;
use digitalpro_db::auth::hosted::HostedAuthClient;
use digitalpro_db::auth::jwt::JwtConfig;
use digitalpro_db::auth::AuthProvider;
use digitalpro_db::{MemoryStore, RestTableClient, SharedClient};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Configuration ---
    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    // --- Tracing ---
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        "digitalpro_api=debug,digitalpro_db=debug,tower_http=debug".into()
    });
    let registry = tracing_subscriber::registry().with(filter);
    match config.log_format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Backend ---
    let (client, auth): (SharedClient, Arc<dyn AuthProvider>) = match config.backend.mode {
        BackendMode::Memory => {
            tracing::warn!("Using the in-memory backend; data is lost on restart");
            let store = Arc::new(MemoryStore::new(JwtConfig::new(
                config.backend.jwt_secret.clone(),
            )));
            let client: SharedClient = store.clone();
            let auth: Arc<dyn AuthProvider> = store;
            (client, auth)
        }
        BackendMode::Hosted => {
            let client: SharedClient = Arc::new(RestTableClient::new(
                config.backend.url.clone(),
                config.backend.service_key.clone(),
            ));
            let auth: Arc<dyn AuthProvider> = Arc::new(HostedAuthClient::new(
                config.backend.url.clone(),
                config.backend.anon_key.clone(),
            ));
            (client, auth)
        }
    };

    match digitalpro_db::health_check(client.as_ref()).await {
        Ok(()) => tracing::info!("Backend health check passed"),
        Err(e) => tracing::warn!(error = %e, "Backend health check failed; continuing"),
    }

    // --- Sessions ---
    let sessions = SessionProvider::new(Arc::clone(&auth));
    let listener_handle = sessions.start();
    tracing::info!("Session listener started");

    // --- App state ---
    let state = AppState {
        client,
        auth,
        sessions: Arc::clone(&sessions),
        config: Arc::new(config.clone()),
    };

    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    // --- Post-shutdown cleanup ---
    tracing::info!("Server stopped accepting connections, cleaning up");

    sessions.shutdown();
    let _ = tokio::time::timeout(
        Duration::from_secs(config.shutdown_timeout_secs),
        listener_handle,
    )
    .await;
    tracing::info!("Session listener shut down");

    tracing::info!("Graceful shutdown complete");
}

/// Wait for SIGINT (Ctrl-C) or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
