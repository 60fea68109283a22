use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use inkpanel_api::config::{ServerConfig, StoreConfig};
use inkpanel_api::router::build_app_router;
use inkpanel_api::state::AppState;
use inkpanel_db::{DbPool, MemoryStore, PgStore, StoryboardStore};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = config.port, "Configuration loaded");

    let (store, pool) = open_store(&config.store).await;
    let state = AppState {
        store,
        config: Arc::new(config.clone()),
    };
    let app = build_app_router(state, &config);

    let ip: IpAddr = config.host.parse().expect("HOST must be an IP address");
    let addr = SocketAddr::new(ip, config.port);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    tracing::info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    if let Some(pool) = pool {
        pool.close().await;
        tracing::info!("Database pool closed");
    }
    tracing::info!("Shutdown complete");
}

/// `RUST_LOG` wins; otherwise debug for this workspace and tower-http.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "inkpanel_api=debug,inkpanel_db=debug,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Open the configured store. The pool is returned separately so it can be
/// closed after the server drains.
///
/// The PostgreSQL store is checked and migrated before any request is served.
async fn open_store(config: &StoreConfig) -> (Arc<dyn StoryboardStore>, Option<DbPool>) {
    match config {
        StoreConfig::Postgres {
            database_url,
            max_connections,
        } => {
            let pool = inkpanel_db::create_pool(database_url, *max_connections)
                .await
                .expect("Failed to connect to database");
            inkpanel_db::health_check(&pool)
                .await
                .expect("Database health check failed");
            inkpanel_db::run_migrations(&pool)
                .await
                .expect("Failed to run database migrations");
            tracing::info!(max_connections, "PostgreSQL store ready");

            let store: Arc<dyn StoryboardStore> = Arc::new(PgStore::new(pool.clone()));
            (store, Some(pool))
        }
        StoreConfig::Memory => {
            tracing::warn!("Using the in-memory store; data is lost on restart");
            let store: Arc<dyn StoryboardStore> = Arc::new(MemoryStore::new());
            (store, None)
        }
    }
}

/// Resolve on SIGINT, or SIGTERM on Unix.
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
            tracing::info!("SIGINT received, draining connections");
        }
        () = terminate => {
            tracing::info!("SIGTERM received, draining connections");
        }
    }
}
