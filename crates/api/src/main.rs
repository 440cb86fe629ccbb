use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;

use nemitzam_db::{Gateway, MemoryGateway, PgGateway};
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use nemitzam_api::config::{ConfigError, ServerConfig};
use nemitzam_api::router::build_app_router;
use nemitzam_api::state::AppState;
use nemitzam_api::ws;

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("database: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migrations: {0}")]
    Migrations(#[from] sqlx::migrate::MigrateError),

    #[error("invalid HOST address '{0}'")]
    Host(String),

    #[error("server: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "nemitzam_api=debug,nemitzam_studio=debug,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;
    let host: IpAddr = config
        .host
        .parse()
        .map_err(|_| StartupError::Host(config.host.clone()))?;
    let addr = SocketAddr::new(host, config.port);
    let grace = Duration::from_secs(config.shutdown_timeout_secs);

    let gateway = connect_gateway(config.database_url.as_deref()).await?;
    let state = AppState::new(gateway, config.clone());

    // One token stops the listener, the relay and the heartbeat.
    let shutdown = CancellationToken::new();
    let tasks = TaskTracker::new();
    tasks.spawn(ws::run_event_relay(
        Arc::clone(&state.ws_manager),
        state.event_bus.subscribe(),
        shutdown.clone(),
    ));
    tasks.spawn(ws::run_heartbeat(
        Arc::clone(&state.ws_manager),
        shutdown.clone(),
    ));
    tasks.close();
    tokio::spawn(cancel_on_signal(shutdown.clone()));

    let ws_manager = Arc::clone(&state.ws_manager);
    let app = build_app_router(state, &config);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Studio site listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown.clone().cancelled_owned())
        .await?;

    shutdown.cancel();
    ws_manager.shutdown_all().await;
    if tokio::time::timeout(grace, tasks.wait()).await.is_err() {
        tracing::warn!(grace_secs = grace.as_secs(), "Background tasks did not stop in time");
    }

    tracing::info!("Shutdown complete");
    Ok(())
}

/// PostgreSQL when a URL is configured, otherwise the in-memory gateway
/// seeded with the default config rows.
async fn connect_gateway(database_url: Option<&str>) -> Result<Arc<dyn Gateway>, StartupError> {
    let Some(url) = database_url else {
        tracing::warn!("DATABASE_URL not set, content lives in memory only");
        return Ok(Arc::new(MemoryGateway::new()));
    };

    let pool = nemitzam_db::create_pool(url).await?;
    nemitzam_db::health_check(&pool).await?;
    nemitzam_db::run_migrations(&pool).await?;
    tracing::info!("Database ready, migrations applied");

    Ok(Arc::new(PgGateway::new(pool)))
}

/// Cancel `shutdown` on SIGINT or SIGTERM.
async fn cancel_on_signal(shutdown: CancellationToken) {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "Cannot listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "Cannot listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("SIGINT received, shutting down"),
        () = terminate => tracing::info!("SIGTERM received, shutting down"),
    }
    shutdown.cancel();
}
