use les_embruns_api::{
    AppState, InMemoryRepository, RepositoryState, SystemClock,
    config::{AppConfig, Env},
    create_router,
    session::spawn_session_sweeper,
};
use std::{net::SocketAddr, sync::Arc, time::Duration};
use tokio::{net::TcpListener, sync::broadcast};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// main
///
/// Loads configuration, sets up logging, seeds the content store and serves
/// the API.
#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    let config = AppConfig::load();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "les_embruns_api=debug,tower_http=info".into());

    match config.env {
        Env::Local => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
        Env::Production => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
    }

    tracing::info!("Application starting in {:?} mode", config.env);

    let repo = Arc::new(InMemoryRepository::seeded()) as RepositoryState;
    let app_state = AppState::new(config, repo, Arc::new(SystemClock));

    let (shutdown_tx, _) = broadcast::channel::<()>(1);

    let sweep_secs = app_state.config.session_sweep_secs;
    let sweeper = (sweep_secs > 0).then(|| {
        tracing::info!(every_secs = sweep_secs, "session sweeper enabled");
        spawn_session_sweeper(
            app_state.session_stores(),
            Duration::from_secs(sweep_secs),
            shutdown_tx.subscribe(),
        )
    });

    let bind_addr = app_state.config.bind_addr.clone();
    let app = create_router(app_state);

    let listener = TcpListener::bind(&bind_addr)
        .await
        .expect("FATAL: failed to bind the HTTP listener. Check BIND_ADDR.");

    tracing::info!("Listening on {}", bind_addr);
    tracing::info!("API Documentation (Swagger UI) available at /swagger-ui");

    // Connect info feeds the caller address recorded on sessions.
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal(shutdown_tx))
    .await
    .expect("FATAL: HTTP server error");

    if let Some(handle) = sweeper {
        let _ = handle.await;
    }

    tracing::info!("Application shutting down");
}

async fn shutdown_signal(shutdown_tx: broadcast::Sender<()>) {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        // Without a signal handler, keep serving until the process is killed.
        std::future::pending::<()>().await;
    }
    // No receivers just means the sweeper is disabled.
    let _ = shutdown_tx.send(());
}
