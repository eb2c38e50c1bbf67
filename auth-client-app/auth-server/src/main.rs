use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use tracing::{error, info};

use auth_api::{build_router, AppState, StaticFiles};
use auth_core::SessionService;
use auth_infrastructure::InMemorySessionRepository;
use auth_security::Base36SessionIdGenerator;
use auth_shared::config::{AppConfig, LogSettings};
use auth_shared::telemetry::init_telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            let _guard = init_telemetry(&LogSettings::default());
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize telemetry
    let _guard = init_telemetry(&config.log);

    info!(env = %config.app.env, "{} starting...", config.app.name);

    // Session store and service
    let session_service = SessionService::new(
        Arc::new(InMemorySessionRepository::new()),
        Arc::new(Base36SessionIdGenerator::default()),
    );

    let static_files = StaticFiles::from_settings(&config.static_files);
    info!("Serving static files from {}", static_files.root().display());

    // Build router
    let app = build_router(AppState::new(session_service, static_files));

    // Bind address
    let host: IpAddr = config.app.host.parse()?;
    let addr = SocketAddr::from((host, config.app.port));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server running at http://localhost:{}/", config.app.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, draining connections...");
}
