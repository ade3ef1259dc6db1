use dialout::application::CallService;
use dialout::config::{Config, DEFAULT_LOG_FILTER};
use dialout::domain::call::CallDispatcher;
use dialout::infrastructure::persistence::load_customer_directory;
use dialout::infrastructure::telephony::{StubDispatcher, TimeoutDispatcher};
use dialout::interface::api::{build_router, AppState};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    info!("Starting Dialout calling backend");

    // Load configuration
    let config = Config::load()?;
    info!("Configuration loaded: {:?}", config);

    // Customer directory is built once and never written to
    let directory = load_customer_directory(config.directory.path.as_deref())?;

    let origin = match config.telephony.from_number.clone() {
        Some(number) => number,
        None => {
            warn!("TWILIO_PHONE is not set; outbound calls will carry no caller ID");
            String::new()
        }
    };

    let dispatcher: Arc<dyn CallDispatcher> = Arc::new(TimeoutDispatcher::new(
        Arc::new(StubDispatcher::new()),
        config.telephony.timeout(),
    ));
    info!("Call dispatcher initialized (stub, timeout {:?})", config.telephony.timeout());

    let state = AppState::new(directory, CallService::new(dispatcher, origin));
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    info!("Server running on port {}", config.server.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutting down...");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {}", e);
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
                warn!("Failed to listen for SIGTERM: {}", e);
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
}
