use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use artscope_core::{
    build_http_client, load_config, validate_config, ArtsyApi, ArtsyClient, CachedTokenProvider,
    TokenProvider, XappTokenProvider,
};
use artscope_server::{api::create_router, state::AppState};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Pick up ARTSY_CLIENT_ID / ARTSY_CLIENT_SECRET from a local .env if present
    dotenv::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Config file is optional; env vars alone are enough
    let config_path = std::env::var("ARTSCOPE_CONFIG").ok().map(PathBuf::from);

    match &config_path {
        Some(path) => info!("Loading configuration from {:?}", path),
        None => info!("No ARTSCOPE_CONFIG set, using defaults and environment"),
    }
    let config = load_config(config_path.as_deref())
        .with_context(|| format!("Failed to load config from {:?}", config_path))?;

    validate_config(&config).context("Configuration validation failed")?;

    info!("Configuration loaded successfully");
    info!("Artsy API: {}", config.artsy.base_url);
    info!("Static files: {:?}", config.frontend.static_dir);

    let credentials = config.artsy.credentials();
    if !credentials.is_complete() {
        warn!("ARTSY_CLIENT_ID or ARTSY_CLIENT_SECRET is not set; token requests will fail");
    }

    let http_client =
        build_http_client(&config.artsy).context("Failed to create HTTP client")?;

    // Create token provider
    let xapp = XappTokenProvider::new(http_client.clone(), &config.artsy.base_url, credentials);
    let tokens: Arc<dyn TokenProvider> = if config.artsy.cache_token {
        info!("Xapp tokens are cached until expiry");
        Arc::new(CachedTokenProvider::new(xapp))
    } else {
        info!("Xapp tokens are requested per call");
        Arc::new(xapp)
    };

    // Create Artsy API client
    let artsy: Arc<dyn ArtsyApi> = Arc::new(ArtsyClient::new(http_client, &config.artsy.base_url));

    let state = Arc::new(AppState::new(config.clone(), tokens, artsy));

    // Create router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(config.server.host, config.server.port);
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    // Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shut down");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
