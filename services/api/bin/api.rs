//! Main Entrypoint for the BuyBitcoin API Service
//!
//! This binary is responsible for:
//! 1. Loading configuration from the environment.
//! 2. Building the price client and assembling the skill.
//! 3. Constructing the Axum router and applying middleware.
//! 4. Starting the web server and handling graceful shutdown.

use anyhow::Context;
use buybitcoin_api::{
    config::Config, router::create_router, skill::apl::AplDocuments, skill::standard_skill,
    state::AppState,
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

/// Listens for the `Ctrl+C` signal to gracefully shut down the server.
async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "Failed to listen for Ctrl+C; shutting down");
    }
    info!("Received shutdown signal. Shutting down gracefully...");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // --- 1. Load Configuration ---
    let config = Config::from_env().context("Failed to load configuration")?;

    // --- 2. Initialize Logging ---
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .with_timer(tracing_subscriber::fmt::time::ChronoLocal::rfc_3339())
        .init();
    info!("Configuration loaded. Initializing application state...");

    // --- 3. Assemble the Skill ---
    let prices = config
        .price_client()
        .context("Failed to build price client")?;
    let documents = AplDocuments::new(config.apl_document_path.clone());
    if !documents.path().is_file() {
        warn!(
            path = %documents.path().display(),
            "APL document not found; screen devices will get an apology"
        );
    }
    let skill = standard_skill(Arc::new(prices), documents);

    let app_state = Arc::new(AppState {
        skill: Arc::new(skill),
        config: Arc::new(config.clone()),
    });

    // --- 4. Create Router and Apply Middleware ---
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = create_router(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // --- 5. Start Server ---
    info!(
        price_api = %config.price_api_url,
        exchange = %config.price_exchange,
        skill_id_check = config.skill_id.is_some(),
        bind_address = %config.bind_address,
        "Service configured. Starting server..."
    );
    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    info!("Server has shut down.");
    Ok(())
}
