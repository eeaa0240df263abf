//! Comment ledger REST API server binary.
//!
//! ## Purpose
//! Runs the comment ledger REST server (with OpenAPI/Swagger UI) on the
//! configured address.
//!
//! The ledger is in-memory only: every comment lives exactly as long as this
//! process.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{router, AppState};

/// Main entry point for the comment ledger REST API server
///
/// Starts the REST API server on the configured address (default: 0.0.0.0:5000).
/// Provides HTTP endpoints for comment operations with OpenAPI/Swagger
/// documentation.
///
/// # Environment Variables
/// - `LEDGER_REST_ADDR`: Server address (default: "0.0.0.0:5000")
///
/// # Returns
/// * `Ok(())` - If server starts and runs successfully
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("LEDGER_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:5000".into());

    tracing::info!("-- Starting comment ledger REST API on {}", addr);

    let app = router(AppState::new());

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
