//! Storefront API Binary
//!
//! Starts the storefront CRUD service.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin storefront-api
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL`: SQLite connection string (default: sqlite://storefront.db)
//! - `HTTP_PORT`: HTTP server port (default: 8080)
//! - `RUST_LOG`: Log level (default: info)

use std::net::SocketAddr;
use std::sync::Arc;

use storefront_api::domain::catalog::Item;
use storefront_api::domain::ordering::Order;
use storefront_api::infrastructure::http::{AppState, create_router};
use storefront_api::infrastructure::persistence::{SqliteRepository, init_pool, run_migrations};
use tokio::net::TcpListener;
use tokio::signal;

/// Default HTTP server port.
const DEFAULT_HTTP_PORT: u16 = 8080;

/// Default SQLite connection string.
const DEFAULT_DATABASE_URL: &str = "sqlite://storefront.db";

/// Parsed configuration from environment variables.
struct ApiConfig {
    http_port: u16,
    database_url: String,
}

impl ApiConfig {
    fn from_env() -> Self {
        let http_port: u16 = std::env::var("HTTP_PORT")
            .unwrap_or_else(|_| DEFAULT_HTTP_PORT.to_string())
            .parse()
            .unwrap_or(DEFAULT_HTTP_PORT);

        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

        Self {
            http_port,
            database_url,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    init_tracing();

    tracing::info!("Starting Storefront API");

    let config = ApiConfig::from_env();
    tracing::info!(
        http_port = config.http_port,
        database_url = %config.database_url,
        "Configuration loaded"
    );

    let pool = init_pool(&config.database_url).await?;
    run_migrations(&pool).await?;

    let state = AppState {
        items: Arc::new(SqliteRepository::<Item>::new(pool.clone())),
        orders: Arc::new(SqliteRepository::<Order>::new(pool)),
    };
    let app = create_router(state);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.http_port).parse()?;
    tracing::info!(%addr, "HTTP server starting");
    tracing::info!("Endpoints:");
    tracing::info!("  GET    /health");
    tracing::info!("  GET    /api/items        (?name= prefix filter)");
    tracing::info!("  POST   /api/items");
    tracing::info!("  GET    /api/items/{{id}}");
    tracing::info!("  PUT    /api/items/{{id}}");
    tracing::info!("  DELETE /api/items/{{id}}");
    tracing::info!("  GET    /api/orders       (?status= flag filter)");
    tracing::info!("  POST   /api/orders");
    tracing::info!("  GET    /api/orders/{{id}}");
    tracing::info!("  PUT    /api/orders/{{id}}");
    tracing::info!("  DELETE /api/orders/{{id}}");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Storefront API stopped");
    Ok(())
}

/// Initialize the tracing subscriber with environment filter.
///
/// Uses static directive strings that are compile-time constants guaranteed to parse.
#[allow(clippy::expect_used)]
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(
                "storefront_api=info"
                    .parse()
                    .expect("static directive 'storefront_api=info' is valid"),
            ),
        )
        .init();
}

/// Wait for shutdown signal (SIGTERM or SIGINT).
///
/// # Panics
///
/// Panics if signal handlers cannot be installed; a process that cannot
/// respond to termination signals is worse than one that fails at startup.
#[allow(clippy::expect_used)]
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("signal handler installation is critical for graceful shutdown");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("SIGTERM handler installation is critical for graceful shutdown")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, initiating shutdown");
        }
    }
}
