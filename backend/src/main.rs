//! Student Records Backend
//!
//! Token-authenticated CRUD service for student records.
//!
//! ## Architecture
//!
//! The backend follows a layered architecture:
//! - Routes: HTTP request handling and routing
//! - Services: Authentication and the student record facade
//! - Repositories: Postgres or in-memory storage behind traits
//! - Auth: signed token issuance/verification and password checks

use anyhow::{Context, Result};
use student_records_backend::{
    config::{self, StorageBackend},
    db, routes,
    services::AuthService,
    state::AppState,
};
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    init_tracing();

    // Load configuration
    let config = config::AppConfig::load().context("Failed to load configuration")?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        env = if config::AppConfig::is_production() { "production" } else { "development" },
        backend = ?config.database.backend,
        "Starting Student Records Backend"
    );

    // Validate production configuration
    if config::AppConfig::is_production() {
        validate_production_config(&config)?;
    }

    // Create application state (fails fast on a bad signing key)
    let state = match config.database.backend {
        StorageBackend::Postgres => {
            info!("Connecting to database...");
            let db_pool =
                db::create_pool(&config.database.url, config.database.max_connections).await?;

            // Run migrations (skip in production if using separate migration job)
            if !config::AppConfig::is_production() {
                db::run_migrations(&db_pool).await?;
            }

            AppState::new(db_pool, config).context("Invalid token configuration")?
        }
        StorageBackend::Memory => {
            warn!("Using in-memory storage; data will be lost on shutdown");
            AppState::in_memory(config).context("Invalid token configuration")?
        }
    };

    info!(
        ttl_ms = state.tokens().ttl().num_milliseconds(),
        "Token service ready"
    );

    AuthService::seed_users(state.users(), &state.config().auth.users)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to provision users: {}", e))?;

    let server = &state.config().server;
    let addr = format!("{}:{}", server.host, server.port);

    // Build application
    let app = routes::create_router(state);

    // Start server
    info!(address = %addr, "Server listening");

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    // Serve with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Initialize tracing/logging
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if config::AppConfig::is_production() {
            "student_records_backend=info,tower_http=info".into()
        } else {
            "student_records_backend=debug,tower_http=debug,sqlx=warn".into()
        }
    });

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if config::AppConfig::is_production() {
        // JSON logging for production (better for log aggregation)
        subscriber
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        // Pretty logging for development
        subscriber
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}

/// Validate configuration for production deployment
fn validate_production_config(config: &config::AppConfig) -> Result<()> {
    if config.database.backend == StorageBackend::Memory {
        anyhow::bail!("In-memory storage is not allowed in production");
    }

    // Check database URL is not localhost in production
    if config.database.url.contains("localhost") || config.database.url.contains("127.0.0.1") {
        warn!("Database URL contains localhost - ensure this is intentional for production");
    }

    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        }
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
