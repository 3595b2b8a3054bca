//! # Seen Fitness booking API
//!
//! Web server for the studio's class schedule, reservation flow, mailing
//! list, and admin dashboard.
//!
//! ## Architecture
//!
//! This crate follows a layered architecture:
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Implement the reservation and admin workflows
//! - **Middleware**: Session guard and error handling
//! - **Config**: Handle environment and application configuration
//!
//! The API uses Axum as the web framework, SQLx for database interactions,
//! and a best-effort mail dispatcher for confirmations and broadcasts.

/// Client for the optional AI description-drafting gateway
pub mod ai;
/// Configuration module for API settings
pub mod config;
/// Request handlers that implement the workflows
pub mod handlers;
/// Middleware for authentication and error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::sync::Arc;

use axum::Router;
use eyre::Result;
use seenfit_mail::Mailer;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers.
pub struct ApiState {
    /// PostgreSQL connection pool for database operations
    pub db_pool: PgPool,
    /// Best-effort notification dispatcher
    pub mailer: Mailer,
    /// Runtime configuration (admin secret, provider keys, flags)
    pub config: config::ApiConfig,
}

/// Starts the API server with the provided configuration and database
/// connection: installs logging, builds shared state, wires the routers,
/// and serves until shutdown.
pub async fn start_server(config: config::ApiConfig, db_pool: PgPool) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Create shared state with dependencies
    let mailer = Mailer::new(
        config.resend_api_key.clone(),
        config.resend_from_email.clone(),
    );
    let state = Arc::new(ApiState {
        db_pool,
        mailer,
        config: config.clone(),
    });

    // Build the application router with all routes
    let app = Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Public schedule, reservation, and signup endpoints
        .merge(routes::public::routes())
        // Admin dashboard endpoints
        .merge(routes::admin::routes())
        // Attach shared state to all routes
        .with_state(state);

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let cors = tower_http::cors::CorsLayer::new()
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::PUT,
                axum::http::Method::DELETE,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers([
                axum::http::header::CONTENT_TYPE,
                axum::http::header::AUTHORIZATION,
                axum::http::header::ACCEPT,
            ])
            .allow_origin(
                origins
                    .iter()
                    .filter_map(|origin| origin.parse::<axum::http::HeaderValue>().ok())
                    .collect::<Vec<_>>(),
            )
            .allow_credentials(true);

        app.layer(cors)
    } else {
        app
    };

    // Add request tracing and timeout middleware
    let app = app.layer(tower_http::trace::TraceLayer::new_for_http());
    let app = app.layer(
        tower::ServiceBuilder::new()
            .layer(axum::error_handling::HandleErrorLayer::new(
                |_: tower::BoxError| async { axum::http::StatusCode::REQUEST_TIMEOUT },
            ))
            .timeout(std::time::Duration::from_secs(config.request_timeout)),
    );

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
