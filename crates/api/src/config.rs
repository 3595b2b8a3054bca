//! # API Configuration Module
//!
//! Loads configuration for the booking API server from environment
//! variables, with defaults where a value is optional.
//!
//! ## Environment Variables
//!
//! - `API_HOST`: host address to bind (default: "0.0.0.0")
//! - `API_PORT`: port to listen on (default: 3000)
//! - `DATABASE_URL`: PostgreSQL connection string (required)
//! - `LOG_LEVEL`: logging level (default: "info")
//! - `API_CORS_ORIGINS`: comma-separated list of allowed CORS origins
//! - `API_REQUEST_TIMEOUT_SECONDS`: request timeout (default: 30)
//! - `ADMIN_PASSWORD`: shared admin secret (required)
//! - `RESEND_API_KEY`: mail provider credential (optional; email degrades to
//!   a warning when absent)
//! - `RESEND_FROM_EMAIL`: from-address for outbound mail
//! - `AI_GATEWAY_API_KEY`: text-generation provider credential (optional)
//! - `SITE_BASE_URL`: public site base URL (drives the secure-cookie flag)
//! - `ENFORCE_CLASS_CAPACITY`: reject reservations for full classes
//!   (default: off, matching the historical behavior)

use eyre::{Result, WrapErr};
use std::env;
use tracing::Level;

/// Configuration for the booking API server.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host address for the API server (e.g., "127.0.0.1", "0.0.0.0")
    pub host: String,

    /// Port for the API server to listen on
    pub port: u16,

    /// PostgreSQL database connection string
    pub database_url: String,

    /// Log level for the application
    pub log_level: Level,

    /// CORS allowed origins (optional)
    pub cors_origins: Option<Vec<String>>,

    /// Request timeout in seconds
    pub request_timeout: u64,

    /// Shared admin secret the session token is derived from
    pub admin_password: String,

    /// Mail provider API key (optional)
    pub resend_api_key: Option<String>,

    /// From-address for outbound mail
    pub resend_from_email: String,

    /// AI gateway API key for description drafting (optional)
    pub ai_gateway_api_key: Option<String>,

    /// Public site base URL
    pub site_base_url: String,

    /// When set, reservations use the capacity-checked conditional insert
    pub enforce_capacity: bool,
}

impl ApiConfig {
    /// Creates a new ApiConfig from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `DATABASE_URL` or `ADMIN_PASSWORD` is not set, or
    /// if `API_PORT` cannot be parsed as a u16.
    pub fn from_env() -> Result<Self> {
        // Network settings
        let host = env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("API_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .wrap_err("Invalid API_PORT value")?;

        // Database settings
        let database_url = env::var("DATABASE_URL")
            .wrap_err("DATABASE_URL environment variable must be set")?;

        // Logging settings
        let log_level = match env::var("LOG_LEVEL")
            .unwrap_or_else(|_| "info".to_string())
            .as_str()
        {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        // CORS settings
        let cors_origins = env::var("API_CORS_ORIGINS")
            .ok()
            .map(|origins| origins.split(',').map(|s| s.trim().to_string()).collect());

        // Performance settings
        let request_timeout = env::var("API_REQUEST_TIMEOUT_SECONDS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .unwrap_or(30);

        // Admin and provider credentials
        let admin_password = env::var("ADMIN_PASSWORD")
            .wrap_err("ADMIN_PASSWORD environment variable must be set")?;
        let resend_api_key = env::var("RESEND_API_KEY").ok().filter(|k| !k.is_empty());
        let resend_from_email = env::var("RESEND_FROM_EMAIL")
            .unwrap_or_else(|_| "onboarding@resend.dev".to_string());
        let ai_gateway_api_key = env::var("AI_GATEWAY_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty());

        let site_base_url =
            env::var("SITE_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());

        let enforce_capacity = env::var("ENFORCE_CLASS_CAPACITY")
            .map(|v| matches!(v.as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Ok(Self {
            host,
            port,
            database_url,
            log_level,
            cors_origins,
            request_timeout,
            admin_password,
            resend_api_key,
            resend_from_email,
            ai_gateway_api_key,
            site_base_url,
            enforce_capacity,
        })
    }

    /// Returns the server address as a string, e.g. "127.0.0.1:8080".
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Session cookies are marked secure whenever the public site is served
    /// over https.
    pub fn secure_cookies(&self) -> bool {
        self.site_base_url.starts_with("https://")
    }
}
