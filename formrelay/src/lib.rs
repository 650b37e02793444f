//! # formrelay
//!
//! A small backend that relays "contact us" and "quotation request" form
//! submissions to an administrator mailbox.
//!
//! Incoming JSON is validated and normalized by [`formrelay_core`], rendered
//! into an HTML email and sent over an authenticated SMTP session by
//! [`formrelay_mailer`], behind the Axum routes of [`formrelay_axum`].
//!
//! ## Configuration
//!
//! Settings come from `APP_*` environment variables, see [`Settings`]:
//! `APP_ADMIN_EMAIL` and `APP_ADMIN_PASSWORD` are required, the SMTP host,
//! port, TLS flag, timeout and CORS origin have defaults.
//!
//! ## Example
//!
//! ```rust,no_run
//! use formrelay::{Settings, build_app, serve};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), formrelay::StartupError> {
//!     let settings = Settings::from_env()?;
//!     let app = build_app(&settings)?;
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:5000").await?;
//!     serve(listener, app).await
//! }
//! ```
use std::sync::Arc;

use axum::Router;
use thiserror::Error;
use tokio::net::TcpListener;

pub use formrelay_axum::{ApiError, CorsConfig, routes};
pub use formrelay_core::{
    ConfigError, ContactUsForm, FormMailer, FormMailerService, QuotationForm, Settings,
};
pub use formrelay_mailer::{Email, Mailer, MailerError};

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Core(#[from] formrelay_core::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Build the application router with an SMTP mailer described by `settings`.
pub fn build_app(settings: &Settings) -> Result<Router, StartupError> {
    let mailer = Arc::new(FormMailerService::from_settings(settings)?);
    build_app_with_mailer(settings, mailer)
}

/// Build the application router around an existing [`FormMailer`].
pub fn build_app_with_mailer(
    settings: &Settings,
    mailer: Arc<dyn FormMailer>,
) -> Result<Router, StartupError> {
    let cors_config = CorsConfig::from_setting(&settings.cors_allow_origin)?;

    Ok(routes(mailer).with_cors_config(cors_config).build())
}

/// Serve `app` on `listener` until Ctrl-C is received.
pub async fn serve(listener: TcpListener, app: Router) -> Result<(), StartupError> {
    tracing::info!(address = ?listener.local_addr().ok(), "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
