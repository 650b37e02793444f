//! # formrelay Axum integration
//!
//! Axum routes and middleware for the contact-us and quotation endpoints.
//!
//! - `POST /contact-us` and `POST /quotation` run the JSON guard, validate the
//!   submission and relay it through a [`FormMailer`].
//! - `GET /health` reports liveness.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use formrelay_axum::CorsConfig;
//! use formrelay_core::{FormMailerService, Settings};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let settings = Settings::from_env()?;
//! let mailer = Arc::new(FormMailerService::from_settings(&settings)?);
//!
//! let app = formrelay_axum::routes(mailer)
//!     .with_cors_config(CorsConfig::from_setting(&settings.cors_allow_origin)?)
//!     .build();
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:5000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

mod error;
mod extractors;
mod middleware;
mod routes;
mod types;

pub use error::{ApiError, Result};
pub use extractors::{JsonBody, is_json_content_type, parse_json_body};
pub use middleware::{cors_layer, logging_middleware};
pub use routes::create_router;
pub use types::{AppState, CorsConfig, HealthResponse, MESSAGE_SENT, MessageResponse};

use axum::Router;
use formrelay_core::FormMailer;
use std::sync::Arc;

/// Create the form relay routes.
///
/// The returned builder can be given a CORS policy before it is turned into a
/// [`Router`].
pub fn routes(mailer: Arc<dyn FormMailer>) -> RelayRouterBuilder {
    RelayRouterBuilder {
        state: AppState::new(mailer),
        cors_config: CorsConfig::default(),
    }
}

/// Builder for configuring the relay routes
pub struct RelayRouterBuilder {
    state: AppState,
    cors_config: CorsConfig,
}

impl RelayRouterBuilder {
    /// Set the allowed CORS origins
    pub fn with_cors_config(mut self, config: CorsConfig) -> Self {
        self.cors_config = config;
        self
    }

    /// Build the router with the configured options
    pub fn build(self) -> Router {
        create_router(self.state, self.cors_config)
    }
}

impl From<RelayRouterBuilder> for Router {
    fn from(builder: RelayRouterBuilder) -> Self {
        builder.build()
    }
}
