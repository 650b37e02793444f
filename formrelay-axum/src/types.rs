use std::sync::Arc;

use axum::http::HeaderValue;
use formrelay_core::{ConfigError, FormMailer};
use serde::{Deserialize, Serialize};

pub const MESSAGE_SENT: &str = "Message sent successfully";

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub mailer: Arc<dyn FormMailer>,
}

impl AppState {
    pub fn new(mailer: Arc<dyn FormMailer>) -> Self {
        Self { mailer }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn sent() -> Self {
        Self {
            message: MESSAGE_SENT.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Origins allowed to call the endpoints from a browser.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CorsConfig {
    #[default]
    AnyOrigin,
    Origins(Vec<HeaderValue>),
}

impl CorsConfig {
    /// Parse the `cors_allow_origin` setting: `*` or a comma-separated list
    /// of exact origins.
    pub fn from_setting(value: &str) -> Result<Self, ConfigError> {
        let value = value.trim();
        if value == "*" {
            return Ok(Self::AnyOrigin);
        }

        let origins = value
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(|origin| {
                HeaderValue::from_str(origin).map_err(|e| ConfigError::Invalid {
                    var: "APP_CORS_ALLOW_ORIGIN".to_string(),
                    reason: format!("{origin:?}: {e}"),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if origins.is_empty() {
            return Err(ConfigError::Invalid {
                var: "APP_CORS_ALLOW_ORIGIN".to_string(),
                reason: "no origin given".to_string(),
            });
        }

        Ok(Self::Origins(origins))
    }
}
