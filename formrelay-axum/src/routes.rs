use axum::{
    Json, Router,
    extract::State,
    response::IntoResponse,
    routing::{get, post},
};
use formrelay_core::{ContactUsForm, QuotationForm};

use crate::{
    error::{ApiError, Result},
    extractors::JsonBody,
    middleware::{cors_layer, logging_middleware},
    types::*,
};

pub fn create_router(state: AppState, cors_config: CorsConfig) -> Router {
    // Trailing slashes are accepted on the form endpoints.
    Router::new()
        .route("/health", get(health_handler))
        .route("/contact-us", post(contact_us_handler))
        .route("/contact-us/", post(contact_us_handler))
        .route("/quotation", post(quotation_handler))
        .route("/quotation/", post(quotation_handler))
        .with_state(state)
        .layer(axum::middleware::from_fn(logging_middleware))
        .layer(cors_layer(&cors_config))
}

async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Send an email to the administrator with the contact form.
async fn contact_us_handler(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> Result<impl IntoResponse> {
    let form = ContactUsForm::from_json(&body).map_err(|errors| {
        tracing::warn!(form = "contact_us", fields = ?errors.fields(), "Rejected submission");
        ApiError::Validation(errors)
    })?;

    state.mailer.send_contact_us_email(&form).await?;

    Ok(Json(MessageResponse::sent()))
}

/// Send an email to the administrator with the quotation request.
async fn quotation_handler(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> Result<impl IntoResponse> {
    let form = QuotationForm::from_json(&body).map_err(|errors| {
        tracing::warn!(form = "quotation", fields = ?errors.fields(), "Rejected submission");
        ApiError::Validation(errors)
    })?;

    state.mailer.send_quotation_email(&form).await?;

    Ok(Json(MessageResponse::sent()))
}
