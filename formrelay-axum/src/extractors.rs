use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{HeaderValue, StatusCode, header},
};
use serde_json::{Map, Value};

use crate::error::ApiError;

/// A request body that passed the JSON guard: the content type is JSON and the
/// body parsed into a JSON object.
///
/// Extraction fails with [`ApiError::NotJson`] or [`ApiError::BadRequest`]
/// before the handler runs, so handlers only ever see an object.
#[derive(Debug, Clone)]
pub struct JsonBody(pub Map<String, Value>);

impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req.headers().get(header::CONTENT_TYPE).cloned();
        ensure_json_content_type(content_type.as_ref())?;

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| match rejection.status() {
                StatusCode::BAD_REQUEST => ApiError::BadRequest(rejection.body_text()),
                status => ApiError::UnreadableBody {
                    status,
                    message: rejection.body_text(),
                },
            })?;

        parse_json_body(content_type.as_ref(), &bytes).map(JsonBody)
    }
}

/// `application/json` or any `application/*+json` type.
pub fn is_json_content_type(content_type: &str) -> bool {
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    mime == "application/json"
        || (mime.starts_with("application/") && mime.ends_with("+json"))
}

fn ensure_json_content_type(content_type: Option<&HeaderValue>) -> Result<(), ApiError> {
    let is_json = content_type
        .and_then(|value| value.to_str().ok())
        .is_some_and(is_json_content_type);

    if is_json {
        Ok(())
    } else {
        tracing::debug!(?content_type, "Rejecting non-JSON request body");
        Err(ApiError::NotJson)
    }
}

/// The JSON guard as a plain function over the raw request pieces.
pub fn parse_json_body(
    content_type: Option<&HeaderValue>,
    body: &[u8],
) -> Result<Map<String, Value>, ApiError> {
    ensure_json_content_type(content_type)?;

    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(ApiError::BadRequest(
            "Request body must be a JSON object".to_string(),
        )),
        Err(e) => {
            tracing::debug!(error = %e, "Rejecting malformed JSON body");
            Err(ApiError::BadRequest(format!("Failed to parse JSON body: {e}")))
        }
    }
}
