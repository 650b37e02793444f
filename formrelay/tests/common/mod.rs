#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use formrelay::{FormMailerService, Settings, build_app_with_mailer};
use formrelay_mailer::{Email, Mailer, MailerConfig, MailerError, TlsType};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

pub const ADMIN_EMAIL: &str = "admin@example.com";

/// Records every email instead of opening an SMTP session.
#[derive(Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<Email>>,
}

impl RecordingMailer {
    pub fn sent(&self) -> Vec<Email> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send_email(&self, email: Email) -> Result<(), MailerError> {
        self.sent.lock().unwrap().push(email);
        Ok(())
    }
}

pub fn settings() -> Settings {
    settings_with(&[])
}

pub fn settings_with(overrides: &[(&str, &str)]) -> Settings {
    let mut vars = vec![
        ("APP_ADMIN_EMAIL", ADMIN_EMAIL),
        ("APP_ADMIN_PASSWORD", "app-password"),
    ];
    vars.extend_from_slice(overrides);

    Settings::from_lookup(move |key: &str| {
        vars.iter()
            .find(|(name, _)| *name == key)
            .map(|(_, value)| value.to_string())
    })
    .expect("valid settings")
}

/// An app whose mailer records instead of sending.
pub fn recording_app() -> (Router, Arc<RecordingMailer>) {
    recording_app_with(settings())
}

pub fn recording_app_with(settings: Settings) -> (Router, Arc<RecordingMailer>) {
    let recorder = Arc::new(RecordingMailer::default());
    let service =
        FormMailerService::with_transport(Box::new(recorder.clone()), ADMIN_EMAIL, ADMIN_EMAIL);
    let app = build_app_with_mailer(&settings, Arc::new(service)).expect("app builds");

    (app, recorder)
}

/// An app whose SMTP relay refuses connections.
pub fn unreachable_relay_app() -> Router {
    let mut config = MailerConfig::new("127.0.0.1", ADMIN_EMAIL);
    config.port = Some(1);
    config.tls = TlsType::None;
    config.timeout = Some(Duration::from_secs(2));

    let service = FormMailerService::new(&config, ADMIN_EMAIL).expect("service builds");
    build_app_with_mailer(&settings(), Arc::new(service)).expect("app builds")
}

pub async fn post_json(app: Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    post_raw(app, uri, "application/json", body.to_string()).await
}

pub async fn post_raw(
    app: Router,
    uri: &str,
    content_type: &str,
    body: impl Into<Body>,
) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, content_type)
        .body(body.into())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, json)
}

pub fn field_errors(body: &Value) -> Vec<String> {
    body["error"]
        .as_array()
        .map(|errors| {
            errors
                .iter()
                .filter_map(|e| e["field"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}
