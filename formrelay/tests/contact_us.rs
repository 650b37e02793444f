//! End-to-end tests for the contact-us endpoint

mod common;

use axum::http::StatusCode;
use common::*;
use serde_json::json;

fn contact_body() -> serde_json::Value {
    json!({
        "fullName": "john doe",
        "email": "j@x.com",
        "phone": "0712345678",
        "subject": "  Hi ",
        "message": "\tHello\n",
    })
}

#[tokio::test]
async fn test_contact_us_sends_one_email_to_admin() {
    let (app, recorder) = recording_app();

    let (status, body) = post_json(app, "/contact-us", &contact_body()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Message sent successfully" }));

    let sent = recorder.sent();
    assert_eq!(sent.len(), 1);
    let email = &sent[0];
    assert_eq!(email.to, ADMIN_EMAIL);
    assert_eq!(email.from, ADMIN_EMAIL);
    assert_eq!(email.reply_to.as_deref(), Some("j@x.com"));
    assert_eq!(email.subject, "Hi");

    let html = email.html_body.as_deref().unwrap();
    assert!(html.contains("John Doe"));
    assert!(html.contains("0712345678"));
    assert!(html.contains("Hello"));
}

#[tokio::test]
async fn test_contact_us_accepts_trailing_slash() {
    let (app, recorder) = recording_app();

    let (status, _) = post_json(app, "/contact-us/", &contact_body()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(recorder.sent().len(), 1);
}

#[tokio::test]
async fn test_contact_us_escapes_submitted_markup() {
    let (app, recorder) = recording_app();
    let mut body = contact_body();
    body["message"] = json!("<script>alert(1)</script>");

    let (status, _) = post_json(app, "/contact-us", &body).await;

    assert_eq!(status, StatusCode::OK);
    let html = recorder.sent()[0].html_body.clone().unwrap();
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
}

#[tokio::test]
async fn test_contact_us_reports_every_invalid_field() {
    let (app, recorder) = recording_app();
    let body = json!({
        "fullName": "John",
        "email": "not-an-email",
        "phone": "12345",
        "subject": "Hi",
    });

    let (status, body) = post_json(app, "/contact-us", &body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(field_errors(&body), vec!["email", "phone", "message"]);
    assert!(recorder.sent().is_empty());
}

#[tokio::test]
async fn test_contact_us_rejects_addresses_smtp_cannot_use() {
    for address in ["j@x..com", ".j@x.com", "j..k@x.com", "j@-x.com"] {
        let (app, recorder) = recording_app();
        let mut body = contact_body();
        body["email"] = json!(address);

        let (status, body) = post_json(app, "/contact-us", &body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "{address}");
        assert_eq!(field_errors(&body), vec!["email"], "{address}");
        assert!(recorder.sent().is_empty(), "{address}");
    }
}

#[tokio::test]
async fn test_contact_us_rejects_non_string_field() {
    let (app, recorder) = recording_app();
    let mut body = contact_body();
    body["phone"] = json!(712345678);

    let (status, body) = post_json(app, "/contact-us", &body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"][0]["field"], "phone");
    assert_eq!(body["error"][0]["kind"], "invalid_type");
    assert!(recorder.sent().is_empty());
}

#[tokio::test]
async fn test_contact_us_rejects_plain_text() {
    let (app, recorder) = recording_app();

    let (status, body) = post_raw(app, "/contact-us", "text/plain", "hello").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Request must be a valid JSON" }));
    assert!(recorder.sent().is_empty());
}

#[tokio::test]
async fn test_contact_us_rejects_malformed_json() {
    let (app, recorder) = recording_app();

    let (status, body) =
        post_raw(app, "/contact-us", "application/json", "{\"fullName\": ").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
    assert!(recorder.sent().is_empty());
}

#[tokio::test]
async fn test_contact_us_rejects_json_array() {
    let (app, recorder) = recording_app();

    let (status, body) = post_raw(app, "/contact-us", "application/json", "[1, 2]").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Request body must be a JSON object" }));
    assert!(recorder.sent().is_empty());
}

#[tokio::test]
async fn test_contact_us_reports_relay_failure() {
    let app = unreachable_relay_app();

    let (status, body) = post_json(app, "/contact-us", &contact_body()).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body, json!({ "error": "Failed to send message" }));
}
