//! Core functionality for formrelay
//!
//! This crate turns untrusted form submissions into validated records and
//! hands them to the mailer. It holds:
//!
//! - the field rules and the [`ContactUsForm`] / [`QuotationForm`] records built from them,
//! - the process [`Settings`] read from `APP_*` environment variables,
//! - the [`FormMailer`] service that renders a record and dispatches it to the administrator.
//!
//! HTTP concerns live in `formrelay-axum`.
pub mod error;
pub mod form;
pub mod services;
pub mod settings;
pub mod validation;

pub use error::{ConfigError, Error, FieldError, FieldErrorKind, ValidationErrors};
pub use form::{ContactUsForm, FormKind, MessageDetails, QuotationForm};
pub use services::{FormMailer, FormMailerService};
pub use settings::Settings;
