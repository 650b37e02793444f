//! Email composition, templating and SMTP delivery for formrelay.
//!
//! The crate is the leaf of the workspace: it knows nothing about forms or
//! HTTP. It exposes an [`Email`] model, the [`Mailer`] transport trait with an
//! SMTP implementation, and the compiled askama templates used to render
//! submissions.
pub mod config;
pub mod email;
pub mod error;
pub mod mailer;
pub mod templates;
pub mod transports;

pub use config::{MailerConfig, TlsType};
pub use email::{Email, EmailBuilder};
pub use error::MailerError;
pub use mailer::Mailer;
pub use templates::{AskamaTemplateEngine, TemplateData, TemplateEngine};
pub use transports::{SmtpTransport, TlsConfig};

/// Address types the SMTP layer accepts, for validating input up front.
pub use lettre::{Address, message::Mailbox};

pub mod prelude {
    pub use crate::{
        AskamaTemplateEngine, Email, EmailBuilder, Mailer, MailerConfig, MailerError,
        SmtpTransport, TemplateData, TemplateEngine, TlsConfig, TlsType,
    };
}
