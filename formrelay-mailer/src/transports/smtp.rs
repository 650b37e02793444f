use std::time::Duration;

use crate::{Email, Mailer, MailerError};
use async_trait::async_trait;
use lettre::message::{MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::transport::smtp::client::{Tls, TlsParameters};
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use secrecy::{ExposeSecret, SecretString};

/// SMTP delivery over an authenticated session.
///
/// The underlying lettre transport is built without a connection pool, so
/// every [`Mailer::send_email`] call opens its own session, authenticates,
/// transmits, and closes it again. A failed step drops the connection.
#[derive(Clone)]
pub struct SmtpTransport {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    hostname: String,
}

impl SmtpTransport {
    pub fn new(transport: AsyncSmtpTransport<Tokio1Executor>, hostname: &str) -> Self {
        Self {
            transport,
            hostname: hostname.to_string(),
        }
    }

    pub fn builder(hostname: &str) -> SmtpTransportBuilder {
        SmtpTransportBuilder::new(hostname)
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }
}

impl std::fmt::Debug for SmtpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpTransport")
            .field("hostname", &self.hostname)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Mailer for SmtpTransport {
    async fn send_email(&self, email: Email) -> Result<(), MailerError> {
        let message = build_message(email)?;

        tracing::debug!(host = %self.hostname, "Opening SMTP session");
        let response = self.transport.send(message).await?;
        tracing::debug!(
            host = %self.hostname,
            code = %response.code(),
            "SMTP relay accepted message"
        );

        Ok(())
    }
}

pub struct SmtpTransportBuilder {
    hostname: String,
    port: Option<u16>,
    credentials: Option<Credentials>,
    tls: TlsConfig,
    timeout: Option<Duration>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TlsConfig {
    /// Plain text session. Only meant for local test relays.
    None,
    /// Upgrade with STARTTLS when the server offers it.
    Opportunistic,
    /// Implicit TLS from the first byte (SMTPS, usually port 465).
    Tls,
}

impl SmtpTransportBuilder {
    pub fn new(hostname: &str) -> Self {
        Self {
            hostname: hostname.to_string(),
            port: None,
            credentials: None,
            tls: TlsConfig::Tls,
            timeout: None,
        }
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn credentials(mut self, username: &str, password: &SecretString) -> Self {
        self.credentials = Some(Credentials::new(
            username.to_string(),
            password.expose_secret().to_string(),
        ));
        self
    }

    pub fn tls(mut self, tls: TlsConfig) -> Self {
        self.tls = tls;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<SmtpTransport, MailerError> {
        let mut builder = match self.tls {
            TlsConfig::None => {
                AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&self.hostname)
            }
            TlsConfig::Opportunistic => {
                let parameters = TlsParameters::new(self.hostname.clone())?;
                AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&self.hostname)
                    .port(lettre::transport::smtp::SUBMISSION_PORT)
                    .tls(Tls::Opportunistic(parameters))
            }
            TlsConfig::Tls => AsyncSmtpTransport::<Tokio1Executor>::relay(&self.hostname)?,
        };

        if let Some(port) = self.port {
            builder = builder.port(port);
        }

        if let Some(credentials) = self.credentials {
            builder = builder.credentials(credentials);
        }

        if self.timeout.is_some() {
            builder = builder.timeout(self.timeout);
        }

        Ok(SmtpTransport::new(builder.build(), &self.hostname))
    }
}

/// Compose the MIME message for `email`.
///
/// An HTML-only email is sent as `multipart/mixed` with a single
/// `text/html` part; with a text body as well it becomes
/// `multipart/alternative`.
pub(crate) fn build_message(email: Email) -> Result<Message, MailerError> {
    let mut message_builder = Message::builder()
        .from(email.from.parse()?)
        .to(email.to.parse()?)
        .subject(email.subject);

    if let Some(reply_to) = email.reply_to {
        message_builder = message_builder.reply_to(reply_to.parse()?);
    }

    let message = match (email.html_body, email.text_body) {
        (Some(html), Some(text)) => message_builder.multipart(
            MultiPart::alternative()
                .singlepart(SinglePart::plain(text))
                .singlepart(SinglePart::html(html)),
        )?,
        (Some(html), None) => {
            message_builder.multipart(MultiPart::mixed().singlepart(SinglePart::html(html)))?
        }
        (None, Some(text)) => message_builder.singlepart(SinglePart::plain(text))?,
        (None, None) => {
            return Err(MailerError::Builder("No email body provided".to_string()));
        }
    };

    Ok(message)
}
