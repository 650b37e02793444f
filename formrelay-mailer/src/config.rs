use std::time::Duration;

use crate::{Mailer, MailerError, SmtpTransport, TlsConfig};
use secrecy::SecretString;

/// Everything needed to open an authenticated SMTP session.
#[derive(Debug, Clone)]
pub struct MailerConfig {
    pub host: String,
    pub port: Option<u16>,
    pub username: Option<String>,
    pub password: Option<SecretString>,
    pub tls: TlsType,
    pub timeout: Option<Duration>,
    pub from_address: String,
}

/// How the session is secured, see [`TlsConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TlsType {
    None,
    Opportunistic,
    Tls,
}

impl From<TlsType> for TlsConfig {
    fn from(tls_type: TlsType) -> Self {
        match tls_type {
            TlsType::None => TlsConfig::None,
            TlsType::Opportunistic => TlsConfig::Opportunistic,
            TlsType::Tls => TlsConfig::Tls,
        }
    }
}

impl MailerConfig {
    pub fn new(host: impl Into<String>, from_address: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: None,
            username: None,
            password: None,
            tls: TlsType::Tls,
            timeout: None,
            from_address: from_address.into(),
        }
    }

    pub fn build_transport(&self) -> Result<Box<dyn Mailer>, MailerError> {
        if self.host.is_empty() {
            return Err(MailerError::Config("SMTP host is required".to_string()));
        }

        let mut builder = SmtpTransport::builder(&self.host).tls(self.tls.into());

        if let Some(port) = self.port {
            builder = builder.port(port);
        }

        match (&self.username, &self.password) {
            (Some(username), Some(password)) => {
                builder = builder.credentials(username, password);
            }
            (None, None) => {}
            _ => {
                return Err(MailerError::Config(
                    "SMTP username and password must be set together".to_string(),
                ));
            }
        }

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Box::new(builder.build()?))
    }
}
