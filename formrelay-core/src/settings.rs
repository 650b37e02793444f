use std::time::Duration;

use formrelay_mailer::{MailerConfig, TlsType};
use secrecy::SecretString;

use crate::error::ConfigError;
use crate::validation::validate_email;

pub const ENV_PREFIX: &str = "APP_";

const DEFAULT_EMAIL_HOST: &str = "smtp.gmail.com";
const DEFAULT_EMAIL_PORT: u16 = 465;
const DEFAULT_EMAIL_TIMEOUT_SECS: u64 = 30;
const DEFAULT_CORS_ALLOW_ORIGIN: &str = "*";

/// Process-wide settings.
///
/// Built once at startup and shared read-only with every request. The
/// administrator mailbox is both the sender and the recipient of every relayed
/// form, and its password is the SMTP login secret.
#[derive(Debug, Clone)]
pub struct Settings {
    pub admin_email: String,
    pub admin_password: SecretString,
    pub email_host: String,
    pub email_port: u16,
    pub email_use_tls: bool,
    pub email_timeout: Duration,
    pub cors_allow_origin: String,
}

impl Settings {
    /// Read settings from `APP_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`, which receives the full variable name
    /// (for example `APP_ADMIN_EMAIL`).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            let var = format!("{ENV_PREFIX}{name}");
            let value = lookup(&var);
            (var, value)
        };

        let (var, admin_email) = get("ADMIN_EMAIL");
        let admin_email = admin_email.ok_or(ConfigError::Missing(var.clone()))?;
        validate_email(&admin_email).map_err(|reason| ConfigError::Invalid { var, reason })?;

        let (var, admin_password) = get("ADMIN_PASSWORD");
        let admin_password = admin_password.ok_or(ConfigError::Missing(var.clone()))?;
        if admin_password.is_empty() {
            return Err(ConfigError::Invalid {
                var,
                reason: "must not be empty".to_string(),
            });
        }

        let (_, email_host) = get("EMAIL_HOST");
        let email_host = email_host.unwrap_or_else(|| DEFAULT_EMAIL_HOST.to_string());

        let email_port = match get("EMAIL_PORT") {
            (var, Some(port)) => port.trim().parse::<u16>().map_err(|e| ConfigError::Invalid {
                var,
                reason: e.to_string(),
            })?,
            (_, None) => DEFAULT_EMAIL_PORT,
        };

        let email_use_tls = match get("EMAIL_USE_TLS") {
            (var, Some(flag)) => parse_bool(&flag).ok_or_else(|| ConfigError::Invalid {
                var,
                reason: format!("expected a boolean, got {flag:?}"),
            })?,
            (_, None) => true,
        };

        let email_timeout = match get("EMAIL_TIMEOUT_SECS") {
            (var, Some(secs)) => secs
                .trim()
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|e| ConfigError::Invalid {
                    var,
                    reason: e.to_string(),
                })?,
            (_, None) => Duration::from_secs(DEFAULT_EMAIL_TIMEOUT_SECS),
        };

        let (_, cors_allow_origin) = get("CORS_ALLOW_ORIGIN");
        let cors_allow_origin =
            cors_allow_origin.unwrap_or_else(|| DEFAULT_CORS_ALLOW_ORIGIN.to_string());

        Ok(Self {
            admin_email,
            admin_password: SecretString::new(admin_password),
            email_host,
            email_port,
            email_use_tls,
            email_timeout,
            cors_allow_origin,
        })
    }

    /// SMTP settings for the mailer: the administrator logs in and sends as
    /// itself, with implicit TLS or opportunistic STARTTLS.
    pub fn mailer_config(&self) -> MailerConfig {
        let mut config = MailerConfig::new(&self.email_host, &self.admin_email);
        config.port = Some(self.email_port);
        config.username = Some(self.admin_email.clone());
        config.password = Some(self.admin_password.clone());
        config.tls = if self.email_use_tls {
            TlsType::Tls
        } else {
            TlsType::Opportunistic
        };
        config.timeout = Some(self.email_timeout);
        config
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "t" | "yes" | "y" | "on" => Some(true),
        "0" | "false" | "f" | "no" | "n" | "off" => Some(false),
        _ => None,
    }
}
