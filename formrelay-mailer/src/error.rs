use thiserror::Error;

#[derive(Error, Debug)]
pub enum MailerError {
    #[error("Email transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    #[error("Email address error: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("Email builder error: {0}")]
    Builder(String),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Email message error: {0}")]
    Message(#[from] lettre::error::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl MailerError {
    /// Whether the error happened while talking to the SMTP relay, as opposed
    /// to while composing the message.
    pub fn is_transport(&self) -> bool {
        matches!(self, MailerError::Transport(_))
    }
}

pub type Result<T> = std::result::Result<T, MailerError>;
