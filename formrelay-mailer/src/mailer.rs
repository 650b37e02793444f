use crate::{Email, MailerError};
use async_trait::async_trait;

/// A transport able to deliver one composed [`Email`].
///
/// Each call is all-or-nothing: it either hands the message to the relay or
/// returns an error. Implementations never retry.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send_email(&self, email: Email) -> Result<(), MailerError>;
}

#[async_trait]
impl<T: Mailer + ?Sized> Mailer for std::sync::Arc<T> {
    async fn send_email(&self, email: Email) -> Result<(), MailerError> {
        (**self).send_email(email).await
    }
}
