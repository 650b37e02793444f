use async_trait::async_trait;
use formrelay_mailer::prelude::*;
use serde::Serialize;

use crate::{
    Error,
    form::{ContactUsForm, FormKind, MessageDetails, QuotationForm},
    settings::Settings,
};

/// Relays validated forms to the administrator mailbox.
#[async_trait]
pub trait FormMailer: Send + Sync {
    async fn send_contact_us_email(&self, form: &ContactUsForm) -> Result<(), Error>;

    async fn send_quotation_email(&self, form: &QuotationForm) -> Result<(), Error>;
}

pub struct FormMailerService {
    transport: Box<dyn Mailer>,
    engine: AskamaTemplateEngine,
    from_address: String,
    recipient: String,
}

impl FormMailerService {
    /// Build the service around an SMTP transport described by `config`,
    /// delivering every form to `recipient`.
    pub fn new(config: &MailerConfig, recipient: &str) -> Result<Self, Error> {
        let transport = config.build_transport()?;

        Ok(Self::with_transport(
            transport,
            &config.from_address,
            recipient,
        ))
    }

    /// The administrator is both sender and recipient.
    pub fn from_settings(settings: &Settings) -> Result<Self, Error> {
        Self::new(&settings.mailer_config(), &settings.admin_email)
    }

    pub fn with_transport(transport: Box<dyn Mailer>, from_address: &str, recipient: &str) -> Self {
        Self {
            transport,
            engine: AskamaTemplateEngine::new(),
            from_address: from_address.to_string(),
            recipient: recipient.to_string(),
        }
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    fn compose<T: Serialize>(
        &self,
        kind: FormKind,
        details: &MessageDetails,
        form: &T,
    ) -> Result<Email, Error> {
        let data = TemplateData::from_serialize(form)?;
        let html_body = self.engine.render_html(kind.template_name(), &data)?;

        Ok(Email::builder()
            .from(&self.from_address)
            .to(&self.recipient)
            .reply_to(details.email())
            .subject(details.subject())
            .html_body(html_body)
            .build()?)
    }

    async fn dispatch<T: Serialize + Sync>(
        &self,
        kind: FormKind,
        details: &MessageDetails,
        form: &T,
    ) -> Result<(), Error> {
        let email = self.compose(kind, details, form)?;

        match self.transport.send_email(email).await {
            Ok(()) => {
                tracing::info!(
                    form = %kind,
                    recipient = %self.recipient,
                    "Form email sent"
                );
                Ok(())
            }
            Err(e) => {
                tracing::error!(
                    form = %kind,
                    recipient = %self.recipient,
                    error = %e,
                    "Failed to send form email"
                );
                Err(e.into())
            }
        }
    }
}

#[async_trait]
impl FormMailer for FormMailerService {
    async fn send_contact_us_email(&self, form: &ContactUsForm) -> Result<(), Error> {
        self.dispatch(ContactUsForm::KIND, form.details(), form)
            .await
    }

    async fn send_quotation_email(&self, form: &QuotationForm) -> Result<(), Error> {
        self.dispatch(QuotationForm::KIND, form.details(), form)
            .await
    }
}
