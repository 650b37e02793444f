use crate::MailerError;

/// One outgoing message, addressed to a single mailbox.
///
/// Relayed forms always go to one administrator, so there is no recipient
/// list. `reply_to` carries the submitter's address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email {
    pub to: String,
    pub from: String,
    pub reply_to: Option<String>,
    pub subject: String,
    pub html_body: Option<String>,
    pub text_body: Option<String>,
}

impl Email {
    pub fn builder() -> EmailBuilder {
        EmailBuilder::default()
    }
}

#[derive(Debug, Default)]
pub struct EmailBuilder {
    to: Option<String>,
    from: Option<String>,
    reply_to: Option<String>,
    subject: Option<String>,
    html_body: Option<String>,
    text_body: Option<String>,
}

impl EmailBuilder {
    pub fn to(mut self, address: impl Into<String>) -> Self {
        self.to = Some(address.into());
        self
    }

    pub fn from(mut self, address: impl Into<String>) -> Self {
        self.from = Some(address.into());
        self
    }

    pub fn reply_to(mut self, address: impl Into<String>) -> Self {
        self.reply_to = Some(address.into());
        self
    }

    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn html_body(mut self, html: impl Into<String>) -> Self {
        self.html_body = Some(html.into());
        self
    }

    pub fn text_body(mut self, text: impl Into<String>) -> Self {
        self.text_body = Some(text.into());
        self
    }

    /// Fails with a [`MailerError::Builder`] naming every missing part.
    pub fn build(self) -> Result<Email, MailerError> {
        let mut missing = Vec::new();
        let to = present(self.to, "recipient", &mut missing);
        let from = present(self.from, "sender", &mut missing);
        let subject = present(self.subject, "subject", &mut missing);
        if self.html_body.is_none() && self.text_body.is_none() {
            missing.push("body");
        }

        match (to, from, subject) {
            (Some(to), Some(from), Some(subject)) if missing.is_empty() => Ok(Email {
                to,
                from,
                reply_to: self.reply_to.filter(|address| !address.is_empty()),
                subject,
                html_body: self.html_body,
                text_body: self.text_body,
            }),
            _ => Err(MailerError::Builder(format!(
                "Email is missing: {}",
                missing.join(", ")
            ))),
        }
    }
}

fn present(
    value: Option<String>,
    part: &'static str,
    missing: &mut Vec<&'static str>,
) -> Option<String> {
    match value {
        Some(value) if !value.trim().is_empty() => Some(value),
        _ => {
            missing.push(part);
            None
        }
    }
}
