use crate::{
    MailerError,
    templates::{ContactUsTemplate, QuotationTemplate, TemplateData},
};
use askama::Template;

pub const CONTACT_US_TEMPLATE: &str = "contact_us";
pub const QUOTATION_TEMPLATE: &str = "quotation";

/// Renders a named template against [`TemplateData`].
///
/// Rendering is pure: the templates are compiled into the binary, so the only
/// failure modes are an unknown name (a configuration problem) or data that is
/// missing a field the template needs.
pub trait TemplateEngine: Send + Sync {
    fn render_html(&self, template_name: &str, data: &TemplateData)
    -> Result<String, MailerError>;
}

#[derive(Debug, Clone, Default)]
pub struct AskamaTemplateEngine;

impl AskamaTemplateEngine {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateEngine for AskamaTemplateEngine {
    fn render_html(
        &self,
        template_name: &str,
        data: &TemplateData,
    ) -> Result<String, MailerError> {
        match template_name {
            CONTACT_US_TEMPLATE => Ok(ContactUsTemplate::from_data(data)?.render()?),
            QUOTATION_TEMPLATE => Ok(QuotationTemplate::from_data(data)?.render()?),
            other => Err(MailerError::Config(format!("Unknown email template: {other}"))),
        }
    }
}
