mod engine;
mod form_templates;

pub use engine::{AskamaTemplateEngine, CONTACT_US_TEMPLATE, QUOTATION_TEMPLATE, TemplateEngine};
pub use form_templates::{ContactUsTemplate, QuotationTemplate};

use crate::MailerError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TemplateData {
    pub data: HashMap<String, serde_json::Value>,
}

impl TemplateData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flatten a serializable record into template data, one entry per
    /// top-level field.
    pub fn from_serialize<T: Serialize>(value: &T) -> Result<Self, MailerError> {
        match serde_json::to_value(value)? {
            serde_json::Value::Object(map) => Ok(Self {
                data: map.into_iter().collect(),
            }),
            _ => Err(MailerError::Builder(
                "Template data must serialize to an object".to_string(),
            )),
        }
    }

    pub fn insert<T: Serialize>(mut self, key: &str, value: T) -> Result<Self, MailerError> {
        self.data
            .insert(key.to_string(), serde_json::to_value(value)?);
        Ok(self)
    }

    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.data.get(key)
    }

    pub(crate) fn require_str(&self, key: &str) -> Result<String, MailerError> {
        self.get(key)
            .and_then(|v| v.as_str())
            .map(str::to_string)
            .ok_or_else(|| MailerError::Builder(format!("{key} is required")))
    }
}
