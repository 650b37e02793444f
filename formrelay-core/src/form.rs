//! Validated form records.
//!
//! A record is only ever built by running the submitted JSON object through
//! an ordered table of `(field, rule)` pairs. Every field is checked and every
//! failure is collected, so a client sees all of its mistakes at once.
use std::collections::HashMap;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{FieldError, ValidationErrors};
use crate::validation::{
    FieldRule, normalize_city, normalize_full_name, strip, validate_email, validate_phone,
};
use formrelay_mailer::templates::{CONTACT_US_TEMPLATE, QUOTATION_TEMPLATE};

/// Rules shared by both forms, in reporting order.
pub const MESSAGE_DETAILS_RULES: &[(&str, FieldRule)] = &[
    ("fullName", normalize_full_name),
    ("email", validate_email),
    ("phone", validate_phone),
    ("subject", strip),
    ("message", strip),
];

/// Extra rules of the quotation form.
pub const QUOTATION_RULES: &[(&str, FieldRule)] = &[("city", normalize_city), ("address", strip)];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    ContactUs,
    Quotation,
}

impl FormKind {
    pub fn template_name(&self) -> &'static str {
        match self {
            FormKind::ContactUs => CONTACT_US_TEMPLATE,
            FormKind::Quotation => QUOTATION_TEMPLATE,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FormKind::ContactUs => "contact_us",
            FormKind::Quotation => "quotation",
        }
    }
}

impl std::fmt::Display for FormKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized values keyed by field name, produced once all rules passed.
struct ValidatedFields(HashMap<&'static str, String>);

impl ValidatedFields {
    fn take(&mut self, field: &str) -> String {
        self.0.remove(field).unwrap_or_default()
    }
}

fn apply_rules<'a, I>(input: &Map<String, Value>, rules: I) -> Result<ValidatedFields, ValidationErrors>
where
    I: IntoIterator<Item = &'a (&'static str, FieldRule)>,
{
    let mut values = HashMap::new();
    let mut errors = ValidationErrors::new();

    for (field, rule) in rules {
        match input.get(*field) {
            None => errors.push(FieldError::missing(field)),
            Some(Value::String(raw)) => match rule(raw.as_str()) {
                Ok(value) => {
                    values.insert(*field, value);
                }
                Err(message) => errors.push(FieldError::invalid_value(field, message)),
            },
            Some(_) => errors.push(FieldError::invalid_type(field)),
        }
    }

    if errors.is_empty() {
        Ok(ValidatedFields(values))
    } else {
        Err(errors)
    }
}

/// The fields every submission carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageDetails {
    full_name: String,
    email: String,
    phone: String,
    subject: String,
    message: String,
}

impl MessageDetails {
    fn from_fields(fields: &mut ValidatedFields) -> Self {
        Self {
            full_name: fields.take("fullName"),
            email: fields.take("email"),
            phone: fields.take("phone"),
            subject: fields.take("subject"),
            message: fields.take("message"),
        }
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactUsForm {
    #[serde(flatten)]
    details: MessageDetails,
}

impl ContactUsForm {
    pub const KIND: FormKind = FormKind::ContactUs;

    pub fn from_json(input: &Map<String, Value>) -> Result<Self, ValidationErrors> {
        let mut fields = apply_rules(input, MESSAGE_DETAILS_RULES)?;

        Ok(Self {
            details: MessageDetails::from_fields(&mut fields),
        })
    }

    pub fn details(&self) -> &MessageDetails {
        &self.details
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuotationForm {
    #[serde(flatten)]
    details: MessageDetails,
    city: String,
    address: String,
}

impl QuotationForm {
    pub const KIND: FormKind = FormKind::Quotation;

    pub fn from_json(input: &Map<String, Value>) -> Result<Self, ValidationErrors> {
        let mut fields = apply_rules(
            input,
            MESSAGE_DETAILS_RULES.iter().chain(QUOTATION_RULES.iter()),
        )?;

        Ok(Self {
            details: MessageDetails::from_fields(&mut fields),
            city: fields.take("city"),
            address: fields.take("address"),
        })
    }

    pub fn details(&self) -> &MessageDetails {
        &self.details
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn address(&self) -> &str {
        &self.address
    }
}
