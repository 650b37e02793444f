use crate::{MailerError, templates::TemplateData};
use askama::Template;

#[derive(Template)]
#[template(
    source = r#"
<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>New message - {{ subject }}</title>
    <style>
        body { font-family: Arial, sans-serif; line-height: 1.6; color: #333; margin: 0; padding: 20px; background-color: #f4f4f4; }
        .container { max-width: 600px; margin: 0 auto; background: white; padding: 30px; border-radius: 8px; box-shadow: 0 2px 10px rgba(0,0,0,0.1); }
        .details td { padding: 4px 12px 4px 0; vertical-align: top; }
        .label { font-weight: bold; color: #555; }
        .message { background: #f8f9fa; padding: 15px; border-radius: 4px; white-space: pre-wrap; }
        .footer { margin-top: 30px; padding-top: 20px; border-top: 1px solid #eee; font-size: 12px; color: #666; }
    </style>
</head>
<body>
    <div class="container">
        <h2>New message from the contact form</h2>

        <table class="details">
            <tr><td class="label">Name</td><td>{{ full_name }}</td></tr>
            <tr><td class="label">Email</td><td><a href="mailto:{{ email }}">{{ email }}</a></td></tr>
            <tr><td class="label">Phone</td><td>{{ phone }}</td></tr>
            <tr><td class="label">Subject</td><td>{{ subject }}</td></tr>
        </table>

        <h3>Message</h3>
        <div class="message">{{ message }}</div>

        <div class="footer">
            <p>Reply to this email to answer {{ full_name }} directly.</p>
        </div>
    </div>
</body>
</html>
"#,
    ext = "html"
)]
pub struct ContactUsTemplate {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

impl ContactUsTemplate {
    pub fn from_data(data: &TemplateData) -> Result<Self, MailerError> {
        Ok(Self {
            full_name: data.require_str("fullName")?,
            email: data.require_str("email")?,
            phone: data.require_str("phone")?,
            subject: data.require_str("subject")?,
            message: data.require_str("message")?,
        })
    }
}

#[derive(Template)]
#[template(
    source = r#"
<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Quotation request - {{ subject }}</title>
    <style>
        body { font-family: Arial, sans-serif; line-height: 1.6; color: #333; margin: 0; padding: 20px; background-color: #f4f4f4; }
        .container { max-width: 600px; margin: 0 auto; background: white; padding: 30px; border-radius: 8px; box-shadow: 0 2px 10px rgba(0,0,0,0.1); }
        .details td { padding: 4px 12px 4px 0; vertical-align: top; }
        .label { font-weight: bold; color: #555; }
        .message { background: #f8f9fa; padding: 15px; border-radius: 4px; white-space: pre-wrap; }
        .footer { margin-top: 30px; padding-top: 20px; border-top: 1px solid #eee; font-size: 12px; color: #666; }
    </style>
</head>
<body>
    <div class="container">
        <h2>New Quotation request</h2>

        <table class="details">
            <tr><td class="label">Name</td><td>{{ full_name }}</td></tr>
            <tr><td class="label">Email</td><td><a href="mailto:{{ email }}">{{ email }}</a></td></tr>
            <tr><td class="label">Phone</td><td>{{ phone }}</td></tr>
            <tr><td class="label">City or town</td><td>{{ city }}</td></tr>
            <tr><td class="label">Physical address</td><td>{{ address }}</td></tr>
            <tr><td class="label">Subject</td><td>{{ subject }}</td></tr>
        </table>

        <h3>Details</h3>
        <div class="message">{{ message }}</div>

        <div class="footer">
            <p>Reply to this email to send {{ full_name }} a quotation.</p>
        </div>
    </div>
</body>
</html>
"#,
    ext = "html"
)]
pub struct QuotationTemplate {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
    pub city: String,
    pub address: String,
}

impl QuotationTemplate {
    pub fn from_data(data: &TemplateData) -> Result<Self, MailerError> {
        Ok(Self {
            full_name: data.require_str("fullName")?,
            email: data.require_str("email")?,
            phone: data.require_str("phone")?,
            subject: data.require_str("subject")?,
            message: data.require_str("message")?,
            city: data.require_str("city")?,
            address: data.require_str("address")?,
        })
    }
}
