pub mod mailer;

pub use mailer::{FormMailer, FormMailerService};
