pub mod smtp;

pub use smtp::{SmtpTransport, TlsConfig};
