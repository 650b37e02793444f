use clap::Parser;
use formrelay::{Settings, build_app, serve};
use tracing_subscriber::EnvFilter;

/// Relay contact-us and quotation form submissions to the administrator mailbox
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Address to bind the HTTP server to
    #[arg(long, env = "APP_HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on
    #[arg(long, env = "APP_PORT", default_value_t = 5000)]
    port: u16,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!(error = %e, "formrelay failed to start");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), formrelay::StartupError> {
    let settings = Settings::from_env()?;
    tracing::info!(
        admin_email = %settings.admin_email,
        email_host = %settings.email_host,
        email_port = settings.email_port,
        email_use_tls = settings.email_use_tls,
        "Loaded settings"
    );

    let app = build_app(&settings)?;
    let listener = tokio::net::TcpListener::bind((cli.host.as_str(), cli.port)).await?;

    serve(listener, app).await
}
