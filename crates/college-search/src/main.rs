//! College Search - Entry Point

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use college_search::{
    CollegeScorecardClient,
    config::Config,
    report::{ReportMailer, SmtpMailer, UnconfiguredMailer},
    server::CollegeServer,
};

#[derive(Parser, Debug)]
#[command(name = "college-search")]
#[command(about = "College Scorecard search service")]
#[command(version)]
struct Cli {
    /// College Scorecard API key
    #[arg(long, env = "COLLEGE_SCORECARD_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// HTTP server port
    #[arg(long, default_value = "8000", env = "PORT")]
    port: u16,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        subscriber.with(tracing_subscriber::fmt::layer().compact()).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting college search server");

    let config = Config::from_env()?.with_api_key_override(cli.api_key);
    if !config.has_api_key() {
        tracing::warn!("COLLEGE_SCORECARD_API_KEY not set, upstream requests will be rejected");
    }

    if !config.mail.has_credentials() {
        tracing::warn!("SMTP credentials not set, inaccuracy reports will likely fail");
    }

    let client = CollegeScorecardClient::new(&config)?;
    let mailer: Arc<dyn ReportMailer> = match SmtpMailer::new(&config.mail) {
        Ok(mailer) => Arc::new(mailer),
        Err(e) => {
            tracing::warn!(error = %e, "Mail settings invalid, reports are disabled");
            Arc::new(UnconfiguredMailer::new(e.to_string()))
        }
    };
    let server = CollegeServer::new(client, mailer);

    tracing::info!(port = cli.port, "Running in HTTP mode");
    server.run(cli.port).await
}
