use std::path::PathBuf;
use std::process::ExitCode;

use chrono::NaiveDate;
use clap::Parser;
use tracing::{error, info};

mod config;
mod error;
mod mailer;
mod pipeline;
mod search;

/// Queries OpenSearch for teuthology test runs on a given date and branch,
/// renders an HTML summary and emails it.
#[derive(Parser, Debug)]
#[command(name = "teuthology-report", version)]
struct Cli {
    /// Path to the configuration file
    #[arg(long = "config")]
    config: PathBuf,

    /// Branch name (e.g. quincy, reef, main)
    #[arg(long = "branch")]
    branch: String,

    /// Report date (YYYY-MM-DD)
    #[arg(long = "date")]
    date: NaiveDate,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "teuthology_report=info".into()),
        )
        .init();

    let args = Cli::parse();
    info!(
        config = %args.config.display(),
        branch = %args.branch,
        date = %args.date,
        "Starting teuthology-report v{}",
        env!("CARGO_PKG_VERSION")
    );

    match pipeline::run(&args.config, &args.branch, &args.date.to_string()).await {
        Ok(recipient) => {
            println!("Report sent to {recipient}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %err, "report run failed");
            eprintln!("Error: {err}");
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
