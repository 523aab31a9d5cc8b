//! ghopac: keep a local mirror of GitHub organizations up to date
//! Clones missing repositories, pulls existing ones and exits non-zero if anything failed.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ghopac::commands::{
    handle_sync_command, load_user_config, missing_config_message, ConfigLoad, SyncOptions,
};
use ghopac::config::sample_config_json;

const DEFAULT_LOG_FILTER: &str = "ghopac=info";

#[derive(Parser)]
#[command(name = "ghopac")]
#[command(about = "Clone or pull every repository of your GitHub organizations")]
#[command(version)]
struct Cli {
    /// Read configuration from this file instead of the XDG search path
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Number of concurrent git operations (default: config value, then CPU count)
    #[arg(short, long, value_name = "N")]
    jobs: Option<usize>,

    /// Log every successful clone and pull
    #[arg(short, long)]
    verbose: bool,

    /// Print a sample configuration document and exit
    #[arg(long)]
    sample_config: bool,
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.sample_config {
        println!("{}", sample_config_json()?);
        return Ok(());
    }

    init_logging();

    let config = match load_user_config(cli.config.as_deref())? {
        ConfigLoad::Loaded(config) => config,
        ConfigLoad::Missing(location) => {
            eprint!("{}", missing_config_message(&location)?);
            std::process::exit(1);
        }
    };

    let options = SyncOptions {
        jobs: cli.jobs,
        verbose: cli.verbose,
    };
    let report = handle_sync_command(&config, &options).await?;

    std::process::exit(report.exit_code());
}
