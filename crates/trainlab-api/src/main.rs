use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use trainlab_api::{ApiConfig, ApiServer};

#[derive(Parser)]
#[command(name = "trainlab-api")]
#[command(about = "Serve the TrainLab training data API", version)]
struct Cli {
    /// Configuration file
    #[arg(short, long, default_value = "trainlab.toml")]
    config: PathBuf,

    /// Override the configured port
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = ApiConfig::load(Some(&cli.config))?;
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if config.uses_dev_secret() {
        tracing::warn!("auth.jwt_secret is not set, using the development secret");
    }

    ApiServer::new(config).serve().await?;
    Ok(())
}
