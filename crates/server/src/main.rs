use std::path::PathBuf;

use clap::Parser;
use mystro_server::config::{ConfigOverrides, ServerConfig};
use tracing_subscriber::{EnvFilter, prelude::*};

/// MystroGPT HTTP server
#[derive(Parser)]
#[command(name = "mystro-server")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    /// Optional TOML config file
    #[arg(short, long, env = "MYSTRO_CONFIG")]
    config: Option<PathBuf>,

    #[command(flatten)]
    overrides: ConfigOverrides,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    let filter_string = format!(
        "warn,mystro_server={level},mystro={level}",
        level = log_level
    );
    let env_filter = EnvFilter::try_new(filter_string)?;
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_filter(env_filter))
        .init();

    let mut config = ServerConfig::load(cli.config.as_deref())?;
    cli.overrides.apply(&mut config);

    tracing::info!(
        "Starting with outputs in {} ({:?} generator)",
        config.outputs_dir.display(),
        config.generator
    );

    mystro_server::serve(config).await
}
