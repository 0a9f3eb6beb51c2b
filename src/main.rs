use std::path::PathBuf;

use clap::Parser;
use planwright_core::Config;

mod session;

#[derive(Parser, Debug)]
#[command(name = "planwright", version, about = "Generate lesson plans from a PDF template")]
struct Args {
    /// Path to the PDF lesson-plan template. Prompted for when omitted.
    template: Option<PathBuf>,

    /// Configuration file (default: planwright.toml, or $PLANWRIGHT_CONFIG)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn resolve_config_path(args: &Args) -> PathBuf {
    args.config
        .clone()
        .or_else(|| std::env::var_os("PLANWRIGHT_CONFIG").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("planwright.toml"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config_path = resolve_config_path(&args);
    let config = Config::load(&config_path)?;
    tracing::debug!(config = %config_path.display(), "configuration loaded");

    session::run(&config, args.template).await
}
