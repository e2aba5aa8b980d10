//! HTTP server for the take-home pay engine.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use take_home_engine::api::{AppState, create_router};
use take_home_engine::config::ConfigLoader;
use take_home_engine::error::EngineError;
use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "take-home-server",
    about = "Serve TFN and ABN take-home pay comparisons over HTTP",
    version
)]
struct Cli {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:3000")]
    bind: SocketAddr,
    /// Directory of reference YAML files (defaults to the built-in 2024-25 tables)
    #[arg(long)]
    config_dir: Option<PathBuf>,
    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[derive(Debug, Error)]
enum ServerError {
    #[error("invalid log level/filter '{value}': {message}")]
    LogFilter { value: String, message: String },
    #[error("telemetry error: {0}")]
    Subscriber(String),
    #[error(transparent)]
    Config(#[from] EngineError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn init_tracing(log_level: &str) -> Result<(), ServerError> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(log_level).map_err(|err| ServerError::LogFilter {
            value: log_level.to_string(),
            message: err.to_string(),
        })?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|err| ServerError::Subscriber(err.to_string()))
}

async fn run(cli: Cli) -> Result<(), ServerError> {
    init_tracing(&cli.log_level)?;

    let config = match &cli.config_dir {
        Some(dir) => ConfigLoader::load(dir)?,
        None => ConfigLoader::builtin()?,
    };
    info!(
        financial_year = %config.metadata().financial_year,
        trades = config.trade_presets().len(),
        scenarios = config.preset_scenarios().len(),
        "Reference tables loaded"
    );

    let app = create_router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(cli.bind).await?;
    info!(addr = %cli.bind, "take-home server ready");

    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run(Cli::parse()).await {
        eprintln!("take-home-server error: {err}");
        std::process::exit(1);
    }
}
