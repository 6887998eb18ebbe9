use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

use pharmacy_compliance::api::{AppState, create_router};
use pharmacy_compliance::config::ConfigLoader;
use pharmacy_compliance::error::EngineError;
use pharmacy_compliance::rules::{evaluate_all, render_summary};
use pharmacy_compliance::store::PharmacyStore;

#[derive(Parser, Debug)]
#[command(
    name = "pharmacy-compliance",
    about = "HR compliance checks and staffing workflows for a retail pharmacy",
    version
)]
struct Cli {
    /// Log filter used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "info")]
    log_level: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service
    Serve(ServeArgs),
    /// Print the compliance report of the current state
    Report(ReportArgs),
}

#[derive(Args, Debug)]
struct ServeArgs {
    /// Directory holding the pharmacy's YAML seed files
    #[arg(long, default_value = "./config/pharmacie-des-lilas")]
    config: PathBuf,
    /// JSON store file, created on first write
    #[arg(long)]
    store: Option<PathBuf>,
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:3000")]
    addr: SocketAddr,
}

#[derive(Args, Debug)]
struct ReportArgs {
    /// Directory holding the pharmacy's YAML seed files
    #[arg(long, default_value = "./config/pharmacie-des-lilas")]
    config: PathBuf,
    /// JSON store file to evaluate instead of the seed state
    #[arg(long)]
    store: Option<PathBuf>,
    /// Print the full report as JSON instead of the text summary
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error("invalid log level/filter '{value}': {message}")]
    LogFilter { value: String, message: String },
    #[error("telemetry error: {0}")]
    Telemetry(String),
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

fn init_tracing(log_level: &str) -> Result<(), AppError> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(log_level).map_err(|e| AppError::LogFilter {
            value: log_level.to_string(),
            message: e.to_string(),
        })?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|e| AppError::Telemetry(e.to_string()))
}

fn load_state(
    config_dir: &Path,
    store_path: Option<&Path>,
) -> Result<(ConfigLoader, PharmacyStore), AppError> {
    let config = ConfigLoader::load(config_dir)?;
    let store = match store_path {
        Some(path) => PharmacyStore::load(path, config.config())?,
        None => PharmacyStore::from_seed(config.config()),
    };
    Ok((config, store))
}

async fn serve(args: ServeArgs) -> Result<(), AppError> {
    let (config, store) = load_state(&args.config, args.store.as_deref())?;
    info!(
        pharmacy = %config.pharmacy().name,
        employees = config.roster().len(),
        "Configuration loaded"
    );

    let mut state = AppState::new(config, store);
    if let Some(path) = args.store {
        state = state.with_store_path(path);
    }

    let listener = tokio::net::TcpListener::bind(args.addr).await?;
    info!(addr = %args.addr, "Listening");
    axum::serve(listener, create_router(state)).await?;
    Ok(())
}

fn report(args: ReportArgs) -> Result<(), AppError> {
    let (config, store) = load_state(&args.config, args.store.as_deref())?;
    let report = evaluate_all(&store.snapshot(&config));

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", render_summary(&report));
    }
    Ok(())
}

async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level)?;

    match cli.command {
        Command::Serve(args) => serve(args).await,
        Command::Report(args) => report(args),
    }
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}
