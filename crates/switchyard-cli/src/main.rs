use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use switchyard_core::config::{DispatchMode, SwitchyardConfig};
use switchyard_core::observability::DispatchSummary;
use switchyard_core::{AppBuilder, Intent, UserIntent};

/// Dispatch intents to whichever strategies are linked into this binary.
#[derive(Parser, Debug)]
#[command(name = "switchyard", version, about, long_about = None)]
struct Cli {
    /// TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Intent to dispatch (name or number); repeat for a batch
    #[arg(long = "intent", value_name = "INTENT")]
    intents: Vec<Intent>,

    /// Dispatch the whole batch at once
    #[arg(long)]
    concurrent: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Print outcome counts as JSON after the batch
    #[arg(long)]
    summary_json: bool,
}

const DEFAULT_BATCH: [Intent; 4] = [
    Intent::Delay,
    Intent::Available,
    Intent::Average,
    Intent::Other,
];

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let mut config = match &cli.config {
        Some(path) => SwitchyardConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => SwitchyardConfig::default(),
    };
    if cli.concurrent {
        config.dispatch.mode = DispatchMode::Concurrent;
    }

    let app = AppBuilder::from_config(&config)
        .discover()
        .build()
        .context("composing strategies")?;

    let intents: Vec<UserIntent> = if cli.intents.is_empty() {
        DEFAULT_BATCH.into_iter().map(UserIntent::new).collect()
    } else {
        cli.intents.iter().copied().map(UserIntent::new).collect()
    };

    let dispatcher = app.dispatcher();
    let reports = match config.dispatch.mode {
        DispatchMode::Sequential => dispatcher.dispatch_all(&intents).await,
        DispatchMode::Concurrent => dispatcher.dispatch_concurrent(&intents).await,
    };

    for report in &reports {
        if let Err(err) = &report.result {
            println!("{err}");
        }
    }

    let summary = DispatchSummary::from_reports(&reports);
    tracing::info!(?summary, "batch finished");
    if cli.summary_json {
        println!("{}", serde_json::to_string(&summary)?);
    }

    Ok(())
}
