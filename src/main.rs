//! screenline - stock screener reports from the command line.

use anyhow::Context;
use clap::Parser;
use screenline::{App, Config, ScreenCriterion};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Screen instruments by a named criterion and print a fixed-width report.
#[derive(Debug, Parser)]
#[command(name = "screenline", version, about)]
struct Cli {
    /// Criterion tag to screen by (see --list)
    #[arg(required_unless_present = "list")]
    criterion: Option<String>,

    /// Pagination start point
    #[arg(long, default_value_t = 0)]
    offset: u32,

    /// Number of results, clamped to 1..=20
    #[arg(long, default_value_t = 5)]
    size: u32,

    /// Append a recent-price trend sparkline column
    #[arg(long)]
    trend: bool,

    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// List the supported criteria and exit
    #[arg(long)]
    list: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "screenline=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    if cli.list {
        for criterion in ScreenCriterion::ALL {
            println!("{criterion}");
        }
        return Ok(());
    }

    let config = Config::load(cli.config).context("failed to load configuration")?;
    let app = App::new(config)?;

    let criterion = cli.criterion.context("a criterion tag is required")?;
    let report = app
        .invoke(&criterion, cli.offset, cli.size, cli.trend)
        .await?;
    println!("{report}");

    Ok(())
}
