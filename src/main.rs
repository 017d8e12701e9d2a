use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fleetlens::analytics;
use fleetlens::config::Config;
use fleetlens::export;
use fleetlens::models::Snapshot;
use fleetlens::search;

#[derive(Parser)]
#[command(
    name = "fleetlens",
    version,
    about = "Operational analytics over fleet and workforce record snapshots",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Snapshot JSON file (defaults to the configured path)
    #[arg(short, long, global = true)]
    input: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log format (text, json)
    #[arg(long, global = true, default_value = "text")]
    log_format: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Employee growth series with average and next-month forecast
    Growth,

    /// Trucker distribution by province and company affiliation
    Distribution,

    /// Churn and compliance rates for the business-impact dashboard
    Impact,

    /// Raw population and document verification counts
    Compliance,

    /// Live search across active employees and truckers
    Search {
        /// Search query
        query: String,

        /// Maximum hits per entity kind
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Export a record set as CSV
    Export {
        /// Entity kind to export (employees, truckers)
        #[arg(short, long, default_value = "employees")]
        entity: String,

        /// Output file path (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::from_env().context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;

    setup_tracing(&cli.log_format, cli.verbose)?;

    let snapshot_path = cli
        .input
        .clone()
        .unwrap_or_else(|| config.data.snapshot_path.clone());

    tracing::info!(snapshot = %snapshot_path.display(), "fleetlens starting");

    let snapshot = Snapshot::load(&snapshot_path)?;
    tracing::info!(records = snapshot.record_count(), "snapshot loaded");

    match cli.command {
        Commands::Growth => {
            let report = analytics::employee_growth(&snapshot.employees);
            print_json(&report)?;
        }

        Commands::Distribution => {
            let report = analytics::trucker_distribution(&snapshot.truckers);
            print_json(&report)?;
        }

        Commands::Impact => {
            let report = analytics::business_impact(
                &snapshot.employees,
                &snapshot.truckers,
                &snapshot.documents,
            )?;
            print_json(&report)?;
        }

        Commands::Compliance => {
            let summary = analytics::compliance_summary(
                &snapshot.employees,
                &snapshot.truckers,
                &snapshot.documents,
            );
            print_json(&summary)?;
        }

        Commands::Search { query, limit } => {
            let limit = limit.unwrap_or(config.search.limit);
            tracing::info!(query = %query, limit = %limit, "running live search");
            let results = search::live_search(
                &query,
                &snapshot.employees,
                &snapshot.truckers,
                limit,
            );
            print_json(&results)?;
        }

        Commands::Export { entity, output } => {
            export_records(&snapshot, &entity, output.as_deref())?;
        }
    }

    Ok(())
}

fn setup_tracing(format: &str, verbose: bool) -> Result<()> {
    let env_filter = if verbose {
        tracing_subscriber::EnvFilter::new("fleetlens=debug,info")
    } else {
        tracing_subscriber::EnvFilter::new("fleetlens=info,warn")
    };

    match format {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
    }

    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize response")?;
    println!("{json}");
    Ok(())
}

fn export_records(
    snapshot: &Snapshot,
    entity: &str,
    output: Option<&std::path::Path>,
) -> Result<()> {
    let mut buffer = Vec::new();

    match entity {
        "employees" => export::write_employees_csv(&mut buffer, &snapshot.employees)?,
        "truckers" => export::write_truckers_csv(&mut buffer, &snapshot.truckers)?,
        other => anyhow::bail!("unknown export entity: {other} (expected employees or truckers)"),
    }

    match output {
        Some(path) => {
            std::fs::write(path, &buffer)
                .with_context(|| format!("Failed to write export file: {}", path.display()))?;
            tracing::info!(path = %path.display(), "export written");
        }
        None => {
            let csv = String::from_utf8(buffer).context("Export produced invalid UTF-8")?;
            print!("{csv}");
        }
    }

    Ok(())
}
