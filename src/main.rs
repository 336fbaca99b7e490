//! Sumi-Sweep main entry point
//!
//! This is the command-line interface for the Sumi-Sweep site crawler.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use sumi_sweep::config::{resolve_config, Config, ConfigOverrides};
use sumi_sweep::crawler::crawl_and_export;
use sumi_sweep::output::print_statistics;
use tracing_subscriber::EnvFilter;

/// Sumi-Sweep: a depth-bounded, same-origin site crawler
///
/// Sumi-Sweep follows links from a seed URL up to a maximum depth, staying on
/// the seed's origin and honouring robots.txt, then writes every discovered
/// URL to a CSV file.
#[derive(Parser, Debug)]
#[command(name = "sumi-sweep")]
#[command(version)]
#[command(about = "A depth-bounded, same-origin site crawler", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Seed URL to start crawling from
    #[arg(short, long, value_name = "URL")]
    seed: Option<String>,

    /// Maximum link depth from the seed (0 = seed only)
    #[arg(short = 'd', long, value_name = "N")]
    max_depth: Option<u32>,

    /// CSV file to write
    #[arg(short, long, value_name = "PATH")]
    output: Option<String>,

    /// Write only the URL column
    #[arg(long)]
    no_depth: bool,

    /// Per-request timeout in seconds
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be crawled without actually crawling
    #[arg(long)]
    dry_run: bool,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            seed_url: self.seed.clone(),
            max_depth: self.max_depth,
            csv_path: self.output.clone(),
            request_timeout: self.timeout,
            no_depth: self.no_depth,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load and validate configuration before any network activity
    if let Some(path) = &cli.config {
        tracing::info!("Loading configuration from: {}", path.display());
    }
    let config = match resolve_config(cli.config.as_deref(), &cli.overrides()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            return Err(e.into());
        }
    };

    if cli.dry_run {
        handle_dry_run(&config);
    } else {
        handle_crawl(&config, cli.quiet).await?;
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("sumi_sweep=info,warn"),
            1 => EnvFilter::new("sumi_sweep=debug,info"),
            2 => EnvFilter::new("sumi_sweep=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: shows the resolved configuration
fn handle_dry_run(config: &Config) {
    println!("=== Sumi-Sweep Dry Run ===\n");

    println!("Crawler Configuration:");
    println!("  Seed URL: {}", config.crawler.seed_url);
    println!("  Max depth: {}", config.crawler.max_depth);
    println!("  Request timeout: {}s", config.crawler.request_timeout);

    println!("\nUser Agent:");
    println!("  {}", config.user_agent.header_value());

    println!("\nOutput:");
    println!("  CSV: {}", config.output.csv_path);
    println!("  Columns: {}", config.output.export_shape().header().join(","));

    println!("\n✓ Configuration is valid");
}

/// Handles the main crawl operation
async fn handle_crawl(config: &Config, quiet: bool) -> anyhow::Result<()> {
    let report = crawl_and_export(config)
        .await
        .with_context(|| format!("sweep from {} failed", config.crawler.seed_url))?;

    if !quiet {
        print_statistics(&report.stats);
    }

    Ok(())
}
