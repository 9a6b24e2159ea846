//! Climat-Harvest main entry point
//!
//! Command-line interface for the two-pass pipeline: an interactive
//! confirmation runs the crawl pass, a second one runs the CSV export.
//! Either, both, or neither may run per invocation.

use anyhow::Result;
use clap::Parser;
use climat_harvest::config::load_config_or_default;
use climat_harvest::crawler::crawl;
use climat_harvest::export::export;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Climat-Harvest: catalog scraper for climat-opt.com.ua
#[derive(Parser, Debug)]
#[command(name = "climat-harvest")]
#[command(version)]
#[command(about = "Scrape the climat-opt.com.ua catalog and export it as CSV", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (defaults apply when omitted)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = load_config_or_default(cli.config.as_deref())?;
    tracing::info!(
        "Site: {}, batch size: {}, store: {}",
        config.site.origin,
        config.crawler.batch_size,
        config.output.dump_path
    );

    if confirm("Run crawl? [y/n] ")? {
        crawl(config.clone()).await?;
        println!("Crawl finished, records stored in {}", config.output.dump_path);
    }

    if confirm("Run export? [y/n] ")? {
        let stats = export(
            Path::new(&config.output.dump_path),
            Path::new(&config.output.csv_path),
        )?;
        println!(
            "Exported {} rows to {}",
            stats.rows_written, config.output.csv_path
        );
    }

    Ok(())
}

/// Asks a yes/no question on stdin; anything but `y` counts as no
fn confirm(prompt: &str) -> io::Result<bool> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(answer.trim().eq_ignore_ascii_case("y"))
}

/// Sets up the tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("climat_harvest=info,warn"),
            1 => EnvFilter::new("climat_harvest=debug,info"),
            2 => EnvFilter::new("climat_harvest=trace,debug"),
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
