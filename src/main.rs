// src/main.rs

//! navercrawl CLI
//!
//! Crawls Naver mobile news search results for a keyword and writes one
//! JSON record per article (JSONL) for downstream dataset loading.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use navercrawl::{error::Result, models::Config, pipeline};

#[derive(Parser, Debug)]
#[command(name = "navercrawl", version, about = "Keyword-driven Naver news crawler")]
struct Cli {
    /// Search keyword; only articles whose title contains it are kept
    keyword: String,

    /// Directory for dated output files
    #[arg(short, long, default_value = "./news_data")]
    base_dir: PathBuf,

    /// Number of search-result pages to crawl (10 results per page)
    #[arg(short, long, default_value_t = 6)]
    pages: u32,

    /// Exact output path, overriding the dated file under --base-dir
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Path to a TOML config overriding built-in defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => Config::load_or_default(path),
        None => Config::default(),
    };
    config.validate()?;

    let today = chrono::Local::now().format("%Y-%m-%d").to_string();
    let output_path = cli
        .output
        .unwrap_or_else(|| cli.base_dir.join(format!("news_articles_{today}.jsonl")));

    log::info!("Crawling '{}' over {} pages", cli.keyword, cli.pages);

    let outcome =
        pipeline::run_crawl(Arc::new(config), &cli.keyword, cli.pages, &output_path).await?;

    println!(
        "[{today}] '{}': {} articles saved to {}",
        cli.keyword,
        outcome.written,
        output_path.display()
    );

    Ok(())
}
