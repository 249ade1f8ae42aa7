//! Card Scraper - Master Duel card list export
//!
//! Fetches every card page from Master Duel Meta and writes the cards that
//! are in Master Duel to cards.json and to the app's bundled data file.

use card_scraper::{MasterDuelMetaClient, OutputPaths, PaginatedFetcher, Result, ScraperConfig};
use clap::Parser;

/// Master Duel card scraper - exports the Master Duel card list to JSON
#[derive(Parser, Debug)]
#[command(name = "card_scraper")]
#[command(version, about, long_about = None)]
struct Args {}

fn run() -> Result<()> {
    let config = ScraperConfig::new(OutputPaths::resolve_default());
    log::info!("Fetching cards from {}", config.endpoint);
    for path in config.outputs.iter() {
        log::info!("Output: {}", path.display());
    }

    let client = MasterDuelMetaClient::new(config.endpoint.clone());
    let mut fetcher = PaginatedFetcher::new(client, config);
    let summary = fetcher.run()?;

    log::info!(
        "Crawl finished: {} pages, {} cards written, {} skipped",
        summary.pages_fetched,
        summary.cards_written,
        summary.records_skipped
    );
    Ok(())
}

fn main() {
    // Set RUST_LOG to control log level, e.g. RUST_LOG=card_scraper=debug
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let _ = Args::parse();
    log::info!("Starting card_scraper...");

    if let Err(e) = run() {
        log::error!("Scrape failed: {e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
