//! Card Scraper - Master Duel card list export
//!
//! Pages through the Master Duel Meta card API, keeps the cards that have a
//! rarity (i.e. are available in Master Duel) and writes them to cards.json.

pub mod api;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod models;
pub mod output;

pub use api::{MasterDuelMetaClient, PageSource};
pub use config::{OutputPaths, ScraperConfig};
pub use error::{Result, ScraperError};
pub use fetcher::{CrawlSummary, PaginatedFetcher};
pub use models::{ApiCard, Card};
