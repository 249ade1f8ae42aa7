//! The crawl: page through the card API until an empty page, then write the
//! accumulated cards to both output destinations.

use crate::api::PageSource;
use crate::config::ScraperConfig;
use crate::error::Result;
use crate::models::Card;
use crate::output;

/// Counts reported after a completed crawl
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CrawlSummary {
    /// Pages requested, including the terminal empty page
    pub pages_fetched: u32,
    pub cards_written: usize,
    pub records_skipped: usize,
}

/// Drains a paginated card source into cards.json
pub struct PaginatedFetcher<S> {
    source: S,
    config: ScraperConfig,
}

impl<S: PageSource> PaginatedFetcher<S> {
    pub fn new(source: S, config: ScraperConfig) -> Self {
        Self { source, config }
    }

    /// Fetch every page, keeping cards that have a rarity, until the source
    /// returns an empty page. Nothing is written unless the crawl completes.
    pub fn crawl(&mut self) -> Result<(Vec<Card>, CrawlSummary)> {
        let mut page = 1;
        let mut cards = Vec::new();
        let mut summary = CrawlSummary::default();

        loop {
            let records = self.source.fetch_page(page, self.config.page_size)?;
            summary.pages_fetched += 1;

            if records.is_empty() {
                log::info!("Page {} is empty, crawl complete", page);
                break;
            }

            let received = records.len();
            let before = cards.len();
            for record in records {
                // Cards without a rarity are not released in Master Duel yet
                if !record.has_rarity() {
                    log::debug!("Skipping card without rarity: {:?}", record.name);
                    summary.records_skipped += 1;
                    continue;
                }
                match record.into_card() {
                    Some(card) => cards.push(card),
                    None => {
                        log::debug!("Skipping incomplete card record");
                        summary.records_skipped += 1;
                    }
                }
            }
            log::info!(
                "Page {}: kept {} of {} cards",
                page,
                cards.len() - before,
                received
            );

            page += 1;
        }

        summary.cards_written = cards.len();
        Ok((cards, summary))
    }

    /// Crawl, then write the result to both destinations
    pub fn run(&mut self) -> Result<CrawlSummary> {
        let (cards, summary) = self.crawl()?;

        let bytes = output::render_cards(&cards)?;
        for path in self.config.outputs.iter() {
            output::write_rendered(path, &bytes)?;
        }

        println!("{} Cards", cards.len());
        Ok(summary)
    }
}

#[cfg(test)]
#[path = "fetcher_tests.rs"]
mod tests;
