//! Master Duel Meta card API client
//!
//! Uses blocking reqwest; each page request waits for its response before
//! the next one is issued.

use super::PageSource;
use crate::error::{Result, ScraperError};
use crate::models::ApiCard;

const USER_AGENT: &str = "card_scraper/0.1";

/// Blocking client for `GET <endpoint>?page=<N>&limit=<L>`
pub struct MasterDuelMetaClient {
    client: reqwest::blocking::Client,
    endpoint: String,
}

impl MasterDuelMetaClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

impl PageSource for MasterDuelMetaClient {
    fn fetch_page(&mut self, page: u32, limit: u32) -> Result<Vec<ApiCard>> {
        log::debug!("GET {}?page={}&limit={}", self.endpoint, page, limit);

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("page", page), ("limit", limit)])
            .header("User-Agent", USER_AGENT)
            .send()?;

        if !response.status().is_success() {
            return Err(ScraperError::HttpStatus(response.status()));
        }

        // Decode separately so a malformed body surfaces as a parse error
        let body = response.text()?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
#[path = "masterduelmeta_tests.rs"]
mod tests;
