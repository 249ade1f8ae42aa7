//! Page sources for the card crawl

mod masterduelmeta;

pub use masterduelmeta::MasterDuelMetaClient;

use crate::error::Result;
use crate::models::ApiCard;

/// Something that can hand out numbered pages of cards.
///
/// Pages are 1-indexed. An empty page means there is nothing more to fetch.
pub trait PageSource {
    fn fetch_page(&mut self, page: u32, limit: u32) -> Result<Vec<ApiCard>>;
}
