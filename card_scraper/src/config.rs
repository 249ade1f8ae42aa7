//! Scraper configuration: API endpoint, page size and output destinations

use std::path::{Path, PathBuf};

/// Master Duel Meta card listing endpoint
pub const DEFAULT_ENDPOINT: &str = "https://www.masterduelmeta.com/api/v1/cards";

/// Cards requested per page
pub const DEFAULT_PAGE_SIZE: u32 = 3000;

/// Output file written to the working directory
pub const LOCAL_OUTPUT: &str = "cards.json";

/// How far above this crate's directory the application tree root lies
const APP_ROOT_DEPTH: usize = 6;

/// Where the scraped card list is written. Both files receive identical content.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputPaths {
    pub local: PathBuf,
    pub app_data: PathBuf,
}

impl OutputPaths {
    pub fn new(local: impl Into<PathBuf>, app_data: impl Into<PathBuf>) -> Self {
        Self {
            local: local.into(),
            app_data: app_data.into(),
        }
    }

    /// Default destinations: `cards.json` in the working directory and the
    /// application's bundled data file, located relative to this crate.
    pub fn resolve_default() -> Self {
        Self::new(
            LOCAL_OUTPUT,
            app_data_path(Path::new(env!("CARGO_MANIFEST_DIR"))),
        )
    }

    /// Both destinations, in write order
    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        [self.local.as_path(), self.app_data.as_path()].into_iter()
    }
}

/// Six directory levels up from `base`, then `src/data/cards.json`.
///
/// Climbing stops at the filesystem root, the same as `..` does.
pub fn app_data_path(base: &Path) -> PathBuf {
    let root = base
        .ancestors()
        .take(APP_ROOT_DEPTH + 1)
        .last()
        .unwrap_or(base);
    root.join("src").join("data").join(LOCAL_OUTPUT)
}

/// Everything a crawl needs, supplied at construction
#[derive(Debug, Clone, PartialEq)]
pub struct ScraperConfig {
    pub endpoint: String,
    pub page_size: u32,
    pub outputs: OutputPaths,
}

impl ScraperConfig {
    pub fn new(outputs: OutputPaths) -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            outputs,
        }
    }
}
