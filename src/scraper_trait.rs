use crate::filters::LandSearchFilters;
use crate::models::LandProperty;
use async_trait::async_trait;

/// Trait that all land listing sources implement
#[async_trait]
pub trait Scraper: Send + Sync {
    /// Returns the name of the scraper/website
    fn name(&self) -> &str;

    /// Fetch and parse one page of search results.
    ///
    /// Implementations are fail-soft: errors are logged and yield fewer (or
    /// zero) records rather than an `Err`.
    async fn search(&self, filters: &LandSearchFilters, page: u32) -> Vec<LandProperty>;
}
