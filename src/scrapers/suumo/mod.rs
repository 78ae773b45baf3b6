//! Land search against Suumo's listing pages.

pub mod assembler;
pub mod locator;
pub mod query;
pub mod regions;

use crate::config::Config;
use crate::filters::LandSearchFilters;
use crate::http_client::{HttpTransport, Transport};
use crate::models::LandProperty;
use crate::scraper_trait::Scraper;
use anyhow::Result;
use assembler::AssemblyContext;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use regions::Region;
use scraper::Html;

pub struct SuumoLandScraper<T = HttpTransport> {
    transport: T,
    base_url: String,
}

impl SuumoLandScraper<HttpTransport> {
    /// Scraper using reqwest and the site or relay named in the config
    pub fn from_config(config: &Config) -> Result<Self> {
        let transport = HttpTransport::new(&config.user_agent, config.timeout_secs)?;
        Ok(Self::new(transport, &config.base_url))
    }
}

impl<T: Transport> SuumoLandScraper<T> {
    /// `base_url` is either the site origin or a relay that forwards to it
    pub fn new(transport: T, base_url: &str) -> Self {
        Self {
            transport,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn search_url(&self, filters: &LandSearchFilters, page: u32) -> String {
        query::search_url(&self.base_url, filters, page)
    }

    /// Fetch one page of results and parse every listing on it.
    ///
    /// Never fails: transport errors and unrecognizable pages are logged and
    /// produce an empty list, and listings that can't be assembled are
    /// skipped. An empty result is therefore ambiguous between "no matches"
    /// and "something went wrong".
    pub async fn search(&self, filters: &LandSearchFilters, page: u32) -> Vec<LandProperty> {
        if let Some(name) = filters.prefecture.as_deref() {
            if regions::lookup(name).is_none() {
                tracing::warn!(
                    "No region code configured for '{}', using {}",
                    name,
                    regions::DEFAULT_REGION.name
                );
            }
        }

        let url = self.search_url(filters, page);
        tracing::debug!("Scraping {}", url);

        let html = match self.transport.fetch(&url).await {
            Ok(html) => html,
            Err(e) => {
                tracing::error!("Failed to fetch listings page {}: {}", page, e);
                return Vec::new();
            }
        };
        tracing::debug!("Fetched HTML content for page {}: {} bytes", page, html.len());

        let region = regions::resolve(filters.prefecture.as_deref());
        parse_listings(&html, region, Utc::now())
    }
}

/// Parse a search-results page into records, skipping listings that fail
pub fn parse_listings(html: &str, region: &Region, scraped_at: DateTime<Utc>) -> Vec<LandProperty> {
    let document = Html::parse_document(html);

    let nodes = match locator::locate(&document) {
        Ok(nodes) => nodes,
        Err(e) => {
            tracing::error!("Failed to locate listings: {}", e);
            return Vec::new();
        }
    };

    if nodes.is_empty() {
        tracing::warn!("No listing elements found. Page structure may have changed.");
        tracing::debug!(
            "HTML preview (first 500 chars): {}",
            html.chars().take(500).collect::<String>()
        );
        return Vec::new();
    }

    let ctx = AssemblyContext { region, scraped_at };
    let mut properties = Vec::with_capacity(nodes.len());
    let mut skipped = 0;

    for (index, element) in nodes.iter().enumerate() {
        tracing::trace!("Processing listing #{}", index + 1);

        match assembler::assemble(element, index, &ctx) {
            Ok(property) => {
                tracing::trace!(
                    "Found listing: {} - {} (price: {}, area: {}m2)",
                    property.id, property.title, property.price, property.land_area_m2
                );
                properties.push(property);
            }
            Err(e) => {
                tracing::warn!("Skipping listing #{}: {}", index + 1, e);
                skipped += 1;
            }
        }
    }

    tracing::info!(
        "Parsed {} listings from Suumo ({} skipped)",
        properties.len(),
        skipped
    );

    properties
}

#[async_trait]
impl<T: Transport> Scraper for SuumoLandScraper<T> {
    fn name(&self) -> &str {
        "Suumo"
    }

    async fn search(&self, filters: &LandSearchFilters, page: u32) -> Vec<LandProperty> {
        SuumoLandScraper::search(self, filters, page).await
    }
}
