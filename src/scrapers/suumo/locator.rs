use crate::error::AssemblyError;
use scraper::{ElementRef, Html, Selector};

/// Structural marker of one listing on a search-results page
pub const LISTING_SELECTOR: &str = ".property_unit";

/// All listing nodes in `document`, in document order
pub fn locate(document: &Html) -> Result<Vec<ElementRef<'_>>, AssemblyError> {
    let selector = Selector::parse(LISTING_SELECTOR).map_err(|e| AssemblyError::Selector {
        selector: LISTING_SELECTOR.to_string(),
        reason: e.to_string(),
    })?;

    let nodes: Vec<_> = document.select(&selector).collect();
    tracing::debug!("Found {} elements with selector: {}", nodes.len(), LISTING_SELECTOR);

    Ok(nodes)
}
