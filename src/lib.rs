//! Vacant-land listing search for Suumo.
//!
//! [`SuumoLandScraper::search`] turns a [`LandSearchFilters`] and a page
//! number into the site's query dialect, fetches the results page through a
//! [`Transport`], and parses each listing's Japanese free-text fields into a
//! typed [`LandProperty`].

pub mod config;
pub mod document;
pub mod error;
pub mod filters;
pub mod http_client;
pub mod models;
pub mod parsers;
pub mod scraper_trait;
pub mod scrapers;

pub use config::Config;
pub use error::{AssemblyError, TransportError};
pub use filters::{LandSearchFilters, SortBy, SortOrder};
pub use http_client::{HttpTransport, Transport};
pub use models::LandProperty;
pub use scraper_trait::Scraper;
pub use scrapers::SuumoLandScraper;
