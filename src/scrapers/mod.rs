pub mod suumo;

pub use suumo::SuumoLandScraper;
