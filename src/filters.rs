use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "camelCase")]
pub enum SortBy {
    Newest,
    Location,
    Price,
    Area,
    #[value(name = "pricePerTsubo", alias = "price-per-tsubo")]
    PricePerTsubo,
    /// Keep the site's default ordering
    #[serde(rename = "none")]
    #[value(name = "none")]
    Unsorted,
}

impl FromStr for SortBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "newest" => Ok(SortBy::Newest),
            "location" => Ok(SortBy::Location),
            "price" => Ok(SortBy::Price),
            "area" => Ok(SortBy::Area),
            "pricePerTsubo" => Ok(SortBy::PricePerTsubo),
            "none" => Ok(SortBy::Unsorted),
            other => Err(format!("unknown sort field '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(format!("unknown sort order '{}'", other)),
        }
    }
}

/// Search criteria for a land listing query
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct LandSearchFilters {
    /// Region name as known to the region table (e.g. "Osaka" or "osaka")
    pub prefecture: Option<String>,
    pub city: Option<String>,
    /// Minimum price (yen)
    pub min_price: Option<u64>,
    /// Maximum price (yen)
    pub max_price: Option<u64>,
    /// Minimum land area (m²)
    pub min_area: Option<f64>,
    /// Maximum land area (m²)
    pub max_area: Option<f64>,
    /// Maximum walk from the nearest station (minutes)
    pub max_walk_time: Option<u32>,
    #[serde(deserialize_with = "lenient")]
    pub sort_by: Option<SortBy>,
    #[serde(deserialize_with = "lenient")]
    pub sort_order: Option<SortOrder>,
    pub page: Option<u32>,
    /// Results per page (10, 20, 30, 50 or 100 on the site)
    pub limit: Option<u32>,
}

impl LandSearchFilters {
    /// Overlay every field set in `other` on top of `self`
    pub fn merged_with(mut self, other: LandSearchFilters) -> Self {
        if other.prefecture.is_some() {
            self.prefecture = other.prefecture;
        }
        if other.city.is_some() {
            self.city = other.city;
        }
        self.min_price = other.min_price.or(self.min_price);
        self.max_price = other.max_price.or(self.max_price);
        self.min_area = other.min_area.or(self.min_area);
        self.max_area = other.max_area.or(self.max_area);
        self.max_walk_time = other.max_walk_time.or(self.max_walk_time);
        self.sort_by = other.sort_by.or(self.sort_by);
        self.sort_order = other.sort_order.or(self.sort_order);
        self.page = other.page.or(self.page);
        self.limit = other.limit.or(self.limit);
        self
    }
}

/// Unknown enum strings become `None` instead of failing the whole filter set
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr<Err = String>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|s| match s.parse::<T>() {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!("Ignoring filter value: {}", e);
            None
        }
    }))
}
