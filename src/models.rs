use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Zoning category under the City Planning Act (用途地域)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LandUseZone {
    FirstClassLowRiseResidential,
    SecondClassLowRiseResidential,
    FirstClassMediumHighResidential,
    SecondClassMediumHighResidential,
    FirstClassResidential,
    SecondClassResidential,
    QuasiResidential,
    NeighborhoodCommercial,
    Commercial,
    QuasiIndustrial,
    Industrial,
    ExclusiveIndustrial,
    Undefined,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LandShape {
    Regular,
    Irregular,
    Corner,
    FlagShaped,
    Other,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoadDirection {
    North,
    South,
    East,
    West,
    Northeast,
    Northwest,
    Southeast,
    Southwest,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LandRights {
    Ownership,
    Leasehold,
    Other,
}

/// How a record's `id` was obtained
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IdSource {
    /// The site's own listing code, taken from the detail-page URL
    ListingCode,
    /// UUIDv5 digest of the normalized detail-page URL
    UrlDigest,
    /// No URL was present; the id is random and will not match across scrapes
    Unidentified,
}

/// Whether a field value was read from the page or filled in as a default
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Provenance {
    Extracted,
    Assumed,
}

/// A field value tagged with its provenance.
///
/// The summary list does not expose things like road frontage or utilities,
/// so those are filled with defaults. Consumers should check `provenance`
/// before treating a value as fact.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Attributed<T> {
    pub value: T,
    pub provenance: Provenance,
}

impl<T> Attributed<T> {
    pub fn extracted(value: T) -> Self {
        Self { value, provenance: Provenance::Extracted }
    }

    pub fn assumed(value: T) -> Self {
        Self { value, provenance: Provenance::Assumed }
    }

    pub fn is_assumed(&self) -> bool {
        self.provenance == Provenance::Assumed
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LandProperty {
    pub id: String,
    pub id_source: IdSource,
    pub title: String,
    /// Price in yen. Listings in the tens of billions exceed f64's exact range.
    pub price: u128,
    pub price_per_tsubo: f64,
    pub price_per_m2: f64,

    // Location
    pub prefecture: String,
    pub city: String,
    pub district: String,
    pub address: String,
    pub nearest_station: String,
    pub walk_time_to_station: u32,

    // Area
    pub land_area_tsubo: f64,
    pub land_area_m2: f64,

    // Regulations
    pub building_coverage_ratio: u32,
    pub floor_area_ratio: u32,
    pub land_use_zone: Attributed<LandUseZone>,

    // Characteristics
    pub land_shape: Attributed<LandShape>,
    pub front_road_width: Attributed<f64>,
    pub front_road_direction: Attributed<RoadDirection>,

    // Infrastructure
    pub has_electricity: Attributed<bool>,
    pub has_gas: Attributed<bool>,
    pub has_water: Attributed<bool>,
    pub has_sewage: Attributed<bool>,

    // Legal
    pub land_rights: Attributed<LandRights>,
    pub restrictions: Vec<String>,

    // Market data
    pub listed_date: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
    pub days_on_market: u32,

    pub images: Vec<String>,
    pub description: String,
    pub agent_name: String,
    pub agent_license: String,
    pub agent_contact: String,

    pub source_url: String,
    pub scraped_at: DateTime<Utc>,
}

/// Format a yen amount the way Japanese listing sites abbreviate it
/// (e.g. "¥4.5億", "¥9000万", "¥8,500")
pub fn format_price(price: u128) -> String {
    if price >= 100_000_000 {
        format!("¥{:.1}億", price as f64 / 100_000_000.0)
    } else if price >= 10_000 {
        format!("¥{:.0}万", price as f64 / 10_000.0)
    } else {
        format!("¥{}", group_thousands(price))
    }
}

fn group_thousands(value: u128) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

impl LandProperty {
    /// Check if the listing carries enough parsed data to be worth showing
    pub fn has_sufficient_info(&self) -> bool {
        !self.title.trim().is_empty() && (self.price > 0 || self.land_area_m2 > 0.0)
    }

    /// Multi-line text summary used by the CLI
    pub fn format_summary(&self) -> String {
        let mut message = format!("🏞  **{}**\n", self.title);

        message.push_str(&format!("💴 Price: {}", format_price(self.price)));
        if self.price_per_tsubo > 0.0 {
            message.push_str(&format!(
                " ({}/坪)",
                format_price(self.price_per_tsubo.round() as u128)
            ));
        }
        message.push('\n');

        if self.land_area_m2 > 0.0 || self.land_area_tsubo > 0.0 {
            message.push_str(&format!(
                "📐 Area: {:.2}m² ({:.1}坪)\n",
                self.land_area_m2, self.land_area_tsubo
            ));
        }

        if self.building_coverage_ratio > 0 || self.floor_area_ratio > 0 {
            message.push_str(&format!(
                "🏗  Coverage/FAR: {}% / {}%\n",
                self.building_coverage_ratio, self.floor_area_ratio
            ));
        }

        message.push_str(&format!("📍 {}\n", self.address));

        if !self.nearest_station.is_empty() {
            message.push_str(&format!(
                "🚉 {} ({} min walk)\n",
                self.nearest_station, self.walk_time_to_station
            ));
        }

        message.push_str(&format!("🔗 {}", self.source_url));

        message
    }
}
