use super::regions::Region;
use crate::document::{FieldQuery, ListingNode};
use crate::error::AssemblyError;
use crate::models::{
    Attributed, IdSource, LandProperty, LandRights, LandShape, LandUseZone, RoadDirection,
};
use crate::parsers;
use chrono::{DateTime, Utc};
use regex::Regex;
use std::sync::LazyLock;
use uuid::Uuid;

/// Origin used to resolve relative detail links, even when pages are
/// fetched through a relay
pub const SITE_ORIGIN: &str = "https://suumo.jp";

const TITLE_LINK: &str = ".property_unit-title a";
const THUMBNAILS: &str = ".ui-thumb img";
/// Lazy-loaded thumbnails keep the real URL in `rel`; `src` is a spacer
const IMAGE_ATTRS: [&str; 3] = ["rel", "data-src", "src"];

const PRICE: FieldQuery = FieldQuery::label_with_value(&["販売価格"], ".dottable-value");
const ADDRESS: FieldQuery = FieldQuery::label(&["所在地"]);
const STATION: FieldQuery = FieldQuery::label(&["沿線・駅"]);
const LAND_AREA: FieldQuery = FieldQuery::label(&["土地面積"]);
const RATIOS: FieldQuery = FieldQuery::label(&["建ぺい率・容積率", "建ペい率・容積率"]);

// Detail pages look like /tochi/tokyo/sc_akishima/nc_75859324/ or ...?nc=75859324
static LISTING_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:/nc_|[?&]nc=)([0-9]+)").expect("valid listing code regex"));

/// Per-page inputs shared by every listing on that page
pub struct AssemblyContext<'a> {
    /// Region the search resolved to; used when an address has no prefecture
    pub region: &'a Region,
    pub scraped_at: DateTime<Utc>,
}

/// Build a `LandProperty` from one listing node
pub fn assemble<N: ListingNode>(
    node: &N,
    index: usize,
    ctx: &AssemblyContext,
) -> Result<LandProperty, AssemblyError> {
    // Extract title and detail link
    let title = node.select_text(TITLE_LINK)?.unwrap_or_default();
    let relative_url = node.select_attr(TITLE_LINK, "href")?.unwrap_or_default();
    let source_url = build_full_url(&relative_url);

    if title.is_empty() && source_url.is_empty() {
        return Err(AssemblyError::Empty { index });
    }

    // Extract labeled fields
    let price_text = node.labeled_value(&PRICE)?.unwrap_or_default();
    let address = node.labeled_value(&ADDRESS)?.unwrap_or_default();
    let station_text = node.labeled_value(&STATION)?.unwrap_or_default();
    let area_text = node.labeled_value(&LAND_AREA)?.unwrap_or_default();
    let ratio_text = node.labeled_value(&RATIOS)?.unwrap_or_default();
    tracing::trace!(
        "Listing #{} fields: price='{}' area='{}' ratios='{}' station='{}'",
        index + 1, price_text, area_text, ratio_text, station_text
    );

    let price = parsers::parse_price(&price_text);
    let area = parsers::parse_area(&area_text);
    let ratios = parsers::parse_ratios(&ratio_text);
    let station = parsers::parse_station(&station_text);
    let location = parsers::parse_address(&address);

    let land_use_zone = match parsers::parse_land_use_zone(&node.full_text()) {
        Some(zone) => Attributed::extracted(zone),
        None => Attributed::assumed(LandUseZone::Undefined),
    };

    let images = node.attr_values(THUMBNAILS, &IMAGE_ATTRS)?;
    let (id, id_source) = derive_id(&source_url);

    let prefecture = if location.prefecture.is_empty() {
        ctx.region.name_ja.to_string()
    } else {
        location.prefecture
    };

    Ok(LandProperty {
        id,
        id_source,
        title,
        price,
        price_per_tsubo: price_per(price, area.land_area_tsubo),
        price_per_m2: price_per(price, area.land_area_m2),
        prefecture,
        city: location.city,
        district: location.district,
        address,
        nearest_station: station.nearest_station,
        walk_time_to_station: station.walk_time_to_station,
        land_area_tsubo: area.land_area_tsubo,
        land_area_m2: area.land_area_m2,
        building_coverage_ratio: ratios.building_coverage_ratio,
        floor_area_ratio: ratios.floor_area_ratio,
        land_use_zone,
        // Not shown on the results page; filled with defaults
        land_shape: Attributed::assumed(LandShape::Regular),
        front_road_width: Attributed::assumed(0.0),
        front_road_direction: Attributed::assumed(RoadDirection::North),
        has_electricity: Attributed::assumed(true),
        has_gas: Attributed::assumed(true),
        has_water: Attributed::assumed(true),
        has_sewage: Attributed::assumed(true),
        land_rights: Attributed::assumed(LandRights::Ownership),
        restrictions: Vec::new(),
        listed_date: ctx.scraped_at,
        last_updated: ctx.scraped_at,
        days_on_market: 0,
        images,
        description: String::new(),
        agent_name: String::new(),
        agent_license: String::new(),
        agent_contact: String::new(),
        source_url,
        scraped_at: ctx.scraped_at,
    })
}

fn price_per(price: u128, area: f64) -> f64 {
    if area > 0.0 {
        price as f64 / area
    } else {
        0.0
    }
}

/// Convert relative URL to absolute URL
fn build_full_url(relative_url: &str) -> String {
    if relative_url.starts_with("http") {
        relative_url.to_string()
    } else if let Some(rest) = relative_url.strip_prefix("//") {
        format!("https://{}", rest)
    } else if relative_url.starts_with('/') {
        format!("{}{}", SITE_ORIGIN, relative_url)
    } else if !relative_url.is_empty() {
        format!("{}/{}", SITE_ORIGIN, relative_url)
    } else {
        String::new()
    }
}

/// Drop the fragment and trailing slash so equivalent links hash the same
fn normalize_url(url: &str) -> &str {
    let without_fragment = url.split('#').next().unwrap_or(url);
    without_fragment.trim_end_matches('/')
}

/// Listing code from the URL when present, otherwise a stable digest of the URL
fn derive_id(full_url: &str) -> (String, IdSource) {
    if full_url.is_empty() {
        return (format!("unidentified-{}", Uuid::new_v4()), IdSource::Unidentified);
    }

    let code = LISTING_CODE_RE
        .captures(full_url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string());

    match code {
        Some(code) => (code, IdSource::ListingCode),
        None => {
            let digest = Uuid::new_v5(&Uuid::NAMESPACE_URL, normalize_url(full_url).as_bytes());
            (digest.to_string(), IdSource::UrlDigest)
        }
    }
}
