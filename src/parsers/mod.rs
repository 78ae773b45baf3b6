//! Parsers for the free-text fields of Japanese land listings.
//!
//! Every parser here is total: input that doesn't match yields the field's
//! default (0, 0.0, empty string) rather than an error.

mod address;
mod area;
mod price;
mod ratio;
mod station;
mod zone;

pub use address::{parse_address, AddressParts};
pub use area::{parse_area, AreaParts};
pub use price::parse_price;
pub use ratio::{parse_ratios, RatioParts};
pub use station::{parse_station, StationParts};
pub use zone::parse_land_use_zone;

use regex::Regex;

/// First capture group of `re` in `text`
fn capture<'t>(re: &Regex, text: &'t str) -> Option<&'t str> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
