use super::capture;
use regex::Regex;
use std::sync::LazyLock;

static M2_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+(?:\.[0-9]+)?)\s*(?:m2|m²|㎡)").expect("valid m2 regex"));
static TSUBO_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+(?:\.[0-9]+)?)\s*坪").expect("valid tsubo regex"));

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AreaParts {
    pub land_area_m2: f64,
    pub land_area_tsubo: f64,
}

/// Parse a land area string such as "115.01m2～123.66m2（34.79坪～37.40坪）".
///
/// The first m² figure and the first 坪 figure are taken independently, so a
/// range reports its lower bound in both units.
pub fn parse_area(text: &str) -> AreaParts {
    let number = |re: &Regex| {
        capture(re, text)
            .and_then(|n| n.parse::<f64>().ok())
            .unwrap_or(0.0)
    };

    AreaParts {
        land_area_m2: number(&M2_RE),
        land_area_tsubo: number(&TSUBO_RE),
    }
}
