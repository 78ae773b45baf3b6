use super::capture;
use regex::Regex;
use std::sync::LazyLock;

static STATION_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"「([^」]+)」").expect("valid station regex"));
static WALK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"徒歩([0-9]+)分").expect("valid walk regex"));

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StationParts {
    pub nearest_station: String,
    pub walk_time_to_station: u32,
}

/// Parse a line/station string such as "ＪＲ青梅線「昭島」徒歩20分"
pub fn parse_station(text: &str) -> StationParts {
    let nearest_station = capture(&STATION_RE, text)
        .map(|s| s.trim().to_string())
        .unwrap_or_default();

    let walk_time_to_station = capture(&WALK_RE, text)
        .and_then(|m| m.parse::<u32>().ok())
        .unwrap_or(0);

    StationParts {
        nearest_station,
        walk_time_to_station,
    }
}
