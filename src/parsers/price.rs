use super::capture;
use regex::Regex;
use std::sync::LazyLock;

static OKU_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([0-9]+)億").expect("valid oku regex"));
static MAN_AFTER_OKU_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"億([0-9]+)万").expect("valid man regex"));
static LEADING_MAN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)万").expect("valid man regex"));
static YEN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"万([0-9]+)円").expect("valid yen regex"));

const OKU: u128 = 100_000_000;
const MAN: u128 = 10_000;

/// Parse a Japanese price string into yen.
///
/// Handles "44億9000万円", "1億2000万円", "9000万円" and "1761万7000円".
/// For a range like "1761万7000円～3080万円" only the lower bound is read.
/// Text without any unit marker parses as 0.
pub fn parse_price(text: &str) -> u128 {
    let cleaned = text.replace([',', '，'], "");
    let lower_bound = cleaned
        .split(|c| c == '～' || c == '〜')
        .next()
        .unwrap_or("")
        .trim();

    let mut price: u128 = 0;

    if let Some(oku) = capture(&OKU_RE, lower_bound) {
        price = price.saturating_add(scaled(oku, OKU));
    }

    // 万 either follows an 億 group or leads the string
    let man = capture(&MAN_AFTER_OKU_RE, lower_bound).or_else(|| capture(&LEADING_MAN_RE, lower_bound));
    if let Some(man) = man {
        price = price.saturating_add(scaled(man, MAN));
    }

    // Plain yen after the 万 group
    if let Some(yen) = capture(&YEN_RE, lower_bound) {
        price = price.saturating_add(scaled(yen, 1));
    }

    price
}

/// `digits * unit`, or 0 when the group doesn't fit
fn scaled(digits: &str, unit: u128) -> u128 {
    digits
        .parse::<u128>()
        .ok()
        .and_then(|n| n.checked_mul(unit))
        .unwrap_or(0)
}
