use super::capture;
use regex::Regex;
use std::sync::LazyLock;

static ASIDE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[（(][^）)]*[）)]").expect("valid aside regex"));
static LABELED_COVERAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"建[ペぺ]い率[：:]?\s*([0-9]+)").expect("valid coverage regex"));
static SLASH_COVERAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)[％%]?\s*[/／]\s*容積率").expect("valid coverage regex"));
static FLOOR_AREA_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"容積率[：:]?\s*([0-9]+)").expect("valid floor area regex"));
static BARE_PAIR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([0-9]+)\s*[％%]\s*[・/／、]\s*([0-9]+)\s*[％%]").expect("valid ratio pair regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RatioParts {
    pub building_coverage_ratio: u32,
    pub floor_area_ratio: u32,
}

/// Parse building coverage (建ぺい率) and floor-area (容積率) ratios.
///
/// Layouts seen on the site:
/// - "建ペい率:40%(角地:50%) 容積率:80%"
/// - "建ペい率：40％、容積率：80％"
/// - "40％/容積率：80％"
/// - "40％・80％" (no labels)
///
/// Parenthetical asides like (角地:50%) are dropped before matching, so only
/// the primary figure of each ratio is read.
pub fn parse_ratios(text: &str) -> RatioParts {
    let text = ASIDE_RE.replace_all(text, "");
    let percent = |re: &Regex| capture(re, &text).and_then(|n| n.parse::<u32>().ok());

    let coverage = percent(&LABELED_COVERAGE_RE).or_else(|| percent(&SLASH_COVERAGE_RE));
    let floor_area = percent(&FLOOR_AREA_RE);

    match (coverage, floor_area) {
        (None, None) => bare_pair(&text),
        (coverage, floor_area) => RatioParts {
            building_coverage_ratio: coverage.unwrap_or(0),
            floor_area_ratio: floor_area.unwrap_or(0),
        },
    }
}

/// Unlabeled "40％・80％" / "40%/80%"
fn bare_pair(text: &str) -> RatioParts {
    let caps = BARE_PAIR_RE.captures(text);

    let group = |i: usize| {
        caps.as_ref()
            .and_then(|c| c.get(i))
            .and_then(|m| m.as_str().parse::<u32>().ok())
            .unwrap_or(0)
    };

    RatioParts {
        building_coverage_ratio: group(1),
        floor_area_ratio: group(2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPECTED: RatioParts = RatioParts {
        building_coverage_ratio: 40,
        floor_area_ratio: 80,
    };

    #[test]
    fn test_patterns_compile() {
        LazyLock::force(&ASIDE_RE);
        LazyLock::force(&LABELED_COVERAGE_RE);
        LazyLock::force(&SLASH_COVERAGE_RE);
        LazyLock::force(&FLOOR_AREA_RE);
        LazyLock::force(&BARE_PAIR_RE);
    }

    #[test]
    fn test_parse_ratios_colon_layout() {
        assert_eq!(parse_ratios("建ペい率：40％、容積率：80％"), EXPECTED);
        assert_eq!(parse_ratios("建ぺい率:40% 容積率:80%"), EXPECTED);
        assert_eq!(parse_ratios("建ぺい率：40/容積率：80"), EXPECTED);
    }

    #[test]
    fn test_parse_ratios_slash_layout() {
        assert_eq!(parse_ratios("40％/容積率：80％"), EXPECTED);
        assert_eq!(parse_ratios("40%／容積率80%"), EXPECTED);
    }

    #[test]
    fn test_parse_ratios_ignores_parenthetical_aside() {
        assert_eq!(parse_ratios("建ペい率:40%(角地:50%) 容積率:80%"), EXPECTED);
        assert_eq!(parse_ratios("建ペい率：40％（角地緩和により50％）、容積率：80％"), EXPECTED);
    }

    #[test]
    fn test_parse_ratios_aside_in_slash_layout() {
        assert_eq!(parse_ratios("40％（角地50％）/容積率：80％"), EXPECTED);
        assert_eq!(parse_ratios("40%(角地:50%)／容積率80%"), EXPECTED);
    }

    #[test]
    fn test_parse_ratios_aside_in_bare_layout() {
        assert_eq!(parse_ratios("40％（角地緩和あり）・80％"), EXPECTED);
        assert_eq!(parse_ratios("40%(角地50%)/80%"), EXPECTED);
    }

    #[test]
    fn test_parse_ratios_labeled_slash_with_aside() {
        assert_eq!(parse_ratios("建ぺい率40％（角地50％）/容積率80％"), EXPECTED);
    }

    #[test]
    fn test_parse_ratios_bare_layout() {
        assert_eq!(parse_ratios("40％・80％"), EXPECTED);
        assert_eq!(parse_ratios("40%/80%"), EXPECTED);
    }

    #[test]
    fn test_parse_ratios_partial() {
        let only_floor = parse_ratios("容積率：200％");
        assert_eq!(only_floor.building_coverage_ratio, 0);
        assert_eq!(only_floor.floor_area_ratio, 200);

        let only_coverage = parse_ratios("建ぺい率：60％");
        assert_eq!(only_coverage.building_coverage_ratio, 60);
        assert_eq!(only_coverage.floor_area_ratio, 0);
    }

    #[test]
    fn test_parse_ratios_no_match() {
        assert_eq!(parse_ratios(""), RatioParts::default());
        assert_eq!(parse_ratios("-"), RatioParts::default());
    }
}
