use super::regions;
use crate::filters::{LandSearchFilters, SortBy, SortOrder};

/// Search-results endpoint, relative to the site (or relay) base URL
pub const SEARCH_PATH: &str = "/jj/bukken/ichiran/JJ010FJ001/";

/// `bs` value for the land category
const LAND_CATEGORY: &str = "030";

const DEFAULT_PAGE_SIZE: u32 = 100;

/// The site rejects area bounds above this many m²
const MAX_AREA_M2: f64 = 150.0;

/// Translate search filters into Suumo query parameters, in emission order
pub fn translate(filters: &LandSearchFilters, page: u32) -> Vec<(&'static str, String)> {
    let mut params = Vec::new();

    let region = regions::resolve(filters.prefecture.as_deref());
    params.push(("ar", region.area_code.to_string()));
    params.push(("bs", LAND_CATEGORY.to_string()));
    params.push(("ta", region.prefecture_code.to_string()));

    params.push(("page", page.to_string()));

    let page_size = filters.limit.filter(|&l| l > 0).unwrap_or(DEFAULT_PAGE_SIZE);
    params.push(("pc", page_size.to_string()));

    // kb/kt are in 万円 (10,000 yen)
    if let Some(min_price) = filters.min_price.filter(|&p| p > 0) {
        params.push(("kb", man_yen(min_price)));
    }
    if let Some(max_price) = filters.max_price.filter(|&p| p > 0) {
        params.push(("kt", man_yen(max_price)));
    }

    if let Some(min_area) = filters.min_area.filter(|&a| a > 0.0) {
        params.push(("mb", min_area.min(MAX_AREA_M2).to_string()));
    }
    if let Some(max_area) = filters.max_area.filter(|&a| a > 0.0) {
        params.push(("tt", max_area.min(MAX_AREA_M2).to_string()));
    }

    if let Some(walk) = filters.max_walk_time.filter(|&w| w > 0) {
        params.push(("cn", walk.to_string()));
    }

    if let Some((field, direction)) = sort_codes(filters.sort_by, filters.sort_order) {
        params.push(("po", field.to_string()));
        params.push(("pj", direction.to_string()));
    }

    params
}

/// Map a sort request to the site's (po, pj) codes
fn sort_codes(sort_by: Option<SortBy>, order: Option<SortOrder>) -> Option<(&'static str, &'static str)> {
    let direction = match order {
        Some(SortOrder::Desc) => "2",
        Some(SortOrder::Asc) | None => "1",
    };

    match sort_by? {
        // Newest-first is the only direction the site offers for this field
        SortBy::Newest => Some(("1", "2")),
        SortBy::Location => Some(("3", direction)),
        SortBy::Price => Some(("5", direction)),
        SortBy::Area => Some(("9", direction)),
        SortBy::PricePerTsubo => Some(("13", direction)),
        SortBy::Unsorted => None,
    }
}

fn man_yen(yen: u64) -> String {
    if yen % 10_000 == 0 {
        (yen / 10_000).to_string()
    } else {
        (yen as f64 / 10_000.0).to_string()
    }
}

/// Build the full search URL for a page of results
pub fn search_url(base_url: &str, filters: &LandSearchFilters, page: u32) -> String {
    let query = translate(filters, page)
        .iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");

    format!("{}{}?{}", base_url.trim_end_matches('/'), SEARCH_PATH, query)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn param<'a>(params: &'a [(&'static str, String)], key: &str) -> Option<&'a str> {
        params.iter().find(|(k, _)| *k == key).map(|(_, v)| v.as_str())
    }

    #[test]
    fn test_translate_region_and_price() {
        let filters = LandSearchFilters {
            prefecture: Some("osaka".to_string()),
            max_price: Some(50_000_000),
            ..Default::default()
        };

        let params = translate(&filters, 2);
        assert_eq!(param(&params, "ar"), Some("060"));
        assert_eq!(param(&params, "ta"), Some("27"));
        assert_eq!(param(&params, "page"), Some("2"));
        assert_eq!(param(&params, "kt"), Some("5000"));
        assert_eq!(param(&params, "kb"), None);
    }

    #[test]
    fn test_translate_defaults() {
        let params = translate(&LandSearchFilters::default(), 1);
        assert_eq!(
            params,
            vec![
                ("ar", "030".to_string()),
                ("bs", "030".to_string()),
                ("ta", "13".to_string()),
                ("page", "1".to_string()),
                ("pc", "100".to_string()),
            ]
        );
    }

    #[test]
    fn test_translate_unknown_region_falls_back_to_tokyo() {
        let filters = LandSearchFilters {
            prefecture: Some("Okinawa".to_string()),
            ..Default::default()
        };
        let params = translate(&filters, 1);
        assert_eq!(param(&params, "ar"), Some("030"));
        assert_eq!(param(&params, "ta"), Some("13"));
    }

    #[test]
    fn test_translate_clamps_area() {
        let filters = LandSearchFilters {
            min_area: Some(200.0),
            max_area: Some(300.0),
            ..Default::default()
        };
        let params = translate(&filters, 1);
        assert_eq!(param(&params, "mb"), Some("150"));
        assert_eq!(param(&params, "tt"), Some("150"));
    }

    #[test]
    fn test_translate_keeps_area_under_cap() {
        let filters = LandSearchFilters {
            min_area: Some(80.5),
            ..Default::default()
        };
        let params = translate(&filters, 1);
        assert_eq!(param(&params, "mb"), Some("80.5"));
        assert_eq!(param(&params, "tt"), None);
    }

    #[test]
    fn test_translate_omits_zero_price() {
        let filters = LandSearchFilters {
            min_price: Some(0),
            max_price: Some(15_000),
            ..Default::default()
        };
        let params = translate(&filters, 1);
        assert_eq!(param(&params, "kb"), None);
        assert_eq!(param(&params, "kt"), Some("1.5"));
    }

    #[test]
    fn test_translate_limit_and_walk_time() {
        let filters = LandSearchFilters {
            limit: Some(30),
            max_walk_time: Some(10),
            ..Default::default()
        };
        let params = translate(&filters, 3);
        assert_eq!(param(&params, "pc"), Some("30"));
        assert_eq!(param(&params, "cn"), Some("10"));
    }

    #[test]
    fn test_translate_sort_price_desc() {
        let filters = LandSearchFilters {
            sort_by: Some(SortBy::Price),
            sort_order: Some(SortOrder::Desc),
            ..Default::default()
        };
        let params = translate(&filters, 1);
        assert_eq!(param(&params, "po"), Some("5"));
        assert_eq!(param(&params, "pj"), Some("2"));
    }

    #[test]
    fn test_translate_sort_newest_ignores_order() {
        for order in [Some(SortOrder::Asc), Some(SortOrder::Desc), None] {
            let filters = LandSearchFilters {
                sort_by: Some(SortBy::Newest),
                sort_order: order,
                ..Default::default()
            };
            let params = translate(&filters, 1);
            assert_eq!(param(&params, "po"), Some("1"));
            assert_eq!(param(&params, "pj"), Some("2"));
        }
    }

    #[test]
    fn test_translate_sort_codes() {
        let cases = [
            (SortBy::Location, "3"),
            (SortBy::Area, "9"),
            (SortBy::PricePerTsubo, "13"),
        ];
        for (sort_by, code) in cases {
            let filters = LandSearchFilters {
                sort_by: Some(sort_by),
                sort_order: Some(SortOrder::Asc),
                ..Default::default()
            };
            let params = translate(&filters, 1);
            assert_eq!(param(&params, "po"), Some(code));
            assert_eq!(param(&params, "pj"), Some("1"));
        }
    }

    #[test]
    fn test_translate_no_sort_params_for_none() {
        let filters = LandSearchFilters {
            sort_by: Some(SortBy::Unsorted),
            sort_order: Some(SortOrder::Desc),
            ..Default::default()
        };
        let params = translate(&filters, 1);
        assert_eq!(param(&params, "po"), None);
        assert_eq!(param(&params, "pj"), None);
    }

    #[test]
    fn test_translate_is_idempotent() {
        let filters = LandSearchFilters {
            prefecture: Some("Kyoto".to_string()),
            min_price: Some(10_000_000),
            max_area: Some(120.0),
            sort_by: Some(SortBy::Area),
            sort_order: Some(SortOrder::Desc),
            ..Default::default()
        };
        assert_eq!(translate(&filters, 4), translate(&filters, 4));
    }

    #[test]
    fn test_search_url() {
        let filters = LandSearchFilters {
            prefecture: Some("Osaka".to_string()),
            ..Default::default()
        };
        let url = search_url("https://suumo.jp/", &filters, 1);
        assert_eq!(
            url,
            "https://suumo.jp/jj/bukken/ichiran/JJ010FJ001/?ar=060&bs=030&ta=27&page=1&pc=100"
        );
    }

    #[test]
    fn test_search_url_through_relay() {
        let url = search_url("http://localhost:8788/suumo-api", &LandSearchFilters::default(), 2);
        assert!(url.starts_with("http://localhost:8788/suumo-api/jj/bukken/ichiran/JJ010FJ001/?"));
        assert!(url.contains("page=2"));
    }
}
