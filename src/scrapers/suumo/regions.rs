/// A searchable region and the codes Suumo uses for it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub name: &'static str,
    pub slug: &'static str,
    /// `ar` parameter (e.g. 030 = Kanto)
    pub area_code: &'static str,
    /// `ta` parameter (JIS prefecture code)
    pub prefecture_code: &'static str,
    pub name_ja: &'static str,
}

const fn region(
    name: &'static str,
    slug: &'static str,
    area_code: &'static str,
    prefecture_code: &'static str,
    name_ja: &'static str,
) -> Region {
    Region { name, slug, area_code, prefecture_code, name_ja }
}

pub const REGIONS: &[Region] = &[
    region("Tokyo", "tokyo", "030", "13", "東京都"),
    region("Kanagawa", "kanagawa", "030", "14", "神奈川県"),
    region("Saitama", "saitama", "030", "11", "埼玉県"),
    region("Chiba", "chiba", "030", "12", "千葉県"),
    region("Osaka", "osaka", "060", "27", "大阪府"),
    region("Kyoto", "kyoto", "060", "26", "京都府"),
    region("Hyogo", "hyogo", "060", "28", "兵庫県"),
    region("Aichi", "aichi", "050", "23", "愛知県"),
    region("Hokkaido", "hokkaido", "010", "01", "北海道"),
    region("Fukuoka", "fukuoka", "090", "40", "福岡県"),
];

/// Used whenever a filter names no region or one we don't know
pub const DEFAULT_REGION: &Region = &REGIONS[0];

/// Look up a region by its capitalized or lower-case name
pub fn lookup(name: &str) -> Option<&'static Region> {
    REGIONS.iter().find(|r| r.name == name || r.slug == name)
}

/// Resolve an optional region name, falling back to Tokyo
pub fn resolve(name: Option<&str>) -> &'static Region {
    match name {
        Some(name) => lookup(name).unwrap_or(DEFAULT_REGION),
        None => DEFAULT_REGION,
    }
}
