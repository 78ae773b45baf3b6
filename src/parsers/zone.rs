use crate::models::LandUseZone;

const ZONES: [(&str, LandUseZone); 12] = [
    ("第一種低層住居専用地域", LandUseZone::FirstClassLowRiseResidential),
    ("第二種低層住居専用地域", LandUseZone::SecondClassLowRiseResidential),
    ("第一種中高層住居専用地域", LandUseZone::FirstClassMediumHighResidential),
    ("第二種中高層住居専用地域", LandUseZone::SecondClassMediumHighResidential),
    ("第一種住居地域", LandUseZone::FirstClassResidential),
    ("第二種住居地域", LandUseZone::SecondClassResidential),
    ("準住居地域", LandUseZone::QuasiResidential),
    ("近隣商業地域", LandUseZone::NeighborhoodCommercial),
    ("商業地域", LandUseZone::Commercial),
    ("準工業地域", LandUseZone::QuasiIndustrial),
    ("工業地域", LandUseZone::Industrial),
    ("工業専用地域", LandUseZone::ExclusiveIndustrial),
];

/// Find the first zoning designation mentioned in `text`, if any.
///
/// Digit forms (第1種, 第２種) are read the same as 第一種.
pub fn parse_land_use_zone(text: &str) -> Option<LandUseZone> {
    let normalized: String = text
        .chars()
        .map(|c| match c {
            '1' | '１' => '一',
            '2' | '２' => '二',
            other => other,
        })
        .collect();

    // Earliest mention wins; at the same offset the longer name wins
    // (近隣商業地域 also contains 商業地域 two characters later)
    ZONES
        .iter()
        .filter_map(|(name, zone)| normalized.find(name).map(|pos| (pos, name.len(), *zone)))
        .min_by(|a, b| a.0.cmp(&b.0).then(b.1.cmp(&a.1)))
        .map(|(_, _, zone)| zone)
}
