#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AddressParts {
    pub prefecture: String,
    pub city: String,
    pub district: String,
}

const METROPOLITAN: [&str; 4] = ["東京都", "北海道", "京都府", "大阪府"];
const CITY_SUFFIXES: [char; 4] = ['市', '区', '町', '村'];
/// Municipalities inside a 郡
const TOWN_SUFFIXES: [char; 2] = ['町', '村'];

/// Split a Japanese address into prefecture, municipality and the rest.
///
/// "東京都昭島市中神町" -> ("東京都", "昭島市", "中神町"). Parts that can't be
/// found are left empty; if no municipality is found the whole remainder
/// becomes the district.
pub fn parse_address(address: &str) -> AddressParts {
    let address = address.trim();
    let (prefecture, rest) = split_prefecture(address);
    let (city, district) = split_city(rest);

    AddressParts {
        prefecture: prefecture.to_string(),
        city: city.to_string(),
        district: district.trim().to_string(),
    }
}

fn split_prefecture(address: &str) -> (&str, &str) {
    if let Some(prefix) = METROPOLITAN.iter().find(|p| address.starts_with(*p)) {
        return address.split_at(prefix.len());
    }

    // Regular prefectures are at most three characters before 県 (鹿児島県)
    match address.char_indices().take(4).find(|(_, c)| *c == '県') {
        Some((idx, c)) => address.split_at(idx + c.len_utf8()),
        None => ("", address),
    }
}

fn split_city(rest: &str) -> (&str, &str) {
    let Some(end) = suffix_end(rest, &CITY_SUFFIXES) else {
        return ("", rest);
    };

    // "余市郡余市町": the first suffix was part of a county name, so the
    // municipality is the county plus the town or village after it
    if rest[end..].starts_with('郡') {
        let county_end = end + '郡'.len_utf8();
        if let Some(town_end) = suffix_end(&rest[county_end..], &TOWN_SUFFIXES) {
            return rest.split_at(county_end + town_end);
        }
    }

    rest.split_at(end)
}

/// Byte offset just past the first suffix char, ignoring position 0 so names
/// like 町田市 or 市川市 aren't cut after one character
fn suffix_end(text: &str, suffixes: &[char]) -> Option<usize> {
    text.char_indices()
        .skip(1)
        .find(|(_, c)| suffixes.contains(c))
        .map(|(idx, c)| idx + c.len_utf8())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(prefecture: &str, city: &str, district: &str) -> AddressParts {
        AddressParts {
            prefecture: prefecture.to_string(),
            city: city.to_string(),
            district: district.to_string(),
        }
    }

    #[test]
    fn test_parse_address_tokyo_city() {
        assert_eq!(parse_address("東京都昭島市中神町"), parts("東京都", "昭島市", "中神町"));
    }

    #[test]
    fn test_parse_address_tokyo_ward() {
        assert_eq!(parse_address("東京都世田谷区成城６"), parts("東京都", "世田谷区", "成城６"));
    }

    #[test]
    fn test_parse_address_kyoto_is_not_split_on_to() {
        assert_eq!(parse_address("京都府京都市左京区"), parts("京都府", "京都市", "左京区"));
    }

    #[test]
    fn test_parse_address_ken() {
        assert_eq!(parse_address("神奈川県横浜市青葉区美しが丘"), parts("神奈川県", "横浜市", "青葉区美しが丘"));
        assert_eq!(parse_address("鹿児島県鹿児島市"), parts("鹿児島県", "鹿児島市", ""));
    }

    #[test]
    fn test_parse_address_city_starting_with_suffix_char() {
        assert_eq!(parse_address("東京都町田市本町田"), parts("東京都", "町田市", "本町田"));
        assert_eq!(parse_address("千葉県市川市八幡"), parts("千葉県", "市川市", "八幡"));
    }

    #[test]
    fn test_parse_address_county_town() {
        assert_eq!(parse_address("東京都西多摩郡瑞穂町"), parts("東京都", "西多摩郡瑞穂町", ""));
    }

    #[test]
    fn test_parse_address_county_with_suffix_char_in_name() {
        assert_eq!(parse_address("北海道余市郡余市町黒川町"), parts("北海道", "余市郡余市町", "黒川町"));
        assert_eq!(parse_address("北海道余市郡仁木町"), parts("北海道", "余市郡仁木町", ""));
    }

    #[test]
    fn test_parse_address_city_containing_county_char() {
        assert_eq!(parse_address("奈良県大和郡山市北郡山町"), parts("奈良県", "大和郡山市", "北郡山町"));
        assert_eq!(parse_address("福島県郡山市富久山町"), parts("福島県", "郡山市", "富久山町"));
    }

    #[test]
    fn test_parse_address_without_prefecture() {
        assert_eq!(parse_address("昭島市中神町"), parts("", "昭島市", "中神町"));
    }

    #[test]
    fn test_parse_address_unparsable() {
        assert_eq!(parse_address(""), AddressParts::default());
        assert_eq!(parse_address("中神"), parts("", "", "中神"));
    }
}
