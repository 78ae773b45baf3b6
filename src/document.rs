//! Read-only view of a listing node.
//!
//! Assembly code asks declarative questions ("the value next to the label
//! 所在地") through [`ListingNode`] instead of walking a parser's tree
//! directly. [`scraper::ElementRef`] is the production implementation.

use crate::error::AssemblyError;
use scraper::{ElementRef, Selector};

/// A labeled field: the `dt` whose text contains one of `labels`, read from
/// the `dd` right after it.
#[derive(Debug, Clone, Copy)]
pub struct FieldQuery {
    pub labels: &'static [&'static str],
    /// Narrow the value to a descendant of the `dd` (falls back to the whole cell)
    pub value_selector: Option<&'static str>,
}

impl FieldQuery {
    pub const fn label(labels: &'static [&'static str]) -> Self {
        Self { labels, value_selector: None }
    }

    pub const fn label_with_value(labels: &'static [&'static str], value_selector: &'static str) -> Self {
        Self { labels, value_selector: Some(value_selector) }
    }
}

pub trait ListingNode {
    /// Text of the first descendant matching `selector`
    fn select_text(&self, selector: &str) -> Result<Option<String>, AssemblyError>;

    /// Attribute of the first descendant matching `selector`
    fn select_attr(&self, selector: &str, attr: &str) -> Result<Option<String>, AssemblyError>;

    fn labeled_value(&self, query: &FieldQuery) -> Result<Option<String>, AssemblyError>;

    /// For every element matching `selector`, the first non-empty attribute
    /// out of `attrs`, in document order
    fn attr_values(&self, selector: &str, attrs: &[&str]) -> Result<Vec<String>, AssemblyError>;

    fn full_text(&self) -> String;
}

fn parse_selector(selector: &str) -> Result<Selector, AssemblyError> {
    Selector::parse(selector).map_err(|e| AssemblyError::Selector {
        selector: selector.to_string(),
        reason: e.to_string(),
    })
}

/// Collapse whitespace runs (including newlines from markup) to single spaces
pub fn clean_text<'a>(parts: impl Iterator<Item = &'a str>) -> String {
    // Join text nodes first: "115.01m<sup>2</sup>" must stay "115.01m2"
    let joined: String = parts.collect();
    joined.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn element_text(element: &ElementRef) -> String {
    clean_text(element.text())
}

impl ListingNode for ElementRef<'_> {
    fn select_text(&self, selector: &str) -> Result<Option<String>, AssemblyError> {
        let selector = parse_selector(selector)?;
        Ok(self.select(&selector).next().map(|el| element_text(&el)))
    }

    fn select_attr(&self, selector: &str, attr: &str) -> Result<Option<String>, AssemblyError> {
        let selector = parse_selector(selector)?;
        Ok(self
            .select(&selector)
            .next()
            .and_then(|el| el.value().attr(attr))
            .map(|value| value.trim().to_string()))
    }

    fn labeled_value(&self, query: &FieldQuery) -> Result<Option<String>, AssemblyError> {
        let dt_selector = parse_selector("dt")?;
        let value_selector = query.value_selector.map(parse_selector).transpose()?;

        for dt in self.select(&dt_selector) {
            let label = element_text(&dt);
            if !query.labels.iter().any(|l| label.contains(l)) {
                continue;
            }

            // Only the immediately adjacent element counts
            let Some(dd) = dt.next_siblings().find_map(ElementRef::wrap) else {
                continue;
            };
            if dd.value().name() != "dd" {
                continue;
            }

            let narrowed = value_selector
                .as_ref()
                .and_then(|sel| dd.select(sel).next())
                .map(|el| element_text(&el));

            return Ok(Some(narrowed.unwrap_or_else(|| element_text(&dd))));
        }

        Ok(None)
    }

    fn attr_values(&self, selector: &str, attrs: &[&str]) -> Result<Vec<String>, AssemblyError> {
        let selector = parse_selector(selector)?;
        Ok(self
            .select(&selector)
            .filter_map(|el| {
                attrs
                    .iter()
                    .filter_map(|attr| el.value().attr(attr))
                    .map(str::trim)
                    .find(|value| !value.is_empty())
                    .map(str::to_string)
            })
            .collect())
    }

    fn full_text(&self) -> String {
        element_text(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    const PRICE: FieldQuery = FieldQuery::label_with_value(&["販売価格"], ".dottable-value");
    const ADDRESS: FieldQuery = FieldQuery::label(&["所在地"]);

    fn with_root<R>(html: &str, f: impl FnOnce(ElementRef) -> R) -> R {
        let document = Html::parse_fragment(html);
        let selector = Selector::parse("div.root").unwrap();
        let root = document.select(&selector).next().unwrap();
        f(root)
    }

    #[test]
    fn test_labeled_value_reads_adjacent_cell() {
        let html = r#"<div class="root">
            <dl><dt>所在地</dt><dd>東京都昭島市
                中神町</dd></dl>
        </div>"#;
        let value = with_root(html, |root| root.labeled_value(&ADDRESS).unwrap());
        assert_eq!(value.as_deref(), Some("東京都昭島市 中神町"));
    }

    #[test]
    fn test_labeled_value_narrows_to_value_selector() {
        let html = r#"<div class="root">
            <dl><dt>販売価格</dt><dd><span class="dottable-value">9000万円</span> <span>（税込）</span></dd></dl>
        </div>"#;
        let value = with_root(html, |root| root.labeled_value(&PRICE).unwrap());
        assert_eq!(value.as_deref(), Some("9000万円"));
    }

    #[test]
    fn test_labeled_value_falls_back_to_whole_cell() {
        let html = r#"<div class="root"><dl><dt>販売価格</dt><dd>1億2000万円</dd></dl></div>"#;
        let value = with_root(html, |root| root.labeled_value(&PRICE).unwrap());
        assert_eq!(value.as_deref(), Some("1億2000万円"));
    }

    #[test]
    fn test_labeled_value_requires_adjacent_dd() {
        let html = r#"<div class="root"><dl><dt>所在地</dt><dt>沿線・駅</dt><dd>「昭島」</dd></dl></div>"#;
        let value = with_root(html, |root| root.labeled_value(&ADDRESS).unwrap());
        assert_eq!(value, None);
    }

    #[test]
    fn test_labeled_value_missing_label() {
        let html = r#"<div class="root"><dl><dt>土地面積</dt><dd>100m2</dd></dl></div>"#;
        let value = with_root(html, |root| root.labeled_value(&PRICE).unwrap());
        assert_eq!(value, None);
    }

    #[test]
    fn test_attr_values_prefers_first_listed_attribute() {
        let html = r#"<div class="root">
            <img src="spacer.gif" rel="https://img.example/1.jpg">
            <img src="https://img.example/2.jpg">
            <img src="">
            <img data-src="https://img.example/3.jpg" src="spacer.gif">
        </div>"#;
        let images = with_root(html, |root| {
            root.attr_values("img", &["rel", "data-src", "src"]).unwrap()
        });
        assert_eq!(
            images,
            vec![
                "https://img.example/1.jpg",
                "https://img.example/2.jpg",
                "https://img.example/3.jpg",
            ]
        );
    }

    #[test]
    fn test_invalid_selector_is_an_error() {
        let html = r#"<div class="root"></div>"#;
        let result = with_root(html, |root| root.select_text(":::"));
        assert!(matches!(result, Err(AssemblyError::Selector { .. })));
    }

    #[test]
    fn test_select_text_and_attr() {
        let html = r#"<div class="root"><h2 class="t"><a href=" /tochi/nc_1/ ">昭島市 の土地</a></h2></div>"#;
        with_root(html, |root| {
            assert_eq!(root.select_text(".t a").unwrap().as_deref(), Some("昭島市 の土地"));
            assert_eq!(root.select_attr(".t a", "href").unwrap().as_deref(), Some("/tochi/nc_1/"));
            assert_eq!(root.select_attr(".t a", "title").unwrap(), None);
        });
    }
}
