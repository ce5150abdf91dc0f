use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;
use crate::item::RssItem;

/// Field to order items by, named the way the backend's `order_by` query parameter names them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderBy {
    #[default]
    LlmScore,
    RelevanceScore,
    Published,
}

/// Result of comparing two sort keys.
enum KeyOrder {
    /// Both keys present; the sort direction applies.
    Ranked(Ordering),
    /// At least one key absent; absent keys go last in either direction.
    Fixed(Ordering),
}

impl OrderBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderBy::LlmScore => "llm_score",
            OrderBy::RelevanceScore => "relevance_score",
            OrderBy::Published => "published",
        }
    }

    /// The score this ordering ranks by, if it ranks by a score.
    pub fn score(&self, item: &RssItem) -> Option<f64> {
        match self {
            OrderBy::LlmScore => item.llm_score,
            OrderBy::RelevanceScore => item.relevance_score,
            OrderBy::Published => None,
        }
    }

    fn compare(&self, a: &RssItem, b: &RssItem) -> KeyOrder {
        match self {
            OrderBy::LlmScore | OrderBy::RelevanceScore => {
                compare_present(self.score(a), self.score(b), f64::total_cmp)
            }
            OrderBy::Published => {
                compare_present(a.published.instant(), b.published.instant(), Ord::cmp)
            }
        }
    }
}

fn compare_present<T>(a: Option<T>, b: Option<T>, cmp: impl Fn(&T, &T) -> Ordering) -> KeyOrder {
    match (a, b) {
        (Some(x), Some(y)) => KeyOrder::Ranked(cmp(&x, &y)),
        (Some(_), None) => KeyOrder::Fixed(Ordering::Less),
        (None, Some(_)) => KeyOrder::Fixed(Ordering::Greater),
        (None, None) => KeyOrder::Fixed(Ordering::Equal),
    }
}

fn directed(order: KeyOrder, descending: bool) -> Ordering {
    match order {
        KeyOrder::Ranked(o) if descending => o.reverse(),
        KeyOrder::Ranked(o) | KeyOrder::Fixed(o) => o,
    }
}

/// Only the three fields above are accepted. The backend takes any item field for
/// `order_by` and silently ignores unknown names; here an unknown name is an error.
impl FromStr for OrderBy {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "llm_score" => Ok(OrderBy::LlmScore),
            "relevance_score" => Ok(OrderBy::RelevanceScore),
            "published" => Ok(OrderBy::Published),
            other => Err(ModelError::UnknownOrderBy(other.to_string())),
        }
    }
}

impl fmt::Display for OrderBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stable sort by `order_by`, with ties broken by `published`, newest first.
///
/// Items missing the key (absent score, invalid timestamp) sort after all items that have it,
/// in both directions. This differs from the backend's SQLite ordering for ascending sorts,
/// where NULL scores come first.
pub fn sort_items(items: &mut [RssItem], order_by: OrderBy, descending: bool) {
    items.sort_by(|a, b| {
        directed(order_by.compare(a, b), descending)
            .then_with(|| directed(OrderBy::Published.compare(a, b), true))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::RssItemInit;

    fn item(uuid: &str, published: &str, llm: Option<f64>, relevance: Option<f64>) -> RssItem {
        RssItem::new(RssItemInit {
            uuid: uuid.to_string(),
            title: format!("title {uuid}"),
            link: format!("https://example.org/{uuid}"),
            summary: String::new(),
            source: "arXiv".to_string(),
            published: published.to_string(),
            llm_score: llm,
            relevance_score: relevance,
            ..Default::default()
        })
    }

    fn uuids(items: &[RssItem]) -> Vec<&str> {
        items.iter().map(|i| i.uuid.as_str()).collect()
    }

    #[test]
    fn parses_backend_field_names() {
        assert_eq!("llm_score".parse::<OrderBy>().unwrap(), OrderBy::LlmScore);
        assert_eq!("relevance_score".parse::<OrderBy>().unwrap(), OrderBy::RelevanceScore);
        assert_eq!(" published ".parse::<OrderBy>().unwrap(), OrderBy::Published);
        assert!(matches!(
            "title".parse::<OrderBy>(),
            Err(ModelError::UnknownOrderBy(f)) if f == "title"
        ));
        assert_eq!(OrderBy::default().to_string(), "llm_score");
    }

    #[test]
    fn other_item_fields_are_not_orderings() {
        for field in ["uuid", "source", "authors", "LLM_SCORE", ""] {
            assert!(
                matches!(field.parse::<OrderBy>(), Err(ModelError::UnknownOrderBy(_))),
                "{field:?} should be rejected"
            );
        }
    }

    #[test]
    fn descending_score_puts_absent_last() {
        let mut items = vec![
            item("a", "2024-01-01", Some(3.0), None),
            item("b", "2024-01-02", None, None),
            item("c", "2024-01-03", Some(9.5), None),
            item("d", "2024-01-04", Some(5.0), None),
        ];
        sort_items(&mut items, OrderBy::LlmScore, true);
        assert_eq!(uuids(&items), ["c", "d", "a", "b"]);
    }

    #[test]
    fn ascending_score_still_puts_absent_last() {
        let mut items = vec![
            item("a", "2024-01-01", None, Some(0.4)),
            item("b", "2024-01-02", None, None),
            item("c", "2024-01-03", None, Some(0.1)),
        ];
        sort_items(&mut items, OrderBy::RelevanceScore, false);
        assert_eq!(uuids(&items), ["c", "a", "b"]);
    }

    #[test]
    fn ties_fall_back_to_newest_first() {
        let mut items = vec![
            item("old", "2023-12-31", Some(7.0), None),
            item("bad", "not-a-date", Some(7.0), None),
            item("new", "2024-02-01", Some(7.0), None),
        ];
        sort_items(&mut items, OrderBy::LlmScore, true);
        assert_eq!(uuids(&items), ["new", "old", "bad"]);
    }

    #[test]
    fn orders_by_published() {
        let mut items = vec![
            item("mid", "2024-01-15T00:00:00Z", None, None),
            item("bad", "???", None, None),
            item("early", "Mon, 01 Jan 2024 00:00:00 GMT", None, None),
            item("late", "2024-02-01", None, None),
        ];
        sort_items(&mut items, OrderBy::Published, false);
        assert_eq!(uuids(&items), ["early", "mid", "late", "bad"]);
        sort_items(&mut items, OrderBy::Published, true);
        assert_eq!(uuids(&items), ["late", "mid", "early", "bad"]);
    }
}
