use feed_model::{OrderBy, RssItem};

/// One tab-separated line: score, published, source, title.
///
/// The score column shows the score `order_by` ranks by, or `-` when it is absent or
/// the ordering is by date.
pub fn render_line(item: &RssItem, order_by: OrderBy) -> String {
    let score = order_by
        .score(item)
        .map_or_else(|| "-".to_string(), |s| format!("{s:.2}"));
    format!(
        "{score}\t{}\t{}\t{}",
        item.published,
        item.source,
        single_line(&item.title)
    )
}

fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use feed_model::RssItemInit;

    use super::*;

    fn item(published: &str, llm_score: Option<f64>) -> RssItem {
        RssItem::new(RssItemInit {
            uuid: "a1".to_string(),
            title: "Attention\n  is all\tyou need".to_string(),
            link: "https://arxiv.org/abs/1706.03762".to_string(),
            summary: String::new(),
            source: "arXiv".to_string(),
            published: published.to_string(),
            llm_score,
            ..Default::default()
        })
    }

    #[test]
    fn renders_score_and_timestamp() {
        let line = render_line(&item("2017-06-12T00:00:00Z", Some(9.25)), OrderBy::LlmScore);
        assert_eq!(
            line,
            "9.25\t2017-06-12T00:00:00.000Z\tarXiv\tAttention is all you need"
        );
    }

    #[test]
    fn renders_placeholders_for_absent_values() {
        let line = render_line(&item("not-a-date", None), OrderBy::LlmScore);
        assert!(line.starts_with("-\tInvalid Date\t"), "got {line:?}");

        let line = render_line(&item("2017-06-12", Some(1.0)), OrderBy::Published);
        assert!(line.starts_with("-\t2017-06-12T00:00:00.000Z\t"), "got {line:?}");
    }
}
