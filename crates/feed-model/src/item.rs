use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

use crate::error::ModelError;
use crate::published::{parse_published, Published};

/// Construction input for [`RssItem`], in the shape the feed backend returns.
///
/// Optional keys may be missing or `null`; both mean absent. Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, JsonSchema)]
pub struct RssItemInit {
    /// Unique identifier of the item, e.g. a hex UUID.
    pub uuid: String,
    pub title: String,
    /// Article URL.
    pub link: String,
    pub summary: String,
    /// Display name of the feed the item came from, e.g. "arXiv".
    pub source: String,
    /// Publication time as a date/time string, e.g. "2024-01-01T00:00:00Z".
    ///
    /// `null` is read as an empty string, which re-encoded invalid dates produce.
    #[serde(deserialize_with = "string_or_null")]
    #[schemars(with = "String")]
    pub published: String,
    #[serde(default)]
    pub authors: Option<String>,
    #[serde(default)]
    pub affiliation: Option<String>,
    /// Free-text assessment written by the scoring model.
    #[serde(default)]
    pub llm_comments: Option<String>,
    /// Relevance score assigned by the scoring model.
    #[serde(default)]
    pub llm_score: Option<f64>,
    /// Final relevance score used for ranking.
    #[serde(default)]
    pub relevance_score: Option<f64>,
}

fn string_or_null<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// One feed entry with optional relevance annotations.
///
/// A passive carrier: fields are public and there are no mutation methods. Uniqueness
/// of `uuid` within a collection is up to whoever holds the collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RssItemInit")]
pub struct RssItem {
    pub uuid: String,
    pub title: String,
    pub link: String,
    pub summary: String,
    pub source: String,
    pub published: Published,
    pub authors: Option<String>,
    pub affiliation: Option<String>,
    pub llm_comments: Option<String>,
    pub llm_score: Option<f64>,
    pub relevance_score: Option<f64>,
}

impl RssItem {
    /// Build an item, storing `Published::Invalid` if `published` does not parse.
    pub fn new(init: RssItemInit) -> Self {
        let published = Published::parse(&init.published);
        if !published.is_valid() {
            warn!(
                uuid = %init.uuid,
                input = %init.published,
                "unparseable published timestamp, storing invalid date"
            );
        }
        Self::assemble(init, published)
    }

    /// Build an item, failing if `published` does not parse.
    pub fn try_new(init: RssItemInit) -> Result<Self, ModelError> {
        let published = Published::At(parse_published(&init.published)?);
        Ok(Self::assemble(init, published))
    }

    fn assemble(init: RssItemInit, published: Published) -> Self {
        Self {
            uuid: init.uuid,
            title: init.title,
            link: init.link,
            summary: init.summary,
            source: init.source,
            published,
            authors: init.authors,
            affiliation: init.affiliation,
            llm_comments: init.llm_comments,
            llm_score: init.llm_score,
            relevance_score: init.relevance_score,
        }
    }
}

impl From<RssItemInit> for RssItem {
    fn from(init: RssItemInit) -> Self {
        RssItem::new(init)
    }
}
