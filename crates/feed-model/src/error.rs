/// Error types for feed item construction and payload handling.
///
/// Construction itself is permissive: only the strict paths (`RssItem::try_new`,
/// `PublishedPolicy::Strict`) and payload decoding ever return these. Binaries
/// should define their own error type and wrap `ModelError` via `#[from]`.

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("invalid published timestamp: {input:?}")]
    InvalidPublished { input: String },

    #[error("item {index} (uuid {uuid:?}) has invalid published timestamp: {input:?}")]
    InvalidItem {
        index: usize,
        uuid: String,
        input: String,
    },

    #[error("invalid payload JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid time bound {0:?}: expected YYYY-MM-DD, YYYY-MM, a day count or a Unix timestamp")]
    InvalidTimeBound(String),

    #[error("unknown order_by field: {0}")]
    UnknownOrderBy(String),
}
