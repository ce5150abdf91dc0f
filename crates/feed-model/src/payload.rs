use tracing::{debug, warn};

use crate::error::ModelError;
use crate::item::{RssItem, RssItemInit};

/// What to do with an item whose `published` string does not parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PublishedPolicy {
    /// Keep the item with `Published::Invalid`.
    #[default]
    Lenient,
    /// Reject the whole payload at the first such item.
    Strict,
}

/// Decode a JSON array of item objects, as returned by the feed backend's item list route.
pub fn decode_items(json: &str, policy: PublishedPolicy) -> Result<Vec<RssItem>, ModelError> {
    let inits: Vec<RssItemInit> = serde_json::from_str(json)?;
    debug!(count = inits.len(), ?policy, "decoding feed items");

    let items = match policy {
        PublishedPolicy::Lenient => inits.into_iter().map(RssItem::new).collect::<Vec<_>>(),
        PublishedPolicy::Strict => inits
            .into_iter()
            .enumerate()
            .map(|(index, init)| {
                let (uuid, input) = (init.uuid.clone(), init.published.clone());
                RssItem::try_new(init).map_err(|_| ModelError::InvalidItem { index, uuid, input })
            })
            .collect::<Result<Vec<_>, _>>()?,
    };

    let invalid = items.iter().filter(|i| !i.published.is_valid()).count();
    if invalid > 0 {
        warn!(invalid, total = items.len(), "payload contains invalid published timestamps");
    }

    Ok(items)
}

/// Encode items back to a JSON array. Absent fields are written as `null`.
pub fn encode_items(items: &[RssItem]) -> Result<String, ModelError> {
    Ok(serde_json::to_string(items)?)
}
