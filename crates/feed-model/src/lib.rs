pub mod error;
pub mod filter;
pub mod item;
pub mod order;
pub mod payload;
pub mod published;

pub use error::ModelError;
pub use filter::{default_window, filter_items, parse_time_bound};
pub use item::{RssItem, RssItemInit};
pub use order::{sort_items, OrderBy};
pub use payload::{decode_items, encode_items, PublishedPolicy};
pub use published::{parse_published, Published};
