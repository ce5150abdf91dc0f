use chrono::{DateTime, Duration, Utc};

use crate::error::ModelError;
use crate::item::RssItem;
use crate::published::parse_partial_date;

/// Bare numbers below this are a day count, anything larger is a Unix timestamp.
const DAY_COUNT_LIMIT: i64 = 100_000_000;

/// Span used when no `since` bound is given, matching the backend's item list route.
pub const DEFAULT_WINDOW_DAYS: i64 = 7;

/// Parse a `time_since`/`time_until` bound the way the backend's item list route reads it.
///
/// Accepts `YYYY-MM-DD`, `YYYY-MM`, a day count relative to `now` (`7` = a week ago) or a
/// Unix timestamp in seconds. Dates are UTC midnight. Unlike the backend, anything else is
/// an error instead of falling back to the default window.
pub fn parse_time_bound(raw: &str, now: DateTime<Utc>) -> Result<DateTime<Utc>, ModelError> {
    let s = raw.trim();
    let invalid = || ModelError::InvalidTimeBound(raw.to_string());

    if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
        let n: i64 = s.parse().map_err(|_| invalid())?;
        return if n < DAY_COUNT_LIMIT {
            now.checked_sub_signed(Duration::days(n)).ok_or_else(invalid)
        } else {
            DateTime::from_timestamp(n, 0).ok_or_else(invalid)
        };
    }

    // Year-only strings are day counts above, so only month and day precision reach here.
    parse_partial_date(s)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc())
        .ok_or_else(invalid)
}

/// The backend's default window: the last `DEFAULT_WINDOW_DAYS` days up to `now`.
pub fn default_window(now: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
    (now - Duration::days(DEFAULT_WINDOW_DAYS), now)
}

/// Keep items whose `source` is one of `sources` (all sources if empty) and whose
/// `published` lies within `since..=until`.
///
/// Items with an invalid `published` never match a bound.
pub fn filter_items(
    items: Vec<RssItem>,
    sources: &[String],
    since: Option<DateTime<Utc>>,
    until: Option<DateTime<Utc>>,
) -> Vec<RssItem> {
    items
        .into_iter()
        .filter(|item| sources.is_empty() || sources.iter().any(|s| *s == item.source))
        .filter(|item| {
            if since.is_none() && until.is_none() {
                return true;
            }
            let Some(at) = item.published.instant() else {
                return false;
            };
            since.map_or(true, |s| at >= s) && until.map_or(true, |u| at <= u)
        })
        .collect()
}
