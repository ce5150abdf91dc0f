use std::path::PathBuf;

use chrono::{DateTime, Utc};
use feed_model::{default_window, parse_time_bound, OrderBy, PublishedPolicy};

use crate::error::AppError;

const DEFAULT_MAX_NUMBER: usize = 100;

/// Configuration loaded explicitly from environment variables.
///
/// Malformed values are rejected rather than replaced with defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Payload file to read. `None` reads stdin.
    pub input: Option<PathBuf>,
    /// Sources to keep. Empty keeps every source.
    pub sources: Vec<String>,
    /// Inclusive `published` window.
    pub since: DateTime<Utc>,
    pub until: DateTime<Utc>,
    pub order_by: OrderBy,
    pub descending: bool,
    /// Maximum number of items printed.
    pub max_number: usize,
    pub policy: PublishedPolicy,
}

impl Config {
    /// Optional:
    /// - `FEED_INSPECT_INPUT`: payload path (a command-line path takes precedence)
    /// - `FEED_INSPECT_JOURNAL`: comma-separated source names to keep (default: all)
    /// - `FEED_INSPECT_SINCE`: `YYYY-MM-DD`, `YYYY-MM`, days ago, or Unix seconds (default: 7 days ago)
    /// - `FEED_INSPECT_UNTIL`: same forms as `FEED_INSPECT_SINCE` (default: now)
    /// - `FEED_INSPECT_ORDER_BY`: `llm_score` (default), `relevance_score` or `published`
    /// - `FEED_INSPECT_DESC`: `true` (default) or `false`
    /// - `FEED_INSPECT_MAX_NUMBER`: positive integer (default: 100)
    /// - `FEED_INSPECT_STRICT`: `true` rejects payloads with unparseable timestamps (default: `false`)
    pub fn from_env(arg_input: Option<String>) -> Result<Self, AppError> {
        Self::from_vars(arg_input, Utc::now(), |key| std::env::var(key).ok())
    }

    pub fn from_vars(
        arg_input: Option<String>,
        now: DateTime<Utc>,
        var: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, AppError> {
        let input = arg_input
            .or_else(|| var("FEED_INSPECT_INPUT"))
            .filter(|p| !p.is_empty() && p != "-")
            .map(PathBuf::from);

        let sources = var("FEED_INSPECT_JOURNAL")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        let (default_since, default_until) = default_window(now);
        let since = parse_bound("FEED_INSPECT_SINCE", var("FEED_INSPECT_SINCE"), now)?
            .unwrap_or(default_since);
        let until = parse_bound("FEED_INSPECT_UNTIL", var("FEED_INSPECT_UNTIL"), now)?
            .unwrap_or(default_until);

        let order_by = match var("FEED_INSPECT_ORDER_BY") {
            Some(raw) => raw
                .parse::<OrderBy>()
                .map_err(|e| AppError::Config(format!("FEED_INSPECT_ORDER_BY: {e}")))?,
            None => OrderBy::default(),
        };

        let descending = parse_bool("FEED_INSPECT_DESC", var("FEED_INSPECT_DESC"), true)?;

        let max_number = match var("FEED_INSPECT_MAX_NUMBER") {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|&n| n > 0)
                .ok_or_else(|| {
                    AppError::Config(format!(
                        "FEED_INSPECT_MAX_NUMBER must be a positive integer, got {raw:?}"
                    ))
                })?,
            None => DEFAULT_MAX_NUMBER,
        };

        let policy = if parse_bool("FEED_INSPECT_STRICT", var("FEED_INSPECT_STRICT"), false)? {
            PublishedPolicy::Strict
        } else {
            PublishedPolicy::Lenient
        };

        Ok(Self {
            input,
            sources,
            since,
            until,
            order_by,
            descending,
            max_number,
            policy,
        })
    }
}

fn parse_bound(
    key: &str,
    raw: Option<String>,
    now: DateTime<Utc>,
) -> Result<Option<DateTime<Utc>>, AppError> {
    raw.map(|raw| parse_time_bound(&raw, now))
        .transpose()
        .map_err(|e| AppError::Config(format!("{key}: {e}")))
}

fn parse_bool(key: &str, raw: Option<String>, default: bool) -> Result<bool, AppError> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        _ => Err(AppError::Config(format!("{key} must be true or false, got {raw:?}"))),
    }
}
