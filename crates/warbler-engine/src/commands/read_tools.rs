//! Result types and pagination helpers for the read-only query surface.
//!
//! This module defines the data structures returned by `apply_engine_query`
//! for all entity read, list, and stats queries. All types are plain data
//! containers with no I/O or mutation.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use warbler_store::repo::RecencyKey;

/// Default maximum items per paginated list query.
pub const DEFAULT_LIST_LIMIT: usize = 50;

/// Hard upper bound a caller-supplied limit is clamped to.
pub const MAX_LIST_LIMIT: usize = 100;

// ---------------------------------------------------------------------------
// Pagination
// ---------------------------------------------------------------------------

/// Options controlling a paginated list query.
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    /// Maximum number of items to return (defaults to `DEFAULT_LIST_LIMIT`).
    pub limit: Option<usize>,
    /// Opaque cursor from a previous response (base64-encoded sort key).
    pub cursor: Option<String>,
}

impl ListOptions {
    /// Effective limit, clamped to `MAX_LIST_LIMIT`.
    pub fn effective_limit(&self) -> usize {
        self.limit.unwrap_or(DEFAULT_LIST_LIMIT).min(MAX_LIST_LIMIT)
    }

    /// Decode the cursor to an after-key string.
    ///
    /// A malformed cursor decodes to `None`, which reads as "from the start".
    pub fn decode_cursor(&self) -> Option<String> {
        self.cursor.as_deref().and_then(decode_cursor)
    }

    /// Decode the cursor as a recency after-key (`micros:id`).
    pub fn decode_recency_cursor(&self) -> Option<RecencyKey> {
        self.decode_cursor().and_then(|raw| parse_recency_key(&raw))
    }
}

/// Encode a raw sort key as an opaque cursor.
pub fn encode_cursor(key: &str) -> String {
    URL_SAFE_NO_PAD.encode(key.as_bytes())
}

/// Decode an opaque cursor back to its sort key.
pub fn decode_cursor(cursor: &str) -> Option<String> {
    URL_SAFE_NO_PAD
        .decode(cursor.as_bytes())
        .ok()
        .and_then(|bytes| String::from_utf8(bytes).ok())
}

/// Build the raw sort key for a recency-ordered row.
pub fn recency_key(created_at_micros: i64, id: &str) -> String {
    format!("{}:{}", created_at_micros, id)
}

/// Parse a `micros:id` sort key.
fn parse_recency_key(raw: &str) -> Option<RecencyKey> {
    let (micros, id) = raw.split_once(':')?;
    let micros: i64 = micros.parse().ok()?;
    if id.is_empty() {
        return None;
    }
    Some((micros, id.to_string()))
}

/// A paginated page of results.
#[derive(Debug, Clone)]
pub struct Page<T> {
    /// Items in this page.
    pub items: Vec<T>,
    /// Opaque cursor for the next page; `None` when this is the last page.
    pub cursor: Option<String>,
    /// Whether more items may exist after this page.
    pub has_more: bool,
}

impl<T> Page<T> {
    /// Build a page from a raw over-fetched slice.
    ///
    /// `raw` should contain `limit + 1` items at most. If `raw.len() > limit`,
    /// the extra item is dropped and `has_more` is set to `true`.
    pub fn from_overshot(mut raw: Vec<T>, limit: usize, cursor_fn: impl Fn(&T) -> String) -> Self {
        let has_more = raw.len() > limit;
        if has_more {
            raw.truncate(limit);
        }
        let cursor = if has_more {
            raw.last().map(|item| encode_cursor(&cursor_fn(item)))
        } else {
            None
        };
        Page {
            items: raw,
            cursor,
            has_more,
        }
    }

    /// Map the page's items, keeping cursor and has_more.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            cursor: self.cursor,
            has_more: self.has_more,
        }
    }
}

// ---------------------------------------------------------------------------
// Stats
// ---------------------------------------------------------------------------

/// Result of a `UserStatsGet` query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStats {
    /// The user the stats describe.
    pub user_id: String,
    /// Number of tweets authored.
    pub tweet_count: i64,
    /// Number of users following this user.
    pub follower_count: i64,
    /// Number of users this user follows.
    pub following_count: i64,
}

/// Result of a `TweetStatsGet` query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TweetStats {
    /// The tweet the stats describe.
    pub tweet_id: String,
    /// Number of likes.
    pub like_count: i64,
    /// Number of retweets.
    pub retweet_count: i64,
}
