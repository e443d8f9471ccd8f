use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A short text post owned by one user
///
/// Bodies are trimmed before validation and limited to `MAX_TWEET_LEN`
/// characters. Tweets are immutable after posting; `updated_at` exists for
/// schema symmetry and future moderation tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tweet {
    /// Unique identifier for this tweet (UUID v7)
    pub id: String,

    /// The user who authored this tweet
    pub user_id: String,

    /// Tweet text, 1..=280 chars after trimming
    pub body: String,

    /// Timestamp when this tweet was posted
    pub created_at: DateTime<Utc>,

    /// Timestamp when this tweet was last updated
    pub updated_at: DateTime<Utc>,
}

impl Tweet {
    /// Create a new Tweet with the given ID, author, and body
    pub fn new(id: String, user_id: String, body: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            user_id,
            body,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check whether the given user authored this tweet
    pub fn is_authored_by(&self, user_id: &str) -> bool {
        self.user_id == user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tweet() {
        let tweet = Tweet::new(
            "tweet-1".to_string(),
            "user-1".to_string(),
            "hello world".to_string(),
        );

        assert_eq!(tweet.id, "tweet-1");
        assert_eq!(tweet.user_id, "user-1");
        assert_eq!(tweet.body, "hello world");
        assert!(tweet.is_authored_by("user-1"));
        assert!(!tweet.is_authored_by("user-2"));
    }
}
