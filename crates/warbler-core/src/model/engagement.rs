//! Junction-table models: follows, likes, retweets
//!
//! Each of these is a row in a uniqueness-constrained join table. The
//! relational schema is the source of truth for the at-most-once invariants;
//! these structs are the hydrated form the engine and API work with.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A directed edge from one user to another
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Follow {
    /// The user doing the following
    pub follower_id: String,

    /// The user being followed
    pub followee_id: String,

    /// Timestamp when the edge was created
    pub created_at: DateTime<Utc>,
}

impl Follow {
    /// Create a new Follow edge with the current timestamp
    pub fn new(follower_id: String, followee_id: String) -> Self {
        Self {
            follower_id,
            followee_id,
            created_at: Utc::now(),
        }
    }

    /// A user may not follow themselves
    pub fn is_self_follow(&self) -> bool {
        self.follower_id == self.followee_id
    }
}

/// A user liking a tweet (at most once per pair)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Like {
    /// The user who liked
    pub user_id: String,

    /// The tweet that was liked
    pub tweet_id: String,

    /// Timestamp when the like was created
    pub created_at: DateTime<Utc>,
}

impl Like {
    /// Create a new Like with the current timestamp
    pub fn new(user_id: String, tweet_id: String) -> Self {
        Self {
            user_id,
            tweet_id,
            created_at: Utc::now(),
        }
    }
}

/// A user retweeting a tweet (at most once per pair)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Retweet {
    /// The user who retweeted
    pub user_id: String,

    /// The tweet that was retweeted
    pub tweet_id: String,

    /// Timestamp when the retweet was created
    pub created_at: DateTime<Utc>,
}

impl Retweet {
    /// Create a new Retweet with the current timestamp
    pub fn new(user_id: String, tweet_id: String) -> Self {
        Self {
            user_id,
            tweet_id,
            created_at: Utc::now(),
        }
    }
}
