//! Seed Format v1 schema
//!
//! Defines the JSON structure for seed import

use serde::{Deserialize, Serialize};

/// Top-level seed file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedV1 {
    /// Schema version (must be 1 for this format)
    pub schema_version: u32,

    /// Users to import
    #[serde(default)]
    pub users: Vec<SeedUser>,

    /// Tweets to import
    #[serde(default)]
    pub tweets: Vec<SeedTweet>,

    /// Follow edges to import
    #[serde(default)]
    pub follows: Vec<SeedFollow>,

    /// Likes to import
    #[serde(default)]
    pub likes: Vec<SeedEngagement>,

    /// Retweets to import
    #[serde(default)]
    pub retweets: Vec<SeedEngagement>,
}

/// User definition in seed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedUser {
    /// User ID (stable across imports)
    pub id: String,

    /// Unique handle
    pub username: String,

    /// Display name
    pub display_name: String,

    /// Optional bio
    #[serde(default)]
    pub bio: Option<String>,

    /// Optional avatar URL
    #[serde(default)]
    pub avatar_url: Option<String>,

    /// Plaintext demo password; hashed on import, never stored
    pub password: String,
}

/// Tweet definition in seed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedTweet {
    /// Tweet ID (stable across imports)
    pub id: String,

    /// Author user ID (must appear in `users`, or already exist in the DB)
    pub user_id: String,

    /// Tweet body
    pub body: String,
}

/// Follow edge definition in seed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedFollow {
    /// Follower user ID
    pub follower_id: String,

    /// Followee user ID
    pub followee_id: String,
}

/// Like or retweet definition in seed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedEngagement {
    /// Acting user ID
    pub user_id: String,

    /// Target tweet ID
    pub tweet_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_seed() {
        let json = r#"{ "schema_version": 1 }"#;
        let seed: SeedV1 = serde_json::from_str(json).unwrap();
        assert_eq!(seed.schema_version, 1);
        assert!(seed.users.is_empty());
        assert!(seed.tweets.is_empty());
    }

    #[test]
    fn test_parse_full_seed() {
        let json = r#"{
            "schema_version": 1,
            "users": [
                { "id": "u1", "username": "alice", "display_name": "Alice", "password": "pw", "bio": "hi" }
            ],
            "tweets": [
                { "id": "t1", "user_id": "u1", "body": "hello" }
            ],
            "follows": [],
            "likes": [
                { "user_id": "u1", "tweet_id": "t1" }
            ]
        }"#;
        let seed: SeedV1 = serde_json::from_str(json).unwrap();
        assert_eq!(seed.users.len(), 1);
        assert_eq!(seed.users[0].bio.as_deref(), Some("hi"));
        assert!(seed.users[0].avatar_url.is_none());
        assert_eq!(seed.tweets.len(), 1);
        assert_eq!(seed.likes.len(), 1);
        assert!(seed.retweets.is_empty());
    }
}
