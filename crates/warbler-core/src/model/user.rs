use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered account
///
/// Usernames are unique across the system and immutable after sign-up;
/// display name, bio, and avatar are free-form profile fields. The password
/// is stored only as an argon2id PHC hash string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for this user (UUID v7)
    pub id: String,

    /// Unique handle, lowercase `[a-z0-9_]`, 1..=30 chars
    pub username: String,

    /// Human-readable display name
    pub display_name: String,

    /// Optional profile bio (<=160 chars)
    pub bio: Option<String>,

    /// Optional avatar URL
    pub avatar_url: Option<String>,

    /// argon2id PHC string; never serialized to API responses
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Timestamp when this user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the profile was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new User with the given ID, handle, display name, and password hash
    ///
    /// # Returns
    /// A new User with empty bio/avatar and current timestamps
    pub fn new(id: String, username: String, display_name: String, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            username,
            display_name,
            bio: None,
            avatar_url: None,
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check whether this user has filled in a bio
    pub fn has_bio(&self) -> bool {
        self.bio.as_deref().is_some_and(|b| !b.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user() {
        let user = User::new(
            "user-1".to_string(),
            "alice".to_string(),
            "Alice".to_string(),
            "$argon2id$stub".to_string(),
        );

        assert_eq!(user.id, "user-1");
        assert_eq!(user.username, "alice");
        assert_eq!(user.display_name, "Alice");
        assert!(user.bio.is_none());
        assert!(user.avatar_url.is_none());
        assert!(!user.has_bio());
        assert_eq!(user.created_at, user.updated_at);
    }

    #[test]
    fn test_password_hash_not_serialized() {
        let user = User::new(
            "user-1".to_string(),
            "alice".to_string(),
            "Alice".to_string(),
            "$argon2id$stub".to_string(),
        );

        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("password_hash"));
        assert!(!json.contains("$argon2id$stub"));
    }

    #[test]
    fn test_has_bio_ignores_empty_string() {
        let mut user = User::new(
            "user-1".to_string(),
            "alice".to_string(),
            "Alice".to_string(),
            "h".to_string(),
        );
        user.bio = Some(String::new());
        assert!(!user.has_bio());

        user.bio = Some("hello".to_string());
        assert!(user.has_bio());
    }
}
