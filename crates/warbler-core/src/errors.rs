use thiserror::Error;
use warbler_core_types::RequestId;

/// Result type alias using WarblerError
pub type Result<T> = std::result::Result<T, WarblerError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// This taxonomy provides a stable, structured classification of all errors
/// in the system. Each kind maps to a stable error code used for
/// programmatic handling, testing, and the GraphQL `extensions.code` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WbErrorKind {
    // Validation
    InvalidInput,
    InvalidUsername,
    InvalidDisplayName,
    InvalidBio,
    InvalidTweetBody,

    // Account
    UsernameTaken,
    InvalidCredentials,

    // Lookup
    UserNotFound,
    TweetNotFound,

    // Follow graph
    SelfFollow,
    AlreadyFollowing,
    NotFollowing,

    // Engagement
    AlreadyLiked,
    NotLiked,
    AlreadyRetweeted,
    NotRetweeted,

    // Authorization
    Forbidden,

    // Integration/IO
    ConstraintViolation,
    Persistence,
    Serialization,
    Io,

    // Internal
    Internal,
}

impl WbErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            WbErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            WbErrorKind::InvalidUsername => "ERR_INVALID_USERNAME",
            WbErrorKind::InvalidDisplayName => "ERR_INVALID_DISPLAY_NAME",
            WbErrorKind::InvalidBio => "ERR_INVALID_BIO",
            WbErrorKind::InvalidTweetBody => "ERR_INVALID_TWEET_BODY",
            WbErrorKind::UsernameTaken => "ERR_USERNAME_TAKEN",
            WbErrorKind::InvalidCredentials => "ERR_INVALID_CREDENTIALS",
            WbErrorKind::UserNotFound => "ERR_USER_NOT_FOUND",
            WbErrorKind::TweetNotFound => "ERR_TWEET_NOT_FOUND",
            WbErrorKind::SelfFollow => "ERR_SELF_FOLLOW",
            WbErrorKind::AlreadyFollowing => "ERR_ALREADY_FOLLOWING",
            WbErrorKind::NotFollowing => "ERR_NOT_FOLLOWING",
            WbErrorKind::AlreadyLiked => "ERR_ALREADY_LIKED",
            WbErrorKind::NotLiked => "ERR_NOT_LIKED",
            WbErrorKind::AlreadyRetweeted => "ERR_ALREADY_RETWEETED",
            WbErrorKind::NotRetweeted => "ERR_NOT_RETWEETED",
            WbErrorKind::Forbidden => "ERR_FORBIDDEN",
            WbErrorKind::ConstraintViolation => "ERR_CONSTRAINT_VIOLATION",
            WbErrorKind::Persistence => "ERR_PERSISTENCE",
            WbErrorKind::Serialization => "ERR_SERIALIZATION",
            WbErrorKind::Io => "ERR_IO",
            WbErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries a stable kind plus classification fields for programmatic
/// handling and rich context for debugging. Store and engine layers return
/// this type; the API layer maps `code()` into GraphQL extensions.
#[derive(Debug, Clone)]
pub struct WbError {
    kind: WbErrorKind,
    op: Option<String>,
    user_id: Option<String>,
    tweet_id: Option<String>,
    request_id: Option<RequestId>,
    message: String,
}

impl WbError {
    /// Create a new error with the specified kind
    pub fn new(kind: WbErrorKind) -> Self {
        Self {
            kind,
            op: None,
            user_id: None,
            tweet_id: None,
            request_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add user ID context
    pub fn with_user_id(mut self, id: impl Into<String>) -> Self {
        self.user_id = Some(id.into());
        self
    }

    /// Add tweet ID context
    pub fn with_tweet_id(mut self, id: impl Into<String>) -> Self {
        self.tweet_id = Some(id.into());
        self
    }

    /// Add request ID context
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> WbErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the user ID context, if any
    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    /// Get the tweet ID context, if any
    pub fn tweet_id(&self) -> Option<&str> {
        self.tweet_id.as_deref()
    }

    /// Get the request ID context, if any
    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for WbError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(user_id) = &self.user_id {
            write!(f, " (user_id: {})", user_id)?;
        }
        if let Some(tweet_id) = &self.tweet_id {
            write!(f, " (tweet_id: {})", tweet_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for WbError {}

// ========== End Error Facility ==========

/// Comprehensive error taxonomy for Warbler operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WarblerError {
    // ===== Lookup Errors =====
    /// User not found by ID
    #[error("User not found: {user_id}")]
    UserNotFound { user_id: String },

    /// User not found by username
    #[error("User not found: @{username}")]
    UserNotFoundByName { username: String },

    /// Tweet not found
    #[error("Tweet not found: {tweet_id}")]
    TweetNotFound { tweet_id: String },

    // ===== Account Errors =====
    /// Username is already registered
    #[error("Username is already taken: @{username}")]
    UsernameTaken { username: String },

    /// Login failed; deliberately does not say whether the user exists
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Password hashing or verification machinery failed
    #[error("Password hashing failed: {reason}")]
    PasswordHash { reason: String },

    // ===== Validation Errors =====
    /// Invalid username (empty, too long, or bad charset)
    #[error("Invalid username: {reason}")]
    InvalidUsername { reason: String },

    /// Invalid display name (empty or too long)
    #[error("Invalid display name: {reason}")]
    InvalidDisplayName { reason: String },

    /// Invalid bio (too long)
    #[error("Invalid bio: {reason}")]
    InvalidBio { reason: String },

    /// Invalid tweet body (empty after trimming, or too long)
    #[error("Invalid tweet body: {reason}")]
    InvalidTweetBody { reason: String },

    // ===== Follow Graph Errors =====
    /// A user may not follow themselves
    #[error("User {user_id} cannot follow themselves")]
    SelfFollow { user_id: String },

    /// Follow edge already exists
    #[error("User {follower_id} already follows {followee_id}")]
    AlreadyFollowing {
        follower_id: String,
        followee_id: String,
    },

    /// Follow edge does not exist
    #[error("User {follower_id} does not follow {followee_id}")]
    NotFollowing {
        follower_id: String,
        followee_id: String,
    },

    // ===== Engagement Errors =====
    /// Like row already exists for this (user, tweet) pair
    #[error("User {user_id} already liked tweet {tweet_id}")]
    AlreadyLiked { user_id: String, tweet_id: String },

    /// Like row does not exist
    #[error("User {user_id} has not liked tweet {tweet_id}")]
    NotLiked { user_id: String, tweet_id: String },

    /// Retweet row already exists for this (user, tweet) pair
    #[error("User {user_id} already retweeted tweet {tweet_id}")]
    AlreadyRetweeted { user_id: String, tweet_id: String },

    /// Retweet row does not exist
    #[error("User {user_id} has not retweeted tweet {tweet_id}")]
    NotRetweeted { user_id: String, tweet_id: String },

    // ===== Authorization Errors =====
    /// Only the author may delete a tweet
    #[error("User {user_id} is not the author of tweet {tweet_id}")]
    NotTweetAuthor { user_id: String, tweet_id: String },
}

impl WarblerError {
    /// Map this domain error to its structured kind
    pub fn kind(&self) -> WbErrorKind {
        match self {
            WarblerError::UserNotFound { .. } | WarblerError::UserNotFoundByName { .. } => {
                WbErrorKind::UserNotFound
            }
            WarblerError::TweetNotFound { .. } => WbErrorKind::TweetNotFound,
            WarblerError::UsernameTaken { .. } => WbErrorKind::UsernameTaken,
            WarblerError::InvalidCredentials => WbErrorKind::InvalidCredentials,
            WarblerError::PasswordHash { .. } => WbErrorKind::Internal,
            WarblerError::InvalidUsername { .. } => WbErrorKind::InvalidUsername,
            WarblerError::InvalidDisplayName { .. } => WbErrorKind::InvalidDisplayName,
            WarblerError::InvalidBio { .. } => WbErrorKind::InvalidBio,
            WarblerError::InvalidTweetBody { .. } => WbErrorKind::InvalidTweetBody,
            WarblerError::SelfFollow { .. } => WbErrorKind::SelfFollow,
            WarblerError::AlreadyFollowing { .. } => WbErrorKind::AlreadyFollowing,
            WarblerError::NotFollowing { .. } => WbErrorKind::NotFollowing,
            WarblerError::AlreadyLiked { .. } => WbErrorKind::AlreadyLiked,
            WarblerError::NotLiked { .. } => WbErrorKind::NotLiked,
            WarblerError::AlreadyRetweeted { .. } => WbErrorKind::AlreadyRetweeted,
            WarblerError::NotRetweeted { .. } => WbErrorKind::NotRetweeted,
            WarblerError::NotTweetAuthor { .. } => WbErrorKind::Forbidden,
        }
    }
}

impl From<WarblerError> for WbError {
    fn from(err: WarblerError) -> Self {
        let mut wb = WbError::new(err.kind()).with_message(err.to_string());
        match &err {
            WarblerError::UserNotFound { user_id }
            | WarblerError::SelfFollow { user_id } => {
                wb = wb.with_user_id(user_id.clone());
            }
            WarblerError::TweetNotFound { tweet_id } => {
                wb = wb.with_tweet_id(tweet_id.clone());
            }
            WarblerError::AlreadyFollowing { follower_id, .. }
            | WarblerError::NotFollowing { follower_id, .. } => {
                wb = wb.with_user_id(follower_id.clone());
            }
            WarblerError::AlreadyLiked { user_id, tweet_id }
            | WarblerError::NotLiked { user_id, tweet_id }
            | WarblerError::AlreadyRetweeted { user_id, tweet_id }
            | WarblerError::NotRetweeted { user_id, tweet_id }
            | WarblerError::NotTweetAuthor { user_id, tweet_id } => {
                wb = wb.with_user_id(user_id.clone()).with_tweet_id(tweet_id.clone());
            }
            _ => {}
        }
        wb
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_stable() {
        assert_eq!(WbErrorKind::UserNotFound.code(), "ERR_USER_NOT_FOUND");
        assert_eq!(WbErrorKind::SelfFollow.code(), "ERR_SELF_FOLLOW");
        assert_eq!(WbErrorKind::AlreadyLiked.code(), "ERR_ALREADY_LIKED");
        assert_eq!(WbErrorKind::Persistence.code(), "ERR_PERSISTENCE");
    }

    #[test]
    fn test_domain_error_maps_to_kind() {
        let err = WarblerError::AlreadyFollowing {
            follower_id: "u1".to_string(),
            followee_id: "u2".to_string(),
        };
        assert_eq!(err.kind(), WbErrorKind::AlreadyFollowing);

        let wb: WbError = err.into();
        assert_eq!(wb.code(), "ERR_ALREADY_FOLLOWING");
        assert_eq!(wb.user_id(), Some("u1"));
    }

    #[test]
    fn test_invalid_credentials_hides_detail() {
        let msg = WarblerError::InvalidCredentials.to_string();
        assert!(!msg.contains("user"));
        assert!(!msg.to_lowercase().contains("exist"));
    }

    #[test]
    fn test_structured_error_display() {
        let err = WbError::new(WbErrorKind::TweetNotFound)
            .with_op("tweet_get")
            .with_tweet_id("t-1")
            .with_message("no such tweet");
        let s = err.to_string();
        assert!(s.contains("ERR_TWEET_NOT_FOUND"));
        assert!(s.contains("tweet_get"));
        assert!(s.contains("t-1"));
    }

    #[test]
    fn test_builder_context() {
        let err = WbError::new(WbErrorKind::Forbidden)
            .with_user_id("u-9")
            .with_tweet_id("t-3");
        assert_eq!(err.user_id(), Some("u-9"));
        assert_eq!(err.tweet_id(), Some("t-3"));
        assert_eq!(err.kind(), WbErrorKind::Forbidden);
    }
}
