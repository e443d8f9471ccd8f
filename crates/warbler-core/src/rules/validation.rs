//! Input validation for profile fields and tweet bodies
//!
//! All limits are enforced here, before anything reaches the store. The
//! relational schema repeats the structural invariants (uniqueness, foreign
//! keys); these checks exist to produce precise error codes.

use crate::errors::{Result, WarblerError};

/// Maximum tweet body length in characters (after trimming)
pub const MAX_TWEET_LEN: usize = 280;

/// Maximum username length in characters
pub const MAX_USERNAME_LEN: usize = 30;

/// Maximum display name length in characters
pub const MAX_DISPLAY_NAME_LEN: usize = 50;

/// Maximum bio length in characters
pub const MAX_BIO_LEN: usize = 160;

/// Validate a username: non-empty, <=30 chars, lowercase `[a-z0-9_]` only
///
/// # Errors
/// * `InvalidUsername` - empty, too long, or containing other characters
pub fn validate_username(username: &str) -> Result<()> {
    if username.is_empty() {
        return Err(WarblerError::InvalidUsername {
            reason: "username cannot be empty".to_string(),
        });
    }
    if username.chars().count() > MAX_USERNAME_LEN {
        return Err(WarblerError::InvalidUsername {
            reason: format!("username cannot exceed {} characters", MAX_USERNAME_LEN),
        });
    }
    if !username
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
    {
        return Err(WarblerError::InvalidUsername {
            reason: "username may only contain a-z, 0-9, and underscore".to_string(),
        });
    }
    Ok(())
}

/// Validate a display name: non-blank and <=50 chars
///
/// # Errors
/// * `InvalidDisplayName` - empty/whitespace-only or too long
pub fn validate_display_name(display_name: &str) -> Result<()> {
    if display_name.trim().is_empty() {
        return Err(WarblerError::InvalidDisplayName {
            reason: "display name cannot be empty or whitespace-only".to_string(),
        });
    }
    if display_name.chars().count() > MAX_DISPLAY_NAME_LEN {
        return Err(WarblerError::InvalidDisplayName {
            reason: format!(
                "display name cannot exceed {} characters",
                MAX_DISPLAY_NAME_LEN
            ),
        });
    }
    Ok(())
}

/// Validate a bio: <=160 chars (empty is allowed, it clears nothing)
///
/// # Errors
/// * `InvalidBio` - too long
pub fn validate_bio(bio: &str) -> Result<()> {
    if bio.chars().count() > MAX_BIO_LEN {
        return Err(WarblerError::InvalidBio {
            reason: format!("bio cannot exceed {} characters", MAX_BIO_LEN),
        });
    }
    Ok(())
}

/// Validate and normalize a tweet body
///
/// Leading/trailing whitespace is trimmed; the trimmed body must be
/// non-empty and at most `MAX_TWEET_LEN` characters.
///
/// # Returns
/// The trimmed body to store
///
/// # Errors
/// * `InvalidTweetBody` - empty after trimming or too long
pub fn validate_tweet_body(body: &str) -> Result<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Err(WarblerError::InvalidTweetBody {
            reason: "tweet body cannot be empty or whitespace-only".to_string(),
        });
    }
    if trimmed.chars().count() > MAX_TWEET_LEN {
        return Err(WarblerError::InvalidTweetBody {
            reason: format!("tweet body cannot exceed {} characters", MAX_TWEET_LEN),
        });
    }
    Ok(trimmed.to_string())
}
