//! Engine-level mutation commands.
//!
//! `apply_engine_command` is the single entry point for all writes. Every
//! variant resolves to one of the command functions in `user`, `tweet`, or
//! `engagement`.

#![allow(clippy::result_large_err)]

use rusqlite::Connection;
use warbler_core::model::{Follow, Like, Retweet, Tweet, User};
use warbler_core_types::Sensitive;
use warbler_store::errors::Result;

/// Mutations supported by the engine.
#[derive(Debug)]
pub enum EngineCommand {
    // ── Account ──────────────────────────────────────────────────────────────
    /// Register a new user.
    SignUp {
        username: String,
        display_name: String,
        password: Sensitive<String>,
    },
    /// Verify credentials and return the user.
    LogIn {
        username: String,
        password: Sensitive<String>,
    },
    /// Partially update profile fields.
    UpdateProfile {
        user_id: String,
        display_name: Option<String>,
        bio: Option<String>,
        avatar_url: Option<String>,
    },
    /// Delete a user (tweets and engagement cascade).
    DeleteUser { user_id: String },

    // ── Tweets ───────────────────────────────────────────────────────────────
    /// Post a new tweet.
    PostTweet { user_id: String, body: String },
    /// Delete a tweet (author only).
    DeleteTweet { tweet_id: String, user_id: String },

    // ── Follow graph ─────────────────────────────────────────────────────────
    /// Create a follow edge.
    Follow {
        follower_id: String,
        followee_id: String,
    },
    /// Remove a follow edge.
    Unfollow {
        follower_id: String,
        followee_id: String,
    },

    // ── Engagement ───────────────────────────────────────────────────────────
    /// Like a tweet.
    Like { user_id: String, tweet_id: String },
    /// Remove a like.
    Unlike { user_id: String, tweet_id: String },
    /// Retweet a tweet.
    Retweet { user_id: String, tweet_id: String },
    /// Remove a retweet.
    Unretweet { user_id: String, tweet_id: String },
}

/// Result of applying an engine command.
#[derive(Debug, Clone)]
pub enum EngineCommandResult {
    /// A user row (SignUp, LogIn, UpdateProfile).
    User(User),
    /// A tweet row (PostTweet).
    Tweet(Tweet),
    /// A follow edge (Follow).
    Follow(Follow),
    /// A like row (Like).
    Like(Like),
    /// A retweet row (Retweet).
    Retweet(Retweet),
    /// The command removed a row (deletes and un-* commands).
    Removed,
}

/// Apply an engine command.
pub fn apply_engine_command(cmd: EngineCommand, conn: &mut Connection) -> Result<EngineCommandResult> {
    match cmd {
        EngineCommand::SignUp {
            username,
            display_name,
            password,
        } => {
            let user = crate::commands::user::sign_up(conn, &username, &display_name, &password)?;
            Ok(EngineCommandResult::User(user))
        }
        EngineCommand::LogIn { username, password } => {
            let user = crate::commands::user::log_in(conn, &username, &password)?;
            Ok(EngineCommandResult::User(user))
        }
        EngineCommand::UpdateProfile {
            user_id,
            display_name,
            bio,
            avatar_url,
        } => {
            let user = crate::commands::user::update_profile(
                conn,
                &user_id,
                display_name.as_deref(),
                bio.as_deref(),
                avatar_url.as_deref(),
            )?;
            Ok(EngineCommandResult::User(user))
        }
        EngineCommand::DeleteUser { user_id } => {
            crate::commands::user::delete_user(conn, &user_id)?;
            Ok(EngineCommandResult::Removed)
        }
        EngineCommand::PostTweet { user_id, body } => {
            let tweet = crate::commands::tweet::post_tweet(conn, &user_id, &body)?;
            Ok(EngineCommandResult::Tweet(tweet))
        }
        EngineCommand::DeleteTweet { tweet_id, user_id } => {
            crate::commands::tweet::delete_tweet(conn, &tweet_id, &user_id)?;
            Ok(EngineCommandResult::Removed)
        }
        EngineCommand::Follow {
            follower_id,
            followee_id,
        } => {
            let edge = crate::commands::engagement::follow(conn, &follower_id, &followee_id)?;
            Ok(EngineCommandResult::Follow(edge))
        }
        EngineCommand::Unfollow {
            follower_id,
            followee_id,
        } => {
            crate::commands::engagement::unfollow(conn, &follower_id, &followee_id)?;
            Ok(EngineCommandResult::Removed)
        }
        EngineCommand::Like { user_id, tweet_id } => {
            let row = crate::commands::engagement::like(conn, &user_id, &tweet_id)?;
            Ok(EngineCommandResult::Like(row))
        }
        EngineCommand::Unlike { user_id, tweet_id } => {
            crate::commands::engagement::unlike(conn, &user_id, &tweet_id)?;
            Ok(EngineCommandResult::Removed)
        }
        EngineCommand::Retweet { user_id, tweet_id } => {
            let row = crate::commands::engagement::retweet(conn, &user_id, &tweet_id)?;
            Ok(EngineCommandResult::Retweet(row))
        }
        EngineCommand::Unretweet { user_id, tweet_id } => {
            crate::commands::engagement::unretweet(conn, &user_id, &tweet_id)?;
            Ok(EngineCommandResult::Removed)
        }
    }
}
