//! Engagement commands: follow/unfollow, like/unlike, retweet/unretweet
//!
//! Each command pre-checks the rows it touches so callers get precise error
//! codes; the schema's unique constraints remain the backstop underneath.

#![allow(clippy::result_large_err)]

use std::time::Instant;

use rusqlite::Connection;
use warbler_core::model::{Follow, Like, Retweet};
use warbler_core::{log_op_end, log_op_error, log_op_start, WarblerError};
use warbler_store::errors::Result;
use warbler_store::repo::{EngagementRepo, FollowRepo, TweetRepo, UserRepo};

fn require_user(conn: &Connection, user_id: &str) -> Result<()> {
    if UserRepo::get_user(conn, user_id)?.is_none() {
        return Err(WarblerError::UserNotFound {
            user_id: user_id.to_string(),
        }
        .into());
    }
    Ok(())
}

fn require_tweet(conn: &Connection, tweet_id: &str) -> Result<()> {
    if TweetRepo::get_tweet(conn, tweet_id)?.is_none() {
        return Err(WarblerError::TweetNotFound {
            tweet_id: tweet_id.to_string(),
        }
        .into());
    }
    Ok(())
}

/// Create a follow edge
pub fn follow(conn: &Connection, follower_id: &str, followee_id: &str) -> Result<Follow> {
    let start = Instant::now();
    log_op_start!("follow", user_id = follower_id);

    let result = (|| -> Result<Follow> {
        if follower_id == followee_id {
            return Err(WarblerError::SelfFollow {
                user_id: follower_id.to_string(),
            }
            .into());
        }
        require_user(conn, follower_id)?;
        require_user(conn, followee_id)?;

        if FollowRepo::follow_exists(conn, follower_id, followee_id)? {
            return Err(WarblerError::AlreadyFollowing {
                follower_id: follower_id.to_string(),
                followee_id: followee_id.to_string(),
            }
            .into());
        }

        let edge = Follow::new(follower_id.to_string(), followee_id.to_string());
        FollowRepo::insert_follow(conn, &edge)?;
        Ok(edge)
    })();

    log_outcome("follow", &result, start);
    result
}

/// Remove a follow edge
pub fn unfollow(conn: &Connection, follower_id: &str, followee_id: &str) -> Result<()> {
    let start = Instant::now();
    log_op_start!("unfollow", user_id = follower_id);

    let result = (|| -> Result<()> {
        if !FollowRepo::delete_follow(conn, follower_id, followee_id)? {
            return Err(WarblerError::NotFollowing {
                follower_id: follower_id.to_string(),
                followee_id: followee_id.to_string(),
            }
            .into());
        }
        Ok(())
    })();

    log_outcome("unfollow", &result, start);
    result
}

/// Like a tweet
pub fn like(conn: &Connection, user_id: &str, tweet_id: &str) -> Result<Like> {
    let start = Instant::now();
    log_op_start!("like", user_id = user_id, tweet_id = tweet_id);

    let result = (|| -> Result<Like> {
        require_user(conn, user_id)?;
        require_tweet(conn, tweet_id)?;

        if EngagementRepo::like_exists(conn, user_id, tweet_id)? {
            return Err(WarblerError::AlreadyLiked {
                user_id: user_id.to_string(),
                tweet_id: tweet_id.to_string(),
            }
            .into());
        }

        let row = Like::new(user_id.to_string(), tweet_id.to_string());
        EngagementRepo::insert_like(conn, &row)?;
        Ok(row)
    })();

    log_outcome("like", &result, start);
    result
}

/// Remove a like
pub fn unlike(conn: &Connection, user_id: &str, tweet_id: &str) -> Result<()> {
    let start = Instant::now();
    log_op_start!("unlike", user_id = user_id, tweet_id = tweet_id);

    let result = (|| -> Result<()> {
        if !EngagementRepo::delete_like(conn, user_id, tweet_id)? {
            return Err(WarblerError::NotLiked {
                user_id: user_id.to_string(),
                tweet_id: tweet_id.to_string(),
            }
            .into());
        }
        Ok(())
    })();

    log_outcome("unlike", &result, start);
    result
}

/// Retweet a tweet
pub fn retweet(conn: &Connection, user_id: &str, tweet_id: &str) -> Result<Retweet> {
    let start = Instant::now();
    log_op_start!("retweet", user_id = user_id, tweet_id = tweet_id);

    let result = (|| -> Result<Retweet> {
        require_user(conn, user_id)?;
        require_tweet(conn, tweet_id)?;

        if EngagementRepo::retweet_exists(conn, user_id, tweet_id)? {
            return Err(WarblerError::AlreadyRetweeted {
                user_id: user_id.to_string(),
                tweet_id: tweet_id.to_string(),
            }
            .into());
        }

        let row = Retweet::new(user_id.to_string(), tweet_id.to_string());
        EngagementRepo::insert_retweet(conn, &row)?;
        Ok(row)
    })();

    log_outcome("retweet", &result, start);
    result
}

/// Remove a retweet
pub fn unretweet(conn: &Connection, user_id: &str, tweet_id: &str) -> Result<()> {
    let start = Instant::now();
    log_op_start!("unretweet", user_id = user_id, tweet_id = tweet_id);

    let result = (|| -> Result<()> {
        if !EngagementRepo::delete_retweet(conn, user_id, tweet_id)? {
            return Err(WarblerError::NotRetweeted {
                user_id: user_id.to_string(),
                tweet_id: tweet_id.to_string(),
            }
            .into());
        }
        Ok(())
    })();

    log_outcome("unretweet", &result, start);
    result
}

fn log_outcome<T>(op: &'static str, result: &Result<T>, start: Instant) {
    match result {
        Ok(_) => {
            log_op_end!(op, duration_ms = start.elapsed().as_millis() as u64);
        }
        Err(e) => {
            log_op_error!(
                op,
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
        }
    }
}
