//! Tweet commands: post and delete

#![allow(clippy::result_large_err)]

use std::time::Instant;

use rusqlite::Connection;
use uuid::Uuid;
use warbler_core::model::Tweet;
use warbler_core::rules::validation;
use warbler_core::{log_op_end, log_op_error, log_op_start, WarblerError};
use warbler_store::errors::Result;
use warbler_store::repo::{TweetRepo, UserRepo};

/// Post a new tweet
///
/// The author must exist; the body is trimmed and length-checked.
pub fn post_tweet(conn: &Connection, user_id: &str, body: &str) -> Result<Tweet> {
    let start = Instant::now();
    log_op_start!("post_tweet", user_id = user_id);

    let result = (|| -> Result<Tweet> {
        let body = validation::validate_tweet_body(body)?;

        if UserRepo::get_user(conn, user_id)?.is_none() {
            return Err(WarblerError::UserNotFound {
                user_id: user_id.to_string(),
            }
            .into());
        }

        let tweet = Tweet::new(Uuid::now_v7().to_string(), user_id.to_string(), body);
        TweetRepo::persist_tweet(conn, &tweet)?;
        Ok(tweet)
    })();

    match &result {
        Ok(tweet) => {
            log_op_end!(
                "post_tweet",
                duration_ms = start.elapsed().as_millis() as u64,
                tweet_id = tweet.id.as_str()
            );
        }
        Err(e) => {
            log_op_error!(
                "post_tweet",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
        }
    }

    result
}

/// Delete a tweet
///
/// Only the author may delete. Likes and retweets cascade.
pub fn delete_tweet(conn: &Connection, tweet_id: &str, user_id: &str) -> Result<()> {
    let start = Instant::now();
    log_op_start!("delete_tweet", tweet_id = tweet_id, user_id = user_id);

    let result = (|| -> Result<()> {
        let tweet = TweetRepo::get_tweet(conn, tweet_id)?.ok_or_else(|| {
            WarblerError::TweetNotFound {
                tweet_id: tweet_id.to_string(),
            }
        })?;

        if !tweet.is_authored_by(user_id) {
            return Err(WarblerError::NotTweetAuthor {
                user_id: user_id.to_string(),
                tweet_id: tweet_id.to_string(),
            }
            .into());
        }

        TweetRepo::delete_tweet(conn, tweet_id)?;
        Ok(())
    })();

    match &result {
        Ok(_) => {
            log_op_end!(
                "delete_tweet",
                duration_ms = start.elapsed().as_millis() as u64
            );
        }
        Err(e) => {
            log_op_error!(
                "delete_tweet",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
        }
    }

    result
}
