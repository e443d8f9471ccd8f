//! SQLite repository for tweets
//!
//! Includes the timeline composition query: the union of a user's own tweets
//! and tweets by followed users, newest first.

#![allow(clippy::result_large_err)]

use crate::errors::{from_rusqlite, Result};
use crate::repo::RecencyKey;
use rusqlite::{Connection, OptionalExtension, Row};
use warbler_core::model::Tweet;

/// SQLite repository for the tweets table
pub struct TweetRepo;

/// Hydrate a Tweet from a full tweets row
///
/// Column order: id, user_id, body, created_at, updated_at
fn tweet_from_row(row: &Row<'_>) -> rusqlite::Result<Tweet> {
    let id: String = row.get(0)?;
    let user_id: String = row.get(1)?;
    let body: String = row.get(2)?;
    let created_at: i64 = row.get(3)?;
    let updated_at: i64 = row.get(4)?;

    let mut tweet = Tweet::new(id, user_id, body);
    tweet.created_at =
        chrono::DateTime::from_timestamp_micros(created_at).unwrap_or_else(chrono::Utc::now);
    tweet.updated_at =
        chrono::DateTime::from_timestamp_micros(updated_at).unwrap_or_else(chrono::Utc::now);

    Ok(tweet)
}

const TWEET_COLUMNS: &str = "id, user_id, body, created_at, updated_at";

impl TweetRepo {
    /// Persist a Tweet to the database
    pub fn persist_tweet(conn: &Connection, tweet: &Tweet) -> Result<()> {
        conn.execute(
            "INSERT INTO tweets (id, user_id, body, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5)
             ON CONFLICT(id) DO UPDATE SET
                body = excluded.body,
                updated_at = excluded.updated_at",
            rusqlite::params![
                tweet.id,
                tweet.user_id,
                tweet.body,
                tweet.created_at.timestamp_micros(),
                tweet.updated_at.timestamp_micros(),
            ],
        )
        .map_err(from_rusqlite)?;

        Ok(())
    }

    /// Get a Tweet by ID
    pub fn get_tweet(conn: &Connection, tweet_id: &str) -> Result<Option<Tweet>> {
        let mut stmt = conn
            .prepare(&format!(
                "SELECT {} FROM tweets WHERE id = ?",
                TWEET_COLUMNS
            ))
            .map_err(from_rusqlite)?;

        let result = stmt
            .query_row([tweet_id], tweet_from_row)
            .optional()
            .map_err(from_rusqlite)?;

        Ok(result)
    }

    /// Delete a Tweet by ID
    ///
    /// Likes and retweets cascade via foreign keys. Returns true if a row
    /// was deleted.
    pub fn delete_tweet(conn: &Connection, tweet_id: &str) -> Result<bool> {
        let rows = conn
            .execute("DELETE FROM tweets WHERE id = ?", [tweet_id])
            .map_err(from_rusqlite)?;

        Ok(rows > 0)
    }

    /// Count tweets authored by a user
    pub fn count_by_user(conn: &Connection, user_id: &str) -> Result<i64> {
        conn.query_row(
            "SELECT COUNT(*) FROM tweets WHERE user_id = ?",
            [user_id],
            |row| row.get(0),
        )
        .map_err(from_rusqlite)
    }

    /// List a user's tweets, newest first, starting after the given key
    pub fn list_by_user_page(
        conn: &Connection,
        user_id: &str,
        after: Option<&RecencyKey>,
        limit: usize,
    ) -> Result<Vec<Tweet>> {
        let (after_at, after_id) = split_after(after);
        let mut stmt = conn
            .prepare(&format!(
                "SELECT {} FROM tweets
                 WHERE user_id = ?1
                   AND (?2 IS NULL OR created_at < ?2 OR (created_at = ?2 AND id < ?3))
                 ORDER BY created_at DESC, id DESC
                 LIMIT ?4",
                TWEET_COLUMNS
            ))
            .map_err(from_rusqlite)?;

        let tweets = stmt
            .query_map(
                rusqlite::params![user_id, after_at, after_id, limit as i64],
                tweet_from_row,
            )
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        Ok(tweets)
    }

    /// Compose a user's timeline page
    ///
    /// Union of the user's own tweets and tweets by users they follow,
    /// newest first. A single query over the follow graph.
    pub fn timeline_page(
        conn: &Connection,
        user_id: &str,
        after: Option<&RecencyKey>,
        limit: usize,
    ) -> Result<Vec<Tweet>> {
        let (after_at, after_id) = split_after(after);
        let mut stmt = conn
            .prepare(&format!(
                "SELECT {} FROM tweets
                 WHERE (user_id = ?1
                        OR user_id IN (SELECT followee_id FROM follows WHERE follower_id = ?1))
                   AND (?2 IS NULL OR created_at < ?2 OR (created_at = ?2 AND id < ?3))
                 ORDER BY created_at DESC, id DESC
                 LIMIT ?4",
                TWEET_COLUMNS
            ))
            .map_err(from_rusqlite)?;

        let tweets = stmt
            .query_map(
                rusqlite::params![user_id, after_at, after_id, limit as i64],
                tweet_from_row,
            )
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        Ok(tweets)
    }
}

/// Split an optional after-key into bindable parameters
fn split_after(after: Option<&RecencyKey>) -> (Option<i64>, Option<&str>) {
    match after {
        Some((at, id)) => (Some(*at), Some(id.as_str())),
        None => (None, None),
    }
}
