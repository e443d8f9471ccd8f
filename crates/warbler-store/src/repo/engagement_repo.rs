//! SQLite repository for likes and retweets
//!
//! The two tables have identical shape but distinct semantics; functions are
//! mirrored per table.

#![allow(clippy::result_large_err)]

use crate::errors::{from_rusqlite, Result};
use crate::repo::user_repo::USER_COLUMNS;
use crate::repo::RecencyKey;
use rusqlite::{Connection, OptionalExtension};
use warbler_core::model::{Like, Retweet, User};

/// SQLite repository for the likes and retweets tables
pub struct EngagementRepo;

impl EngagementRepo {
    // ── Likes ────────────────────────────────────────────────────────────────

    /// Insert a Like row
    pub fn insert_like(conn: &Connection, like: &Like) -> Result<()> {
        conn.execute(
            "INSERT INTO likes (user_id, tweet_id, created_at) VALUES (?1, ?2, ?3)",
            rusqlite::params![
                like.user_id,
                like.tweet_id,
                like.created_at.timestamp_micros(),
            ],
        )
        .map_err(from_rusqlite)?;

        Ok(())
    }

    /// Delete a Like row; returns true if a row was deleted
    pub fn delete_like(conn: &Connection, user_id: &str, tweet_id: &str) -> Result<bool> {
        let rows = conn
            .execute(
                "DELETE FROM likes WHERE user_id = ?1 AND tweet_id = ?2",
                [user_id, tweet_id],
            )
            .map_err(from_rusqlite)?;

        Ok(rows > 0)
    }

    /// Check whether the user has liked the tweet
    pub fn like_exists(conn: &Connection, user_id: &str, tweet_id: &str) -> Result<bool> {
        let exists: bool = conn
            .query_row(
                "SELECT 1 FROM likes WHERE user_id = ?1 AND tweet_id = ?2",
                [user_id, tweet_id],
                |_| Ok(true),
            )
            .optional()
            .map_err(from_rusqlite)?
            .unwrap_or(false);

        Ok(exists)
    }

    /// Count likes on a tweet
    pub fn like_count(conn: &Connection, tweet_id: &str) -> Result<i64> {
        conn.query_row(
            "SELECT COUNT(*) FROM likes WHERE tweet_id = ?",
            [tweet_id],
            |row| row.get(0),
        )
        .map_err(from_rusqlite)
    }

    /// List users who liked a tweet, most recent like first
    pub fn likers_page(
        conn: &Connection,
        tweet_id: &str,
        after: Option<&RecencyKey>,
        limit: usize,
    ) -> Result<Vec<(i64, User)>> {
        let (after_at, after_id) = match after {
            Some((at, id)) => (Some(*at), Some(id.as_str())),
            None => (None, None),
        };
        let mut stmt = conn
            .prepare(&format!(
                "SELECT l.created_at, {}
                 FROM likes l JOIN users u ON u.id = l.user_id
                 WHERE l.tweet_id = ?1
                   AND (?2 IS NULL OR l.created_at < ?2 OR (l.created_at = ?2 AND u.id < ?3))
                 ORDER BY l.created_at DESC, u.id DESC
                 LIMIT ?4",
                prefixed_user_columns()
            ))
            .map_err(from_rusqlite)?;

        let rows = stmt
            .query_map(
                rusqlite::params![tweet_id, after_at, after_id, limit as i64],
                engagement_user_from_row,
            )
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        Ok(rows)
    }

    // ── Retweets ─────────────────────────────────────────────────────────────

    /// Insert a Retweet row
    pub fn insert_retweet(conn: &Connection, retweet: &Retweet) -> Result<()> {
        conn.execute(
            "INSERT INTO retweets (user_id, tweet_id, created_at) VALUES (?1, ?2, ?3)",
            rusqlite::params![
                retweet.user_id,
                retweet.tweet_id,
                retweet.created_at.timestamp_micros(),
            ],
        )
        .map_err(from_rusqlite)?;

        Ok(())
    }

    /// Delete a Retweet row; returns true if a row was deleted
    pub fn delete_retweet(conn: &Connection, user_id: &str, tweet_id: &str) -> Result<bool> {
        let rows = conn
            .execute(
                "DELETE FROM retweets WHERE user_id = ?1 AND tweet_id = ?2",
                [user_id, tweet_id],
            )
            .map_err(from_rusqlite)?;

        Ok(rows > 0)
    }

    /// Check whether the user has retweeted the tweet
    pub fn retweet_exists(conn: &Connection, user_id: &str, tweet_id: &str) -> Result<bool> {
        let exists: bool = conn
            .query_row(
                "SELECT 1 FROM retweets WHERE user_id = ?1 AND tweet_id = ?2",
                [user_id, tweet_id],
                |_| Ok(true),
            )
            .optional()
            .map_err(from_rusqlite)?
            .unwrap_or(false);

        Ok(exists)
    }

    /// Count retweets of a tweet
    pub fn retweet_count(conn: &Connection, tweet_id: &str) -> Result<i64> {
        conn.query_row(
            "SELECT COUNT(*) FROM retweets WHERE tweet_id = ?",
            [tweet_id],
            |row| row.get(0),
        )
        .map_err(from_rusqlite)
    }

    /// List users who retweeted a tweet, most recent retweet first
    pub fn retweeters_page(
        conn: &Connection,
        tweet_id: &str,
        after: Option<&RecencyKey>,
        limit: usize,
    ) -> Result<Vec<(i64, User)>> {
        let (after_at, after_id) = match after {
            Some((at, id)) => (Some(*at), Some(id.as_str())),
            None => (None, None),
        };
        let mut stmt = conn
            .prepare(&format!(
                "SELECT r.created_at, {}
                 FROM retweets r JOIN users u ON u.id = r.user_id
                 WHERE r.tweet_id = ?1
                   AND (?2 IS NULL OR r.created_at < ?2 OR (r.created_at = ?2 AND u.id < ?3))
                 ORDER BY r.created_at DESC, u.id DESC
                 LIMIT ?4",
                prefixed_user_columns()
            ))
            .map_err(from_rusqlite)?;

        let rows = stmt
            .query_map(
                rusqlite::params![tweet_id, after_at, after_id, limit as i64],
                engagement_user_from_row,
            )
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        Ok(rows)
    }
}

/// USER_COLUMNS with a `u.` prefix for joined queries
fn prefixed_user_columns() -> String {
    USER_COLUMNS
        .split(", ")
        .map(|c| format!("u.{}", c))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Hydrate (engagement created_at micros, User) from a joined row
fn engagement_user_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<(i64, User)> {
    let created_at: i64 = row.get(0)?;

    // User columns start at index 1
    let id: String = row.get(1)?;
    let username: String = row.get(2)?;
    let display_name: String = row.get(3)?;
    let bio: Option<String> = row.get(4)?;
    let avatar_url: Option<String> = row.get(5)?;
    let password_hash: String = row.get(6)?;
    let u_created_at: i64 = row.get(7)?;
    let u_updated_at: i64 = row.get(8)?;

    let mut user = User::new(id, username, display_name, password_hash);
    user.bio = bio;
    user.avatar_url = avatar_url;
    user.created_at =
        chrono::DateTime::from_timestamp_micros(u_created_at).unwrap_or_else(chrono::Utc::now);
    user.updated_at =
        chrono::DateTime::from_timestamp_micros(u_updated_at).unwrap_or_else(chrono::Utc::now);

    Ok((created_at, user))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::migrations;
    use crate::repo::{TweetRepo, UserRepo};
    use warbler_core::model::Tweet;

    fn setup_test_db() -> Connection {
        let mut conn = Connection::open_in_memory().unwrap();
        crate::db::configure(&conn).unwrap();
        migrations::apply_migrations(&mut conn).unwrap();
        conn
    }

    fn seed_user_and_tweet(conn: &Connection) {
        let user = User::new(
            "u1".to_string(),
            "alice".to_string(),
            "Alice".to_string(),
            "h".to_string(),
        );
        UserRepo::persist_user(conn, &user).unwrap();
        let tweet = Tweet::new("t1".to_string(), "u1".to_string(), "hello".to_string());
        TweetRepo::persist_tweet(conn, &tweet).unwrap();
    }

    #[test]
    fn test_like_lifecycle() {
        let conn = setup_test_db();
        seed_user_and_tweet(&conn);

        assert!(!EngagementRepo::like_exists(&conn, "u1", "t1").unwrap());
        EngagementRepo::insert_like(&conn, &Like::new("u1".to_string(), "t1".to_string()))
            .unwrap();
        assert!(EngagementRepo::like_exists(&conn, "u1", "t1").unwrap());
        assert_eq!(EngagementRepo::like_count(&conn, "t1").unwrap(), 1);

        assert!(EngagementRepo::delete_like(&conn, "u1", "t1").unwrap());
        assert_eq!(EngagementRepo::like_count(&conn, "t1").unwrap(), 0);
    }

    #[test]
    fn test_duplicate_like_rejected() {
        let conn = setup_test_db();
        seed_user_and_tweet(&conn);

        EngagementRepo::insert_like(&conn, &Like::new("u1".to_string(), "t1".to_string()))
            .unwrap();
        let err = EngagementRepo::insert_like(
            &conn,
            &Like::new("u1".to_string(), "t1".to_string()),
        )
        .unwrap_err();
        assert_eq!(err.code(), "ERR_CONSTRAINT_VIOLATION");
    }

    #[test]
    fn test_retweet_lifecycle() {
        let conn = setup_test_db();
        seed_user_and_tweet(&conn);

        EngagementRepo::insert_retweet(
            &conn,
            &Retweet::new("u1".to_string(), "t1".to_string()),
        )
        .unwrap();
        assert!(EngagementRepo::retweet_exists(&conn, "u1", "t1").unwrap());
        assert_eq!(EngagementRepo::retweet_count(&conn, "t1").unwrap(), 1);

        // Likes and retweets are independent tables
        assert!(!EngagementRepo::like_exists(&conn, "u1", "t1").unwrap());

        assert!(EngagementRepo::delete_retweet(&conn, "u1", "t1").unwrap());
        assert!(!EngagementRepo::delete_retweet(&conn, "u1", "t1").unwrap());
    }

    #[test]
    fn test_likers_page() {
        let conn = setup_test_db();
        seed_user_and_tweet(&conn);
        let bob = User::new(
            "u2".to_string(),
            "bob".to_string(),
            "Bob".to_string(),
            "h".to_string(),
        );
        UserRepo::persist_user(&conn, &bob).unwrap();

        let mut like1 = Like::new("u1".to_string(), "t1".to_string());
        like1.created_at = chrono::DateTime::from_timestamp_micros(10).unwrap();
        let mut like2 = Like::new("u2".to_string(), "t1".to_string());
        like2.created_at = chrono::DateTime::from_timestamp_micros(20).unwrap();
        EngagementRepo::insert_like(&conn, &like1).unwrap();
        EngagementRepo::insert_like(&conn, &like2).unwrap();

        let page = EngagementRepo::likers_page(&conn, "t1", None, 10).unwrap();
        let names: Vec<&str> = page.iter().map(|(_, u)| u.username.as_str()).collect();
        assert_eq!(names, vec!["bob", "alice"]);
    }
}
