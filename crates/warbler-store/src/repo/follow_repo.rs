//! SQLite repository for the follow graph

#![allow(clippy::result_large_err)]

use crate::errors::{from_rusqlite, Result};
use crate::repo::user_repo::USER_COLUMNS;
use crate::repo::RecencyKey;
use rusqlite::{Connection, OptionalExtension};
use warbler_core::model::Follow;

/// SQLite repository for the follows table
pub struct FollowRepo;

impl FollowRepo {
    /// Insert a Follow edge
    ///
    /// The composite UNIQUE and the self-follow CHECK surface as
    /// `ERR_CONSTRAINT_VIOLATION`; the engine pre-checks both to return
    /// precise codes.
    pub fn insert_follow(conn: &Connection, follow: &Follow) -> Result<()> {
        conn.execute(
            "INSERT INTO follows (follower_id, followee_id, created_at) VALUES (?1, ?2, ?3)",
            rusqlite::params![
                follow.follower_id,
                follow.followee_id,
                follow.created_at.timestamp_micros(),
            ],
        )
        .map_err(from_rusqlite)?;

        Ok(())
    }

    /// Delete a Follow edge; returns true if a row was deleted
    pub fn delete_follow(conn: &Connection, follower_id: &str, followee_id: &str) -> Result<bool> {
        let rows = conn
            .execute(
                "DELETE FROM follows WHERE follower_id = ?1 AND followee_id = ?2",
                [follower_id, followee_id],
            )
            .map_err(from_rusqlite)?;

        Ok(rows > 0)
    }

    /// Check whether the follower → followee edge exists
    pub fn follow_exists(conn: &Connection, follower_id: &str, followee_id: &str) -> Result<bool> {
        let exists: bool = conn
            .query_row(
                "SELECT 1 FROM follows WHERE follower_id = ?1 AND followee_id = ?2",
                [follower_id, followee_id],
                |_| Ok(true),
            )
            .optional()
            .map_err(from_rusqlite)?
            .unwrap_or(false);

        Ok(exists)
    }

    /// Count users following the given user
    pub fn follower_count(conn: &Connection, user_id: &str) -> Result<i64> {
        conn.query_row(
            "SELECT COUNT(*) FROM follows WHERE followee_id = ?",
            [user_id],
            |row| row.get(0),
        )
        .map_err(from_rusqlite)
    }

    /// Count users the given user follows
    pub fn following_count(conn: &Connection, user_id: &str) -> Result<i64> {
        conn.query_row(
            "SELECT COUNT(*) FROM follows WHERE follower_id = ?",
            [user_id],
            |row| row.get(0),
        )
        .map_err(from_rusqlite)
    }

    /// List users who follow `user_id`, most recent edge first
    ///
    /// The after-key is (edge created_at, follower user id).
    pub fn followers_page(
        conn: &Connection,
        user_id: &str,
        after: Option<&RecencyKey>,
        limit: usize,
    ) -> Result<Vec<(Follow, warbler_core::model::User)>> {
        let (after_at, after_id) = match after {
            Some((at, id)) => (Some(*at), Some(id.as_str())),
            None => (None, None),
        };
        let mut stmt = conn
            .prepare(&format!(
                "SELECT f.follower_id, f.followee_id, f.created_at, {}
                 FROM follows f JOIN users u ON u.id = f.follower_id
                 WHERE f.followee_id = ?1
                   AND (?2 IS NULL OR f.created_at < ?2 OR (f.created_at = ?2 AND u.id < ?3))
                 ORDER BY f.created_at DESC, u.id DESC
                 LIMIT ?4",
                prefixed_user_columns()
            ))
            .map_err(from_rusqlite)?;

        let rows = stmt
            .query_map(
                rusqlite::params![user_id, after_at, after_id, limit as i64],
                follow_with_user_from_row,
            )
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        Ok(rows)
    }

    /// List users that `user_id` follows, most recent edge first
    ///
    /// The after-key is (edge created_at, followee user id).
    pub fn following_page(
        conn: &Connection,
        user_id: &str,
        after: Option<&RecencyKey>,
        limit: usize,
    ) -> Result<Vec<(Follow, warbler_core::model::User)>> {
        let (after_at, after_id) = match after {
            Some((at, id)) => (Some(*at), Some(id.as_str())),
            None => (None, None),
        };
        let mut stmt = conn
            .prepare(&format!(
                "SELECT f.follower_id, f.followee_id, f.created_at, {}
                 FROM follows f JOIN users u ON u.id = f.followee_id
                 WHERE f.follower_id = ?1
                   AND (?2 IS NULL OR f.created_at < ?2 OR (f.created_at = ?2 AND u.id < ?3))
                 ORDER BY f.created_at DESC, u.id DESC
                 LIMIT ?4",
                prefixed_user_columns()
            ))
            .map_err(from_rusqlite)?;

        let rows = stmt
            .query_map(
                rusqlite::params![user_id, after_at, after_id, limit as i64],
                follow_with_user_from_row,
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

/// Hydrate (Follow, User) from a joined row: 3 follow columns then user columns
fn follow_with_user_from_row(
    row: &rusqlite::Row<'_>,
) -> rusqlite::Result<(Follow, warbler_core::model::User)> {
    let follower_id: String = row.get(0)?;
    let followee_id: String = row.get(1)?;
    let created_at: i64 = row.get(2)?;

    let mut follow = Follow::new(follower_id, followee_id);
    follow.created_at =
        chrono::DateTime::from_timestamp_micros(created_at).unwrap_or_else(chrono::Utc::now);

    // User columns start at index 3
    let id: String = row.get(3)?;
    let username: String = row.get(4)?;
    let display_name: String = row.get(5)?;
    let bio: Option<String> = row.get(6)?;
    let avatar_url: Option<String> = row.get(7)?;
    let password_hash: String = row.get(8)?;
    let u_created_at: i64 = row.get(9)?;
    let u_updated_at: i64 = row.get(10)?;

    let mut user = warbler_core::model::User::new(id, username, display_name, password_hash);
    user.bio = bio;
    user.avatar_url = avatar_url;
    user.created_at =
        chrono::DateTime::from_timestamp_micros(u_created_at).unwrap_or_else(chrono::Utc::now);
    user.updated_at =
        chrono::DateTime::from_timestamp_micros(u_updated_at).unwrap_or_else(chrono::Utc::now);

    Ok((follow, user))
}
