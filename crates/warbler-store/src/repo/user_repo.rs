//! SQLite repository for users

#![allow(clippy::result_large_err)]

use crate::errors::{from_rusqlite, Result};
use rusqlite::{Connection, OptionalExtension, Row};
use warbler_core::model::User;

/// SQLite repository for the users table
pub struct UserRepo;

/// Hydrate a User from a full users row
///
/// Column order: id, username, display_name, bio, avatar_url, password_hash,
/// created_at, updated_at
pub(crate) fn user_from_row(row: &Row<'_>) -> rusqlite::Result<User> {
    let id: String = row.get(0)?;
    let username: String = row.get(1)?;
    let display_name: String = row.get(2)?;
    let bio: Option<String> = row.get(3)?;
    let avatar_url: Option<String> = row.get(4)?;
    let password_hash: String = row.get(5)?;
    let created_at: i64 = row.get(6)?;
    let updated_at: i64 = row.get(7)?;

    let mut user = User::new(id, username, display_name, password_hash);
    user.bio = bio;
    user.avatar_url = avatar_url;
    user.created_at =
        chrono::DateTime::from_timestamp_micros(created_at).unwrap_or_else(chrono::Utc::now);
    user.updated_at =
        chrono::DateTime::from_timestamp_micros(updated_at).unwrap_or_else(chrono::Utc::now);

    Ok(user)
}

pub(crate) const USER_COLUMNS: &str =
    "id, username, display_name, bio, avatar_url, password_hash, created_at, updated_at";

impl UserRepo {
    /// Persist a User to the database
    ///
    /// Upserts on id: profile fields and password hash are updated, username
    /// and created_at are immutable after insert.
    pub fn persist_user(conn: &Connection, user: &User) -> Result<()> {
        conn.execute(
            "INSERT INTO users (id, username, display_name, bio, avatar_url, password_hash, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
             ON CONFLICT(id) DO UPDATE SET
                display_name = excluded.display_name,
                bio = excluded.bio,
                avatar_url = excluded.avatar_url,
                password_hash = excluded.password_hash,
                updated_at = excluded.updated_at",
            rusqlite::params![
                user.id,
                user.username,
                user.display_name,
                user.bio,
                user.avatar_url,
                user.password_hash,
                user.created_at.timestamp_micros(),
                user.updated_at.timestamp_micros(),
            ],
        )
        .map_err(from_rusqlite)?;

        Ok(())
    }

    /// Get a User by ID
    pub fn get_user(conn: &Connection, user_id: &str) -> Result<Option<User>> {
        let mut stmt = conn
            .prepare(&format!("SELECT {} FROM users WHERE id = ?", USER_COLUMNS))
            .map_err(from_rusqlite)?;

        let result = stmt
            .query_row([user_id], user_from_row)
            .optional()
            .map_err(from_rusqlite)?;

        Ok(result)
    }

    /// Get a User by username
    pub fn get_user_by_username(conn: &Connection, username: &str) -> Result<Option<User>> {
        let mut stmt = conn
            .prepare(&format!(
                "SELECT {} FROM users WHERE username = ?",
                USER_COLUMNS
            ))
            .map_err(from_rusqlite)?;

        let result = stmt
            .query_row([username], user_from_row)
            .optional()
            .map_err(from_rusqlite)?;

        Ok(result)
    }

    /// Check whether a username is already registered
    pub fn username_exists(conn: &Connection, username: &str) -> Result<bool> {
        let exists: bool = conn
            .query_row(
                "SELECT 1 FROM users WHERE username = ?",
                [username],
                |_| Ok(true),
            )
            .optional()
            .map_err(from_rusqlite)?
            .unwrap_or(false);

        Ok(exists)
    }

    /// Delete a User by ID
    ///
    /// Tweets, follows, likes, and retweets cascade via foreign keys.
    /// Returns true if a row was deleted.
    pub fn delete_user(conn: &Connection, user_id: &str) -> Result<bool> {
        let rows = conn
            .execute("DELETE FROM users WHERE id = ?", [user_id])
            .map_err(from_rusqlite)?;

        Ok(rows > 0)
    }

    /// List users ordered by username, starting after the given username
    ///
    /// Fetches up to `limit` rows; the engine over-fetches by one to detect
    /// further pages.
    pub fn list_users_page(
        conn: &Connection,
        after_username: Option<&str>,
        limit: usize,
    ) -> Result<Vec<User>> {
        let mut stmt = conn
            .prepare(&format!(
                "SELECT {} FROM users
                 WHERE (?1 IS NULL OR username > ?1)
                 ORDER BY username
                 LIMIT ?2",
                USER_COLUMNS
            ))
            .map_err(from_rusqlite)?;

        let users = stmt
            .query_map(
                rusqlite::params![after_username, limit as i64],
                user_from_row,
            )
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        Ok(users)
    }
}
