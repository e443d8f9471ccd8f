//! Account commands: sign-up, login, profile update, deletion

#![allow(clippy::result_large_err)]

use std::time::Instant;

use rusqlite::Connection;
use uuid::Uuid;
use warbler_core::model::User;
use warbler_core::rules::validation;
use warbler_core::{log_op_end, log_op_error, log_op_start, WarblerError};
use warbler_core_types::Sensitive;
use warbler_store::errors::Result;
use warbler_store::repo::UserRepo;

/// Register a new user
///
/// Validates the username and display name, rejects taken usernames, hashes
/// the password, and inserts the row.
pub fn sign_up(
    conn: &Connection,
    username: &str,
    display_name: &str,
    password: &Sensitive<String>,
) -> Result<User> {
    let start = Instant::now();
    log_op_start!("sign_up", username = username);

    let result = (|| -> Result<User> {
        validation::validate_username(username)?;
        validation::validate_display_name(display_name)?;

        if UserRepo::username_exists(conn, username)? {
            return Err(WarblerError::UsernameTaken {
                username: username.to_string(),
            }
            .into());
        }

        let password_hash = warbler_core::auth::hash_password(password)?;
        let user = User::new(
            Uuid::now_v7().to_string(),
            username.to_string(),
            display_name.to_string(),
            password_hash,
        );
        UserRepo::persist_user(conn, &user)?;
        Ok(user)
    })();

    match &result {
        Ok(user) => {
            log_op_end!(
                "sign_up",
                duration_ms = start.elapsed().as_millis() as u64,
                user_id = user.id.as_str()
            );
        }
        Err(e) => {
            log_op_error!(
                "sign_up",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
        }
    }

    result
}

/// Verify a username/password pair
///
/// Unknown usernames and wrong passwords produce the same
/// `InvalidCredentials` error.
pub fn log_in(
    conn: &Connection,
    username: &str,
    password: &Sensitive<String>,
) -> Result<User> {
    let start = Instant::now();
    log_op_start!("log_in", username = username);

    let result = (|| -> Result<User> {
        let user = UserRepo::get_user_by_username(conn, username)?
            .ok_or(WarblerError::InvalidCredentials)?;

        if !warbler_core::auth::verify_password(password, &user.password_hash)? {
            return Err(WarblerError::InvalidCredentials.into());
        }

        Ok(user)
    })();

    match &result {
        Ok(user) => {
            log_op_end!(
                "log_in",
                duration_ms = start.elapsed().as_millis() as u64,
                user_id = user.id.as_str()
            );
        }
        Err(e) => {
            log_op_error!(
                "log_in",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
        }
    }

    result
}

/// Update profile fields
///
/// Only the provided fields change; `updated_at` is bumped either way.
pub fn update_profile(
    conn: &Connection,
    user_id: &str,
    display_name: Option<&str>,
    bio: Option<&str>,
    avatar_url: Option<&str>,
) -> Result<User> {
    let start = Instant::now();
    log_op_start!("update_profile", user_id = user_id);

    let result = (|| -> Result<User> {
        if let Some(display_name) = display_name {
            validation::validate_display_name(display_name)?;
        }
        if let Some(bio) = bio {
            validation::validate_bio(bio)?;
        }

        let mut user = UserRepo::get_user(conn, user_id)?.ok_or_else(|| {
            WarblerError::UserNotFound {
                user_id: user_id.to_string(),
            }
        })?;

        if let Some(display_name) = display_name {
            user.display_name = display_name.to_string();
        }
        if let Some(bio) = bio {
            user.bio = Some(bio.to_string());
        }
        if let Some(avatar_url) = avatar_url {
            user.avatar_url = Some(avatar_url.to_string());
        }
        user.updated_at = chrono::Utc::now();

        UserRepo::persist_user(conn, &user)?;
        Ok(user)
    })();

    match &result {
        Ok(_) => {
            log_op_end!(
                "update_profile",
                duration_ms = start.elapsed().as_millis() as u64
            );
        }
        Err(e) => {
            log_op_error!(
                "update_profile",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
        }
    }

    result
}

/// Delete a user
///
/// Tweets, follows, likes, and retweets cascade in the same statement.
pub fn delete_user(conn: &Connection, user_id: &str) -> Result<()> {
    let start = Instant::now();
    log_op_start!("delete_user", user_id = user_id);

    let result = (|| -> Result<()> {
        if !UserRepo::delete_user(conn, user_id)? {
            return Err(WarblerError::UserNotFound {
                user_id: user_id.to_string(),
            }
            .into());
        }
        Ok(())
    })();

    match &result {
        Ok(_) => {
            log_op_end!(
                "delete_user",
                duration_ms = start.elapsed().as_millis() as u64
            );
        }
        Err(e) => {
            log_op_error!(
                "delete_user",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
        }
    }

    result
}
