//! Seed importer orchestration
//!
//! Parses and validates a seed file, then imports it in a single
//! transaction. Re-importing the same seed is a no-op thanks to upserts and
//! existence checks on the join tables.

#![allow(clippy::result_large_err)]

use std::collections::HashSet;
use std::path::Path;

use rusqlite::Connection;
use warbler_core::model::{Follow, Like, Retweet, Tweet, User};
use warbler_core::rules::validation;
use warbler_core_types::Sensitive;

use crate::errors::{io_error, seed_validation, Result};
use crate::repo::{EngagementRepo, FollowRepo, TweetRepo, UserRepo};
use crate::seed::digest::compute_seed_digest;
use crate::seed::format::SeedV1;

/// Import a seed file into the database
///
/// 1. Parses and validates the seed JSON
/// 2. Computes the seed digest
/// 3. Hashes demo passwords
/// 4. Persists everything within one transaction
///
/// Returns the seed digest on success
pub fn import_seed(path: &Path, conn: &mut Connection) -> Result<String> {
    let seed = parse_seed_file(path)?;
    validate_seed(&seed, conn)?;

    let seed_digest = compute_seed_digest(&seed);
    tracing::info!(seed_digest = %seed_digest, "importing seed");

    let tx = conn.transaction().map_err(crate::errors::from_rusqlite)?;

    for seed_user in &seed.users {
        let password = Sensitive::new(seed_user.password.clone());
        let hash = warbler_core::auth::hash_password(&password).map_err(warbler_core::WbError::from)?;

        let mut user = User::new(
            seed_user.id.clone(),
            seed_user.username.clone(),
            seed_user.display_name.clone(),
            hash,
        );
        user.bio = seed_user.bio.clone();
        user.avatar_url = seed_user.avatar_url.clone();

        UserRepo::persist_user(&tx, &user)?;
    }

    for seed_tweet in &seed.tweets {
        let body = validation::validate_tweet_body(&seed_tweet.body)
            .map_err(warbler_core::WbError::from)?;
        let tweet = Tweet::new(seed_tweet.id.clone(), seed_tweet.user_id.clone(), body);
        TweetRepo::persist_tweet(&tx, &tweet)?;
    }

    for seed_follow in &seed.follows {
        if FollowRepo::follow_exists(&tx, &seed_follow.follower_id, &seed_follow.followee_id)? {
            continue;
        }
        let follow = Follow::new(
            seed_follow.follower_id.clone(),
            seed_follow.followee_id.clone(),
        );
        FollowRepo::insert_follow(&tx, &follow)?;
    }

    for seed_like in &seed.likes {
        if EngagementRepo::like_exists(&tx, &seed_like.user_id, &seed_like.tweet_id)? {
            continue;
        }
        let like = Like::new(seed_like.user_id.clone(), seed_like.tweet_id.clone());
        EngagementRepo::insert_like(&tx, &like)?;
    }

    for seed_retweet in &seed.retweets {
        if EngagementRepo::retweet_exists(&tx, &seed_retweet.user_id, &seed_retweet.tweet_id)? {
            continue;
        }
        let retweet = Retweet::new(seed_retweet.user_id.clone(), seed_retweet.tweet_id.clone());
        EngagementRepo::insert_retweet(&tx, &retweet)?;
    }

    tx.commit().map_err(crate::errors::from_rusqlite)?;

    tracing::info!(
        seed_digest = %seed_digest,
        users = seed.users.len(),
        tweets = seed.tweets.len(),
        "seed import complete"
    );

    Ok(seed_digest)
}

/// Parse a seed file from disk
pub fn parse_seed_file(path: &Path) -> Result<SeedV1> {
    let raw = std::fs::read_to_string(path).map_err(|e| io_error("seed_read", e))?;
    let seed: SeedV1 =
        serde_json::from_str(&raw).map_err(|e| seed_validation(&format!("invalid JSON: {}", e)))?;

    if seed.schema_version != 1 {
        return Err(seed_validation(&format!(
            "unsupported schema_version {} (expected 1)",
            seed.schema_version
        )));
    }

    Ok(seed)
}

/// Validate referential integrity and field rules before touching the DB
///
/// References may point at seed entries or at rows already in the database
/// (cross-seed imports).
fn validate_seed(seed: &SeedV1, conn: &Connection) -> Result<()> {
    let mut seen_ids: HashSet<&str> = HashSet::new();
    let mut seen_usernames: HashSet<&str> = HashSet::new();

    for user in &seed.users {
        validation::validate_username(&user.username).map_err(warbler_core::WbError::from)?;
        validation::validate_display_name(&user.display_name)
            .map_err(warbler_core::WbError::from)?;
        if let Some(bio) = &user.bio {
            validation::validate_bio(bio).map_err(warbler_core::WbError::from)?;
        }
        if !seen_ids.insert(&user.id) {
            return Err(seed_validation(&format!("duplicate user id {}", user.id)));
        }
        if !seen_usernames.insert(&user.username) {
            return Err(seed_validation(&format!(
                "duplicate username {}",
                user.username
            )));
        }
    }

    let user_known = |id: &str| -> Result<bool> {
        if seen_ids.contains(id) {
            return Ok(true);
        }
        Ok(UserRepo::get_user(conn, id)?.is_some())
    };

    let mut seen_tweet_ids: HashSet<&str> = HashSet::new();
    for tweet in &seed.tweets {
        if !seen_tweet_ids.insert(&tweet.id) {
            return Err(seed_validation(&format!("duplicate tweet id {}", tweet.id)));
        }
        if !user_known(&tweet.user_id)? {
            return Err(seed_validation(&format!(
                "tweet {} references unknown user {}",
                tweet.id, tweet.user_id
            )));
        }
    }

    let tweet_known = |id: &str| -> Result<bool> {
        if seen_tweet_ids.contains(id) {
            return Ok(true);
        }
        Ok(TweetRepo::get_tweet(conn, id)?.is_some())
    };

    for follow in &seed.follows {
        if follow.follower_id == follow.followee_id {
            return Err(seed_validation(&format!(
                "self-follow for user {}",
                follow.follower_id
            )));
        }
        if !user_known(&follow.follower_id)? || !user_known(&follow.followee_id)? {
            return Err(seed_validation("follow references unknown user"));
        }
    }

    for like in &seed.likes {
        if !user_known(&like.user_id)? || !tweet_known(&like.tweet_id)? {
            return Err(seed_validation("like references unknown user or tweet"));
        }
    }

    for retweet in &seed.retweets {
        if !user_known(&retweet.user_id)? || !tweet_known(&retweet.tweet_id)? {
            return Err(seed_validation("retweet references unknown user or tweet"));
        }
    }

    Ok(())
}
