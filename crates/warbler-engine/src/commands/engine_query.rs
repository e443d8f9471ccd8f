//! Engine-level read-only query surface.
//!
//! `apply_engine_query` is the single entry point for all reads. Unlike
//! `apply_engine_command`, it accepts a shared (non-mutable) connection and
//! never writes.

#![allow(clippy::result_large_err)]

use rusqlite::Connection;
use warbler_core::model::{Tweet, User};
use warbler_store::errors::Result;
use warbler_store::repo::{EngagementRepo, FollowRepo, TweetRepo, UserRepo};

use crate::commands::read_tools::{recency_key, ListOptions, Page, TweetStats, UserStats};

/// Read-only queries supported by the engine.
#[derive(Debug, Clone)]
pub enum EngineQuery {
    // ── Users ────────────────────────────────────────────────────────────────
    /// Get a user by ID.
    UserGet { user_id: String },
    /// Get a user by username.
    UserGetByUsername { username: String },
    /// List users ordered by username, paginated.
    UserList(ListOptions),

    // ── Tweets ───────────────────────────────────────────────────────────────
    /// Get a tweet by ID.
    TweetGet { tweet_id: String },
    /// List a user's tweets, newest first.
    TweetListByUser {
        user_id: String,
        options: ListOptions,
    },
    /// Compose the user's timeline: own tweets plus followed users' tweets.
    TimelineGet {
        user_id: String,
        options: ListOptions,
    },

    // ── Follow graph ─────────────────────────────────────────────────────────
    /// List users who follow the given user.
    FollowerList {
        user_id: String,
        options: ListOptions,
    },
    /// List users the given user follows.
    FollowingList {
        user_id: String,
        options: ListOptions,
    },
    /// Check whether follower → followee exists.
    FollowCheck {
        follower_id: String,
        followee_id: String,
    },

    // ── Engagement ───────────────────────────────────────────────────────────
    /// List users who liked a tweet.
    LikerList {
        tweet_id: String,
        options: ListOptions,
    },
    /// List users who retweeted a tweet.
    RetweeterList {
        tweet_id: String,
        options: ListOptions,
    },

    // ── Stats ────────────────────────────────────────────────────────────────
    /// Tweet/follower/following counts for a user.
    UserStatsGet { user_id: String },
    /// Like/retweet counts for a tweet.
    TweetStatsGet { tweet_id: String },
}

/// All possible results from `apply_engine_query`.
#[derive(Debug, Clone)]
pub enum EngineQueryResult {
    /// A single user, if found.
    User(Option<User>),
    /// A page of users.
    UserPage(Page<User>),
    /// A single tweet, if found.
    Tweet(Option<Tweet>),
    /// A page of tweets.
    TweetPage(Page<Tweet>),
    /// User aggregate counts.
    UserStats(UserStats),
    /// Tweet aggregate counts.
    TweetStats(TweetStats),
    /// A yes/no answer (FollowCheck).
    Bool(bool),
}

/// Apply a read-only query.
pub fn apply_engine_query(query: EngineQuery, conn: &Connection) -> Result<EngineQueryResult> {
    match query {
        EngineQuery::UserGet { user_id } => {
            Ok(EngineQueryResult::User(UserRepo::get_user(conn, &user_id)?))
        }
        EngineQuery::UserGetByUsername { username } => Ok(EngineQueryResult::User(
            UserRepo::get_user_by_username(conn, &username)?,
        )),
        EngineQuery::UserList(options) => {
            let limit = options.effective_limit();
            let after = options.decode_cursor();
            let raw = UserRepo::list_users_page(conn, after.as_deref(), limit + 1)?;
            let page = Page::from_overshot(raw, limit, |user| user.username.clone());
            Ok(EngineQueryResult::UserPage(page))
        }
        EngineQuery::TweetGet { tweet_id } => Ok(EngineQueryResult::Tweet(TweetRepo::get_tweet(
            conn, &tweet_id,
        )?)),
        EngineQuery::TweetListByUser { user_id, options } => {
            let limit = options.effective_limit();
            let after = options.decode_recency_cursor();
            let raw = TweetRepo::list_by_user_page(conn, &user_id, after.as_ref(), limit + 1)?;
            let page = Page::from_overshot(raw, limit, tweet_recency_key);
            Ok(EngineQueryResult::TweetPage(page))
        }
        EngineQuery::TimelineGet { user_id, options } => {
            let limit = options.effective_limit();
            let after = options.decode_recency_cursor();
            let raw = TweetRepo::timeline_page(conn, &user_id, after.as_ref(), limit + 1)?;
            let page = Page::from_overshot(raw, limit, tweet_recency_key);
            Ok(EngineQueryResult::TweetPage(page))
        }
        EngineQuery::FollowerList { user_id, options } => {
            let limit = options.effective_limit();
            let after = options.decode_recency_cursor();
            let raw = FollowRepo::followers_page(conn, &user_id, after.as_ref(), limit + 1)?;
            let page = Page::from_overshot(raw, limit, |(follow, user)| {
                recency_key(follow.created_at.timestamp_micros(), &user.id)
            })
            .map(|(_, user)| user);
            Ok(EngineQueryResult::UserPage(page))
        }
        EngineQuery::FollowingList { user_id, options } => {
            let limit = options.effective_limit();
            let after = options.decode_recency_cursor();
            let raw = FollowRepo::following_page(conn, &user_id, after.as_ref(), limit + 1)?;
            let page = Page::from_overshot(raw, limit, |(follow, user)| {
                recency_key(follow.created_at.timestamp_micros(), &user.id)
            })
            .map(|(_, user)| user);
            Ok(EngineQueryResult::UserPage(page))
        }
        EngineQuery::FollowCheck {
            follower_id,
            followee_id,
        } => Ok(EngineQueryResult::Bool(FollowRepo::follow_exists(
            conn,
            &follower_id,
            &followee_id,
        )?)),
        EngineQuery::LikerList { tweet_id, options } => {
            let limit = options.effective_limit();
            let after = options.decode_recency_cursor();
            let raw = EngagementRepo::likers_page(conn, &tweet_id, after.as_ref(), limit + 1)?;
            let page = Page::from_overshot(raw, limit, |(liked_at, user)| {
                recency_key(*liked_at, &user.id)
            })
            .map(|(_, user)| user);
            Ok(EngineQueryResult::UserPage(page))
        }
        EngineQuery::RetweeterList { tweet_id, options } => {
            let limit = options.effective_limit();
            let after = options.decode_recency_cursor();
            let raw = EngagementRepo::retweeters_page(conn, &tweet_id, after.as_ref(), limit + 1)?;
            let page = Page::from_overshot(raw, limit, |(retweeted_at, user)| {
                recency_key(*retweeted_at, &user.id)
            })
            .map(|(_, user)| user);
            Ok(EngineQueryResult::UserPage(page))
        }
        EngineQuery::UserStatsGet { user_id } => {
            let stats = UserStats {
                tweet_count: TweetRepo::count_by_user(conn, &user_id)?,
                follower_count: FollowRepo::follower_count(conn, &user_id)?,
                following_count: FollowRepo::following_count(conn, &user_id)?,
                user_id,
            };
            Ok(EngineQueryResult::UserStats(stats))
        }
        EngineQuery::TweetStatsGet { tweet_id } => {
            let stats = TweetStats {
                like_count: EngagementRepo::like_count(conn, &tweet_id)?,
                retweet_count: EngagementRepo::retweet_count(conn, &tweet_id)?,
                tweet_id,
            };
            Ok(EngineQueryResult::TweetStats(stats))
        }
    }
}

/// Sort key for a tweet in a recency-ordered page
fn tweet_recency_key(tweet: &Tweet) -> String {
    recency_key(tweet.created_at.timestamp_micros(), &tweet.id)
}
