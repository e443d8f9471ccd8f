//! GraphQL object types wrapping the core models
//!
//! Core models stay GraphQL-free; these wrappers add the resolved fields
//! (author, stats, nested listings) on top of the flat rows.

use async_graphql::{Context, Object, SimpleObject};
use chrono::{DateTime, Utc};
use warbler_core::model::{Tweet, User};
use warbler_core::{WbError, WbErrorKind};
use warbler_engine::{apply_engine_query, EngineQuery, EngineQueryResult, ListOptions, Page};

use crate::error::to_graphql_error;
use crate::schema::lock_db;

/// A registered account with resolved social fields
pub struct GqlUser(pub User);

/// A tweet with resolved author and engagement fields
pub struct GqlTweet(pub Tweet);

/// Aggregate counts for a user
#[derive(SimpleObject)]
#[graphql(name = "UserStats")]
pub struct GqlUserStats {
    /// Number of tweets authored
    pub tweet_count: i64,
    /// Number of followers
    pub follower_count: i64,
    /// Number of users followed
    pub following_count: i64,
}

/// Aggregate counts for a tweet
#[derive(SimpleObject)]
#[graphql(name = "TweetStats")]
pub struct GqlTweetStats {
    /// Number of likes
    pub like_count: i64,
    /// Number of retweets
    pub retweet_count: i64,
}

/// A page of users
#[derive(SimpleObject)]
pub struct UserConnection {
    /// Users in this page
    pub items: Vec<GqlUser>,
    /// Opaque cursor for the next page
    pub cursor: Option<String>,
    /// Whether more pages exist
    pub has_more: bool,
}

impl From<Page<User>> for UserConnection {
    fn from(page: Page<User>) -> Self {
        Self {
            items: page.items.into_iter().map(GqlUser).collect(),
            cursor: page.cursor,
            has_more: page.has_more,
        }
    }
}

/// A page of tweets
#[derive(SimpleObject)]
pub struct TweetConnection {
    /// Tweets in this page
    pub items: Vec<GqlTweet>,
    /// Opaque cursor for the next page
    pub cursor: Option<String>,
    /// Whether more pages exist
    pub has_more: bool,
}

impl From<Page<Tweet>> for TweetConnection {
    fn from(page: Page<Tweet>) -> Self {
        Self {
            items: page.items.into_iter().map(GqlTweet).collect(),
            cursor: page.cursor,
            has_more: page.has_more,
        }
    }
}

/// Run a read query against the shared connection
pub(crate) async fn run_query(
    ctx: &Context<'_>,
    query: EngineQuery,
) -> async_graphql::Result<EngineQueryResult> {
    let conn = lock_db(ctx).await?;
    apply_engine_query(query, &conn).map_err(to_graphql_error)
}

pub(crate) fn list_options(limit: Option<usize>, cursor: Option<String>) -> ListOptions {
    ListOptions { limit, cursor }
}

fn unexpected_result() -> async_graphql::Error {
    to_graphql_error(
        WbError::new(WbErrorKind::Internal).with_message("unexpected engine query result"),
    )
}

#[Object(name = "User")]
impl GqlUser {
    /// Stable user id (UUIDv7)
    async fn id(&self) -> &str {
        &self.0.id
    }

    /// Unique handle
    async fn username(&self) -> &str {
        &self.0.username
    }

    /// Display name
    async fn display_name(&self) -> &str {
        &self.0.display_name
    }

    /// Profile bio, if set
    async fn bio(&self) -> Option<&str> {
        self.0.bio.as_deref()
    }

    /// Avatar URL, if set
    async fn avatar_url(&self) -> Option<&str> {
        self.0.avatar_url.as_deref()
    }

    /// When the account was created
    async fn created_at(&self) -> DateTime<Utc> {
        self.0.created_at
    }

    /// Tweet/follower/following counts
    async fn stats(&self, ctx: &Context<'_>) -> async_graphql::Result<GqlUserStats> {
        match run_query(
            ctx,
            EngineQuery::UserStatsGet {
                user_id: self.0.id.clone(),
            },
        )
        .await?
        {
            EngineQueryResult::UserStats(stats) => Ok(GqlUserStats {
                tweet_count: stats.tweet_count,
                follower_count: stats.follower_count,
                following_count: stats.following_count,
            }),
            _ => Err(unexpected_result()),
        }
    }

    /// This user's tweets, newest first
    async fn tweets(
        &self,
        ctx: &Context<'_>,
        limit: Option<usize>,
        cursor: Option<String>,
    ) -> async_graphql::Result<TweetConnection> {
        match run_query(
            ctx,
            EngineQuery::TweetListByUser {
                user_id: self.0.id.clone(),
                options: list_options(limit, cursor),
            },
        )
        .await?
        {
            EngineQueryResult::TweetPage(page) => Ok(page.into()),
            _ => Err(unexpected_result()),
        }
    }

    /// Users following this user, most recent first
    async fn followers(
        &self,
        ctx: &Context<'_>,
        limit: Option<usize>,
        cursor: Option<String>,
    ) -> async_graphql::Result<UserConnection> {
        match run_query(
            ctx,
            EngineQuery::FollowerList {
                user_id: self.0.id.clone(),
                options: list_options(limit, cursor),
            },
        )
        .await?
        {
            EngineQueryResult::UserPage(page) => Ok(page.into()),
            _ => Err(unexpected_result()),
        }
    }

    /// Users this user follows, most recent first
    async fn following(
        &self,
        ctx: &Context<'_>,
        limit: Option<usize>,
        cursor: Option<String>,
    ) -> async_graphql::Result<UserConnection> {
        match run_query(
            ctx,
            EngineQuery::FollowingList {
                user_id: self.0.id.clone(),
                options: list_options(limit, cursor),
            },
        )
        .await?
        {
            EngineQueryResult::UserPage(page) => Ok(page.into()),
            _ => Err(unexpected_result()),
        }
    }
}

#[Object(name = "Tweet")]
impl GqlTweet {
    /// Stable tweet id (UUIDv7)
    async fn id(&self) -> &str {
        &self.0.id
    }

    /// Tweet text
    async fn body(&self) -> &str {
        &self.0.body
    }

    /// When the tweet was posted
    async fn created_at(&self) -> DateTime<Utc> {
        self.0.created_at
    }

    /// The tweet's author
    async fn author(&self, ctx: &Context<'_>) -> async_graphql::Result<GqlUser> {
        match run_query(
            ctx,
            EngineQuery::UserGet {
                user_id: self.0.user_id.clone(),
            },
        )
        .await?
        {
            EngineQueryResult::User(Some(user)) => Ok(GqlUser(user)),
            EngineQueryResult::User(None) => Err(to_graphql_error(
                WbError::new(WbErrorKind::UserNotFound)
                    .with_user_id(self.0.user_id.clone())
                    .with_message("tweet author no longer exists"),
            )),
            _ => Err(unexpected_result()),
        }
    }

    /// Like/retweet counts
    async fn stats(&self, ctx: &Context<'_>) -> async_graphql::Result<GqlTweetStats> {
        match run_query(
            ctx,
            EngineQuery::TweetStatsGet {
                tweet_id: self.0.id.clone(),
            },
        )
        .await?
        {
            EngineQueryResult::TweetStats(stats) => Ok(GqlTweetStats {
                like_count: stats.like_count,
                retweet_count: stats.retweet_count,
            }),
            _ => Err(unexpected_result()),
        }
    }

    /// Users who liked this tweet
    async fn liked_by(
        &self,
        ctx: &Context<'_>,
        limit: Option<usize>,
        cursor: Option<String>,
    ) -> async_graphql::Result<UserConnection> {
        match run_query(
            ctx,
            EngineQuery::LikerList {
                tweet_id: self.0.id.clone(),
                options: list_options(limit, cursor),
            },
        )
        .await?
        {
            EngineQueryResult::UserPage(page) => Ok(page.into()),
            _ => Err(unexpected_result()),
        }
    }

    /// Users who retweeted this tweet
    async fn retweeted_by(
        &self,
        ctx: &Context<'_>,
        limit: Option<usize>,
        cursor: Option<String>,
    ) -> async_graphql::Result<UserConnection> {
        match run_query(
            ctx,
            EngineQuery::RetweeterList {
                tweet_id: self.0.id.clone(),
                options: list_options(limit, cursor),
            },
        )
        .await?
        {
            EngineQueryResult::UserPage(page) => Ok(page.into()),
            _ => Err(unexpected_result()),
        }
    }
}
