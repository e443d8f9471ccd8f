//! Query root

use async_graphql::{Context, Object};
use warbler_engine::{EngineQuery, EngineQueryResult};

use crate::schema::types::{
    list_options, run_query, GqlTweet, GqlUser, TweetConnection, UserConnection,
};

/// Read-only entry points
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Look up a user by id
    async fn user(&self, ctx: &Context<'_>, id: String) -> async_graphql::Result<Option<GqlUser>> {
        match run_query(ctx, EngineQuery::UserGet { user_id: id }).await? {
            EngineQueryResult::User(user) => Ok(user.map(GqlUser)),
            _ => Err(async_graphql::Error::new("unexpected engine query result")),
        }
    }

    /// Look up a user by username
    async fn user_by_username(
        &self,
        ctx: &Context<'_>,
        username: String,
    ) -> async_graphql::Result<Option<GqlUser>> {
        match run_query(ctx, EngineQuery::UserGetByUsername { username }).await? {
            EngineQueryResult::User(user) => Ok(user.map(GqlUser)),
            _ => Err(async_graphql::Error::new("unexpected engine query result")),
        }
    }

    /// List users ordered by username
    async fn users(
        &self,
        ctx: &Context<'_>,
        limit: Option<usize>,
        cursor: Option<String>,
    ) -> async_graphql::Result<UserConnection> {
        match run_query(ctx, EngineQuery::UserList(list_options(limit, cursor))).await? {
            EngineQueryResult::UserPage(page) => Ok(page.into()),
            _ => Err(async_graphql::Error::new("unexpected engine query result")),
        }
    }

    /// Look up a tweet by id
    async fn tweet(
        &self,
        ctx: &Context<'_>,
        id: String,
    ) -> async_graphql::Result<Option<GqlTweet>> {
        match run_query(ctx, EngineQuery::TweetGet { tweet_id: id }).await? {
            EngineQueryResult::Tweet(tweet) => Ok(tweet.map(GqlTweet)),
            _ => Err(async_graphql::Error::new("unexpected engine query result")),
        }
    }

    /// List a user's tweets, newest first
    async fn tweets_by_user(
        &self,
        ctx: &Context<'_>,
        user_id: String,
        limit: Option<usize>,
        cursor: Option<String>,
    ) -> async_graphql::Result<TweetConnection> {
        match run_query(
            ctx,
            EngineQuery::TweetListByUser {
                user_id,
                options: list_options(limit, cursor),
            },
        )
        .await?
        {
            EngineQueryResult::TweetPage(page) => Ok(page.into()),
            _ => Err(async_graphql::Error::new("unexpected engine query result")),
        }
    }

    /// A user's timeline: their tweets plus tweets from followed users
    async fn timeline(
        &self,
        ctx: &Context<'_>,
        user_id: String,
        limit: Option<usize>,
        cursor: Option<String>,
    ) -> async_graphql::Result<TweetConnection> {
        match run_query(
            ctx,
            EngineQuery::TimelineGet {
                user_id,
                options: list_options(limit, cursor),
            },
        )
        .await?
        {
            EngineQueryResult::TweetPage(page) => Ok(page.into()),
            _ => Err(async_graphql::Error::new("unexpected engine query result")),
        }
    }

    /// Whether follower → followee exists in the follow graph
    async fn is_following(
        &self,
        ctx: &Context<'_>,
        follower_id: String,
        followee_id: String,
    ) -> async_graphql::Result<bool> {
        match run_query(
            ctx,
            EngineQuery::FollowCheck {
                follower_id,
                followee_id,
            },
        )
        .await?
        {
            EngineQueryResult::Bool(answer) => Ok(answer),
            _ => Err(async_graphql::Error::new("unexpected engine query result")),
        }
    }
}
