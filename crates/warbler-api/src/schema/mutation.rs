//! Mutation root
//!
//! Mutations take explicit actor ids. Token issuance and session storage are
//! deliberately absent; `logIn` verifies credentials and returns the user.

use async_graphql::{Context, Object};
use warbler_core_types::Sensitive;
use warbler_engine::{apply_engine_command, EngineCommand, EngineCommandResult};

use crate::error::to_graphql_error;
use crate::schema::lock_db;
use crate::schema::types::{GqlTweet, GqlUser};

/// Write entry points
pub struct MutationRoot;

/// Run a command against the shared connection
async fn run_command(
    ctx: &Context<'_>,
    cmd: EngineCommand,
) -> async_graphql::Result<EngineCommandResult> {
    let mut conn = lock_db(ctx).await?;
    apply_engine_command(cmd, &mut conn).map_err(to_graphql_error)
}

fn expect_user(result: EngineCommandResult) -> async_graphql::Result<GqlUser> {
    match result {
        EngineCommandResult::User(user) => Ok(GqlUser(user)),
        _ => Err(async_graphql::Error::new("unexpected engine command result")),
    }
}

#[Object]
impl MutationRoot {
    /// Register a new account
    async fn sign_up(
        &self,
        ctx: &Context<'_>,
        username: String,
        display_name: String,
        password: String,
    ) -> async_graphql::Result<GqlUser> {
        let result = run_command(
            ctx,
            EngineCommand::SignUp {
                username,
                display_name,
                password: Sensitive::new(password),
            },
        )
        .await?;
        expect_user(result)
    }

    /// Verify credentials; returns the user on success
    async fn log_in(
        &self,
        ctx: &Context<'_>,
        username: String,
        password: String,
    ) -> async_graphql::Result<GqlUser> {
        let result = run_command(
            ctx,
            EngineCommand::LogIn {
                username,
                password: Sensitive::new(password),
            },
        )
        .await?;
        expect_user(result)
    }

    /// Update profile fields; omitted fields are unchanged
    async fn update_profile(
        &self,
        ctx: &Context<'_>,
        user_id: String,
        display_name: Option<String>,
        bio: Option<String>,
        avatar_url: Option<String>,
    ) -> async_graphql::Result<GqlUser> {
        let result = run_command(
            ctx,
            EngineCommand::UpdateProfile {
                user_id,
                display_name,
                bio,
                avatar_url,
            },
        )
        .await?;
        expect_user(result)
    }

    /// Delete an account; tweets and engagement cascade
    async fn delete_user(&self, ctx: &Context<'_>, user_id: String) -> async_graphql::Result<bool> {
        run_command(ctx, EngineCommand::DeleteUser { user_id }).await?;
        Ok(true)
    }

    /// Post a tweet
    async fn post_tweet(
        &self,
        ctx: &Context<'_>,
        user_id: String,
        body: String,
    ) -> async_graphql::Result<GqlTweet> {
        let result = run_command(ctx, EngineCommand::PostTweet { user_id, body }).await?;
        match result {
            EngineCommandResult::Tweet(tweet) => Ok(GqlTweet(tweet)),
            _ => Err(async_graphql::Error::new("unexpected engine command result")),
        }
    }

    /// Delete a tweet (author only)
    async fn delete_tweet(
        &self,
        ctx: &Context<'_>,
        tweet_id: String,
        user_id: String,
    ) -> async_graphql::Result<bool> {
        run_command(ctx, EngineCommand::DeleteTweet { tweet_id, user_id }).await?;
        Ok(true)
    }

    /// Follow a user
    async fn follow(
        &self,
        ctx: &Context<'_>,
        follower_id: String,
        followee_id: String,
    ) -> async_graphql::Result<bool> {
        run_command(
            ctx,
            EngineCommand::Follow {
                follower_id,
                followee_id,
            },
        )
        .await?;
        Ok(true)
    }

    /// Unfollow a user
    async fn unfollow(
        &self,
        ctx: &Context<'_>,
        follower_id: String,
        followee_id: String,
    ) -> async_graphql::Result<bool> {
        run_command(
            ctx,
            EngineCommand::Unfollow {
                follower_id,
                followee_id,
            },
        )
        .await?;
        Ok(true)
    }

    /// Like a tweet
    async fn like(
        &self,
        ctx: &Context<'_>,
        user_id: String,
        tweet_id: String,
    ) -> async_graphql::Result<bool> {
        run_command(ctx, EngineCommand::Like { user_id, tweet_id }).await?;
        Ok(true)
    }

    /// Remove a like
    async fn unlike(
        &self,
        ctx: &Context<'_>,
        user_id: String,
        tweet_id: String,
    ) -> async_graphql::Result<bool> {
        run_command(ctx, EngineCommand::Unlike { user_id, tweet_id }).await?;
        Ok(true)
    }

    /// Retweet a tweet
    async fn retweet(
        &self,
        ctx: &Context<'_>,
        user_id: String,
        tweet_id: String,
    ) -> async_graphql::Result<bool> {
        run_command(ctx, EngineCommand::Retweet { user_id, tweet_id }).await?;
        Ok(true)
    }

    /// Remove a retweet
    async fn unretweet(
        &self,
        ctx: &Context<'_>,
        user_id: String,
        tweet_id: String,
    ) -> async_graphql::Result<bool> {
        run_command(ctx, EngineCommand::Unretweet { user_id, tweet_id }).await?;
        Ok(true)
    }
}
