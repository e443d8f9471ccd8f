//! End-to-end flows through the command/query surface

mod common;

use common::{follow, post_tweet, setup_db, sign_up};
use warbler_core_types::Sensitive;
use warbler_engine::{
    apply_engine_command, apply_engine_query, EngineCommand, EngineCommandResult, EngineQuery,
    EngineQueryResult, ListOptions,
};

#[test]
fn test_sign_up_then_log_in() {
    let mut conn = setup_db();
    let user_id = sign_up(&mut conn, "alice");

    let result = apply_engine_command(
        EngineCommand::LogIn {
            username: "alice".to_string(),
            password: Sensitive::new("alice-password".to_string()),
        },
        &mut conn,
    )
    .unwrap();

    match result {
        EngineCommandResult::User(user) => assert_eq!(user.id, user_id),
        other => panic!("expected User, got {:?}", other),
    }
}

#[test]
fn test_log_in_wrong_password() {
    let mut conn = setup_db();
    sign_up(&mut conn, "alice");

    let err = apply_engine_command(
        EngineCommand::LogIn {
            username: "alice".to_string(),
            password: Sensitive::new("wrong".to_string()),
        },
        &mut conn,
    )
    .unwrap_err();
    assert_eq!(err.code(), "ERR_INVALID_CREDENTIALS");

    // Unknown user yields the same code
    let err = apply_engine_command(
        EngineCommand::LogIn {
            username: "nobody".to_string(),
            password: Sensitive::new("x".to_string()),
        },
        &mut conn,
    )
    .unwrap_err();
    assert_eq!(err.code(), "ERR_INVALID_CREDENTIALS");
}

#[test]
fn test_duplicate_username_rejected() {
    let mut conn = setup_db();
    sign_up(&mut conn, "alice");

    let err = apply_engine_command(
        EngineCommand::SignUp {
            username: "alice".to_string(),
            display_name: "Another Alice".to_string(),
            password: Sensitive::new("pw".to_string()),
        },
        &mut conn,
    )
    .unwrap_err();
    assert_eq!(err.code(), "ERR_USERNAME_TAKEN");
}

#[test]
fn test_update_profile_partial() {
    let mut conn = setup_db();
    let user_id = sign_up(&mut conn, "alice");

    let result = apply_engine_command(
        EngineCommand::UpdateProfile {
            user_id: user_id.clone(),
            display_name: None,
            bio: Some("rustacean".to_string()),
            avatar_url: None,
        },
        &mut conn,
    )
    .unwrap();

    match result {
        EngineCommandResult::User(user) => {
            assert_eq!(user.bio.as_deref(), Some("rustacean"));
            // Display name untouched
            assert_eq!(user.display_name, "User alice");
        }
        other => panic!("expected User, got {:?}", other),
    }
}

#[test]
fn test_post_and_get_tweet() {
    let mut conn = setup_db();
    let user_id = sign_up(&mut conn, "alice");
    let tweet_id = post_tweet(&mut conn, &user_id, "  hello warbler  ");

    let result = apply_engine_query(
        EngineQuery::TweetGet {
            tweet_id: tweet_id.clone(),
        },
        &conn,
    )
    .unwrap();

    match result {
        EngineQueryResult::Tweet(Some(tweet)) => {
            assert_eq!(tweet.user_id, user_id);
            // Body was trimmed on the way in
            assert_eq!(tweet.body, "hello warbler");
        }
        other => panic!("expected Tweet, got {:?}", other),
    }
}

#[test]
fn test_delete_tweet_author_only() {
    let mut conn = setup_db();
    let alice = sign_up(&mut conn, "alice");
    let bob = sign_up(&mut conn, "bob");
    let tweet_id = post_tweet(&mut conn, &alice, "mine");

    let err = apply_engine_command(
        EngineCommand::DeleteTweet {
            tweet_id: tweet_id.clone(),
            user_id: bob,
        },
        &mut conn,
    )
    .unwrap_err();
    assert_eq!(err.code(), "ERR_FORBIDDEN");

    apply_engine_command(
        EngineCommand::DeleteTweet {
            tweet_id: tweet_id.clone(),
            user_id: alice,
        },
        &mut conn,
    )
    .unwrap();

    let result = apply_engine_query(EngineQuery::TweetGet { tweet_id }, &conn).unwrap();
    assert!(matches!(result, EngineQueryResult::Tweet(None)));
}

#[test]
fn test_timeline_after_follow() {
    let mut conn = setup_db();
    let alice = sign_up(&mut conn, "alice");
    let bob = sign_up(&mut conn, "bob");
    let carol = sign_up(&mut conn, "carol");

    post_tweet(&mut conn, &alice, "alice says hi");
    post_tweet(&mut conn, &bob, "bob says hi");
    post_tweet(&mut conn, &carol, "carol says hi");

    follow(&mut conn, &alice, &bob);

    let result = apply_engine_query(
        EngineQuery::TimelineGet {
            user_id: alice.clone(),
            options: ListOptions::default(),
        },
        &conn,
    )
    .unwrap();

    match result {
        EngineQueryResult::TweetPage(page) => {
            let bodies: Vec<&str> = page.items.iter().map(|t| t.body.as_str()).collect();
            assert_eq!(bodies, vec!["bob says hi", "alice says hi"]);
            assert!(!page.has_more);
        }
        other => panic!("expected TweetPage, got {:?}", other),
    }
}

#[test]
fn test_user_stats() {
    let mut conn = setup_db();
    let alice = sign_up(&mut conn, "alice");
    let bob = sign_up(&mut conn, "bob");
    let carol = sign_up(&mut conn, "carol");

    post_tweet(&mut conn, &alice, "one");
    post_tweet(&mut conn, &alice, "two");
    follow(&mut conn, &bob, &alice);
    follow(&mut conn, &carol, &alice);
    follow(&mut conn, &alice, &bob);

    let result = apply_engine_query(
        EngineQuery::UserStatsGet {
            user_id: alice.clone(),
        },
        &conn,
    )
    .unwrap();

    match result {
        EngineQueryResult::UserStats(stats) => {
            assert_eq!(stats.tweet_count, 2);
            assert_eq!(stats.follower_count, 2);
            assert_eq!(stats.following_count, 1);
        }
        other => panic!("expected UserStats, got {:?}", other),
    }
}

#[test]
fn test_delete_user_cascades_into_queries() {
    let mut conn = setup_db();
    let alice = sign_up(&mut conn, "alice");
    let bob = sign_up(&mut conn, "bob");
    let tweet_id = post_tweet(&mut conn, &bob, "bob's tweet");

    follow(&mut conn, &alice, &bob);
    apply_engine_command(
        EngineCommand::Like {
            user_id: alice.clone(),
            tweet_id: tweet_id.clone(),
        },
        &mut conn,
    )
    .unwrap();

    apply_engine_command(EngineCommand::DeleteUser { user_id: alice }, &mut conn).unwrap();

    let result = apply_engine_query(
        EngineQuery::TweetStatsGet {
            tweet_id: tweet_id.clone(),
        },
        &conn,
    )
    .unwrap();
    match result {
        EngineQueryResult::TweetStats(stats) => assert_eq!(stats.like_count, 0),
        other => panic!("expected TweetStats, got {:?}", other),
    }

    let result = apply_engine_query(
        EngineQuery::UserStatsGet { user_id: bob },
        &conn,
    )
    .unwrap();
    match result {
        EngineQueryResult::UserStats(stats) => assert_eq!(stats.follower_count, 0),
        other => panic!("expected UserStats, got {:?}", other),
    }
}
