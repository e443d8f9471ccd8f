//! Follow/like/retweet command behavior and error codes

mod common;

use common::{follow, post_tweet, setup_db, sign_up};
use warbler_engine::{
    apply_engine_command, apply_engine_query, EngineCommand, EngineQuery, EngineQueryResult,
    ListOptions,
};

#[test]
fn test_self_follow_rejected() {
    let mut conn = setup_db();
    let alice = sign_up(&mut conn, "alice");

    let err = apply_engine_command(
        EngineCommand::Follow {
            follower_id: alice.clone(),
            followee_id: alice,
        },
        &mut conn,
    )
    .unwrap_err();
    assert_eq!(err.code(), "ERR_SELF_FOLLOW");
}

#[test]
fn test_double_follow_rejected() {
    let mut conn = setup_db();
    let alice = sign_up(&mut conn, "alice");
    let bob = sign_up(&mut conn, "bob");
    follow(&mut conn, &alice, &bob);

    let err = apply_engine_command(
        EngineCommand::Follow {
            follower_id: alice.clone(),
            followee_id: bob.clone(),
        },
        &mut conn,
    )
    .unwrap_err();
    assert_eq!(err.code(), "ERR_ALREADY_FOLLOWING");

    // The reverse direction is a separate edge and still allowed
    apply_engine_command(
        EngineCommand::Follow {
            follower_id: bob,
            followee_id: alice,
        },
        &mut conn,
    )
    .unwrap();
}

#[test]
fn test_unfollow_missing_edge() {
    let mut conn = setup_db();
    let alice = sign_up(&mut conn, "alice");
    let bob = sign_up(&mut conn, "bob");

    let err = apply_engine_command(
        EngineCommand::Unfollow {
            follower_id: alice,
            followee_id: bob,
        },
        &mut conn,
    )
    .unwrap_err();
    assert_eq!(err.code(), "ERR_NOT_FOLLOWING");
}

#[test]
fn test_follow_unknown_user() {
    let mut conn = setup_db();
    let alice = sign_up(&mut conn, "alice");

    let err = apply_engine_command(
        EngineCommand::Follow {
            follower_id: alice,
            followee_id: "ghost".to_string(),
        },
        &mut conn,
    )
    .unwrap_err();
    assert_eq!(err.code(), "ERR_USER_NOT_FOUND");
}

#[test]
fn test_like_at_most_once() {
    let mut conn = setup_db();
    let alice = sign_up(&mut conn, "alice");
    let tweet_id = post_tweet(&mut conn, &alice, "like me");

    apply_engine_command(
        EngineCommand::Like {
            user_id: alice.clone(),
            tweet_id: tweet_id.clone(),
        },
        &mut conn,
    )
    .unwrap();

    let err = apply_engine_command(
        EngineCommand::Like {
            user_id: alice.clone(),
            tweet_id: tweet_id.clone(),
        },
        &mut conn,
    )
    .unwrap_err();
    assert_eq!(err.code(), "ERR_ALREADY_LIKED");

    // Unlike then like again works
    apply_engine_command(
        EngineCommand::Unlike {
            user_id: alice.clone(),
            tweet_id: tweet_id.clone(),
        },
        &mut conn,
    )
    .unwrap();
    apply_engine_command(
        EngineCommand::Like {
            user_id: alice,
            tweet_id,
        },
        &mut conn,
    )
    .unwrap();
}

#[test]
fn test_unlike_without_like() {
    let mut conn = setup_db();
    let alice = sign_up(&mut conn, "alice");
    let tweet_id = post_tweet(&mut conn, &alice, "x");

    let err = apply_engine_command(
        EngineCommand::Unlike {
            user_id: alice,
            tweet_id,
        },
        &mut conn,
    )
    .unwrap_err();
    assert_eq!(err.code(), "ERR_NOT_LIKED");
}

#[test]
fn test_retweet_at_most_once() {
    let mut conn = setup_db();
    let alice = sign_up(&mut conn, "alice");
    let bob = sign_up(&mut conn, "bob");
    let tweet_id = post_tweet(&mut conn, &alice, "retweet me");

    apply_engine_command(
        EngineCommand::Retweet {
            user_id: bob.clone(),
            tweet_id: tweet_id.clone(),
        },
        &mut conn,
    )
    .unwrap();

    let err = apply_engine_command(
        EngineCommand::Retweet {
            user_id: bob.clone(),
            tweet_id: tweet_id.clone(),
        },
        &mut conn,
    )
    .unwrap_err();
    assert_eq!(err.code(), "ERR_ALREADY_RETWEETED");

    let err = apply_engine_command(
        EngineCommand::Unretweet {
            user_id: alice,
            tweet_id,
        },
        &mut conn,
    )
    .unwrap_err();
    assert_eq!(err.code(), "ERR_NOT_RETWEETED");
}

#[test]
fn test_like_unknown_tweet() {
    let mut conn = setup_db();
    let alice = sign_up(&mut conn, "alice");

    let err = apply_engine_command(
        EngineCommand::Like {
            user_id: alice,
            tweet_id: "ghost-tweet".to_string(),
        },
        &mut conn,
    )
    .unwrap_err();
    assert_eq!(err.code(), "ERR_TWEET_NOT_FOUND");
}

#[test]
fn test_liker_and_retweeter_lists() {
    let mut conn = setup_db();
    let alice = sign_up(&mut conn, "alice");
    let bob = sign_up(&mut conn, "bob");
    let tweet_id = post_tweet(&mut conn, &alice, "popular");

    for user in [&alice, &bob] {
        apply_engine_command(
            EngineCommand::Like {
                user_id: user.clone(),
                tweet_id: tweet_id.clone(),
            },
            &mut conn,
        )
        .unwrap();
    }
    apply_engine_command(
        EngineCommand::Retweet {
            user_id: bob.clone(),
            tweet_id: tweet_id.clone(),
        },
        &mut conn,
    )
    .unwrap();

    let result = apply_engine_query(
        EngineQuery::LikerList {
            tweet_id: tweet_id.clone(),
            options: ListOptions::default(),
        },
        &conn,
    )
    .unwrap();
    match result {
        EngineQueryResult::UserPage(page) => assert_eq!(page.items.len(), 2),
        other => panic!("expected UserPage, got {:?}", other),
    }

    let result = apply_engine_query(
        EngineQuery::RetweeterList {
            tweet_id,
            options: ListOptions::default(),
        },
        &conn,
    )
    .unwrap();
    match result {
        EngineQueryResult::UserPage(page) => {
            assert_eq!(page.items.len(), 1);
            assert_eq!(page.items[0].id, bob);
        }
        other => panic!("expected UserPage, got {:?}", other),
    }
}

#[test]
fn test_follow_check_query() {
    let mut conn = setup_db();
    let alice = sign_up(&mut conn, "alice");
    let bob = sign_up(&mut conn, "bob");
    follow(&mut conn, &alice, &bob);

    let result = apply_engine_query(
        EngineQuery::FollowCheck {
            follower_id: alice.clone(),
            followee_id: bob.clone(),
        },
        &conn,
    )
    .unwrap();
    assert!(matches!(result, EngineQueryResult::Bool(true)));

    let result = apply_engine_query(
        EngineQuery::FollowCheck {
            follower_id: bob,
            followee_id: alice,
        },
        &conn,
    )
    .unwrap();
    assert!(matches!(result, EngineQueryResult::Bool(false)));
}
