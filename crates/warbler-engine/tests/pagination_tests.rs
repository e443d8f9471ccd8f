//! Cursor pagination across the query surface

mod common;

use common::{follow, post_tweet, setup_db, sign_up};
use warbler_engine::{
    apply_engine_query, EngineQuery, EngineQueryResult, ListOptions, Page,
};

fn tweet_page(
    conn: &rusqlite::Connection,
    user_id: &str,
    limit: usize,
    cursor: Option<String>,
) -> Page<warbler_core::model::Tweet> {
    let result = apply_engine_query(
        EngineQuery::TimelineGet {
            user_id: user_id.to_string(),
            options: ListOptions {
                limit: Some(limit),
                cursor,
            },
        },
        conn,
    )
    .unwrap();
    match result {
        EngineQueryResult::TweetPage(page) => page,
        other => panic!("expected TweetPage, got {:?}", other),
    }
}

#[test]
fn test_timeline_cursor_walk_is_complete_and_duplicate_free() {
    let mut conn = setup_db();
    let alice = sign_up(&mut conn, "alice");
    let bob = sign_up(&mut conn, "bob");
    follow(&mut conn, &alice, &bob);

    let mut expected = Vec::new();
    for i in 0..7 {
        let author = if i % 2 == 0 { &alice } else { &bob };
        expected.push(post_tweet(&mut conn, author, &format!("tweet {}", i)));
    }
    expected.reverse(); // newest first

    let mut collected = Vec::new();
    let mut cursor = None;
    loop {
        let page = tweet_page(&conn, &alice, 3, cursor);
        collected.extend(page.items.into_iter().map(|t| t.id));
        if !page.has_more {
            break;
        }
        cursor = page.cursor;
        assert!(cursor.is_some());
    }

    assert_eq!(collected, expected);
}

#[test]
fn test_page_boundary_exact_multiple() {
    let mut conn = setup_db();
    let alice = sign_up(&mut conn, "alice");
    for i in 0..4 {
        post_tweet(&mut conn, &alice, &format!("tweet {}", i));
    }

    let first = tweet_page(&conn, &alice, 2, None);
    assert_eq!(first.items.len(), 2);
    assert!(first.has_more);

    let second = tweet_page(&conn, &alice, 2, first.cursor);
    assert_eq!(second.items.len(), 2);
    // Exactly consumed: no third page
    assert!(!second.has_more);
    assert!(second.cursor.is_none());
}

#[test]
fn test_malformed_cursor_restarts_from_top() {
    let mut conn = setup_db();
    let alice = sign_up(&mut conn, "alice");
    post_tweet(&mut conn, &alice, "only tweet");

    let page = tweet_page(&conn, &alice, 10, Some("%%%garbage%%%".to_string()));
    assert_eq!(page.items.len(), 1);
}

#[test]
fn test_user_list_pagination_by_username() {
    let mut conn = setup_db();
    for name in ["dave", "alice", "carol", "bob"] {
        sign_up(&mut conn, name);
    }

    let result = apply_engine_query(
        EngineQuery::UserList(ListOptions {
            limit: Some(3),
            cursor: None,
        }),
        &conn,
    )
    .unwrap();

    let page = match result {
        EngineQueryResult::UserPage(page) => page,
        other => panic!("expected UserPage, got {:?}", other),
    };
    let names: Vec<&str> = page.items.iter().map(|u| u.username.as_str()).collect();
    assert_eq!(names, vec!["alice", "bob", "carol"]);
    assert!(page.has_more);

    let result = apply_engine_query(
        EngineQuery::UserList(ListOptions {
            limit: Some(3),
            cursor: page.cursor,
        }),
        &conn,
    )
    .unwrap();
    let page = match result {
        EngineQueryResult::UserPage(page) => page,
        other => panic!("expected UserPage, got {:?}", other),
    };
    let names: Vec<&str> = page.items.iter().map(|u| u.username.as_str()).collect();
    assert_eq!(names, vec!["dave"]);
    assert!(!page.has_more);
}

#[test]
fn test_follower_list_pagination() {
    let mut conn = setup_db();
    let alice = sign_up(&mut conn, "alice");
    let mut followers = Vec::new();
    for name in ["bob", "carol", "dave", "erin", "frank"] {
        let id = sign_up(&mut conn, name);
        follow(&mut conn, &id, &alice);
        followers.push(id);
    }

    let mut collected = Vec::new();
    let mut cursor = None;
    loop {
        let result = apply_engine_query(
            EngineQuery::FollowerList {
                user_id: alice.clone(),
                options: ListOptions {
                    limit: Some(2),
                    cursor,
                },
            },
            &conn,
        )
        .unwrap();
        let page = match result {
            EngineQueryResult::UserPage(page) => page,
            other => panic!("expected UserPage, got {:?}", other),
        };
        collected.extend(page.items.into_iter().map(|u| u.id));
        if !page.has_more {
            break;
        }
        cursor = page.cursor;
    }

    assert_eq!(collected.len(), 5);
    let mut sorted = collected.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(sorted.len(), 5, "no duplicates across pages");
}
