use rusqlite::Connection;
use warbler_core_types::Sensitive;
use warbler_engine::{apply_engine_command, EngineCommand, EngineCommandResult};
use warbler_store::{db, migrations};

/// Open a migrated in-memory database for testing
pub fn setup_db() -> Connection {
    let mut conn = db::open_in_memory().unwrap();
    db::configure(&conn).unwrap();
    migrations::apply_migrations(&mut conn).unwrap();
    conn
}

/// Sign up a test user and return their id
#[allow(dead_code)]
pub fn sign_up(conn: &mut Connection, username: &str) -> String {
    let result = apply_engine_command(
        EngineCommand::SignUp {
            username: username.to_string(),
            display_name: format!("User {}", username),
            password: Sensitive::new(format!("{}-password", username)),
        },
        conn,
    )
    .unwrap();

    match result {
        EngineCommandResult::User(user) => user.id,
        other => panic!("expected User result, got {:?}", other),
    }
}

/// Post a tweet and return its id
#[allow(dead_code)]
pub fn post_tweet(conn: &mut Connection, user_id: &str, body: &str) -> String {
    let result = apply_engine_command(
        EngineCommand::PostTweet {
            user_id: user_id.to_string(),
            body: body.to_string(),
        },
        conn,
    )
    .unwrap();

    match result {
        EngineCommandResult::Tweet(tweet) => tweet.id,
        other => panic!("expected Tweet result, got {:?}", other),
    }
}

/// Create a follow edge
#[allow(dead_code)]
pub fn follow(conn: &mut Connection, follower_id: &str, followee_id: &str) {
    apply_engine_command(
        EngineCommand::Follow {
            follower_id: follower_id.to_string(),
            followee_id: followee_id.to_string(),
        },
        conn,
    )
    .unwrap();
}
