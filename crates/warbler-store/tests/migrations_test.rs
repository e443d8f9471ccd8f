//! Migration framework integration tests against an on-disk database

use warbler_store::{db, migrations};

#[test]
fn test_migrations_apply_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("warbler.db");

    let mut conn = db::open(&path).unwrap();
    db::configure(&conn).unwrap();
    migrations::apply_migrations(&mut conn).unwrap();

    // All tables exist
    for table in ["users", "tweets", "follows", "likes", "retweets"] {
        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?",
                [table],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(count, 1, "missing table {}", table);
    }
}

#[test]
fn test_migrations_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("warbler.db");

    {
        let mut conn = db::open(&path).unwrap();
        db::configure(&conn).unwrap();
        migrations::apply_migrations(&mut conn).unwrap();
    }

    // Reopen and re-apply: idempotent
    let mut conn = db::open(&path).unwrap();
    db::configure(&conn).unwrap();
    migrations::apply_migrations(&mut conn).unwrap();

    assert_eq!(migrations::runner::schema_version(&conn).unwrap(), 2);
}

#[test]
fn test_checksums_recorded() {
    let mut conn = db::open_in_memory().unwrap();
    migrations::apply_migrations(&mut conn).unwrap();

    let checksums: Vec<Option<String>> = conn
        .prepare("SELECT checksum FROM schema_version ORDER BY id")
        .unwrap()
        .query_map([], |row| row.get(0))
        .unwrap()
        .collect::<Result<Vec<_>, _>>()
        .unwrap();

    assert_eq!(checksums.len(), 2);
    for checksum in checksums {
        let checksum = checksum.expect("checksum recorded");
        assert_eq!(checksum.len(), 64);
    }
}
