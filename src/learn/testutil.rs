//! Scratch databases for tests

use std::path::PathBuf;

use rusqlite::Connection;
use tempfile::TempDir;

/// The tables as the learning application creates them
const SCHEMA: &str = r#"
    CREATE TABLE learn (
        word TEXT UNIQUE PRIMARY KEY,
        steno TEXT NOT NULL,
        goods INTEGER NOT NULL,
        interval REAL NOT NULL,
        factor REAL NOT NULL,
        next REAL NOT NULL);
    CREATE TABLE history (
        entry TEXT NOT NULL,
        start DATETIME NOT NULL,
        stop DATETIME);
    CREATE TABLE errors (
        stamp DATETIME NOT NULL,
        word TEXT NOT NULL,
        goods INTEGER NOT NULL,
        interval REAL NOT NULL,
        next REAL NOT NULL,
        actual TEXT NOT NULL);
"#;

/// Create a scratch database and populate it with `sql`.
/// Keep the returned directory alive for as long as the path is used.
pub fn scratch_db(sql: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("learn.db");
    let conn = Connection::open(&path).unwrap();
    conn.execute_batch(SCHEMA).unwrap();
    conn.execute_batch(sql).unwrap();
    (dir, path)
}
