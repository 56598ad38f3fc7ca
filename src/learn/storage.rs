//! Read-only SQLite access to the learning database

use std::path::Path;

use chrono::{DateTime, NaiveDateTime};
use log::{debug, info};
use rusqlite::{params, Connection, OpenFlags};
use thiserror::Error;

use super::models::{ErrorEvent, LearnItem, SessionInterval};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),
    #[error("Invalid timestamp: {0:?}")]
    InvalidTimestamp(String),
}

/// Formats SQLite's `datetime()` and friends produce
const TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse a stored DATETIME value. Values are UTC.
pub fn parse_timestamp(text: &str) -> Result<NaiveDateTime, StorageError> {
    let text = text.trim();
    for fmt in TIMESTAMP_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(text, fmt) {
            return Ok(ts);
        }
    }
    DateTime::parse_from_rfc3339(text)
        .map(|dt| dt.naive_utc())
        .map_err(|_| StorageError::InvalidTimestamp(text.to_string()))
}

/// Reader over the tables written by the learning application
pub struct LearnStorage {
    conn: Connection,
}

impl LearnStorage {
    /// Open an existing database. The file is never created or modified.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StorageError> {
        let path = path.as_ref();
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        info!("Opened learning database {:?}", path);
        Ok(Self { conn })
    }

    /// All practice sessions, oldest first
    pub fn load_sessions(&self) -> Result<Vec<SessionInterval>, StorageError> {
        let mut stmt = self.conn.prepare("SELECT start, stop FROM history ORDER BY start")?;

        let rows = stmt.query_map([], |row| {
            let start: String = row.get(0)?;
            let stop: Option<String> = row.get(1)?;
            Ok((start, stop))
        })?;

        let mut sessions = Vec::new();
        for row in rows {
            let (start, stop) = row?;
            sessions.push(SessionInterval {
                start: parse_timestamp(&start)?,
                stop: stop.as_deref().map(parse_timestamp).transpose()?,
            });
        }

        debug!("Loaded {} history rows", sessions.len());
        Ok(sessions)
    }

    /// All recorded mistakes, newest first
    pub fn load_errors(&self) -> Result<Vec<ErrorEvent>, StorageError> {
        let mut stmt = self.conn.prepare("SELECT stamp, interval FROM errors ORDER BY stamp DESC")?;

        let rows = stmt.query_map([], |row| {
            let stamp: String = row.get(0)?;
            let interval: f64 = row.get(1)?;
            Ok((stamp, interval))
        })?;

        let mut events = Vec::new();
        for row in rows {
            let (stamp, interval) = row?;
            events.push(ErrorEvent {
                stamp: parse_timestamp(&stamp)?,
                interval,
            });
        }

        debug!("Loaded {} error rows", events.len());
        Ok(events)
    }

    /// The words due soonest, up to `limit` of them
    pub fn load_pending(&self, limit: usize) -> Result<Vec<LearnItem>, StorageError> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let mut stmt = self.conn.prepare(
            "SELECT word, goods, interval, next FROM learn
             ORDER BY next
             LIMIT ?1",
        )?;

        let items = stmt
            .query_map(params![limit], learn_item_from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        debug!("Loaded {} pending words", items.len());
        Ok(items)
    }

    /// Every word in the learn table
    pub fn load_learn_items(&self) -> Result<Vec<LearnItem>, StorageError> {
        let mut stmt = self.conn.prepare("SELECT word, goods, interval, next FROM learn")?;

        let items = stmt
            .query_map([], learn_item_from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        debug!("Loaded {} learn rows", items.len());
        Ok(items)
    }
}

fn learn_item_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<LearnItem> {
    Ok(LearnItem {
        word: row.get(0)?,
        goods: row.get(1)?,
        interval: row.get(2)?,
        next: row.get(3)?,
    })
}
