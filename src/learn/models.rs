//! Data models for the learning database reports

use std::collections::HashMap;

use chrono::{NaiveDate, NaiveDateTime};

/// One practice session from the `history` table
#[derive(Debug, Clone, PartialEq)]
pub struct SessionInterval {
    pub start: NaiveDateTime,
    /// `None` when the session did not exit cleanly
    pub stop: Option<NaiveDateTime>,
}

/// A mistake recorded in the `errors` table
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorEvent {
    pub stamp: NaiveDateTime,
    /// Interval in seconds the word had reached before the mistake
    pub interval: f64,
}

/// Scheduling state of one word from the `learn` table
#[derive(Debug, Clone, PartialEq)]
pub struct LearnItem {
    pub word: String,
    pub goods: i64,
    /// Seconds
    pub interval: f64,
    /// Unix time (seconds) when the word is due
    pub next: f64,
}

/// Minutes practiced, keyed by practice day
pub type DailyTotals = HashMap<NaiveDate, f64>;

/// Relearning burden accumulated on a single day
#[derive(Debug, Clone, PartialEq)]
pub struct DayBurden {
    pub date: NaiveDate,
    /// Minutes of practice needed to redo the lost doublings
    pub cost: f64,
}

/// Burden for a day alongside the time actually spent
#[derive(Debug, Clone, PartialEq)]
pub struct BurdenLine {
    pub date: NaiveDate,
    pub cost: f64,
    pub total: f64,
}

impl BurdenLine {
    /// Minutes practiced beyond what the day's mistakes cost
    pub fn over(&self) -> f64 {
        self.total - self.cost
    }
}

/// One row of the pending review table
#[derive(Debug, Clone, PartialEq)]
pub struct PendingRow {
    pub word: String,
    pub goods: i64,
    pub interval_minutes: f64,
    pub due_in_minutes: f64,
    pub due_in_seconds: f64,
}

/// Count of words falling in a named time range
#[derive(Debug, Clone, PartialEq)]
pub struct Bucket {
    pub name: &'static str,
    pub count: u64,
}

/// Everything shown by the learning summary
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LearnSummary {
    pub due_count: u64,
    pub intervals: Vec<Bucket>,
    pub dues: Vec<Bucket>,
    pub minutes_practiced: f64,
}
