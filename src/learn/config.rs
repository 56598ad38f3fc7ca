//! Configuration and database path discovery

use std::env;
use std::path::PathBuf;

/// Environment variable naming the learning database
pub const DB_ENV_VAR: &str = "LEARN_DB";

/// Database file used when nothing else is configured
pub const DEFAULT_DB_FILE: &str = "learn.db";

/// Hours subtracted from a stored (UTC) timestamp before taking its date.
/// Practice days run from 4AM to 4AM local time.
pub const DAY_OFFSET_HOURS: i64 = 9;

/// Interval a brand new word starts with, in seconds
pub const BASE_INTERVAL_SECS: f64 = 5.0;

/// Typing time needed to re-earn one doubling of the interval, in seconds
pub const SECONDS_PER_DOUBLING: f64 = 3.0;

/// Default number of rows in the pending review table
pub const PENDING_LIMIT: usize = 50;

/// Get the learning database path
/// Priority: 1. Custom path from the command line, 2. LEARN_DB env var, 3. ./learn.db
pub fn get_db_path(custom_path: Option<&str>) -> PathBuf {
    resolve_db_path(custom_path, env::var(DB_ENV_VAR).ok())
}

fn resolve_db_path(custom_path: Option<&str>, env_path: Option<String>) -> PathBuf {
    // 1. Custom path takes highest priority
    if let Some(path) = custom_path {
        return PathBuf::from(path);
    }

    // 2. Environment, ignoring an empty setting
    if let Some(path) = env_path.filter(|p| !p.is_empty()) {
        return PathBuf::from(path);
    }

    // 3. Fixed default in the working directory
    PathBuf::from(DEFAULT_DB_FILE)
}
