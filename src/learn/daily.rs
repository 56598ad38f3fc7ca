//! Time practiced per day

use chrono::{Duration, NaiveDate, NaiveDateTime};
use log::debug;

use crate::learn::config::DAY_OFFSET_HOURS;
use crate::learn::models::{DailyTotals, SessionInterval};

/// Practice day a stored timestamp belongs to.
/// The day starts DAY_OFFSET_HOURS after UTC midnight.
pub fn day_key(stamp: &NaiveDateTime) -> NaiveDate {
    (*stamp - Duration::hours(DAY_OFFSET_HOURS)).date()
}

/// Minutes between start and stop of a finished session
pub fn session_minutes(session: &SessionInterval) -> Option<f64> {
    let stop = session.stop?;
    let elapsed = stop - session.start;
    Some(elapsed.num_milliseconds() as f64 / 60_000.0)
}

/// Sum session time per practice day, keyed by the day of each session's start
pub fn compute_daily(sessions: &[SessionInterval]) -> DailyTotals {
    let mut daily = DailyTotals::new();
    let mut unfinished = 0usize;

    for session in sessions {
        match session_minutes(session) {
            Some(minutes) => *daily.entry(day_key(&session.start)).or_insert(0.0) += minutes,
            None => unfinished += 1,
        }
    }

    if unfinished > 0 {
        debug!("Skipped {} sessions without a stop time", unfinished);
    }

    daily
}

/// Total minutes across every finished session; 0.0 when there are none
pub fn total_minutes(sessions: &[SessionInterval]) -> f64 {
    // An empty f64 sum is -0.0, which prints with its sign
    sessions.iter().filter_map(session_minutes).fold(0.0, |acc, m| acc + m)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(date: &str, time: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date, time), "%Y-%m-%d %H:%M:%S").unwrap()
    }

    fn session(date: &str, start: &str, stop: &str) -> SessionInterval {
        SessionInterval {
            start: at(date, start),
            stop: Some(at(date, stop)),
        }
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_day_key_offset() {
        assert_eq!(day_key(&at("2021-01-02", "08:59:59")), date("2021-01-01"));
        assert_eq!(day_key(&at("2021-01-02", "09:00:00")), date("2021-01-02"));
        assert_eq!(day_key(&at("2021-01-02", "23:30:00")), date("2021-01-02"));
    }

    #[test]
    fn test_compute_daily_sums_per_day() {
        let sessions = vec![
            session("2021-01-01", "10:00:00", "10:30:00"),
            session("2021-01-01", "12:00:00", "12:15:30"),
            session("2021-01-02", "10:00:00", "11:00:00"),
            // Before the day boundary, so it counts toward the previous day
            session("2021-01-03", "02:00:00", "02:10:00"),
        ];
        let daily = compute_daily(&sessions);

        assert_eq!(daily.len(), 2);
        assert!((daily[&date("2021-01-01")] - 45.5).abs() < 1e-9);
        assert!((daily[&date("2021-01-02")] - 70.0).abs() < 1e-9);
    }

    #[test]
    fn test_compute_daily_order_independent() {
        let mut sessions = vec![
            session("2021-03-05", "10:00:00", "10:20:00"),
            session("2021-03-05", "13:00:00", "13:07:00"),
            session("2021-03-05", "13:00:00", "13:07:00"),
        ];
        let forward = compute_daily(&sessions);
        sessions.reverse();
        let backward = compute_daily(&sessions);

        let key = date("2021-03-05");
        assert!((forward[&key] - 34.0).abs() < 1e-9);
        assert!((forward[&key] - backward[&key]).abs() < 1e-9);
    }

    #[test]
    fn test_unfinished_sessions_ignored() {
        let sessions = vec![
            session("2021-01-01", "10:00:00", "10:10:00"),
            SessionInterval {
                start: at("2021-01-01", "11:00:00"),
                stop: None,
            },
            SessionInterval {
                start: at("2021-01-05", "11:00:00"),
                stop: None,
            },
        ];
        let daily = compute_daily(&sessions);

        assert_eq!(daily.len(), 1);
        assert!((daily[&date("2021-01-01")] - 10.0).abs() < 1e-9);
        assert!((total_minutes(&sessions) - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_total_minutes_without_finished_sessions() {
        let unfinished = vec![SessionInterval {
            start: at("2021-01-01", "11:00:00"),
            stop: None,
        }];
        assert!(total_minutes(&[]).is_sign_positive());
        assert!(total_minutes(&unfinished).is_sign_positive());
        assert_eq!(format!("{:.1}", total_minutes(&[])), "0.0");
    }
}
