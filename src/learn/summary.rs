//! Overall learning progress: words due and how intervals are spread

use std::io::Write;

use crate::learn::daily::total_minutes;
use crate::learn::models::{Bucket, LearnItem, LearnSummary};
use crate::learn::report::ReportError;
use crate::learn::storage::LearnStorage;

// Time constants, in seconds
const MIN: u64 = 60;
const HOUR: u64 = 60 * MIN;
const DAY: u64 = 24 * HOUR;
const WEEK: u64 = 7 * DAY;
const MONTH: u64 = 4 * WEEK;
const YEAR: u64 = 52 * WEEK;

/// A named bucket and its exclusive upper limit
struct BucketLimit {
    name: &'static str,
    limit: f64,
}

static BUCKETS: &[BucketLimit] = &[
    BucketLimit { name: "fresh", limit: (10 * MIN) as f64 },
    BucketLimit { name: "10min", limit: HOUR as f64 },
    BucketLimit { name: "hour", limit: (6 * HOUR) as f64 },
    BucketLimit { name: "6hour", limit: DAY as f64 },
    BucketLimit { name: "day", limit: WEEK as f64 },
    BucketLimit { name: "week", limit: MONTH as f64 },
    BucketLimit { name: "month", limit: YEAR as f64 },
    BucketLimit { name: "solid", limit: f64::MAX },
];

/// Count values into the bucket ladder; each lands in the first bucket whose limit exceeds it
pub fn bucketize<I>(values: I) -> Vec<Bucket>
where
    I: IntoIterator<Item = f64>,
{
    let mut result: Vec<Bucket> = BUCKETS
        .iter()
        .map(|b| Bucket { name: b.name, count: 0 })
        .collect();

    for value in values {
        if let Some(pos) = BUCKETS.iter().position(|b| value < b.limit) {
            result[pos].count += 1;
        }
    }

    result
}

/// Summarize the learn table as of `now` (Unix seconds)
pub fn summarize(items: &[LearnItem], now: f64, minutes_practiced: f64) -> LearnSummary {
    LearnSummary {
        due_count: items.iter().filter(|item| item.next < now).count() as u64,
        intervals: bucketize(items.iter().map(|item| item.interval)),
        dues: bucketize(items.iter().map(|item| item.next - now)),
        minutes_practiced,
    }
}

/// Read the learn table and practice history and summarize them
pub fn load_summary(storage: &LearnStorage, now: f64) -> Result<LearnSummary, ReportError> {
    let items = storage.load_learn_items()?;
    let minutes = total_minutes(&storage.load_sessions()?);
    Ok(summarize(&items, now, minutes))
}

pub fn render_summary<W: Write>(out: &mut W, summary: &LearnSummary) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{} words due", summary.due_count)?;
    writeln!(out, "      : inter  next total")?;

    let mut running = 0;
    for (bucket, due) in summary.intervals.iter().zip(&summary.dues) {
        running += due.count;
        if bucket.count > 0 || due.count > 0 {
            writeln!(out, "{:6}: {:5} {:5} {:5}", bucket.name, bucket.count, due.count, running)?;
        }
    }

    writeln!(out, "------: ----")?;
    writeln!(out, "{:6}: {:5}", "", summary.intervals.iter().map(|b| b.count).sum::<u64>())?;
    writeln!(out, "{:.1} minutes practiced", summary.minutes_practiced)?;
    Ok(())
}
