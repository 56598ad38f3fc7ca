//! Relearning burden per practice day
//!
//! Every new word takes some amount of work to learn. Starting at a five
//! second interval and roughly doubling it on each correct answer, a word
//! is about 25 doublings away from being considered learned for a year.
//! A mistake throws away the doublings banked so far, and those
//! repetitions have to be done again. The burden tallies that lost work
//! per day so it can be compared with the time actually spent practicing.

use std::collections::HashMap;
use std::io::Write;

use chrono::NaiveDate;
use log::warn;

use crate::learn::config::{BASE_INTERVAL_SECS, SECONDS_PER_DOUBLING};
use crate::learn::daily::{compute_daily, day_key};
use crate::learn::models::{BurdenLine, DailyTotals, DayBurden, ErrorEvent};
use crate::learn::report::ReportError;
use crate::learn::storage::LearnStorage;

/// Minutes of practice lost by a mistake made at `interval` seconds
pub fn relearn_cost(interval: f64) -> f64 {
    (interval / BASE_INTERVAL_SECS).log2() * SECONDS_PER_DOUBLING / 60.0
}

/// Running tally for the day currently being scanned
#[derive(Debug, Default)]
pub struct Track {
    open: Option<DayBurden>,
    shipped: Vec<DayBurden>,
    index: HashMap<NaiveDate, usize>,
}

impl Track {
    pub fn new() -> Self {
        Self::default()
    }

    /// Account for one mistake made on `date`
    pub fn add(&mut self, date: NaiveDate, interval: f64) {
        if self.open.as_ref().map(|day| day.date) != Some(date) {
            self.ship();
            self.open = Some(DayBurden { date, cost: 0.0 });
        }
        if let Some(day) = self.open.as_mut() {
            day.cost += relearn_cost(interval);
        }
    }

    /// Close the open day, if any
    pub fn ship(&mut self) {
        let Some(day) = self.open.take() else {
            return;
        };

        match self.index.get(&day.date).copied() {
            Some(pos) => {
                // Events for this day were not contiguous; fold into the earlier entry
                warn!("Error events for {} are not grouped together, merging", day.date);
                self.shipped[pos].cost += day.cost;
            }
            None => {
                self.index.insert(day.date, self.shipped.len());
                self.shipped.push(day);
            }
        }
    }

    /// Ship the last open day and return every day in order of first appearance
    pub fn finish(mut self) -> Vec<DayBurden> {
        self.ship();
        self.shipped
    }
}

/// Burden per day for events given newest first
pub fn tally_burden<'a, I>(events: I) -> Vec<DayBurden>
where
    I: IntoIterator<Item = &'a ErrorEvent>,
{
    events
        .into_iter()
        .fold(Track::new(), |mut track, event| {
            track.add(day_key(&event.stamp), event.interval);
            track
        })
        .finish()
}

/// Pair each day's burden with the minutes practiced that day
pub fn burden_report(events: &[ErrorEvent], daily: &DailyTotals) -> Vec<BurdenLine> {
    tally_burden(events)
        .into_iter()
        .map(|day| BurdenLine {
            total: daily.get(&day.date).copied().unwrap_or(0.0),
            date: day.date,
            cost: day.cost,
        })
        .collect()
}

/// Read the practice history and mistakes, and build the per-day report
pub fn load_burden(storage: &LearnStorage) -> Result<Vec<BurdenLine>, ReportError> {
    let daily = compute_daily(&storage.load_sessions()?);
    let events = storage.load_errors()?;
    Ok(burden_report(&events, &daily))
}

/// Write one line per day
pub fn render_burden<W: Write>(out: &mut W, lines: &[BurdenLine]) -> std::io::Result<()> {
    for line in lines {
        writeln!(
            out,
            "{}     burden:{:6.1}     total:{:6.1}     over:{:6.1}",
            line.date.format("%Y-%m-%d"),
            line.cost,
            line.total,
            line.over()
        )?;
    }
    Ok(())
}
