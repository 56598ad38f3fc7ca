//! Words coming up for review
//!
//! Useful for deciding whether to add new words: if the words due within
//! the next few minutes all have long intervals, there is room for more.

use std::io::Write;

use crate::learn::models::{LearnItem, PendingRow};
use crate::learn::report::ReportError;
use crate::learn::storage::LearnStorage;

/// Load up to `limit` words, soonest due first, as table rows
pub fn load_pending_rows(
    storage: &LearnStorage,
    limit: usize,
    now: f64,
) -> Result<Vec<PendingRow>, ReportError> {
    let items = storage.load_pending(limit)?;
    Ok(pending_rows(&items, now))
}

/// Convert scheduling state into display values relative to `now` (Unix seconds)
pub fn pending_rows(items: &[LearnItem], now: f64) -> Vec<PendingRow> {
    items
        .iter()
        .map(|item| {
            let due_in = item.next - now;
            PendingRow {
                word: item.word.clone(),
                goods: item.goods,
                interval_minutes: item.interval / 60.0,
                due_in_minutes: due_in / 60.0,
                due_in_seconds: due_in,
            }
        })
        .collect()
}

/// Width of the word column: the longest word, in characters
pub fn column_width(rows: &[PendingRow]) -> Result<usize, ReportError> {
    rows.iter()
        .map(|row| row.word.chars().count())
        .max()
        .ok_or(ReportError::EmptyResult)
}

/// Format a value so that negative ones stand out in parentheses
pub fn negfmt(num: f64) -> String {
    if num < 0.0 {
        format!("({:9.2})", -num)
    } else {
        format!(" {:9.2} ", num)
    }
}

/// Write the ranked table using a word column `width` characters wide
pub fn render_pending<W: Write>(
    out: &mut W,
    rows: &[PendingRow],
    width: usize,
) -> std::io::Result<()> {
    writeln!(
        out,
        "    {:<width$}  gd {:>11} {:>11} {:>11}",
        "word",
        "iv min ",
        "nx min ",
        "nx sec ",
        width = width
    )?;
    writeln!(
        out,
        "    {:-<width$} --- ----------- ----------- -----------",
        "",
        width = width
    )?;

    for (rank, row) in rows.iter().enumerate() {
        writeln!(
            out,
            "{:3} {:width$} {:>3} {} {} {}",
            rank + 1,
            row.word,
            row.goods,
            negfmt(row.interval_minutes),
            negfmt(row.due_in_minutes),
            negfmt(row.due_in_seconds),
            width = width
        )?;
    }

    Ok(())
}
