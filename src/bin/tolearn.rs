//! Show the words coming up for review, soonest first
//!
//! Negative times are shown in parentheses: those words are already overdue.
//!
//! Run with: cargo run --bin tolearn -- --db learn.db

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use learn_reports_lib::learn::{
    column_width, exit_code, get_db_path, init_logging, load_pending_rows, now_unix, render_pending,
    LearnStorage, PENDING_LIMIT,
};

#[derive(Debug, Parser)]
#[command(name = "tolearn", about = "Show the words due for review next")]
struct Opt {
    /// The pathname of the learning database
    #[arg(long = "db")]
    file: Option<String>,

    /// Maximum number of words to show
    #[arg(long, default_value_t = PENDING_LIMIT)]
    limit: usize,
}

fn main() -> ExitCode {
    init_logging();
    exit_code(run(Opt::parse()))
}

fn run(opt: Opt) -> Result<()> {
    anyhow::ensure!(opt.limit > 0, "--limit must be at least 1");

    let path = get_db_path(opt.file.as_deref());
    info!("Using learning database {:?}", path);

    let storage = LearnStorage::open(&path)
        .with_context(|| format!("opening learning database at {}", path.display()))?;
    let rows = load_pending_rows(&storage, opt.limit, now_unix()).context("reading pending words")?;
    let width = column_width(&rows)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    render_pending(&mut out, &rows, width)?;
    out.flush()?;
    Ok(())
}
