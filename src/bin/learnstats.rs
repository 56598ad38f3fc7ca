//! Summarize learning progress: words due, interval spread and time practiced
//!
//! Run with: cargo run --bin learnstats -- --db learn.db

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use learn_reports_lib::learn::{
    exit_code, get_db_path, init_logging, load_summary, now_unix, render_summary, LearnStorage,
};

#[derive(Debug, Parser)]
#[command(name = "learnstats", about = "Summarize learning progress")]
struct Opt {
    /// The pathname of the learning database
    #[arg(long = "db")]
    file: Option<String>,
}

fn main() -> ExitCode {
    init_logging();
    exit_code(run(Opt::parse()))
}

fn run(opt: Opt) -> Result<()> {
    let path = get_db_path(opt.file.as_deref());
    info!("Using learning database {:?}", path);

    let storage = LearnStorage::open(&path)
        .with_context(|| format!("opening learning database at {}", path.display()))?;
    let summary = load_summary(&storage, now_unix()).context("summarizing learn table")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    render_summary(&mut out, &summary)?;
    out.flush()?;
    Ok(())
}
