//! Estimate the daily relearning burden
//!
//! Compares the practice time lost to mistakes each day with the time
//! actually spent practicing that day.
//!
//! Run with: cargo run --bin burden -- --db learn.db

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use learn_reports_lib::learn::{
    exit_code, get_db_path, init_logging, load_burden, render_burden, LearnStorage,
};

#[derive(Debug, Parser)]
#[command(name = "burden", about = "Show the daily relearning burden")]
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
    let lines = load_burden(&storage).context("computing daily burden")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    render_burden(&mut out, &lines)?;
    out.flush()?;
    Ok(())
}
