//! Plumbing shared by the report binaries

use std::io;
use std::process::ExitCode;

use chrono::Utc;
use thiserror::Error;

use super::storage::StorageError;

/// Error type for report operations
#[derive(Debug, Error)]
pub enum ReportError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("No words found in the learn table")]
    EmptyResult,
}

/// Install the stderr logger. Defaults to warnings only so stdout stays clean.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}

/// Current time as fractional seconds since the Unix epoch
pub fn now_unix() -> f64 {
    Utc::now().timestamp_millis() as f64 / 1000.0
}

/// True when the reader of our output went away, e.g. `tolearn | head`
pub fn is_broken_pipe(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        cause
            .downcast_ref::<io::Error>()
            .map(|e| e.kind() == io::ErrorKind::BrokenPipe)
            .unwrap_or(false)
    })
}

/// Map the outcome of a report run to the process exit status
pub fn exit_code(result: anyhow::Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if is_broken_pipe(&err) => {
            log::debug!("Output closed early: {:#}", err);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    fn pipe_error() -> anyhow::Result<()> {
        Err(io::Error::from(io::ErrorKind::BrokenPipe)).context("writing report")
    }

    #[test]
    fn test_broken_pipe_detected_through_context() {
        assert!(is_broken_pipe(&pipe_error().unwrap_err()));
    }

    #[test]
    fn test_broken_pipe_inside_report_error() {
        let err: anyhow::Error = ReportError::Io(io::Error::from(io::ErrorKind::BrokenPipe)).into();
        assert!(is_broken_pipe(&err));
    }

    #[test]
    fn test_other_errors_are_not_pipe_errors() {
        let err: anyhow::Error = ReportError::EmptyResult.into();
        assert!(!is_broken_pipe(&err));

        let err: anyhow::Error = ReportError::Io(io::Error::from(io::ErrorKind::NotFound)).into();
        assert!(!is_broken_pipe(&err));
    }
}
