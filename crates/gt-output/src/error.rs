//! Error types for gt-output.

use thiserror::Error;

/// Errors that can occur when writing reports.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[cfg(feature = "sqlite")]
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("trip {0} not found on the board")]
    UnknownTrip(gt_core::TripId),
}

/// Alias for `Result<T, ReportError>`.
pub type ReportResult<T> = Result<T, ReportError>;
