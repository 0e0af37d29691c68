//! The `ReportWriter` trait implemented by all report backends.

use crate::{AttendanceRow, ReportResult, TransferRow};

/// Trait implemented by the CSV and SQLite report writers.
pub trait ReportWriter {
    /// Write a batch of settlement transfers.
    fn write_transfers(&mut self, rows: &[TransferRow]) -> ReportResult<()>;

    /// Write a batch of attendance rows.
    fn write_attendance(&mut self, rows: &[AttendanceRow]) -> ReportResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> ReportResult<()>;
}
