//! CSV report backend.
//!
//! Creates two files in the configured output directory:
//! - `settlements.csv`
//! - `attendance.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::ReportWriter;
use crate::{AttendanceRow, ReportResult, TransferRow};

/// Writes reports to two CSV files.
pub struct CsvReporter {
    settlements: Writer<File>,
    attendance:  Writer<File>,
    finished:    bool,
}

impl CsvReporter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> ReportResult<Self> {
        let mut settlements = Writer::from_path(dir.join("settlements.csv"))?;
        settlements.write_record(["trip_id", "from_user", "to_user", "amount"])?;

        let mut attendance = Writer::from_path(dir.join("attendance.csv"))?;
        attendance.write_record(["trip_id", "user_id", "status"])?;

        Ok(Self {
            settlements,
            attendance,
            finished: false,
        })
    }
}

impl ReportWriter for CsvReporter {
    fn write_transfers(&mut self, rows: &[TransferRow]) -> ReportResult<()> {
        for row in rows {
            self.settlements.write_record(&[
                row.trip_id.to_string(),
                row.from_user.to_string(),
                row.to_user.to_string(),
                format!("{:.2}", row.amount),
            ])?;
        }
        Ok(())
    }

    fn write_attendance(&mut self, rows: &[AttendanceRow]) -> ReportResult<()> {
        for row in rows {
            self.attendance.write_record(&[
                row.trip_id.to_string(),
                row.user_id.to_string(),
                row.status.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> ReportResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.settlements.flush()?;
        self.attendance.flush()?;
        Ok(())
    }
}
