//! `gt-output` — settlement and attendance report writers.
//!
//! Two backends are provided behind Cargo features:
//!
//! | Feature  | Backend | Files created                          |
//! |----------|---------|----------------------------------------|
//! | *(none)* | CSV     | `settlements.csv`, `attendance.csv`    |
//! | `sqlite` | SQLite  | `report.db`                            |
//!
//! Both implement [`ReportWriter`] and are driven by [`BoardReporter`],
//! which reads each trip's snapshot under its board lock.
//!
//! # Usage
//!
//! ```rust,ignore
//! use gt_output::{BoardReporter, CsvReporter};
//!
//! let writer = CsvReporter::new(Path::new("./report_out"))?;
//! let mut reporter = BoardReporter::new(writer);
//! reporter.report_all(&board)?;
//! reporter.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod reporter;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use self::csv::CsvReporter;
pub use error::{ReportError, ReportResult};
pub use reporter::BoardReporter;
pub use row::{AttendanceRow, TransferRow};
pub use writer::ReportWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteReporter;
