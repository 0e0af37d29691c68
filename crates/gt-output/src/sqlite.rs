//! SQLite report backend (feature `sqlite`).
//!
//! Creates a single `report.db` file in the configured output directory with
//! two tables: `settlements` and `attendance`.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::ReportWriter;
use crate::{AttendanceRow, ReportResult, TransferRow};

/// Writes reports to an SQLite database.
pub struct SqliteReporter {
    conn:     Connection,
    finished: bool,
}

impl SqliteReporter {
    /// Open (or create) `report.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> ReportResult<Self> {
        let conn = Connection::open(dir.join("report.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS settlements (
                 trip_id   INTEGER NOT NULL,
                 from_user INTEGER NOT NULL,
                 to_user   INTEGER NOT NULL,
                 amount    REAL    NOT NULL
             );
             CREATE TABLE IF NOT EXISTS attendance (
                 trip_id INTEGER NOT NULL,
                 user_id INTEGER NOT NULL,
                 status  TEXT    NOT NULL,
                 PRIMARY KEY (trip_id, user_id)
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl ReportWriter for SqliteReporter {
    fn write_transfers(&mut self, rows: &[TransferRow]) -> ReportResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO settlements (trip_id, from_user, to_user, amount) \
                 VALUES (?1, ?2, ?3, ?4)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.trip_id,
                    row.from_user,
                    row.to_user,
                    row.amount,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_attendance(&mut self, rows: &[AttendanceRow]) -> ReportResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            // Attendance is an upsert upstream; mirror that here so repeated
            // reports of the same trip stay consistent.
            let mut stmt = tx.prepare_cached(
                "INSERT INTO attendance (trip_id, user_id, status) \
                 VALUES (?1, ?2, ?3) \
                 ON CONFLICT (trip_id, user_id) DO UPDATE SET status = excluded.status",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![row.trip_id, row.user_id, row.status])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn finish(&mut self) -> ReportResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
