//! Bridge from a [`TripBoard`] to a [`ReportWriter`].
//!
//! Each trip's rows are assembled from one snapshot read under that trip's
//! board lock, so a report never mixes two in-flight states of the same
//! trip.  Attendance rows follow roster display order; participants without
//! a marked status are omitted (the sheet, not the roster, is the record).

use gt_board::TripBoard;
use gt_core::TripId;
use gt_settle::settle;

use crate::row::{AttendanceRow, TransferRow};
use crate::writer::ReportWriter;
use crate::{ReportError, ReportResult};

/// Drives a [`ReportWriter`] from board snapshots.
pub struct BoardReporter<W: ReportWriter> {
    writer: W,
}

impl<W: ReportWriter> BoardReporter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Report one trip: its settlement transfers and attendance map.
    pub fn report_trip(&mut self, board: &TripBoard, trip: TripId) -> ReportResult<()> {
        let (transfers, attendance) = board
            .with_trip(trip, |record| {
                let transfers: Vec<TransferRow> =
                    settle(record.expenses.records(), record.roster.members())
                        .into_iter()
                        .map(|t| TransferRow {
                            trip_id: record.id.0,
                            from_user: t.from.0,
                            to_user: t.to.0,
                            amount: t.amount,
                        })
                        .collect();

                let attendance: Vec<AttendanceRow> = record
                    .roster
                    .members()
                    .iter()
                    .filter_map(|&user| {
                        record.attendance.status_of(user).map(|status| AttendanceRow {
                            trip_id: record.id.0,
                            user_id: user.0,
                            status: status.label(),
                        })
                    })
                    .collect();

                (transfers, attendance)
            })
            .map_err(|_| ReportError::UnknownTrip(trip))?;

        self.writer.write_transfers(&transfers)?;
        self.writer.write_attendance(&attendance)?;
        Ok(())
    }

    /// Report every trip on the board.
    pub fn report_all(&mut self, board: &TripBoard) -> ReportResult<()> {
        let mut ids = board.trip_ids();
        ids.sort_unstable();
        for trip in ids {
            self.report_trip(board, trip)?;
        }
        Ok(())
    }

    /// Finish the underlying writer.  Idempotent.
    pub fn finish(&mut self) -> ReportResult<()> {
        self.writer.finish()
    }

    /// Consume the reporter and return the writer.
    pub fn into_writer(self) -> W {
        self.writer
    }
}
