//! End-to-end walkthrough: membership, requests, guide scheduling,
//! attendance, expenses, settlement, and a CSV report.
//!
//! Run with `cargo run -p gt-demo-basic` — writes `./report_out/`.

use std::path::Path;

use gt_board::{TripBoard, TripConfig};
use gt_core::time::SECS_PER_DAY;
use gt_core::{BalancePolicy, Demographic, Timestamp, TripId, TripWindow, Traveler, UserId};
use gt_requests::ReviewDecision;
use gt_schedule::AttendanceStatus;
use gt_settle::ExpenseDraft;
use gt_output::{BoardReporter, CsvReporter};

fn day(n: i64) -> Timestamp {
    Timestamp(n * SECS_PER_DAY)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let board = TripBoard::new();
    let now = day(0);

    // ── A public trip with a gender-balance policy ────────────────────────
    let alice = Traveler::member(UserId(1), Demographic::Female);
    board.open_trip(
        TripConfig::public(TripId(1))
            .capacity(4)
            .policy(BalancePolicy::GenderEqual)
            .window(TripWindow::new(day(10), 5)),
        &alice,
    )?;

    board.join(TripId(1), &Traveler::member(UserId(2), Demographic::Male))?; // 1M 1F
    board.join(TripId(1), &Traveler::member(UserId(3), Demographic::Male))?; // 2M 1F
    match board.join(TripId(1), &Traveler::member(UserId(4), Demographic::Male)) {
        Err(e) => println!("third male join refused: {e}"), // males already in majority
        Ok(()) => unreachable!("balance policy should have refused this"),
    }
    board.join(TripId(1), &Traveler::member(UserId(7), Demographic::Female))?; // 2M 2F

    // ── A private trip admitting through requests ─────────────────────────
    let carol = Traveler::member(UserId(5), Demographic::Other);
    board.open_trip(TripConfig::private(TripId(2)).capacity(3), &carol)?;

    let dave = Traveler::member(UserId(6), Demographic::Male);
    board.submit_join_request(TripId(2), &dave)?;
    let status = board.respond_to_request(TripId(2), carol.id, dave.id, ReviewDecision::Accept)?;
    println!("dave's request: {status:?}");

    // ── Guide scheduling with an overlap rejection ────────────────────────
    board.open_trip(
        TripConfig::public(TripId(3)).window(TripWindow::new(day(12), 3)),
        &alice,
    )?;
    let guide = UserId(100);
    board.assign_guide(TripId(1), guide, now)?;
    match board.assign_guide(TripId(3), guide, now) {
        Err(e) => println!("double booking refused: {e}"),
        Ok(()) => unreachable!("the windows overlap"),
    }

    board.mark_attendance(TripId(1), guide, UserId(2), AttendanceStatus::Present)?;
    board.mark_attendance(TripId(1), guide, UserId(7), AttendanceStatus::Absent)?;

    // ── Shared expenses and settlement ────────────────────────────────────
    board.add_expense(
        TripId(1),
        alice.id,
        &ExpenseDraft {
            title: "Fuel".into(),
            amount: 300.0,
            split_among: vec![UserId(1), UserId(2), UserId(3)],
            date: None,
        },
        now,
    )?;
    board.add_expense(
        TripId(1),
        UserId(2),
        &ExpenseDraft {
            title: "Snacks".into(),
            amount: 90.0,
            split_among: vec![UserId(2), UserId(3)],
            date: None,
        },
        now,
    )?;

    println!("trip 1 settlement:");
    for t in board.settlement(TripId(1))? {
        println!("  {} pays {} {:.2}", t.from, t.to, t.amount);
    }

    // ── CSV report ────────────────────────────────────────────────────────
    let out = Path::new("./report_out");
    std::fs::create_dir_all(out)?;
    let mut reporter = BoardReporter::new(CsvReporter::new(out)?);
    reporter.report_all(&board)?;
    reporter.finish()?;
    println!("report written to {}", out.display());

    Ok(())
}
