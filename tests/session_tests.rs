mod common;
use chrono::{Duration, NaiveTime};
use common::{local, temp_data};
use punchclock::core::clock::ManualClock;
use punchclock::core::session::{
    PunchOutcome, SessionTracker, format_iso, outside_punch_window,
};
use punchclock::core::state::AppState;
use punchclock::errors::AppError;
use punchclock::models::RateConfig;
use punchclock::store::RecordStore;
use std::fs;

fn open(name: &str, clock: &ManualClock) -> (AppState, RecordStore) {
    let store = RecordStore::at(temp_data(name));
    (AppState::open(store.clone(), Box::new(clock.clone())), store)
}

#[test]
fn test_ninety_minute_session() {
    let clock = ManualClock::new(local(2024, 6, 3, 9, 0));
    let (mut state, store) = open("session_ninety", &clock);
    state.set_rates(Some(12.0), Some(10.0)).unwrap();

    let punch = state.toggle().unwrap();
    assert!(matches!(punch.outcome, PunchOutcome::PunchedIn(_)));
    assert!(punch.persisted());
    assert!(state.is_active());

    clock.advance(Duration::minutes(90));
    let punch = state.toggle().unwrap();
    let PunchOutcome::PunchedOut(record) = punch.outcome else {
        panic!("expected punch out");
    };

    assert!(!state.is_active());
    assert_eq!(record.date, "2024-06-03");
    assert_eq!(record.start_time, "09:00");
    assert_eq!(record.end_time, "10:30");
    assert_eq!(record.start_iso, format_iso(local(2024, 6, 3, 9, 0)));
    assert_eq!(record.end_iso, format_iso(local(2024, 6, 3, 10, 30)));
    assert_eq!(record.duration_ms, 90 * 60_000);
    assert_eq!(record.duration_display, "1h 30m");
    assert_eq!(record.gross_earning, 18.00);
    assert_eq!(record.net_earning, 15.00);
    assert_eq!(record.gross_rate, 12.0);
    assert_eq!(record.net_rate, 10.0);

    // persisted on punch-out
    let saved = store.load();
    assert_eq!(saved.history, vec![record]);
    assert!(saved.active.is_none());
}

#[test]
fn test_direct_calls_in_wrong_state_fail() {
    let clock = ManualClock::new(local(2024, 6, 3, 9, 0));
    let rates = RateConfig::default();
    let mut tracker = SessionTracker::new();

    assert!(matches!(
        tracker.punch_out(&clock),
        Err(AppError::InvalidState(_))
    ));

    tracker.punch_in(&clock, &rates).unwrap();
    assert!(matches!(
        tracker.punch_in(&clock, &rates),
        Err(AppError::InvalidState(_))
    ));
    assert!(tracker.is_active());
}

#[test]
fn test_rates_are_snapshotted_at_punch_in() {
    let clock = ManualClock::new(local(2024, 6, 3, 9, 0));
    let (mut state, _) = open("session_snapshot", &clock);

    state.toggle().unwrap();
    state.set_rates(Some(100.0), Some(50.0)).unwrap();
    clock.advance(Duration::hours(1));

    let PunchOutcome::PunchedOut(record) = state.toggle().unwrap().outcome else {
        panic!("expected punch out");
    };
    assert_eq!(record.gross_earning, 12.5);
    assert_eq!(record.net_earning, 10.0);

    // the next session uses the new rates
    state.toggle().unwrap();
    clock.advance(Duration::hours(1));
    let PunchOutcome::PunchedOut(next) = state.toggle().unwrap().outcome else {
        panic!("expected punch out");
    };
    assert_eq!(next.gross_earning, 100.0);

    // history is newest first and the old record is untouched
    let history = state.history_snapshot();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0], next);
    assert_eq!(history[1], record);
}

#[test]
fn test_elapsed_display_and_live_earnings() {
    let clock = ManualClock::new(local(2024, 6, 3, 9, 0));
    let (mut state, _) = open("session_elapsed", &clock);

    assert_eq!(state.elapsed_display(), "0h 00m");
    assert!(state.live_earnings().is_none());

    state.toggle().unwrap();
    clock.advance(Duration::minutes(155) + Duration::seconds(59));
    assert_eq!(state.elapsed_display(), "2h 35m");

    clock.set(local(2024, 6, 3, 9, 30));
    let earned = state.live_earnings().unwrap();
    assert_eq!(earned.gross, 6.25);
    assert_eq!(earned.net, 5.0);
}

#[test]
fn test_open_session_survives_restart() {
    let clock = ManualClock::new(local(2024, 6, 3, 8, 0));
    let (mut first, store) = open("session_restart", &clock);
    first.toggle().unwrap();
    drop(first);

    clock.advance(Duration::hours(8));
    let mut second = AppState::open(store.clone(), Box::new(clock.clone()));
    assert!(second.is_active());
    assert_eq!(second.elapsed_display(), "8h 00m");

    let PunchOutcome::PunchedOut(record) = second.toggle().unwrap().outcome else {
        panic!("expected punch out");
    };
    assert_eq!(record.duration_display, "8h 00m");
    assert_eq!(record.net_earning, 80.0);
}

#[test]
fn test_save_failure_keeps_transition() {
    let blocker = temp_data("session_blocker");
    fs::write(&blocker, "not a directory").unwrap();
    let store = RecordStore::at(blocker.join("data.txt"));

    let clock = ManualClock::new(local(2024, 6, 3, 9, 0));
    let mut state = AppState::open(store, Box::new(clock.clone()));

    let punch = state.toggle().unwrap();
    assert!(!punch.persisted());
    assert!(state.is_active());

    clock.advance(Duration::hours(2));
    let punch = state.toggle().unwrap();
    assert!(punch.save_error.is_some());
    assert!(!state.is_active());
    assert_eq!(state.history_snapshot().len(), 1);

    // further punches still work
    assert!(state.toggle().is_ok());
    fs::remove_file(&blocker).ok();
}

#[test]
fn test_clock_going_backwards_clamps_to_zero() {
    let clock = ManualClock::new(local(2024, 6, 3, 9, 0));
    let (mut state, _) = open("session_backwards", &clock);

    state.toggle().unwrap();
    clock.advance(Duration::minutes(-10));
    assert_eq!(state.elapsed_display(), "0h 00m");

    let PunchOutcome::PunchedOut(record) = state.toggle().unwrap().outcome else {
        panic!("expected punch out");
    };
    assert_eq!(record.duration_ms, 0);
    assert_eq!(record.gross_earning, 0.0);
}

#[test]
fn test_projection_to_end_of_day() {
    let clock = ManualClock::new(local(2024, 6, 3, 9, 0));
    let (mut state, _) = open("session_projection", &clock);

    let target = NaiveTime::from_hms_opt(17, 30, 0).unwrap();
    assert!(state.projected_until(target).is_none());

    state.toggle().unwrap();
    let p = state.projected_until(target).unwrap();
    assert_eq!(p.duration_display, "8h 30m");
    assert_eq!(p.earnings.gross, 106.25);
    assert_eq!(p.earnings.net, 85.0);

    let too_early = NaiveTime::from_hms_opt(8, 0, 0).unwrap();
    assert!(state.projected_until(too_early).is_none());
}

#[test]
fn test_calendar_after_punches() {
    let clock = ManualClock::new(local(2024, 6, 3, 9, 0));
    let (mut state, _) = open("session_calendar", &clock);

    state.toggle().unwrap();
    clock.advance(Duration::hours(7));
    state.toggle().unwrap();

    assert_eq!((state.view().year(), state.view().month()), (2024, 6));
    let cells = state.view_grid().unwrap();
    let third = cells.iter().find(|c| c.day == Some(3)).unwrap();
    assert_eq!(third.class, punchclock::models::DayClass::FullDay);

    let next = state.change_month(1).unwrap();
    assert_eq!((next.year(), next.month()), (2024, 7));
    assert_eq!(state.records_on("2024-06-03").len(), 1);
}

#[test]
fn test_negative_rates_rejected() {
    let clock = ManualClock::new(local(2024, 6, 3, 9, 0));
    let (mut state, _) = open("session_bad_rates", &clock);
    assert!(matches!(
        state.set_rates(Some(-1.0), None),
        Err(AppError::InvalidRate(_))
    ));
    assert_eq!(state.rates(), RateConfig::default());
}

#[test]
fn test_export_csv_from_state() {
    let clock = ManualClock::new(local(2024, 6, 3, 9, 0));
    let (mut state, _) = open("session_export", &clock);
    state.set_rates(Some(12.0), Some(10.0)).unwrap();

    state.toggle().unwrap();
    clock.advance(Duration::minutes(90));
    state.toggle().unwrap();

    let out = common::temp_out("session_export", "csv");
    let rows = state.export_csv(&out).unwrap();
    assert_eq!(rows, 1);

    let content = fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert!(lines[0].starts_with("Date;Jour;"));
    assert_eq!(lines[1], "2024-06-03;N/A;09:00;10:30;1h 30m;15.00;10.00;18.00;12.00");
}

#[test]
fn test_punch_window() {
    let at = |h, m, s| NaiveTime::from_hms_opt(h, m, s).unwrap();
    assert!(outside_punch_window(at(7, 29, 59)));
    assert!(!outside_punch_window(at(7, 30, 0)));
    assert!(!outside_punch_window(at(12, 0, 0)));
    assert!(!outside_punch_window(at(18, 0, 45)));
    assert!(outside_punch_window(at(18, 1, 0)));
    assert!(outside_punch_window(at(0, 0, 0)));
}

#[test]
fn test_punch_outcome_local_time() {
    let clock = ManualClock::new(local(2024, 6, 3, 6, 45));
    let (mut state, _) = open("session_local_time", &clock);

    let punch_in = state.toggle().unwrap().outcome;
    assert_eq!(punch_in.local_time(), NaiveTime::from_hms_opt(6, 45, 0));
    assert!(outside_punch_window(punch_in.local_time().unwrap()));

    clock.advance(Duration::hours(3));
    let punch_out = state.toggle().unwrap().outcome;
    assert_eq!(punch_out.local_time(), NaiveTime::from_hms_opt(9, 45, 0));
    assert!(!outside_punch_window(punch_out.local_time().unwrap()));
}
