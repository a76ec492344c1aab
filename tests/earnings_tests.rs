use punchclock::core::calculator::earnings::{
    Earnings, MS_PER_HOUR, MS_PER_MINUTE, ZERO_DURATION, compute_earnings, format_duration,
};
use punchclock::core::calculator::summary::summarize_month;
use punchclock::models::WorkDayRecord;

#[test]
fn test_format_duration_examples() {
    assert_eq!(format_duration(9_300_000), "2h 35m");
    assert_eq!(format_duration(0), ZERO_DURATION);
    assert_eq!(format_duration(30_600_000), "8h 30m");
    assert_eq!(format_duration(25 * MS_PER_HOUR + MS_PER_MINUTE), "25h 01m");
}

#[test]
fn test_format_duration_truncates_seconds() {
    assert_eq!(format_duration(59_999), "0h 00m");
    assert_eq!(format_duration(MS_PER_HOUR - 1), "0h 59m");
    assert_eq!(format_duration(MS_PER_HOUR), "1h 00m");
}

#[test]
fn test_format_duration_matches_formula() {
    for ms in [1_i64, 61_000, 599_999, 3_599_999, 7_200_001, 86_399_999, 123_456_789] {
        let expected = format!(
            "{}h {:02}m",
            ms / 3_600_000,
            (ms % 3_600_000) / 60_000
        );
        assert_eq!(format_duration(ms), expected, "ms = {ms}");
    }
}

#[test]
fn test_format_duration_negative_is_zero() {
    assert_eq!(format_duration(-5 * MS_PER_MINUTE), "0h 00m");
}

#[test]
fn test_compute_earnings() {
    assert_eq!(compute_earnings(3_600_000, 10.00), 10.00);
    assert_eq!(compute_earnings(1_800_000, 10.00), 5.00);
    assert_eq!(compute_earnings(0, 12.50), 0.0);
}

#[test]
fn test_earnings_uses_both_rates() {
    let e = Earnings::for_duration(90 * MS_PER_MINUTE, 12.0, 10.0);
    assert_eq!(e.gross, 18.0);
    assert_eq!(e.net, 15.0);
}

fn record(date: &str, duration_ms: i64, gross: f64, net: f64) -> WorkDayRecord {
    WorkDayRecord {
        date: date.to_string(),
        start_time: "09:00".into(),
        end_time: "17:00".into(),
        start_iso: String::new(),
        end_iso: String::new(),
        duration_display: format_duration(duration_ms),
        duration_ms,
        gross_earning: gross,
        net_earning: net,
        gross_rate: 12.5,
        net_rate: 10.0,
    }
}

#[test]
fn test_month_summary_only_counts_that_month() {
    let history = vec![
        record("2024-07-01", MS_PER_HOUR, 12.5, 10.0),
        record("2024-06-30", 2 * MS_PER_HOUR, 25.0, 20.0),
        record("2024-06-03", 8 * MS_PER_HOUR + 30 * MS_PER_MINUTE, 106.25, 85.0),
        record("2023-06-03", MS_PER_HOUR, 12.5, 10.0),
    ];

    let june = summarize_month(&history, 2024, 6);
    assert_eq!(june.records, 2);
    assert_eq!(june.total_ms, 10 * MS_PER_HOUR + 30 * MS_PER_MINUTE);
    assert_eq!(june.duration_display(), "10h 30m");
    assert_eq!(june.gross, 131.25);
    assert_eq!(june.net, 105.0);

    let empty = summarize_month(&history, 2024, 5);
    assert_eq!(empty.records, 0);
    assert_eq!(empty.duration_display(), "0h 00m");
}

#[test]
fn test_month_summary_saturates_on_huge_durations() {
    let history = vec![
        record("2024-06-03", i64::MAX, 1.0, 1.0),
        record("2024-06-04", i64::MAX, 1.0, 1.0),
    ];

    let june = summarize_month(&history, 2024, 6);
    assert_eq!(june.records, 2);
    assert_eq!(june.total_ms, i64::MAX);
}
