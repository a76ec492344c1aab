//! Per-month totals over the history.

use crate::core::calculator::earnings::format_duration;
use crate::models::WorkDayRecord;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MonthSummary {
    pub records: usize,
    pub total_ms: i64,
    pub gross: f64,
    pub net: f64,
}

impl MonthSummary {
    pub fn duration_display(&self) -> String {
        format_duration(self.total_ms)
    }
}

/// `"YYYY-MM-"` prefix matched against record dates.
pub fn month_prefix(year: i32, month: u32) -> String {
    format!("{:04}-{:02}-", year, month)
}

pub fn records_in_month(
    history: &[WorkDayRecord],
    year: i32,
    month: u32,
) -> impl Iterator<Item = &WorkDayRecord> {
    let prefix = month_prefix(year, month);
    history.iter().filter(move |r| r.date.starts_with(&prefix))
}

pub fn summarize_month(history: &[WorkDayRecord], year: i32, month: u32) -> MonthSummary {
    records_in_month(history, year, month).fold(MonthSummary::default(), |mut acc, r| {
        acc.records += 1;
        acc.total_ms = acc.total_ms.saturating_add(r.duration_ms);
        acc.gross += r.gross_earning;
        acc.net += r.net_earning;
        acc
    })
}
