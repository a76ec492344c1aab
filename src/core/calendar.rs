//! Month calendar projection.
//!
//! A month is laid out as 6 rows × 7 columns, Monday first. Days with a
//! history record are classified by duration; the record linked to a day is
//! the first one found for its date in history order (newest first).

use crate::core::calculator::earnings::MS_PER_HOUR;
use crate::errors::{AppError, AppResult};
use crate::models::{CalendarCell, DayClass, WorkDayRecord};
use crate::utils::date::{date_key, days_in_month, first_weekday_offset};
use chrono::{Datelike, Months, NaiveDate};
use std::collections::HashMap;

pub const GRID_ROWS: usize = 6;
pub const GRID_COLS: usize = 7;
pub const GRID_CELLS: usize = GRID_ROWS * GRID_COLS;

/// Worked time from which a day counts as full.
pub const FULL_DAY_MS: i64 = 7 * MS_PER_HOUR;

/// History grouped by calendar date, keeping history order inside each date.
pub struct DateIndex<'a> {
    by_date: HashMap<&'a str, Vec<&'a WorkDayRecord>>,
}

impl<'a> DateIndex<'a> {
    pub fn build(history: &'a [WorkDayRecord]) -> Self {
        let mut by_date: HashMap<&str, Vec<&WorkDayRecord>> = HashMap::new();
        for record in history {
            by_date.entry(record.date.as_str()).or_default().push(record);
        }
        Self { by_date }
    }

    /// Record shown on the calendar for `date`.
    pub fn first(&self, date: &str) -> Option<&'a WorkDayRecord> {
        self.by_date.get(date).and_then(|v| v.first().copied())
    }

    pub fn all(&self, date: &str) -> &[&'a WorkDayRecord] {
        self.by_date.get(date).map(Vec::as_slice).unwrap_or(&[])
    }
}

pub fn classify(record: &WorkDayRecord) -> DayClass {
    if record.duration_ms >= FULL_DAY_MS {
        DayClass::FullDay
    } else {
        DayClass::PartialDay
    }
}

/// Project `history` onto the grid of `year`/`month`.
pub fn project<'a>(
    year: i32,
    month: u32,
    history: &'a [WorkDayRecord],
    today: NaiveDate,
) -> AppResult<Vec<CalendarCell<'a>>> {
    let offset = first_weekday_offset(year, month)
        .ok_or_else(|| AppError::InvalidMonth(format!("{year}-{month:02}")))? as usize;
    let days = days_in_month(year, month) as usize;
    let index = DateIndex::build(history);

    let cells = (0..GRID_CELLS)
        .map(|pos| {
            if pos < offset || pos - offset >= days {
                return CalendarCell::blank();
            }

            let day = (pos - offset + 1) as u32;
            let is_today =
                today.year() == year && today.month() == month && today.day() == day;
            let record = index.first(&date_key(year, month, day));

            let class = match record {
                Some(r) => classify(r),
                None if is_today => DayClass::Today,
                None => DayClass::Normal,
            };

            CalendarCell {
                day: Some(day),
                class,
                record,
            }
        })
        .collect();

    Ok(cells)
}

/// Month currently shown; the day is always the 1st.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewMonth {
    first: NaiveDate,
}

impl ViewMonth {
    pub fn new(year: i32, month: u32) -> AppResult<Self> {
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|first| Self { first })
            .ok_or_else(|| AppError::InvalidMonth(format!("{year}-{month:02}")))
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self {
            first: date.with_day(1).unwrap_or(date),
        }
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month(&self) -> u32 {
        self.first.month()
    }

    /// Move by `delta` months; year boundaries roll over.
    pub fn shifted(&self, delta: i32) -> AppResult<Self> {
        let months = Months::new(delta.unsigned_abs());
        let moved = if delta >= 0 {
            self.first.checked_add_months(months)
        } else {
            self.first.checked_sub_months(months)
        };
        moved
            .map(|first| Self { first })
            .ok_or_else(|| AppError::InvalidMonth(format!("{} shifted by {delta}", self)))
    }

    /// Display label such as "June 2024".
    pub fn title(&self) -> String {
        self.first.format("%B %Y").to_string()
    }
}

impl std::fmt::Display for ViewMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}
