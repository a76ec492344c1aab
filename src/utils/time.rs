//! Time utilities: parsing HH:MM.

use crate::errors::{AppError, AppResult};
use chrono::NaiveTime;

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

pub fn parse_optional_time(input: Option<&String>) -> AppResult<Option<NaiveTime>> {
    input
        .map(|s| parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string())))
        .transpose()
}
