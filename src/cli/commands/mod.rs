pub mod calendar;
pub mod config;
pub mod day;
pub mod export;
pub mod history;
pub mod init;
pub mod punch;
pub mod rates;
pub mod status;

use crate::errors::{AppError, AppResult};
use crate::utils::date;

/// Parse an optional `YYYY-MM` argument.
pub(crate) fn parse_month_arg(month: &Option<String>) -> AppResult<Option<(i32, u32)>> {
    month
        .as_deref()
        .map(|m| date::parse_month(m).ok_or_else(|| AppError::InvalidMonth(m.to_string())))
        .transpose()
}
