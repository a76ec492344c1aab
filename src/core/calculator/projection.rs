//! Earnings the active session would reach if it ended at a given local time.

use crate::core::calculator::earnings::{Earnings, format_duration};
use crate::models::ActiveSession;
use chrono::{Local, NaiveTime, TimeZone};

#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    pub duration_ms: i64,
    pub duration_display: String,
    pub earnings: Earnings,
}

/// Project `session` to `target` on the local date it started.
/// Returns `None` when that moment is not after the start.
pub fn project_to(session: &ActiveSession, target: NaiveTime) -> Option<Projection> {
    let start_local = session.start.with_timezone(&Local);
    let end_local = Local
        .from_local_datetime(&start_local.date_naive().and_time(target))
        .earliest()?;

    let duration_ms = (end_local - start_local).num_milliseconds();
    if duration_ms <= 0 {
        return None;
    }

    Some(Projection {
        duration_ms,
        duration_display: format_duration(duration_ms),
        earnings: Earnings::for_duration(duration_ms, session.gross_rate, session.net_rate),
    })
}
