//! Punch state machine: Idle ⇄ Active.
//!
//! The tracker owns the single optional `ActiveSession`. Closing a session
//! produces the immutable `WorkDayRecord`; storing it is up to the caller.

use crate::core::calculator::earnings::{Earnings, ZERO_DURATION, format_duration};
use crate::core::calculator::projection::{Projection, project_to};
use crate::core::clock::Clock;
use crate::errors::{AppError, AppResult};
use crate::models::{ActiveSession, RateConfig, WorkDayRecord};
use crate::utils::time::parse_time;
use chrono::{DateTime, Local, NaiveTime, Timelike, Utc};
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq)]
pub enum PunchOutcome {
    PunchedIn(ActiveSession),
    PunchedOut(WorkDayRecord),
}

impl PunchOutcome {
    /// Local wall-clock time of the punch itself.
    pub fn local_time(&self) -> Option<NaiveTime> {
        match self {
            PunchOutcome::PunchedIn(session) => Some(session.start.with_timezone(&Local).time()),
            PunchOutcome::PunchedOut(record) => parse_time(&record.end_time),
        }
    }
}

/// Usual punch window, in minutes after midnight (07:30 to 18:00 inclusive).
pub const EARLY_PUNCH_LIMIT: u32 = 7 * 60 + 30;
pub const LATE_PUNCH_LIMIT: u32 = 18 * 60;

/// True when a punch at `time` falls outside the usual window. Seconds are ignored.
pub fn outside_punch_window(time: NaiveTime) -> bool {
    let minutes = time.hour() * 60 + time.minute();
    minutes < EARLY_PUNCH_LIMIT || minutes > LATE_PUNCH_LIMIT
}

#[derive(Debug, Default)]
pub struct SessionTracker {
    active: Option<ActiveSession>,
}

impl SessionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the tracker around a session restored from disk.
    pub fn resume(active: Option<ActiveSession>) -> Self {
        Self { active }
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn active(&self) -> Option<&ActiveSession> {
        self.active.as_ref()
    }

    pub fn punch_in(&mut self, clock: &dyn Clock, rates: &RateConfig) -> AppResult<ActiveSession> {
        if let Some(open) = &self.active {
            return Err(AppError::InvalidState(format!(
                "already punched in since {}",
                open.start.to_rfc3339()
            )));
        }

        let session = ActiveSession::start_at(clock.now(), rates);
        debug!(start = %session.start, gross = session.gross_rate, net = session.net_rate, "punch in");
        self.active = Some(session);
        Ok(session)
    }

    pub fn punch_out(&mut self, clock: &dyn Clock) -> AppResult<WorkDayRecord> {
        let session = self
            .active
            .take()
            .ok_or_else(|| AppError::InvalidState("not punched in".to_string()))?;

        let record = close_session(&session, clock.now());
        debug!(date = %record.date, duration_ms = record.duration_ms, "punch out");
        Ok(record)
    }

    /// Punch out when Active, punch in when Idle.
    pub fn toggle(&mut self, clock: &dyn Clock, rates: &RateConfig) -> AppResult<PunchOutcome> {
        if self.is_active() {
            self.punch_out(clock).map(PunchOutcome::PunchedOut)
        } else {
            self.punch_in(clock, rates).map(PunchOutcome::PunchedIn)
        }
    }

    pub fn elapsed_ms(&self, clock: &dyn Clock) -> i64 {
        self.active
            .as_ref()
            .map(|s| elapsed_between(s.start, clock.now()))
            .unwrap_or(0)
    }

    pub fn elapsed_display(&self, clock: &dyn Clock) -> String {
        if self.is_active() {
            format_duration(self.elapsed_ms(clock))
        } else {
            ZERO_DURATION.to_string()
        }
    }

    /// Earnings accumulated so far by the open session, at its snapshotted rates.
    pub fn live_earnings(&self, clock: &dyn Clock) -> Option<Earnings> {
        self.active.as_ref().map(|s| {
            Earnings::for_duration(elapsed_between(s.start, clock.now()), s.gross_rate, s.net_rate)
        })
    }

    pub fn projected_until(&self, target: NaiveTime) -> Option<Projection> {
        self.active.as_ref().and_then(|s| project_to(s, target))
    }
}

fn elapsed_between(start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
    let ms = (end - start).num_milliseconds();
    if ms < 0 {
        warn!(%start, %end, "clock went backwards, duration clamped to zero");
        return 0;
    }
    ms
}

/// Build the historical record for a session ending at `end`.
pub fn close_session(session: &ActiveSession, end: DateTime<Utc>) -> WorkDayRecord {
    let duration_ms = elapsed_between(session.start, end);
    let earnings = Earnings::for_duration(duration_ms, session.gross_rate, session.net_rate);

    let start_local = session.start.with_timezone(&Local);
    let end_local = end.with_timezone(&Local);

    WorkDayRecord {
        date: start_local.format("%Y-%m-%d").to_string(),
        start_time: start_local.format("%H:%M").to_string(),
        end_time: end_local.format("%H:%M").to_string(),
        start_iso: format_iso(session.start),
        end_iso: format_iso(end),
        duration_display: format_duration(duration_ms),
        duration_ms,
        gross_earning: earnings.gross,
        net_earning: earnings.net,
        gross_rate: session.gross_rate,
        net_rate: session.net_rate,
    }
}

pub fn format_iso(instant: DateTime<Utc>) -> String {
    instant.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}
