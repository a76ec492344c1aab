//! Encoding of the data file.
//!
//! ```text
//! config|12.5|10
//! session|2024-06-03T07:00:00Z|12.5|10
//! workday|2024-06-03|09:00|17:30|2024-06-03T07:00:00Z|2024-06-03T15:30:00Z|8h 30m|30600000|106.25|85|12.5|10
//! ```
//!
//! Reading is tolerant: a numeric field that does not parse becomes zero and
//! a missing text field becomes empty, so one bad field never drops a line.

use crate::errors::{AppError, AppResult};
use crate::models::{ActiveSession, RateConfig, WorkDayRecord};
use chrono::{DateTime, Utc};
use std::str::FromStr;
use tracing::{debug, warn};

pub const DELIMITER: char = '|';

const TAG_CONFIG: &str = "config";
const TAG_SESSION: &str = "session";
const TAG_WORKDAY: &str = "workday";

/// Everything the data file holds.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StoredData {
    pub config: RateConfig,
    pub active: Option<ActiveSession>,
    pub history: Vec<WorkDayRecord>,
}

/// Numbers the data file carries: whole milliseconds and decimal amounts.
pub trait NumericField: FromStr + Default {
    const FRACTIONAL: bool;

    fn is_usable(&self) -> bool {
        true
    }
}

impl NumericField for i64 {
    const FRACTIONAL: bool = false;
}

impl NumericField for f64 {
    const FRACTIONAL: bool = true;

    fn is_usable(&self) -> bool {
        self.is_finite()
    }
}

/// Leading number of `s`: optional sign, digits, and for decimals an optional
/// fraction and exponent. Empty when `s` does not start with a number.
fn numeric_prefix(s: &str, fractional: bool) -> &str {
    let b = s.as_bytes();
    let digits_from = |mut i: usize| {
        while i < b.len() && b[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = 0;
    if matches!(b.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let int_end = digits_from(end);
    let mut seen_digit = int_end > end;
    end = int_end;

    if fractional {
        if b.get(end) == Some(&b'.') {
            let frac_end = digits_from(end + 1);
            if seen_digit || frac_end > end + 1 {
                seen_digit = true;
                end = frac_end;
            }
        }
        if seen_digit && matches!(b.get(end), Some(b'e' | b'E')) {
            let mut exp = end + 1;
            if matches!(b.get(exp), Some(b'+' | b'-')) {
                exp += 1;
            }
            let exp_end = digits_from(exp);
            if exp_end > exp {
                end = exp_end;
            }
        }
    }

    if seen_digit { &s[..end] } else { "" }
}

/// Parse a numeric field from its leading number, so `"30600000abc"` reads
/// as 30600000. No leading number, overflow or a non-finite value gives zero.
pub fn parse_or_zero<T: NumericField>(field: Option<&str>) -> T {
    field
        .map(|f| numeric_prefix(f.trim_start(), T::FRACTIONAL))
        .and_then(|f| f.parse::<T>().ok())
        .filter(T::is_usable)
        .unwrap_or_default()
}

fn text(field: Option<&str>) -> String {
    field.unwrap_or_default().to_string()
}

fn check_encodable(value: &str) -> AppResult<()> {
    if value.contains(DELIMITER) || value.contains('\n') || value.contains('\r') {
        return Err(AppError::Encoding(format!(
            "field {value:?} contains a delimiter or line break"
        )));
    }
    Ok(())
}

pub fn encode_config(config: &RateConfig) -> String {
    format!("{TAG_CONFIG}|{}|{}", config.hourly_gross, config.hourly_net)
}

pub fn encode_session(session: &ActiveSession) -> String {
    format!(
        "{TAG_SESSION}|{}|{}|{}",
        session.start.to_rfc3339(),
        session.gross_rate,
        session.net_rate
    )
}

pub fn encode_workday(r: &WorkDayRecord) -> AppResult<String> {
    for field in r.text_fields() {
        check_encodable(field)?;
    }

    Ok(format!(
        "{TAG_WORKDAY}|{}|{}|{}|{}|{}|{}|{}|{}|{}|{}|{}",
        r.date,
        r.start_time,
        r.end_time,
        r.start_iso,
        r.end_iso,
        r.duration_display,
        r.duration_ms,
        r.gross_earning,
        r.net_earning,
        r.gross_rate,
        r.net_rate
    ))
}

/// Render the whole file, one `\n`-terminated line per entry.
pub fn encode(data: &StoredData) -> AppResult<String> {
    let mut out = encode_config(&data.config);
    out.push('\n');

    if let Some(session) = &data.active {
        out.push_str(&encode_session(session));
        out.push('\n');
    }

    for record in &data.history {
        out.push_str(&encode_workday(record)?);
        out.push('\n');
    }

    Ok(out)
}

fn decode_config<'a>(mut fields: impl Iterator<Item = &'a str>) -> RateConfig {
    RateConfig {
        hourly_gross: parse_or_zero(fields.next()),
        hourly_net: parse_or_zero(fields.next()),
    }
}

fn decode_session<'a>(mut fields: impl Iterator<Item = &'a str>) -> Option<ActiveSession> {
    let raw_start = fields.next().unwrap_or_default();
    let start = match DateTime::parse_from_rfc3339(raw_start.trim()) {
        Ok(dt) => dt.with_timezone(&Utc),
        Err(e) => {
            warn!(start = raw_start, error = %e, "dropping open session with unreadable start");
            return None;
        }
    };

    Some(ActiveSession {
        start,
        gross_rate: parse_or_zero(fields.next()),
        net_rate: parse_or_zero(fields.next()),
    })
}

fn decode_workday<'a>(mut fields: impl Iterator<Item = &'a str>) -> WorkDayRecord {
    WorkDayRecord {
        date: text(fields.next()),
        start_time: text(fields.next()),
        end_time: text(fields.next()),
        start_iso: text(fields.next()),
        end_iso: text(fields.next()),
        duration_display: text(fields.next()),
        duration_ms: parse_or_zero(fields.next()),
        gross_earning: parse_or_zero(fields.next()),
        net_earning: parse_or_zero(fields.next()),
        gross_rate: parse_or_zero(fields.next()),
        net_rate: parse_or_zero(fields.next()),
    }
}

/// Parse file contents. Starts from defaults, so content without a
/// `config` line keeps the default rates.
pub fn decode(content: &str) -> StoredData {
    let mut data = StoredData::default();

    for (n, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let mut fields = line.split(DELIMITER);
        match fields.next() {
            Some(TAG_CONFIG) => data.config = decode_config(fields),
            Some(TAG_SESSION) => data.active = decode_session(fields),
            Some(TAG_WORKDAY) => data.history.push(decode_workday(fields)),
            Some(other) => debug!(line = n + 1, tag = other, "skipping unknown line"),
            None => {}
        }
    }

    data
}
