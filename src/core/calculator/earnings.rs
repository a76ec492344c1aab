//! Duration → display string and duration → earnings conversions.

pub const MS_PER_MINUTE: i64 = 60_000;
pub const MS_PER_HOUR: i64 = 3_600_000;

/// Display for an empty or idle duration.
pub const ZERO_DURATION: &str = "0h 00m";

/// Render milliseconds as `"{h}h {mm}m"`. Seconds are truncated, negative input renders as zero.
///
/// ```
/// use punchclock::core::calculator::earnings::format_duration;
/// assert_eq!(format_duration(9_300_000), "2h 35m");
/// ```
pub fn format_duration(ms: i64) -> String {
    let ms = ms.max(0);
    let hours = ms / MS_PER_HOUR;
    let minutes = (ms % MS_PER_HOUR) / MS_PER_MINUTE;
    format!("{}h {:02}m", hours, minutes)
}

pub fn duration_hours(ms: i64) -> f64 {
    ms as f64 / MS_PER_HOUR as f64
}

pub fn compute_earnings(ms: i64, hourly_rate: f64) -> f64 {
    duration_hours(ms) * hourly_rate
}

/// Gross and net amounts for one duration.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Earnings {
    pub gross: f64,
    pub net: f64,
}

impl Earnings {
    pub fn for_duration(ms: i64, gross_rate: f64, net_rate: f64) -> Self {
        Self {
            gross: compute_earnings(ms, gross_rate),
            net: compute_earnings(ms, net_rate),
        }
    }
}
