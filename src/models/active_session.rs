use super::rate_config::RateConfig;
use chrono::{DateTime, Utc};

/// The open punch. Rates are copied from `RateConfig` at punch-in and never
/// follow later edits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveSession {
    pub start: DateTime<Utc>,
    pub gross_rate: f64,
    pub net_rate: f64,
}

impl ActiveSession {
    pub fn start_at(start: DateTime<Utc>, rates: &RateConfig) -> Self {
        Self {
            start,
            gross_rate: rates.hourly_gross,
            net_rate: rates.hourly_net,
        }
    }
}
