use crate::errors::{AppError, AppResult};

pub const DEFAULT_HOURLY_GROSS: f64 = 12.50;
pub const DEFAULT_HOURLY_NET: f64 = 10.00;

/// Hourly rates applied to the next punch-in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateConfig {
    pub hourly_gross: f64,
    pub hourly_net: f64,
}

impl Default for RateConfig {
    fn default() -> Self {
        Self {
            hourly_gross: DEFAULT_HOURLY_GROSS,
            hourly_net: DEFAULT_HOURLY_NET,
        }
    }
}

impl RateConfig {
    /// Return a copy with the given rates replaced, rejecting negative or non-finite values.
    pub fn with_rates(&self, gross: Option<f64>, net: Option<f64>) -> AppResult<Self> {
        let mut out = *self;
        if let Some(g) = gross {
            out.hourly_gross = validate_rate("gross", g)?;
        }
        if let Some(n) = net {
            out.hourly_net = validate_rate("net", n)?;
        }
        Ok(out)
    }
}

fn validate_rate(label: &str, value: f64) -> AppResult<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(AppError::InvalidRate(format!("{label} rate must be >= 0, got {value}")))
    }
}
