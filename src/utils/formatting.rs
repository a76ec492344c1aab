//! Formatting utilities used for CLI and export outputs.

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

pub fn pad_left(s: &str, width: usize) -> String {
    format!("{:>width$}", s, width = width)
}

/// Two decimals followed by the currency symbol, e.g. `106.25€`.
pub fn format_money(amount: f64, currency: &str) -> String {
    format!("{:.2}{}", amount, currency)
}

/// Hourly rate, e.g. `12.50€/h`.
pub fn format_rate(rate: f64, currency: &str) -> String {
    format!("{}/h", format_money(rate, currency))
}
