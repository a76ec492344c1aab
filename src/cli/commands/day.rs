use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calendar::classify;
use crate::core::state::AppState;
use crate::errors::{AppError, AppResult};
use crate::utils::date;
use crate::utils::formatting::{format_money, format_rate};

/// Details for one date. The first session listed is the one the calendar shows.
pub fn handle(cmd: &Commands, cfg: &Config, state: &AppState) -> AppResult<()> {
    if let Commands::Day { date: raw } = cmd {
        let d = date::parse_date(raw).ok_or_else(|| AppError::InvalidDate(raw.to_string()))?;
        let key = d.format("%Y-%m-%d").to_string();
        let records = state.records_on(&key);

        if records.is_empty() {
            println!("No sessions on {key}.");
            return Ok(());
        }

        println!("Details for {} ({})", key, d.format("%A"));
        for (i, r) in records.iter().enumerate() {
            println!();
            println!("#{} [{}]", i + 1, classify(r).label());
            println!("  Hours    : {}", r.time_range());
            println!("  Duration : {}", r.duration_display);
            println!(
                "  Gross    : {} at {}",
                format_money(r.gross_earning, &cfg.currency),
                format_rate(r.gross_rate, &cfg.currency)
            );
            println!(
                "  Net      : {} at {}",
                format_money(r.net_earning, &cfg.currency),
                format_rate(r.net_rate, &cfg.currency)
            );
        }
    }
    Ok(())
}
