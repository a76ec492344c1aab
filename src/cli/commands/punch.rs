use crate::config::Config;
use crate::core::session::{PunchOutcome, outside_punch_window};
use crate::core::state::AppState;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use crate::utils::formatting::{format_money, format_rate};
use chrono::Local;

/// Toggle the punch and report what happened.
pub fn handle(cfg: &Config, state: &mut AppState) -> AppResult<()> {
    let punch = state.toggle()?;

    match &punch.outcome {
        PunchOutcome::PunchedIn(session) => {
            success(format!(
                "Punched in at {} ({} gross, {} net)",
                session.start.with_timezone(&Local).format("%H:%M"),
                format_rate(session.gross_rate, &cfg.currency),
                format_rate(session.net_rate, &cfg.currency),
            ));
        }
        PunchOutcome::PunchedOut(record) => {
            success(format!(
                "Punched out: {} on {} ({})",
                record.duration_display,
                record.date,
                record.time_range()
            ));
            println!(
                "   Gross: {}   Net: {}",
                format_money(record.gross_earning, &cfg.currency),
                format_money(record.net_earning, &cfg.currency)
            );
        }
    }

    if let Some(time) = punch.outcome.local_time()
        && outside_punch_window(time)
    {
        warning(format!(
            "Punch at {} is outside the usual hours (07:30 - 18:00)",
            time.format("%H:%M")
        ));
    }

    if let Some(e) = &punch.save_error {
        warning(format!("Punch recorded but the data file was not saved: {e}"));
    }

    Ok(())
}
