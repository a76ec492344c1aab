use super::parse_month_arg;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::summary::records_in_month;
use crate::core::state::AppState;
use crate::errors::AppResult;
use crate::models::WorkDayRecord;
use crate::utils::formatting::format_money;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config, state: &AppState) -> AppResult<()> {
    if let Commands::History { month } = cmd {
        let records: Vec<&WorkDayRecord> = match parse_month_arg(month)? {
            Some((y, m)) => records_in_month(state.history_snapshot(), y, m).collect(),
            None => state.history_snapshot().iter().collect(),
        };

        if records.is_empty() {
            println!("No sessions recorded.");
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::left("Date"),
            Column::left("Start"),
            Column::left("End"),
            Column::right("Duration"),
            Column::right("Gross"),
            Column::right("Net"),
        ]);

        for r in records {
            table.add_row(vec![
                r.date.clone(),
                r.start_time.clone(),
                r.end_time.clone(),
                r.duration_display.clone(),
                format_money(r.gross_earning, &cfg.currency),
                format_money(r.net_earning, &cfg.currency),
            ]);
        }

        print!("{}", table.render());
    }
    Ok(())
}
