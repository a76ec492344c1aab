use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::state::AppState;
use crate::errors::AppResult;
use crate::utils::formatting::{format_money, format_rate};
use crate::utils::time::parse_optional_time;
use chrono::Local;

pub fn handle(cmd: &Commands, cfg: &Config, state: &AppState) -> AppResult<()> {
    if let Commands::Status { until } = cmd {
        let target = parse_optional_time(until.as_ref())?;

        let Some(session) = state.tracker().active() else {
            println!("Status : idle");
            println!("Worked : {}", state.elapsed_display());
            return Ok(());
        };

        println!(
            "Status : working since {}",
            session.start.with_timezone(&Local).format("%Y-%m-%d %H:%M")
        );
        println!("Worked : {}", state.elapsed_display());

        if let Some(earned) = state.live_earnings() {
            println!(
                "Earned : {} gross / {} net",
                format_money(earned.gross, &cfg.currency),
                format_money(earned.net, &cfg.currency)
            );
        }
        println!(
            "Rates  : {} gross / {} net",
            format_rate(session.gross_rate, &cfg.currency),
            format_rate(session.net_rate, &cfg.currency)
        );

        if let Some(t) = target {
            match state.projected_until(t) {
                Some(p) => println!(
                    "Until {} : {} → {} net",
                    t.format("%H:%M"),
                    p.duration_display,
                    format_money(p.earnings.net, &cfg.currency)
                ),
                None => println!("Until {} : time already passed", t.format("%H:%M")),
            }
        }
    }
    Ok(())
}
