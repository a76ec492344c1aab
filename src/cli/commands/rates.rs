use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::state::AppState;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::formatting::format_rate;

pub fn handle(cmd: &Commands, cfg: &Config, state: &mut AppState) -> AppResult<()> {
    if let Commands::Rates { gross, net } = cmd {
        let rates = if gross.is_some() || net.is_some() {
            let updated = state.set_rates(*gross, *net)?;
            success("Rates updated.");
            if state.is_active() {
                info("The open session keeps the rates it started with.");
            }
            updated
        } else {
            state.rates()
        };

        println!("Gross : {}", format_rate(rates.hourly_gross, &cfg.currency));
        println!("Net   : {}", format_rate(rates.hourly_net, &cfg.currency));
    }
    Ok(())
}
