use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::state::AppState;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// Creates the configuration file (unless running with `--test`) and writes
/// the data file with the current rates if it does not exist yet.
pub fn handle(cli: &Cli, cfg: &Config, state: &AppState, data_exists: bool) -> AppResult<()> {
    if !cli.test {
        let path = cfg.init_file()?;
        info(format!("Config file : {}", path.display()));
    }

    if data_exists {
        info("Data file already present, left untouched.");
    } else {
        state.save()?;
    }

    success("punchclock initialization completed!");
    Ok(())
}
