use super::parse_month_arg;
use crate::cli::parser::Commands;
use crate::core::calendar::ViewMonth;
use crate::core::state::AppState;
use crate::errors::AppResult;
use crate::export::{ensure_writable, notify_export_success};
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, state: &AppState) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        month,
        force,
    } = cmd
    {
        let path = expand_tilde(file);
        let month = parse_month_arg(month)?
            .map(|(y, m)| ViewMonth::new(y, m))
            .transpose()?;

        ensure_writable(&path, *force)?;
        let rows = state.export(&path, format, month)?;
        notify_export_success(&format.as_str().to_uppercase(), &path, rows);
    }
    Ok(())
}
