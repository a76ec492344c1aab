use crate::errors::{AppError, AppResult};
use crate::ui::messages::{confirm, info, warning};
use std::path::Path;

/// Allow writing to `path` if it is new, if `force` is set, or if the user
/// agrees to overwrite it.
pub fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));

    if confirm("Overwrite?")? {
        info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::Export(format!(
            "'{}' exists, use --force to overwrite",
            path.display()
        )))
    }
}
