use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        if *print_config || !*edit_config {
            println!("📄 Current configuration ({}):\n", path.display());
            println!("{}", cfg.to_yaml()?);
        }

        if *edit_config {
            cfg.init_file()?;

            let default_editor = std::env::var("EDITOR")
                .or_else(|_| std::env::var("VISUAL"))
                .unwrap_or_else(|_| {
                    if cfg!(target_os = "windows") {
                        "notepad".to_string()
                    } else {
                        "nano".to_string()
                    }
                });
            let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

            match Command::new(&editor_to_use).arg(&path).status() {
                Ok(s) if s.success() => {
                    success(format!("Configuration edited with '{editor_to_use}'"));
                }
                _ if editor_to_use != default_editor => {
                    warning(format!(
                        "Editor '{editor_to_use}' not available, falling back to '{default_editor}'"
                    ));
                    let status = Command::new(&default_editor)
                        .arg(&path)
                        .status()
                        .map_err(|e| AppError::Config(format!("cannot run '{default_editor}': {e}")))?;
                    if !status.success() {
                        return Err(AppError::Config(format!(
                            "editor '{default_editor}' exited with {status}"
                        )));
                    }
                    success(format!("Configuration edited with '{default_editor}'"));
                }
                Ok(status) => {
                    return Err(AppError::Config(format!(
                        "editor '{editor_to_use}' exited with {status}"
                    )));
                }
                Err(e) => {
                    return Err(AppError::Config(format!(
                        "cannot run '{editor_to_use}': {e}"
                    )));
                }
            }
        }
    }
    Ok(())
}
