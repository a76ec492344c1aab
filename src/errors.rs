//! Unified application error type.
//! Every module (store, core, export, cli) returns AppError so the
//! command handlers can bubble failures up with `?`.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / encoders
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Cannot encode record: {0}")]
    Encoding(String),

    // ---------------------------
    // Punch state machine
    // ---------------------------
    #[error("Invalid punch state: {0}")]
    InvalidState(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid month: {0}")]
    InvalidMonth(String),

    #[error("Invalid hourly rate: {0}")]
    InvalidRate(String),

    // ---------------------------
    // Config / export
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
