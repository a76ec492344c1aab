//! User-facing console messages. Diagnostics go through `tracing` instead.

use crate::errors::AppResult;
use ansi_term::{Colour, Style};
use std::fmt;
use std::io::{self, Write};

const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

fn tagged(colour: Colour, icon: &str) -> String {
    Style::new().bold().fg(colour).paint(icon).to_string()
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{} {}", tagged(Colour::Blue, ICON_INFO), msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{} {}", tagged(Colour::Green, ICON_OK), msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{} {}", tagged(Colour::Yellow, ICON_WARN), msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{} {}", tagged(Colour::Red, ICON_ERR), msg);
}

pub fn header<T: fmt::Display>(msg: T) {
    println!("{}\n", Colour::Blue.bold().paint(format!("== {msg} ==")));
}

/// Ask a yes/no question on stdin; anything but y/yes means no.
pub fn confirm(question: &str) -> AppResult<bool> {
    print!("{question} [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    let answer = answer.trim().to_ascii_lowercase();
    Ok(answer == "y" || answer == "yes")
}
