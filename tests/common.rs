#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, Local, TimeZone, Utc};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn pc() -> Command {
    cargo_bin_cmd!("punchclock")
}

/// Unique data file path inside the system temp dir, removed if present.
pub fn temp_data(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_punchclock_data.txt", name));
    fs::remove_file(&path).ok();
    path
}

/// Temporary output file path, removed if present.
pub fn temp_out(name: &str, ext: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_punchclock_out.{}", name, ext));
    fs::remove_file(&path).ok();
    path
}

pub fn path_str(p: &PathBuf) -> String {
    p.to_string_lossy().to_string()
}

/// Instant for a local wall-clock time, so record dates/times are predictable.
pub fn local(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    Local
        .with_ymd_and_hms(y, mo, d, h, mi, 0)
        .earliest()
        .expect("valid local time")
        .with_timezone(&Utc)
}

pub const SAMPLE_FILE: &str = "config|12.50|10.00
workday|2024-06-03|09:00|17:30|2024-06-03T07:00:00Z|2024-06-03T15:30:00Z|8h 30m|30600000|106.25|85.00|12.50|10.00
";

/// Write `content` as a data file for tests that start from existing history.
pub fn seed_data(name: &str, content: &str) -> PathBuf {
    let path = temp_data(name);
    fs::write(&path, content).expect("write seed data");
    path
}
