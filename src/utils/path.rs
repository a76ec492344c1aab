//! Path utilities: expand ~ and resolve where the data file lives.

use std::path::PathBuf;

const APP_DIR: &str = "punchclock";
const DATA_FILE: &str = "data.txt";
const FALLBACK_DATA_FILE: &str = "punchclock_data.txt";

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Supplies the location of the data file to the record store.
pub trait PathProvider {
    fn data_file(&self) -> PathBuf;
}

/// Per-user data directory, or a file in the working directory when the
/// platform has none.
pub struct PlatformDataPath;

impl PathProvider for PlatformDataPath {
    fn data_file(&self) -> PathBuf {
        match dirs::data_dir() {
            Some(dir) => dir.join(APP_DIR).join(DATA_FILE),
            None => PathBuf::from(FALLBACK_DATA_FILE),
        }
    }
}

/// An explicit path (CLI override, config entry, tests).
pub struct FixedPath(pub PathBuf);

impl PathProvider for FixedPath {
    fn data_file(&self) -> PathBuf {
        self.0.clone()
    }
}
