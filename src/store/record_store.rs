use crate::errors::AppResult;
use crate::store::codec::{self, StoredData};
use crate::utils::path::PathProvider;
use std::borrow::Cow;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Reads and writes the data file. The whole file is rewritten on every save.
#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    pub fn new(paths: &dyn PathProvider) -> Self {
        Self::at(paths.data_file())
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    pub fn save(&self, data: &StoredData) -> AppResult<()> {
        // encode first: a record that cannot be written leaves the old file untouched
        let content = codec::encode(data)?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let mut file = fs::File::create(&self.path)?;
        file.write_all(content.as_bytes())?;
        file.flush()?;

        info!(path = %self.path.display(), records = data.history.len(), "data saved");
        Ok(())
    }

    /// Load the file; `Ok(None)` when it does not exist yet.
    /// Invalid UTF-8 is replaced in place so it only spoils the field it sits in.
    pub fn try_load(&self) -> AppResult<Option<StoredData>> {
        match fs::read(&self.path) {
            Ok(bytes) => {
                let content = String::from_utf8_lossy(&bytes);
                if matches!(content, Cow::Owned(_)) {
                    warn!(path = %self.path.display(), "data file is not valid UTF-8, bad bytes replaced");
                }
                Ok(Some(codec::decode(&content)))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Load the file, treating a missing or unreadable file as "no prior data".
    pub fn load(&self) -> StoredData {
        match self.try_load() {
            Ok(Some(data)) => {
                debug!(path = %self.path.display(), records = data.history.len(), "data loaded");
                data
            }
            Ok(None) => {
                debug!(path = %self.path.display(), "no data file, using defaults");
                StoredData::default()
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "cannot read data file, using defaults");
                StoredData::default()
            }
        }
    }
}
