use anyhow::Result;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::todo::TaskList;

/// Why the stored list could not be loaded
///
/// None of these is fatal: the session continues with an empty list.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("{} not found", path.display())]
    FileMissing { path: PathBuf },

    #[error("{} is not valid JSON: {source}", path.display())]
    MalformedStorage {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to read {}: {source}", path.display())]
    StorageReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// JSON file holding the TODO list
///
/// The file is opened, fully read or written, and closed within each call.
pub struct Storage {
    file_path: PathBuf,
}

impl Storage {
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Read the whole list from the file
    ///
    /// Missing keys inside records fall back to their defaults; anything that
    /// is not a JSON array of objects is reported as malformed.
    pub fn load(&self) -> Result<TaskList, StorageError> {
        let content = fs::read_to_string(&self.file_path).map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                StorageError::FileMissing {
                    path: self.file_path.clone(),
                }
            } else {
                StorageError::StorageReadError {
                    path: self.file_path.clone(),
                    source,
                }
            }
        })?;

        let data: TaskList =
            serde_json::from_str(&content).map_err(|source| StorageError::MalformedStorage {
                path: self.file_path.clone(),
                source,
            })?;
        tracing::debug!(path = %self.file_path.display(), count = data.len(), "loaded TODO list");
        Ok(data)
    }

    /// Overwrite the file with the whole list
    ///
    /// Written as a JSON array with 4-space indentation; non-ASCII text is
    /// written literally.
    pub fn save(&self, data: &TaskList) -> Result<()> {
        let file = fs::File::create(&self.file_path)?;
        let mut writer = BufWriter::new(file);
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(b"    "));
        data.serialize(&mut serializer)?;
        writer.flush()?;
        tracing::debug!(path = %self.file_path.display(), count = data.len(), "saved TODO list");
        Ok(())
    }
}
