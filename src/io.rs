use std::fs::{self, File};
use std::path::{Path, PathBuf};

use log::debug;
use serde_json::Value;
use tempfile::NamedTempFile;

use crate::error::{CleanerError, Result};

pub fn load_document(path: &Path) -> Result<Value> {
    if !path.exists() {
        return Err(CleanerError::InputNotFound {
            path: path.to_path_buf(),
        });
    }

    let bytes = fs::read(path).map_err(|source| CleanerError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Read in {} bytes", bytes.len());

    serde_json::from_slice(&bytes).map_err(|source| CleanerError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Plain pretty-printed write; failure here is reported as a warning by the
/// driver rather than aborting the run.
pub fn write_backup(path: &Path, document: &Value) -> Result<()> {
    let backup = |source| CleanerError::Backup {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(backup)?;
    serde_json::to_writer_pretty(file, document).map_err(|err| backup(err.into()))
}

/// Overwrite `path` through a temp file in the same directory so a failed
/// write can never leave a half-written document behind.
pub fn write_document(path: &Path, document: &Value) -> Result<()> {
    let output = |source| CleanerError::OutputWrite {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let tmp = NamedTempFile::new_in(dir).map_err(output)?;
    serde_json::to_writer_pretty(tmp.as_file(), document).map_err(|err| output(err.into()))?;
    tmp.as_file().sync_all().ok();
    tmp.persist(path).map_err(|err| output(err.error))?;

    Ok(())
}

/// Companion path for the pristine copy: `data.json` -> `data_backup.json`.
pub fn default_backup_path(input: &Path) -> PathBuf {
    let mut name = input.file_stem().unwrap_or_default().to_os_string();
    name.push("_backup");
    if let Some(extension) = input.extension() {
        name.push(".");
        name.push(extension);
    }

    input.with_file_name(name)
}
