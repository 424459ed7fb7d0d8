//! Pretty JSON files.
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use log::debug;
use serde::{de::DeserializeOwned, Serialize};

use crate::error::Error;

/// Deserialize `path`.
///
/// # Errors
/// [Error::MissingInput] if the file does not exist, then io/serde errors.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, Error> {
    if !path.exists() {
        return Err(Error::MissingInput(path.to_path_buf()));
    }
    debug!("reading {:?}", path);
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

/// Same as [read_json], but a missing file yields `T::default()`.
pub fn read_json_or_default<T: DeserializeOwned + Default>(path: &Path) -> Result<T, Error> {
    match read_json(path) {
        Err(Error::MissingInput(_)) => Ok(T::default()),
        other => other,
    }
}

/// Serialize `value` into `path` (2-space indentation, UTF-8 kept as is).
///
/// Parent directories are created if needed.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), Error> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    debug!("wrote {:?}", path);
    Ok(())
}
