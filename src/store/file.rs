//! JSON-file-backed score store
//!
//! The whole store is a small flat JSON object of integer values, written
//! through on every set so a crash never loses more than the in-flight
//! mutation.

use super::ScoreStore;
use rustc_hash::FxHashMap;
use serde_json::Value;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Durable store persisted as a JSON object on disk
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    values: FxHashMap<String, i64>,
}

impl JsonFileStore {
    /// Open a store at the given path
    ///
    /// A missing file starts an empty store; it is created on first write.
    /// Entries that are not integers are ignored.
    ///
    /// # Errors
    /// Returns an I/O error if an existing file cannot be read, or an
    /// `InvalidData` error if it is not a JSON object.
    pub fn open<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();

        let values = match fs::read_to_string(&path) {
            Ok(content) => parse_values(&content)?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => FxHashMap::default(),
            Err(e) => return Err(e),
        };

        Ok(Self { path, values })
    }

    /// Path of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_through(&self) -> io::Result<()> {
        let object: serde_json::Map<String, Value> = self
            .values
            .iter()
            .map(|(k, &v)| (k.clone(), Value::from(v)))
            .collect();

        fs::write(&self.path, serde_json::to_string_pretty(&object)?)
    }
}

fn parse_values(content: &str) -> io::Result<FxHashMap<String, i64>> {
    let object: serde_json::Map<String, Value> = serde_json::from_str(content)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    Ok(object
        .into_iter()
        .filter_map(|(k, v)| v.as_i64().map(|n| (k, n)))
        .collect())
}

impl ScoreStore for JsonFileStore {
    fn get_int(&self, key: &str) -> Option<i64> {
        self.values.get(key).copied()
    }

    fn set_int(&mut self, key: &str, value: i64) -> io::Result<()> {
        self.values.insert(key.to_string(), value);
        self.write_through()
    }
}
