use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use log::debug;
use serde::Deserialize;
use serde_json::Value;

/// Question records exactly as they appear in the input file, keyed by the
/// question identifier.
///
/// The `BTreeMap` keeps iteration in sorted key order, which is the order
/// the quiz presents questions in.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct RawRecords(pub BTreeMap<String, Value>);

/// Error loading the question file.
#[derive(Debug)]
pub enum LoadError {
    /// File missing or unreadable.
    Read(io::Error),
    /// Content is not a JSON object.
    Parse(serde_json::Error),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Read(e) => write!(f, "failed to read question file: {}", e),
            LoadError::Parse(e) => write!(f, "failed to parse question file: {}", e),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Read(e) => Some(e),
            LoadError::Parse(e) => Some(e),
        }
    }
}

pub fn load_records<P: AsRef<Path>>(path: P) -> Result<RawRecords, LoadError> {
    let path = path.as_ref();
    debug!("reading questions from {}", path.display());

    let content = fs::read_to_string(path).map_err(LoadError::Read)?;
    serde_json::from_str(&content).map_err(LoadError::Parse)
}
