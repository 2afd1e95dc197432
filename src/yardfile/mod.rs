//! Reading and writing yard and path records as JSON.
//!
//! The same records the dashboard keeps in its map store: a yard file holds
//! the drawn boundary, any no-go zones, and the charging-station location;
//! a path file holds a planning result for the rendering layer.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::domain::{GeneratedPath, Yard};

#[derive(Debug, Error)]
pub enum YardFileError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },
    #[error("malformed yard record in {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

/// Load a yard record from a JSON file
pub fn load_yard(path: &Path) -> Result<Yard, YardFileError> {
    let contents = fs::read_to_string(path).map_err(|source| YardFileError::Read {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| YardFileError::Parse {
        path: path.display().to_string(),
        source,
    })
}

/// Write a planning result to a JSON file, pretty-printed for inspection
pub fn save_path(path: &Path, generated: &GeneratedPath) -> Result<(), YardFileError> {
    // GeneratedPath serialization itself cannot fail; only the write can
    let json = serde_json::to_string_pretty(generated).map_err(|source| YardFileError::Parse {
        path: path.display().to_string(),
        source,
    })?;
    fs::write(path, json).map_err(|source| YardFileError::Write {
        path: path.display().to_string(),
        source,
    })
}
