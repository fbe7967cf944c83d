//! Plan file I/O with atomic writes
//!
//! A plan file is a serialized `PlanInputs`. Writes go to a temp file in the
//! same directory and are renamed into place, so a failed write never leaves a
//! half-written plan behind.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::error::PlannerError;
use crate::models::PlanInputs;

/// Serialization format of a plan file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanFormat {
    Json,
    Yaml,
}

impl PlanFormat {
    /// Pick a format from the file extension (`.json`, `.yaml`, `.yml`)
    pub fn from_path(path: &Path) -> Result<Self, PlannerError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match ext.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("yaml") | Some("yml") => Ok(Self::Yaml),
            _ => Err(PlannerError::Config(format!(
                "Unsupported plan file extension: {} (use .json, .yaml or .yml)",
                path.display()
            ))),
        }
    }
}

/// Read a plan file, returning an error if it doesn't exist
pub fn read_plan<P: AsRef<Path>>(path: P) -> Result<PlanInputs, PlannerError> {
    let path = path.as_ref();
    let format = PlanFormat::from_path(path)?;

    if !path.exists() {
        return Err(PlannerError::Config(format!(
            "Plan file not found: {} (run 'planner init' to create one)",
            path.display()
        )));
    }

    let file = File::open(path)
        .map_err(|e| PlannerError::Io(format!("Failed to open {}: {}", path.display(), e)))?;
    let reader = BufReader::new(file);

    let plan = match format {
        PlanFormat::Json => serde_json::from_reader(reader).map_err(|e| {
            PlannerError::Json(format!("Failed to parse {}: {}", path.display(), e))
        })?,
        PlanFormat::Yaml => serde_yaml::from_reader(reader).map_err(|e| {
            PlannerError::Yaml(format!("Failed to parse {}: {}", path.display(), e))
        })?,
    };

    debug!(path = %path.display(), "loaded plan file");
    Ok(plan)
}

/// Write a plan file atomically (write to temp, then rename)
pub fn write_plan_atomic<P: AsRef<Path>>(path: P, plan: &PlanInputs) -> Result<(), PlannerError> {
    let path = path.as_ref();
    let format = PlanFormat::from_path(path)?;

    let contents = match format {
        PlanFormat::Json => serde_json::to_vec_pretty(plan)?,
        PlanFormat::Yaml => serde_yaml::to_string(plan)?.into_bytes(),
    };

    write_atomic(path, &contents)?;
    debug!(path = %path.display(), "wrote plan file");
    Ok(())
}

/// Write bytes to a file atomically
///
/// The bytes go to `<path>.tmp` in the same directory, are flushed and
/// synced, then renamed over `path`. On failure the target is untouched.
pub fn write_atomic<P: AsRef<Path>>(path: P, contents: &[u8]) -> Result<(), PlannerError> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            PlannerError::Io(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let mut temp_name = path.as_os_str().to_os_string();
    temp_name.push(".tmp");
    let temp_path = std::path::PathBuf::from(temp_name);

    let file = File::create(&temp_path)
        .map_err(|e| PlannerError::Io(format!("Failed to create temp file: {}", e)))?;
    let mut writer = BufWriter::new(file);

    writer
        .write_all(contents)
        .and_then(|_| writer.flush())
        .and_then(|_| writer.get_ref().sync_all())
        .map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            PlannerError::Io(format!("Failed to write {}: {}", path.display(), e))
        })?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        PlannerError::Io(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}
