//! Export snapshot: inputs and derived metrics frozen together as plain JSON.

use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::info;
use zerowaste_common::{Inputs, Result, Snapshot};

use crate::derive::calculate_derived;

/// Version stamped into every snapshot.
pub const SNAPSHOT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Counter suffixes tried when a file name is already taken.
const MAX_NAME_ATTEMPTS: usize = 100;

/// Snapshot `inputs` now. `derived` is always recomputed, never taken from a cache.
pub fn create_snapshot(inputs: &Inputs) -> Snapshot {
    create_snapshot_at(inputs, Utc::now())
}

pub fn create_snapshot_at(inputs: &Inputs, created_at: DateTime<Utc>) -> Snapshot {
    Snapshot {
        inputs: *inputs,
        derived: calculate_derived(inputs),
        created_at,
        version: SNAPSHOT_VERSION.to_string(),
    }
}

/// File name for a snapshot, e.g. `zerowaste-estimate-20261018T093000.000Z.json`.
pub fn snapshot_file_name(snapshot: &Snapshot) -> String {
    format!("{}.json", file_stem(snapshot))
}

fn file_stem(snapshot: &Snapshot) -> String {
    format!(
        "zerowaste-estimate-{}",
        snapshot.created_at.format("%Y%m%dT%H%M%S%.3fZ")
    )
}

pub fn to_json_pretty(snapshot: &Snapshot) -> Result<String> {
    Ok(serde_json::to_string_pretty(snapshot)?)
}

/// Write `snapshot` as pretty JSON into `dir` and return the file path.
///
/// Existing files are never overwritten. When the timestamped name is taken,
/// `-1`, `-2`, ... is appended to the stem.
pub fn write_snapshot(dir: &Path, snapshot: &Snapshot) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let json = to_json_pretty(snapshot)?;
    let stem = file_stem(snapshot);

    for attempt in 0..MAX_NAME_ATTEMPTS {
        let path = match attempt {
            0 => dir.join(format!("{stem}.json")),
            n => dir.join(format!("{stem}-{n}.json")),
        };
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(mut file) => {
                file.write_all(json.as_bytes())?;
                info!(path = %path.display(), version = snapshot.version.as_str(), "Snapshot written");
                return Ok(path);
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
            Err(e) => return Err(e.into()),
        }
    }

    Err(std::io::Error::new(
        ErrorKind::AlreadyExists,
        format!("no free snapshot name for {stem} in {}", dir.display()),
    )
    .into())
}
