use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::archive::errors::ArchiveError;

/// One `.html` file in the archive directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    pub path: PathBuf,
    pub file_name: String,
}

/// List the briefing files in `dir`, newest name first.
///
/// Returns `Ok(None)` when the directory does not exist so callers can degrade
/// to an empty result instead of failing.
pub fn scan(dir: &Path) -> Result<Option<Vec<ArchiveEntry>>, ArchiveError> {
    let read_dir = match fs::read_dir(dir) {
        Ok(read_dir) => read_dir,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(ArchiveError::List {
                path: dir.to_path_buf(),
                source,
            });
        }
    };

    let mut entries = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|source| ArchiveError::List {
            path: dir.to_path_buf(),
            source,
        })?;
        let Ok(file_name) = entry.file_name().into_string() else {
            debug!(path = %entry.path().display(), "skipping non UTF-8 file name");
            continue;
        };
        if !file_name.ends_with(".html") || entry.path().is_dir() {
            continue;
        }
        entries.push(ArchiveEntry {
            path: entry.path(),
            file_name,
        });
    }

    // Lexicographic descending, which is reverse chronological for dated names.
    entries.sort_by(|a, b| b.file_name.cmp(&a.file_name));
    Ok(Some(entries))
}
