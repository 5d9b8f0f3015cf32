use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use crate::index::SearchIndex;

#[derive(Error, Debug)]
pub enum IndexError {
    #[error("cannot write {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot serialize to {path:?}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Write the index as pretty-printed JSON, non-ASCII text kept verbatim.
pub fn write_index(index: &SearchIndex, path: &Path) -> Result<(), IndexError> {
    write_json(index, path)
}

/// Serialize `value` to `path`, creating missing parent directories.
pub fn write_json<T: Serialize + ?Sized>(value: &T, path: &Path) -> Result<(), IndexError> {
    let io_err = |source| IndexError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(io_err)?;
    }

    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value).map_err(|source| IndexError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    writer.write_all(b"\n").map_err(io_err)?;
    writer.flush().map_err(io_err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_creates_parent_and_keeps_hangul() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("search-index.json");

        let mut index = SearchIndex::empty();
        index.articles.push(crate::extractor::ArticleRecord {
            date: Some("2026-01-28".to_string()),
            file: "2026-01-28".to_string(),
            title: "삼성전자 HBM4 공개".to_string(),
            summary: "삼성전자가 HBM4 샘플을 고객사에 공급했다.".to_string(),
            keywords: vec!["삼성".to_string(), "hbm".to_string()],
            section: String::new(),
            is_pick: false,
            url: None,
        });
        write_index(&index, &path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("삼성전자 HBM4 공개"));
        assert!(written.contains("\n  \"articles\""));

        let parsed: SearchIndex = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed.articles, index.articles);
        assert_eq!(parsed.updated, index.updated);
    }
}
