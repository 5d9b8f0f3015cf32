use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArchiveError {
    #[error("cannot read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot list archive directory {path:?}: {source}")]
    List {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path:?} is not valid {encoding} text")]
    Decode {
        path: PathBuf,
        encoding: &'static str,
    },
}

impl ArchiveError {
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::Read { path, .. } | Self::List { path, .. } | Self::Decode { path, .. } => path,
        }
    }
}
