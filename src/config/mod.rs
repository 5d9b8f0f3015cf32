//! Configuration handling for the index and listing builders.
//!
//! Everything is read from environment variables with defaults that match the
//! layout of a briefing repository checkout (an `archive/` folder next to the
//! generated JSON files). `Config::from_env` performs that loading and
//! validates the values that have a structure (the listing base URL, booleans).

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use url::Url;

use crate::extractor::Markers;

/// Environment variable names. Public so binaries and tests can refer to them.
pub const ENV_ARCHIVE_DIR: &str = "BRIEFING_ARCHIVE_DIR";
pub const ENV_INDEX_OUTPUT: &str = "BRIEFING_INDEX_OUTPUT";
pub const ENV_LIST_OUTPUT: &str = "BRIEFING_LIST_OUTPUT";
pub const ENV_LIST_BASE_URL: &str = "BRIEFING_LIST_BASE_URL";
pub const ENV_TITLE_PREFIX: &str = "BRIEFING_TITLE_PREFIX";
pub const ENV_MARKERS: &str = "BRIEFING_MARKERS";
pub const ENV_PARALLEL: &str = "BRIEFING_PARALLEL";

/// Default values used when environment variables are absent.
const DEFAULT_ARCHIVE_DIR: &str = "archive";
const DEFAULT_INDEX_OUTPUT: &str = "search-index.json";
const DEFAULT_LIST_OUTPUT: &str = "list.json";
const DEFAULT_LIST_BASE_URL: &str = "https://hong4137.github.io/briefing/archive/";
const DEFAULT_TITLE_PREFIX: &str = "Jae's Briefing - ";

/// Application runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    archive_dir: PathBuf,
    index_output: PathBuf,
    list_output: PathBuf,
    list_base_url: Url,
    title_prefix: String,
    markers_path: Option<PathBuf>,
    parallel: bool,
}

impl Config {
    /// Create a config explicitly. Optional settings take their defaults.
    pub fn new(
        archive_dir: impl Into<PathBuf>,
        index_output: impl Into<PathBuf>,
        list_output: impl Into<PathBuf>,
        list_base_url: Url,
    ) -> Self {
        Self {
            archive_dir: archive_dir.into(),
            index_output: index_output.into(),
            list_output: list_output.into(),
            list_base_url,
            title_prefix: DEFAULT_TITLE_PREFIX.to_string(),
            markers_path: None,
            parallel: true,
        }
    }

    /// Load from environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let archive_dir = env::var(ENV_ARCHIVE_DIR).unwrap_or_else(|_| DEFAULT_ARCHIVE_DIR.to_string());
        let index_output =
            env::var(ENV_INDEX_OUTPUT).unwrap_or_else(|_| DEFAULT_INDEX_OUTPUT.to_string());
        let list_output = env::var(ENV_LIST_OUTPUT).unwrap_or_else(|_| DEFAULT_LIST_OUTPUT.to_string());
        let base_url =
            env::var(ENV_LIST_BASE_URL).unwrap_or_else(|_| DEFAULT_LIST_BASE_URL.to_string());
        let title_prefix =
            env::var(ENV_TITLE_PREFIX).unwrap_or_else(|_| DEFAULT_TITLE_PREFIX.to_string());
        let markers_path = env::var(ENV_MARKERS)
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);
        let parallel = match env::var(ENV_PARALLEL) {
            Ok(value) => parse_bool(ENV_PARALLEL, &value)?,
            Err(_) => true,
        };

        for (field, value) in [
            (ENV_ARCHIVE_DIR, &archive_dir),
            (ENV_INDEX_OUTPUT, &index_output),
            (ENV_LIST_OUTPUT, &list_output),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: "must not be empty".to_string(),
                });
            }
        }

        Ok(Self {
            archive_dir: archive_dir.into(),
            index_output: index_output.into(),
            list_output: list_output.into(),
            list_base_url: parse_base_url(&base_url)?,
            title_prefix,
            markers_path,
            parallel,
        })
    }

    /// Folder holding the briefing HTML files.
    pub fn archive_dir(&self) -> &Path {
        &self.archive_dir
    }
    /// Where the search index JSON is written.
    pub fn index_output(&self) -> &Path {
        &self.index_output
    }
    /// Where the flat briefing listing JSON is written.
    pub fn list_output(&self) -> &Path {
        &self.list_output
    }
    /// Absolute URL the archive is published under; listing links are joined onto it.
    pub fn list_base_url(&self) -> &Url {
        &self.list_base_url
    }
    /// Site name prefix removed from `<title>` text in the listing.
    pub fn title_prefix(&self) -> &str {
        &self.title_prefix
    }

    pub fn markers_path(&self) -> Option<&Path> {
        self.markers_path.as_deref()
    }

    /// Parse archive files on the rayon pool.
    pub fn parallel(&self) -> bool {
        self.parallel
    }

    pub fn with_markers_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.markers_path = Some(path.into());
        self
    }

    /// Marker table for the extractor: the built-in table, overridden field by
    /// field from the JSON file at `markers_path` when one is configured.
    pub fn load_markers(&self) -> Result<Markers, ConfigError> {
        let Some(path) = self.markers_path.as_deref() else {
            return Ok(Markers::default());
        };
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::MarkersRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ConfigError::MarkersParse {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl Default for Config {
    /// Defaults (mirrors `from_env` with no env overrides).
    fn default() -> Self {
        let base = Url::parse(DEFAULT_LIST_BASE_URL).expect("default base url is valid");
        Self::new(DEFAULT_ARCHIVE_DIR, DEFAULT_INDEX_OUTPUT, DEFAULT_LIST_OUTPUT, base)
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw).map_err(|e| ConfigError::InvalidValue {
        field: ENV_LIST_BASE_URL,
        reason: e.to_string(),
    })?;
    if url.cannot_be_a_base() || !url.path().ends_with('/') {
        return Err(ConfigError::InvalidValue {
            field: ENV_LIST_BASE_URL,
            reason: format!("'{}' must be an absolute URL ending in '/'", raw),
        });
    }
    Ok(url)
}

fn parse_bool(field: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::InvalidValue {
            field,
            reason: format!("expected a boolean, got '{}'", other),
        }),
    }
}

/// Errors that can occur while building a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("cannot read marker table {path:?}: {source}")]
    MarkersRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid marker table {path:?}: {source}")]
    MarkersParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
