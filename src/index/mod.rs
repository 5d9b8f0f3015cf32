pub mod file;
pub mod output;

pub use file::{dedup_by_title, parse_briefing_file};
pub use output::{IndexError, write_index};

use std::path::Path;

use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use crate::archive::{self, ArchiveEntry};
use crate::extractor::{ArticleRecord, Markers};

/// The searchable index consumed by the frontend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchIndex {
    pub articles: Vec<ArticleRecord>,
    pub total: usize,
    pub picks: usize,
    pub updated: DateTime<Utc>,
}

impl SearchIndex {
    pub fn empty() -> Self {
        Self::from_articles(Vec::new())
    }

    pub fn from_articles(articles: Vec<ArticleRecord>) -> Self {
        let picks = articles.iter().filter(|a| a.is_pick).count();
        Self {
            total: articles.len(),
            picks,
            articles,
            updated: Utc::now(),
        }
    }
}

/// Build the index over every briefing in `archive_dir`, newest file first.
///
/// Never fails: a missing or unlistable directory gives an empty index and a
/// file that cannot be read contributes no records.
#[instrument(skip(markers), fields(dir = %archive_dir.display()))]
pub fn build_index(archive_dir: &Path, markers: &Markers, parallel: bool) -> SearchIndex {
    let entries = match archive::scan(archive_dir) {
        Ok(Some(entries)) => entries,
        Ok(None) => {
            warn!("Archive directory '{}' not found", archive_dir.display());
            return SearchIndex::empty();
        }
        Err(e) => {
            warn!("Cannot list archive directory: {}", e);
            return SearchIndex::empty();
        }
    };

    // Each file gets its own accumulator; results come back in entry order.
    let per_file: Vec<Vec<ArticleRecord>> = if parallel {
        entries.par_iter().map(|e| parse_or_skip(e, markers)).collect()
    } else {
        entries.iter().map(|e| parse_or_skip(e, markers)).collect()
    };

    let mut articles = Vec::new();
    for (entry, records) in entries.iter().zip(per_file) {
        let picks = records.iter().filter(|a| a.is_pick).count();
        info!(
            "Parsed {}: {} articles ({} picks)",
            entry.file_name,
            records.len(),
            picks
        );
        articles.extend(records);
    }

    SearchIndex::from_articles(articles)
}

fn parse_or_skip(entry: &ArchiveEntry, markers: &Markers) -> Vec<ArticleRecord> {
    match parse_briefing_file(entry, markers) {
        Ok(records) => records,
        Err(e) => {
            warn!(path = %e.path().display(), "Skipping {}: {}", entry.file_name, e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_index() {
        let index = SearchIndex::empty();
        assert!(index.articles.is_empty());
        assert_eq!(index.total, 0);
        assert_eq!(index.picks, 0);
    }

    #[test]
    fn test_missing_directory_gives_empty_index() {
        let dir = tempfile::tempdir().unwrap();
        let index = build_index(&dir.path().join("archive"), &Markers::default(), false);
        assert_eq!(index.total, 0);
        assert_eq!(index.picks, 0);
    }

    #[test]
    fn test_counts_follow_articles() {
        let record = |pick: bool| ArticleRecord {
            date: None,
            file: "f".to_string(),
            title: "t".to_string(),
            summary: "s".to_string(),
            keywords: Vec::new(),
            section: String::new(),
            is_pick: pick,
            url: None,
        };
        let index = SearchIndex::from_articles(vec![record(true), record(false), record(true)]);
        assert_eq!(index.total, 3);
        assert_eq!(index.picks, 2);
    }
}
