use std::collections::HashSet;

use tracing::debug;

use crate::archive::{self, ArchiveEntry, ArchiveError, source_name};
use crate::extractor::{ArticleRecord, Markers, RawArticle, extract_articles};

/// Titles sharing this many leading characters (case-folded) are duplicates.
pub const DEDUP_PREFIX_CHARS: usize = 50;

/// Parse one archive file into index records.
///
/// Records are deduplicated by title within this file only.
pub fn parse_briefing_file(
    entry: &ArchiveEntry,
    markers: &Markers,
) -> Result<Vec<ArticleRecord>, ArchiveError> {
    let document = archive::read_document(&entry.path)?;
    let raw = extract_articles(&document.text, markers);
    debug!(
        file = %entry.file_name,
        encoding = document.encoding,
        committed = raw.len(),
        "extracted articles"
    );

    let date = archive::date_key(&entry.file_name);
    let file = source_name(&entry.file_name);
    Ok(dedup_by_title(raw)
        .into_iter()
        .map(|article| ArticleRecord::from_raw(article, date.clone(), file))
        .collect())
}

/// Keep the first article for every title key.
pub fn dedup_by_title(articles: Vec<RawArticle>) -> Vec<RawArticle> {
    let mut seen = HashSet::new();
    articles
        .into_iter()
        .filter(|article| seen.insert(title_key(&article.title)))
        .collect()
}

fn title_key(title: &str) -> String {
    title.to_lowercase().chars().take(DEDUP_PREFIX_CHARS).collect()
}
