use serde::{Deserialize, Serialize};
use url::Url;

use crate::extractor::keywords::extract_keywords;

/// Longest summary kept in the index, in characters.
pub const MAX_SUMMARY_CHARS: usize = 300;

/// A paragraph must be longer than this to count as a summary.
pub const MIN_SUMMARY_CHARS: usize = 15;

/// An article as committed by the accumulator, before file metadata is attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawArticle {
    pub title: String,
    pub summary: String,
    pub section: String,
    pub is_pick: bool,
    pub url: Option<Url>,
}

/// One searchable entry of the index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRecord {
    pub date: Option<String>,
    pub file: String,
    pub title: String,
    pub summary: String,
    pub keywords: Vec<String>,
    pub section: String,
    pub is_pick: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<Url>,
}

impl ArticleRecord {
    pub fn from_raw(raw: RawArticle, date: Option<String>, file: impl Into<String>) -> Self {
        let keywords = extract_keywords(&raw.title, &raw.summary);
        Self {
            date,
            file: file.into(),
            title: raw.title,
            summary: raw.summary,
            keywords,
            section: raw.section,
            is_pick: raw.is_pick,
            url: raw.url,
        }
    }
}

/// Collapse every whitespace run to a single space and trim the ends.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// First `max` characters of `text`.
pub fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_whitespace() {
        assert_eq!(
            normalize_whitespace("  Hello \t  world\n\n\n  Test  "),
            "Hello world Test"
        );
        assert_eq!(normalize_whitespace(" \n "), "");
    }

    #[test]
    fn test_truncate_chars_counts_characters() {
        assert_eq!(truncate_chars("반도체 수출", 3), "반도체");
        assert_eq!(truncate_chars("short", 300), "short");
        assert_eq!(truncate_chars(&"a".repeat(301), 300).len(), 300);
    }

    #[test]
    fn test_record_serialization_shape() {
        let raw = RawArticle {
            title: "Samsung unveils HBM4 chip".to_string(),
            summary: "Samsung showed its next memory generation to Nvidia.".to_string(),
            section: "💾 반도체".to_string(),
            is_pick: false,
            url: None,
        };
        let record = ArticleRecord::from_raw(raw, None, "special-ai-year");
        let json = serde_json::to_value(&record).unwrap();

        assert!(json["date"].is_null());
        assert_eq!(json["file"], "special-ai-year");
        assert_eq!(json["is_pick"], false);
        assert!(json.get("url").is_none());
        assert!(json["keywords"].as_array().unwrap().len() <= 15);
    }

    #[test]
    fn test_record_serializes_url_when_present() {
        let raw = RawArticle {
            title: "t".to_string(),
            summary: "s".to_string(),
            section: String::new(),
            is_pick: true,
            url: Some(Url::parse("https://techcrunch.com/a").unwrap()),
        };
        let record = ArticleRecord::from_raw(raw, Some("2026-01-28".to_string()), "2026-01-28");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["url"], "https://techcrunch.com/a");
        assert_eq!(json["date"], "2026-01-28");
    }
}
