//! Flat `{date, title, link}` listing of every briefing in the archive.
//!
//! Titles come from a plain regex lookup of `<title>` then `<h1>`; no article
//! extraction happens here.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use url::Url;

use crate::archive::{self, source_name};

static TITLE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<title>(.*?)</title>").unwrap());

static H1_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<h1>(.*?)</h1>").unwrap());

/// Title used when a briefing has neither `<title>` nor `<h1>`.
pub const UNTITLED: &str = "제목 없음";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListEntry {
    pub date: String,
    pub title: String,
    pub link: String,
}

/// Display title of a briefing page.
pub fn title_from_html(html: &str, site_prefix: &str) -> Option<String> {
    if let Some(caps) = TITLE_REGEX.captures(html) {
        let title = caps[1].replace(site_prefix, "");
        let title = title.trim();
        if !title.is_empty() {
            return Some(title.to_string());
        }
    }

    H1_REGEX
        .captures(html)
        .map(|caps| caps[1].trim().to_string())
        .filter(|title| !title.is_empty())
}

/// One entry per archive file, newest first. `None` when the directory is missing.
pub fn build_listing(archive_dir: &Path, base_url: &Url, site_prefix: &str) -> Option<Vec<ListEntry>> {
    let entries = match archive::scan(archive_dir) {
        Ok(Some(entries)) => entries,
        Ok(None) => return None,
        Err(e) => {
            warn!("Cannot list archive directory: {}", e);
            return None;
        }
    };
    info!("Found {} briefing files", entries.len());

    let listing = entries
        .iter()
        .map(|entry| {
            let title = match archive::read_document(&entry.path) {
                Ok(doc) => title_from_html(&doc.text, site_prefix),
                Err(e) => {
                    warn!("Error reading {}: {}", entry.path.display(), e);
                    None
                }
            };
            ListEntry {
                date: source_name(&entry.file_name).to_string(),
                title: title.unwrap_or_else(|| UNTITLED.to_string()),
                link: link_for(base_url, &entry.file_name),
            }
        })
        .collect();
    Some(listing)
}

fn link_for(base_url: &Url, file_name: &str) -> String {
    base_url
        .join(file_name)
        .map(String::from)
        .unwrap_or_else(|_| format!("{}{}", base_url, file_name))
}
