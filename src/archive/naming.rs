use std::sync::LazyLock;

use regex::Regex;

static LEADING_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4}-\d{2}-\d{2})").unwrap());

static ANY_DATE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d{4}-\d{2}-\d{2})").unwrap());

const HTML_EXTENSION: &str = ".html";

/// File name with the `.html` extension removed.
pub fn source_name(file_name: &str) -> &str {
    file_name.strip_suffix(HTML_EXTENSION).unwrap_or(file_name)
}

/// Date key for an archive file.
///
/// `2026-01-28.html` yields the leading date. Weekly reviews carry the date
/// anywhere in the name. Special editions have no date and are keyed by their
/// name instead. Anything else has no key.
pub fn date_key(file_name: &str) -> Option<String> {
    if let Some(caps) = LEADING_DATE.captures(file_name) {
        return Some(caps[1].to_string());
    }

    let lower = file_name.to_lowercase();
    if lower.contains("weekly")
        && let Some(caps) = ANY_DATE.captures(file_name)
    {
        return Some(caps[1].to_string());
    }

    if lower.contains("special") {
        return Some(source_name(file_name).to_string());
    }

    None
}
