use std::sync::LazyLock;

use regex::Regex;

/// Most keywords kept per article.
pub const MAX_KEYWORDS: usize = 15;

/// Proper-noun candidates shorter than this are ignored.
const MIN_PROPER_NOUN_LEN: usize = 3;

/// Brand, ticker and topic alternations, Korean and English spellings side
/// by side. Matching runs on lowercased text, so entries are lowercase.
const PATTERN_TABLE: &[&str] = &[
    "삼성|samsung",
    "sk하이닉스|sk hynix|하이닉스|hynix",
    "네이버|naver",
    "카카오|kakao",
    "엔비디아|nvidia|nvda",
    "인텔|intel",
    "amd|에이엠디",
    "tsmc",
    "애플|apple|aapl",
    "구글|google|alphabet",
    "마이크로소프트|microsoft|msft",
    "아마존|amazon|amzn",
    "메타|meta|facebook",
    "테슬라|tesla|tsla",
    "openai|오픈ai",
    "anthropic|앤트로픽|클로드|claude",
    "반도체|semiconductor",
    "hbm",
    "ai|인공지능",
    "로봇|robot",
    "자율주행|autonomous",
    "전기차|ev",
    "트럼프|trump",
    "중국|china",
    "관세|tariff",
    "비트코인|bitcoin",
    "ces",
    "ipo",
];

static LATIN_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[A-Za-z]+").unwrap());

// Entries match anywhere, so "ai" is found inside "said" too.
static PATTERNS: LazyLock<Vec<Regex>> =
    LazyLock::new(|| PATTERN_TABLE.iter().map(|alts| Regex::new(alts).unwrap()).collect());

/// Searchable tokens for an article, lowercase, in first-found order.
///
/// Proper nouns come first in order of appearance, then pattern-table hits in
/// table order. Duplicates are dropped and only the first [`MAX_KEYWORDS`] kept.
pub fn extract_keywords(title: &str, summary: &str) -> Vec<String> {
    let combined = format!("{} {}", title, summary);
    let mut keywords: Vec<String> = Vec::new();

    for run in LATIN_RUN.find_iter(&combined) {
        let word = run.as_str();
        if word.len() >= MIN_PROPER_NOUN_LEN && word.starts_with(|c: char| c.is_ascii_uppercase())
        {
            push_unique(&mut keywords, word.to_lowercase());
        }
    }

    let lowered = combined.to_lowercase();
    for pattern in PATTERNS.iter() {
        if let Some(m) = pattern.find(&lowered) {
            push_unique(&mut keywords, m.as_str().to_string());
        }
    }

    keywords.truncate(MAX_KEYWORDS);
    keywords
}

fn push_unique(keywords: &mut Vec<String>, keyword: String) {
    if !keywords.contains(&keyword) {
        keywords.push(keyword);
    }
}
