use std::fs;

use crate::extractor::{Markers, RawArticle, extract_articles};

fn extract_fixture(name: &str) -> Vec<RawArticle> {
    let html = fs::read_to_string(format!("src/extractor/tests/fixtures/{}", name))
        .expect("Failed to read test fixture");
    extract_articles(&html, &Markers::default())
}

fn titles(articles: &[RawArticle]) -> Vec<&str> {
    articles.iter().map(|a| a.title.as_str()).collect()
}

#[test]
fn test_plain_layout() {
    let articles = extract_fixture("layout_plain.html");

    assert_eq!(
        titles(&articles),
        vec![
            "Samsung unveils HBM4 chip",
            "TSMC raises capex guidance",
            "Nvidia closes at a record high",
        ]
    );

    let samsung = &articles[0];
    assert_eq!(samsung.section, "💾 Semiconductor");
    assert!(!samsung.is_pick);
    assert!(samsung.summary.starts_with("Samsung started sampling"));
    assert_eq!(
        samsung.url.as_ref().map(|u| u.as_str()),
        Some("https://techcrunch.com/2026/01/28/samsung-hbm4")
    );

    // Source line before the real summary is skipped
    assert_eq!(
        articles[1].summary,
        "TSMC lifted its 2026 capital spending plan on strong AI demand."
    );
    assert_eq!(articles[1].section, "💾 Semiconductor");
    assert!(articles[1].url.is_none());

    // Multi-line paragraph collapsed to single spaces
    let nvidia = &articles[2];
    assert_eq!(nvidia.section, "💰 Finance");
    assert!(nvidia.summary.contains("the year. Analysts raised"));
}

#[test]
fn test_wrapped_layout() {
    let articles = extract_fixture("layout_wrapped.html");

    assert_eq!(
        titles(&articles),
        vec![
            "Anthropic ships a new model",
            "OpenAI announces device plans",
            "Apple delays smart home hub",
            "EU fines Meta over ad targeting",
        ]
    );

    assert!(articles[0].is_pick);
    assert_eq!(articles[0].section, "💎 Claude's Pick");
    assert_eq!(
        articles[0].url.as_ref().map(|u| u.as_str()),
        Some("https://www.anthropic.com/news")
    );
    assert!(articles[1].summary.starts_with("The company confirmed"));

    // "Other reads" carries no marker, so the pick flag sticks
    assert_eq!(articles[2].section, "Other reads");
    assert!(articles[2].is_pick);

    assert_eq!(articles[3].section, "🌍 Global");
    assert!(!articles[3].is_pick);
}

#[test]
fn test_bilingual_layout() {
    let articles = extract_fixture("layout_bilingual.html");

    assert_eq!(
        titles(&articles),
        vec![
            "SK하이닉스, 분기 최대 실적",
            "네이버·카카오, AI 검색 협력",
            "Tesla expands robotaxi pilot",
        ]
    );
    assert!(articles[0].summary.starts_with("HBM 판매 호조로"));
    assert!(articles[1].summary.starts_with("양사는"));
    assert!(articles.iter().all(|a| a.is_pick));
    assert_eq!(articles[2].section, "Misc");
    assert_eq!(
        articles[2].url.as_ref().map(|u| u.as_str()),
        Some("https://www.cnbc.com/tesla-robotaxi")
    );
}

#[test]
fn test_positional_korean_layout() {
    let articles = extract_fixture("layout_positional_ko.html");

    // Duplicates survive extraction; they are dropped per file by the index
    assert_eq!(
        titles(&articles),
        vec![
            "삼성전자, HBM4 엔비디아 공급 개시",
            "삼성전자, HBM4 엔비디아 공급 개시",
            "트럼프, 반도체 관세 유예 시사",
            "현대차, 자율주행 택시 시범 운행",
        ]
    );
    assert!(articles[0].summary.starts_with("삼성전자가 엔비디아에"));
    assert!(articles[0].is_pick);

    assert_eq!(articles[2].section, "기타");
    assert!(articles[2].is_pick);
    assert!(articles[2].summary.starts_with("미국 정부가"));

    // Unclosed paragraph before the next heading still yields a summary
    assert_eq!(articles[3].section, "🚗 자율주행");
    assert!(!articles[3].is_pick);
    assert!(articles[3].summary.ends_with("회사가 밝혔다."));
}

#[test]
fn test_empty_document() {
    assert!(extract_articles("", &Markers::default()).is_empty());
}

#[test]
fn test_malformed_html() {
    let html = "<h2>💎 Pick<h3>Broken <b>markup</h3><p>Unclosed paragraph with enough text<div>trailing";
    let articles = extract_articles(html, &Markers::default());

    // Should handle malformed HTML gracefully
    for article in &articles {
        assert!(!article.title.is_empty());
        assert!(article.summary.chars().count() > 15);
    }
}

#[test]
fn test_custom_markers() {
    let markers = Markers {
        boundary_tag: "section".to_string(),
        outlets: vec!["Yonhap".to_string()],
        ..Markers::default()
    };
    let html = r#"
        <section><h3>Exports hit record</h3><p>Yonhap reports exports rose sharply</p>
        <p>Chip exports grew for the tenth straight month.</p></section>
        <section><h3>No summary here</h3></section>
    "#;
    let articles = extract_articles(html, &markers);
    assert_eq!(titles(&articles), vec!["Exports hit record"]);
    assert_eq!(articles[0].summary, "Chip exports grew for the tenth straight month.");
}

#[test]
fn test_whitespace_section_heading() {
    let html = "<h2>💰 Finance</h2><h2>   </h2>\
                <h3>Kospi ends higher</h3><p>Foreign buyers returned to chip stocks on Monday.</p>";
    let articles = extract_articles(html, &Markers::default());
    assert_eq!(titles(&articles), vec!["Kospi ends higher"]);
    assert_eq!(articles[0].section, "");
    assert!(!articles[0].is_pick);
}

#[cfg(feature = "fuzz")]
mod fuzz {
    use super::*;
    use crate::extractor::model::MAX_SUMMARY_CHARS;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_extract_never_panics(html in ".*") {
            // Should never panic regardless of input
            let _ = extract_articles(&html, &Markers::default());
        }

        #[test]
        fn test_committed_records_are_complete(
            title in "[A-Za-z가-힣 ]{0,40}",
            body in "[A-Za-z가-힣 .]{0,400}",
            wrapped in any::<bool>(),
        ) {
            let article = format!("<h3>{}</h3><p>{}</p>", title, body);
            let html = if wrapped { format!("<article>{}</article>", article) } else { article };
            for record in extract_articles(&html, &Markers::default()) {
                prop_assert!(!record.title.trim().is_empty());
                prop_assert!(record.summary.chars().count() > 15);
                prop_assert!(record.summary.chars().count() <= MAX_SUMMARY_CHARS);
                prop_assert!(!record.summary.contains("  "));
            }
        }
    }
}
