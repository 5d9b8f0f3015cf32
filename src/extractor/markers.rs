use serde::Deserialize;

/// Recognition rules shared by every briefing layout.
///
/// The historical layouts differ only in which of these signals they carry, so
/// one table drives the classifier and the accumulator for all of them. Any
/// field missing from a JSON override keeps its built-in value.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Markers {
    /// Section heading fragments that mark a highlighted pick section.
    pub pick: Vec<String>,
    /// Section heading fragments that mark an ordinary topic section.
    pub section: Vec<String>,
    /// Outlet names that start a source attribution line.
    pub outlets: Vec<String>,
    /// Calendar / score annotation prefixes.
    pub annotations: Vec<String>,
    /// Badge words trailing a title heading.
    pub badges: Vec<String>,
    /// Element wrapping one article in the layouts that have one.
    pub boundary_tag: String,
    pub secondary_title_classes: Vec<String>,
    pub summary_classes: Vec<String>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            pick: strings(&["Claude's Pick", "클로드", "💎", "Pick", "PICK"]),
            section: strings(&[
                "💰", "📈", "📉", "💹", "🏦", "💾", "🔬", "🌍", "🌏", "🌎", "🌐", "📰", "🤖", "🚗",
                "금융", "경제", "증시", "반도체", "글로벌", "국제", "테크", "Finance", "Markets",
                "Semiconductor", "Global", "World", "Tech",
            ]),
            outlets: strings(&[
                "TechCrunch",
                "Bloomberg",
                "CNBC",
                "BBC",
                "Wired",
                "Reuters",
                "The Verge",
                "Financial Times",
                "WSJ",
                "Nikkei",
                "연합뉴스",
            ]),
            annotations: strings(&["📅", "🗓", "⭐", "📊", "Score", "점수", "출처", "Source"]),
            badges: strings(&["HOT", "NEW", "PICK"]),
            boundary_tag: "article".to_string(),
            secondary_title_classes: strings(&["title-ko", "ko-title", "korean", "ko"]),
            summary_classes: strings(&["summary", "summary-ko", "desc", "description"]),
        }
    }
}

impl Markers {
    /// Source attribution or annotation lines never become summaries.
    pub fn is_metadata_line(&self, text: &str) -> bool {
        let text = text.trim_start();
        self.outlets
            .iter()
            .chain(self.annotations.iter())
            .any(|prefix| !prefix.is_empty() && text.starts_with(prefix.as_str()))
    }

    /// Remove one trailing badge (`... HOT`) and the whitespace around it.
    pub fn strip_badge<'a>(&self, title: &'a str) -> &'a str {
        let title = title.trim();
        self.badges
            .iter()
            .filter(|badge| !badge.is_empty())
            .find_map(|badge| title.strip_suffix(badge.as_str()))
            .map_or(title, str::trim_end)
    }

    pub fn is_secondary_title_class(&self, class: &str) -> bool {
        self.secondary_title_classes.iter().any(|c| c == class)
    }

    pub fn is_summary_class(&self, class: &str) -> bool {
        self.summary_classes.iter().any(|c| c == class)
    }
}
