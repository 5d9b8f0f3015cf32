use crate::extractor::markers::Markers;
use crate::extractor::model::normalize_whitespace;

/// Tracks the section heading articles are filed under.
///
/// Pick status is sticky: a heading carrying neither a pick marker nor an
/// ordinary-section marker keeps whatever the previous heading decided.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionClassifier {
    current: String,
    is_pick: bool,
}

impl SectionClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a closed level-2 heading.
    ///
    /// A heading with no text at all changes nothing. A whitespace-only one
    /// clears the section name and leaves pick status as it was.
    pub fn close_heading(&mut self, raw_text: &str, markers: &Markers) {
        if raw_text.is_empty() {
            return;
        }
        let section = normalize_whitespace(raw_text);

        if contains_any(&section, &markers.pick) {
            self.is_pick = true;
        } else if contains_any(&section, &markers.section) {
            self.is_pick = false;
        }
        self.current = section;
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn is_pick(&self) -> bool {
        self.is_pick
    }
}

fn contains_any(text: &str, needles: &[String]) -> bool {
    needles
        .iter()
        .any(|needle| !needle.is_empty() && text.contains(needle.as_str()))
}
