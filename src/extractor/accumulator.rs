//! Event-driven assembly of article records.
//!
//! Briefings come in several layouts: with or without an `<article>` wrapper,
//! bilingual titles tagged by class or recognised by script, summaries tagged
//! by class or found by position. The accumulator handles all of them with one
//! pending record that headings and paragraphs fill in, and commits it once a
//! new article starts, the wrapper closes, or the document ends.

use std::mem;

use tracing::trace;
use url::Url;

use crate::extractor::events::{Attributes, TagEvent};
use crate::extractor::markers::Markers;
use crate::extractor::model::{
    MAX_SUMMARY_CHARS, MIN_SUMMARY_CHARS, RawArticle, normalize_whitespace, truncate_chars,
};
use crate::extractor::section::SectionClassifier;

const SECTION_TAG: &str = "h2";
const TITLE_TAG: &str = "h3";
const PARAGRAPH_TAG: &str = "p";
const ANCHOR_TAG: &str = "a";

/// Whether articles are delimited by an explicit wrapper element.
///
/// Decided once per document: a layout either wraps every article or none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryMode {
    Wrapped,
    Implicit,
}

impl BoundaryMode {
    pub fn detect(events: &[TagEvent], markers: &Markers) -> Self {
        if events.iter().any(|e| e.is_open(&markers.boundary_tag)) {
            Self::Wrapped
        } else {
            Self::Implicit
        }
    }
}

/// What the scratch buffer is currently collecting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Capture {
    Section,
    Title { secondary: bool },
    Paragraph { secondary_title: bool, summary: bool },
}

#[derive(Debug, Default)]
struct Pending {
    primary_title: Option<String>,
    secondary_title: Option<String>,
    summary: Option<String>,
    url: Option<Url>,
    section: String,
    is_pick: bool,
}

impl Pending {
    fn has_title(&self) -> bool {
        self.primary_title.is_some() || self.secondary_title.is_some()
    }

    /// The committed form, if the record got both a title and a summary.
    fn commit(self) -> Option<RawArticle> {
        let title = self.secondary_title.or(self.primary_title)?;
        let summary = self.summary?;
        if title.is_empty() || summary.chars().count() <= MIN_SUMMARY_CHARS {
            return None;
        }
        Some(RawArticle {
            title,
            summary: truncate_chars(&summary, MAX_SUMMARY_CHARS),
            section: self.section,
            is_pick: self.is_pick,
            url: self.url,
        })
    }
}

pub struct Accumulator<'m> {
    markers: &'m Markers,
    mode: BoundaryMode,
    classifier: SectionClassifier,
    capture: Option<Capture>,
    scratch: String,
    pending: Pending,
    articles: Vec<RawArticle>,
}

impl<'m> Accumulator<'m> {
    pub fn new(markers: &'m Markers, mode: BoundaryMode) -> Self {
        Self {
            markers,
            mode,
            classifier: SectionClassifier::new(),
            capture: None,
            scratch: String::new(),
            pending: Pending::default(),
            articles: Vec::new(),
        }
    }

    /// Run a whole document through a fresh accumulator.
    pub fn run(events: &[TagEvent], markers: &'m Markers) -> Vec<RawArticle> {
        let mut acc = Self::new(markers, BoundaryMode::detect(events, markers));
        for event in events {
            acc.feed(event);
        }
        acc.finish()
    }

    pub fn feed(&mut self, event: &TagEvent) {
        match event {
            TagEvent::Open { name, attrs } => self.open(name, attrs),
            TagEvent::Close { name } => self.close(name),
            TagEvent::Text(text) => {
                if self.capture.is_some() {
                    self.scratch.push_str(text);
                }
            }
        }
    }

    /// Commit the last pending record and hand back everything committed.
    pub fn finish(mut self) -> Vec<RawArticle> {
        self.flush();
        self.articles
    }

    fn open(&mut self, name: &str, attrs: &Attributes) {
        if self.mode == BoundaryMode::Wrapped && name == self.markers.boundary_tag {
            self.flush();
            return;
        }

        match name {
            SECTION_TAG => self.start_capture(Capture::Section),
            TITLE_TAG => {
                if self.mode == BoundaryMode::Implicit && self.pending.has_title() {
                    self.flush();
                }
                let secondary = attrs
                    .classes()
                    .any(|c| self.markers.is_secondary_title_class(c));
                self.start_capture(Capture::Title { secondary });
            }
            PARAGRAPH_TAG if self.pending.has_title() => {
                let secondary_title = attrs
                    .classes()
                    .any(|c| self.markers.is_secondary_title_class(c));
                let summary = attrs.classes().any(|c| self.markers.is_summary_class(c));
                self.start_capture(Capture::Paragraph {
                    secondary_title,
                    summary,
                });
            }
            ANCHOR_TAG if self.pending.has_title() && self.pending.url.is_none() => {
                self.pending.url = absolute_link(attrs.get("href"));
            }
            _ => {}
        }
    }

    fn close(&mut self, name: &str) {
        if self.mode == BoundaryMode::Wrapped && name == self.markers.boundary_tag {
            self.flush();
            return;
        }

        match (name, self.capture) {
            (SECTION_TAG, Some(Capture::Section)) => {
                let text = self.take_scratch();
                self.classifier.close_heading(&text, self.markers);
            }
            (TITLE_TAG, Some(Capture::Title { secondary })) => {
                let text = self.take_scratch();
                self.set_title(self.markers.strip_badge(&text), secondary);
            }
            (
                PARAGRAPH_TAG,
                Some(Capture::Paragraph {
                    secondary_title,
                    summary,
                }),
            ) => {
                let text = normalize_whitespace(&self.take_scratch());
                self.classify_paragraph(text, secondary_title, summary);
            }
            _ => {}
        }
    }

    fn start_capture(&mut self, capture: Capture) {
        self.capture = Some(capture);
        self.scratch.clear();
    }

    fn take_scratch(&mut self) -> String {
        self.capture = None;
        mem::take(&mut self.scratch)
    }

    fn set_title(&mut self, title: &str, secondary_class: bool) {
        if title.is_empty() {
            return;
        }
        if !self.pending.has_title() {
            self.pending.section = self.classifier.current().to_string();
            self.pending.is_pick = self.classifier.is_pick();
        }
        if secondary_class || contains_hangul(title) {
            self.pending.secondary_title = Some(title.to_string());
        } else {
            self.pending.primary_title = Some(title.to_string());
        }
    }

    fn classify_paragraph(&mut self, text: String, secondary_title: bool, summary: bool) {
        if text.chars().count() <= MIN_SUMMARY_CHARS {
            trace!(text = %text, "paragraph too short to classify");
            return;
        }
        if secondary_title {
            self.pending.secondary_title = Some(text);
        } else if summary {
            self.pending.summary = Some(text);
        } else if self.pending.summary.is_none()
            && self.pending.has_title()
            && !self.markers.is_metadata_line(&text)
        {
            self.pending.summary = Some(text);
        }
    }

    fn flush(&mut self) {
        let pending = mem::take(&mut self.pending);
        if let Some(article) = pending.commit() {
            trace!(title = %article.title, "committed article");
            self.articles.push(article);
        }
    }
}

/// `href` as a URL when it is an absolute http(s) link.
fn absolute_link(href: &str) -> Option<Url> {
    let url = Url::parse(href.trim()).ok()?;
    matches!(url.scheme(), "http" | "https").then_some(url)
}

pub fn contains_hangul(text: &str) -> bool {
    text.chars().any(|c| {
        matches!(c,
            '\u{AC00}'..='\u{D7A3}'     // syllables
            | '\u{1100}'..='\u{11FF}'   // jamo
            | '\u{3130}'..='\u{318F}'   // compatibility jamo
        )
    })
}
