pub mod accumulator;
pub mod events;
pub mod keywords;
pub mod markers;
pub mod model;
pub mod section;

#[cfg(test)]
mod tests;

pub use accumulator::{Accumulator, BoundaryMode};
pub use markers::Markers;
pub use model::{ArticleRecord, RawArticle};

/// Extract every committed article from one briefing document.
pub fn extract_articles(html: &str, markers: &Markers) -> Vec<RawArticle> {
    // 1. Flatten the document into tag events
    let events = events::tokenize(html);

    // 2. Assemble articles, wrapper or not
    Accumulator::run(&events, markers)
}
