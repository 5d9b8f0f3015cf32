#![no_main]

use libfuzzer_sys::fuzz_target;

use briefing_index::extractor::{Markers, extract_articles};

fuzz_target!(|data: &[u8]| {
    let html = String::from_utf8_lossy(data);

    // Any byte soup must come back as a (possibly empty) list of articles
    let _ = extract_articles(&html, &Markers::default());
});
