use std::fs;
use std::path::Path;

/// One `<h3>` + `<p>` article block.
pub fn article(title: &str, summary: &str) -> String {
    format!("<h3>{}</h3>\n<p>{}</p>\n", title, summary)
}

/// Write a briefing page with the given section heading and body.
pub fn write_briefing(dir: &Path, file_name: &str, section: &str, body: &str) {
    let html = format!(
        "<html><head><meta charset=\"utf-8\"><title>Jae's Briefing - {}</title></head>\
         <body><h2>{}</h2>\n{}</body></html>",
        file_name, section, body
    );
    fs::write(dir.join(file_name), html).unwrap();
}
