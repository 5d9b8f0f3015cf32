use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use encoding_rs::Encoding;
use regex::Regex;
use crate::archive::errors::ArchiveError;

static META_CHARSET_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)<meta\s+[^>]*?charset\s*=\s*["']?([^"'\s/>]+)"#).unwrap());

/// How far into a file we look for a `<meta charset>` declaration.
const SNIFF_LEN: usize = 4096;

/// A briefing file decoded to UTF-8 text.
#[derive(Debug)]
pub struct Document {
    pub text: String,
    /// WHATWG name of the encoding the bytes were decoded from.
    pub encoding: &'static str,
}

/// Read an archive file and decode it to UTF-8.
pub fn read_document(path: &Path) -> Result<Document, ArchiveError> {
    let bytes = fs::read(path).map_err(|source| ArchiveError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let encoding = detect_encoding(&bytes);
    let text = decode_to_utf8(&bytes, encoding).ok_or_else(|| ArchiveError::Decode {
        path: path.to_path_buf(),
        encoding: encoding.name(),
    })?;

    Ok(Document {
        text,
        encoding: encoding.name(),
    })
}

fn detect_encoding(bytes: &[u8]) -> &'static Encoding {
    // 1. Byte order mark
    if let Some((encoding, _bom_len)) = Encoding::for_bom(bytes) {
        return encoding;
    }

    // 2. Plain UTF-8, which is what every modern briefing is written in
    if std::str::from_utf8(bytes).is_ok() {
        return encoding_rs::UTF_8;
    }

    // 3. <meta charset="..."> near the top of the file
    let head = &bytes[..bytes.len().min(SNIFF_LEN)];
    let head_str = String::from_utf8_lossy(head);
    if let Some(captures) = META_CHARSET_REGEX.captures(&head_str)
        && let Some(charset) = captures.get(1)
        && let Some(encoding) = Encoding::for_label(charset.as_str().to_lowercase().as_bytes())
    {
        return encoding;
    }

    // 4. Heuristic detection
    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(bytes, true);
    detector.guess(None, true)
}

fn decode_to_utf8(bytes: &[u8], encoding: &'static Encoding) -> Option<String> {
    let (decoded, _encoding, had_errors) = encoding.decode(bytes);
    if had_errors {
        return None;
    }
    Some(decoded.into_owned())
}
