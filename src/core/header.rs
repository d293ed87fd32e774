//! Course header normalization and parsing.
//!
//! A header looks like `L ARCH 300 Advanced Landscape Topics (5) I&S`:
//! subject code, course number, title, credits in parentheses and optional
//! area-of-knowledge tags, which are dropped.

use crate::domain::model::CourseRecord;
use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

static HEADER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<code>[A-Z]+(?:\s+[A-Z]+)*\s+\d+[A-Z]?)\s+(?P<title>.+?)\s*\((?P<credits>[^)]*)\)\s*(?P<tags>.*)?$",
    )
    .expect("course header pattern is valid")
});

/// NFKC-normalize, turn non-breaking spaces into spaces, collapse whitespace runs and trim.
pub fn normalize_header(raw: &str) -> String {
    let normalized: String = raw.nfkc().collect::<String>().replace('\u{a0}', " ");
    normalized.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Parse a raw header line. Lines that don't fit the header shape yield `None`.
pub fn parse_header(raw: &str) -> Option<CourseRecord> {
    let header = normalize_header(raw);
    let caps = HEADER_PATTERN.captures(&header)?;

    Some(CourseRecord {
        code: caps["code"].replace(' ', ""),
        title: caps["title"].to_string(),
        credits: caps["credits"].to_string(),
    })
}
