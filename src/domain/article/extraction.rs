// src/domain/article/extraction.rs
//! Title/body extraction for free-form generated text.
//!
//! Model output has no guaranteed shape, so [`extract`] walks a fixed
//! fallback chain and always returns a pair:
//!
//! 1. two or more non-empty lines: first line is the title, the remaining
//!    lines become the body separated by blank lines;
//! 2. two or more `". "`-delimited sentences: first sentence is the title,
//!    the rest is rejoined with `". "`;
//! 3. otherwise the raw text is used for both (title truncated).

use super::value_objects::{TITLE_MAX_CHARS, truncate_chars};

const SENTENCE_DELIMITER: &str = ". ";
const PARAGRAPH_SEPARATOR: &str = "\n\n";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedArticle {
    pub title: String,
    pub body: String,
}

impl ExtractedArticle {
    fn new(title: &str, body: String) -> Self {
        Self {
            title: truncate_chars(title, TITLE_MAX_CHARS).to_string(),
            body,
        }
    }
}

#[must_use]
pub fn extract(raw: &str) -> ExtractedArticle {
    let lines = non_empty_segments(raw.split('\n'));
    if let [title, rest @ ..] = lines.as_slice() {
        if !rest.is_empty() {
            return ExtractedArticle::new(title, rest.join(PARAGRAPH_SEPARATOR));
        }
    }

    let sentences = non_empty_segments(raw.split(SENTENCE_DELIMITER));
    if let [title, rest @ ..] = sentences.as_slice() {
        if !rest.is_empty() {
            return ExtractedArticle::new(title, rest.join(SENTENCE_DELIMITER));
        }
    }

    ExtractedArticle::new(raw, raw.to_string())
}

fn non_empty_segments<'a>(segments: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    segments
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .collect()
}
