// src/infrastructure/seed_corpus.rs
use crate::domain::article::{ArticleContent, ArticleTitle, NewArticle};
use crate::domain::errors::DomainResult;

/// Fallback articles inserted on first boot, as `(title, content)` pairs.
pub const DEFAULT_SEED_ARTICLES: &[(&str, &str)] = &[
    (
        "The Rise of Everyday AI Tools",
        "Artificial intelligence is quietly becoming part of daily life, powering apps that help us write, search, and create. As AI grows more intuitive, it\u{2019}s reshaping how people work and communicate without requiring any technical expertise.",
    ),
    (
        "How Machine Learning Models Learn",
        "Modern ML models improve by analyzing large amounts of data and detecting patterns rather than following fixed instructions. This process allows them to adapt, recognize images, predict text, and tackle tasks that once required explicit programming.",
    ),
    (
        "The Future of Consumer Tech",
        "Advances in spatial computing, edge AI, and wearable devices promise a new wave of personalized tech experiences. As devices become smaller and smarter, technology will increasingly adapt to people\u{2014}making digital interactions more seamless than ever.",
    ),
];

/// # Errors
///
/// Returns a validation error when an entry has a blank title.
pub fn corpus_from(entries: &[(&str, &str)]) -> DomainResult<Vec<NewArticle>> {
    entries
        .iter()
        .map(|(title, content)| {
            Ok(NewArticle::new(
                ArticleTitle::new(title)?,
                ArticleContent::new(*content),
            ))
        })
        .collect()
}

/// # Errors
///
/// Same as [`corpus_from`].
pub fn default_corpus() -> DomainResult<Vec<NewArticle>> {
    corpus_from(DEFAULT_SEED_ARTICLES)
}
