use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

/// Maximum number of characters a stored title may hold.
pub const TITLE_MAX_CHARS: usize = 120;

/// Title used when generation produced nothing that could serve as one.
pub const UNTITLED: &str = "Untitled";

/// Returns the longest prefix of `value` holding at most `max` characters.
#[must_use]
pub fn truncate_chars(value: &str, max: usize) -> &str {
    value
        .char_indices()
        .nth(max)
        .map_or(value, |(idx, _)| &value[..idx])
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArticleId(pub i64);

impl ArticleId {
    /// # Errors
    ///
    /// Returns [`DomainError::Validation`] unless `id` is positive.
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "article id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ArticleId> for i64 {
    fn from(value: ArticleId) -> Self {
        value.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A non-blank display title. Over-long input is truncated to
/// [`TITLE_MAX_CHARS`] instead of being rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleTitle(String);

impl ArticleTitle {
    /// # Errors
    ///
    /// Returns [`DomainError::Validation`] when `value` is blank.
    pub fn new(value: impl AsRef<str>) -> DomainResult<Self> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(DomainError::Validation("title cannot be empty".into()));
        }
        let truncated = truncate_chars(trimmed, TITLE_MAX_CHARS).trim_end();
        Ok(Self(truncated.to_string()))
    }

    #[must_use]
    pub fn untitled() -> Self {
        Self(UNTITLED.to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ArticleTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ArticleTitle> for String {
    fn from(value: ArticleTitle) -> Self {
        value.0
    }
}

/// Article body. Empty content is allowed: generation may yield no usable body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleContent(String);

impl ArticleContent {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ArticleContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ArticleContent> for String {
    fn from(value: ArticleContent) -> Self {
        value.0
    }
}
