use crate::domain::errors::DomainError;

const CNT_ARTICLE_TITLE_NOT_BLANK: &str = "articles_title_not_blank_chk";

#[must_use]
pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    let db_err = match err {
        sqlx::Error::Database(db_err) => db_err,
        other => return DomainError::Persistence(other.to_string()),
    };

    if let Some(constraint) = db_err.constraint() {
        return match constraint {
            CNT_ARTICLE_TITLE_NOT_BLANK => DomainError::Validation("title cannot be empty".into()),
            other => DomainError::Persistence(format!("database constraint violation: {other}")),
        };
    }

    match db_err.code().as_deref() {
        Some("22001") => DomainError::Validation("value too long for column".into()),
        Some("23514") => DomainError::Validation("check constraint violated".into()),
        _ => DomainError::Persistence(db_err.message().to_string()),
    }
}
