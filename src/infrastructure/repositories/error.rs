use crate::domain::{article::DUPLICATE_TITLE, errors::DomainError};

const CNT_ARTICLE_TITLE: &str = "articles_title_key";
const CNT_ARTICLE_DRAFT_CHECK: &str = "articles_draft_unpublished_chk";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_ARTICLE_TITLE => DomainError::Conflict(DUPLICATE_TITLE.into()),
                    CNT_ARTICLE_DRAFT_CHECK => {
                        DomainError::Validation("draft articles cannot have published_at".into())
                    }
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
