use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;
use uuid::Uuid;

pub const TITLE_MIN_LEN: usize = 3;
pub const DESCRIPTION_MIN_LEN: usize = 10;
pub const CONTENT_MIN_LEN: usize = 3;
pub const TAG_MIN_LEN: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArticleId(Uuid);

impl ArticleId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Accepts only the hyphenated 8-4-4-4-12 form; the simple, braced and
    /// `urn:uuid:` spellings `Uuid::parse_str` also understands are rejected.
    pub fn parse(value: &str) -> DomainResult<Self> {
        let invalid = || DomainError::Validation("Invalid article ID".into());
        if !is_hyphenated_uuid(value) {
            return Err(invalid());
        }
        Uuid::parse_str(value).map(Self).map_err(|_| invalid())
    }

    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for ArticleId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<ArticleId> for Uuid {
    fn from(value: ArticleId) -> Self {
        value.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

fn is_hyphenated_uuid(value: &str) -> bool {
    value.len() == 36
        && value.bytes().enumerate().all(|(i, b)| match i {
            8 | 13 | 18 | 23 => b == b'-',
            _ => b.is_ascii_hexdigit(),
        })
}

fn ensure_min_len(field: &str, value: &str, min: usize) -> DomainResult<()> {
    if value.chars().count() < min {
        return Err(DomainError::Validation(format!(
            "{field} must contain at least {min} character(s)"
        )));
    }
    Ok(())
}

/// Declares a string newtype whose constructor enforces a minimum length.
macro_rules! text_value_object {
    ($name:ident, $field:literal, $min:expr) => {
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> DomainResult<Self> {
                let value = value.into();
                ensure_min_len($field, &value, $min)?;
                Ok(Self(value))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

text_value_object!(ArticleTitle, "title", TITLE_MIN_LEN);
text_value_object!(ArticleDescription, "description", DESCRIPTION_MIN_LEN);
text_value_object!(ArticleContent, "content", CONTENT_MIN_LEN);
text_value_object!(ArticleTag, "tag", TAG_MIN_LEN);

impl ArticleTag {
    pub fn many<I, S>(values: I) -> DomainResult<Vec<Self>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        values.into_iter().map(Self::new).collect()
    }
}
