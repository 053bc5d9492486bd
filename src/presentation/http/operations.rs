//! Static catalogue of the article operations.
//!
//! The router, the OpenAPI document and the error mapping all key off this
//! enum, so callers can enumerate the API surface without a running server.
use axum::http::{Method, StatusCode};

/// Prefix under which every article operation is mounted.
pub const ARTICLES_BASE_PATH: &str = "/articles";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArticleOperation {
    List,
    Get,
    Create,
    Update,
    Delete,
}

impl ArticleOperation {
    pub const ALL: [Self; 5] = [
        Self::List,
        Self::Get,
        Self::Create,
        Self::Update,
        Self::Delete,
    ];

    pub const fn method(self) -> Method {
        match self {
            Self::List | Self::Get => Method::GET,
            Self::Create => Method::POST,
            Self::Update => Method::PUT,
            Self::Delete => Method::DELETE,
        }
    }

    /// Path template in OpenAPI notation.
    pub const fn path(self) -> &'static str {
        match self {
            Self::List | Self::Create => "/articles",
            Self::Get | Self::Update | Self::Delete => "/articles/{id}",
        }
    }

    pub const fn operation_id(self) -> &'static str {
        match self {
            Self::List => "list_articles",
            Self::Get => "get_article",
            Self::Create => "create_article",
            Self::Update => "update_article",
            Self::Delete => "delete_article",
        }
    }

    pub const fn success_status(self) -> StatusCode {
        match self {
            Self::Create => StatusCode::CREATED,
            _ => StatusCode::OK,
        }
    }

    /// Public message for unexpected failures; internal detail is never sent.
    pub const fn failure_message(self) -> &'static str {
        match self {
            Self::List => "Failed to fetch articles",
            Self::Get => "Failed to fetch article",
            Self::Create => "Failed to create article",
            Self::Update => "Failed to update article",
            Self::Delete => "Failed to delete article",
        }
    }

    pub const fn takes_id(self) -> bool {
        matches!(self, Self::Get | Self::Update | Self::Delete)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn operations_are_distinct_routes() {
        let routes: HashSet<_> = ArticleOperation::ALL
            .iter()
            .map(|op| (op.method(), op.path()))
            .collect();
        assert_eq!(routes.len(), ArticleOperation::ALL.len());
    }

    #[test]
    fn every_operation_lives_under_the_base_path() {
        for op in ArticleOperation::ALL {
            assert!(op.path().starts_with(ARTICLES_BASE_PATH));
            assert_eq!(op.takes_id(), op.path().ends_with("{id}"));
        }
    }
}
