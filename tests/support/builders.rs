// tests/support/builders.rs
use chrono::{DateTime, Utc};

use articles_api::domain::article::*;

use super::mocks::fixed_now;

/// Builds stored articles directly, bypassing the command service.
pub struct ArticleBuilder {
    id: ArticleId,
    title: String,
    description: Option<String>,
    content: String,
    tags: Vec<String>,
    is_draft: bool,
    now: DateTime<Utc>,
}

impl ArticleBuilder {
    pub fn new() -> Self {
        Self {
            id: ArticleId::generate(),
            title: "Test Article".into(),
            description: None,
            content: "Test body".into(),
            tags: Vec::new(),
            is_draft: true,
            now: fixed_now(),
        }
    }

    pub fn id(mut self, id: ArticleId) -> Self {
        self.id = id;
        self
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = title.into();
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn content(mut self, content: &str) -> Self {
        self.content = content.into();
        self
    }

    pub fn tag(mut self, tag: &str) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn published(mut self) -> Self {
        self.is_draft = false;
        self
    }

    pub fn at(mut self, now: DateTime<Utc>) -> Self {
        self.now = now;
        self
    }

    pub fn build(self) -> Article {
        let mut new = NewArticle::new(
            ArticleTitle::new(self.title).unwrap(),
            self.description
                .map(|d| ArticleDescription::new(d).unwrap()),
            ArticleContent::new(self.content).unwrap(),
            ArticleTag::many(self.tags).unwrap(),
            self.is_draft,
            self.now,
        );
        new.id = self.id;
        new.into_article()
    }
}

impl Default for ArticleBuilder {
    fn default() -> Self {
        Self::new()
    }
}
