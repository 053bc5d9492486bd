// tests/support/mocks/article_repos.rs
use articles_api::domain::article::{
    ARTICLE_NOT_FOUND, Article, ArticleId, ArticleReadRepository, ArticleUpdate,
    ArticleWriteRepository, DUPLICATE_TITLE, NewArticle,
};
use articles_api::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/* -------------------------------- InMemoryArticleRepo -------------------------------- */

/// Stand-in for the Postgres repositories. Enforces unique titles and
/// reports missing rows the same way, and counts every call it receives.
#[derive(Default)]
pub struct InMemoryArticleRepo {
    articles: Mutex<Vec<Article>>,
    calls: AtomicUsize,
}

impl InMemoryArticleRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_articles(articles: impl IntoIterator<Item = Article>) -> Self {
        Self {
            articles: Mutex::new(articles.into_iter().collect()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.articles.lock().unwrap().len()
    }

    pub fn get(&self, id: ArticleId) -> Option<Article> {
        self.articles
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.id == id)
            .cloned()
    }

    fn touch(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleRepo {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        self.touch();
        let mut articles = self.articles.lock().unwrap();
        if articles.iter().any(|a| a.title == article.title) {
            return Err(DomainError::Conflict(DUPLICATE_TITLE.into()));
        }
        let article = article.into_article();
        articles.push(article.clone());
        Ok(article)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        self.touch();
        let mut articles = self.articles.lock().unwrap();
        let index = articles
            .iter()
            .position(|a| a.id == update.id)
            .ok_or_else(|| DomainError::NotFound(ARTICLE_NOT_FOUND.into()))?;

        if let Some(title) = &update.title {
            if articles
                .iter()
                .any(|a| a.id != update.id && &a.title == title)
            {
                return Err(DomainError::Conflict(DUPLICATE_TITLE.into()));
            }
        }

        let article = &mut articles[index];
        article.apply(update);
        Ok(article.clone())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        self.touch();
        let mut articles = self.articles.lock().unwrap();
        let before = articles.len();
        articles.retain(|a| a.id != id);
        if articles.len() == before {
            return Err(DomainError::NotFound(ARTICLE_NOT_FOUND.into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleRepo {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        self.touch();
        Ok(self.get(id))
    }

    async fn list(&self) -> DomainResult<Vec<Article>> {
        self.touch();
        Ok(self.articles.lock().unwrap().clone())
    }
}

/* -------------------------------- FailingArticleRepo -------------------------------- */

/// Detail that must never reach a response body.
pub const INTERNAL_DETAIL: &str = "connection refused (os error 111) at 10.0.0.5:5432";

/// Behaves like an unreachable database.
pub struct FailingArticleRepo;

fn unreachable_db<T>() -> DomainResult<T> {
    Err(DomainError::Persistence(INTERNAL_DETAIL.into()))
}

#[async_trait]
impl ArticleWriteRepository for FailingArticleRepo {
    async fn insert(&self, _article: NewArticle) -> DomainResult<Article> {
        unreachable_db()
    }

    async fn update(&self, _update: ArticleUpdate) -> DomainResult<Article> {
        unreachable_db()
    }

    async fn delete(&self, _id: ArticleId) -> DomainResult<()> {
        unreachable_db()
    }
}

#[async_trait]
impl ArticleReadRepository for FailingArticleRepo {
    async fn find_by_id(&self, _id: ArticleId) -> DomainResult<Option<Article>> {
        unreachable_db()
    }

    async fn list(&self) -> DomainResult<Vec<Article>> {
        unreachable_db()
    }
}
