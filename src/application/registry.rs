// src/application/registry.rs
//! Owned store for authors, magazines and articles.
//!
//! Every entity lives in exactly one `Registry` and is addressed by the typed
//! id the registry issued for it. Ids are sequential per entity kind and are
//! never reused, so the backing vectors stay sorted by id.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::application::ports::ClockPort;
use crate::application::queries::{AuthorView, MagazineView};
use crate::config::RegistryConfig;
use crate::domain::article::{Article, ArticleId, ArticleTitle, NewArticle};
use crate::domain::author::{Author, AuthorId, AuthorName};
use crate::domain::errors::{DomainResult, ValidationError};
use crate::domain::magazine::{Category, Magazine, MagazineId, MagazineName};
use crate::infrastructure::time::SystemClock;

pub struct Registry {
    config: RegistryConfig,
    clock: Arc<ClockPort>,
    authors: Vec<Author>,
    magazines: Vec<Magazine>,
    articles: Vec<Article>,
    next_author_id: i64,
    next_magazine_id: i64,
    next_article_id: i64,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("config", &self.config)
            .field("authors", &self.authors.len())
            .field("magazines", &self.magazines.len())
            .field("articles", &self.articles.len())
            .finish_non_exhaustive()
    }
}

impl Registry {
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    pub fn with_config(config: RegistryConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    pub fn with_clock(config: RegistryConfig, clock: Arc<ClockPort>) -> Self {
        Self {
            config,
            clock,
            authors: Vec::new(),
            magazines: Vec::new(),
            articles: Vec::new(),
            next_author_id: 1,
            next_magazine_id: 1,
            next_article_id: 1,
        }
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Drop every registered entity. Id sequences keep counting, so handles
    /// issued before the clear never resolve to a newer entity.
    pub fn clear(&mut self) {
        tracing::debug!(
            authors = self.authors.len(),
            magazines = self.magazines.len(),
            articles = self.articles.len(),
            "registry cleared"
        );
        self.authors.clear();
        self.magazines.clear();
        self.articles.clear();
    }

    /* -------------------------------- authors -------------------------------- */

    pub fn create_author(&mut self, name: impl Into<String>) -> DomainResult<AuthorId> {
        let name = AuthorName::new(name).inspect_err(|err| {
            tracing::debug!(error = %err, "author rejected");
        })?;
        Ok(self.register_author(name))
    }

    pub fn register_author(&mut self, name: AuthorName) -> AuthorId {
        let id = AuthorId(self.next_author_id);
        self.next_author_id += 1;
        self.authors.push(Author::new(id, name));
        tracing::debug!(author_id = %id, "author registered");
        id
    }

    pub fn author(&self, id: AuthorId) -> Option<&Author> {
        self.authors
            .binary_search_by_key(&id, Author::id)
            .ok()
            .map(|index| &self.authors[index])
    }

    pub fn author_view(&self, id: AuthorId) -> DomainResult<AuthorView<'_>> {
        let author = self.author(id).ok_or(ValidationError::UnknownAuthor(id))?;
        Ok(AuthorView::new(self, author))
    }

    /// Register a new article written by `author`.
    pub fn add_article(
        &mut self,
        author: AuthorId,
        magazine: MagazineId,
        title: impl Into<String>,
    ) -> DomainResult<ArticleId> {
        self.create_article(author, magazine, title)
    }

    /* ------------------------------- magazines ------------------------------- */

    pub fn create_magazine(
        &mut self,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> DomainResult<MagazineId> {
        let validated = MagazineName::new(name)
            .and_then(|name| Category::new(category).map(|category| (name, category)));
        let (name, category) = validated.inspect_err(|err| {
            tracing::debug!(error = %err, "magazine rejected");
        })?;
        Ok(self.register_magazine(name, category))
    }

    pub fn register_magazine(&mut self, name: MagazineName, category: Category) -> MagazineId {
        let id = MagazineId(self.next_magazine_id);
        self.next_magazine_id += 1;
        self.magazines.push(Magazine::new(id, name, category));
        tracing::debug!(magazine_id = %id, "magazine registered");
        id
    }

    pub fn magazine(&self, id: MagazineId) -> Option<&Magazine> {
        self.magazines
            .binary_search_by_key(&id, Magazine::id)
            .ok()
            .map(|index| &self.magazines[index])
    }

    fn magazine_mut(&mut self, id: MagazineId) -> DomainResult<&mut Magazine> {
        match self.magazines.binary_search_by_key(&id, Magazine::id) {
            Ok(index) => Ok(&mut self.magazines[index]),
            Err(_) => Err(ValidationError::UnknownMagazine(id)),
        }
    }

    pub fn magazine_view(&self, id: MagazineId) -> DomainResult<MagazineView<'_>> {
        let magazine = self
            .magazine(id)
            .ok_or(ValidationError::UnknownMagazine(id))?;
        Ok(MagazineView::new(self, magazine))
    }

    /// Every magazine in creation order.
    pub fn magazines(&self) -> &[Magazine] {
        &self.magazines
    }

    pub fn rename_magazine(&mut self, id: MagazineId, name: impl Into<String>) -> DomainResult<()> {
        let name = MagazineName::new(name).inspect_err(|err| {
            tracing::debug!(error = %err, magazine_id = %id, "rename rejected");
        })?;
        self.magazine_mut(id)?.set_name(name);
        tracing::debug!(magazine_id = %id, "magazine renamed");
        Ok(())
    }

    pub fn recategorize_magazine(
        &mut self,
        id: MagazineId,
        category: impl Into<String>,
    ) -> DomainResult<()> {
        let category = Category::new(category).inspect_err(|err| {
            tracing::debug!(error = %err, magazine_id = %id, "recategorize rejected");
        })?;
        self.magazine_mut(id)?.set_category(category);
        tracing::debug!(magazine_id = %id, "magazine recategorized");
        Ok(())
    }

    /// The magazine with the most articles, or `None` when no magazine has
    /// any. Ties go to the earliest-created magazine.
    pub fn top_publisher(&self) -> Option<&Magazine> {
        let mut counts: HashMap<MagazineId, usize> = HashMap::new();
        for article in &self.articles {
            *counts.entry(article.magazine()).or_default() += 1;
        }

        let mut top: Option<(&Magazine, usize)> = None;
        for magazine in &self.magazines {
            let count = counts.get(&magazine.id()).copied().unwrap_or(0);
            if count > top.map_or(0, |(_, best)| best) {
                top = Some((magazine, count));
            }
        }
        top.map(|(magazine, _)| magazine)
    }

    /* -------------------------------- articles ------------------------------- */

    /// Validate author, magazine and title, in that order, and register the
    /// article. Nothing is registered when any check fails.
    pub fn create_article(
        &mut self,
        author: AuthorId,
        magazine: MagazineId,
        title: impl Into<String>,
    ) -> DomainResult<ArticleId> {
        self.ensure_author(author)?;
        self.ensure_magazine(magazine)?;
        let title = ArticleTitle::new(title).inspect_err(|err| {
            tracing::debug!(error = %err, "article rejected");
        })?;
        self.register_article(author, magazine, title)
    }

    pub fn register_article(
        &mut self,
        author: AuthorId,
        magazine: MagazineId,
        title: ArticleTitle,
    ) -> DomainResult<ArticleId> {
        self.ensure_author(author)?;
        self.ensure_magazine(magazine)?;

        let id = ArticleId(self.next_article_id);
        self.next_article_id += 1;
        let new = NewArticle {
            author,
            magazine,
            title,
            created_at: self.clock.now(),
        };
        self.articles.push(Article::from_new(id, new));
        tracing::debug!(
            article_id = %id,
            author_id = %author,
            magazine_id = %magazine,
            "article registered"
        );
        Ok(id)
    }

    pub fn article(&self, id: ArticleId) -> Option<&Article> {
        self.articles
            .binary_search_by_key(&id, Article::id)
            .ok()
            .map(|index| &self.articles[index])
    }

    fn article_mut(&mut self, id: ArticleId) -> DomainResult<&mut Article> {
        match self.articles.binary_search_by_key(&id, Article::id) {
            Ok(index) => Ok(&mut self.articles[index]),
            Err(_) => Err(ValidationError::UnknownArticle(id)),
        }
    }

    /// Every article in registration order.
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn reassign_author(&mut self, article: ArticleId, author: AuthorId) -> DomainResult<()> {
        self.ensure_author(author)?;
        self.article_mut(article)?.set_author(author);
        tracing::debug!(article_id = %article, author_id = %author, "article author reassigned");
        Ok(())
    }

    pub fn reassign_magazine(
        &mut self,
        article: ArticleId,
        magazine: MagazineId,
    ) -> DomainResult<()> {
        self.ensure_magazine(magazine)?;
        self.article_mut(article)?.set_magazine(magazine);
        tracing::debug!(
            article_id = %article,
            magazine_id = %magazine,
            "article magazine reassigned"
        );
        Ok(())
    }

    fn ensure_author(&self, id: AuthorId) -> DomainResult<()> {
        if self.author(id).is_none() {
            let err = ValidationError::UnknownAuthor(id);
            tracing::debug!(error = %err, "article rejected");
            return Err(err);
        }
        Ok(())
    }

    fn ensure_magazine(&self, id: MagazineId) -> DomainResult<()> {
        if self.magazine(id).is_none() {
            let err = ValidationError::UnknownMagazine(id);
            tracing::debug!(error = %err, "article rejected");
            return Err(err);
        }
        Ok(())
    }
}
