use std::collections::{HashMap, HashSet};
use std::ops::Deref;

use crate::application::registry::Registry;
use crate::domain::article::{Article, ArticleTitle};
use crate::domain::author::{Author, AuthorId};
use crate::domain::magazine::Magazine;

/// Read-only view of one magazine and the articles published in it.
#[derive(Debug, Clone, Copy)]
pub struct MagazineView<'r> {
    registry: &'r Registry,
    magazine: &'r Magazine,
}

impl<'r> MagazineView<'r> {
    pub(crate) fn new(registry: &'r Registry, magazine: &'r Magazine) -> Self {
        Self { registry, magazine }
    }

    pub fn magazine(&self) -> &'r Magazine {
        self.magazine
    }

    /// Articles published in this magazine, in registration order.
    pub fn articles(&self) -> Vec<&'r Article> {
        let id = self.magazine.id();
        self.registry
            .articles()
            .iter()
            .filter(|article| article.magazine() == id)
            .collect()
    }

    /// Distinct authors of this magazine's articles, first appearance first.
    pub fn contributors(&self) -> Vec<&'r Author> {
        let mut seen = HashSet::new();
        self.articles()
            .into_iter()
            .filter(|article| seen.insert(article.author()))
            .filter_map(|article| self.registry.author(article.author()))
            .collect()
    }

    /// Titles in registration order, or `None` when nothing is published.
    pub fn article_titles(&self) -> Option<Vec<&'r ArticleTitle>> {
        let titles: Vec<_> = self.articles().into_iter().map(Article::title).collect();
        if titles.is_empty() { None } else { Some(titles) }
    }

    /// Authors with more articles here than the configured threshold
    /// (strictly greater), in order of first appearance. `None` when no
    /// author qualifies.
    pub fn contributing_authors(&self) -> Option<Vec<&'r Author>> {
        let threshold = self.registry.config().contributor_threshold();
        let articles = self.articles();

        let mut counts: HashMap<AuthorId, usize> = HashMap::new();
        for article in &articles {
            *counts.entry(article.author()).or_default() += 1;
        }

        let mut seen = HashSet::new();
        let qualifying: Vec<_> = articles
            .into_iter()
            .map(Article::author)
            .filter(|id| counts.get(id).is_some_and(|count| *count > threshold))
            .filter(|id| seen.insert(*id))
            .filter_map(|id| self.registry.author(id))
            .collect();

        if qualifying.is_empty() {
            None
        } else {
            Some(qualifying)
        }
    }
}

impl Deref for MagazineView<'_> {
    type Target = Magazine;

    fn deref(&self) -> &Self::Target {
        self.magazine
    }
}
