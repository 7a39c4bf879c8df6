use std::collections::HashSet;
use std::ops::Deref;

use crate::application::registry::Registry;
use crate::domain::article::Article;
use crate::domain::author::Author;
use crate::domain::magazine::{Category, Magazine};

/// Read-only view of one author and the articles that reference it.
#[derive(Debug, Clone, Copy)]
pub struct AuthorView<'r> {
    registry: &'r Registry,
    author: &'r Author,
}

impl<'r> AuthorView<'r> {
    pub(crate) fn new(registry: &'r Registry, author: &'r Author) -> Self {
        Self { registry, author }
    }

    pub fn author(&self) -> &'r Author {
        self.author
    }

    /// Articles written by this author, in registration order.
    pub fn articles(&self) -> Vec<&'r Article> {
        let id = self.author.id();
        self.registry
            .articles()
            .iter()
            .filter(|article| article.author() == id)
            .collect()
    }

    /// Distinct magazines this author has written for, first appearance first.
    pub fn magazines(&self) -> Vec<&'r Magazine> {
        let mut seen = HashSet::new();
        self.articles()
            .into_iter()
            .filter(|article| seen.insert(article.magazine()))
            .filter_map(|article| self.registry.magazine(article.magazine()))
            .collect()
    }

    /// Distinct categories of this author's magazines, or `None` when the
    /// author has no articles.
    pub fn topic_areas(&self) -> Option<Vec<&'r Category>> {
        let magazines = self.magazines();
        if magazines.is_empty() {
            return None;
        }

        let mut seen = HashSet::new();
        Some(
            magazines
                .into_iter()
                .map(Magazine::category)
                .filter(|category| {
                    let category: &'r Category = *category;
                    seen.insert(category.as_str())
                })
                .collect(),
        )
    }
}

impl Deref for AuthorView<'_> {
    type Target = Author;

    fn deref(&self) -> &Self::Target {
        self.author
    }
}
