// src/domain/author/entity.rs
use crate::domain::author::value_objects::{AuthorId, AuthorName};
use serde::Serialize;

/// A named contributor. The name is fixed once the author is registered;
/// articles, magazines and topic areas are derived from the article registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Author {
    id: AuthorId,
    name: AuthorName,
}

impl Author {
    pub(crate) fn new(id: AuthorId, name: AuthorName) -> Self {
        Self { id, name }
    }

    pub fn id(&self) -> AuthorId {
        self.id
    }

    pub fn name(&self) -> &AuthorName {
        &self.name
    }
}
